//! Prompt assembly — composing the turn sequence submitted to the
//! generation client.
//!
//! Pure function, no I/O. Windowing is not done here: the memory adapter
//! already applied its history ceiling to the turns it handed over.

use tessera_core::turn::Turn;

/// Build the submission sequence: the stored session turns followed by a
/// synthetic user turn wrapping the new message. Inputs are not mutated.
pub fn assemble(session_turns: &[Turn], new_message: &str) -> Vec<Turn> {
    let next_seq = session_turns
        .last()
        .map(|t| t.sequence_no + 1)
        .unwrap_or(0);

    let mut turns = Vec::with_capacity(session_turns.len() + 1);
    turns.extend_from_slice(session_turns);
    turns.push(Turn::user(new_message, next_seq));
    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::turn::Role;

    #[test]
    fn empty_history_yields_single_user_turn() {
        let turns = assemble(&[], "hi");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].text, "hi");
        assert_eq!(turns[0].sequence_no, 0);
    }

    #[test]
    fn history_precedes_the_new_message() {
        let history = vec![Turn::user("hi", 0), Turn::assistant("hello", 1)];
        let turns = assemble(&history, "how are you");

        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].text, "hi");
        assert_eq!(turns[1].text, "hello");
        assert_eq!(turns[2].text, "how are you");
        assert_eq!(turns[2].sequence_no, 2);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let history = vec![Turn::user("hi", 0)];
        let before = history.clone();
        let _ = assemble(&history, "more");
        assert_eq!(history, before);
    }

    #[test]
    fn sequence_continues_after_windowed_history() {
        // A windowed read can start mid-session; the synthetic turn
        // still continues from the last visible sequence number.
        let history = vec![Turn::user("q", 6), Turn::assistant("a", 7)];
        let turns = assemble(&history, "next");
        assert_eq!(turns.last().unwrap().sequence_no, 8);
    }
}
