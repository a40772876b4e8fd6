//! Response encoding — one fragment set becomes one HTML payload.
//!
//! The fragments are concatenated in set order. htmx swaps the first
//! element into the request's target and routes the rest by their
//! `hx-swap-oob` markers, so order in the payload is what guarantees
//! the reply lands before any auxiliary content.

use tessera_core::fragment::FragmentSet;

/// Join the fragments of a set into a single response body, preserving
/// set order.
pub fn encode(set: &FragmentSet) -> String {
    let mut body = String::new();
    for fragment in set.iter() {
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&fragment.html);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::fragment::{Fragment, FragmentSet, REPLY_FRAGMENT, TRANSCRIPT_FRAGMENT};

    #[test]
    fn single_fragment_passes_through() {
        let set = FragmentSet::primary(Fragment::new(REPLY_FRAGMENT, "<p>hi</p>"));
        assert_eq!(encode(&set), "<p>hi</p>");
    }

    #[test]
    fn reply_bytes_precede_auxiliary_bytes() {
        let mut set = FragmentSet::primary(Fragment::new(REPLY_FRAGMENT, "<p>the reply</p>"));
        set.push(Fragment::new(
            TRANSCRIPT_FRAGMENT,
            r#"<ul id="recent-message-list" hx-swap-oob="true"></ul>"#,
        ));

        let body = encode(&set);
        let reply_at = body.find("the reply").unwrap();
        let aux_at = body.find("recent-message-list").unwrap();
        assert!(reply_at < aux_at);
    }

    #[test]
    fn empty_set_encodes_to_nothing() {
        let set = FragmentSet::default();
        assert_eq!(encode(&set), "");
    }
}
