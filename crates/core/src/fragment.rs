//! Named HTML fragments — the unit of the partial-update response.
//!
//! A turn produces a `FragmentSet`: an ordered list of independently
//! addressable pieces of markup. The client-side patch mechanism applies
//! them in document order, so the set keeps the reply fragment first and
//! any auxiliary fragments (the re-rendered transcript) after it.

use serde::{Deserialize, Serialize};

/// Fragment name for the primary reply region.
pub const REPLY_FRAGMENT: &str = "response";

/// Fragment name for the running transcript region.
pub const TRANSCRIPT_FRAGMENT: &str = "recent-message-list";

/// A named, self-contained piece of the response body, targeting one
/// DOM region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// The DOM region this fragment patches
    pub name: String,

    /// Rendered markup, already escaped by the rendering boundary
    pub html: String,
}

impl Fragment {
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
        }
    }
}

/// The ordered collection of fragments produced by one orchestrated turn.
///
/// Invariant: the first fragment bears the reply (or the user-visible
/// error standing in for it); auxiliary fragments follow in the order
/// they should be applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSet {
    fragments: Vec<Fragment>,
}

impl FragmentSet {
    /// Start a set from its primary fragment.
    pub fn primary(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    /// Append an auxiliary fragment after the primary one.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }
}

impl<'a> IntoIterator for &'a FragmentSet {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
