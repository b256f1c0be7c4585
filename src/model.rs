//! Data model for target documentation.

use std::collections::BTreeMap;

/// A single target and its associated documentation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocElement {
    pub target: String,
    /// First paragraph of the comment block.
    pub short_description: String,
    /// Remaining paragraphs; empty when the block has only one.
    pub long_description: String,
    /// True when the target is the makefile's declared default goal.
    pub is_default: bool,
}

/// All documented targets, keyed by target name.
///
/// Insertion overwrites, so when the same name appears in several
/// makefiles the last one loaded wins. Iteration is name-ordered, which
/// is the order the listing is presented in.
pub type DocElements = BTreeMap<String, DocElement>;
