//! Default-goal detection.
//!
//! A makefile can name the target that runs when `make` is invoked with
//! no arguments via a `.DEFAULT_GOAL` assignment. This scan works on the
//! raw text and is independent of the documentation scanner.

use regex::Regex;
use std::sync::LazyLock;

/// `.DEFAULT_GOAL`, an assignment operator of at most two characters
/// (`=`, `:=`, `?=`), then the goal name captured to end of line.
static RE_DEFAULT_GOAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.DEFAULT_GOAL\s*[?=:]{1,2}\s*(.*)").unwrap());

/// Extract the declared default goal, if any.
///
/// The first match anywhere in the text wins; the captured name is not
/// trimmed. Files without such a declaration yield `None`.
pub fn default_goal(text: &str) -> Option<&str> {
    RE_DEFAULT_GOAL
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
