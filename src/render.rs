//! Help-line rendering.

use crate::model::DocElement;
use colored::Colorize;

/// Width of the target-name column.
const TARGET_WIDTH: usize = 30;

/// Render one target's help line.
///
/// The line is `<target><padding><short description>` with the target
/// cell padded to `TARGET_WIDTH`; names that overflow the cell get no
/// padding and are never truncated. Padding is computed from the bare
/// name so colorized output keeps its columns. With `verbose`, a
/// non-empty long description follows on its own lines plus one blank
/// line.
///
/// Pure: nothing is retained between calls. With `colorize` the target
/// is green, or blue for the default goal, and the short description
/// cyan; without it no color is applied at all. Whether forced escapes
/// actually reach a non-tty consumer is left to the `colored` runtime
/// controls (`NO_COLOR`, `CLICOLOR_FORCE`).
pub fn render(element: &DocElement, verbose: bool, colorize: bool) -> String {
    let padding = " ".repeat(TARGET_WIDTH.saturating_sub(element.target.len()));
    let (target, short) = if colorize {
        let name = if element.is_default {
            element.target.blue()
        } else {
            element.target.green()
        };
        (
            name.to_string(),
            element.short_description.cyan().to_string(),
        )
    } else {
        (element.target.clone(), element.short_description.clone())
    };

    let mut out = format!("{}{}{}\n", target, padding, short);
    if verbose && !element.long_description.is_empty() {
        out.push_str(&element.long_description);
        out.push_str("\n\n");
    }
    out
}
