//! Makefile documentation scanner: a line-by-line state machine.
//!
//! Walks raw makefile text, recognizes `##` documentation-comment lines
//! and target-declaration lines, and binds each contiguous comment block
//! to the target declared on the line that immediately follows it. The
//! rest of the makefile grammar (variable expansion, includes, pattern
//! rules, conditionals) is out of scope: unrecognized lines never fail,
//! they only reset the pending comment block.

use regex::Regex;
use std::sync::LazyLock;

/// Target-declaration shape: a bare identifier at column 0 immediately
/// followed by a colon. Anything after the colon (prerequisites, a
/// second colon) is irrelevant here.
static RE_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9._-]+):").unwrap());

// -- Scanner output -----------------------------------------------------------

/// A unit of scanner output.
#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    /// A target name paired with the comment block that precedes its
    /// declaration, comment lines joined by single line feeds. Targets
    /// without a preceding block produce no node at all.
    TargetComment { target: String, value: String },
}

// -- Line classification ------------------------------------------------------

/// One line of makefile text, classified by shape.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `##` documentation comment, marker and at most one space stripped.
    Comment(&'a str),
    /// Target declaration; the name before the first colon.
    Target(&'a str),
    /// Anything else: blank lines, recipe lines, variable assignments,
    /// unmatched text.
    Other,
}

/// Classify a single line. Pure; never fails.
///
/// The `##` marker must start the line, so an indented marker is recipe
/// or continuation text. Stripping removes the marker and at most one
/// following space: `##  x` keeps one leading space, `##x` is still a
/// comment, and a bare `##` yields the empty string (a paragraph
/// separator inside the block). Tab-indented lines are recipe bodies
/// and can never declare a target.
fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix("##") {
        return Line::Comment(rest.strip_prefix(' ').unwrap_or(rest));
    }
    if let Some(name) = RE_TARGET.captures(line).and_then(|caps| caps.get(1)) {
        return Line::Target(name.as_str());
    }
    Line::Other
}

// -- Scanning -----------------------------------------------------------------

/// Scan makefile text into an ordered sequence of nodes.
///
/// A single forward pass holding one piece of state, the pending comment
/// block. A block survives only by sitting immediately above a
/// target-declaration line: any other line discards it, a target line
/// flushes it into a [`Node::TargetComment`], and end of input drops
/// whatever is still pending. A target with no preceding block emits
/// nothing. Empty input yields an empty sequence.
pub fn parse(input: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for line in input.lines() {
        match classify(line) {
            Line::Comment(text) => pending.push(text),
            Line::Target(name) => {
                if !pending.is_empty() {
                    nodes.push(Node::TargetComment {
                        target: name.to_string(),
                        value: pending.join("\n"),
                    });
                    pending.clear();
                }
            }
            Line::Other => pending.clear(),
        }
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_comment(target: &str, value: &str) -> Node {
        Node::TargetComment {
            target: target.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn text_without_doc_comments_yields_nothing() {
        let input = "VAR = 1\n\nbuild: deps\n\tcc -o out main.c\n\nclean:\n\trm -rf out\n";
        assert!(parse(input).is_empty());
    }

    #[test]
    fn block_binds_to_following_target() {
        let input = "## Build the thing\nbuild: deps\n\tcc -o out main.c\n";
        assert_eq!(parse(input), vec![target_comment("build", "Build the thing")]);
    }

    #[test]
    fn multi_paragraph_block_is_joined_verbatim() {
        let input = "## Something does this\n##\n## And then it does that\n##\n## And then this\nsomething:\n\t$(info hi there)\n";
        assert_eq!(
            parse(input),
            vec![target_comment(
                "something",
                "Something does this\n\nAnd then it does that\n\nAnd then this"
            )]
        );
    }

    #[test]
    fn blank_line_discards_pending_block() {
        let input = "## orphaned\n\nbuild:\n";
        assert!(parse(input).is_empty());
    }

    #[test]
    fn recipe_line_discards_pending_block() {
        let input = "## orphaned\n\t$(info recipe)\nbuild:\n";
        assert!(parse(input).is_empty());
    }

    #[test]
    fn plain_comment_discards_pending_block() {
        // A single-marker comment is not a documentation line.
        let input = "## orphaned\n# just a note\nbuild:\n";
        assert!(parse(input).is_empty());
    }

    #[test]
    fn assignment_discards_pending_block() {
        let input = "## orphaned\nCC = gcc\nbuild:\n";
        assert!(parse(input).is_empty());
    }

    #[test]
    fn trailing_block_is_dropped_at_end_of_input() {
        assert!(parse("## dangling\n## comment").is_empty());
    }

    #[test]
    fn target_without_block_emits_nothing() {
        let input = "## documented\ndocumented:\nundocumented:\n";
        assert_eq!(parse(input), vec![target_comment("documented", "documented")]);
    }

    #[test]
    fn prerequisites_do_not_affect_the_target_name() {
        let input = "## Run everything\nall: build test lint\n";
        assert_eq!(parse(input), vec![target_comment("all", "Run everything")]);
    }

    #[test]
    fn marker_without_space_is_still_a_comment() {
        let input = "##tight\nbuild:\n";
        assert_eq!(parse(input), vec![target_comment("build", "tight")]);
    }

    #[test]
    fn only_one_space_is_stripped_after_the_marker() {
        let input = "##  indented\nbuild:\n";
        assert_eq!(parse(input), vec![target_comment("build", " indented")]);
    }

    #[test]
    fn indented_marker_is_not_a_comment() {
        assert!(parse("  ## shifted\nbuild:\n").is_empty());
        assert!(parse("\t## shifted\nbuild:\n").is_empty());
    }

    #[test]
    fn indented_declaration_is_not_a_target() {
        assert!(parse("## doc\n  build:\n").is_empty());
        assert!(parse("## doc\n\tbuild:\n").is_empty());
    }

    #[test]
    fn duplicate_declarations_each_emit_a_node() {
        let input = "## first\nbuild:\n## second\nbuild:\n";
        assert_eq!(
            parse(input),
            vec![target_comment("build", "first"), target_comment("build", "second")]
        );
    }

    #[test]
    fn target_names_may_contain_dots_dashes_and_underscores() {
        let input = "## phony list\n.PHONY: all\n## dist build\nbuild-dist_v2.1:\n";
        assert_eq!(
            parse(input),
            vec![
                target_comment(".PHONY", "phony list"),
                target_comment("build-dist_v2.1", "dist build"),
            ]
        );
    }

    #[test]
    fn crlf_input_parses_the_same() {
        let input = "## Build the thing\r\nbuild:\r\n";
        assert_eq!(parse(input), vec![target_comment("build", "Build the thing")]);
    }

    #[test]
    fn missing_trailing_newline_is_fine() {
        let input = "## Build the thing\nbuild:";
        assert_eq!(parse(input), vec![target_comment("build", "Build the thing")]);
    }

    #[test]
    fn classify_is_a_pure_three_way_split() {
        assert_eq!(classify("## doc"), Line::Comment("doc"));
        assert_eq!(classify("##"), Line::Comment(""));
        assert_eq!(classify("build: deps"), Line::Target("build"));
        assert_eq!(classify("build::"), Line::Target("build"));
        assert_eq!(classify(""), Line::Other);
        assert_eq!(classify("\tcc -o out main.c"), Line::Other);
        assert_eq!(classify(".DEFAULT_GOAL := build"), Line::Other);
        assert_eq!(classify("not a target"), Line::Other);
    }
}
