//! Document assembly: makefiles in, name-keyed documentation out.

use crate::goal;
use crate::model::{DocElement, DocElements};
use crate::parser::{self, Node};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Load the documentation of the provided makefiles.
///
/// Files are read and scanned in the order given. Each file's text is
/// captured once and handed to both the default-goal detector and the
/// scanner. A target that appears in a later file fully replaces the
/// earlier entry, default-goal flag included (it is recomputed from the
/// later file alone, never merged). Any read failure aborts the whole
/// load; there is no partial result.
pub fn load(files: &[PathBuf]) -> Result<DocElements> {
    let mut all = DocElements::new();
    for path in files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let default_goal = goal::default_goal(&text);

        for node in parser::parse(&text) {
            match node {
                Node::TargetComment { target, value } => {
                    let (short, long) = split_description(&value);
                    let is_default = default_goal == Some(target.as_str());
                    all.insert(
                        target.clone(),
                        DocElement {
                            target,
                            short_description: short,
                            long_description: long,
                            is_default,
                        },
                    );
                }
            }
        }
    }
    Ok(all)
}

/// Split a joined comment block on the first blank-line boundary into
/// short and long descriptions. A block with no boundary is all short.
fn split_description(value: &str) -> (String, String) {
    match value.split_once("\n\n") {
        Some((short, long)) => (short.to_string(), long.to_string()),
        None => (value.to_string(), String::new()),
    }
}
