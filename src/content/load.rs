use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::parse::parse_content_tree;
use super::tree::ContentTree;

const BUNDLED_TREE: &str = include_str!("../../assets/kka_galaxy.json");

/// Loads the content tree from `path`, or the bundled KKA dataset when absent.
pub fn load_content_tree(path: Option<&Path>) -> Result<ContentTree> {
    let tree = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read content tree {}", path.display()))?;
            parse_content_tree(&raw)
                .with_context(|| format!("failed to parse content tree {}", path.display()))?
        }
        None => parse_content_tree(BUNDLED_TREE).context("bundled content tree is invalid")?,
    };

    for id in tree.duplicate_ids() {
        log::warn!("content tree id {id:?} is not unique; selection resolves to its first occurrence");
    }

    log::info!(
        "loaded content tree rooted at {:?} with {} nodes (depth {})",
        tree.root().id,
        tree.node_count(),
        tree.max_depth()
    );

    Ok(tree)
}
