mod load;
mod parse;
mod tree;

pub use load::load_content_tree;
pub use tree::{ContentTree, TreeNode};

#[cfg(test)]
pub(crate) use tree::tests;
