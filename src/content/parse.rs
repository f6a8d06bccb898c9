use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::tree::{ContentTree, TreeNode};

/// Every node must carry all of its keys; empty arrays are fine, absent keys are not.
pub(super) fn parse_content_tree(raw: &str) -> Result<ContentTree> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON in content tree")?;
    if !parsed.is_object() {
        return Err(anyhow!("content tree must be a JSON object"));
    }

    let root = TreeNode::deserialize(&parsed).context("invalid content tree node")?;
    Ok(ContentTree::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "id": "center",
        "label": "Center",
        "content": { "description": "d", "keyPoints": ["one", "two"], "quote": "q" },
        "children": [
            {
                "id": "leaf",
                "label": "Leaf",
                "content": { "description": "", "keyPoints": [], "quote": "" },
                "children": []
            }
        ]
    }"#;

    fn error_chain(raw: &str) -> String {
        format!("{:#}", parse_content_tree(raw).unwrap_err())
    }

    #[test]
    fn parses_complete_tree() {
        let tree = parse_content_tree(SMALL).unwrap();

        assert_eq!(tree.root().id, "center");
        assert_eq!(tree.root().content.key_points, vec!["one", "two"]);
        assert_eq!(tree.node_count(), 2);

        let leaf = tree.find("leaf").unwrap();
        assert!(leaf.is_leaf());
        assert!(leaf.content.key_points.is_empty());
    }

    #[test]
    fn rejects_non_object_json() {
        let error = parse_content_tree("[1, 2, 3]").unwrap_err();
        assert!(error.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn reports_missing_fields_with_context() {
        let chain = error_chain(r#"{ "id": "x", "label": "X", "children": [] }"#);

        assert!(chain.contains("invalid content tree node"));
        assert!(chain.contains("content"));
    }

    #[test]
    fn reports_missing_children() {
        let chain = error_chain(
            r#"{
                "id": "x",
                "label": "X",
                "content": { "description": "", "keyPoints": [], "quote": "" }
            }"#,
        );

        assert!(chain.contains("invalid content tree node"));
        assert!(chain.contains("missing field `children`"));
    }

    #[test]
    fn reports_missing_key_points() {
        let chain = error_chain(
            r#"{
                "id": "x",
                "label": "X",
                "content": { "description": "", "quote": "" },
                "children": []
            }"#,
        );

        assert!(chain.contains("missing field `keyPoints`"));
    }

    #[test]
    fn reports_missing_key_in_nested_child() {
        let chain = error_chain(
            r#"{
                "id": "x",
                "label": "X",
                "content": { "description": "", "keyPoints": [], "quote": "" },
                "children": [
                    { "id": "y", "label": "Y", "content": { "description": "", "keyPoints": [], "quote": "" } }
                ]
            }"#,
        );

        assert!(chain.contains("missing field `children`"));
    }

    #[test]
    fn reports_malformed_json() {
        let error = parse_content_tree("{ not json").unwrap_err();
        assert!(error.to_string().contains("invalid JSON"));
    }
}
