use crate::content::ContentTree;
use crate::util::quoted;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(in crate::app) struct PanelContent {
    pub(in crate::app) node_id: String,
    pub(in crate::app) title: String,
    pub(in crate::app) description: String,
    pub(in crate::app) key_points: Vec<String>,
    pub(in crate::app) quote: String,
}

/// Side panel state. Shown and hidden are the only two states; content from
/// the last selection is kept while hidden.
#[derive(Debug, Default)]
pub(in crate::app) struct DetailPanel {
    content: Option<PanelContent>,
    visible: bool,
}

impl DetailPanel {
    /// Unknown ids leave the panel untouched.
    pub(in crate::app) fn select(&mut self, tree: &ContentTree, node_id: &str) -> bool {
        let Some(node) = tree.find(node_id) else {
            return false;
        };

        self.content = Some(PanelContent {
            node_id: node.id.clone(),
            title: node.label.clone(),
            description: node.content.description.clone(),
            key_points: node.content.key_points.clone(),
            quote: quoted(&node.content.quote),
        });
        self.visible = true;
        true
    }

    pub(in crate::app) fn dismiss(&mut self) {
        self.visible = false;
    }

    pub(in crate::app) fn is_visible(&self) -> bool {
        self.visible
    }

    pub(in crate::app) fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    pub(in crate::app) fn shown_node_id(&self) -> Option<&str> {
        if !self.visible {
            return None;
        }
        self.content.as_ref().map(|content| content.node_id.as_str())
    }
}
