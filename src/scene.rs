use anyhow::{Context, Result};
use serde::Serialize;

use crate::content::{ContentTree, TreeNode};
use crate::layout::{Anchor, LayoutConfig, Point, Viewport, center_of, sibling_angles};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualNode {
    pub node_id: String,
    pub label: String,
    pub depth: usize,
    /// Top-left corner of the node's square bounds.
    pub position: Point,
    pub size: f32,
}

impl VisualNode {
    pub fn center(&self) -> Point {
        center_of(self.position, self.size)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.center().distance(point) <= self.size / 2.0
    }
}

/// Line from a parent's visual center to its child's visual center.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub parent_id: String,
    pub child_id: String,
    pub start: Point,
    pub end: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub node: VisualNode,
    pub segment: Option<Segment>,
}

/// Pre-order placement of the whole tree for one viewport.
pub fn layout_tree(tree: &ContentTree, viewport: Viewport, config: &LayoutConfig) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(tree.node_count());
    place_subtree(tree.root(), 0, None, 0.0, viewport, config, &mut placements);
    placements
}

fn place_subtree(
    node: &TreeNode,
    depth: usize,
    parent: Option<&VisualNode>,
    angle: f32,
    viewport: Viewport,
    config: &LayoutConfig,
    placements: &mut Vec<Placement>,
) {
    let anchor = match parent {
        Some(parent) => Anchor::Parent {
            position: parent.position,
            size: parent.size,
            angle,
        },
        None => Anchor::Viewport,
    };

    let visual = VisualNode {
        node_id: node.id.clone(),
        label: node.label.clone(),
        depth,
        position: config.place(depth, anchor, viewport),
        size: config.node_size(depth, viewport.width),
    };

    let segment = parent.map(|parent| Segment {
        parent_id: parent.node_id.clone(),
        child_id: visual.node_id.clone(),
        start: parent.center(),
        end: visual.center(),
    });

    placements.push(Placement {
        node: visual.clone(),
        segment,
    });

    if node.is_leaf() {
        return;
    }

    let angles = sibling_angles(node.children.len());
    for (child, child_angle) in node.children.iter().zip(angles) {
        place_subtree(
            child,
            depth + 1,
            Some(&visual),
            child_angle,
            viewport,
            config,
            placements,
        );
    }
}

/// What a render pass needs from the host: positioned nodes and line segments.
pub trait GalaxySurface {
    fn clear(&mut self);
    fn add_node(&mut self, node: VisualNode);
    fn add_segment(&mut self, segment: Segment);
}

/// Clears the surface and draws the full tree onto it.
pub fn render(
    tree: &ContentTree,
    viewport: Viewport,
    config: &LayoutConfig,
    surface: &mut impl GalaxySurface,
) {
    surface.clear();
    for placement in layout_tree(tree, viewport, config) {
        if let Some(segment) = placement.segment {
            surface.add_segment(segment);
        }
        surface.add_node(placement.node);
    }
}

/// Retained result of the latest render pass.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub nodes: Vec<VisualNode>,
    pub segments: Vec<Segment>,
}

impl Scene {
    /// Topmost node under `point`; later nodes are drawn over earlier ones.
    pub fn node_at(&self, point: Point) -> Option<&VisualNode> {
        self.nodes.iter().rev().find(|node| node.contains(point))
    }
}

/// Renders a fresh scene for `viewport` and serializes it as pretty JSON.
pub fn layout_json(tree: &ContentTree, viewport: Viewport, config: &LayoutConfig) -> Result<String> {
    let mut scene = Scene::default();
    render(tree, viewport, config, &mut scene);
    scene.viewport = viewport;
    serde_json::to_string_pretty(&scene).context("failed to serialize layout")
}

impl GalaxySurface for Scene {
    fn clear(&mut self) {
        self.nodes.clear();
        self.segments.clear();
    }

    fn add_node(&mut self, node: VisualNode) {
        self.nodes.push(node);
    }

    fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::content::tests::{node, sample_tree};

    use super::*;

    const EPSILON: f32 = 1e-3;

    fn angle_between(from: Point, to: Point) -> f32 {
        (to.y - from.y).atan2(to.x - from.x).rem_euclid(TAU)
    }

    #[test]
    fn one_visual_node_per_tree_node_in_pre_order() {
        let tree = sample_tree();
        let placements = layout_tree(&tree, Viewport::new(1200.0, 800.0), &LayoutConfig::default());

        let ids = placements
            .iter()
            .map(|placement| placement.node.node_id.as_str())
            .collect::<Vec<_>>();
        let expected = tree
            .pre_order()
            .into_iter()
            .map(|(_, node)| node.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, expected);

        let segments = placements
            .iter()
            .filter(|placement| placement.segment.is_some())
            .count();
        assert_eq!(segments, tree.node_count() - 1);
        assert!(placements[0].segment.is_none());
    }

    #[test]
    fn children_sit_on_their_parents_ring() {
        let tree = sample_tree();
        let viewport = Viewport::new(1200.0, 800.0);
        let config = LayoutConfig::default();
        let placements = layout_tree(&tree, viewport, &config);

        for placement in placements.iter().skip(1) {
            let segment = placement.segment.as_ref().unwrap();
            let parent = placements
                .iter()
                .find(|candidate| candidate.node.node_id == segment.parent_id)
                .unwrap();

            let distance = placement.node.center().distance(parent.node.center());
            let radius = config.ring_radius(placement.node.depth, viewport);
            assert!((distance - radius).abs() < EPSILON, "{}", placement.node.node_id);
        }
    }

    #[test]
    fn segments_join_true_centers() {
        let tree = sample_tree();
        let placements = layout_tree(&tree, Viewport::new(640.0, 480.0), &LayoutConfig::default());

        for placement in &placements {
            if let Some(segment) = &placement.segment {
                let parent = placements
                    .iter()
                    .find(|candidate| candidate.node.node_id == segment.parent_id)
                    .unwrap();
                assert_eq!(segment.end, placement.node.center());
                assert_eq!(segment.start, parent.node.center());
                assert_eq!(segment.child_id, placement.node.node_id);
            }
        }
    }

    #[test]
    fn siblings_fan_out_evenly_from_angle_zero() {
        let tree = ContentTree::new(node(
            "root",
            vec![node("a", vec![]), node("b", vec![]), node("c", vec![])],
        ));
        let placements = layout_tree(&tree, Viewport::new(1000.0, 1000.0), &LayoutConfig::default());
        let root_center = placements[0].node.center();

        for (index, placement) in placements.iter().skip(1).enumerate() {
            let angle = angle_between(root_center, placement.node.center());
            let expected = index as f32 * TAU / 3.0;
            assert!((angle - expected).abs() < EPSILON, "child {index}: {angle} != {expected}");
        }
    }

    #[test]
    fn leaf_root_renders_alone() {
        let tree = ContentTree::new(node("solo", vec![]));
        let placements = layout_tree(&tree, Viewport::new(800.0, 600.0), &LayoutConfig::default());

        assert_eq!(placements.len(), 1);
        assert!(placements[0].segment.is_none());
    }

    #[test]
    fn re_render_replaces_previous_scene() {
        let tree = sample_tree();
        let config = LayoutConfig::default();
        let mut scene = Scene::default();

        render(&tree, Viewport::new(1400.0, 900.0), &config, &mut scene);
        let wide_root = scene.nodes[0].clone();
        render(&tree, Viewport::new(600.0, 500.0), &config, &mut scene);

        assert_eq!(scene.nodes.len(), tree.node_count());
        assert_eq!(scene.segments.len(), tree.node_count() - 1);
        assert_ne!(scene.nodes[0], wide_root);
        assert_eq!(scene.nodes[0].size, 120.0);
    }

    #[test]
    fn layout_json_lists_every_node_and_the_viewport() {
        let tree = sample_tree();
        let json = layout_json(&tree, Viewport::new(1024.0, 640.0), &LayoutConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["viewport"]["width"], 1024.0);
        assert_eq!(value["viewport"]["height"], 640.0);
        assert_eq!(value["nodes"].as_array().unwrap().len(), tree.node_count());
        assert_eq!(value["segments"].as_array().unwrap().len(), tree.node_count() - 1);
        assert_eq!(value["nodes"][0]["node_id"], "root");
        assert_eq!(value["nodes"][0]["size"], 150.0);
    }

    #[test]
    fn node_at_prefers_topmost_node() {
        let mut scene = Scene::default();
        scene.add_node(VisualNode {
            node_id: "under".to_owned(),
            label: String::new(),
            depth: 0,
            position: Point::new(0.0, 0.0),
            size: 100.0,
        });
        scene.add_node(VisualNode {
            node_id: "over".to_owned(),
            label: String::new(),
            depth: 1,
            position: Point::new(40.0, 40.0),
            size: 40.0,
        });

        assert_eq!(scene.node_at(Point::new(60.0, 60.0)).map(|n| n.node_id.as_str()), Some("over"));
        assert_eq!(scene.node_at(Point::new(20.0, 50.0)).map(|n| n.node_id.as_str()), Some("under"));
        assert!(scene.node_at(Point::new(2.0, 2.0)).is_none());
    }
}
