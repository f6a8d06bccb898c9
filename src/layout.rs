use std::f32::consts::TAU;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Size of the drawing area in pixels. Read fresh from the host for every layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Node diameter for the wide and narrow layouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeStep {
    pub wide: f32,
    pub narrow: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// `min(width, height) / ring_divisor` is the base ring radius.
    pub ring_divisor: f32,
    /// Extra radius added per depth level.
    pub ring_step: f32,
    /// Viewports narrower than this use the narrow node sizes.
    pub narrow_breakpoint: f32,
    /// Indexed by depth; the last step applies to every deeper level.
    pub size_steps: Vec<SizeStep>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ring_divisor: 5.0,
            ring_step: 15.0,
            narrow_breakpoint: 769.0,
            size_steps: vec![
                SizeStep {
                    wide: 150.0,
                    narrow: 120.0,
                },
                SizeStep {
                    wide: 120.0,
                    narrow: 100.0,
                },
                SizeStep {
                    wide: 90.0,
                    narrow: 70.0,
                },
            ],
        }
    }
}

/// Where a node hangs: the root is centered in the viewport, everything else
/// sits on a ring around its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Viewport,
    Parent {
        position: Point,
        size: f32,
        angle: f32,
    },
}

impl LayoutConfig {
    pub fn is_narrow(&self, viewport_width: f32) -> bool {
        viewport_width < self.narrow_breakpoint
    }

    pub fn node_size(&self, depth: usize, viewport_width: f32) -> f32 {
        let Some(step) = self
            .size_steps
            .get(depth)
            .or_else(|| self.size_steps.last())
        else {
            return 0.0;
        };

        if self.is_narrow(viewport_width) {
            step.narrow
        } else {
            step.wide
        }
    }

    pub fn ring_radius(&self, depth: usize, viewport: Viewport) -> f32 {
        viewport.width.min(viewport.height) / self.ring_divisor + depth as f32 * self.ring_step
    }

    /// Top-left corner of a node of the given depth. Zero-sized viewports are
    /// not special-cased.
    pub fn place(&self, depth: usize, anchor: Anchor, viewport: Viewport) -> Point {
        let size = self.node_size(depth, viewport.width);
        let half = size / 2.0;

        match anchor {
            Anchor::Viewport => Point::new(viewport.width / 2.0 - half, viewport.height / 2.0 - half),
            Anchor::Parent {
                position,
                size: parent_size,
                angle,
            } => {
                let radius = self.ring_radius(depth, viewport);
                let parent_center = center_of(position, parent_size);
                Point::new(
                    parent_center.x + radius * angle.cos() - half,
                    parent_center.y + radius * angle.sin() - half,
                )
            }
        }
    }
}

pub fn center_of(position: Point, size: f32) -> Point {
    Point::new(position.x + size / 2.0, position.y + size / 2.0)
}

/// Evenly fans `count` siblings around the full circle, first one at angle 0.
pub fn sibling_angles(count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }

    let spacing = TAU / count as f32;
    (0..count).map(|index| index as f32 * spacing).collect()
}
