// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Node positions for the topology view.
//!
//! Only the [`ViewType::Circle`] view has a precomputed layout.  For all other
//! views the layout is empty, and the renderer is expected to fall back to its
//! own placement.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::{CircleLayoutConfig, ViewType};

/// The position of a vertex, rounded to whole units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePoint {
    pub x: i64,
    pub y: i64,
}

/// A mapping from vertex names to their positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    nodes: HashMap<String, NodePoint>,
}

impl Layout {
    /// Returns the position of the vertex with the given name, if it has one.
    pub fn get(&self, name: &str) -> Option<&NodePoint> {
        self.nodes.get(name)
    }

    /// Returns the number of positioned vertices.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no vertex has a position.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over the vertex names and their positions, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodePoint)> {
        self.nodes.iter().map(|(name, point)| (name.as_str(), point))
    }

    /// Consumes the layout and returns the underlying mapping.
    pub fn into_nodes(self) -> HashMap<String, NodePoint> {
        self.nodes
    }
}

/// Computes the positions of the given vertices for the given view.
///
/// The order of `vertex_names` determines where each vertex is placed.  If a
/// name appears more than once, its last occurrence wins.
pub fn compute_layout<I, S>(vertex_names: I, view: ViewType, config: &CircleLayoutConfig) -> Layout
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match view {
        ViewType::Circle => circle_layout(vertex_names, config),
        ViewType::Force | ViewType::Dagre | ViewType::Map => {
            tracing::debug!("No precomputed layout for the {view} view.");
            Layout::default()
        }
    }
}

/// Places the vertices evenly around a circle, the first one at angle zero.
fn circle_layout<I, S>(vertex_names: I, config: &CircleLayoutConfig) -> Layout
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = vertex_names.into_iter().collect();
    if names.is_empty() {
        return Layout::default();
    }

    let count = names.len() as f64;
    let nodes = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let angle = 2.0 * PI * i as f64 / count;
            let point = NodePoint {
                x: (config.center_x + config.radius * angle.cos()).round() as i64,
                y: (config.center_y + config.radius * angle.sin()).round() as i64,
            };
            (name.as_ref().to_string(), point)
        })
        .collect();

    Layout { nodes }
}
