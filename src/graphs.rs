// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Normalized topology graphs, and the selection of the graph to display.

mod ordering;
mod selection;

pub use ordering::{ApiOrder, IdSegmentOrder, LayerOrdering};
pub use selection::{format_graphs, GraphSelector};

use crate::{DisplayType, GraphSource};

/// A topology graph and its sub-layers, in the shape used by the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologyGraph {
    /// Composite id of the graph.  For powergrid graphs it is made up of the
    /// ids of the sub-layers, in their intended order.
    pub id: String,
    pub label: String,
    pub display_type: DisplayType,
    /// Sub-layers of the graph.
    pub graphs: Vec<TopologyGraph>,
}

impl TopologyGraph {
    /// Creates a `TopologyGraph` from the given raw graph, including all of
    /// its sub-layers.
    pub fn from_source<G: GraphSource>(source: &G) -> Self {
        Self {
            id: source.graph_id().to_string(),
            label: source.label().to_string(),
            display_type: source.display_type(),
            graphs: source.sub_graphs().iter().map(Self::from_source).collect(),
        }
    }

    /// Returns the placeholder shown when no graph is available for the
    /// selected display type.
    pub fn not_available() -> Self {
        Self {
            id: "N/A".to_string(),
            label: "N/A".to_string(),
            display_type: DisplayType::Other("N/A".to_string()),
            graphs: vec![],
        }
    }

    /// Returns true if the graph has at least one sub-layer.
    pub fn has_layers(&self) -> bool {
        !self.graphs.is_empty()
    }
}

impl GraphSource for TopologyGraph {
    fn graph_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn display_type(&self) -> DisplayType {
        self.display_type.clone()
    }

    fn sub_graphs(&self) -> &[Self] {
        &self.graphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestGraph;

    #[test]
    fn test_from_source() {
        let raw = TestGraph::new(
            "physical:logical",
            "Power Grid",
            "powergrid",
            vec![
                TestGraph::leaf("physical", "Physical", "powergrid"),
                TestGraph::leaf("logical", "Logical", "powergrid"),
            ],
        );

        let graph = TopologyGraph::from_source(&raw);
        assert_eq!(graph.id, "physical:logical");
        assert_eq!(graph.label, "Power Grid");
        assert_eq!(graph.display_type, DisplayType::Powergrid);
        assert!(graph.has_layers());
        assert_eq!(
            graph.graphs,
            vec![
                TopologyGraph {
                    id: "physical".to_string(),
                    label: "Physical".to_string(),
                    display_type: DisplayType::Powergrid,
                    graphs: vec![],
                },
                TopologyGraph {
                    id: "logical".to_string(),
                    label: "Logical".to_string(),
                    display_type: DisplayType::Powergrid,
                    graphs: vec![],
                },
            ]
        );

        // Normalizing an already normalized graph changes nothing.
        assert_eq!(TopologyGraph::from_source(&graph), graph);
    }

    #[test]
    fn test_not_available() {
        let graph = TopologyGraph::not_available();
        assert_eq!(graph.id, "N/A");
        assert_eq!(graph.label, "N/A");
        assert_eq!(graph.display_type.to_string(), "N/A");
        assert!(!graph.has_layers());
    }
}
