// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Selection of the topology graph to display.

use super::ordering::{ensure_permutation, LayerOrdering};
use super::TopologyGraph;
use crate::{DisplayType, GraphSource};

/// Normalizes the given raw graphs, keeping their order.
pub fn format_graphs<G: GraphSource>(raw_graphs: &[G]) -> Vec<TopologyGraph> {
    raw_graphs.iter().map(TopologyGraph::from_source).collect()
}

/// Picks the topology graph for a display type, and puts its layers in
/// display order.
#[derive(Clone, Debug, Default)]
pub struct GraphSelector<O>
where
    O: LayerOrdering,
{
    ordering: O,
}

impl<O> GraphSelector<O>
where
    O: LayerOrdering,
{
    /// Creates a selector that orders powergrid layers with `ordering`.
    pub fn new(ordering: O) -> Self {
        Self { ordering }
    }

    /// Returns all graphs, normalized and unfiltered.
    pub fn select_all_graphs<G: GraphSource>(&self, raw_graphs: &[G]) -> Vec<TopologyGraph> {
        format_graphs(raw_graphs)
    }

    /// Returns the graph to display for the `selected` display type.
    ///
    /// There should be a single graph per display type.  If there are more,
    /// the first one is used.  Returns `None` if there is no graph for the
    /// display type, or if it has no sub-layers.
    ///
    /// The sub-layers of powergrid graphs are re-ordered with the selector's
    /// [`LayerOrdering`].  All other graphs are returned as they are.
    pub fn select_graph_for_display<G: GraphSource>(
        &self,
        raw_graphs: &[G],
        selected: &DisplayType,
    ) -> Option<TopologyGraph> {
        let mut matching = raw_graphs
            .iter()
            .filter(|g| g.display_type() == *selected);

        let Some(raw) = matching.next() else {
            tracing::debug!("No topology graph found for display type {selected}.");
            return None;
        };

        if matching.next().is_some() {
            tracing::warn!(
                "Multiple topology graphs found for display type {selected}, using {}.",
                raw.graph_id()
            );
        }

        let graph = TopologyGraph::from_source(raw);
        if !graph.has_layers() {
            tracing::debug!("Topology graph {} has no layers.", graph.id);
            return None;
        }

        if graph.display_type.is_powergrid() {
            Some(self.order_layers(graph))
        } else {
            Some(graph)
        }
    }

    fn order_layers(&self, graph: TopologyGraph) -> TopologyGraph {
        let TopologyGraph {
            id,
            label,
            display_type,
            graphs,
        } = graph;

        let ordered = self.ordering.order_layers(graphs.clone(), &id);
        let graphs = match ensure_permutation(&graphs, &ordered) {
            Ok(()) => ordered,
            Err(err) => {
                tracing::warn!("Keeping original layer order for graph {id}: {err}");
                graphs
            }
        };

        TopologyGraph {
            id,
            label,
            display_type,
            graphs,
        }
    }
}
