// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The state behind a topology view: the latest topology snapshot, the raw
//! topology graphs and the user's selections.

use crate::layout::Layout;
use crate::{
    DisplayType, Error, GraphSelector, GraphSource, LayerOrdering, Link, TopologyConfig,
    TopologyGraph, TopologySnapshot, Vertex, ViewType,
};

/// Holds the data shown by a topology view, and derives the view-model from
/// it on demand.
///
/// Nothing is cached: every getter recomputes its result from the current
/// state.
pub struct TopologyState<V, L, G, O>
where
    V: Vertex,
    L: Link,
    G: GraphSource,
    O: LayerOrdering,
{
    config: TopologyConfig,
    snapshot: TopologySnapshot<V, L>,
    topology_graphs: Vec<G>,
    selected_view: ViewType,
    selected_display: DisplayType,
    selector: GraphSelector<O>,
}

impl<V, L, G, O> TopologyState<V, L, G, O>
where
    V: Vertex,
    L: Link,
    G: GraphSource,
    O: LayerOrdering,
{
    /// Creates an empty state, with the circle view and the network display
    /// selected.
    pub fn new(config: TopologyConfig, ordering: O) -> Self {
        Self {
            config,
            snapshot: TopologySnapshot::empty(),
            topology_graphs: vec![],
            selected_view: ViewType::default(),
            selected_display: DisplayType::default(),
            selector: GraphSelector::new(ordering),
        }
    }

    /// Replaces the topology snapshot.
    pub fn set_snapshot(&mut self, snapshot: TopologySnapshot<V, L>) {
        self.snapshot = snapshot;
    }

    /// Builds a snapshot from the given vertices and links and makes it the
    /// current one.
    ///
    /// Returns an error if the snapshot is invalid, in which case the
    /// current snapshot is kept.
    pub fn try_set_topology(
        &mut self,
        vertices: impl IntoIterator<Item = V>,
        links: impl IntoIterator<Item = L>,
    ) -> Result<(), Error> {
        self.snapshot = TopologySnapshot::try_new(vertices, links, self.config.snapshot.clone())?;
        Ok(())
    }

    /// Replaces the raw topology graphs.
    pub fn set_topology_graphs(&mut self, graphs: Vec<G>) {
        self.topology_graphs = graphs;
    }

    pub fn set_selected_view(&mut self, view: ViewType) {
        self.selected_view = view;
    }

    pub fn set_selected_display(&mut self, display: DisplayType) {
        self.selected_display = display;
    }

    pub fn selected_view(&self) -> ViewType {
        self.selected_view
    }

    pub fn selected_display(&self) -> &DisplayType {
        &self.selected_display
    }

    pub fn snapshot(&self) -> &TopologySnapshot<V, L> {
        &self.snapshot
    }

    /// Returns the vertex positions for the selected view.
    pub fn layout(&self) -> Layout {
        self.snapshot.layout(self.selected_view, &self.config.layout)
    }

    /// Returns all topology graphs, for populating navigation menus.
    pub fn graphs(&self) -> Vec<TopologyGraph> {
        self.selector.select_all_graphs(&self.topology_graphs)
    }

    /// Returns the topology graph for the selected display type, if there is
    /// one with layers.
    pub fn graphs_display(&self) -> Option<TopologyGraph> {
        self.selector
            .select_graph_for_display(&self.topology_graphs, &self.selected_display)
    }
}
