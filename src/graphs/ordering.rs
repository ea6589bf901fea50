// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Strategies for ordering the sub-layers of a powergrid graph.

use super::TopologyGraph;
use crate::Error;

/// Orders the sub-layers of a graph, using the id of the parent graph.
///
/// The backend doesn't return powergrid layers in their intended order, but
/// the composite id of the parent graph encodes it.  How the id is read
/// depends on the backend, so the strategy is pluggable.
///
/// Implementations must return a permutation of `layers`.  Results that add,
/// drop or duplicate layers are rejected by the
/// [`GraphSelector`][crate::GraphSelector], which then keeps the original
/// order.
///
/// Closures of the form `Fn(Vec<TopologyGraph>, &str) -> Vec<TopologyGraph>`
/// implement this trait.
pub trait LayerOrdering {
    /// Returns `layers` in display order, for the graph with id `parent_id`.
    fn order_layers(&self, layers: Vec<TopologyGraph>, parent_id: &str) -> Vec<TopologyGraph>;
}

impl<F> LayerOrdering for F
where
    F: Fn(Vec<TopologyGraph>, &str) -> Vec<TopologyGraph>,
{
    fn order_layers(&self, layers: Vec<TopologyGraph>, parent_id: &str) -> Vec<TopologyGraph> {
        self(layers, parent_id)
    }
}

/// Keeps the layers in the order the backend returned them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiOrder;

impl LayerOrdering for ApiOrder {
    fn order_layers(&self, layers: Vec<TopologyGraph>, _parent_id: &str) -> Vec<TopologyGraph> {
        layers
    }
}

/// Orders layers by where their ids appear in the parent id.
///
/// The parent id is split on `separator`, and every layer is ranked by the
/// first segment equal to its id.  Layers whose id doesn't appear in the
/// parent id come last, in their original order.
///
/// For example, with `':'` as separator and a parent id of
/// `"physical:logical:feeders"`, layers `[feeders, logical, extra, physical]`
/// are ordered as `[physical, logical, feeders, extra]`.
#[derive(Clone, Copy, Debug)]
pub struct IdSegmentOrder {
    separator: char,
}

impl IdSegmentOrder {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }
}

impl LayerOrdering for IdSegmentOrder {
    fn order_layers(&self, mut layers: Vec<TopologyGraph>, parent_id: &str) -> Vec<TopologyGraph> {
        let segments: Vec<&str> = parent_id.split(self.separator).map(str::trim).collect();
        layers.sort_by_key(|layer| {
            segments
                .iter()
                .position(|segment| *segment == layer.id)
                .unwrap_or(segments.len())
        });
        layers
    }
}

/// Checks that `ordered` contains exactly the layers in `original`.
pub(super) fn ensure_permutation(
    original: &[TopologyGraph],
    ordered: &[TopologyGraph],
) -> Result<(), Error> {
    if original.len() != ordered.len() {
        return Err(Error::invalid_ordering(format!(
            "Expected {} layers, found {}.",
            original.len(),
            ordered.len()
        )));
    }

    let mut remaining: Vec<&TopologyGraph> = original.iter().collect();
    for layer in ordered {
        let Some(pos) = remaining.iter().position(|l| *l == layer) else {
            return Err(Error::invalid_ordering(format!(
                "Layer {} doesn't match any remaining layer of the graph.",
                layer.id
            )));
        };
        remaining.swap_remove(pos);
    }

    Ok(())
}
