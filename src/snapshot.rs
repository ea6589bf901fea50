// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the vertices of a network topology and the
//! links between them.

mod creation;
mod layout;
mod retrieval;

pub mod iterators;

use crate::{Link, Vertex};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// `Vertex`es stored in an `UnGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `VertexIndexMap` stores the corresponding `NodeIndex` for any vertex name,
/// so that vertices in the `UnGraph` can be retrieved from their names.
pub(crate) type VertexIndexMap = HashMap<String, NodeIndex>;

/// A validated, immutable snapshot of a network topology.
///
/// Vertices keep the order in which they were given, which is the order
/// used when computing layouts.
pub struct TopologySnapshot<V, L>
where
    V: Vertex,
    L: Link,
{
    graph: UnGraph<V, L>,
    vertex_indices: VertexIndexMap,
}
