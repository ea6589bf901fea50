// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over vertices and links in a `TopologySnapshot`.

use crate::{Link, Vertex};

/// An iterator over the vertices in a `TopologySnapshot`.
pub struct Vertices<'a, V>
where
    V: Vertex,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<V>>,
}

impl<'a, V> Iterator for Vertices<'a, V>
where
    V: Vertex,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the vertex names in a `TopologySnapshot`, in insertion
/// order.
pub struct VertexNames<'a, V>
where
    V: Vertex,
{
    pub(crate) iter: Vertices<'a, V>,
}

impl<'a, V> Iterator for VertexNames<'a, V>
where
    V: Vertex,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|v| v.name())
    }
}

/// An iterator over the links in a `TopologySnapshot`.
pub struct Links<'a, L>
where
    L: Link,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<L>>,
}

impl<'a, L> Iterator for Links<'a, L>
where
    L: Link,
{
    type Item = &'a L;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| &e.weight)
    }
}
