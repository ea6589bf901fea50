// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`TopologySnapshot`] instances from given vertices and
//! links.

use petgraph::graph::UnGraph;

use crate::{Error, Link, SnapshotConfig, Vertex};

use super::{TopologySnapshot, VertexIndexMap};

/// `TopologySnapshot` instantiation.
impl<V, L> TopologySnapshot<V, L>
where
    V: Vertex,
    L: Link,
{
    /// Creates a new [`TopologySnapshot`] from the given vertices and links.
    ///
    /// Returns an error if a vertex has an empty or duplicate name, or if a
    /// link is invalid.  Multiple links between the same pair of vertices are
    /// merged, keeping the last one.
    pub fn try_new<VertexIterator, LinkIterator>(
        vertices: VertexIterator,
        links: LinkIterator,
        config: SnapshotConfig,
    ) -> Result<Self, Error>
    where
        VertexIterator: IntoIterator<Item = V>,
        LinkIterator: IntoIterator<Item = L>,
    {
        let (graph, vertex_indices) = Self::create_graph(vertices)?;

        let mut snapshot = Self {
            graph,
            vertex_indices,
        };
        snapshot.add_links(links, &config)?;

        Ok(snapshot)
    }

    /// Creates a snapshot without any vertices or links.
    pub fn empty() -> Self {
        Self {
            graph: UnGraph::default(),
            vertex_indices: VertexIndexMap::new(),
        }
    }

    fn create_graph(
        vertices: impl IntoIterator<Item = V>,
    ) -> Result<(UnGraph<V, L>, VertexIndexMap), Error> {
        let mut graph = UnGraph::default();
        let mut indices = VertexIndexMap::new();

        for vertex in vertices {
            let name = vertex.name().to_string();

            if name.is_empty() {
                return Err(Error::invalid_vertex("Vertex name can't be empty."));
            }
            if indices.contains_key(&name) {
                return Err(Error::invalid_vertex(format!(
                    "Duplicate vertex name found: {name}"
                )));
            }

            let idx = graph.add_node(vertex);
            indices.insert(name, idx);
        }

        Ok((graph, indices))
    }

    fn add_links(
        &mut self,
        links: impl IntoIterator<Item = L>,
        config: &SnapshotConfig,
    ) -> Result<(), Error> {
        for link in links {
            let sid = link.source();
            let tid = link.target();

            if sid == tid {
                return Err(Error::invalid_link(format!(
                    "Link:({sid}, {tid}) Can't connect a vertex to itself."
                )));
            }

            let (Some(&source_idx), Some(&target_idx)) =
                (self.vertex_indices.get(sid), self.vertex_indices.get(tid))
            else {
                let missing = if self.vertex_indices.contains_key(sid) {
                    tid
                } else {
                    sid
                };
                if config.allow_dangling_links {
                    tracing::warn!(
                        "Link:({sid}, {tid}) refers to unknown vertex {missing} and will be ignored."
                    );
                    continue;
                }
                return Err(Error::invalid_link(format!(
                    "Link:({sid}, {tid}) Can't find a vertex with name {missing}"
                )));
            };

            self.graph.update_edge(source_idx, target_idx, link);
        }

        Ok(())
    }
}

impl<V, L> Default for TopologySnapshot<V, L>
where
    V: Vertex,
    L: Link,
{
    fn default() -> Self {
        Self::empty()
    }
}
