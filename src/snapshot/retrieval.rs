// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving vertices and links from a [`TopologySnapshot`].

use crate::iterators::{Links, VertexNames, Vertices};
use crate::{Error, Link, TopologySnapshot, Vertex};

/// `Vertex` and `Link` retrieval.
impl<V, L> TopologySnapshot<V, L>
where
    V: Vertex,
    L: Link,
{
    /// Returns the vertex with the given `name`, if it exists.
    pub fn vertex(&self, name: &str) -> Result<&V, Error> {
        self.vertex_indices
            .get(name)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| Error::vertex_not_found(format!("Vertex with name {name} not found.")))
    }

    /// Returns an iterator over the vertices in the snapshot, in the order
    /// they were given.
    pub fn vertices(&self) -> Vertices<V> {
        Vertices {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the names of the vertices in the snapshot, in
    /// the order they were given.
    pub fn vertex_names(&self) -> VertexNames<V> {
        VertexNames {
            iter: self.vertices(),
        }
    }

    /// Returns an iterator over the links in the snapshot.
    pub fn links(&self) -> Links<L> {
        Links {
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns the number of vertices in the snapshot.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns true if the snapshot has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestLink, TestVertex};
    use crate::SnapshotConfig;

    fn vertices_and_links() -> (Vec<TestVertex>, Vec<TestLink>) {
        let vertices = vec![
            TestVertex::new("switch-2"),
            TestVertex::new("core-1"),
            TestVertex::new("host-1"),
            TestVertex::new("switch-1"),
            TestVertex::new("host-2"),
            TestVertex::new("host-3"),
        ];
        let links = vec![
            TestLink::new("core-1", "switch-1"),
            TestLink::new("core-1", "switch-2"),
            TestLink::new("host-1", "switch-1"),
            TestLink::new("switch-2", "host-2"),
            TestLink::new("switch-2", "host-3"),
        ];

        (vertices, links)
    }

    #[test]
    fn test_vertex() -> Result<(), Error> {
        let (vertices, links) = vertices_and_links();
        let snapshot = TopologySnapshot::try_new(vertices, links, SnapshotConfig::default())?;

        assert_eq!(snapshot.vertex("core-1"), Ok(&TestVertex::new("core-1")));
        assert_eq!(
            snapshot.vertex("core-9"),
            Err(Error::vertex_not_found("Vertex with name core-9 not found."))
        );

        Ok(())
    }

    #[test]
    fn test_vertices_keep_insertion_order() -> Result<(), Error> {
        let (vertices, links) = vertices_and_links();
        let snapshot =
            TopologySnapshot::try_new(vertices.clone(), links, SnapshotConfig::default())?;

        assert!(snapshot.vertices().eq(&vertices));
        assert!(snapshot.vertex_names().eq([
            "switch-2", "core-1", "host-1", "switch-1", "host-2", "host-3"
        ]));
        assert_eq!(snapshot.vertex_count(), 6);
        assert!(!snapshot.is_empty());

        Ok(())
    }

    #[test]
    fn test_links() -> Result<(), Error> {
        let (vertices, links) = vertices_and_links();
        let snapshot =
            TopologySnapshot::try_new(vertices, links.clone(), SnapshotConfig::default())?;

        assert!(snapshot.links().eq(&links));
        assert!(snapshot
            .links()
            .filter(|l| l.source() == "switch-2")
            .eq(&[
                TestLink::new("switch-2", "host-2"),
                TestLink::new("switch-2", "host-3")
            ]));

        Ok(())
    }
}
