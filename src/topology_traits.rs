// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent a vertex, a link and a raw topology graph.

use crate::DisplayType;

/**
This trait needs to be implemented by the type that represents a vertex.

Read more about why this is necessary [here][crate#the-vertex-link-and-graphsource-traits].

<details>
<summary>Example implementation for a GraphQL topology vertex:</summary>

```ignore
impl topology_view::Vertex for graphql::TopologyVertex {
    fn name(&self) -> &str {
        &self.id
    }
}
```

</details>
*/
pub trait Vertex {
    /// Returns the unique name of the vertex.
    fn name(&self) -> &str;
}

/**
This trait needs to be implemented by the type that represents a link
between two vertices.

Read more about why this is necessary [here][crate#the-vertex-link-and-graphsource-traits].

<details>
<summary>Example implementation for a GraphQL topology edge:</summary>

```ignore
impl topology_view::Link for graphql::TopologyEdge {
    fn source(&self) -> &str {
        &self.source_vertex.id
    }

    fn target(&self) -> &str {
        &self.target_vertex.id
    }
}
```

</details>
*/
pub trait Link {
    /// Returns the name of the vertex the link starts from.
    fn source(&self) -> &str;
    /// Returns the name of the vertex the link ends at.
    fn target(&self) -> &str;
}

/**
This trait needs to be implemented by the type that represents a raw
topology graph, as returned by the backend.

A raw graph has a composite id, a human readable label, a namespace that
determines its [`DisplayType`], and a list of sub-layer graphs of the same
shape.

<details>
<summary>Example implementation for a GraphQL graph container:</summary>

```ignore
impl topology_view::GraphSource for graphql::GraphContainer {
    fn graph_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    fn display_type(&self) -> topology_view::DisplayType {
        topology_view::DisplayType::from(self.namespace.as_str())
    }

    fn sub_graphs(&self) -> &[Self] {
        &self.graphs
    }
}
```

</details>
*/
pub trait GraphSource: Sized {
    /// Returns the composite id of the graph.
    fn graph_id(&self) -> &str;
    /// Returns the human readable label of the graph.
    fn label(&self) -> &str;
    /// Returns the display type of the graph.
    fn display_type(&self) -> DisplayType;
    /// Returns the sub-layers of the graph, in the order given by the backend.
    fn sub_graphs(&self) -> &[Self];
}
