// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains the
//! types shared by all tests of the crate:
//!
//! - `TestVertex` and `TestLink`, which implement the `Vertex` and `Link`
//!   traits respectively.
//! - `TestGraph`, which implements the `GraphSource` trait and carries its
//!   display type as a namespace string, like backend graphs do.

use crate::{DisplayType, GraphSource, Link, TopologyGraph, Vertex};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestVertex(String);

impl TestVertex {
    pub(crate) fn new(name: &str) -> Self {
        TestVertex(name.to_string())
    }
}

impl Vertex for TestVertex {
    fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestLink(String, String);

impl TestLink {
    pub(crate) fn new(source: &str, target: &str) -> Self {
        TestLink(source.to_string(), target.to_string())
    }
}

impl Link for TestLink {
    fn source(&self) -> &str {
        &self.0
    }

    fn target(&self) -> &str {
        &self.1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestGraph {
    id: String,
    label: String,
    namespace: String,
    graphs: Vec<TestGraph>,
}

impl TestGraph {
    pub(crate) fn new(id: &str, label: &str, namespace: &str, graphs: Vec<TestGraph>) -> Self {
        TestGraph {
            id: id.to_string(),
            label: label.to_string(),
            namespace: namespace.to_string(),
            graphs,
        }
    }

    /// Creates a graph without sub-layers.
    pub(crate) fn leaf(id: &str, label: &str, namespace: &str) -> Self {
        Self::new(id, label, namespace, vec![])
    }
}

impl GraphSource for TestGraph {
    fn graph_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn display_type(&self) -> DisplayType {
        DisplayType::from(self.namespace.as_str())
    }

    fn sub_graphs(&self) -> &[Self] {
        &self.graphs
    }
}

/// Creates a powergrid layer with the given id.
pub(crate) fn layer(id: &str) -> TopologyGraph {
    TopologyGraph {
        id: id.to_string(),
        label: id.to_uppercase(),
        display_type: DisplayType::Powergrid,
        graphs: vec![],
    }
}
