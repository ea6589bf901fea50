// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Topology View

This is a library for computing what a network topology view shows: where
each vertex of the topology is drawn, and which topology graph, with which
layers, is displayed for the selected display type.

All results are derived on demand from the latest topology data.  Nothing is
cached, and nothing is mutated in place.

## The `Vertex`, `Link` and `GraphSource` traits

Topology data usually comes from a backend with its own types.  Because this
is an independent library, it doesn't know about those types and instead uses
traits to interact with them.

- Vertex types must implement [`Vertex`].
- Link types must implement [`Link`].
- Raw topology graph types must implement [`GraphSource`].

Check out the documentation for these traits for sample implementations.

## Topology snapshots

[`TopologySnapshot`] instances are created by passing vertices and links to
the [`try_new`][TopologySnapshot::try_new] method, which checks that:

- Vertex names are non-empty and unique.
- Links don't connect a vertex to itself.
- Links only refer to vertices of the snapshot, unless
  [`allow_dangling_links`][SnapshotConfig::allow_dangling_links] is set.

If any of the checks fail, the method returns an [`Error`].

## Layouts

[`compute_layout`] and [`TopologySnapshot::layout`] place vertices evenly on a
circle for the [`ViewType::Circle`] view.  Other views get an empty
[`Layout`], leaving placement to the renderer.

## Graph selection

A [`GraphSelector`] returns all normalized graphs, or the single graph for a
[`DisplayType`].  Powergrid graphs have their layers re-ordered by a
[`LayerOrdering`] strategy.

[`TopologyState`] ties all of the above together, for applications that want
a single object holding the view's data and selections.

## Locations and monitoring policies

[`LocationState`] holds the monitoring locations view: the location list, the
selected location, the certificate password and the shown
[`LocationDisplay`] panel.  Backend requests go through a [`LocationService`]
implemented by the application; failed requests are logged, and failed
list loads leave an empty list.  [`MonitoringPolicyState`] holds the
[`MonitoringPolicy`] being edited.
*/

mod config;
pub use config::{CircleLayoutConfig, SnapshotConfig, TopologyConfig};

mod error;
pub use error::Error;

mod graphs;
pub use graphs::{
    format_graphs, ApiOrder, GraphSelector, IdSegmentOrder, LayerOrdering, TopologyGraph,
};

mod layout;
pub use layout::{compute_layout, Layout, NodePoint};

mod location_state;
pub use location_state::{Location, LocationDisplay, LocationService, LocationState};

mod monitoring_policy;
pub use monitoring_policy::{MonitoringPolicy, MonitoringPolicyState};

mod snapshot;
pub use snapshot::{iterators, TopologySnapshot};

mod state;
pub use state::TopologyState;

mod topology_traits;
pub use topology_traits::{GraphSource, Link, Vertex};

mod view_modes;
pub use view_modes::{DisplayType, ViewType};

#[cfg(test)]
mod test_utils;
