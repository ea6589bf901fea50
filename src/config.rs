// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for building topology
//! snapshots and computing layouts.

/// Configuration options for the `TopologySnapshot`.
#[derive(Clone, Default, Debug)]
pub struct SnapshotConfig {
    /// Whether to allow links that refer to vertices missing from the
    /// snapshot.  When this is `true`, such links are dropped with a warning
    /// instead of failing the snapshot creation.
    pub allow_dangling_links: bool,
}

/// Geometry of the circle used by the circle layout.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleLayoutConfig {
    /// Horizontal position of the circle's centre.
    pub center_x: f64,
    /// Vertical position of the circle's centre.
    pub center_y: f64,
    /// Radius of the circle.
    pub radius: f64,
}

impl Default for CircleLayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 350.0,
            center_y: 350.0,
            radius: 250.0,
        }
    }
}

/// Configuration options for the `TopologyState`.
#[derive(Clone, Default, Debug)]
pub struct TopologyConfig {
    /// Options used when building snapshots from new topology data.
    pub snapshot: SnapshotConfig,

    /// Geometry of the circle view.
    pub layout: CircleLayoutConfig,
}
