// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ViewType` and `DisplayType` enums, which select
//! how a topology is laid out and which topology graph is shown.

use crate::Error;
use std::fmt::Display;
use std::str::FromStr;

/// Represents the layout mode of the topology view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewType {
    #[default]
    Circle,
    Force,
    Dagre,
    Map,
}

impl Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewType::Circle => write!(f, "circle"),
            ViewType::Force => write!(f, "force"),
            ViewType::Dagre => write!(f, "dagre"),
            ViewType::Map => write!(f, "map"),
        }
    }
}

impl FromStr for ViewType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ViewType::Circle),
            "force" | "d3" => Ok(ViewType::Force),
            "dagre" => Ok(ViewType::Dagre),
            "map" => Ok(ViewType::Map),
            _ => Err(Error::invalid_view_type(format!("Unknown view type: {s}"))),
        }
    }
}

/// Represents the display type of a topology graph.
///
/// Raw topology graphs carry their display type as a namespace string, which
/// is converted to this type with [`From<&str>`], ignoring case and
/// surrounding whitespace.  Namespaces that are not known to the library are
/// kept, lowercased, as [`DisplayType::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayType {
    #[default]
    Network,
    Application,
    Powergrid,
    Other(String),
}

impl DisplayType {
    /// Returns true if graphs of this type need their sub-layers re-ordered
    /// before display.
    pub fn is_powergrid(&self) -> bool {
        *self == DisplayType::Powergrid
    }
}

impl From<&str> for DisplayType {
    fn from(namespace: &str) -> Self {
        let namespace = namespace.trim().to_ascii_lowercase();
        match namespace.as_str() {
            "network" => DisplayType::Network,
            "application" => DisplayType::Application,
            "powergrid" => DisplayType::Powergrid,
            _ => DisplayType::Other(namespace),
        }
    }
}

impl Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayType::Network => write!(f, "network"),
            DisplayType::Application => write!(f, "application"),
            DisplayType::Powergrid => write!(f, "powergrid"),
            DisplayType::Other(namespace) => write!(f, "{namespace}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_type_parsing() {
        assert_eq!("circle".parse::<ViewType>(), Ok(ViewType::Circle));
        assert_eq!(" Dagre ".parse::<ViewType>(), Ok(ViewType::Dagre));
        assert_eq!("d3".parse::<ViewType>(), Ok(ViewType::Force));
        assert_eq!("MAP".parse::<ViewType>(), Ok(ViewType::Map));
        assert_eq!(
            "spiral".parse::<ViewType>(),
            Err(Error::invalid_view_type("Unknown view type: spiral"))
        );

        for view in [ViewType::Circle, ViewType::Force, ViewType::Dagre, ViewType::Map] {
            assert_eq!(view.to_string().parse::<ViewType>(), Ok(view));
        }
    }

    #[test]
    fn test_display_type_from_namespace() {
        assert_eq!(DisplayType::from("powergrid"), DisplayType::Powergrid);
        assert_eq!(DisplayType::from("PowerGrid"), DisplayType::Powergrid);
        assert_eq!(DisplayType::from("network"), DisplayType::Network);
        assert_eq!(
            DisplayType::from("vmware"),
            DisplayType::Other("vmware".to_string())
        );
        assert_eq!(DisplayType::from("VMware"), DisplayType::from("vmware"));
        assert_eq!(
            DisplayType::from(" VMware "),
            DisplayType::Other("vmware".to_string())
        );

        assert!(DisplayType::Powergrid.is_powergrid());
        assert!(!DisplayType::Application.is_powergrid());
        assert_eq!(DisplayType::Other("vmware".into()).to_string(), "vmware");
    }
}
