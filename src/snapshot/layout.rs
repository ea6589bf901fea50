// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Layout computation for a [`TopologySnapshot`].

use crate::layout::{compute_layout, Layout};
use crate::{CircleLayoutConfig, Link, TopologySnapshot, Vertex, ViewType};

impl<V, L> TopologySnapshot<V, L>
where
    V: Vertex,
    L: Link,
{
    /// Returns the positions of the snapshot's vertices for the given view.
    ///
    /// Vertices are placed in the order they were given to
    /// [`try_new`][TopologySnapshot::try_new].
    pub fn layout(&self, view: ViewType, config: &CircleLayoutConfig) -> Layout {
        compute_layout(self.vertex_names(), view, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NodePoint;
    use crate::test_utils::{TestLink, TestVertex};
    use crate::{Error, SnapshotConfig};

    #[test]
    fn test_snapshot_layout() -> Result<(), Error> {
        let snapshot = TopologySnapshot::try_new(
            [
                TestVertex::new("west"),
                TestVertex::new("north"),
                TestVertex::new("east"),
            ],
            [
                TestLink::new("west", "north"),
                TestLink::new("north", "east"),
            ],
            SnapshotConfig::default(),
        )?;
        let config = CircleLayoutConfig::default();

        let layout = snapshot.layout(ViewType::Circle, &config);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.get("west"), Some(&NodePoint { x: 600, y: 350 }));
        assert_eq!(layout.get("north"), Some(&NodePoint { x: 225, y: 567 }));
        assert_eq!(layout.get("east"), Some(&NodePoint { x: 225, y: 133 }));

        assert!(snapshot.layout(ViewType::Dagre, &config).is_empty());

        let empty: TopologySnapshot<TestVertex, TestLink> = TopologySnapshot::empty();
        assert!(empty.layout(ViewType::Circle, &config).is_empty());

        Ok(())
    }
}
