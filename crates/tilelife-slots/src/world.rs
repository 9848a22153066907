//! Saving and restoring a [`World`]'s plane.

use tilelife_engine::{Screen, World};

use crate::error::SlotError;
use crate::store::SlotStore;

/// Slot helpers for [`World`].
///
/// # Example
///
/// ```
/// use tilelife_engine::{EngineConfig, NullScreen, World};
/// use tilelife_slots::{MemorySlots, WorldSlots};
///
/// let mut store = MemorySlots::new();
/// let mut world = World::new(EngineConfig::new(8, 8), NullScreen).unwrap();
/// world.set_cell(1, 1, true);
/// world.save_to(&mut store, "seed").unwrap();
///
/// world.set_cell(1, 1, false);
/// world.load_from(&store, "seed").unwrap();
/// assert!(world.get_cell(1, 1));
/// ```
pub trait WorldSlots {
    /// Save the current plane under `name`.
    fn save_to(&self, store: &mut dyn SlotStore, name: &str) -> Result<(), SlotError>;

    /// Replace the current plane with the one saved under `name` and redraw.
    ///
    /// The generation counter is left alone. On error the world is
    /// unchanged.
    fn load_from(&mut self, store: &dyn SlotStore, name: &str) -> Result<(), SlotError>;
}

impl<S: Screen> WorldSlots for World<S> {
    fn save_to(&self, store: &mut dyn SlotStore, name: &str) -> Result<(), SlotError> {
        store.save(name, self.plane())
    }

    fn load_from(&mut self, store: &dyn SlotStore, name: &str) -> Result<(), SlotError> {
        let plane = store.load(name)?;
        self.engine_mut().replace_plane(plane)?;
        self.redraw();
        tracing::info!(slot = name, generation = %self.generation(), "loaded slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySlots;
    use tilelife_core::BitPlane;
    use tilelife_engine::{ConfigError, EngineConfig, NullScreen};

    #[test]
    fn load_from_rejects_other_geometry() {
        let mut store = MemorySlots::new();
        store.save("small", &BitPlane::new(4, 4).unwrap()).unwrap();
        let mut world = World::new(EngineConfig::new(8, 8), NullScreen).unwrap();
        world.set_cell(0, 0, true);
        match world.load_from(&store, "small") {
            Err(SlotError::Engine(ConfigError::GeometryMismatch { expected, found })) => {
                assert_eq!((expected, found), ((8, 8), (4, 4)));
            }
            other => panic!("expected GeometryMismatch, got {other:?}"),
        }
        assert!(world.get_cell(0, 0));
    }

    #[test]
    fn missing_slot_leaves_world_alone() {
        let store = MemorySlots::new();
        let mut world = World::new(EngineConfig::new(4, 4), NullScreen).unwrap();
        world.set_cell(2, 2, true);
        assert!(matches!(
            world.load_from(&store, "nope"),
            Err(SlotError::NotFound { .. })
        ));
        assert!(world.get_cell(2, 2));
    }
}
