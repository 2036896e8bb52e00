pub mod polygon;

pub use polygon::{PolygonData, PolygonId, PolygonPhase};

use crate::error::SceneError;
use slotmap::SlotMap;

/// Central arena that owns all polygons in a viewer scene.
///
/// Polygons are referenced via typed IDs (generational indices), so callers
/// never hold dangling references across removals. Insertion order is kept
/// alongside the arena so listings are stable and "last polygon" is well
/// defined.
#[derive(Debug, Default)]
pub struct SceneStore {
    polygons: SlotMap<PolygonId, PolygonData>,
    order: Vec<PolygonId>,
}

impl SceneStore {
    /// Creates a new, empty scene store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a polygon and returns its ID.
    pub fn add_polygon(&mut self, data: PolygonData) -> PolygonId {
        let id = self.polygons.insert(data);
        self.order.push(id);
        id
    }

    /// Returns a reference to the polygon data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not found in the store.
    pub fn polygon(&self, id: PolygonId) -> Result<&PolygonData, SceneError> {
        self.polygons.get(id).ok_or(SceneError::PolygonNotFound(id))
    }

    /// Returns a mutable reference to the polygon data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not found in the store.
    pub fn polygon_mut(&mut self, id: PolygonId) -> Result<&mut PolygonData, SceneError> {
        self.polygons
            .get_mut(id)
            .ok_or(SceneError::PolygonNotFound(id))
    }

    /// Removes a polygon, returning its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not found in the store.
    pub fn remove_polygon(&mut self, id: PolygonId) -> Result<PolygonData, SceneError> {
        let data = self
            .polygons
            .remove(id)
            .ok_or(SceneError::PolygonNotFound(id))?;
        self.order.retain(|&other| other != id);
        Ok(data)
    }

    /// Returns the most recently added committed polygon, if any.
    #[must_use]
    pub fn last_committed(&self) -> Option<PolygonId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|&id| {
                self.polygons
                    .get(id)
                    .is_some_and(|data| data.phase == PolygonPhase::Committed)
            })
    }

    /// Iterates over all polygons in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PolygonId, &PolygonData)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.polygons.get(id).map(|data| (id, data)))
    }

    /// Returns the number of polygons in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the scene has no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
