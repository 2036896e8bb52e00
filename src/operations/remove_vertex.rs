use crate::error::Result;
use crate::math::Point3;
use crate::scene::{PolygonId, SceneStore};

/// Removes one corner from a polygon's boundary.
pub struct RemoveVertex {
    polygon: PolygonId,
    corner: usize,
}

impl RemoveVertex {
    /// Creates a new `RemoveVertex` operation.
    #[must_use]
    pub fn new(polygon: PolygonId, corner: usize) -> Self {
        Self { polygon, corner }
    }

    /// Executes the operation, returning the removed point.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not found or the corner index is
    /// out of range.
    pub fn execute(&self, store: &mut SceneStore) -> Result<Point3> {
        let boundary = &store.polygon(self.polygon)?.boundary;
        let updated = boundary.without_vertex(self.corner)?;
        let removed = boundary.points()[self.corner];
        store.polygon_mut(self.polygon)?.boundary = updated;
        Ok(removed)
    }
}
