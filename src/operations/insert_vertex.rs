use crate::error::Result;
use crate::math::Point3;
use crate::scene::{PolygonId, SceneStore};

/// Inserts a point into a polygon's boundary on its closest edge.
///
/// The point is spliced in immediately after the start vertex of the edge
/// nearest to it. With fewer than two existing vertices the point is
/// appended at the end instead.
pub struct InsertVertex {
    polygon: PolygonId,
    point: Point3,
}

impl InsertVertex {
    /// Creates a new `InsertVertex` operation.
    #[must_use]
    pub fn new(polygon: PolygonId, point: Point3) -> Self {
        Self { polygon, point }
    }

    /// Executes the operation, returning the index the point was inserted at.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not found.
    pub fn execute(&self, store: &mut SceneStore) -> Result<usize> {
        let boundary = &store.polygon(self.polygon)?.boundary;
        let index = boundary
            .closest_edge(&self.point)
            .map_or(boundary.len(), |edge| edge.index + 1);
        let updated = boundary.inserted(self.point);
        store.polygon_mut(self.polygon)?.boundary = updated;
        Ok(index)
    }
}
