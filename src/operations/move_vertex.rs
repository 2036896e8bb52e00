use crate::error::Result;
use crate::math::Point3;
use crate::scene::{PolygonId, SceneStore};

/// Moves one corner of a polygon's boundary to a new position.
pub struct MoveVertex {
    polygon: PolygonId,
    corner: usize,
    point: Point3,
}

impl MoveVertex {
    /// Creates a new `MoveVertex` operation.
    #[must_use]
    pub fn new(polygon: PolygonId, corner: usize, point: Point3) -> Self {
        Self {
            polygon,
            corner,
            point,
        }
    }

    /// Executes the operation, replacing the corner's position.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not found or the corner index is
    /// out of range.
    pub fn execute(&self, store: &mut SceneStore) -> Result<()> {
        let boundary = &store.polygon(self.polygon)?.boundary;
        let updated = boundary.with_vertex(self.corner, self.point)?;
        store.polygon_mut(self.polygon)?.boundary = updated;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Boundary;
    use crate::scene::PolygonData;

    #[test]
    fn replaces_corner_position() {
        let mut store = SceneStore::new();
        let id = store.add_polygon(PolygonData::draft(Boundary::from_points(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])));

        MoveVertex::new(id, 1, Point3::new(2.0, 0.5, 0.0))
            .execute(&mut store)
            .unwrap();

        let boundary = &store.polygon(id).unwrap().boundary;
        assert_eq!(boundary.points()[1], Point3::new(2.0, 0.5, 0.0));
        assert_eq!(boundary.len(), 3);
    }

    #[test]
    fn out_of_range_corner_fails() {
        let mut store = SceneStore::new();
        let id = store.add_polygon(PolygonData::draft(Boundary::new()));

        let result = MoveVertex::new(id, 0, Point3::new(1.0, 1.0, 0.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
