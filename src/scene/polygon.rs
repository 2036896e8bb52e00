use crate::geometry::Boundary;

slotmap::new_key_type! {
    /// Unique identifier for a polygon in the scene store.
    pub struct PolygonId;
}

/// Lifecycle phase of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonPhase {
    /// Being drawn or edited.
    Draft,
    /// Saved by the user.
    Committed,
}

/// Data associated with a polygon in the scene.
#[derive(Debug, Clone)]
pub struct PolygonData {
    /// The polygon's outer boundary.
    pub boundary: Boundary,
    /// Current lifecycle phase.
    pub phase: PolygonPhase,
}

impl PolygonData {
    /// Creates a polygon in the [`PolygonPhase::Draft`] phase.
    #[must_use]
    pub fn draft(boundary: Boundary) -> Self {
        Self {
            boundary,
            phase: PolygonPhase::Draft,
        }
    }

    /// Creates a polygon in the [`PolygonPhase::Committed`] phase.
    #[must_use]
    pub fn committed(boundary: Boundary) -> Self {
        Self {
            boundary,
            phase: PolygonPhase::Committed,
        }
    }
}
