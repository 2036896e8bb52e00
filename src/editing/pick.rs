use crate::scene::PolygonId;

/// What the interaction layer hit with a press or click.
///
/// The rendering layer resolves screen-space picking against its own
/// entities (corner handles, polygon fills) and reports the result in this
/// engine-independent form; the editor never sees screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickHit {
    /// A corner handle of a polygon.
    Corner {
        /// The polygon the corner belongs to.
        polygon: PolygonId,
        /// The corner's index within the polygon's boundary.
        corner: usize,
    },
    /// The body of a polygon.
    Polygon(PolygonId),
    /// Empty space, or terrain with no entity on it.
    Miss,
}
