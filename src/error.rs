use thiserror::Error;

use crate::scene::PolygonId;

/// Top-level error type for the Geomark editing kernel.
#[derive(Debug, Error)]
pub enum GeomarkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Editing(#[from] EditingError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("corner {corner} is out of range for a boundary of {len} vertices")]
    CornerOutOfRange { corner: usize, len: usize },
}

/// Errors related to the scene store.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("polygon not found: {0:?}")]
    PolygonNotFound(PolygonId),
}

/// Errors related to the interactive editing session.
#[derive(Debug, Error)]
pub enum EditingError {
    #[error("a drawing session is already in progress")]
    DrawingInProgress,

    #[error("no drawing session is in progress")]
    NotDrawing,

    #[error("no polygon is selected")]
    NothingSelected,

    #[error("the scene has no committed polygon to remove")]
    NothingToRemove,
}

/// Convenience type alias for results using [`GeomarkError`].
pub type Result<T> = std::result::Result<T, GeomarkError>;
