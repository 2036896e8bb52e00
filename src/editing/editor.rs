use crate::editing::PickHit;
use crate::error::{EditingError, Result};
use crate::geometry::Boundary;
use crate::math::Point3;
use crate::operations::{InsertVertex, MoveVertex, RemoveVertex};
use crate::scene::{PolygonData, PolygonId, PolygonPhase, SceneStore};

/// A corner drag in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTarget {
    /// The polygon whose corner is being dragged.
    pub polygon: PolygonId,
    /// The corner's index within the polygon's boundary.
    pub corner: usize,
}

/// The state change produced by dispatching a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A corner drag began; camera input stays locked until release.
    DragStarted {
        /// The polygon whose corner is being dragged.
        polygon: PolygonId,
        /// The dragged corner's index.
        corner: usize,
    },
    /// A polygon was selected.
    Selected(PolygonId),
    /// A vertex was inserted into the polygon being drawn.
    VertexInserted {
        /// The polygon that received the vertex.
        polygon: PolygonId,
        /// The index the vertex was inserted at.
        index: usize,
    },
    /// A new draft polygon was started at the pressed point.
    DraftStarted(PolygonId),
    /// The selection was cleared.
    Deselected,
    /// The press had no effect.
    Ignored,
}

/// Interactive polygon editing session over a [`SceneStore`].
///
/// Owns the scene plus the session state the surrounding application used
/// to keep in component state: draw mode, selection, the draft polygon
/// under construction, and any corner drag in progress. The interaction
/// layer drives it with [`PickHit`] classifications and ground points and
/// re-renders from the scene afterwards.
#[derive(Debug, Default)]
pub struct Editor {
    scene: SceneStore,
    drawing: bool,
    selected: Option<PolygonId>,
    editing: Option<PolygonId>,
    drag: Option<DragTarget>,
}

impl Editor {
    /// Creates an editor with an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying scene.
    #[must_use]
    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    /// Returns `true` while a drawing session is active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Returns the currently selected polygon, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PolygonId> {
        self.selected
    }

    /// Returns the draft polygon under construction, if any.
    #[must_use]
    pub fn editing(&self) -> Option<PolygonId> {
        self.editing
    }

    /// Returns the corner drag in progress, if any.
    #[must_use]
    pub fn drag(&self) -> Option<DragTarget> {
        self.drag
    }

    /// Returns `true` while camera input should be suppressed.
    ///
    /// Held from a press on a corner handle until [`Editor::release`], so
    /// dragging a corner does not also rotate the globe.
    #[must_use]
    pub fn camera_locked(&self) -> bool {
        self.drag.is_some()
    }

    /// Dispatches a press (left button down).
    ///
    /// `ground` is the picked point on the globe surface under the cursor,
    /// if the pick ray hit it; it is only consulted when the press hit
    /// nothing else and a drawing session is active.
    ///
    /// # Errors
    ///
    /// Returns an error if the hit references a polygon that is not in the
    /// scene.
    pub fn press(&mut self, hit: PickHit, ground: Option<Point3>) -> Result<PressOutcome> {
        match hit {
            PickHit::Corner { polygon, corner } => {
                self.scene.polygon(polygon)?;
                self.drag = Some(DragTarget { polygon, corner });
                self.selected = Some(polygon);
                Ok(PressOutcome::DragStarted { polygon, corner })
            }
            PickHit::Polygon(polygon) => {
                self.scene.polygon(polygon)?;
                self.selected = Some(polygon);
                Ok(PressOutcome::Selected(polygon))
            }
            PickHit::Miss => {
                if !self.drawing {
                    self.selected = None;
                    return Ok(PressOutcome::Deselected);
                }
                let Some(point) = ground else {
                    // Pick ray missed the globe.
                    return Ok(PressOutcome::Ignored);
                };
                if let Some(polygon) = self.editing {
                    let index = InsertVertex::new(polygon, point).execute(&mut self.scene)?;
                    Ok(PressOutcome::VertexInserted { polygon, index })
                } else {
                    let id = self
                        .scene
                        .add_polygon(PolygonData::draft(Boundary::from_points(vec![point])));
                    self.editing = Some(id);
                    self.selected = Some(id);
                    Ok(PressOutcome::DraftStarted(id))
                }
            }
        }
    }

    /// Dispatches a release (left button up), ending any corner drag.
    pub fn release(&mut self) {
        self.drag = None;
    }

    /// Moves the dragged corner to `point`.
    ///
    /// Returns `false` when no drag is active (cursor movement with the
    /// button up is not an edit).
    ///
    /// # Errors
    ///
    /// Returns an error if the dragged polygon has been removed from the
    /// scene or the corner index no longer exists.
    pub fn drag_to(&mut self, point: Point3) -> Result<bool> {
        let Some(target) = self.drag else {
            return Ok(false);
        };
        MoveVertex::new(target.polygon, target.corner, point).execute(&mut self.scene)?;
        Ok(true)
    }

    /// Removes the corner identified by `hit` from its polygon.
    ///
    /// Returns the removed point, or `None` when the hit is not a corner.
    ///
    /// # Errors
    ///
    /// Returns an error if the corner's polygon is not in the scene or the
    /// corner index is out of range.
    pub fn remove_corner(&mut self, hit: PickHit) -> Result<Option<Point3>> {
        let PickHit::Corner { polygon, corner } = hit else {
            return Ok(None);
        };
        let removed = RemoveVertex::new(polygon, corner).execute(&mut self.scene)?;
        // Corner indices after the removed one shifted down; a drag on the
        // same polygon would target the wrong corner.
        if self.drag.is_some_and(|target| target.polygon == polygon) {
            self.drag = None;
        }
        Ok(Some(removed))
    }

    /// Starts a drawing session.
    ///
    /// # Errors
    ///
    /// Returns an error if a drawing session is already in progress.
    pub fn start_drawing(&mut self) -> Result<()> {
        if self.drawing {
            return Err(EditingError::DrawingInProgress.into());
        }
        self.drawing = true;
        Ok(())
    }

    /// Finishes the drawing session, committing the draft polygon.
    ///
    /// Returns the committed polygon's ID, or `None` when the session ended
    /// without a single press on the globe. Selection and any drag are
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if no drawing session is in progress.
    pub fn finish_drawing(&mut self) -> Result<Option<PolygonId>> {
        if !self.drawing {
            return Err(EditingError::NotDrawing.into());
        }
        let committed = self.editing.take();
        if let Some(id) = committed {
            self.scene.polygon_mut(id)?.phase = PolygonPhase::Committed;
        }
        self.drawing = false;
        self.selected = None;
        self.drag = None;
        Ok(committed)
    }

    /// Reopens the selected committed polygon for editing.
    ///
    /// The polygon returns to the draft phase and a drawing session starts,
    /// so subsequent presses on the globe insert vertices into it.
    ///
    /// # Errors
    ///
    /// Returns an error if a drawing session is in progress, nothing is
    /// selected, or the selected polygon is not in the scene.
    pub fn edit_selected(&mut self) -> Result<PolygonId> {
        if self.drawing {
            return Err(EditingError::DrawingInProgress.into());
        }
        let id = self.selected.ok_or(EditingError::NothingSelected)?;
        self.scene.polygon_mut(id)?.phase = PolygonPhase::Draft;
        self.editing = Some(id);
        self.drawing = true;
        Ok(id)
    }

    /// Selects a polygon (e.g. from a listing panel).
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not in the scene.
    pub fn select(&mut self, id: PolygonId) -> Result<()> {
        self.scene.polygon(id)?;
        self.selected = Some(id);
        Ok(())
    }

    /// Removes the selected polygon, clearing the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if a drawing session is in progress or nothing is
    /// selected.
    pub fn remove_selected(&mut self) -> Result<PolygonId> {
        if self.drawing {
            return Err(EditingError::DrawingInProgress.into());
        }
        let id = self.selected.ok_or(EditingError::NothingSelected)?;
        self.scene.remove_polygon(id)?;
        self.selected = None;
        Ok(id)
    }

    /// Removes the most recently committed polygon.
    ///
    /// Permitted during a drawing session; drafts are never the target.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene has no committed polygon.
    pub fn remove_last(&mut self) -> Result<PolygonId> {
        let id = self
            .scene
            .last_committed()
            .ok_or(EditingError::NothingToRemove)?;
        self.remove_polygon(id)?;
        Ok(id)
    }

    /// Removes a polygon by ID, dropping any session state referencing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon is not in the scene.
    pub fn remove_polygon(&mut self, id: PolygonId) -> Result<()> {
        self.scene.remove_polygon(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.drag.is_some_and(|target| target.polygon == id) {
            self.drag = None;
        }
        Ok(())
    }
}
