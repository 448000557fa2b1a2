use crate::{Position, zoom::Zoom};

/// Where the camera should end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    pub target: Position,
    pub zoom: Zoom,
}

/// Imperative camera commands. The camera state itself belongs to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraUpdate {
    /// One zoom level closer, bounded by the zoom preference.
    ZoomIn,
    /// One zoom level further, bounded by the zoom preference.
    ZoomOut,
    /// Move to the position.
    Position(CameraPosition),
}
