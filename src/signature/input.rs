use serde::{Deserialize, Serialize};

/// Input modality that produced a pointer event. Mouse and touch go through
/// the same surface-local mapping so strokes land under the pointer either
/// way; the distinction only matters for scroll suppression.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

/// A 2D point in surface-local coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One raw pointer event as delivered by the host, in screen coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub screen_x: f32,
    pub screen_y: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, phase: PointerPhase, screen_x: f32, screen_y: f32) -> Self {
        Self {
            kind,
            phase,
            screen_x,
            screen_y,
        }
    }

    pub fn mouse(phase: PointerPhase, screen_x: f32, screen_y: f32) -> Self {
        Self::new(PointerKind::Mouse, phase, screen_x, screen_y)
    }

    pub fn touch(phase: PointerPhase, screen_x: f32, screen_y: f32) -> Self {
        Self::new(PointerKind::Touch, phase, screen_x, screen_y)
    }
}

/// On-screen placement of the drawing surface: origin in screen coordinates
/// plus the size the raster fills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceFrame {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceFrame {
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Raster width in whole pixels, never zero.
    pub fn pixel_width(&self) -> u32 {
        self.width.round().max(1.0) as u32
    }

    /// Raster height in whole pixels, never zero.
    pub fn pixel_height(&self) -> u32 {
        self.height.round().max(1.0) as u32
    }

    /// Translate a raw event into surface-local coordinates by subtracting
    /// the frame's on-screen origin. Applied identically for mouse and touch.
    pub fn to_local(&self, event: &PointerEvent) -> Point {
        Point::new(
            event.screen_x - self.origin_x,
            event.screen_y - self.origin_y,
        )
    }
}
