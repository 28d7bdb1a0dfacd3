pub mod canvas;
pub mod capture;
pub mod input;

pub use canvas::{Canvas, Pen};
pub use capture::{CaptureStatus, SaveHandler, SignatureCapture, SignatureSession, Stroke};
pub use input::{Point, PointerEvent, PointerKind, PointerPhase, SurfaceFrame};
