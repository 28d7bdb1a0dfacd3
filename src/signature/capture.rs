use serde::Serialize;

use super::canvas::{Canvas, Pen};
use super::input::{Point, PointerEvent, PointerKind, PointerPhase, SurfaceFrame};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_error, log_info};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CaptureStatus {
    Closed,
    Idle,
    Drawing,
}

impl Default for CaptureStatus {
    fn default() -> Self {
        CaptureStatus::Closed
    }
}

/// One continuous pointer-down-to-pointer-up gesture as an ordered point
/// list. Always holds at least one point; read-only once committed.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    fn new(origin: Point) -> Self {
        Self {
            points: vec![origin],
        }
    }

    fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last_point(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

/// Strokes accumulated since the surface was last opened or cleared.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignatureSession {
    strokes: Vec<Stroke>,
}

impl SignatureSession {
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    fn clear(&mut self) {
        self.strokes.clear();
    }
}

/// Completion handler registered by `open`, consumed by the first `save`.
pub type SaveHandler = Box<dyn FnOnce(String)>;

/// Interactive signature surface: a `{Closed, Idle, Drawing}` state machine
/// over one exclusively-owned session. UI-thread-bound, all transitions take
/// `&mut self`, no internal locking. Misuse (drawing before open, saving
/// with no raster) degrades to a no-op rather than an error.
pub struct SignatureCapture {
    status: CaptureStatus,
    title: Option<String>,
    frame: Option<SurfaceFrame>,
    canvas: Option<Canvas>,
    session: SignatureSession,
    in_progress: Option<Stroke>,
    on_save: Option<SaveHandler>,
    pen: Pen,
    background: [u8; 4],
}

impl SignatureCapture {
    pub fn new() -> Self {
        Self::with_style(Pen::default(), [255, 255, 255, 255])
    }

    pub fn with_style(pen: Pen, background: [u8; 4]) -> Self {
        Self {
            status: CaptureStatus::default(),
            title: None,
            frame: None,
            canvas: None,
            session: SignatureSession::default(),
            in_progress: None,
            on_save: None,
            pen,
            background,
        }
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status != CaptureStatus::Closed
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn frame(&self) -> Option<SurfaceFrame> {
        self.frame
    }

    pub fn session(&self) -> &SignatureSession {
        &self.session
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Activate the surface: prior strokes and raster are discarded, the
    /// raster is sized to `frame`, and `on_save` is registered for the save
    /// completion. Opening while already open resets everything.
    pub fn open(&mut self, title: impl Into<String>, frame: SurfaceFrame, on_save: SaveHandler) {
        let title = title.into();
        log_info!("signature surface opened: {title}");

        self.status = CaptureStatus::Idle;
        self.title = Some(title);
        self.frame = Some(frame);
        self.canvas = Some(Canvas::new(
            frame.pixel_width(),
            frame.pixel_height(),
            self.background,
        ));
        self.session.clear();
        self.in_progress = None;
        self.on_save = Some(on_save);
    }

    /// Track a container resize while open: the raster is rebuilt at the new
    /// size and the session's strokes are re-painted onto it (strokes are the
    /// source of truth, ink is not lost). No-op when closed.
    pub fn resize(&mut self, frame: SurfaceFrame) {
        if self.status == CaptureStatus::Closed {
            return;
        }

        self.frame = Some(frame);
        let mut canvas = Canvas::new(frame.pixel_width(), frame.pixel_height(), self.background);
        for stroke in self.session.strokes() {
            paint_stroke(&mut canvas, stroke, &self.pen);
        }
        if let Some(stroke) = &self.in_progress {
            paint_stroke(&mut canvas, stroke, &self.pen);
        }
        self.canvas = Some(canvas);
        log_debug!(
            "surface resized to {}x{}",
            frame.pixel_width(),
            frame.pixel_height()
        );
    }

    /// Start a stroke at `point`. Silently ignored unless the surface is
    /// open and idle.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.status != CaptureStatus::Idle {
            return;
        }

        if let Some(canvas) = &mut self.canvas {
            canvas.paint_dot(point, &self.pen);
        }
        self.in_progress = Some(Stroke::new(point));
        self.status = CaptureStatus::Drawing;
        log_debug!("stroke started at ({}, {})", point.x, point.y);
    }

    /// Append `point` to the stroke in progress and ink the connecting
    /// segment. Ignored when no stroke is in progress.
    pub fn extend_stroke(&mut self, point: Point) {
        let Some(stroke) = &mut self.in_progress else {
            return;
        };

        let from = stroke.last_point();
        stroke.push(point);
        if let Some(canvas) = &mut self.canvas {
            canvas.paint_segment(from, point, &self.pen);
        }
        log_debug!("stroke extended to ({}, {})", point.x, point.y);
    }

    /// Commit the stroke in progress to the session. Ignored when none is.
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.in_progress.take() else {
            return;
        };

        log_debug!("stroke committed with {} points", stroke.points().len());
        self.session.commit(stroke);
        self.status = CaptureStatus::Idle;
    }

    /// Drop every stroke (including one in progress) and blank the raster.
    /// The surface stays open.
    pub fn clear(&mut self) {
        if self.status == CaptureStatus::Closed {
            return;
        }

        self.session.clear();
        self.in_progress = None;
        if let Some(canvas) = &mut self.canvas {
            canvas.clear();
        }
        self.status = CaptureStatus::Idle;
        log_info!("signature surface cleared");
    }

    /// Serialize the raster to a PNG data URI, hand it to the completion
    /// handler registered by `open` (fired at most once), and close the
    /// surface. A zero-stroke session still encodes the blank surface;
    /// rejecting unsigned submissions is the caller's responsibility. With
    /// no raster present (never opened) this is a no-op returning `None`.
    pub fn save(&mut self) -> Option<String> {
        let canvas = self.canvas.as_ref()?;
        let payload = match canvas.to_data_uri() {
            Ok(payload) => payload,
            Err(err) => {
                log_error!("failed to encode signature: {err:?}");
                return None;
            }
        };

        // The stroke in progress is never committed by save; pixels already
        // inked are exported as-is.
        self.in_progress = None;
        self.status = CaptureStatus::Closed;
        self.title = None;

        if let Some(handler) = self.on_save.take() {
            handler(payload.clone());
        }

        log_info!(
            "signature saved: {} strokes, {} byte payload",
            self.session.stroke_count(),
            payload.len()
        );
        Some(payload)
    }

    /// Close the surface without firing the completion handler. The handler
    /// and the stroke in progress are dropped; ink already on the raster
    /// stays there until the next `open` or `clear`.
    pub fn cancel(&mut self) {
        if self.status == CaptureStatus::Closed {
            return;
        }

        self.in_progress = None;
        self.on_save = None;
        self.status = CaptureStatus::Closed;
        self.title = None;
        log_info!("signature capture cancelled");
    }

    /// Route one raw pointer event through the frame mapping into the stroke
    /// operations: down begins, move extends, up/leave ends. Returns `true`
    /// when the host must suppress its default scroll/pan handling, which is
    /// exactly for touch events taking part in a stroke.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if self.status == CaptureStatus::Closed {
            return false;
        }
        let Some(frame) = self.frame else {
            return false;
        };

        let local = frame.to_local(&event);
        let participated = match event.phase {
            PointerPhase::Down => {
                self.begin_stroke(local);
                self.status == CaptureStatus::Drawing
            }
            PointerPhase::Move => {
                let drawing = self.status == CaptureStatus::Drawing;
                if drawing {
                    self.extend_stroke(local);
                }
                drawing
            }
            PointerPhase::Up | PointerPhase::Leave => {
                let drawing = self.status == CaptureStatus::Drawing;
                self.end_stroke();
                drawing
            }
        };

        participated && event.kind == PointerKind::Touch
    }
}

impl Default for SignatureCapture {
    fn default() -> Self {
        Self::new()
    }
}

fn paint_stroke(canvas: &mut Canvas, stroke: &Stroke, pen: &Pen) {
    let points = stroke.points();
    canvas.paint_dot(points[0], pen);
    for pair in points.windows(2) {
        canvas.paint_segment(pair[0], pair[1], pen);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn test_frame() -> SurfaceFrame {
        SurfaceFrame::new(0.0, 0.0, 60.0, 40.0)
    }

    fn noop_handler() -> SaveHandler {
        Box::new(|_| {})
    }

    #[test]
    fn test_stroke_records_points_in_order() {
        let mut capture = SignatureCapture::new();
        capture.open("Firma", test_frame(), noop_handler());

        let points = [
            Point::new(5.0, 5.0),
            Point::new(6.0, 7.0),
            Point::new(9.0, 11.0),
            Point::new(14.0, 12.0),
        ];
        capture.begin_stroke(points[0]);
        for point in &points[1..] {
            capture.extend_stroke(*point);
        }
        capture.end_stroke();

        let strokes = capture.session().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points(), &points);
    }

    #[test]
    fn test_fresh_surface_starts_closed() {
        assert_eq!(CaptureStatus::default(), CaptureStatus::Closed);

        let capture = SignatureCapture::default();
        assert_eq!(capture.status(), CaptureStatus::Closed);
        assert!(!capture.is_open());
    }

    #[test]
    fn test_drawing_before_open_is_ignored() {
        let mut capture = SignatureCapture::new();
        capture.begin_stroke(Point::new(1.0, 1.0));
        capture.extend_stroke(Point::new(2.0, 2.0));
        capture.end_stroke();

        assert_eq!(capture.status(), CaptureStatus::Closed);
        assert!(capture.session().is_empty());
    }

    #[test]
    fn test_extend_without_begin_is_ignored() {
        let mut capture = SignatureCapture::new();
        capture.open("Firma", test_frame(), noop_handler());
        capture.extend_stroke(Point::new(2.0, 2.0));
        capture.end_stroke();

        assert_eq!(capture.status(), CaptureStatus::Idle);
        assert!(capture.session().is_empty());
    }

    #[test]
    fn test_clear_always_leaves_zero_strokes() {
        let mut capture = SignatureCapture::new();
        capture.open("Firma", test_frame(), noop_handler());

        capture.begin_stroke(Point::new(3.0, 3.0));
        capture.extend_stroke(Point::new(8.0, 8.0));
        capture.end_stroke();
        capture.begin_stroke(Point::new(20.0, 9.0));

        // Clears both committed strokes and the one in progress.
        capture.clear();
        assert_eq!(capture.session().stroke_count(), 0);
        assert_eq!(capture.status(), CaptureStatus::Idle);

        let canvas = capture.canvas().unwrap();
        assert_eq!(canvas.pixel(3, 3), Some(image::Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_save_without_open_is_noop() {
        let mut capture = SignatureCapture::new();
        assert_eq!(capture.save(), None);
    }

    #[test]
    fn test_save_fires_handler_once_and_closes() {
        let captured: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = captured.clone();

        let mut capture = SignatureCapture::new();
        capture.open(
            "Firma",
            test_frame(),
            Box::new(move |payload| sink.borrow_mut().push(payload)),
        );
        capture.begin_stroke(Point::new(10.0, 10.0));
        capture.extend_stroke(Point::new(20.0, 15.0));
        capture.end_stroke();

        let first = capture.save().unwrap();
        assert_eq!(capture.status(), CaptureStatus::Closed);
        assert_eq!(captured.borrow().len(), 1);
        assert_eq!(captured.borrow()[0], first);
        assert!(first.starts_with("data:image/png;base64,"));

        // Saving again re-encodes the same pixels but cannot re-fire the
        // consumed handler.
        let second = capture.save().unwrap();
        assert_eq!(first, second);
        assert_eq!(captured.borrow().len(), 1);
    }

    #[test]
    fn test_empty_session_save_encodes_blank_surface() {
        let fired = Rc::new(RefCell::new(false));
        let sink = fired.clone();

        let mut capture = SignatureCapture::new();
        capture.open(
            "Firma",
            test_frame(),
            Box::new(move |_| *sink.borrow_mut() = true),
        );
        let payload = capture.save().unwrap();

        assert!(payload.starts_with("data:image/png;base64,"));
        assert!(*fired.borrow());
    }

    #[test]
    fn test_cancel_drops_handler_without_firing() {
        let fired = Rc::new(RefCell::new(false));
        let sink = fired.clone();

        let mut capture = SignatureCapture::new();
        capture.open(
            "Firma",
            test_frame(),
            Box::new(move |_| *sink.borrow_mut() = true),
        );
        capture.begin_stroke(Point::new(4.0, 4.0));
        capture.cancel();

        assert_eq!(capture.status(), CaptureStatus::Closed);
        assert!(!*fired.borrow());

        // Saving after cancel exports the leftover raster but has no handler
        // left to notify.
        assert!(capture.save().is_some());
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_reopen_resets_previous_session() {
        let mut capture = SignatureCapture::new();
        capture.open("Primera", test_frame(), noop_handler());
        capture.begin_stroke(Point::new(5.0, 5.0));
        capture.end_stroke();
        assert_eq!(capture.session().stroke_count(), 1);

        capture.open("Segunda", test_frame(), noop_handler());
        assert_eq!(capture.session().stroke_count(), 0);
        assert_eq!(capture.title(), Some("Segunda"));
        assert_eq!(capture.status(), CaptureStatus::Idle);
    }

    #[test]
    fn test_mid_stroke_save_does_not_commit() {
        let mut capture = SignatureCapture::new();
        capture.open("Firma", test_frame(), noop_handler());
        capture.begin_stroke(Point::new(5.0, 5.0));
        capture.extend_stroke(Point::new(12.0, 9.0));

        capture.save().unwrap();
        assert_eq!(capture.session().stroke_count(), 0);
    }

    #[test]
    fn test_touch_suppression_only_while_drawing() {
        let mut capture = SignatureCapture::new();
        capture.open("Firma", test_frame(), noop_handler());

        // Touch move with no stroke active: host keeps scrolling.
        assert!(!capture.handle_pointer(PointerEvent::touch(PointerPhase::Move, 10.0, 10.0)));

        assert!(capture.handle_pointer(PointerEvent::touch(PointerPhase::Down, 10.0, 10.0)));
        assert!(capture.handle_pointer(PointerEvent::touch(PointerPhase::Move, 14.0, 12.0)));
        assert!(capture.handle_pointer(PointerEvent::touch(PointerPhase::Up, 14.0, 12.0)));

        // Mouse input never asks for suppression.
        assert!(!capture.handle_pointer(PointerEvent::mouse(PointerPhase::Down, 10.0, 10.0)));
        assert!(!capture.handle_pointer(PointerEvent::mouse(PointerPhase::Move, 16.0, 12.0)));
        assert!(!capture.handle_pointer(PointerEvent::mouse(PointerPhase::Up, 16.0, 12.0)));

        assert_eq!(capture.session().stroke_count(), 2);
    }

    #[test]
    fn test_pointer_events_map_through_frame_origin() {
        let mut capture = SignatureCapture::new();
        capture.open(
            "Firma",
            SurfaceFrame::new(100.0, 200.0, 60.0, 40.0),
            noop_handler(),
        );

        capture.handle_pointer(PointerEvent::mouse(PointerPhase::Down, 110.0, 215.0));
        capture.handle_pointer(PointerEvent::mouse(PointerPhase::Up, 110.0, 215.0));

        let strokes = capture.session().strokes();
        assert_eq!(strokes[0].points(), &[Point::new(10.0, 15.0)]);
    }

    #[test]
    fn test_leave_ends_stroke_like_up() {
        let mut capture = SignatureCapture::new();
        capture.open("Firma", test_frame(), noop_handler());

        capture.handle_pointer(PointerEvent::mouse(PointerPhase::Down, 5.0, 5.0));
        capture.handle_pointer(PointerEvent::mouse(PointerPhase::Move, 8.0, 8.0));
        capture.handle_pointer(PointerEvent::mouse(PointerPhase::Leave, 8.0, 8.0));

        assert_eq!(capture.status(), CaptureStatus::Idle);
        assert_eq!(capture.session().stroke_count(), 1);
    }

    #[test]
    fn test_resize_repaints_committed_strokes() {
        let mut capture = SignatureCapture::new();
        capture.open("Firma", test_frame(), noop_handler());
        capture.begin_stroke(Point::new(10.0, 10.0));
        capture.extend_stroke(Point::new(20.0, 10.0));
        capture.end_stroke();

        capture.resize(SurfaceFrame::new(0.0, 0.0, 120.0, 80.0));

        let canvas = capture.canvas().unwrap();
        assert_eq!(canvas.width(), 120);
        assert_eq!(canvas.height(), 80);
        // Ink survives the resize because strokes are re-painted.
        assert_eq!(canvas.pixel(15, 10), Some(Pen::default().ink));
    }

    #[test]
    fn test_resize_while_closed_is_ignored() {
        let mut capture = SignatureCapture::new();
        capture.resize(SurfaceFrame::new(0.0, 0.0, 100.0, 100.0));
        assert!(capture.canvas().is_none());
    }
}
