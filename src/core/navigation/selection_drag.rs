use crate::core::data::point::CanvasPoint;

/// Canvas-space rectangle of the selection box being dragged, ready to draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelectionOverlay {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer-down / move / up tracking for select-to-zoom.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SelectionDrag {
    drag: Option<(CanvasPoint, CanvasPoint)>,
}

impl SelectionDrag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag at `at`. Ignored while a render is in flight; returns
    /// whether the drag started.
    pub fn begin(&mut self, at: CanvasPoint, rendering: bool) -> bool {
        if rendering {
            return false;
        }

        self.drag = Some((at, at));
        true
    }

    pub fn update(&mut self, at: CanvasPoint) {
        if let Some((_, end)) = &mut self.drag {
            *end = at;
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<SelectionOverlay> {
        self.drag.map(|(start, end)| SelectionOverlay {
            left: start.x.min(end.x),
            top: start.y.min(end.y),
            width: (end.x - start.x).abs(),
            height: (end.y - start.y).abs(),
        })
    }

    /// Ends the drag, yielding the raw `(start, end)` pair in the order the
    /// pointer travelled.
    pub fn finish(&mut self) -> Option<(CanvasPoint, CanvasPoint)> {
        self.drag.take()
    }

    pub fn abort(&mut self) {
        self.drag = None;
    }
}
