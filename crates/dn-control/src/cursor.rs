//! Synthetic cursor shown while the real pointer is captured.
//!
//! Under capture the real cursor is hidden and pinned, so the overlay is
//! advanced by relative motion and wrapped toroidally at the viewport edges.

use crate::platform::Viewport;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorOverlay {
    position: Option<(f64, f64)>,
}

impl CursorOverlay {
    pub fn show(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }

    pub fn hide(&mut self) {
        self.position = None;
    }

    /// Current position, or `None` when the overlay is not rendered.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    /// Advance by a motion delta, wrapping modulo the viewport size.
    pub fn advance(&mut self, dx: f64, dy: f64, viewport: Viewport) {
        if let Some((x, y)) = self.position {
            self.position = Some((wrap(x + dx, viewport.width), wrap(y + dy, viewport.height)));
        }
    }
}

fn wrap(v: f64, extent: f64) -> f64 {
    if extent > 0.0 { v.rem_euclid(extent) } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn hidden_overlay_ignores_motion() {
        let mut overlay = CursorOverlay::default();
        overlay.advance(10.0, 10.0, VIEWPORT);
        assert_eq!(overlay.position(), None);
    }

    #[test]
    fn wraps_past_right_and_bottom_edges() {
        let mut overlay = CursorOverlay::default();
        overlay.show(790.0, 595.0);
        overlay.advance(20.0, 10.0, VIEWPORT);
        assert_eq!(overlay.position(), Some((10.0, 5.0)));
    }

    #[test]
    fn wraps_past_left_and_top_edges() {
        let mut overlay = CursorOverlay::default();
        overlay.show(5.0, 5.0);
        overlay.advance(-15.0, -1605.0, VIEWPORT);
        assert_eq!(overlay.position(), Some((790.0, 200.0)));
    }

    #[test]
    fn zero_sized_viewport_does_not_wrap() {
        let mut overlay = CursorOverlay::default();
        overlay.show(0.0, 0.0);
        overlay.advance(
            -3.0,
            4.0,
            Viewport {
                width: 0.0,
                height: 0.0,
            },
        );
        assert_eq!(overlay.position(), Some((-3.0, 4.0)));
    }
}
