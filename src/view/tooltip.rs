//! Tooltip placement geometry.
//!
//! Pure function from (anchor row, popup size, viewport) to a popup rect.
//! Preferred position is just below the anchor line; near the bottom edge it
//! flips above, and horizontally it clamps inside the viewport.

use ratatui::layout::Rect;

/// Place a `width` x `height` tooltip anchored to `anchor_y`/`anchor_x`
/// inside `viewport`. The result always lies within the viewport (the size
/// shrinks only if the viewport itself is smaller than the tooltip).
pub fn place(anchor_x: u16, anchor_y: u16, width: u16, height: u16, viewport: Rect) -> Rect {
    let width = width.min(viewport.width);
    let height = height.min(viewport.height);

    let viewport_right = viewport.x + viewport.width;
    let viewport_bottom = viewport.y + viewport.height;

    // Below the anchor when it fits, otherwise flipped above.
    let below = anchor_y.saturating_add(1);
    let y = if below + height <= viewport_bottom {
        below.max(viewport.y)
    } else {
        anchor_y
            .saturating_sub(height)
            .max(viewport.y)
            .min(viewport_bottom.saturating_sub(height))
    };

    // Clamp horizontally.
    let x = anchor_x
        .min(viewport_right.saturating_sub(width))
        .max(viewport.x);

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn contains(outer: Rect, inner: Rect) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.x + inner.width <= outer.x + outer.width
            && inner.y + inner.height <= outer.y + outer.height
    }

    #[test]
    fn test_placed_below_anchor_by_default() {
        let rect = place(10, 5, 30, 4, VIEWPORT);
        assert_eq!(rect.y, 6);
        assert_eq!(rect.x, 10);
        assert!(contains(VIEWPORT, rect));
    }

    #[test]
    fn test_flips_above_near_bottom_edge() {
        let rect = place(10, 22, 30, 4, VIEWPORT);
        assert!(rect.y + rect.height <= 22, "should sit above the anchor");
        assert!(contains(VIEWPORT, rect));
    }

    #[test]
    fn test_clamps_at_right_edge() {
        let rect = place(75, 5, 30, 4, VIEWPORT);
        assert_eq!(rect.x + rect.width, VIEWPORT.width);
        assert!(contains(VIEWPORT, rect));
    }

    #[test]
    fn test_never_escapes_viewport_corners() {
        for (x, y) in [(0, 0), (79, 0), (0, 23), (79, 23)] {
            let rect = place(x, y, 30, 4, VIEWPORT);
            assert!(contains(VIEWPORT, rect), "anchor ({x},{y}) escaped: {rect:?}");
        }
    }

    #[test]
    fn test_oversized_tooltip_shrinks_to_viewport() {
        let small = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 3,
        };
        let rect = place(5, 1, 40, 10, small);
        assert!(contains(small, rect));
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 3);
    }
}
