//! Lines, circles and rectangles
//!
//! Everything here reduces to [`Framebuffer::set_pixel`] or
//! [`Framebuffer::toggle_pixel`], so clipping follows the pixel accessor:
//! whatever falls outside the panel is dropped, nothing is reported.

use core::mem::swap;

use crate::color::Color;
use crate::framebuffer::Framebuffer;

/// Last coordinate covered by a run of `len` pixels starting at `start`
///
/// `len` must be nonzero.
fn far_edge(start: i32, len: u32) -> i32 {
    start.saturating_add((len - 1).min(i32::MAX as u32) as i32)
}

/// Pull a wide coordinate into `i32`; anything clamped is off-panel anyway
fn clamp(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Vertical line of `h` pixels going down from `(x, y)`
    ///
    /// Nothing is drawn when the start point is off-panel; the run is cut at
    /// the bottom edge.
    pub fn fast_vline(&mut self, x: i32, y: i32, h: u32, color: Color) {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return;
        }
        let end = y + h.min(self.height() as u32) as i32;
        for row in y..end.min(self.height()) {
            self.set_pixel(x, row, color);
        }
    }

    /// Horizontal line of `w` pixels going right from `(x, y)`
    ///
    /// Nothing is drawn when the start point is off-panel; the run is cut at
    /// the right edge.
    pub fn fast_hline(&mut self, x: i32, y: i32, w: u32, color: Color) {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return;
        }
        let end = x + w.min(self.width() as u32) as i32;
        for col in x..end.min(self.width()) {
            self.set_pixel(col, y, color);
        }
    }

    /// Horizontal run between two columns, both inclusive, clipped on both ends
    fn hspan(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height() {
            return;
        }
        for col in x0.max(0)..=x1.min(self.width() - 1) {
            self.set_pixel(col, y, color);
        }
    }

    /// Vertical run between two rows, both inclusive, clipped on both ends
    fn vspan(&mut self, x: i32, y0: i32, y1: i32, color: Color) {
        if x < 0 || x >= self.width() {
            return;
        }
        for row in y0.max(0)..=y1.min(self.height() - 1) {
            self.set_pixel(x, row, color);
        }
    }

    /// Line between two points, both included
    ///
    /// Integer Bresenham. Steep lines are drawn with the axes swapped so the
    /// error term stays bounded, and the endpoints are ordered so x always
    /// increases; drawing a line in either direction gives the same pixels.
    ///
    /// Only the stretch of the major axis that overlaps the panel is walked.
    /// The error term is advanced over the skipped steps in closed form, so
    /// the visible pixels match those of the full walk.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }

        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let ystep = if y0 < y1 { 1 } else { -1 };

        let major_len = i64::from(if steep { self.height() } else { self.width() });
        let first = x0.max(0);
        let last = x1.min(major_len - 1);
        if first > last {
            return;
        }

        // After k steps the error is dx/2 - k*dy + m*dx, kept in [0, dx)
        let skipped = (first - x0) as i128;
        let (dx_wide, dy_wide) = (dx as i128, dy as i128);
        let owed = skipped * dy_wide - (dx / 2) as i128;
        let minor_steps = if owed > 0 {
            (owed + dx_wide - 1) / dx_wide
        } else {
            0
        };
        let mut error = ((dx / 2) as i128 - skipped * dy_wide + minor_steps * dx_wide) as i64;
        let mut y = y0 + ystep * minor_steps as i64;

        for x in first..=last {
            if steep {
                self.set_pixel(clamp(y), clamp(x), color);
            } else {
                self.set_pixel(clamp(x), clamp(y), color);
            }

            error -= dy;
            if error < 0 {
                y += ystep;
                error += dx;
            }
        }
    }

    /// Circle outline centred on `(cx, cy)`
    ///
    /// A radius of 0 plots the centre only; a negative radius draws nothing.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.circle_points(cx, cy, radius, color, false);
    }

    /// Filled circle centred on `(cx, cy)`
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.circle_points(cx, cy, radius, color, true);
    }

    /// Midpoint circle walking one quadrant from `(-r, 0)` and mirroring it
    fn circle_points(&mut self, cx: i32, cy: i32, radius: i32, color: Color, filled: bool) {
        if radius < 0 {
            return;
        }

        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
        let (w, h) = (self.width() as i64, self.height() as i64);

        // Bounding box misses the panel
        if cx + r < 0 || cy + r < 0 || cx - r >= w || cy - r >= h {
            return;
        }

        // Panel lies strictly inside the circle: no outline point can land
        // on it, and a fill covers all of it
        let inside = r - 1;
        if inside > 0 {
            let farthest = |c: i64, len: i64| c.abs().max((c - (len - 1)).abs());
            let (fx, fy) = (farthest(cx, w) as i128, farthest(cy, h) as i128);
            if fx * fx + fy * fy < inside as i128 * inside as i128 {
                if filled {
                    self.fill(color);
                }
                return;
            }
        }

        // Rows cy +- y_pos only move away from the panel past this
        let last_row = cy.abs().max((cy - (h - 1)).abs());

        let mut x_pos = -r;
        let mut y_pos = 0;
        let mut err = 2 - 2 * r;

        loop {
            if y_pos > last_row {
                break;
            }
            self.set_pixel(clamp(cx - x_pos), clamp(cy + y_pos), color);
            self.set_pixel(clamp(cx + x_pos), clamp(cy + y_pos), color);
            self.set_pixel(clamp(cx + x_pos), clamp(cy - y_pos), color);
            self.set_pixel(clamp(cx - x_pos), clamp(cy - y_pos), color);
            if filled {
                self.hspan(clamp(cx + x_pos), clamp(cx - x_pos), clamp(cy + y_pos), color);
                self.hspan(clamp(cx + x_pos), clamp(cx - x_pos), clamp(cy - y_pos), color);
            }

            let mut e2 = err;
            if e2 <= y_pos {
                y_pos += 1;
                err += y_pos * 2 + 1;
                if -x_pos == y_pos && e2 <= x_pos {
                    e2 = 0;
                }
            }
            if e2 > x_pos {
                x_pos += 1;
                err += x_pos * 2 + 1;
            }

            if x_pos > 0 {
                break;
            }
        }
    }

    /// Rectangle outline with top-left corner `(x, y)`
    pub fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        if w == 0 || h == 0 {
            return;
        }
        let right = far_edge(x, w);
        let bottom = far_edge(y, h);

        self.vspan(x, y, bottom, color);
        self.vspan(right, y, bottom, color);
        self.hspan(x, right, y, color);
        self.hspan(x, right, bottom, color);
    }

    /// Filled rectangle with top-left corner `(x, y)`
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        if w == 0 || h == 0 {
            return;
        }
        let right = far_edge(x, w);
        for row in y.max(0)..=far_edge(y, h).min(self.height() - 1) {
            self.hspan(x, right, row, color);
        }
    }

    /// Invert every pixel of a rectangle
    ///
    /// Applying it twice restores the previous content.
    pub fn xor_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        if w == 0 || h == 0 {
            return;
        }
        let cols = x.max(0)..=far_edge(x, w).min(self.width() - 1);
        for row in y.max(0)..=far_edge(y, h).min(self.height() - 1) {
            for col in cols.clone() {
                self.toggle_pixel(col, row);
            }
        }
    }
}
