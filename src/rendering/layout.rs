//! Geometry of the notepad logo as a pure function of the canvas size

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest canvas the layout keeps its nesting guarantees for.
pub const MIN_SIZE: u32 = 16;
/// Largest canvas accepted by the renderer.
pub const MAX_SIZE: u32 = 8192;

/// Minimum stroke thickness of the text lines, in pixels.
pub const MIN_LINE_THICKNESS: u32 = 3;

const FRAME_FRACTION: f64 = 0.90;
const FRAME_RADIUS_FRACTION: f64 = 0.18;
const PANEL_FRACTION: f64 = 0.85;
const PANEL_RADIUS_FRACTION: f64 = 0.05;
const LINE_WIDTH_FRACTION: f64 = 0.6;
const LINE_INSET_FRACTION: f64 = 0.2;
const LINE_OFFSETS: [f64; 5] = [0.25, 0.40, 0.50, 0.65, 0.80];
const LAST_LINE_FRACTION: f64 = 0.6;
const LINE_THICKNESS_FRACTION: f64 = 0.012;
const HIGHLIGHT_HEIGHT_FRACTION: f64 = 0.06;
const HIGHLIGHT_PADDING_FRACTION: f64 = 0.03;
const HIGHLIGHT_RADIUS_FRACTION: f64 = 0.2;

/// Index of the line that carries the highlight bar.
pub const HIGHLIGHT_LINE: usize = 2;

/// Axis-aligned box with inclusive corners, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square box starting at `(offset, offset)` spanning `side` pixels past it.
    pub fn square(offset: i32, side: i32) -> Self {
        Self::new(offset, offset, offset + side, offset + side)
    }

    /// Number of pixel columns covered.
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1).max(0) as u32
    }

    /// Number of pixel rows covered.
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1).max(0) as u32
    }

    /// `other` lies inside `self` without touching any edge.
    pub fn contains_strictly(&self, other: &Rect) -> bool {
        other.x0 > self.x0 && other.y0 > self.y0 && other.x1 < self.x1 && other.y1 < self.y1
    }

    /// `other` lies inside `self`, edges may coincide.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }
}

/// Horizontal text line, centred on row `y` and spanning `x0..=x1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub x0: i32,
    pub x1: i32,
    pub y: i32,
}

impl Line {
    /// First row covered by a stroke of the given thickness.
    pub fn top(&self, thickness: u32) -> i32 {
        self.y - (thickness / 2) as i32
    }

    /// Pixel box covered when stroked with `thickness`.
    pub fn bounds(&self, thickness: u32) -> Rect {
        let top = self.top(thickness);
        Rect::new(self.x0, top, self.x1, top + thickness as i32 - 1)
    }
}

/// Every shape of the logo for one canvas size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoLayout {
    pub size: u32,
    pub frame: Rect,
    pub frame_radius: u32,
    pub panel: Rect,
    pub panel_radius: u32,
    pub lines: Vec<Line>,
    pub highlight: Rect,
    pub highlight_radius: u32,
    pub line_thickness: u32,
}

fn scale(value: u32, fraction: f64) -> u32 {
    (value as f64 * fraction) as u32
}

/// Compute the logo geometry for a `size x size` canvas.
///
/// Every dimension is a fixed fraction of `size` (or of the enclosing shape),
/// truncated toward zero. The result does not depend on anything but `size`.
pub fn layout_logo(size: u32) -> LogoLayout {
    let frame_side = scale(size, FRAME_FRACTION);
    let offset = (size - frame_side) / 2;
    let frame = Rect::square(offset as i32, frame_side as i32);
    let frame_radius = scale(frame_side, FRAME_RADIUS_FRACTION);

    let panel_side = scale(frame_side, PANEL_FRACTION);
    let panel_offset = offset + (frame_side - panel_side) / 2;
    let panel = Rect::square(panel_offset as i32, panel_side as i32);
    let panel_radius = scale(panel_side, PANEL_RADIUS_FRACTION);

    let line_width = scale(panel_side, LINE_WIDTH_FRACTION);
    let start_x = (panel_offset + scale(panel_side, LINE_INSET_FRACTION)) as i32;
    let end_x = start_x + line_width as i32;
    let short_end_x = start_x + scale(line_width, LAST_LINE_FRACTION) as i32;

    let last = LINE_OFFSETS.len() - 1;
    let lines: Vec<Line> = LINE_OFFSETS
        .iter()
        .enumerate()
        .map(|(i, f)| Line {
            x0: start_x,
            x1: if i < last { end_x } else { short_end_x },
            y: (panel_offset + scale(panel_side, *f)) as i32,
        })
        .collect();

    let highlight_height = scale(panel_side, HIGHLIGHT_HEIGHT_FRACTION) as i32;
    let highlight_padding = scale(panel_side, HIGHLIGHT_PADDING_FRACTION) as i32;
    let highlight_y = lines[HIGHLIGHT_LINE].y;
    let highlight = Rect::new(
        start_x - highlight_padding,
        highlight_y - highlight_height / 2,
        end_x + highlight_padding,
        highlight_y + highlight_height / 2,
    );
    let highlight_radius = scale(highlight_height as u32, HIGHLIGHT_RADIUS_FRACTION);

    let line_thickness = scale(size, LINE_THICKNESS_FRACTION).max(MIN_LINE_THICKNESS);

    let layout = LogoLayout {
        size,
        frame,
        frame_radius,
        panel,
        panel_radius,
        lines,
        highlight,
        highlight_radius,
        line_thickness,
    };
    debug!(
        "layout {}px: frame {:?} r={} panel {:?} r={} stroke={}",
        size, layout.frame, layout.frame_radius, layout.panel, layout.panel_radius, layout.line_thickness
    );
    layout
}

impl LogoLayout {
    /// Canvas bounds as an inclusive rect.
    pub fn canvas(&self) -> Rect {
        let last = self.size as i32 - 1;
        Rect::new(0, 0, last, last)
    }

    /// Verify frame-in-canvas, panel-in-frame and lines/highlight-in-panel.
    pub fn check_nesting(&self) -> Result<()> {
        if !self.canvas().contains(&self.frame) {
            return Err(Error::LayoutError(format!(
                "frame {:?} exceeds {}px canvas",
                self.frame, self.size
            )));
        }
        if !self.frame.contains_strictly(&self.panel) {
            return Err(Error::LayoutError(format!(
                "panel {:?} not inside frame {:?}",
                self.panel, self.frame
            )));
        }
        if !self.panel.contains_strictly(&self.highlight) {
            return Err(Error::LayoutError(format!(
                "highlight {:?} not inside panel {:?}",
                self.highlight, self.panel
            )));
        }
        for (i, line) in self.lines.iter().enumerate() {
            let bounds = line.bounds(self.line_thickness);
            if !self.panel.contains_strictly(&bounds) {
                return Err(Error::LayoutError(format!(
                    "line {} {:?} not inside panel {:?}",
                    i, bounds, self.panel
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_128_matches_hand_computed_values() {
        let l = layout_logo(128);
        // side = 115, offset = 6, panel = 97 at 15
        assert_eq!(l.frame, Rect::square(6, 115));
        assert_eq!(l.frame_radius, 20);
        assert_eq!(l.panel, Rect::square(15, 97));
        assert_eq!(l.panel_radius, 4);
        let ys: Vec<i32> = l.lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![39, 53, 63, 78, 92]);
        assert_eq!(l.lines[0].x0, 34);
        assert_eq!(l.lines[0].x1, 92);
        assert_eq!(l.lines[4].x1, 34 + 34);
        assert_eq!(l.highlight, Rect::new(32, 61, 94, 65));
        assert_eq!(l.highlight_radius, 1);
        assert_eq!(l.line_thickness, 3);
    }

    #[test]
    fn layout_1024_scales_stroke() {
        let l = layout_logo(1024);
        assert_eq!(l.frame, Rect::square(51, 921));
        assert_eq!(l.frame_radius, 165);
        assert_eq!(l.line_thickness, 12);
    }

    #[test]
    fn stroke_never_below_minimum() {
        let l = layout_logo(16);
        assert_eq!(scale(16, LINE_THICKNESS_FRACTION), 0);
        assert_eq!(l.line_thickness, MIN_LINE_THICKNESS);
    }

    #[test]
    fn last_line_is_shorter() {
        let l = layout_logo(48);
        let full = l.lines[0].x1 - l.lines[0].x0;
        let last = l.lines[4].x1 - l.lines[4].x0;
        assert!(last < full);
        assert!(l.lines[..4].iter().all(|line| line.x1 == l.lines[0].x1));
    }

    #[test]
    fn nesting_holds_across_supported_sizes() {
        for size in MIN_SIZE..=1200 {
            let l = layout_logo(size);
            l.check_nesting()
                .unwrap_or_else(|e| panic!("size {}: {}", size, e));
        }
    }

    #[test]
    fn nesting_violation_is_reported() {
        let mut l = layout_logo(64);
        l.lines[0].x1 = l.panel.x1 + 4;
        assert!(matches!(l.check_nesting(), Err(Error::LayoutError(_))));
    }

    #[test]
    fn line_bounds_cover_thickness_rows() {
        let line = Line { x0: 2, x1: 9, y: 10 };
        assert_eq!(line.bounds(3), Rect::new(2, 9, 9, 11));
        assert_eq!(line.bounds(12).height(), 12);
        assert_eq!(line.bounds(12).y0, 4);
    }
}
