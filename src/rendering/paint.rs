//! Paint command list for the notepad logo

use image::Rgba;

use crate::rendering::layout::{LogoLayout, Rect};

/// Colours used by the logo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Outer frame (`#444444`)
    pub frame: Rgba<u8>,
    /// Notepad panel
    pub panel: Rgba<u8>,
    /// Highlight bar behind the third line (`#FFC107`, slightly translucent)
    pub highlight: Rgba<u8>,
    /// Text line strokes
    pub ink: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            frame: Rgba([68, 68, 68, 255]),
            panel: Rgba([255, 255, 255, 255]),
            highlight: Rgba([255, 193, 7, 230]),
            ink: Rgba([0, 0, 0, 255]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    RoundedRect {
        rect: Rect,
        radius: u32,
        color: Rgba<u8>,
    },
    HorizontalLine {
        x0: i32,
        x1: i32,
        y: i32,
        thickness: u32,
        color: Rgba<u8>,
    },
}

/// Turn a layout into draw order: frame, panel, highlight, then the five lines.
pub fn paint_logo(layout: &LogoLayout, palette: &Palette) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(3 + layout.lines.len());
    cmds.push(PaintCommand::RoundedRect {
        rect: layout.frame,
        radius: layout.frame_radius,
        color: palette.frame,
    });
    cmds.push(PaintCommand::RoundedRect {
        rect: layout.panel,
        radius: layout.panel_radius,
        color: palette.panel,
    });
    // highlight goes under the strokes
    cmds.push(PaintCommand::RoundedRect {
        rect: layout.highlight,
        radius: layout.highlight_radius,
        color: palette.highlight,
    });
    cmds.extend(layout.lines.iter().map(|line| PaintCommand::HorizontalLine {
        x0: line.x0,
        x1: line.x1,
        y: line.y,
        thickness: layout.line_thickness,
        color: palette.ink,
    }));
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::layout_logo;

    #[test]
    fn paint_order_is_frame_panel_highlight_lines() {
        let layout = layout_logo(128);
        let cmds = paint_logo(&layout, &Palette::default());
        assert_eq!(cmds.len(), 8);
        match &cmds[0] {
            PaintCommand::RoundedRect { rect, color, .. } => {
                assert_eq!(*rect, layout.frame);
                assert_eq!(color.0, [68, 68, 68, 255]);
            }
            _ => panic!("frame should be painted first"),
        }
        match &cmds[2] {
            PaintCommand::RoundedRect { color, .. } => assert_eq!(color.0[3], 230),
            _ => panic!("highlight should precede the lines"),
        }
        let ys: Vec<i32> = cmds[3..]
            .iter()
            .map(|c| match c {
                PaintCommand::HorizontalLine { y, .. } => *y,
                _ => panic!("expected a line"),
            })
            .collect();
        let mut sorted = ys.clone();
        sorted.sort();
        assert_eq!(ys, sorted);
    }

    #[test]
    fn custom_palette_flows_into_commands() {
        let palette = Palette {
            ink: Rgba([10, 20, 30, 255]),
            ..Default::default()
        };
        let cmds = paint_logo(&layout_logo(48), &palette);
        assert!(cmds.iter().any(|c| matches!(
            c,
            PaintCommand::HorizontalLine { color, .. } if color.0 == [10, 20, 30, 255]
        )));
    }
}
