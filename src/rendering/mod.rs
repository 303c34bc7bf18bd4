//! Rendering pipeline: layout -> paint commands -> raster canvas -> PNG

pub mod layout;
pub mod paint;
pub mod raster;

use log::{debug, warn};

use crate::error::{Error, Result};
use layout::{layout_logo, MAX_SIZE, MIN_SIZE};
use paint::{paint_logo, Palette};
use raster::{encode_png, rasterize, Canvas};

/// A rendered icon encoded as PNG.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub size: u32,
    pub png_data: Vec<u8>,
}

/// Reject sizes outside `MIN_SIZE..=MAX_SIZE`.
pub fn check_size(size: u32) -> Result<()> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(Error::UnsupportedSize {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

/// Render the logo onto a transparent `size x size` canvas with the stock colours.
///
/// Identical `size` always yields an identical pixel buffer.
///
/// # Examples
///
/// ```
/// let canvas = notelogo::rendering::render(128)?;
/// assert_eq!(canvas.dimensions(), (128, 128));
/// assert_eq!(canvas.get_pixel(0, 0).0[3], 0);
/// # Ok::<(), notelogo::Error>(())
/// ```
pub fn render(size: u32) -> Result<Canvas> {
    render_with_palette(size, &Palette::default())
}

/// Render the logo with custom colours.
pub fn render_with_palette(size: u32, palette: &Palette) -> Result<Canvas> {
    check_size(size)?;
    let layout = layout_logo(size);
    if let Err(e) = layout.check_nesting() {
        warn!("{}px layout is degenerate: {}", size, e);
    }
    let commands = paint_logo(&layout, palette);
    Ok(rasterize(size, &commands))
}

/// Render the logo and encode it as PNG, without touching disk.
pub fn render_png(size: u32) -> Result<RenderedIcon> {
    let canvas = render(size)?;
    let png_data = encode_png(&canvas)?;
    debug!("encoded {}px icon: {} bytes", size, png_data.len());
    Ok(RenderedIcon { size, png_data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_rejects_sizes_outside_range() {
        assert!(matches!(
            render(15),
            Err(Error::UnsupportedSize { size: 15, min: 16, .. })
        ));
        assert!(matches!(render(0), Err(Error::UnsupportedSize { .. })));
        assert!(matches!(render(MAX_SIZE + 1), Err(Error::UnsupportedSize { .. })));
    }

    #[test]
    fn render_png_reports_size() {
        let icon = render_png(48).unwrap();
        assert_eq!(icon.size, 48);
        assert_eq!(&icon.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn palette_changes_frame_colour() {
        let palette = Palette {
            frame: image::Rgba([0, 120, 215, 255]),
            ..Default::default()
        };
        let canvas = render_with_palette(64, &palette).unwrap();
        let layout = layout_logo(64);
        // left edge midpoint of the frame, outside the panel
        let y = 32;
        let x = layout.frame.x0 as u32 + 1;
        assert_eq!(canvas.get_pixel(x, y).0, [0, 120, 215, 255]);
    }
}
