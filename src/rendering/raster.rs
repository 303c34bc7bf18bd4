//! Rasterizer: applies paint commands to an RGBA canvas and encodes PNG

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use log::{debug, warn};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::rendering::layout::{Line, Rect};
use crate::rendering::paint::PaintCommand;

/// Square RGBA8 pixel buffer the logo is painted on.
pub type Canvas = RgbaImage;

/// Fully transparent `size x size` canvas.
pub fn new_canvas(size: u32) -> Canvas {
    RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
}

/// Paint `commands` in order onto a fresh canvas.
pub fn rasterize(size: u32, commands: &[PaintCommand]) -> Canvas {
    let mut canvas = new_canvas(size);
    for cmd in commands {
        apply(&mut canvas, cmd);
    }
    debug!("rasterized {} commands onto {}px canvas", commands.len(), size);
    canvas
}

/// Paint a single command onto `canvas`. Geometry outside the canvas is clipped.
pub fn apply(canvas: &mut Canvas, cmd: &PaintCommand) {
    match cmd {
        PaintCommand::RoundedRect { rect, radius, color } => {
            fill_rounded_rect(canvas, rect, *radius, *color)
        }
        PaintCommand::HorizontalLine {
            x0,
            x1,
            y,
            thickness,
            color,
        } => {
            let line = Line {
                x0: (*x0).min(*x1),
                x1: (*x0).max(*x1),
                y: *y,
            };
            fill_rounded_rect(canvas, &line.bounds(*thickness), 0, *color)
        }
    }
}

fn clip(rect: &Rect, canvas: &Canvas) -> Option<Rect> {
    let (w, h) = canvas.dimensions();
    let clipped = Rect::new(
        rect.x0.max(0),
        rect.y0.max(0),
        rect.x1.min(w as i32 - 1),
        rect.y1.min(h as i32 - 1),
    );
    (clipped.x0 <= clipped.x1 && clipped.y0 <= clipped.y1).then_some(clipped)
}

/// Fill `rect` (inclusive corners) with its corners cut to quarter circles.
///
/// A pixel is painted when its centre falls inside the shape whose outer edges
/// run along `x0`, `x1 + 1`, `y0`, `y1 + 1`. No anti-aliasing.
fn fill_rounded_rect(canvas: &mut Canvas, rect: &Rect, radius: u32, color: Rgba<u8>) {
    if rect.width() == 0 || rect.height() == 0 {
        return;
    }
    let Some(area) = clip(rect, canvas) else {
        warn!("shape {:?} lies outside the {}px canvas", rect, canvas.width());
        return;
    };

    let max_radius = rect.width().min(rect.height()) as f64 / 2.0;
    let r = (radius as f64).min(max_radius);
    if r < radius as f64 {
        debug!("corner radius {} clamped to {} for {:?}", radius, r, rect);
    }

    let left = rect.x0 as f64 + r;
    let right = (rect.x1 + 1) as f64 - r;
    let top = rect.y0 as f64 + r;
    let bottom = (rect.y1 + 1) as f64 - r;

    for py in area.y0..=area.y1 {
        let cy = py as f64 + 0.5;
        let dy = cy - cy.clamp(top, bottom);
        for px in area.x0..=area.x1 {
            let cx = px as f64 + 0.5;
            let dx = cx - cx.clamp(left, right);
            if dx * dx + dy * dy <= r * r {
                blend(canvas.get_pixel_mut(px as u32, py as u32), color);
            }
        }
    }
}

/// Source-over compositing with straight (non-premultiplied) alpha.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src.0[3] as u32;
    if sa == 255 {
        *dst = src;
        return;
    }
    if sa == 0 {
        return;
    }
    let da = dst.0[3] as u32;
    let dst_weight = da * (255 - sa);
    // alpha scaled by 255
    let out = sa * 255 + dst_weight;
    let mut px = [0u8; 4];
    for c in 0..3 {
        let v = (src.0[c] as u32 * sa * 255 + dst.0[c] as u32 * dst_weight + out / 2) / out;
        px[c] = v.min(255) as u8;
    }
    px[3] = ((out + 127) / 255) as u8;
    *dst = Rgba(px);
}

/// Encode the canvas as an RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// SHA-256 of arbitrary bytes, lowercase hex.
pub fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 of the raw RGBA buffer; stable across PNG encoder versions.
pub fn pixel_digest(canvas: &Canvas) -> String {
    digest_hex(canvas.as_raw())
}
