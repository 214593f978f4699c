//! Procedural rendering of the round target launcher icon.
//!
//! The icon is a stack of concentric translucent discs with an opaque
//! crosshair and an opaque bullseye on top. Every coordinate is derived
//! from the requested side length so the same drawing scales to each
//! density bucket.

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Pixel, Rgba, RgbaImage};

pub const OUTER_RING: Rgba<u8> = Rgba([156, 156, 156, 180]);
pub const MIDDLE_RING: Rgba<u8> = Rgba([135, 30, 0, 128]);
pub const INNER_RING: Rgba<u8> = Rgba([255, 255, 255, 188]);
pub const CROSSHAIR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BULLSEYE: Rgba<u8> = Rgba([255, 82, 82, 255]);

/// Radii of the four concentric discs, truncated fractions of the icon side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radii {
    pub outer: u32,
    pub middle: u32,
    pub inner: u32,
    pub dot: u32,
}

impl Radii {
    pub fn for_size(size: u32) -> Self {
        Self {
            outer: percent_of(size, 35),
            middle: percent_of(size, 25),
            inner: percent_of(size, 15),
            dot: percent_of(size, 5),
        }
    }

    /// How far each crosshair arm reaches from the center.
    pub fn crosshair_reach(&self) -> u32 {
        percent_of(self.outer, 150)
    }
}

// Truncates `value * pct / 100` without going through floats.
fn percent_of(value: u32, pct: u64) -> u32 {
    (u64::from(value) * pct / 100) as u32
}

pub fn crosshair_width(size: u32) -> u32 {
    (size / 108).max(1)
}

/// Draws the target icon on a fresh transparent `size` x `size` canvas.
pub fn render(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    if size == 0 {
        return img;
    }
    let center = i64::from(size / 2);
    let radii = Radii::for_size(size);

    fill_circle(&mut img, center, center, radii.outer, OUTER_RING);
    fill_circle(&mut img, center, center, radii.middle, MIDDLE_RING);
    fill_circle(&mut img, center, center, radii.inner, INNER_RING);

    let reach = i64::from(radii.crosshair_reach());
    let width = i64::from(crosshair_width(size));
    let near = center - width / 2;
    let far = near + width - 1;
    fill_rect(&mut img, near, center - reach, far, center + reach, CROSSHAIR);
    fill_rect(&mut img, center - reach, near, center + reach, far, CROSSHAIR);

    fill_circle(&mut img, center, center, radii.dot, BULLSEYE);
    img
}

/// Source-over composite of `src` onto one pixel. Opaque sources and
/// transparent destinations take `src` as-is so no rounding creeps in.
pub fn composite(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    match (src.0[3], dst.0[3]) {
        (0, _) => {}
        (u8::MAX, _) | (_, 0) => *dst = src,
        _ => dst.blend(&src),
    }
}

/// Fills every pixel whose center lies within `radius` of (`cx`, `cy`).
pub fn fill_circle(img: &mut RgbaImage, cx: i64, cy: i64, radius: u32, color: Rgba<u8>) {
    let r = i64::from(radius);
    let r2 = r * r;
    for_each_clipped(img, cx - r, cy - r, cx + r, cy + r, |x, y, px| {
        let (dx, dy) = (x - cx, y - cy);
        if dx * dx + dy * dy <= r2 {
            composite(px, color);
        }
    });
}

/// Fills the inclusive rectangle `(x0, y0)..=(x1, y1)`, clipped to the image.
pub fn fill_rect(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    for_each_clipped(img, x0, y0, x1, y1, |_, _, px| composite(px, color));
}

fn for_each_clipped<F>(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, mut f: F)
where
    F: FnMut(i64, i64, &mut Rgba<u8>),
{
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    let (x0, y0) = (x0.max(0), y0.max(0));
    let (x1, y1) = (x1.min(w - 1), y1.min(h - 1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            f(x, y, img.get_pixel_mut(x as u32, y as u32));
        }
    }
}

/// Encodes to PNG bytes. The encoder writes no timestamps, so equal
/// rasters always produce equal bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .context("encode png")?;
    Ok(buf)
}
