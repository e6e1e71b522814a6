use crate::config::Config;
use crate::constants::canvas;
use crate::glyph;
use anyhow::Result;
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Synthesize the 1024x1024 base icon: two-band vertical fill, four corner
/// accent discs, and the centered brand glyph in white.
pub fn create_base_icon(config: &Config) -> Result<RgbaImage> {
    let size = canvas::BASE_SIZE;
    let top = config.top_color()?;
    let bottom = config.bottom_color()?;

    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    draw_band_fill(&mut img, top, bottom);
    draw_corner_accents(&mut img, top, bottom);
    glyph::draw_centered(
        &mut img,
        config.glyph_char(),
        canvas::GLYPH_SIZE,
        canvas::GLYPH_LIFT,
        WHITE,
    );

    Ok(img)
}

/// Two-tone vertical fill: rows in the upper half take the top color, rows in
/// the lower half take the bottom color.
pub fn draw_band_fill(img: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let split = img.height() / 2;
    for (_, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if y < split { top } else { bottom };
    }
}

/// Accent discs inset one radius from each corner, top pair in the top color,
/// bottom pair in the bottom color.
pub fn draw_corner_accents(img: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let size = img.width();
    let r = canvas::CORNER_RADIUS.min(size / 2);

    draw_disc(img, r, r, r, top);
    draw_disc(img, size - r, r, r, top);
    draw_disc(img, r, size - r, r, bottom);
    draw_disc(img, size - r, size - r, r, bottom);
}

fn draw_disc(img: &mut RgbaImage, cx: u32, cy: u32, r: u32, color: Rgba<u8>) {
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
    let x_min = (cx - r).max(0) as u32;
    let x_max = ((cx + r) as u32).min(img.width().saturating_sub(1));
    let y_min = (cy - r).max(0) as u32;
    let y_max = ((cy + r) as u32).min(img.height().saturating_sub(1));

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = i64::from(x) - cx;
            let dy = i64::from(y) - cy;
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, color);
            }
        }
    }
}
