use crate::constants::paths;
use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};
use std::fs;

/// Load the first readable font from the platform candidate list.
///
/// Returns `None` when no candidate can be read or parsed; callers fall back
/// to the block mark instead of failing.
pub fn load_preferred_font() -> Option<Font> {
    load_font_from(paths::FONT_CANDIDATES)
}

pub fn load_font_from(candidates: &[&str]) -> Option<Font> {
    for path in candidates {
        let Ok(data) = fs::read(path) else {
            continue;
        };
        if let Ok(font) = Font::from_bytes(data, FontSettings::default()) {
            return Some(font);
        }
    }
    None
}

/// Draw `ch` horizontally centered on the canvas, lifted `lift` pixels above
/// true vertical center. Uses the preferred platform font when one loads and
/// covers the character; otherwise draws the built-in block mark.
pub fn draw_centered(img: &mut RgbaImage, ch: char, size: f32, lift: i64, color: Rgba<u8>) {
    match load_preferred_font() {
        Some(font) if font.has_glyph(ch) => {
            draw_with_font(img, &font, ch, size, lift, color);
        }
        _ => draw_block_mark(img, color),
    }
}

fn draw_with_font(
    img: &mut RgbaImage,
    font: &Font,
    ch: char,
    size: f32,
    lift: i64,
    color: Rgba<u8>,
) {
    let (metrics, coverage) = font.rasterize(ch, size);
    let x0 = (i64::from(img.width()) - metrics.width as i64) / 2;
    let y0 = (i64::from(img.height()) - metrics.height as i64) / 2 - lift;

    for row in 0..metrics.height {
        for col in 0..metrics.width {
            let alpha = coverage[row * metrics.width + col];
            if alpha == 0 {
                continue;
            }
            let px = x0 + col as i64;
            let py = y0 + row as i64;
            if px < 0 || py < 0 || px >= i64::from(img.width()) || py >= i64::from(img.height()) {
                continue;
            }
            let dst = img.get_pixel_mut(px as u32, py as u32);
            *dst = blend(*dst, color, alpha);
        }
    }
}

/// Source-over blend of `src` onto `dst` at the given coverage.
fn blend(dst: Rgba<u8>, src: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = u32::from(alpha);
    let mix = |d: u8, s: u8| -> u8 {
        ((u32::from(d) * (255 - a) + u32::from(s) * a) / 255) as u8
    };
    Rgba([
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
        dst[3].max(alpha),
    ])
}

/// Fallback mark drawn from rectangles when no font is available: a blocky
/// "W" of four vertical bars joined at the base, scaled from a 22x22 design.
pub fn draw_block_mark(img: &mut RgbaImage, color: Rgba<u8>) {
    let scale = img.width() as f32 / 22.0;
    let bar = |v: f32| (v * scale) as u32;

    // Outer strokes, full height
    draw_rect(img, bar(4.0), bar(5.0), bar(3.0), bar(13.0), color);
    draw_rect(img, bar(15.0), bar(5.0), bar(3.0), bar(13.0), color);

    // Inner strokes, lower half
    draw_rect(img, bar(8.5), bar(10.0), bar(2.5), bar(8.0), color);
    draw_rect(img, bar(11.0), bar(10.0), bar(2.5), bar(8.0), color);

    // Base joins
    draw_rect(img, bar(4.0), bar(15.5), bar(6.0), bar(2.5), color);
    draw_rect(img, bar(12.0), bar(15.5), bar(6.0), bar(2.5), color);
}

fn draw_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for dy in 0..h {
        for dx in 0..w {
            let px = x + dx;
            let py = y + dy;
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn block_mark_leaves_ink() {
        let mut img = RgbaImage::from_pixel(256, 256, Rgba([0, 0, 0, 255]));
        draw_block_mark(&mut img, WHITE);

        let inked = img.pixels().filter(|p| **p == WHITE).count();
        assert!(inked > 0, "block mark should paint pixels");
    }

    #[test]
    fn block_mark_stays_inside_margins() {
        let mut img = RgbaImage::from_pixel(220, 220, Rgba([0, 0, 0, 255]));
        draw_block_mark(&mut img, WHITE);

        // 22x22 design keeps a >=4 unit margin on the left and top
        for i in 0..220 {
            assert_ne!(*img.get_pixel(i, 0), WHITE);
            assert_ne!(*img.get_pixel(0, i), WHITE);
        }
    }

    #[test]
    fn unreadable_candidates_yield_none() {
        assert!(load_font_from(&["/nonexistent/font.ttf"]).is_none());
    }

    #[test]
    fn non_font_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(load_font_from(&[path.to_str().unwrap()]).is_none());
    }

    #[test]
    fn blend_full_coverage_replaces_color() {
        let out = blend(Rgba([10, 20, 30, 255]), WHITE, 255);
        assert_eq!(out, WHITE);
    }

    #[test]
    fn blend_zero_coverage_keeps_destination() {
        let dst = Rgba([10, 20, 30, 255]);
        assert_eq!(blend(dst, WHITE, 0), dst);
    }

    #[test]
    fn draw_centered_always_paints() {
        // Works with or without a system font installed
        let mut img = RgbaImage::from_pixel(256, 256, Rgba([0, 0, 0, 255]));
        draw_centered(&mut img, 'W', 150.0, 12, WHITE);

        let touched = img.pixels().any(|p| p[0] > 0);
        assert!(touched, "glyph drawing should modify the canvas");
    }
}
