//! Application icon
//!
//! The icon is drawn at startup instead of shipping an image asset: a dark
//! rounded tile with three stacked blue disks, the usual "database" glyph.

use iced::window;

pub const ICON_SIZE: u32 = 64;

const BACKGROUND: [u8; 4] = [15, 23, 42, 255];
const DISK: [u8; 4] = [59, 130, 246, 255];
const DISK_EDGE: [u8; 4] = [147, 197, 253, 255];
const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// RGBA pixels for a square icon of `size` pixels
pub fn icon_pixels(size: u32) -> Vec<u8> {
    let s = size as f32;
    let corner = s * 0.2;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let pixel = if !inside_rounded_square(px, py, s, corner) {
                TRANSPARENT
            } else {
                disk_pixel(px / s, py / s).unwrap_or(BACKGROUND)
            };
            pixels.extend_from_slice(&pixel);
        }
    }
    pixels
}

fn inside_rounded_square(x: f32, y: f32, size: f32, corner: f32) -> bool {
    let cx = x.clamp(corner, size - corner);
    let cy = y.clamp(corner, size - corner);
    (x - cx).powi(2) + (y - cy).powi(2) <= corner * corner
}

/// Three flattened ellipses stacked vertically, in unit coordinates
fn disk_pixel(u: f32, v: f32) -> Option<[u8; 4]> {
    const CENTERS: [f32; 3] = [0.3, 0.5, 0.7];
    let (rx, ry) = (0.3, 0.09);

    for center in CENTERS {
        let d = ((u - 0.5) / rx).powi(2) + ((v - center) / ry).powi(2);
        if d <= 1.0 {
            return Some(if d > 0.6 { DISK_EDGE } else { DISK });
        }
    }
    None
}

/// Build the window icon, or `None` if the platform rejects it
pub fn load_icon() -> Option<window::Icon> {
    window::icon::from_rgba(icon_pixels(ICON_SIZE), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_buffer_matches_size() {
        assert_eq!(icon_pixels(ICON_SIZE).len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert_eq!(icon_pixels(16).len(), 16 * 16 * 4);
    }

    #[test]
    fn corners_are_transparent_and_center_is_a_disk() {
        let pixels = icon_pixels(ICON_SIZE);
        let at = |x: u32, y: u32| {
            let i = ((y * ICON_SIZE + x) * 4) as usize;
            [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
        };
        assert_eq!(at(0, 0), TRANSPARENT);
        assert_eq!(at(ICON_SIZE / 2, ICON_SIZE / 2), DISK);
        assert_eq!(at(ICON_SIZE / 2, 4), BACKGROUND);
    }

    #[test]
    fn test_icon_loads_successfully() {
        assert!(load_icon().is_some());
    }
}
