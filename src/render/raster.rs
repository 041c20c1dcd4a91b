//! Raster rendering of the grid
//!
//! Draws each populated cell as a filled disc into an RGBA image,
//! matching the layout the terminal view downsamples from. Frames can
//! be saved as PNG for post-run inspection.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::core::error::Result;
use crate::render::colors::{cell_color, Color, BACKGROUND};
use crate::simulation::cell::Cell;

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, 0xFF])
    }
}

/// Render the cell array to an image. `cell_size` is the pixel pitch
/// between cell centers; the disc radius is just under half of it.
pub fn render(cells: &[Cell], side: usize, cell_size: u32) -> RgbaImage {
    let extent = side as u32 * cell_size + cell_size;
    let mut img = RgbaImage::from_pixel(extent, extent, BACKGROUND.into());

    let radius = (cell_size / 2).max(1) as i64;
    for cell in cells {
        let color = cell_color(cell);
        if color == BACKGROUND {
            continue;
        }
        let cx = ((cell.position.x + 1) * cell_size) as i64;
        let cy = ((cell.position.y + 1) * cell_size) as i64;
        draw_disc(&mut img, cx, cy, radius, color.into());
    }

    img
}

fn draw_disc(img: &mut RgbaImage, cx: i64, cy: i64, radius: i64, color: Rgba<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Save a frame as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path)?;
    Ok(())
}
