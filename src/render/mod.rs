//! False-color rendering of NDVI grids.
//!
//! Produces a PNG with the color-mapped grid on the left and a vertical
//! colorbar legend on the right. Every call builds its own buffers; no
//! drawing state is shared between invocations.

pub mod colormap;

pub use colormap::{ndvi_color, ColorStop, Rgb, NDVI_STOPS};

use std::io::Cursor;

use image::{ImageOutputFormat, Rgba, RgbaImage};

use crate::error::{Error, Result};
use crate::types::BandGrid;

const LEGEND_BAR_WIDTH: u32 = 24;
const LEGEND_GUTTER: u32 = 10;
const LEGEND_TICK_LENGTH: u32 = 6;
const LEGEND_TICK_VALUES: [f32; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TICK_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const NODATA_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Extra width added to the right of the grid for the legend.
pub fn legend_width() -> u32 {
    LEGEND_GUTTER + LEGEND_BAR_WIDTH + LEGEND_TICK_LENGTH
}

/// Renders an NDVI grid to an encoded PNG.
///
/// Values map through the five-stop ramp over the fixed [-1, 1] range;
/// non-finite pixels render transparent. The legend bar runs top (+1)
/// to bottom (-1) with tick marks at half-unit steps.
pub fn render_ndvi_png(ndvi: &BandGrid) -> Result<Vec<u8>> {
    let width = ndvi.width() as u32;
    let height = ndvi.height() as u32;
    let total_width = width + legend_width();

    let mut img = RgbaImage::from_pixel(total_width, height, BACKGROUND);

    let data = ndvi.data();
    for y in 0..height {
        for x in 0..width {
            let value = data[(y * width + x) as usize];
            let pixel = if value.is_finite() {
                let Rgb { r, g, b } = ndvi_color(value);
                Rgba([r, g, b, 255])
            } else {
                NODATA_COLOR
            };
            img.put_pixel(x, y, pixel);
        }
    }

    draw_legend(&mut img, width + LEGEND_GUTTER, height);

    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, ImageOutputFormat::Png)
        .map_err(|e| Error::Render(e.to_string()))?;
    Ok(buf.into_inner())
}

fn draw_legend(img: &mut RgbaImage, bar_x: u32, height: u32) {
    if height == 0 {
        return;
    }
    let span = height.saturating_sub(1).max(1) as f32;

    for y in 0..height {
        let value = 1.0 - 2.0 * (y as f32 / span);
        let Rgb { r, g, b } = ndvi_color(value);
        for x in bar_x..bar_x + LEGEND_BAR_WIDTH {
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    for &value in &LEGEND_TICK_VALUES {
        let y = (((1.0 - value) / 2.0) * span).round() as u32;
        let y = y.min(height - 1);
        for x in bar_x + LEGEND_BAR_WIDTH..bar_x + LEGEND_BAR_WIDTH + LEGEND_TICK_LENGTH {
            img.put_pixel(x, y, TICK_COLOR);
        }
    }
}
