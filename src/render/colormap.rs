//! Diverging color ramp for NDVI visualization.

/// RGB color with components in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f32,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f32, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Five-stop vegetation ramp, mapped linearly across [-1, +1]:
/// dark red -> orange -> gold -> yellow-green -> forest green.
pub const NDVI_STOPS: [ColorStop; 5] = [
    ColorStop::new(0.0, 0x8B, 0x00, 0x00),
    ColorStop::new(0.25, 0xFF, 0x45, 0x00),
    ColorStop::new(0.5, 0xFF, 0xD7, 0x00),
    ColorStop::new(0.75, 0xAD, 0xFF, 0x2F),
    ColorStop::new(1.0, 0x22, 0x8B, 0x22),
];

/// Maps an NDVI value from the fixed [-1, 1] display range to a color.
/// Out-of-range values clamp to the ramp endpoints.
pub fn ndvi_color(value: f32) -> Rgb {
    evaluate((value + 1.0) / 2.0)
}

/// Evaluates the ramp at a normalized position in [0, 1].
pub fn evaluate(t: f32) -> Rgb {
    multi_stop(&NDVI_STOPS, t)
}

fn multi_stop(stops: &[ColorStop], t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);

    if t <= stops[0].t {
        return stops[0].color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.t {
            let f = (t - lo.t) / (hi.t - lo.t);
            return lerp(lo.color, hi.color, f);
        }
    }
    stops[stops.len() - 1].color
}

fn lerp(a: Rgb, b: Rgb, f: f32) -> Rgb {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round() as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}
