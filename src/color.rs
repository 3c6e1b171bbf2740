//! HSB color conversion and the random green draw.
//!
//! Hue is a fraction of the color circle in `[0, 1)`. Conversion rounds
//! each channel to the nearest 8-bit value, so a round trip through
//! `Rgb` recovers hue only up to that quantization.

use rand::Rng;

use crate::types::{Hsb, Rgb};

/// Lower bound of the green hue band (inclusive).
pub const GREEN_HUE_LOW: f32 = 0.25;

/// Upper bound of the green hue band (exclusive).
pub const GREEN_HUE_HIGH: f32 = 0.42;

// ============================================================================
// CONVERSION
// ============================================================================

/// Convert hue / saturation / brightness to an 8-bit RGB color.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let Hsb { hue, saturation, brightness } = hsb;
    let channel = |v: f32| (v * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let v = channel(brightness);
        return Rgb::new(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u8 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Rgb::new(channel(r), channel(g), channel(b))
}

/// Convert an 8-bit RGB color back to hue / saturation / brightness.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let (r, g, b) = (rgb.r as f32, rgb.g as f32, rgb.b as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let brightness = max / 255.0;
    let saturation = if max != 0.0 { (max - min) / max } else { 0.0 };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let span = max - min;
        let rc = (max - r) / span;
        let gc = (max - g) / span;
        let bc = (max - b) / span;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        let hue = sector / 6.0;
        if hue < 0.0 { hue + 1.0 } else { hue }
    };

    Hsb { hue, saturation, brightness }
}

// ============================================================================
// RANDOM DRAW
// ============================================================================

/// Fully saturated, full brightness color at `hue`.
pub fn vivid(hue: f32) -> Rgb {
    hsb_to_rgb(Hsb { hue, saturation: 1.0, brightness: 1.0 })
}

/// Draw a uniformly random hue in the green band and return it vivid.
pub fn random_green<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    vivid(rng.gen_range(GREEN_HUE_LOW..GREEN_HUE_HIGH))
}

// ============================================================================
// TESTS
// ============================================================================
