//! Per-pixel color operations
//!
//! Alpha is carried through unchanged by every operation here.

use imago_core::{clamp_sample, Channel, Image, ImagoError, ImagoResult, Pixel};

/// Grayscale conversion method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleMode {
    /// Maximum of r, g and b
    Value,
    /// Mean of r, g and b
    Intensity,
}

/// Add `amount` to r, g and b, clamping to `[0, 1]`
pub fn brighten(image: &Image, amount: f64) -> ImagoResult<Image> {
    if !amount.is_finite() {
        return Err(ImagoError::InvalidParameter(format!(
            "brightness amount must be finite, got {amount}"
        )));
    }

    Ok(image.map_pixels(|_, _, p| {
        Pixel::new(
            clamp_sample(p.r + amount),
            clamp_sample(p.g + amount),
            clamp_sample(p.b + amount),
            p.a,
        )
    }))
}

/// Keep one color channel and zero the other two
pub fn isolate(image: &Image, channel: Channel) -> ImagoResult<Image> {
    if channel.is_alpha() {
        return Err(ImagoError::InvalidParameter(
            "only red, green or blue can be isolated".to_string(),
        ));
    }

    Ok(keep_color(image, channel))
}

pub fn red(image: &Image) -> Image {
    keep_color(image, Channel::Red)
}

pub fn green(image: &Image) -> Image {
    keep_color(image, Channel::Green)
}

pub fn blue(image: &Image) -> Image {
    keep_color(image, Channel::Blue)
}

fn keep_color(image: &Image, channel: Channel) -> Image {
    image.map_pixels(|_, _, p| {
        let mut isolated = Pixel::new(0.0, 0.0, 0.0, p.a);
        isolated.set(channel, p.get(channel));
        isolated
    })
}

/// Convert to grayscale, writing the gray level to r, g and b
pub fn grayscale(image: &Image, mode: GrayscaleMode) -> Image {
    image.map_pixels(|_, _, p| {
        let level = match mode {
            GrayscaleMode::Value => p.r.max(p.g).max(p.b),
            GrayscaleMode::Intensity => (p.r + p.g + p.b) / 3.0,
        };
        Pixel::new(level, level, level, p.a)
    })
}
