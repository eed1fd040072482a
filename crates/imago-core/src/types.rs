//! Core types for imago

use num_traits::NumCast;

use crate::consts::{SAMPLE_MAX_U16, SAMPLE_MAX_U8};

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One of the four planes of an [`Image`](crate::Image)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl Channel {
    /// All channels in plane order
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// The color channels, alpha excluded
    pub const COLOR: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_alpha(&self) -> bool {
        matches!(self, Channel::Alpha)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

/// A single RGBA sample set, normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Pixel {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
            Channel::Alpha => self.a = value,
        }
    }

    /// Clamp every component to `[0, 1]`
    pub fn clamped(self) -> Self {
        Self {
            r: clamp_sample(self.r),
            g: clamp_sample(self.g),
            b: clamp_sample(self.b),
            a: clamp_sample(self.a),
        }
    }
}

/// Clamp a sample to the normalized `[0, 1]` range. NaN maps to 0.
pub fn clamp_sample(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Raw sample type that converts to and from the normalized range
pub trait Sample: Copy + NumCast + PartialOrd {
    /// Raw value that maps to 1.0
    const SCALE: f64;

    fn to_normalized(self) -> f64;
    fn from_normalized(value: f64) -> Self;
}

fn quantize<T: NumCast>(value: f64, max: f64) -> Option<T> {
    num_traits::cast((clamp_sample(value) * max).round())
}

impl Sample for u8 {
    const SCALE: f64 = SAMPLE_MAX_U8;

    fn to_normalized(self) -> f64 {
        self as f64 / Self::SCALE
    }

    fn from_normalized(value: f64) -> Self {
        quantize(value, Self::SCALE).unwrap_or(0)
    }
}

impl Sample for u16 {
    const SCALE: f64 = SAMPLE_MAX_U16;

    fn to_normalized(self) -> f64 {
        self as f64 / Self::SCALE
    }

    fn from_normalized(value: f64) -> Self {
        quantize(value, Self::SCALE).unwrap_or(0)
    }
}

impl Sample for f32 {
    const SCALE: f64 = 1.0;

    fn to_normalized(self) -> f64 {
        self as f64
    }

    fn from_normalized(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    const SCALE: f64 = 1.0;

    fn to_normalized(self) -> f64 {
        self
    }

    fn from_normalized(value: f64) -> Self {
        value
    }
}
