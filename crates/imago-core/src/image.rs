//! Planar image storage

use rayon::prelude::*;

use crate::consts::{MAX_IMAGE_DIMENSION, NUM_CHANNELS};
use crate::{Channel, Dimensions, ImagoError, ImagoResult, Pixel};

/// An RGBA image stored as four row-major planes of normalized samples.
///
/// Every plane holds exactly `width * height` samples. Samples are nominally
/// in `[0, 1]`; operations such as lossy reconstruction may leave values
/// slightly outside that range and encoders clamp on the way out.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    dimensions: Dimensions,
    planes: [Vec<f64>; NUM_CHANNELS],
}

fn check_dimensions(dimensions: Dimensions) -> ImagoResult<()> {
    if dimensions.is_empty()
        || dimensions.width > MAX_IMAGE_DIMENSION
        || dimensions.height > MAX_IMAGE_DIMENSION
    {
        return Err(ImagoError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}

impl Image {
    /// Create a fully transparent black image
    pub fn new(width: u32, height: u32) -> ImagoResult<Self> {
        let dimensions = Dimensions::new(width, height);
        check_dimensions(dimensions)?;

        let pixel_count = dimensions.pixel_count();
        Ok(Self {
            dimensions,
            planes: std::array::from_fn(|_| vec![0.0; pixel_count]),
        })
    }

    /// Build an image from four planes in [`Channel::ALL`] order
    pub fn from_planes(dimensions: Dimensions, planes: [Vec<f64>; NUM_CHANNELS]) -> ImagoResult<Self> {
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count();
        if let Some(plane) = planes.iter().find(|plane| plane.len() != expected) {
            return Err(ImagoError::PlaneSizeMismatch {
                expected,
                actual: plane.len(),
            });
        }

        Ok(Self { dimensions, planes })
    }

    /// Build an image from row-major pixels
    pub fn from_pixels(dimensions: Dimensions, pixels: &[Pixel]) -> ImagoResult<Self> {
        check_dimensions(dimensions)?;

        let expected = dimensions.pixel_count();
        if pixels.len() != expected {
            return Err(ImagoError::PlaneSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let planes = Channel::ALL.map(|channel| pixels.iter().map(|p| p.get(channel)).collect());
        Ok(Self { dimensions, planes })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    pub fn plane(&self, channel: Channel) -> &[f64] {
        &self.planes[channel.index()]
    }

    /// Mutable access to one plane
    pub fn plane_mut(&mut self, channel: Channel) -> &mut [f64] {
        &mut self.planes[channel.index()]
    }

    pub fn planes(&self) -> &[Vec<f64>; NUM_CHANNELS] {
        &self.planes
    }

    pub fn into_planes(self) -> [Vec<f64>; NUM_CHANNELS] {
        self.planes
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width(),
            self.height()
        );
        (y as usize) * (self.width() as usize) + (x as usize)
    }

    fn pixel_at(&self, index: usize) -> Pixel {
        Pixel::new(
            self.planes[0][index],
            self.planes[1][index],
            self.planes[2][index],
            self.planes[3][index],
        )
    }

    /// Read the pixel at column `x`, row `y`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixel_at(self.index(x, y))
    }

    /// Write the pixel at column `x`, row `y`. Panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let index = self.index(x, y);
        for channel in Channel::ALL {
            self.planes[channel.index()][index] = pixel.get(channel);
        }
    }

    /// All pixels in row-major order
    pub fn to_pixels(&self) -> Vec<Pixel> {
        (0..self.pixel_count()).map(|i| self.pixel_at(i)).collect()
    }

    /// Produce a new image of the same size by evaluating `f` for every
    /// position. `f` receives `(x, y, pixel)` and runs in parallel.
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: Fn(u32, u32, Pixel) -> Pixel + Sync,
    {
        let width = self.width() as usize;
        let pixels: Vec<Pixel> = (0..self.pixel_count())
            .into_par_iter()
            .map(|i| f((i % width) as u32, (i / width) as u32, self.pixel_at(i)))
            .collect();

        let planes = Channel::ALL.map(|channel| pixels.iter().map(|p| p.get(channel)).collect());
        Image {
            dimensions: self.dimensions,
            planes,
        }
    }
}
