//! Geometric flips

use imago_core::Image;

/// Mirror the image left to right
pub fn flip_horizontal(image: &Image) -> Image {
    let last = image.width() - 1;
    image.map_pixels(|x, y, _| image.pixel(last - x, y))
}

/// Mirror the image top to bottom
pub fn flip_vertical(image: &Image) -> Image {
    let last = image.height() - 1;
    image.map_pixels(|x, y, _| image.pixel(x, last - y))
}
