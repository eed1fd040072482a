//! Raster image decoding and encoding
//!
//! Decoding accepts any format the `image` crate was built with, reading
//! pixels as 16-bit RGBA and normalizing to `[0, 1]`. Encoding writes 8-bit
//! RGBA PNG, clamping and rounding every sample.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageReader};
use imago_core::{Channel, Dimensions, Image, ImagoError, ImagoResult, Pixel, Sample};
use log::debug;

fn decoding_error(error: ImageError) -> ImagoError {
    match error {
        ImageError::IoError(e) => ImagoError::IoError(e),
        other => ImagoError::DecodingError(other.to_string()),
    }
}

fn encoding_error(error: ImageError) -> ImagoError {
    match error {
        ImageError::IoError(e) => ImagoError::IoError(e),
        other => ImagoError::EncodingError(other.to_string()),
    }
}

/// Decode an image from a file path
pub fn decode_file<P: AsRef<Path>>(path: P) -> ImagoResult<Image> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decode an image held in memory
pub fn decode_bytes(bytes: &[u8]) -> ImagoResult<Image> {
    decode(Cursor::new(bytes))
}

/// Decode from a reader, guessing the format from its content
pub fn decode<R: BufRead + Seek>(reader: R) -> ImagoResult<Image> {
    let decoded = ImageReader::new(reader)
        .with_guessed_format()?
        .decode()
        .map_err(decoding_error)?;

    let rgba = decoded.to_rgba16();
    let dimensions = Dimensions::new(rgba.width(), rgba.height());
    debug!("decoded {}x{} image", dimensions.width, dimensions.height);

    let pixels: Vec<Pixel> = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            Pixel::new(
                r.to_normalized(),
                g.to_normalized(),
                b.to_normalized(),
                a.to_normalized(),
            )
        })
        .collect();

    Image::from_pixels(dimensions, &pixels)
}

/// Quantize an image to interleaved 8-bit RGBA
pub fn to_rgba8(image: &Image) -> Vec<u8> {
    image
        .to_pixels()
        .into_iter()
        .flat_map(|p| Channel::ALL.map(|channel| u8::from_normalized(p.get(channel))))
        .collect()
}

/// Encode an image as an 8-bit RGBA PNG
pub fn encode<W: Write>(image: &Image, writer: W) -> ImagoResult<()> {
    let buffer = to_rgba8(image);
    PngEncoder::new(writer)
        .write_image(&buffer, image.width(), image.height(), ExtendedColorType::Rgba8)
        .map_err(encoding_error)?;

    debug!("encoded {}x{} image as PNG", image.width(), image.height());
    Ok(())
}

/// Encode an image as PNG into memory
pub fn encode_bytes(image: &Image) -> ImagoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    encode(image, &mut bytes)?;
    Ok(bytes)
}

/// Encode an image as PNG to a file path
pub fn encode_file<P: AsRef<Path>>(image: &Image, path: P) -> ImagoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}
