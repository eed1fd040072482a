//! Haar wavelet lossy compression
//!
//! Every channel is padded to a square power-of-two buffer, transformed with
//! the 2D Haar pyramid, thresholded and transformed back. The result has the
//! dimensions of the input and the same `[0, 1]` sample convention.

use imago_core::consts::COEFFICIENT_EPSILON;
use imago_core::*;
use imago_transform::{haar2d_forward, haar2d_inverse, threshold, validate_epsilon, PlaneBuffer, Threshold};
use log::debug;
use rayon::prelude::*;

/// Compression options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressOptions {
    /// Fraction-quantile of coefficient magnitudes to suppress, in `[0, 1]`
    pub ratio: f64,
    /// Magnitudes below this are left out of the quantile statistic
    pub epsilon: f64,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            ratio: 0.0,
            epsilon: COEFFICIENT_EPSILON,
        }
    }
}

impl CompressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ratio. The value is validated when compressing.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// What happened to one channel's coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelOutcome {
    /// Ratio was 0, coefficients kept as-is
    Lossless,
    /// No coefficient reached epsilon, thresholding skipped
    Skipped,
    /// Coefficients at or below the cutoff were zeroed
    Thresholded(Threshold),
}

/// Per-channel compression summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelReport {
    pub channel: Channel,
    pub outcome: ChannelOutcome,
}

impl ChannelReport {
    /// Number of zero coefficients after thresholding, if it ran
    pub fn zeroed(&self) -> Option<usize> {
        match self.outcome {
            ChannelOutcome::Thresholded(t) => Some(t.zeroed),
            _ => None,
        }
    }
}

/// Summary of one compression call
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    /// Side of the square working buffer
    pub working_size: usize,
    /// Reports in [`Channel::ALL`] order
    pub channels: Vec<ChannelReport>,
}

impl CompressionReport {
    /// Coefficients per channel buffer
    pub fn coefficients_per_channel(&self) -> usize {
        self.working_size * self.working_size
    }

    /// Fraction of all coefficients that were zero after thresholding,
    /// counting only channels that were thresholded
    pub fn zeroed_fraction(&self) -> f64 {
        let (zeroed, total) = self
            .channels
            .iter()
            .filter_map(|report| report.zeroed())
            .fold((0, 0), |(zeroed, total), z| {
                (zeroed + z, total + self.coefficients_per_channel())
            });

        if total == 0 {
            0.0
        } else {
            zeroed as f64 / total as f64
        }
    }
}

/// Haar wavelet compressor
#[derive(Debug, Clone, Default)]
pub struct Compressor {
    options: CompressOptions,
}

impl Compressor {
    pub fn new(options: CompressOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompressOptions {
        &self.options
    }

    /// Compress an image, returning the degraded reconstruction
    pub fn compress(&self, image: &Image) -> ImagoResult<Image> {
        self.compress_with_report(image).map(|(image, _)| image)
    }

    /// Compress an image and report what happened to each channel
    pub fn compress_with_report(&self, image: &Image) -> ImagoResult<(Image, CompressionReport)> {
        let ratio = validate_ratio(self.options.ratio)?;
        let epsilon = validate_epsilon(self.options.epsilon)?;
        let dimensions = image.dimensions();

        let results = Channel::ALL
            .par_iter()
            .map(|&channel| self.compress_plane(image.plane(channel), dimensions, channel, ratio, epsilon))
            .collect::<ImagoResult<Vec<_>>>()?;

        let working_size = results.first().map_or(1, |(_, _, size)| *size);
        let mut planes: [Vec<f64>; 4] = Default::default();
        let mut channels = Vec::with_capacity(results.len());
        for (report, samples, _) in results {
            planes[report.channel.index()] = samples;
            channels.push(report);
        }

        let compressed = Image::from_planes(dimensions, planes)?;
        Ok((
            compressed,
            CompressionReport {
                working_size,
                channels,
            },
        ))
    }

    /// Pad, transform, threshold, inverse transform and crop one plane
    fn compress_plane(
        &self,
        samples: &[f64],
        dimensions: Dimensions,
        channel: Channel,
        ratio: f64,
        epsilon: f64,
    ) -> ImagoResult<(ChannelReport, Vec<f64>, usize)> {
        let mut buffer = PlaneBuffer::from_plane(samples, dimensions)?;
        haar2d_forward(&mut buffer);

        let outcome = match threshold(&mut buffer, ratio, epsilon) {
            Ok(None) => ChannelOutcome::Lossless,
            Ok(Some(result)) => ChannelOutcome::Thresholded(result),
            Err(ImagoError::EmptyCoefficientSet) => {
                debug!("{} channel has no coefficient above {epsilon}, skipping threshold", channel.name());
                ChannelOutcome::Skipped
            }
            Err(e) => return Err(e),
        };
        debug!("{} channel: {outcome:?}", channel.name());

        haar2d_inverse(&mut buffer);
        Ok((ChannelReport { channel, outcome }, buffer.crop(dimensions), buffer.size()))
    }
}

/// Compress `image` with the default epsilon and the given ratio
pub fn compress(image: &Image, ratio: f64) -> ImagoResult<Image> {
    Compressor::new(CompressOptions::default().ratio(ratio)).compress(image)
}
