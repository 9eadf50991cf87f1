use crate::common::{ChannelCount, Sample};
use crate::converter_type::ConverterType;
use crate::error::Result;
use crate::resampler::Resampler;

/// Converts a complete buffer of interleaved samples in one go.
///
/// The result is identical to feeding `input` to a new [`Resampler`] with `end_of_input` set.
/// A buffer of `N` frames yields `N * ratio` frames, give or take one.
///
/// ```
/// use rateconv::{resample, ConverterType};
///
/// let output = resample(&[1.0, -1.0, 2.0, -2.0], 2.0, ConverterType::ZeroOrderHold, 2)?;
/// assert_eq!(output, [1.0, -1.0, 1.0, -1.0, 2.0, -2.0, 2.0, -2.0]);
/// # Ok::<(), rateconv::Error>(())
/// ```
pub fn resample(
    input: &[Sample],
    ratio: f64,
    converter_type: ConverterType,
    channels: ChannelCount,
) -> Result<Vec<Sample>> {
    Resampler::new(converter_type, channels)?.process(input, ratio, true)
}
