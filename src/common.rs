use num_rational::Ratio;

use crate::error::InvalidArgument;

/// A single audio sample. Buffers are always interleaved by channel.
pub type Sample = f32;

/// Number of channels in a stream.
pub type ChannelCount = u16;

/// Stream sample rate (samples per second per channel).
pub type SampleRate = u32;

/// Largest accepted conversion ratio (output rate / input rate).
pub const MAX_RATIO: f64 = 256.0;

/// Smallest accepted conversion ratio (output rate / input rate).
pub const MIN_RATIO: f64 = 1.0 / MAX_RATIO;

/// Returns `true` if `ratio` can be used for conversion.
///
/// The ratio must be finite and lie within [`MIN_RATIO`]..=[`MAX_RATIO`].
///
/// # Example
/// ```
/// assert!(rateconv::is_valid_ratio(48_000.0 / 44_100.0));
/// assert!(!rateconv::is_valid_ratio(0.0));
/// assert!(!rateconv::is_valid_ratio(f64::NAN));
/// ```
#[inline]
pub fn is_valid_ratio(ratio: f64) -> bool {
    ratio.is_finite() && (MIN_RATIO..=MAX_RATIO).contains(&ratio)
}

/// Computes the conversion ratio needed to go from the `from` sample rate to the `to` sample
/// rate.
///
/// # Example
/// ```
/// let ratio = rateconv::ratio_from_rates(44_100, 88_200)?;
/// assert_eq!(ratio, 2.0);
/// # Ok::<(), rateconv::InvalidArgument>(())
/// ```
pub fn ratio_from_rates(from: SampleRate, to: SampleRate) -> Result<f64, InvalidArgument> {
    if from == 0 || to == 0 {
        return Err(InvalidArgument::SampleRate);
    }

    // Reducing first keeps the division exact for the common rate families.
    let (numer, denom) = Ratio::new(to, from).into_raw();
    validate_ratio(numer as f64 / denom as f64)
}

pub(crate) fn validate_ratio(ratio: f64) -> Result<f64, InvalidArgument> {
    if is_valid_ratio(ratio) {
        Ok(ratio)
    } else {
        Err(InvalidArgument::Ratio(ratio))
    }
}

pub(crate) fn validate_channels(channels: ChannelCount) -> Result<usize, InvalidArgument> {
    match channels {
        0 => Err(InvalidArgument::ChannelCount),
        channels => Ok(channels as usize),
    }
}

/// Returns the number of frames in `buffer`.
pub(crate) fn frame_count(buffer: &[Sample], channels: usize) -> Result<usize, InvalidArgument> {
    if buffer.len() % channels != 0 {
        return Err(InvalidArgument::MalformedBuffer {
            len: buffer.len(),
            channels,
        });
    }
    Ok(buffer.len() / channels)
}

/// Fails to compile if the error type is missing one of the traits callers rely on.
macro_rules! assert_error_traits {
    ($to_test:path) => {
        const _: () = {
            $crate::common::check_error_traits::<$to_test>();
        };
    };
}
pub(crate) use assert_error_traits;

pub(crate) const fn check_error_traits<T>()
where
    T: std::error::Error + Send + Sync + 'static,
{
}
