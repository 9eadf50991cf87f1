use crate::common::{assert_error_traits, MAX_RATIO, MIN_RATIO};

/// A parameter or buffer handed to the converter was rejected.
///
/// These are always reported by the call that introduced the bad value, before any conversion
/// state is modified.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum InvalidArgument {
    /// The conversion ratio is not finite or lies outside the supported range.
    #[error("Ratio {0} is outside the supported range [{min}, {max}]", min = MIN_RATIO, max = MAX_RATIO)]
    Ratio(f64),
    /// A converter needs at least one channel.
    #[error("Channel count must be at least 1")]
    ChannelCount,
    /// A sample rate of zero was given.
    #[error("Sample rate must be at least 1 Hz")]
    SampleRate,
    /// The buffer length is not a whole number of frames.
    #[error("Buffer of {len} samples does not hold whole frames of {channels} channels")]
    MalformedBuffer {
        /// Length of the offending buffer in samples.
        len: usize,
        /// Channel count the buffer was checked against.
        channels: usize,
    },
    /// No converter type has this numeric code.
    #[error("There is no converter type with code {0}")]
    ConverterType(i64),
    /// No converter type has this name.
    #[error("There is no converter type named '{0}'")]
    ConverterName(String),
    /// A read asked for more frames than a buffer can address.
    #[error("Cannot read {0} frames at once")]
    FrameCount(usize),
}
assert_error_traits! {InvalidArgument}

/// Error returned by the converters.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter or buffer was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// The input callback of a [`CallbackResampler`](crate::CallbackResampler) reported an
    /// error. The original error is available through [`std::error::Error::source`].
    #[error("The input callback failed")]
    CallbackFailure(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
assert_error_traits! {Error}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
