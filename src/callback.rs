//! Pull-mode conversion driven by an input callback.

use std::collections::VecDeque;
use std::fmt;

use crate::common::{ChannelCount, Sample};
use crate::converter_type::ConverterType;
use crate::error::{Error, InvalidArgument, Result};
use crate::resampler::Resampler;

/// Upper bound on the number of input frames requested from the callback at once.
pub const MAX_CALLBACK_FRAMES: usize = 4096;

/// Error type returned by an input callback.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A block of interleaved input returned by the callback of a [`CallbackResampler`].
///
/// A chunk may hold more or fewer frames than were requested. An empty chunk ends the input just
/// like [`Chunk::exhausted`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    samples: Vec<Sample>,
    last: bool,
}

impl Chunk {
    /// Input with more to follow.
    pub fn more(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            last: false,
        }
    }

    /// The final input of the stream.
    pub fn last(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            last: true,
        }
    }

    /// No input left.
    pub fn exhausted() -> Self {
        Self::last(Vec::new())
    }

    /// Interleaved samples of this chunk.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Whether this chunk ends the input.
    pub fn is_last(&self) -> bool {
        self.last || self.samples.is_empty()
    }
}

impl From<Vec<Sample>> for Chunk {
    fn from(samples: Vec<Sample>) -> Self {
        Chunk::more(samples)
    }
}

/// Lifecycle of a [`CallbackResampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No input pulled yet.
    Unprimed,
    /// Input has been pulled and more is expected.
    Streaming,
    /// The callback signalled the end of the input. Only buffered output remains and the
    /// callback is not called again until [`reset`](CallbackResampler::reset).
    Exhausted,
}

/// Sample rate converter that pulls its input from a callback.
///
/// Every [`read`](CallbackResampler::read) returns exactly the number of frames asked for, unless
/// the input ran out. The callback receives a suggested number of input frames and returns a
/// [`Chunk`], or an error which is passed on as [`Error::CallbackFailure`]. Output that was
/// produced but not yet read is kept for the next call.
///
/// ```
/// use rateconv::{CallbackResampler, Chunk, ConverterType};
///
/// let mut input = vec![0.25; 100];
/// let mut resampler = CallbackResampler::new(
///     move |frames| {
///         let frames = frames.min(input.len());
///         let rest = input.split_off(frames);
///         let chunk = std::mem::replace(&mut input, rest);
///         Ok(Chunk::more(chunk))
///     },
///     2.0,
///     ConverterType::ZeroOrderHold,
///     1,
/// )?;
///
/// assert_eq!(resampler.read(150)?, vec![0.25; 150]);
/// assert_eq!(resampler.read(100)?.len(), 50);
/// assert!(resampler.read(10)?.is_empty());
/// # Ok::<(), rateconv::Error>(())
/// ```
pub struct CallbackResampler<F> {
    callback: F,
    resampler: Resampler,
    state: State,
    /// Converted frames not yet handed out.
    leftover: VecDeque<Sample>,
    scratch: Vec<Sample>,
}

impl<F> CallbackResampler<F>
where
    F: FnMut(usize) -> std::result::Result<Chunk, CallbackError>,
{
    /// Creates a converter reading its input from `callback`.
    pub fn new(
        callback: F,
        ratio: f64,
        converter_type: ConverterType,
        channels: ChannelCount,
    ) -> Result<Self> {
        let mut resampler = Resampler::new(converter_type, channels)?;
        resampler.set_ratio(ratio)?;
        Ok(Self {
            callback,
            resampler,
            state: State::Unprimed,
            leftover: VecDeque::new(),
            scratch: Vec::new(),
        })
    }

    /// Returns the next `frames` output frames.
    ///
    /// Fewer frames are returned only once the input is exhausted and the buffered output runs
    /// out. On error nothing already converted is lost; the next call picks up where this one
    /// stopped.
    pub fn read(&mut self, frames: usize) -> Result<Vec<Sample>> {
        let channels = self.resampler.channels() as usize;
        let wanted = frames
            .checked_mul(channels)
            .ok_or(InvalidArgument::FrameCount(frames))?;

        while self.leftover.len() < wanted && self.state != State::Exhausted {
            self.pull((wanted - self.leftover.len()) / channels)?;
        }

        let available = wanted.min(self.leftover.len());
        Ok(self.leftover.drain(..available).collect())
    }

    /// Pulls one chunk from the callback and converts it.
    ///
    /// The request covers `missing` output frames plus the converter's lookahead, less the input
    /// it already holds beyond the output position.
    fn pull(&mut self, missing: usize) -> Result<()> {
        let ratio = self.resampler.ratio();
        let request = ((missing as f64 / ratio).ceil() as usize)
            .saturating_add(self.resampler.lookahead())
            .saturating_sub(self.resampler.pending_frames())
            .clamp(1, MAX_CALLBACK_FRAMES);

        let chunk = (self.callback)(request).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "input callback failed");
            Error::CallbackFailure(err)
        })?;

        let last = chunk.is_last();
        #[cfg(feature = "tracing")]
        if chunk.samples.is_empty() && !chunk.last {
            tracing::debug!("input callback returned an empty chunk, treating it as the end");
        }

        self.scratch.clear();
        self.resampler
            .process_into(&chunk.samples, ratio, last, &mut self.scratch)?;
        self.leftover.extend(self.scratch.drain(..));

        if last {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                buffered = self.buffered_frames(),
                "input exhausted, converter flushed"
            );
            self.state = State::Exhausted;
        } else {
            self.state = State::Streaming;
        }
        Ok(())
    }

    /// Sets the ratio used from the next conversion on.
    pub fn set_starting_ratio(&mut self, ratio: f64) -> Result<()> {
        self.resampler.set_ratio(ratio)
    }

    /// Drops the buffered output and rewinds to [`State::Unprimed`].
    ///
    /// The callback is kept and will be asked for input again.
    pub fn reset(&mut self) {
        self.resampler.reset();
        self.leftover.clear();
        self.state = State::Unprimed;
    }

    /// Where the converter is in its lifecycle.
    pub fn state(&self) -> State {
        self.state
    }

    /// Ratio applied to the next input pulled from the callback.
    pub fn ratio(&self) -> f64 {
        self.resampler.ratio()
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> ChannelCount {
        self.resampler.channels()
    }

    /// Interpolation algorithm of the underlying converter.
    pub fn converter_type(&self) -> ConverterType {
        self.resampler.converter_type()
    }

    /// Output frames converted but not yet read.
    pub fn buffered_frames(&self) -> usize {
        self.leftover.len() / self.resampler.channels() as usize
    }
}

impl<F> fmt::Debug for CallbackResampler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffered_frames = self.leftover.len() / self.resampler.channels() as usize;
        f.debug_struct("CallbackResampler")
            .field("resampler", &self.resampler)
            .field("state", &self.state)
            .field("buffered_frames", &buffered_frames)
            .finish_non_exhaustive()
    }
}
