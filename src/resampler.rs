//! Push-mode streaming converter.

use crate::common::{frame_count, validate_channels, validate_ratio, ChannelCount, Sample};
use crate::converter_type::ConverterType;
use crate::error::Result;
use crate::kernel::Kernel;
use crate::state::ConversionState;

/// Streaming sample rate converter.
///
/// Feed it consecutive blocks of interleaved input with [`process`](Resampler::process) and it
/// returns every output frame it can compute so far. Frames that need input beyond the end of the
/// current block are held back and produced by a later call, so splitting a stream into blocks
/// does not change the output. The last block of a stream is marked with `end_of_input`, which
/// pads the stream with silence, flushes the held back frames and rewinds the converter for the
/// next stream.
///
/// The ratio may differ from call to call. Retained history is never requantized; only the step
/// between output frames and, for the sinc converters, the filter cutoff change.
///
/// ```
/// use rateconv::{ConverterType, Resampler};
///
/// let mut resampler = Resampler::new(ConverterType::Linear, 1)?;
/// let mut output = resampler.process(&[0.0, 1.0], 2.0, false)?;
/// output.extend(resampler.process(&[2.0, 3.0], 2.0, true)?);
/// assert_eq!(output, [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 1.5]);
/// # Ok::<(), rateconv::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Resampler {
    converter_type: ConverterType,
    channels: ChannelCount,
    kernel: Kernel,
    state: ConversionState,
}

impl Resampler {
    /// Creates a converter for `channels` interleaved channels.
    ///
    /// The initial ratio is `1.0`. Returns [`InvalidArgument::ChannelCount`] when `channels` is
    /// zero.
    ///
    /// [`InvalidArgument::ChannelCount`]: crate::InvalidArgument::ChannelCount
    pub fn new(converter_type: ConverterType, channels: ChannelCount) -> Result<Self> {
        let channel_count = validate_channels(channels)?;
        let kernel = Kernel::new(converter_type);
        let state = ConversionState::new(channel_count, kernel.max_reach());

        #[cfg(feature = "tracing")]
        tracing::debug!(%converter_type, channels, "created resampler");

        Ok(Self {
            converter_type,
            channels,
            kernel,
            state,
        })
    }

    /// Converts one block of interleaved input and returns the output frames it completes.
    ///
    /// `ratio` is `output_rate / input_rate` and applies from the first frame produced by this
    /// call. Nothing is modified when the ratio or the buffer is rejected.
    pub fn process(
        &mut self,
        input: &[Sample],
        ratio: f64,
        end_of_input: bool,
    ) -> Result<Vec<Sample>> {
        let mut output = Vec::new();
        self.process_into(input, ratio, end_of_input, &mut output)?;
        Ok(output)
    }

    /// Like [`process`](Resampler::process) but appends to `output`.
    ///
    /// Returns the number of frames appended.
    pub fn process_into(
        &mut self,
        input: &[Sample],
        ratio: f64,
        end_of_input: bool,
        output: &mut Vec<Sample>,
    ) -> Result<usize> {
        let ratio = validate_ratio(ratio)?;
        let frames = frame_count(input, self.channels as usize)?;

        self.state.set_ratio(ratio);
        output.reserve(((frames as f64 + 1.0) * ratio).ceil() as usize * self.channels as usize);

        let generated = match &mut self.kernel {
            Kernel::ZeroOrderHold(kernel) => self.state.drain(kernel, input, end_of_input, output),
            Kernel::Linear(kernel) => self.state.drain(kernel, input, end_of_input, output),
            Kernel::Sinc(kernel) => self.state.drain(kernel, input, end_of_input, output),
        };
        Ok(generated)
    }

    /// Changes the ratio used by the next call without touching the history.
    pub fn set_ratio(&mut self, ratio: f64) -> Result<()> {
        self.state.set_ratio(validate_ratio(ratio)?);
        Ok(())
    }

    /// Rewinds to the start of a new stream.
    ///
    /// History and position are cleared. The converter type, channel count and ratio are kept.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(converter_type = %self.converter_type, "resetting resampler");

        self.state.reset();
    }

    /// Interpolation algorithm chosen at construction.
    pub fn converter_type(&self) -> ConverterType {
        self.converter_type
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    /// Ratio of the most recent call, or the one set with [`set_ratio`](Resampler::set_ratio).
    pub fn ratio(&self) -> f64 {
        self.state.ratio()
    }

    /// Whether any input has been seen since construction or the last reset.
    pub fn is_primed(&self) -> bool {
        self.state.is_primed()
    }

    /// Input frames past an output position that must arrive before that frame is produced,
    /// at the current ratio.
    pub fn lookahead(&self) -> usize {
        self.kernel.reach(self.state.ratio()).after
    }

    /// Input frames received at or past the position of the next output frame.
    ///
    /// Once this exceeds [`lookahead`](Resampler::lookahead), the next output frame can be
    /// computed.
    pub fn pending_frames(&self) -> usize {
        self.state.pending_frames()
    }
}
