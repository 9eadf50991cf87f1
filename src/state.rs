use crate::common::Sample;
use crate::history::History;
use crate::kernel::{Interpolate, Position, Reach};

/// Everything a converter carries between calls.
///
/// Output frame `j` of a stream is read at input position `sum(1 / ratio)` over the frames
/// before it, so the first output frame lines up with the first input frame.
#[derive(Debug, Clone)]
pub(crate) struct ConversionState {
    history: History,
    position: Position,
    ratio: f64,
    primed: bool,
    /// Scratch space for one output frame.
    frame: Vec<Sample>,
}

impl ConversionState {
    /// `max_reach` is the widest window the kernel will ever need.
    pub(crate) fn new(channels: usize, max_reach: Reach) -> Self {
        Self {
            history: History::new(channels, max_reach.before + max_reach.after + 2),
            position: Position::default(),
            ratio: 1.0,
            primed: false,
            frame: vec![0.0; channels],
        }
    }

    #[inline]
    pub(crate) fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Takes effect from the next output frame. Must already be validated.
    #[inline]
    pub(crate) fn set_ratio(&mut self, ratio: f64) {
        self.ratio = ratio;
    }

    #[inline]
    pub(crate) fn is_primed(&self) -> bool {
        self.primed
    }

    /// Input frames at or after the current read position.
    #[inline]
    pub(crate) fn pending_frames(&self) -> usize {
        (self.history.written() - self.position.index).max(0) as usize
    }

    /// Forgets all input and rewinds to the start of a new stream. The ratio is kept.
    pub(crate) fn reset(&mut self) {
        self.history.clear();
        self.position = Position::default();
        self.primed = false;
    }

    /// Feeds `input` through `kernel` and appends every output frame that can be computed.
    ///
    /// All of `input` is consumed. Without `end_of_input`, frames whose window reaches past the
    /// newest input frame are held back until a later call supplies it. With `end_of_input`, the
    /// stream is padded with silence and finished, and the state is rewound for a new stream.
    ///
    /// Returns the number of frames appended to `output`.
    pub(crate) fn drain<K: Interpolate>(
        &mut self,
        kernel: &mut K,
        input: &[Sample],
        end_of_input: bool,
        output: &mut Vec<Sample>,
    ) -> usize {
        let channels = self.history.channels();
        let reach = kernel.reach(self.ratio);
        let lookahead = reach.after as i64;
        let step = 1.0 / self.ratio;
        let start = output.len();

        let mut frames = input.chunks_exact(channels);
        loop {
            if self.position.index + lookahead < self.history.written() {
                self.emit(kernel, step, output);
                continue;
            }
            match frames.next() {
                Some(frame) => {
                    self.history.push(frame);
                    self.primed = true;
                }
                None => break,
            }
        }

        if end_of_input {
            while self.position.index < self.history.written() {
                self.emit(kernel, step, output);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(
                frames = self.history.written(),
                "end of input, rewinding converter"
            );
            self.reset();
        }

        (output.len() - start) / channels
    }

    #[inline]
    fn emit<K: Interpolate>(&mut self, kernel: &mut K, step: f64, output: &mut Vec<Sample>) {
        kernel.interpolate(&self.history, self.position, self.ratio, &mut self.frame);
        output.extend_from_slice(&self.frame);
        self.position.advance(step);
    }
}
