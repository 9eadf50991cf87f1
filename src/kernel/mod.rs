//! Interpolation kernels.
//!
//! A kernel turns the retained input history and a fractional read position into one output
//! frame. The converter picks the concrete kernel once per call and runs a loop that is generic
//! over [`Interpolate`], so the per-sample path never goes through dynamic dispatch.

use crate::common::{Sample, MIN_RATIO};
use crate::converter_type::{ConverterType, SincParameters};
use crate::history::History;

mod hold;
mod linear;
mod sinc;

pub(crate) use hold::ZeroOrderHold;
pub(crate) use linear::Linear;
pub(crate) use sinc::Sinc;

/// Read position in the input stream, in input frames.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct Position {
    /// Absolute index of the input frame at or before the position.
    pub(crate) index: i64,
    /// Fractional offset past `index`, always in `0.0..1.0`.
    pub(crate) phase: f64,
}

impl Position {
    /// Moves the position forward by `step` input frames.
    #[inline]
    pub(crate) fn advance(&mut self, step: f64) {
        self.phase += step;
        let whole = self.phase.floor();
        self.index += whole as i64;
        self.phase -= whole;
    }
}

/// How many input frames around [`Position::index`] a kernel reads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reach {
    /// Frames before `index` that must still be in the history.
    pub(crate) before: usize,
    /// Frames after `index` that must have arrived before the frame can be computed.
    pub(crate) after: usize,
}

pub(crate) trait Interpolate {
    /// Window the kernel reads for the given conversion ratio.
    fn reach(&self, ratio: f64) -> Reach;

    /// Computes the interleaved output `frame` at `position`.
    ///
    /// Frames outside the stream read as silence.
    fn interpolate(
        &mut self,
        history: &History,
        position: Position,
        ratio: f64,
        frame: &mut [Sample],
    );
}

/// The kernel selected by a [`ConverterType`].
#[derive(Debug, Clone)]
pub(crate) enum Kernel {
    ZeroOrderHold(ZeroOrderHold),
    Linear(Linear),
    Sinc(Sinc),
}

impl Kernel {
    pub(crate) fn new(converter_type: ConverterType) -> Self {
        match converter_type {
            ConverterType::SincBest => Kernel::Sinc(Sinc::new(SincParameters::best())),
            ConverterType::SincMedium => Kernel::Sinc(Sinc::new(SincParameters::medium())),
            ConverterType::SincFastest => Kernel::Sinc(Sinc::new(SincParameters::fastest())),
            ConverterType::ZeroOrderHold => Kernel::ZeroOrderHold(ZeroOrderHold),
            ConverterType::Linear => Kernel::Linear(Linear),
        }
    }

    pub(crate) fn reach(&self, ratio: f64) -> Reach {
        match self {
            Kernel::ZeroOrderHold(kernel) => kernel.reach(ratio),
            Kernel::Linear(kernel) => kernel.reach(ratio),
            Kernel::Sinc(kernel) => kernel.reach(ratio),
        }
    }

    /// Widest window over every accepted ratio.
    ///
    /// The window only grows as the ratio shrinks, so this is the window at [`MIN_RATIO`].
    pub(crate) fn max_reach(&self) -> Reach {
        self.reach(MIN_RATIO)
    }
}
