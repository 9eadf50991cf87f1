use crate::common::Sample;
use crate::history::History;

use super::{Interpolate, Position, Reach};

/// Repeats the input frame at or before the read position.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ZeroOrderHold;

impl Interpolate for ZeroOrderHold {
    #[inline]
    fn reach(&self, _ratio: f64) -> Reach {
        Reach::default()
    }

    #[inline]
    fn interpolate(
        &mut self,
        history: &History,
        position: Position,
        _ratio: f64,
        frame: &mut [Sample],
    ) {
        for (channel, sample) in frame.iter_mut().enumerate() {
            *sample = history.get(channel, position.index);
        }
    }
}
