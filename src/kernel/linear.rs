use crate::common::Sample;
use crate::history::History;
use crate::math::lerp;

use super::{Interpolate, Position, Reach};

/// Straight line between the two input frames around the read position.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Linear;

impl Interpolate for Linear {
    #[inline]
    fn reach(&self, _ratio: f64) -> Reach {
        Reach {
            before: 0,
            after: 1,
        }
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
            let current = history.get(channel, position.index) as f64;
            let next = history.get(channel, position.index + 1) as f64;
            *sample = lerp(current, next, position.phase) as Sample;
        }
    }
}
