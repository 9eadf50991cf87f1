use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use crate::common::Sample;
use crate::converter_type::SincParameters;
use crate::history::History;
use crate::math::{kaiser, lerp, sinc};

use super::{Interpolate, Position, Reach};

/// Zero crossings, oversampling and the bits of the Kaiser beta.
type TableKey = (usize, usize, u64);

static TABLE_CACHE: LazyLock<Mutex<HashMap<TableKey, Arc<[f64]>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Builds the right half of the windowed sinc, `oversampling` points per zero crossing.
fn build_table(params: &SincParameters) -> Vec<f64> {
    let oversampling = params.oversampling() as f64;
    let zero_crossings = params.zero_crossings() as f64;
    let points = params.zero_crossings() * params.oversampling();

    (0..=points)
        .map(|point| {
            let x = point as f64 / oversampling;
            sinc(x) * kaiser(x / zero_crossings, params.beta())
        })
        .collect()
}

fn cached_table(params: &SincParameters) -> Arc<[f64]> {
    let key = (
        params.zero_crossings(),
        params.oversampling(),
        params.beta().to_bits(),
    );
    let mut cache = TABLE_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(
        cache
            .entry(key)
            .or_insert_with(|| build_table(params).into()),
    )
}

/// Band-limited interpolation with a Kaiser-windowed sinc.
///
/// The filter is stretched by `1 / cutoff` input frames per zero crossing, where the cutoff
/// follows the current ratio when downsampling. Coefficients for one output frame are computed
/// once and applied to every channel.
#[derive(Debug, Clone)]
pub(crate) struct Sinc {
    params: SincParameters,
    table: Arc<[f64]>,
    coefficients: Vec<f64>,
}

impl Sinc {
    pub(crate) fn new(params: SincParameters) -> Self {
        Self {
            params,
            table: cached_table(&params),
            coefficients: Vec::new(),
        }
    }

    /// Input frames covered by one side of the filter at `cutoff`.
    #[inline]
    fn half_width(&self, cutoff: f64) -> usize {
        (self.params.zero_crossings() as f64 / cutoff).ceil() as usize
    }

    /// Filter value at `distance` zero crossings from the center.
    #[inline]
    fn lookup(&self, distance: f64) -> f64 {
        let position = distance * self.params.oversampling() as f64;
        let index = position as usize;
        if index + 1 >= self.table.len() {
            return 0.0;
        }
        lerp(self.table[index], self.table[index + 1], position - index as f64)
    }
}

impl Interpolate for Sinc {
    fn reach(&self, ratio: f64) -> Reach {
        let half_width = self.half_width(self.params.cutoff(ratio));
        Reach {
            before: half_width,
            after: half_width,
        }
    }

    fn interpolate(
        &mut self,
        history: &History,
        position: Position,
        ratio: f64,
        frame: &mut [Sample],
    ) {
        let cutoff = self.params.cutoff(ratio);
        let half_width = self.half_width(cutoff) as i64;

        // Frames outside the stream are silent, skip them.
        let first = (position.index - half_width).max(0);
        let last = (position.index + half_width).min(history.written() - 1);

        self.coefficients.clear();
        for index in first..=last {
            let distance = ((position.index - index) as f64 + position.phase).abs();
            let coefficient = cutoff * self.lookup(distance * cutoff);
            self.coefficients.push(coefficient);
        }

        for (channel, sample) in frame.iter_mut().enumerate() {
            let sum: f64 = self
                .coefficients
                .iter()
                .zip(first..)
                .map(|(coefficient, index)| coefficient * history.get(channel, index) as f64)
                .sum();
            *sample = sum as Sample;
        }
    }
}
