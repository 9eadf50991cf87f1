//! Sample rate conversion for interleaved `f32` audio.
//!
//! Three ways to drive a converter, all built on the same engine:
//!
//! - [`resample`] converts a complete buffer in one call.
//! - [`Resampler`] is pushed consecutive blocks of a stream and returns whatever output they
//!   complete. The ratio may change from block to block.
//! - [`CallbackResampler`] pulls its input from a callback and hands out exactly the number of
//!   output frames asked for.
//!
//! The ratio is always `output_rate / input_rate` and must lie within
//! [`MIN_RATIO`]`..=`[`MAX_RATIO`]. Use [`ratio_from_rates`] to compute it from two sample
//! rates.
//!
//! # Converters
//!
//! | [`ConverterType`] | Code | Quality |
//! |---|---|---|
//! | [`SincBest`](ConverterType::SincBest) | 0 | band limited, widest filter |
//! | [`SincMedium`](ConverterType::SincMedium) | 1 | band limited |
//! | [`SincFastest`](ConverterType::SincFastest) | 2 | band limited, narrowest filter |
//! | [`ZeroOrderHold`](ConverterType::ZeroOrderHold) | 3 | aliasing, very cheap |
//! | [`Linear`](ConverterType::Linear) | 4 | aliasing, very cheap |
//!
//! The sinc converters lower their cutoff when downsampling so that content above the new
//! Nyquist frequency is filtered out instead of folding back into the audible band.
//!
//! # Example
//!
//! ```
//! use rateconv::{ratio_from_rates, resample, ConverterType};
//!
//! let input: Vec<f32> = (0..4410)
//!     .map(|n| (n as f32 * 440.0 * std::f32::consts::TAU / 44_100.0).sin())
//!     .collect();
//! let ratio = ratio_from_rates(44_100, 48_000)?;
//! let output = resample(&input, ratio, ConverterType::SincMedium, 1)?;
//! assert!(output.len().abs_diff(4800) <= 1);
//! # Ok::<(), rateconv::Error>(())
//! ```
//!
//! # Optional Features
//!
//! - **`tracing`**: logs converter construction, resets, flushes and callback events through
//!   [`tracing`](https://docs.rs/tracing).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod callback;
mod common;
mod converter_type;
mod error;
mod history;
mod kernel;
mod resample;
mod resampler;
mod state;

pub mod math;

pub use crate::callback::{CallbackError, CallbackResampler, Chunk, State, MAX_CALLBACK_FRAMES};
pub use crate::common::{
    is_valid_ratio, ratio_from_rates, ChannelCount, Sample, SampleRate, MAX_RATIO, MIN_RATIO,
};
pub use crate::converter_type::{ConverterType, SincParameters};
pub use crate::error::{Error, InvalidArgument, Result};
pub use crate::resample::resample;
pub use crate::resampler::Resampler;
