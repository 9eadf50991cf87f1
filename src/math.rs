//! Numeric helpers used by the interpolation kernels.

use std::f64::consts::PI;

/// Linear interpolation between two samples.
///
/// Equivalent to `first * (1 - coefficient) + second * coefficient`, but exact for
/// `coefficient == 0`.
#[inline]
pub fn lerp(first: f64, second: f64, coefficient: f64) -> f64 {
    first + (second - first) * coefficient
}

/// Normalized sinc: `sin(πx) / (πx)`.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let pi_x = PI * x;
        pi_x.sin() / pi_x
    }
}

/// Modified Bessel function of the first kind, order zero.
pub fn bessel_i0(x: f64) -> f64 {
    let base = x * x / 4.0;

    let mut term = 1.0;
    let mut result = 1.0;

    for idx in 1..1500 {
        term = term * base / (idx * idx) as f64;
        let previous = result;
        result += term;
        if result == previous {
            break;
        }
    }

    result
}

/// Right half of a Kaiser window.
///
/// `x` is the distance from the window center normalized to the half-width, so the window is
/// `1.0` at `x == 0` and falls to `1 / I0(beta)` at `x == 1`. Outside the window it is zero.
pub fn kaiser(x: f64, beta: f64) -> f64 {
    if !(0.0..=1.0).contains(&x) {
        return 0.0;
    }
    bessel_i0(beta * (1.0 - x * x).sqrt()) / bessel_i0(beta)
}
