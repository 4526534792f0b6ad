// SPDX-License-Identifier: MIT
//
// JavaScript number rules.
//
// Generated stylesheets must match the plugin's output digit for digit, so
// the few numeric operations it relies on are reproduced exactly:
//
//   Math.round(x)          → round_half_up(x)   (ties toward +∞)
//   Math.round(x*10)/10    → round_tenth(x)
//   +x.toFixed(1)          → to_fixed_1(x)      (exact decimal, ties away from 0)
//   `${x}`                 → Num(x)             (shortest round-trip, no "-0")
//
// Rust's f64 `Display` already prints the shortest round-trip digits, which is
// what JavaScript does for every magnitude a stylesheet can contain.

use std::fmt;

/// `Math.round`: nearest integer, exact halves go toward positive infinity.
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// `Math.round(x * 10) / 10`.
#[must_use]
pub fn round_tenth(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

/// `Number(x.toFixed(1))`.
///
/// `toFixed` rounds the exact decimal value of `x`; only a true tie (the
/// product `x * 10` is exact and ends in `.5`) goes away from zero. Rust's
/// precision formatting rounds the same exact value, so everything but the
/// tie is delegated to it.
#[must_use]
pub fn to_fixed_1(x: f64) -> f64 {
    let scaled = x * 10.0;
    let exact = x.mul_add(10.0, -scaled) == 0.0;
    if exact && (scaled - scaled.trunc()).abs() == 0.5 {
        return (scaled.abs().ceil() / 10.0).copysign(x);
    }
    format!("{x:.1}").parse().unwrap_or(x)
}

/// A number formatted the way a JavaScript template literal prints it.
///
/// Integral values have no fractional part (`64`, not `64.0`) and negative
/// zero prints as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
