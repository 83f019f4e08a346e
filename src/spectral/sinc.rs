/*
Normalised sinc
===============

    sinc(x) = sin(πx) / (πx),    sinc(0) = 1

  1.0 ┐      ╱╲
      │     ╱  ╲
  0.0 ┼──╲─╱────╲─╱──→ x
      │   ╲╱     ╲╱
      -2  -1  0  1  2

Two places need care:

  x = 0       0/0 in floating point. The limit value 1 is returned directly
              instead of NaN.

  x = k ≠ 0   sin(π·k) in floating point is not zero (sin(π) ≈ 1.2e-16),
              because π itself is rounded. Spectral nulls then show up as
              tiny nonzero coefficients with meaningless phase.

The second case is handled by reducing the argument first. With k the
nearest integer and r = x - k (exact for any |x| < 2^52):

    sin(πx) = sin(πk + πr) = (-1)^k · sin(πr)

r is exactly 0 at every integer, so the nulls are exact zeros.
*/

use std::f64::consts::PI;

/// `sin(π·x)` with exact zeros at integers.
pub fn sin_pi(x: f64) -> f64 {
    let k = x.round();
    let r = x - k;
    if r == 0.0 {
        return 0.0;
    }
    let s = (PI * r).sin();
    if k % 2.0 == 0.0 {
        s
    } else {
        -s
    }
}

/// Normalised sinc, `sin(πx)/(πx)`, with `sinc(0) = 1`.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        sin_pi(x) / (PI * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_at_zero() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(sinc(-0.0), 1.0);
        assert!((sinc(1e-9) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exact_zeros_at_integers() {
        for k in 1..50 {
            assert_eq!(sinc(k as f64), 0.0, "k = {k}");
            assert_eq!(sinc(-(k as f64)), 0.0, "k = -{k}");
        }
    }

    #[test]
    fn matches_direct_formula_elsewhere() {
        for &x in &[0.2, 0.5, 1.5, -2.3, 7.77, 123.4] {
            let direct = (PI * x).sin() / (PI * x);
            assert!((sinc(x) - direct).abs() < 1e-12, "x = {x}");
        }
    }

    #[test]
    fn known_values() {
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-15);
        assert!((sinc(0.2) - 0.935_489_283_788_639_2).abs() < 1e-12);
    }

    #[test]
    fn sin_pi_sign_follows_half_period() {
        assert!((sin_pi(0.5) - 1.0).abs() < 1e-15);
        assert!((sin_pi(1.5) + 1.0).abs() < 1e-15);
        assert!((sin_pi(-0.5) + 1.0).abs() < 1e-15);
    }
}
