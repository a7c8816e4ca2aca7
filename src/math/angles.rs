//! Degree-based trigonometry and angle normalization.
//!
//! The solar series are published in degrees, so every helper here takes or
//! returns degrees and keeps the radian conversion internal.

/// Normalizes an angle in degrees to the range `[0, 360)`.
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Wraps an angle in degrees into `(-180, 180]`.
pub fn wrap_degrees_180(degrees: f64) -> f64 {
    let wrapped = normalize_degrees_0_to_360(degrees);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Evaluates a polynomial with Horner's method.
///
/// Coefficients are ordered `[a0, a1, a2, ...]` for `a0 + a1*x + a2*x^2 + ...`.
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result.mul_add(x, coeff);
    }
    result
}

#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Arcsine in degrees. The argument is clamped to `[-1, 1]` first.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Arccosine in degrees. The argument is clamped to `[-1, 1]` first.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos().to_degrees()
}
