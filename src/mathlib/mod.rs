//! Degree-based trigonometry, angle normalization, and single-axis rotations
//!
//! Small pure helpers shared by every component above them. Astronomical
//! series and catalog data are published in degrees, so the trigonometric
//! wrappers here take and return degrees; rotation matrices are built from
//! degree angles for the same reason.

use nalgebra::Matrix3;

/// Sine of an angle given in degrees
#[inline]
pub fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle given in degrees
#[inline]
pub fn cosd(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle given in degrees
#[inline]
pub fn tand(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arcsine in degrees
#[inline]
pub fn asind(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees
#[inline]
pub fn acosd(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Two-argument arctangent in degrees
#[inline]
pub fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Normalize an angle to [0, 360) degrees
#[inline]
pub fn wrap360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to (-180, 180] degrees
#[inline]
pub fn wrap180(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    if w > 180.0 {
        w - 360.0
    } else {
        w
    }
}

/// Frame rotation about the X axis by `deg` degrees.
///
/// Alias convention: `rot1(a) * v` expresses the fixed vector `v` in a
/// frame rotated by `a` about X.
pub fn rot1(deg: f64) -> Matrix3<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,   c,   s,
        0.0,  -s,   c,
    );
    m
}

/// Frame rotation about the Y axis by `deg` degrees
pub fn rot2(deg: f64) -> Matrix3<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
          c, 0.0,  -s,
        0.0, 1.0, 0.0,
          s, 0.0,   c,
    );
    m
}

/// Frame rotation about the Z axis by `deg` degrees
pub fn rot3(deg: f64) -> Matrix3<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
          c,   s, 0.0,
         -s,   c, 0.0,
        0.0, 0.0, 1.0,
    );
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_degree_trig() {
        assert_relative_eq!(sind(30.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(cosd(60.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(tand(45.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(asind(1.0), 90.0, epsilon = 1e-12);
        assert_relative_eq!(acosd(-1.0), 180.0, epsilon = 1e-12);
        assert_relative_eq!(atan2d(1.0, 1.0), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap360() {
        assert_relative_eq!(wrap360(370.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(wrap360(-10.0), 350.0, epsilon = 1e-12);
        assert_relative_eq!(wrap360(720.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap180() {
        assert_relative_eq!(wrap180(190.0), -170.0, epsilon = 1e-12);
        assert_relative_eq!(wrap180(180.0), 180.0, epsilon = 1e-12);
        assert_relative_eq!(wrap180(-190.0), 170.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rot3_quarter_turn() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        let r = rot3(90.0) * v;
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotations_orthogonal() {
        for m in [rot1(33.0), rot2(-71.0), rot3(128.0)] {
            let product = m.transpose() * m;
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(product[(i, j)], expected, epsilon = 1e-14);
                }
            }
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_rotation_inverse_is_negative_angle() {
        let m = rot1(25.0) * rot1(-25.0);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(m[(i, j)], expected, epsilon = 1e-14);
            }
        }
    }
}
