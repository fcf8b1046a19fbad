//! Miscellaneous utilities.

use crate::math::{Real, Rotation, Vector};

/// Trait to compute the sign of each component of a scalar/vector.
///
/// Two flavors are provided on purpose. [`WSign::sign`] always picks a side, which is
/// what support-point selection needs. [`WSign::sign_or_zero`] reports exact zeros,
/// which is how a feature lying exactly on a plane is detected.
pub trait WSign: Sized {
    /// Returns `-1` for strictly negative components and `+1` otherwise.
    ///
    /// Both `0.0` and `-0.0` map to `+1`.
    fn sign(self) -> Self;

    /// Returns `-1` for negative components, `+1` for positive ones and `0` for
    /// components exactly equal to zero.
    fn sign_or_zero(self) -> Self;
}

impl WSign for Real {
    #[inline]
    fn sign(self) -> Self {
        if self < 0.0 {
            -1.0
        } else {
            1.0
        }
    }

    #[inline]
    fn sign_or_zero(self) -> Self {
        if self < 0.0 {
            -1.0
        } else if self > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}

impl WSign for Vector<Real> {
    #[inline]
    fn sign(self) -> Self {
        self.map(|e: Real| WSign::sign(e))
    }

    #[inline]
    fn sign_or_zero(self) -> Self {
        self.map(|e: Real| WSign::sign_or_zero(e))
    }
}

/// Component-wise product of two vectors.
#[inline]
pub fn scale(a: &Vector<Real>, b: &Vector<Real>) -> Vector<Real> {
    a.component_mul(b)
}

/// The inverse of a unit rotation.
///
/// The input is assumed to be normalized; this is not checked.
#[inline]
pub fn conjugate(q: &Rotation<Real>) -> Rotation<Real> {
    q.conjugate()
}
