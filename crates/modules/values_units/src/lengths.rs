//! Root-relative length rendering with the fixed 16px base.

use std::fmt;
use std::ops::Neg;

/// Divisor for converting pixel quantities to rem/em.
pub const BASE_PX: f32 = 16.0;

/// A pixel quantity rendered as root-relative `rem` units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rem(f32);

impl Rem {
    /// Convert a pixel quantity to rem (`px / 16`).
    #[inline]
    pub fn from_px(pixels: f32) -> Self {
        Self(pixels / BASE_PX)
    }

    /// The rem magnitude, without unit.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Neg for Rem {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Rem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rem", self.0)
    }
}

/// A pixel quantity rendered as font-relative `em` units.
///
/// Page widths given as pixel numbers render in em, everything gap-sized
/// renders in rem; both share the 16px base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Em(f32);

impl Em {
    /// Convert a pixel quantity to em (`px / 16`).
    #[inline]
    pub fn from_px(pixels: f32) -> Self {
        Self(pixels / BASE_PX)
    }

    /// The em magnitude, without unit.
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Em {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}em", self.0)
    }
}
