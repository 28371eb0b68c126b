use std::fmt::{Debug, Display};
use std::ops::*;

use num_traits::{Float, One, Signed, Zero};

/// The numeric capability every vector component type must provide.
///
/// All primitive integers and floats conform. Ordering is `PartialOrd` so that
/// floats can take part; for every conforming type except NaN floats the order
/// is total.
pub trait Arithmetic:
  Copy
  + Debug
  + Display
  + Default
  + PartialEq
  + PartialOrd
  + Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Mul<Self, Output = Self>
  + Div<Self, Output = Self>
  + AddAssign<Self>
  + SubAssign<Self>
  + MulAssign<Self>
  + DivAssign<Self>
  + Zero
  + One
{
  #[inline(always)]
  fn two() -> Self {
    Self::one() + Self::one()
  }

  /// return the smaller one, self is kept when unordered
  #[inline(always)]
  fn partial_min(self, other: Self) -> Self {
    if other < self {
      other
    } else {
      self
    }
  }

  /// return the larger one, self is kept when unordered
  #[inline(always)]
  fn partial_max(self, other: Self) -> Self {
    if other > self {
      other
    } else {
      self
    }
  }
}

/// Arithmetic with negation and a well defined sign.
pub trait SignedArithmetic: Arithmetic + Neg<Output = Self> + Signed {}

/// Arithmetic over real numbers, only floats conform.
///
/// `EPSILON` is the threshold used by explicit approximate comparisons. It is
/// not the machine epsilon of the type.
pub trait RealArithmetic: SignedArithmetic + Float {
  const EPSILON: Self;

  #[inline(always)]
  fn distance_to(self, other: Self) -> Self {
    Float::abs(self - other)
  }

  #[inline(always)]
  fn approx_eq(self, other: Self) -> bool {
    self.distance_to(other) <= Self::EPSILON
  }
}

macro_rules! impl_arithmetic {
  ($($ty:ty),+) => {
    $(impl Arithmetic for $ty {})+
  };
}

macro_rules! impl_signed_arithmetic {
  ($($ty:ty),+) => {
    $(impl SignedArithmetic for $ty {})+
  };
}

impl_arithmetic!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
impl_signed_arithmetic!(i8, i16, i32, i64, isize, f32, f64);

impl RealArithmetic for f32 {
  const EPSILON: Self = 1e-6;
}

impl RealArithmetic for f64 {
  const EPSILON: Self = 1e-15;
}
