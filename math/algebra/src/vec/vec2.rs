use crate::*;
use std::fmt;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec2<T> {
  pub x: T,
  pub y: T,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec2<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec2<T> {}

impl<T: SignedArithmetic> Vec2<T> {
  /// the z component of the 3d cross product, positive when rhs is counter clockwise
  #[inline]
  pub fn perp_dot(&self, rhs: Self) -> T {
    self.x * rhs.y - self.y * rhs.x
  }

  #[inline]
  #[must_use]
  pub fn perpendicular(&self) -> Self {
    Self::new(-self.y, self.x)
  }
}

impl<T> fmt::Display for Vec2<T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{{{}, {}}}", self.x, self.y)
  }
}
