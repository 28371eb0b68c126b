use crate::*;
use std::fmt;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}

impl<T: SignedArithmetic> Vec3<T> {
  #[inline]
  #[must_use]
  pub fn cross(&self, b: Self) -> Self {
    Self {
      x: self.y * b.z - self.z * b.y,
      y: self.z * b.x - self.x * b.z,
      z: self.x * b.y - self.y * b.x,
    }
  }
}

impl<T: Copy> Vec3<T> {
  #[inline(always)]
  pub fn xy(&self) -> Vec2<T> {
    Vec2::new(self.x, self.y)
  }

  #[inline(always)]
  pub fn expand_with(&self, w: T) -> Vec4<T> {
    Vec4::new(self.x, self.y, self.z, w)
  }
}

impl<T> fmt::Display for Vec3<T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
  }
}
