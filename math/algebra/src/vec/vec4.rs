use crate::*;
use std::fmt;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec4<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec4<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec4<T> {}

impl<T: Copy> Vec4<T> {
  #[inline(always)]
  pub fn xyz(&self) -> Vec3<T> {
    Vec3::new(self.x, self.y, self.z)
  }
}

impl<T> fmt::Display for Vec4<T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "{{{}, {}, {}, {}}}",
      self.x, self.y, self.z, self.w
    )
  }
}
