use crate::*;

impl<T: Arithmetic> SpaceBounding<T, Bounds3<T>> for Vec3<T> {
  #[inline(always)]
  fn to_bounding(&self) -> Bounds3<T> {
    Bounds3::from_min_max(*self, *self)
  }
}

impl<T: Arithmetic> SpaceBounding<T, Bounds3<T>> for Bounds3<T> {
  #[inline(always)]
  fn to_bounding(&self) -> Bounds3<T> {
    *self
  }
}

impl<T: Arithmetic> SpaceBounding<T, Bounds3<T>> for Sphere<T> {
  #[inline(always)]
  fn to_bounding(&self) -> Bounds3<T> {
    self.bounds()
  }
}

impl<T: Arithmetic> SpaceBounding<T, Bounds3<T>> for [Vec3<T>] {
  #[inline]
  fn to_bounding(&self) -> Bounds3<T> {
    self.iter().collect()
  }
}
