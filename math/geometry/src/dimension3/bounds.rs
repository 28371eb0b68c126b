use std::fmt;

use crate::*;

/// Axis aligned box, stored by its min and max corner.
///
/// The center / extents view is always computable. The all zero box is the "null" box,
/// which is also the default. A box with `min > max` on some axis is accepted but
/// contains nothing on that axis.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Bounds3<T> {
  pub min: Vec3<T>,
  pub max: Vec3<T>,
}

impl<T: Arithmetic> Bounds3<T> {
  /// create from center and half size, extents is expected to be non negative
  #[inline]
  pub fn new(center: Vec3<T>, extents: Vec3<T>) -> Self {
    Self::from_min_max(center - extents, center + extents)
  }

  pub fn from_min_max(min: Vec3<T>, max: Vec3<T>) -> Self {
    if (0..3).any(|axis| min[axis] > max[axis]) {
      log::warn!("create bounds with inverted corners, min: {min}, max: {max}");
    }
    Self { min, max }
  }

  #[inline]
  pub fn null() -> Self {
    Self {
      min: Vec3::zero(),
      max: Vec3::zero(),
    }
  }

  /// Judged on the center / extents view. A real zero sized box at the origin is also
  /// null, and so is an integer box whose truncated center and extents are both zero.
  #[inline]
  pub fn is_null(&self) -> bool {
    self.center().is_zero() && self.extents().is_zero()
  }

  /// integer element types truncate toward zero
  #[inline]
  pub fn center(&self) -> Vec3<T> {
    (self.min + self.max) / T::two()
  }

  #[inline]
  pub fn extents(&self) -> Vec3<T> {
    (self.max - self.min) / T::two()
  }

  #[inline]
  pub fn size(&self) -> Vec3<T> {
    self.max - self.min
  }

  /// the smallest box contains both
  #[inline]
  #[must_use]
  pub fn union(&self, other: Self) -> Self {
    Self {
      min: self.min.min(other.min),
      max: self.max.max(other.max),
    }
  }

  #[inline]
  pub fn expand_by_point(&mut self, point: Vec3<T>) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  #[inline]
  pub fn expand_by_box(&mut self, other: Self) {
    *self = self.union(other);
  }

  pub fn longest_axis(&self) -> (Axis3, T) {
    let Vec3 { x, y, z } = self.size();

    if x > y {
      if x > z {
        (Axis3::X, x)
      } else {
        (Axis3::Z, z)
      }
    } else if y > z {
      (Axis3::Y, y)
    } else {
      (Axis3::Z, z)
    }
  }
}

impl<T: Arithmetic> ContainAble<T, Vec3<T>> for Bounds3<T> {
  /// inclusive on every axis
  #[inline]
  fn contains(&self, point: &Vec3<T>) -> bool {
    (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
  }
}

impl<T: Arithmetic> ContainAble<T, Bounds3<T>> for Bounds3<T> {
  #[inline]
  fn contains(&self, other: &Bounds3<T>) -> bool {
    self.contains(&other.min) && self.contains(&other.max)
  }
}

impl<T: Arithmetic> IntersectAble<Bounds3<T>, bool> for Bounds3<T> {
  /// touching boxes intersect
  #[inline]
  fn intersect(&self, other: &Bounds3<T>) -> bool {
    (0..3).all(|axis| self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis])
  }
}

impl<T: Arithmetic> FromIterator<Vec3<T>> for Bounds3<T> {
  /// an empty iterator gives the null box
  fn from_iter<I: IntoIterator<Item = Vec3<T>>>(items: I) -> Self {
    let mut items = items.into_iter();
    let Some(first) = items.next() else {
      return Self::null();
    };
    let mut bbox = Self::from_min_max(first, first);
    items.for_each(|p| bbox.expand_by_point(p));
    bbox
  }
}

impl<'a, T: Arithmetic> FromIterator<&'a Vec3<T>> for Bounds3<T> {
  fn from_iter<I: IntoIterator<Item = &'a Vec3<T>>>(items: I) -> Self {
    items.into_iter().copied().collect()
  }
}

impl<T: Arithmetic> FromIterator<Bounds3<T>> for Bounds3<T> {
  fn from_iter<I: IntoIterator<Item = Bounds3<T>>>(items: I) -> Self {
    items
      .into_iter()
      .reduce(|a, b| a.union(b))
      .unwrap_or_else(Self::null)
  }
}

impl<T: Arithmetic> fmt::Display for Bounds3<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{{{}, {}}}", self.center(), self.extents())
  }
}
