use std::ops::*;

use crate::*;

// this trait abstract the componentwise ops shared by every fixed size vector
pub trait Vector<T: Arithmetic>:
  Copy
  + Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Mul<Self, Output = Self>
  + Div<Self, Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Index<usize, Output = T>
  + IndexMut<usize>
{
  /// the fixed size array that holds the components in order
  type Components: AsRef<[T]>;

  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T;

  /// Perform the given operation on each field in the vector, returning a new point
  /// constructed from the operations.
  #[must_use]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T;

  /// Construct a new vector where each component is the result of
  /// applying the given operation to each pair of components of the
  /// given vectors.
  #[must_use]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T;

  fn components(&self) -> Self::Components;

  /// Overwrite every component from the slice.
  ///
  /// # Panics
  ///
  /// When the slice length is not the component count of the vector.
  fn set_components(&mut self, values: &[T]);

  #[inline]
  #[must_use]
  fn zero() -> Self {
    Self::create(T::zero)
  }
  #[inline]
  #[must_use]
  fn one() -> Self {
    Self::create(T::one)
  }
  #[inline]
  #[must_use]
  fn splat(v: T) -> Self {
    Self::create(|| v)
  }

  /// Left fold over the components, seeded by the first one.
  #[inline]
  fn reduce<F>(&self, f: F) -> T
  where
    F: Fn(T, T) -> T,
  {
    let components = self.components();
    let components = components.as_ref();
    components[1..]
      .iter()
      .fold(components[0], |acc, &component| f(acc, component))
  }

  #[inline]
  fn sum(&self) -> T {
    self.reduce(|a, b| a + b)
  }

  #[inline]
  fn dot(&self, b: Self) -> T {
    (*self * b).sum()
  }

  /// squared length, no square root involved so it works for every element type
  #[inline]
  fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  fn distance2(&self, b: Self) -> T {
    (b - *self).length2()
  }

  #[inline]
  fn min(self, rhs: Self) -> Self {
    self.zip(rhs, T::partial_min)
  }
  #[inline]
  fn max(self, rhs: Self) -> Self {
    self.zip(rhs, T::partial_max)
  }
  #[inline]
  fn clamp(self, min: Self, max: Self) -> Self {
    self.max(min).min(max)
  }

  #[inline]
  fn min_channel(&self) -> T {
    self.reduce(T::partial_min)
  }
  #[inline]
  fn max_channel(&self) -> T {
    self.reduce(T::partial_max)
  }

  #[inline]
  fn is_zero(&self) -> bool {
    self.components().as_ref().iter().all(|c| c.is_zero())
  }
}

/// the vector that in real number space
pub trait RealVector<T: RealArithmetic>: Vector<T> {
  #[inline]
  fn length(&self) -> T {
    self.length2().sqrt()
  }

  #[inline]
  fn distance(&self, b: Self) -> T {
    self.distance2(b).sqrt()
  }

  /// Divide by the length without any guard, a zero length vector produce NaN components.
  #[inline]
  #[must_use]
  fn normalize(&self) -> Self {
    let length = self.length();
    if length == T::zero() {
      log::debug!("normalize a zero length vector, the result will be NaN");
    }
    *self / length
  }

  /// componentwise compare within `T::EPSILON`, `==` is always exact
  #[inline]
  fn approx_eq(&self, other: Self) -> bool {
    self
      .components()
      .as_ref()
      .iter()
      .zip(other.components().as_ref())
      .all(|(&a, &b)| a.approx_eq(b))
  }

  #[inline]
  fn lerp(self, b: Self, t: T) -> Self {
    self * (T::one() - t) + b * t
  }
}
