//! Bounding volumes built on the `linea-algebra` vectors.

use linea_algebra::*;

/// implement the reversed intersect by delegating to the already implemented side,
/// `$bound` is the element bound of that side
macro_rules! intersect_reverse {
  ($self_item: ty, $result:ty, $target:ty, $bound:path) => {
    impl<T: $bound> IntersectAble<$target, $result> for $self_item {
      #[inline(always)]
      fn intersect(&self, other: &$target) -> $result {
        IntersectAble::<$self_item, $result>::intersect(other, self)
      }
    }
  };
}

mod dimension3;
mod error;

pub use dimension3::*;
pub use error::*;

pub trait ContainAble<T, Target> {
  fn contains(&self, items: &Target) -> bool;
}

pub trait IntersectAble<Target, Result> {
  fn intersect(&self, other: &Target) -> Result;
}

pub trait SpaceBounding<T, Bound> {
  fn to_bounding(&self) -> Bound;
}

