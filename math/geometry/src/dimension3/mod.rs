mod bounding_impl;
mod bounds;
mod intersection;
mod sphere;

pub use bounds::*;
pub use sphere::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis3 {
  X,
  Y,
  Z,
}
