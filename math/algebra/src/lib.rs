//! Fixed size vectors generic over the primitive numeric types.
//!
//! The scalar layer ([`Arithmetic`], [`SignedArithmetic`], [`RealArithmetic`]) decides
//! which operations a vector offers: every element type gets componentwise arithmetic,
//! `sum`, `dot`, `length2` and `distance2`, floats additionally get `length`,
//! `distance`, `normalize` and explicit approximate comparison.

mod error;
mod scalar;
mod vec;

pub use error::*;
pub use scalar::*;
pub use vec::*;

pub use num_traits::{Float, One, Signed, Zero};
