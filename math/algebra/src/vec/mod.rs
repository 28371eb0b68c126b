mod dimension;
mod vec2;
mod vec3;
mod vec4;

pub use dimension::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

use std::ops::*;

use crate::*;

macro_rules! replace_ty {
  ($_field:ident, $ty:ty) => {
    $ty
  };
}

macro_rules! impl_vector {
  ($VectorN:ident { $($field:ident : $index:literal),+ }, $n:expr, $constructor:ident) => {
    impl<T> $VectorN<T> {
      /// Construct a new vector, using the provided values.
      #[inline]
      pub const fn new($($field: T),+) -> Self {
        $VectorN { $($field),+ }
      }
    }

    /// The short constructor.
    #[inline]
    pub const fn $constructor<T>($($field: T),+) -> $VectorN<T> {
      $VectorN::new($($field),+)
    }

    impl<T: Arithmetic> Vector<T> for $VectorN<T> {
      type Components = [T; $n];

      #[inline]
      fn create<F>(f: F) -> Self
      where
        F: Fn() -> T,
      {
        Self { $($field: f()),+ }
      }

      #[inline]
      fn map<F>(self, f: F) -> Self
      where
        F: Fn(T) -> T,
      {
        Self { $($field: f(self.$field)),+ }
      }

      #[inline]
      fn zip<F>(self, v2: Self, f: F) -> Self
      where
        F: Fn(T, T) -> T,
      {
        Self { $($field: f(self.$field, v2.$field)),+ }
      }

      #[inline]
      fn components(&self) -> [T; $n] {
        [$(self.$field),+]
      }

      fn set_components(&mut self, values: &[T]) {
        assert_eq!(
          values.len(),
          $n,
          "{} expects exactly {} components",
          stringify!($VectorN),
          $n
        );
        $(self.$field = values[$index];)+
      }
    }

    impl<T: RealArithmetic> RealVector<T> for $VectorN<T> {}

    impl<T> Index<usize> for $VectorN<T> {
      type Output = T;

      #[inline]
      fn index(&self, index: usize) -> &T {
        match index {
          $($index => &self.$field,)+
          _ => panic!("index {} out of range for {}", index, stringify!($VectorN)),
        }
      }
    }

    impl<T> IndexMut<usize> for $VectorN<T> {
      #[inline]
      fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
          $($index => &mut self.$field,)+
          _ => panic!("index {} out of range for {}", index, stringify!($VectorN)),
        }
      }
    }

    impl<T> From<[T; $n]> for $VectorN<T> {
      #[inline]
      fn from(v: [T; $n]) -> Self {
        let [$($field),+] = v;
        Self { $($field),+ }
      }
    }

    impl<T> From<$VectorN<T>> for [T; $n] {
      #[inline]
      fn from(v: $VectorN<T>) -> Self {
        [$(v.$field),+]
      }
    }

    impl<T> From<($(replace_ty!($field, T)),+,)> for $VectorN<T> {
      #[inline]
      fn from(v: ($(replace_ty!($field, T)),+,)) -> Self {
        let ($($field),+,) = v;
        Self { $($field),+ }
      }
    }

    impl<T: Copy> TryFrom<&[T]> for $VectorN<T> {
      type Error = AlgebraError;

      fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        if values.len() != $n {
          return Err(AlgebraError::ComponentCount {
            expected: $n,
            actual: values.len(),
          });
        }
        Ok(Self { $($field: values[$index]),+ })
      }
    }

    impl<T: SignedArithmetic> Neg for $VectorN<T> {
      type Output = Self;

      #[inline]
      fn neg(self) -> Self {
        Self { $($field: -self.$field),+ }
      }
    }

    impl_componentwise_op!($VectorN { $($field),+ }, Add, add, +);
    impl_componentwise_op!($VectorN { $($field),+ }, Sub, sub, -);
    impl_componentwise_op!($VectorN { $($field),+ }, Mul, mul, *);
    impl_componentwise_op!($VectorN { $($field),+ }, Div, div, /);

    impl_scalar_lhs_ops!(
      $VectorN { $($field),+ },
      [u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64]
    );
  };
}

/// vector op vector, vector op scalar, and the assignment version of both
macro_rules! impl_componentwise_op {
  ($VectorN:ident { $($field:ident),+ }, $Op:ident, $op:ident, $tok:tt) => {
    paste::paste! {
      impl<T: Arithmetic> $Op for $VectorN<T> {
        type Output = Self;

        #[inline]
        fn $op(self, rhs: Self) -> Self {
          Self { $($field: self.$field $tok rhs.$field),+ }
        }
      }

      impl<T: Arithmetic> $Op<T> for $VectorN<T> {
        type Output = Self;

        #[inline]
        fn $op(self, rhs: T) -> Self {
          Self { $($field: self.$field $tok rhs),+ }
        }
      }

      impl<T: Arithmetic> [<$Op Assign>] for $VectorN<T> {
        #[inline]
        fn [<$op _assign>](&mut self, rhs: Self) {
          $(self.$field = self.$field $tok rhs.$field;)+
        }
      }

      impl<T: Arithmetic> [<$Op Assign>]<T> for $VectorN<T> {
        #[inline]
        fn [<$op _assign>](&mut self, rhs: T) {
          $(self.$field = self.$field $tok rhs;)+
        }
      }
    }
  };
}

/// scalar op vector, the orphan rule only allows this on concrete scalar types
macro_rules! impl_scalar_lhs_ops {
  (@scalar $S:ty, $VectorN:ident { $($field:ident),+ }) => {
    impl Add<$VectorN<$S>> for $S {
      type Output = $VectorN<$S>;
      #[inline]
      fn add(self, rhs: $VectorN<$S>) -> $VectorN<$S> {
        $VectorN { $($field: self + rhs.$field),+ }
      }
    }
    impl Sub<$VectorN<$S>> for $S {
      type Output = $VectorN<$S>;
      #[inline]
      fn sub(self, rhs: $VectorN<$S>) -> $VectorN<$S> {
        $VectorN { $($field: self - rhs.$field),+ }
      }
    }
    impl Mul<$VectorN<$S>> for $S {
      type Output = $VectorN<$S>;
      #[inline]
      fn mul(self, rhs: $VectorN<$S>) -> $VectorN<$S> {
        $VectorN { $($field: self * rhs.$field),+ }
      }
    }
    impl Div<$VectorN<$S>> for $S {
      type Output = $VectorN<$S>;
      #[inline]
      fn div(self, rhs: $VectorN<$S>) -> $VectorN<$S> {
        $VectorN { $($field: self / rhs.$field),+ }
      }
    }
  };
  ($VectorN:ident $fields:tt, [$($S:ty),+]) => {
    $(impl_scalar_lhs_ops!(@scalar $S, $VectorN $fields);)+
  };
}

impl_vector!(Vec2 { x: 0, y: 1 }, 2, vec2);
impl_vector!(Vec3 { x: 0, y: 1, z: 2 }, 3, vec3);
impl_vector!(Vec4 { x: 0, y: 1, z: 2, w: 3 }, 4, vec4);
