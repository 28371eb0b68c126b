use std::fmt;

use crate::*;

/// Sphere with a non negative radius, the invariant is checked at creation.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Sphere<T> {
  center: Vec3<T>,
  radius: T,
}

impl<T: Arithmetic> Sphere<T> {
  /// # Panics
  ///
  /// When radius is negative or unordered (NaN).
  pub fn new(center: Vec3<T>, radius: T) -> Self {
    assert!(
      radius >= T::zero(),
      "sphere radius must be a non negative number, got {radius}"
    );
    Self { center, radius }
  }

  pub fn try_new(center: Vec3<T>, radius: T) -> Result<Self, GeometryError> {
    if radius >= T::zero() {
      Ok(Self { center, radius })
    } else {
      Err(GeometryError::NegativeRadius)
    }
  }

  #[inline]
  pub fn null() -> Self {
    Self {
      center: Vec3::zero(),
      radius: T::zero(),
    }
  }

  #[inline]
  pub fn center(&self) -> Vec3<T> {
    self.center
  }

  #[inline]
  pub fn radius(&self) -> T {
    self.radius
  }

  /// Note a real zero radius sphere at the origin is also null.
  #[inline]
  pub fn is_null(&self) -> bool {
    self.center.is_zero() && self.radius.is_zero()
  }

  /// the axis aligned box that tightly wraps the sphere
  #[inline]
  pub fn bounds(&self) -> Bounds3<T> {
    Bounds3::new(self.center, Vec3::splat(self.radius))
  }
}

impl<T: RealArithmetic> Sphere<T> {
  /// A cheap sphere contains both, not the minimal one.
  ///
  /// The result is centered at the midpoint of the two centers, and the radius is the
  /// half center distance plus the larger radius. When one sphere is inside the other,
  /// or the radii differ a lot, the result is larger than necessary.
  #[must_use]
  pub fn union(&self, other: Self) -> Self {
    let midpoint = (self.center + other.center) / T::two();
    let radius = midpoint.distance(self.center) + self.radius.partial_max(other.radius);
    Self::new(midpoint, radius)
  }

  /// the sphere passes all the corners of the box
  pub fn from_bounds(bounds: &Bounds3<T>) -> Self {
    Self::new(bounds.center(), bounds.extents().length())
  }

  // we cant impl from iter trait because it need iter twice
  pub fn from_points<I>(items: I) -> Self
  where
    I: IntoIterator<Item = Vec3<T>> + Clone,
  {
    let bounds: Bounds3<T> = items.clone().into_iter().collect();
    Self::from_points_and_center(items, bounds.center())
  }

  pub fn from_points_and_center<I>(items: I, center: Vec3<T>) -> Self
  where
    I: IntoIterator<Item = Vec3<T>>,
  {
    let max_distance2 = items
      .into_iter()
      .fold(T::zero(), |max, point| max.partial_max(point.distance2(center)));
    Self::new(center, max_distance2.sqrt())
  }
}

impl<T: SignedArithmetic> ContainAble<T, Vec3<T>> for Sphere<T> {
  /// inclusive, compared in squared distance
  #[inline]
  fn contains(&self, point: &Vec3<T>) -> bool {
    point.distance2(self.center) <= self.radius * self.radius
  }
}

impl<T: SignedArithmetic> IntersectAble<Sphere<T>, bool> for Sphere<T> {
  #[inline]
  fn intersect(&self, other: &Sphere<T>) -> bool {
    let radius_sum = self.radius + other.radius;
    self.center.distance2(other.center) <= radius_sum * radius_sum
  }
}

impl<T: fmt::Display> fmt::Display for Sphere<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{{{}, {}}}", self.center, self.radius)
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  #[test]
  fn create() {
    let s = Sphere::new(vec3(1., 2., 3.), 4.);
    assert_eq!(s.center(), vec3(1., 2., 3.));
    assert_eq!(s.radius(), 4.);
    assert_eq!(Sphere::new(Vec3::zero(), 0_u32), Sphere::null());
  }

  #[test]
  #[should_panic(expected = "sphere radius must be a non negative number")]
  fn negative_radius() {
    Sphere::new(vec3(0., 0., 0.), -1.);
  }

  #[test]
  #[should_panic(expected = "sphere radius must be a non negative number")]
  fn nan_radius() {
    Sphere::new(vec3(0.0_f32, 0., 0.), f32::NAN);
  }

  #[test]
  fn try_create() {
    assert_eq!(
      Sphere::try_new(Vec3::zero(), -1),
      Err(GeometryError::NegativeRadius)
    );
    assert_eq!(Sphere::try_new(Vec3::zero(), 2), Ok(Sphere::new(Vec3::zero(), 2)));
  }

  #[test]
  fn null() {
    assert!(Sphere::<f64>::default().is_null());
    assert!(Sphere::<i8>::null().is_null());
    assert!(!Sphere::new(Vec3::zero(), 1.).is_null());
    assert!(!Sphere::new(vec3(0., 1., 0.), 0.).is_null());
  }

  #[test]
  fn bounds() {
    let s = Sphere::new(vec3(0, 0, 0), 2);
    assert_eq!(s.bounds(), Bounds3::new(vec3(0, 0, 0), vec3(2, 2, 2)));
    assert_eq!(s.to_bounding(), s.bounds());

    let s = Sphere::new(vec3(1., -1., 0.5), 0.5);
    let b = s.bounds();
    assert_eq!(b.center(), s.center());
    assert_eq!(b.extents(), Vec3::splat(0.5));
  }

  #[test]
  fn union_follows_midpoint_formula() {
    let a = Sphere::new(vec3(-2., 0., 0.), 1.);
    let b = Sphere::new(vec3(2., 0., 0.), 3.);
    let u = a.union(b);
    assert_eq!(u.center(), Vec3::zero());
    // half center distance + the larger radius
    assert_eq!(u.radius(), 5.);
  }

  #[test]
  fn union_is_not_minimal() {
    // b fully contains a, the minimal enclosing sphere is b itself (radius 10)
    let a = Sphere::new(vec3(4., 0., 0.), 1.);
    let b = Sphere::new(Vec3::zero(), 10.);
    let u = a.union(b);
    assert_eq!(u.center(), vec3(2., 0., 0.));
    assert_eq!(u.radius(), 12.);
    assert!(u.radius() > b.radius());
  }

  #[test]
  fn union_of_null_spheres() {
    assert!(Sphere::<f32>::null().union(Sphere::null()).is_null());
  }

  #[test]
  fn from_bounds() {
    let b = Bounds3::new(vec3(1., 1., 1.), vec3(3., 4., 0.));
    let s = Sphere::from_bounds(&b);
    assert_eq!(s.center(), vec3(1., 1., 1.));
    assert_eq!(s.radius(), 5.);
  }

  #[test]
  fn from_points() {
    let points = vec![
      vec3(-4., 0., 0.),
      vec3(4., 0., 0.),
      vec3(0., 3., 0.),
      vec3(0., -3., 0.),
    ];
    let s = Sphere::from_points(points.iter().copied());
    assert_eq!(s, Sphere::new(Vec3::zero(), 4.));
    assert!(points.iter().all(|p| s.contains(p)));
  }

  #[test]
  fn contains_and_intersect() {
    let s = Sphere::new(vec3(0, 0, 0), 5);
    assert!(s.contains(&vec3(3, 4, 0)));
    assert!(!s.contains(&vec3(3, 4, 1)));

    assert!(s.intersect(&Sphere::new(vec3(10, 0, 0), 5)));
    assert!(!s.intersect(&Sphere::new(vec3(10, 0, 1), 5)));

    let near = Bounds3::from_min_max(vec3(3, 4, 0), vec3(6, 6, 6));
    let far = Bounds3::from_min_max(vec3(4, 4, 0), vec3(6, 6, 6));
    assert!(s.intersect(&near));
    assert!(near.intersect(&s));
    assert!(!s.intersect(&far));
    assert!(!far.intersect(&s));
  }

  #[test]
  fn display() {
    let s = Sphere::new(vec3(1., 2., 3.), 0.5);
    assert_eq!(s.to_string(), "{{1, 2, 3}, 0.5}");
  }
}
