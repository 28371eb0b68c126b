use crate::*;

intersect_reverse!(Sphere<T>, bool, Bounds3<T>, SignedArithmetic);
impl<T: SignedArithmetic> IntersectAble<Sphere<T>, bool> for Bounds3<T> {
  /// compare against the box point closest to the sphere center
  #[inline]
  fn intersect(&self, sphere: &Sphere<T>) -> bool {
    let closest = sphere.center().clamp(self.min, self.max);
    let radius = sphere.radius();
    closest.distance2(sphere.center()) <= radius * radius
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  #[test]
  fn sphere_box_both_directions() {
    let b = Bounds3::from_min_max(vec3(0, 0, 0), vec3(2, 2, 2));
    let corner = Sphere::new(vec3(3, 3, 3), 1);
    let face = Sphere::new(vec3(4, 1, 1), 2);
    let away = Sphere::new(vec3(5, 1, 1), 2);
    assert!(!b.intersect(&corner));
    assert!(!corner.intersect(&b));
    assert!(b.intersect(&face));
    assert!(face.intersect(&b));
    assert!(!away.intersect(&b));

    let inside = Sphere::new(vec3(1., 1., 1.), 0.1);
    assert!(inside.intersect(&Bounds3::new(vec3(1., 1., 1.), vec3(1., 1., 1.))));
  }
}
