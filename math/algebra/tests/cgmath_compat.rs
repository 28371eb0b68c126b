//! cross check the vector math against cgmath

use cgmath::{InnerSpace, MetricSpace};
use linea_algebra::*;

fn to_cg(v: Vec3<f64>) -> cgmath::Vector3<f64> {
  cgmath::Vector3::new(v.x, v.y, v.z)
}

fn samples() -> Vec<Vec3<f64>> {
  vec![
    vec3(1., 2., 3.),
    vec3(-4.5, 0.25, 8.),
    vec3(0., 0., 1.),
    vec3(1e3, -2e-3, 7.),
    vec3(-0.1, -0.2, -0.3),
  ]
}

#[test]
fn dot_and_length() {
  for a in samples() {
    let length2 = to_cg(a).magnitude2();
    assert!((a.length2() - length2).abs() <= 1e-12 * length2.max(1.));
    assert!((a.length() - to_cg(a).magnitude()).abs() <= 1e-12);
    for b in samples() {
      assert!((a.dot(b) - to_cg(a).dot(to_cg(b))).abs() <= 1e-9);
    }
  }
}

#[test]
fn normalize() {
  for a in samples() {
    let expect = to_cg(a).normalize();
    let n = a.normalize();
    assert!((n.x - expect.x).abs() <= 1e-12);
    assert!((n.y - expect.y).abs() <= 1e-12);
    assert!((n.z - expect.z).abs() <= 1e-12);
  }
}

#[test]
fn distance_and_cross() {
  for a in samples() {
    for b in samples() {
      let expect = cgmath::Point3::new(a.x, a.y, a.z).distance(cgmath::Point3::new(b.x, b.y, b.z));
      assert!((a.distance(b) - expect).abs() <= 1e-9);

      let c = a.cross(b);
      let expect = to_cg(a).cross(to_cg(b));
      assert_eq!(to_cg(c), expect);
    }
  }
}
