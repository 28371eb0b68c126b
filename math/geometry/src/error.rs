#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
  #[error("Sphere creation failed: radius must be a non negative number")]
  NegativeRadius,
}
