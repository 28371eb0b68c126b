#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
  #[error("Vector construction failed: expect {expected} components, got {actual}")]
  ComponentCount { expected: usize, actual: usize },
}
