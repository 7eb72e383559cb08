use super::*;

/// State of one keyed fetch.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Query<T> {
  Failed(ApiError),
  Pending,
  Ready(T),
}

impl<T> From<Result<T, ApiError>> for Query<T> {
  fn from(result: Result<T, ApiError>) -> Self {
    match result {
      Ok(data) => Self::Ready(data),
      Err(error) => Self::Failed(error),
    }
  }
}

impl<T> Query<T> {
  pub(crate) fn data(&self) -> Option<&T> {
    match self {
      Self::Ready(data) => Some(data),
      Self::Failed(_) | Self::Pending => None,
    }
  }

  pub(crate) fn error(&self) -> Option<&ApiError> {
    match self {
      Self::Failed(error) => Some(error),
      Self::Pending | Self::Ready(_) => None,
    }
  }

  pub(crate) fn is_pending(&self) -> bool {
    matches!(self, Self::Pending)
  }
}
