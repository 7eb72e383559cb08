use super::*;

/// The single error shape every failed fetch is normalized into.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub(crate) struct ApiError {
  pub(crate) message: String,
  pub(crate) status: Option<u16>,
}

impl From<reqwest::Error> for ApiError {
  fn from(error: reqwest::Error) -> Self {
    Self {
      status: error.status().map(|status| status.as_u16()),
      message: error.to_string(),
    }
  }
}

impl ApiError {
  pub(crate) fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      status: None,
    }
  }

  /// ` ({label}: 500)`, or nothing when no HTTP status came back.
  pub(crate) fn status_suffix(&self, label: &str) -> String {
    self
      .status
      .map(|status| format!(" ({label}: {status})"))
      .unwrap_or_default()
  }

  pub(crate) fn unexpected(error: impl Display) -> Self {
    Self::new(error.to_string())
  }

  pub(crate) fn unknown() -> Self {
    Self::new("An unknown error occurred")
  }
}
