use super::*;

/// A status line message that reverts after a few seconds.
#[derive(Clone, Debug)]
pub(crate) struct Notice {
  expires_at: Instant,
  text: String,
}

impl Notice {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(text: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::LIFETIME,
      text,
    }
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}
