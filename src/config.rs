use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
  pub(crate) api_url: String,
}

impl Config {
  const API_URL_VAR: &str = "HNTOP_API_URL";

  const DEFAULT_API_URL: &str = "https://hacker-news.firebaseio.com/v0";

  /// Reads `HNTOP_API_URL`, after loading a `.env` file if one exists.
  pub(crate) fn from_env() -> Self {
    if let Err(error) = dotenvy::dotenv() {
      debug!(%error, "no .env file loaded");
    }

    let config = Self::new(env::var(Self::API_URL_VAR).ok());

    debug!(api_url = %config.api_url, "configured");

    config
  }

  fn new(api_url: Option<String>) -> Self {
    let api_url = api_url
      .map(|url| url.trim().trim_end_matches('/').to_string())
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string());

    Self { api_url }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_hacker_news() {
    assert_eq!(Config::new(None).api_url, Config::DEFAULT_API_URL);
  }

  #[test]
  fn blank_value_falls_back_to_default() {
    assert_eq!(
      Config::new(Some("  ".to_string())).api_url,
      Config::DEFAULT_API_URL
    );
  }

  #[test]
  fn trailing_slashes_are_trimmed() {
    assert_eq!(
      Config::new(Some("http://localhost:8080/v0//".to_string())).api_url,
      "http://localhost:8080/v0"
    );
  }
}
