use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct User {
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) karma: Option<i64>,
}

impl User {
  /// Placeholder for an author the API has no record of.
  pub(crate) fn unknown(id: &str) -> Self {
    Self {
      id: id.to_string(),
      karma: None,
    }
  }
}
