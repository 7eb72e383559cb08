use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Story {
  #[serde(default)]
  pub(crate) by: Option<String>,
  pub(crate) id: u64,
  #[serde(default)]
  pub(crate) score: i64,
  #[serde(default)]
  pub(crate) time: i64,
  #[serde(default)]
  pub(crate) title: String,
  #[serde(default)]
  pub(crate) r#type: String,
  #[serde(default)]
  pub(crate) url: Option<String>,
}

impl Story {
  pub(crate) const KIND: &str = "story";

  /// Author id, if the item names a non-empty one.
  pub(crate) fn author(&self) -> Option<&str> {
    self.by.as_deref().filter(|by| !by.is_empty())
  }

  pub(crate) fn is_story(&self) -> bool {
    self.r#type == Self::KIND
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_item_payload() {
    let story = serde_json::from_str::<Story>(
      r#"{
        "by": "dhouston",
        "descendants": 71,
        "id": 8863,
        "kids": [8952, 9224],
        "score": 111,
        "time": 1175714200,
        "title": "My YC app: Dropbox - Throw away your USB drive",
        "type": "story",
        "url": "http://www.getdropbox.com/u/2/screencast.html"
      }"#,
    )
    .unwrap();

    assert_eq!(story.author(), Some("dhouston"));
    assert_eq!(story.id, 8863);
    assert_eq!(story.score, 111);
    assert_eq!(story.time, 1_175_714_200);
    assert!(story.is_story());
    assert_eq!(
      story.url.as_deref(),
      Some("http://www.getdropbox.com/u/2/screencast.html")
    );
  }

  #[test]
  fn missing_fields_fall_back_to_defaults() {
    let story = serde_json::from_str::<Story>(
      r#"{"id": 1, "type": "job", "by": null}"#,
    )
    .unwrap();

    assert_eq!(story.author(), None);
    assert_eq!(story.score, 0);
    assert_eq!(story.title, "");
    assert_eq!(story.url, None);
    assert!(!story.is_story());
  }

  #[test]
  fn empty_author_is_treated_as_absent() {
    let story =
      serde_json::from_str::<Story>(r#"{"id": 2, "by": ""}"#).unwrap();

    assert_eq!(story.author(), None);
  }
}
