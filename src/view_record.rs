use super::*;

/// A story paired with whatever is known about its author.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ViewRecord {
  pub(crate) story: Story,
  pub(crate) user: Option<User>,
}

impl ViewRecord {
  const DISCUSSION_URL: &str = "https://news.ycombinator.com/item?id=";

  /// Host of the story url. Stories without a url, such as Ask HN posts,
  /// have no host instead of an `Invalid URL` label.
  pub(crate) fn host(&self) -> Option<String> {
    self.story.url.as_deref().map(host_label)
  }

  pub(crate) fn karma_label(&self) -> String {
    self
      .user
      .as_ref()
      .and_then(|user| user.karma)
      .map_or_else(|| "Unknown".to_string(), |karma| karma.to_string())
  }

  pub(crate) fn link(&self) -> String {
    self
      .story
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| format!("{}{}", Self::DISCUSSION_URL, self.story.id))
  }

  pub(crate) fn meta(&self, now: DateTime<Utc>) -> String {
    let mut meta = format!(
      "{} points by {} (Karma: {})",
      self.story.score,
      self.story.by.as_deref().unwrap_or("unknown"),
      self.karma_label(),
    );

    if let Some(posted) = DateTime::from_timestamp(self.story.time, 0) {
      meta.push(' ');
      meta.push_str(&relative_age(posted, now));
    }

    meta
  }

  pub(crate) fn title_line(&self) -> String {
    match self.host() {
      Some(host) => format!("{} ({host})", self.story.title),
      None => self.story.title.clone(),
    }
  }
}
