use super::*;

/// Keyed fetch results for one load of the feed.
///
/// A key is only ever begun once, so at most one logical fetch per story id
/// or user id is in flight. Results for keys that were never begun are
/// dropped.
#[derive(Debug)]
pub(crate) struct QueryCache {
  stories: HashMap<u64, Query<Story>>,
  top_stories: Query<Vec<u64>>,
  user_order: Vec<String>,
  users: HashMap<String, Query<User>>,
}

impl Default for QueryCache {
  fn default() -> Self {
    Self {
      stories: HashMap::new(),
      top_stories: Query::Pending,
      user_order: Vec::new(),
      users: HashMap::new(),
    }
  }
}

impl QueryCache {
  pub(crate) fn begin_story(&mut self, id: u64) -> bool {
    if self.stories.contains_key(&id) {
      return false;
    }

    self.stories.insert(id, Query::Pending);

    true
  }

  pub(crate) fn begin_user(&mut self, id: &str) -> bool {
    if self.users.contains_key(id) {
      return false;
    }

    self.users.insert(id.to_string(), Query::Pending);
    self.user_order.push(id.to_string());

    true
  }

  pub(crate) fn finish_story(
    &mut self,
    id: u64,
    result: Result<Story, ApiError>,
  ) {
    if let Some(slot) = self.stories.get_mut(&id) {
      *slot = result.into();
    }
  }

  pub(crate) fn finish_top_stories(
    &mut self,
    result: Result<Vec<u64>, ApiError>,
  ) {
    self.top_stories = result.into();
  }

  pub(crate) fn finish_user(
    &mut self,
    id: &str,
    result: Result<User, ApiError>,
  ) {
    if let Some(slot) = self.users.get_mut(id) {
      *slot = result.into();
    }
  }

  /// Story queries in feed order, one per distinct id.
  pub(crate) fn story_queries(&self) -> Vec<&Query<Story>> {
    let mut seen = HashSet::new();

    self
      .top_stories
      .data()
      .into_iter()
      .flatten()
      .filter(|id| seen.insert(**id))
      .filter_map(|id| self.stories.get(id))
      .collect()
  }

  /// User queries in the order they were first requested.
  pub(crate) fn user_queries(&self) -> Vec<&Query<User>> {
    self
      .user_order
      .iter()
      .filter_map(|id| self.users.get(id))
      .collect()
  }

  pub(crate) fn view_state(&self) -> ViewState {
    derive_view_state(
      &self.top_stories,
      &self.story_queries(),
      &self.user_queries(),
    )
  }
}
