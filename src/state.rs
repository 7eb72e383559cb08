use super::*;

pub(crate) struct State {
  cache: QueryCache,
  generation: u64,
  list_height: usize,
  notice: Option<Notice>,
  offset: usize,
  selected: usize,
  view: ViewState,
}

impl State {
  pub(crate) fn dispatch(&mut self, action: Action) -> Dispatch {
    let mut dispatch = Dispatch::default();

    match action {
      Action::None => {}
      Action::OpenSelected => {
        if let Some(record) = self.selected_record() {
          dispatch.effects.push(Effect::OpenUrl { url: record.link() });
        }
      }
      Action::PageDown => {
        self.select(self.selected.saturating_add(self.page()));
      }
      Action::PageUp => {
        self.select(self.selected.saturating_sub(self.page()));
      }
      Action::Quit => dispatch.should_exit = true,
      Action::Reload => dispatch.effects = self.reload(),
      Action::SelectFirst => self.select(0),
      Action::SelectLast => self.select(usize::MAX),
      Action::SelectNext => self.select(self.selected.saturating_add(1)),
      Action::SelectPrevious => self.select(self.selected.saturating_sub(1)),
    }

    dispatch
  }

  /// Records one fetch result and returns the fetches it unlocks.
  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    if event.generation() != self.generation {
      debug!(
        generation = event.generation(),
        current = self.generation,
        "dropping stale fetch result"
      );

      return Vec::new();
    }

    let effects = match event {
      Event::Story { id, result, .. } => {
        if let Err(error) = &result {
          warn!(id, %error, status = ?error.status, "story fetch failed");
        }

        self.cache.finish_story(id, result);

        self.request_authors()
      }
      Event::TopStories { result, .. } => self.settle_top_stories(result),
      Event::User { id, result, .. } => {
        if let Err(error) = &result {
          warn!(%id, %error, status = ?error.status, "user fetch failed");
        }

        self.cache.finish_user(&id, result);

        Vec::new()
      }
    };

    self.refresh();

    effects
  }

  pub(crate) fn new() -> Self {
    let cache = QueryCache::default();

    let view = cache.view_state();

    Self {
      cache,
      generation: 0,
      list_height: 0,
      notice: None,
      offset: 0,
      selected: 0,
      view,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset.min(self.selected)
  }

  fn page(&self) -> usize {
    (self.list_height / ROW_HEIGHT).max(1)
  }

  fn refresh(&mut self) {
    let was_loading = self.view.is_loading;

    self.view = self.cache.view_state();

    self.select(self.selected);

    if was_loading && !self.view.is_loading {
      match &self.view.error {
        Some(error) => {
          warn!(%error, status = ?error.status, "top stories failed to load");
        }
        None => info!(stories = self.view.stories.len(), "top stories loaded"),
      }
    }
  }

  /// Throws away the current load and starts a fresh one.
  pub(crate) fn reload(&mut self) -> Vec<Effect> {
    self.generation += 1;
    self.cache = QueryCache::default();
    self.offset = 0;
    self.selected = 0;

    self.refresh();

    info!(generation = self.generation, "loading top stories");

    vec![Effect::FetchTopStories {
      generation: self.generation,
    }]
  }

  fn request_authors(&mut self) -> Vec<Effect> {
    let authors = distinct_authors(&self.cache.story_queries());

    authors
      .into_iter()
      .filter(|author| self.cache.begin_user(author))
      .map(|id| Effect::FetchUser {
        generation: self.generation,
        id,
      })
      .collect()
  }

  fn select(&mut self, index: usize) {
    self.selected = index.min(self.view.stories.len().saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    (!self.view.stories.is_empty()).then_some(self.selected)
  }

  fn selected_record(&self) -> Option<&ViewRecord> {
    self
      .selected_index()
      .and_then(|index| self.view.stories.get(index))
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_notice(&mut self, text: String) {
    self.notice = Some(Notice::new(text));
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset;
  }

  fn settle_top_stories(
    &mut self,
    result: Result<Vec<u64>, ApiError>,
  ) -> Vec<Effect> {
    let ids = result.as_ref().cloned().unwrap_or_default();

    self.cache.finish_top_stories(result);

    ids
      .into_iter()
      .filter(|id| self.cache.begin_story(*id))
      .map(|id| Effect::FetchStory {
        generation: self.generation,
        id,
      })
      .collect()
  }

  pub(crate) fn status(&self) -> &str {
    match &self.notice {
      Some(notice) => notice.text(),
      None => LIST_STATUS,
    }
  }

  pub(crate) fn update_notice(&mut self) {
    if self.notice.as_ref().is_some_and(Notice::is_expired) {
      self.notice = None;
    }
  }

  pub(crate) fn view(&self) -> &ViewState {
    &self.view
  }
}
