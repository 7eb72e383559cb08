use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchStory { generation: u64, id: u64 },
  FetchTopStories { generation: u64 },
  FetchUser { generation: u64, id: String },
  OpenUrl { url: String },
}

impl Effect {
  /// The event reporting `error` for this fetch, if it is one.
  pub(crate) fn failure(&self, error: ApiError) -> Option<Event> {
    match self {
      Self::FetchStory { generation, id } => Some(Event::Story {
        generation: *generation,
        id: *id,
        result: Err(error),
      }),
      Self::FetchTopStories { generation } => Some(Event::TopStories {
        generation: *generation,
        result: Err(error),
      }),
      Self::FetchUser { generation, id } => Some(Event::User {
        generation: *generation,
        id: id.clone(),
        result: Err(error),
      }),
      Self::OpenUrl { .. } => None,
    }
  }
}
