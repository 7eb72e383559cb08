use super::*;

#[derive(Debug)]
pub(crate) enum Event {
  Story {
    generation: u64,
    id: u64,
    result: Result<Story, ApiError>,
  },
  TopStories {
    generation: u64,
    result: Result<Vec<u64>, ApiError>,
  },
  User {
    generation: u64,
    id: String,
    result: Result<User, ApiError>,
  },
}

impl Event {
  pub(crate) fn generation(&self) -> u64 {
    match self {
      Self::Story { generation, .. }
      | Self::TopStories { generation, .. }
      | Self::User { generation, .. } => *generation,
    }
  }
}
