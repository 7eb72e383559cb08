use super::*;

/// Drives a load to completion without a terminal.
pub(crate) struct Loader {
  client: Client,
}

impl Loader {
  /// Runs `state` through a fresh load, resolving fetches as they finish.
  pub(crate) async fn load(&self, state: &mut State) {
    let mut in_flight = FuturesUnordered::new();

    for effect in state.reload() {
      in_flight.push(self.client.perform(effect));
    }

    while let Some(event) = in_flight.next().await {
      let Some(event) = event else {
        continue;
      };

      for effect in state.handle_event(event) {
        in_flight.push(self.client.perform(effect));
      }
    }
  }

  pub(crate) fn new(client: Client) -> Self {
    Self { client }
  }

  /// Loads the feed and writes it to `out` as plain text.
  pub(crate) async fn print(&self, out: &mut impl Write) -> Result {
    let mut state = State::new();

    self.load(&mut state).await;

    let view = state.view();

    if let Some(error) = &view.error {
      return Err(anyhow::Error::new(error.clone()).context(format!(
        "could not load top stories{}",
        error.status_suffix("status")
      )));
    }

    write!(out, "{}", Self::render(&view.stories, Utc::now()))?;

    Ok(())
  }

  pub(crate) fn render(stories: &[ViewRecord], now: DateTime<Utc>) -> String {
    if stories.is_empty() {
      return format!("{EMPTY_LIST}\n");
    }

    stories
      .iter()
      .enumerate()
      .map(|(i, record)| {
        format!(
          "{:>2}. {}\n    {}\n",
          i + 1,
          record.title_line(),
          record.meta(now)
        )
      })
      .collect()
  }
}
