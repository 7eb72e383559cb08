use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn centered_line(area: Rect) -> Rect {
    Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
      ])
      .split(area)[1]
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let header = Paragraph::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        HEADER_TITLE.to_uppercase(),
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
    ]));

    frame.render_widget(header, layout[0]);

    let view = self.state.view();

    if view.is_loading {
      let loading = Paragraph::new(LOADING_STATUS)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

      frame.render_widget(loading, Self::centered_line(layout[1]));
    } else if let Some(error) = &view.error {
      let message = Paragraph::new(format!(
        "Error: {}{}",
        error.message,
        error.status_suffix("Status")
      ))
      .block(Block::default().borders(Borders::ALL))
      .style(Style::default().fg(Color::White).bg(Color::Red))
      .wrap(Wrap { trim: true });

      frame.render_widget(message, layout[1]);
    } else {
      let now = Utc::now();

      let items: Vec<ListItem> = if view.stories.is_empty() {
        vec![ListItem::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::raw(EMPTY_LIST),
        ]))]
      } else {
        view
          .stories
          .iter()
          .map(|record| Self::story_item(record, now))
          .collect()
      };

      let mut list_state = ListState::default()
        .with_selected(self.state.selected_index())
        .with_offset(self.state.offset());

      let list = List::new(items)
        .highlight_style(
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("");

      frame.render_stateful_widget(list, layout[1], &mut list_state);

      self.state.set_offset(list_state.offset());
    }

    let status = Paragraph::new(self.state.status().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_notice(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open browser");

          self
            .state
            .set_notice(format!("Could not open link: {error}"));
        }
      },
      fetch => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let event = AssertUnwindSafe(client.perform(fetch.clone()))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
              error!(?fetch, "fetch task panicked");
              fetch.failure(ApiError::unknown())
            });

          if let Some(event) = event {
            let _ = sender.send(event);
          }
        });
      }
    }
  }

  pub(crate) fn new(client: Client) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_notice();

    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    for effect in self.state.reload() {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let dispatch = self.state.dispatch(Action::from(key));

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }

  fn story_item(record: &ViewRecord, now: DateTime<Utc>) -> ListItem<'static> {
    let mut title = vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        record.story.title.clone(),
        Style::default().fg(Color::White),
      ),
    ];

    if let Some(host) = record.host() {
      title.push(Span::styled(
        format!(" ({host})"),
        Style::default().fg(Color::DarkGray),
      ));
    }

    ListItem::new(vec![
      Line::from(title),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(record.meta(now), Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ])
  }
}
