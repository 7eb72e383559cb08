use {
  action::Action,
  anyhow::Context,
  api_error::ApiError,
  app::App,
  chrono::{DateTime, Utc},
  client::Client,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dispatch::Dispatch,
  effect::Effect,
  event::Event,
  futures::{
    FutureExt,
    stream::{FuturesUnordered, StreamExt},
  },
  loader::Loader,
  notice::Notice,
  query::Query,
  query_cache::QueryCache,
  rand::Rng,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
  },
  reqwest::Url,
  sample::sample,
  serde::{Deserialize, de::DeserializeOwned},
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet},
    env,
    fmt::Display,
    io::{self, IsTerminal, Stdout, Write},
    panic::AssertUnwindSafe,
    process,
    time::{Duration, Instant},
  },
  story::Story,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  user::User,
  utils::{host_label, relative_age, truncate},
  view_record::ViewRecord,
  view_state::{ViewState, derive_view_state, distinct_authors},
};

mod action;
mod api_error;
mod app;
mod client;
mod config;
mod dispatch;
mod effect;
mod event;
mod loader;
mod notice;
mod query;
mod query_cache;
mod sample;
mod state;
mod story;
#[cfg(test)]
mod test_server;
mod user;
mod utils;
mod view_record;
mod view_state;

const HEADER_TITLE: &str = "Top stories";

const LIST_STATUS: &str =
  "↑/k up • ↓/j down • enter/o open • r new sample • q/esc quit";

const LOADING_STATUS: &str = "Loading...";

const EMPTY_LIST: &str = "No stories to show.";

const BASE_INDENT: &str = " ";

/// Lines each story occupies in the list: title, meta, spacer.
const ROW_HEIGHT: usize = 3;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn initialize_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::from_env();

  let client = Client::new(&config)?;

  if !io::stdout().is_terminal() {
    return Loader::new(client).print(&mut io::stdout().lock()).await;
  }

  let mut terminal =
    initialize_terminal().context("could not set up the terminal")?;

  let result = App::new(client).run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  initialize_tracing();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
