use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  None,
  OpenSelected,
  PageDown,
  PageUp,
  Quit,
  Reload,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
}

impl From<KeyEvent> for Action {
  fn from(key: KeyEvent) -> Self {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
      KeyCode::Char('c') if control => Self::Quit,
      KeyCode::Char('d') if control => Self::PageDown,
      KeyCode::Char('u') if control => Self::PageUp,
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
      KeyCode::Char('r' | 'R') => Self::Reload,
      KeyCode::Down | KeyCode::Char('j') => Self::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Self::SelectPrevious,
      KeyCode::PageDown => Self::PageDown,
      KeyCode::PageUp => Self::PageUp,
      KeyCode::Home | KeyCode::Char('g') => Self::SelectFirst,
      KeyCode::End | KeyCode::Char('G') => Self::SelectLast,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => Self::OpenSelected,
      _ => Self::None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> Action {
    Action::from(KeyEvent::new(code, KeyModifiers::NONE))
  }

  fn ctrl(c: char) -> Action {
    Action::from(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
  }

  #[test]
  fn vim_and_arrow_keys_move_selection() {
    assert_eq!(press(KeyCode::Char('j')), Action::SelectNext);
    assert_eq!(press(KeyCode::Down), Action::SelectNext);
    assert_eq!(press(KeyCode::Char('k')), Action::SelectPrevious);
    assert_eq!(press(KeyCode::Up), Action::SelectPrevious);
    assert_eq!(press(KeyCode::Home), Action::SelectFirst);
    assert_eq!(press(KeyCode::Char('G')), Action::SelectLast);
  }

  #[test]
  fn control_chords_page_and_quit() {
    assert_eq!(ctrl('d'), Action::PageDown);
    assert_eq!(ctrl('u'), Action::PageUp);
    assert_eq!(ctrl('c'), Action::Quit);
  }

  #[test]
  fn plain_d_is_not_page_down() {
    assert_eq!(press(KeyCode::Char('d')), Action::None);
  }

  #[test]
  fn reload_open_and_quit() {
    assert_eq!(press(KeyCode::Char('r')), Action::Reload);
    assert_eq!(press(KeyCode::Enter), Action::OpenSelected);
    assert_eq!(press(KeyCode::Char('o')), Action::OpenSelected);
    assert_eq!(press(KeyCode::Esc), Action::Quit);
    assert_eq!(press(KeyCode::Char('q')), Action::Quit);
  }
}
