use super::*;

#[derive(Debug, Default)]
pub(crate) struct Dispatch {
  pub(crate) effects: Vec<Effect>,
  pub(crate) should_exit: bool,
}
