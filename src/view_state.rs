use super::*;

/// Everything the presentation layer needs, derived from the current queries.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ViewState {
  pub(crate) error: Option<ApiError>,
  pub(crate) is_loading: bool,
  pub(crate) stories: Vec<ViewRecord>,
}

fn resolved_by_score<'a>(stories: &[&'a Query<Story>]) -> Vec<&'a Story> {
  let mut resolved = stories
    .iter()
    .copied()
    .filter_map(Query::data)
    .collect::<Vec<_>>();

  resolved.sort_by_key(|story| story.score);

  resolved
}

/// Authors of the stories that have resolved so far, each listed once.
pub(crate) fn distinct_authors(stories: &[&Query<Story>]) -> Vec<String> {
  let mut seen = HashSet::new();

  resolved_by_score(stories)
    .into_iter()
    .filter_map(Story::author)
    .filter(|author| seen.insert(*author))
    .map(str::to_string)
    .collect()
}

/// Folds the three fetch phases into one view.
///
/// Loading wins over everything while any query is pending. The error is the
/// first one found in phase order: id list, then stories, then users.
/// Stories are sorted by ascending score and only items of type `story`
/// survive.
pub(crate) fn derive_view_state(
  top_stories: &Query<Vec<u64>>,
  stories: &[&Query<Story>],
  users: &[&Query<User>],
) -> ViewState {
  let is_loading = top_stories.is_pending()
    || stories.iter().any(|query| query.is_pending())
    || users.iter().any(|query| query.is_pending());

  let error = top_stories
    .error()
    .or_else(|| stories.iter().find_map(|query| query.error()))
    .or_else(|| users.iter().find_map(|query| query.error()))
    .cloned();

  let by_id = users
    .iter()
    .copied()
    .filter_map(Query::data)
    .map(|user| (user.id.as_str(), user))
    .collect::<HashMap<_, _>>();

  let stories = resolved_by_score(stories)
    .into_iter()
    .filter(|story| story.is_story())
    .map(|story| ViewRecord {
      story: story.clone(),
      user: story
        .author()
        .and_then(|author| by_id.get(author))
        .map(|user| (*user).clone()),
    })
    .collect();

  ViewState {
    error,
    is_loading,
    stories,
  }
}
