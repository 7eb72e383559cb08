use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  pub(crate) async fn fetch_story(&self, id: u64) -> Result<Story, ApiError> {
    self
      .get::<Story>(&format!("item/{id}.json"))
      .await?
      .ok_or_else(|| ApiError::new(format!("item {id} not found")))
  }

  /// Fetches the feed and keeps a random sample of it.
  pub(crate) async fn fetch_top_story_ids(&self) -> Result<Vec<u64>, ApiError> {
    let ids = self
      .get::<Vec<u64>>("topstories.json")
      .await?
      .ok_or_else(|| ApiError::unexpected("top stories payload was empty"))?;

    debug!(count = ids.len(), "fetched top story ids");

    Ok(sample(ids))
  }

  /// Unknown users come back as `null`; they resolve to a karma-less user.
  pub(crate) async fn fetch_user(&self, id: &str) -> Result<User, ApiError> {
    Ok(
      self
        .get::<User>(&format!("user/{id}.json"))
        .await?
        .unwrap_or_else(|| User::unknown(id)),
    )
  }

  /// GETs `path` under the base url. An empty or `null` body decodes to
  /// `None`.
  async fn get<T: DeserializeOwned>(
    &self,
    path: &str,
  ) -> Result<Option<T>, ApiError> {
    let url = format!("{}/{path}", self.base_url);

    debug!(%url, "requesting");

    let body = self
      .client
      .get(&url)
      .send()
      .await?
      .error_for_status()?
      .bytes()
      .await?;

    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(None);
    }

    serde_json::from_slice::<Option<T>>(&body).map_err(ApiError::unexpected)
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(Self::USER_AGENT)
      .build()
      .context("could not build HTTP client")?;

    Ok(Self::with_http(&config.api_url, client))
  }

  /// Runs a fetch effect and wraps its outcome as the matching event.
  pub(crate) async fn perform(&self, effect: Effect) -> Option<Event> {
    match effect {
      Effect::FetchStory { generation, id } => Some(Event::Story {
        generation,
        id,
        result: self.fetch_story(id).await,
      }),
      Effect::FetchTopStories { generation } => Some(Event::TopStories {
        generation,
        result: self.fetch_top_story_ids().await,
      }),
      Effect::FetchUser { generation, id } => {
        let result = self.fetch_user(&id).await;
        Some(Event::User {
          generation,
          id,
          result,
        })
      }
      Effect::OpenUrl { .. } => None,
    }
  }

  pub(crate) fn with_http(base_url: &str, client: reqwest::Client) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::sample::SAMPLE_SIZE, crate::test_server::TestServer};

  #[tokio::test]
  async fn top_story_ids_are_sampled() {
    let ids = (1..=30).collect::<Vec<u64>>();

    let server = TestServer::start(&[(
      "/topstories.json",
      200,
      &serde_json::to_string(&ids).unwrap(),
    )])
    .await;

    let sampled = server.client().fetch_top_story_ids().await.unwrap();

    assert_eq!(sampled.len(), SAMPLE_SIZE);
    assert_eq!(sampled.iter().collect::<HashSet<_>>().len(), SAMPLE_SIZE);
    assert!(sampled.iter().all(|id| ids.contains(id)));
  }

  #[tokio::test]
  async fn short_feed_is_returned_whole() {
    let server =
      TestServer::start(&[("/topstories.json", 200, "[3, 1, 2]")]).await;

    let mut sampled = server.client().fetch_top_story_ids().await.unwrap();
    sampled.sort_unstable();

    assert_eq!(sampled, [1, 2, 3]);
  }

  #[tokio::test]
  async fn repeated_feed_ids_are_sampled_once() {
    let server =
      TestServer::start(&[("/topstories.json", 200, "[7, 7, 8, 7]")]).await;

    let mut sampled = server.client().fetch_top_story_ids().await.unwrap();
    sampled.sort_unstable();

    assert_eq!(sampled, [7, 8]);
  }

  #[tokio::test]
  async fn server_errors_keep_their_status() {
    let server = TestServer::start(&[("/topstories.json", 500, "{}")]).await;

    let error = server.client().fetch_top_story_ids().await.unwrap_err();

    assert_eq!(error.status, Some(500));
    assert!(error.message.contains("500"), "{}", error.message);
  }

  #[tokio::test]
  async fn missing_route_maps_to_not_found() {
    let server = TestServer::start(&[]).await;

    let error = server.client().fetch_story(1).await.unwrap_err();

    assert_eq!(error.status, Some(404));
  }

  #[tokio::test]
  async fn unexpected_payload_has_no_status() {
    let server =
      TestServer::start(&[("/topstories.json", 200, r#"{"not": "a list"}"#)])
        .await;

    let error = server.client().fetch_top_story_ids().await.unwrap_err();

    assert_eq!(error.status, None);
  }

  #[tokio::test]
  async fn null_or_empty_feed_is_an_error() {
    for body in ["null", ""] {
      let server = TestServer::start(&[("/topstories.json", 200, body)]).await;

      let error = server.client().fetch_top_story_ids().await.unwrap_err();

      assert_eq!(error, ApiError::new("top stories payload was empty"));
      assert_eq!(error.status, None);
    }
  }

  #[tokio::test]
  async fn null_item_is_an_error() {
    let server = TestServer::start(&[("/item/9.json", 200, "null")]).await;

    let error = server.client().fetch_story(9).await.unwrap_err();

    assert_eq!(error, ApiError::new("item 9 not found"));
  }

  #[tokio::test]
  async fn fetches_story_by_id() {
    let server = TestServer::start(&[(
      "/item/8863.json",
      200,
      r#"{"by":"dhouston","id":8863,"score":111,"time":1175714200,"title":"Dropbox","type":"story","url":"http://www.getdropbox.com/u/2/screencast.html"}"#,
    )])
    .await;

    let story = server.client().fetch_story(8863).await.unwrap();

    assert_eq!(story.author(), Some("dhouston"));
    assert_eq!(story.score, 111);
    assert_eq!(story.title, "Dropbox");
  }

  #[tokio::test]
  async fn unknown_users_resolve_without_karma() {
    let server = TestServer::start(&[
      ("/user/ghost.json", 200, "null"),
      ("/user/blank.json", 200, ""),
      ("/user/pg.json", 200, r#"{"id":"pg","karma":155111}"#),
    ])
    .await;

    let client = server.client();

    assert_eq!(
      client.fetch_user("ghost").await.unwrap(),
      User::unknown("ghost")
    );
    assert_eq!(
      client.fetch_user("blank").await.unwrap(),
      User::unknown("blank")
    );
    assert_eq!(client.fetch_user("pg").await.unwrap().karma, Some(155_111));
  }

  #[tokio::test]
  async fn unreachable_host_is_a_transport_error() {
    let client = Client::with_http(
      &TestServer::unreachable_url(),
      reqwest::Client::builder().no_proxy().build().unwrap(),
    );

    let error = client.fetch_user("pg").await.unwrap_err();

    assert_eq!(error.status, None);
    assert!(!error.message.is_empty());
  }

  #[tokio::test]
  async fn perform_wraps_results_in_events() {
    let server =
      TestServer::start(&[("/user/pg.json", 200, r#"{"id":"pg"}"#)]).await;

    let event = server
      .client()
      .perform(Effect::FetchUser {
        generation: 4,
        id: "pg".to_string(),
      })
      .await;

    match event {
      Some(Event::User {
        generation,
        id,
        result,
      }) => {
        assert_eq!(generation, 4);
        assert_eq!(id, "pg");
        assert_eq!(result, Ok(User::unknown("pg")));
      }
      other => panic!("expected a user event, got {other:?}"),
    }

    assert!(
      server
        .client()
        .perform(Effect::OpenUrl {
          url: "https://example.com".to_string(),
        })
        .await
        .is_none()
    );
  }
}
