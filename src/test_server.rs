use {
  super::*,
  axum::{
    Router,
    http::{StatusCode, Uri, header},
  },
  std::{
    net::TcpListener as StdTcpListener,
    sync::{Arc, Mutex},
  },
  tokio::net::TcpListener,
};

/// Local HTTP server answering each path with a canned status and body.
pub(crate) struct TestServer {
  requests: Arc<Mutex<Vec<String>>>,
  url: String,
}

impl TestServer {
  pub(crate) fn client(&self) -> Client {
    Client::with_http(
      &self.url,
      reqwest::Client::builder().no_proxy().build().unwrap(),
    )
  }

  /// Paths requested so far, in arrival order.
  pub(crate) fn requests(&self) -> Vec<String> {
    self.requests.lock().unwrap().clone()
  }

  /// Serves `routes` as `(path, status, body)`; other paths get a 404.
  pub(crate) async fn start(routes: &[(&str, u16, &str)]) -> Self {
    let routes = Arc::new(
      routes
        .iter()
        .map(|(path, status, body)| {
          ((*path).to_string(), (*status, (*body).to_string()))
        })
        .collect::<HashMap<_, _>>(),
    );

    let requests = Arc::new(Mutex::new(Vec::new()));

    let log = requests.clone();

    let app = Router::new().fallback(move |uri: Uri| async move {
      let path = uri.path().to_string();

      log.lock().unwrap().push(path.clone());

      let (status, body) = routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| (404, "null".to_string()));

      (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
      )
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    Self { requests, url }
  }

  /// A base url nothing is listening on.
  pub(crate) fn unreachable_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}", listener.local_addr().unwrap())
  }
}
