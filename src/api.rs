use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::config::{parse_base_url, resolve};
use crate::error::ClientError;
use crate::location::QueryState;
use crate::model::{Interaction, Movie, PageContext};

/// Backend operations the client depends on.
///
/// Abstracted so tests can swap in an in-memory backend.
#[async_trait]
pub trait MovieBackend: Send + Sync {
    /// Fetch the movie list for a page, in backend order.
    async fn list_movies(
        &self,
        context: PageContext,
        query: &QueryState,
    ) -> Result<Vec<Movie>, ClientError>;

    /// Record or update the user's status for a movie.
    async fn record_interaction(
        &self,
        user_id: i64,
        interaction: &Interaction,
    ) -> Result<(), ClientError>;

    /// Remove the user's status for a movie.
    async fn clear_interaction(&self, user_id: i64, movie_id: i64) -> Result<(), ClientError>;
}

/// `MovieBackend` over the RecoFilm REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base: parse_base_url(base_url)?,
        })
    }

    pub fn list_url(&self, context: PageContext, query: &QueryState) -> Result<Url, ClientError> {
        let mut url = resolve(&self.base, context.endpoint())?;
        url.set_query(Some(&query.to_query_string()));
        Ok(url)
    }

    pub fn interactions_url(&self, user_id: i64) -> Result<Url, ClientError> {
        resolve(&self.base, &format!("/users/{}/interactions", user_id))
    }

    pub fn interaction_url(&self, user_id: i64, movie_id: i64) -> Result<Url, ClientError> {
        resolve(
            &self.base,
            &format!("/users/{}/interactions/{}", user_id, movie_id),
        )
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ClientError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ClientError::status(response.status(), response.url()))
    }
}

#[async_trait]
impl MovieBackend for HttpBackend {
    async fn list_movies(
        &self,
        context: PageContext,
        query: &QueryState,
    ) -> Result<Vec<Movie>, ClientError> {
        let url = self.list_url(context, query)?;
        debug!(%url, "fetching movie list");
        let response = self.client.get(url).send().await?;
        check_status(&response)?;
        Ok(response.json::<Vec<Movie>>().await?)
    }

    async fn record_interaction(
        &self,
        user_id: i64,
        interaction: &Interaction,
    ) -> Result<(), ClientError> {
        let url = self.interactions_url(user_id)?;
        debug!(%url, movie_id = interaction.movie_id, status = %interaction.status, "posting interaction");
        let response = self.client.post(url).json(interaction).send().await?;
        check_status(&response)
    }

    async fn clear_interaction(&self, user_id: i64, movie_id: i64) -> Result<(), ClientError> {
        let url = self.interaction_url(user_id, movie_id)?;
        debug!(%url, "deleting interaction");
        let response = self.client.delete(url).send().await?;
        check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn backend() -> HttpBackend {
        HttpBackend::new("http://127.0.0.1:8000", None).unwrap()
    }

    /// Backend pointed at `base_url`, ignoring any proxy set in the environment.
    fn local_backend(base_url: &str) -> HttpBackend {
        HttpBackend {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            base: parse_base_url(base_url).unwrap(),
        }
    }

    /// Answer a single request with `status_line` and `body`; the handle
    /// yields the raw request that was received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
                    let body_len = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + body_len {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{}", addr), handle)
    }

    fn request_body(request: &str) -> &str {
        request.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("")
    }

    #[test]
    fn test_list_url_per_context() {
        let query = QueryState {
            name: Some("Matrix".to_string()),
            year: Some(1999),
            limit: 10,
        };
        assert_eq!(
            backend().list_url(PageContext::Listing, &query).unwrap().as_str(),
            "http://127.0.0.1:8000/api/movies?name=Matrix&year=1999&limit=10"
        );
        assert_eq!(
            backend()
                .list_url(PageContext::Recommendations, &QueryState::new(5))
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8000/api/recommendations?limit=5"
        );
    }

    #[test]
    fn test_interaction_urls() {
        assert_eq!(
            backend().interactions_url(1).unwrap().as_str(),
            "http://127.0.0.1:8000/users/1/interactions"
        );
        assert_eq!(
            backend().interaction_url(1, 42).unwrap().as_str(),
            "http://127.0.0.1:8000/users/1/interactions/42"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let backend = HttpBackend::new("http://films.example/recofilm", None).unwrap();
        assert_eq!(
            backend
                .list_url(PageContext::Listing, &QueryState::new(10))
                .unwrap()
                .as_str(),
            "http://films.example/recofilm/api/movies?limit=10"
        );
        assert_eq!(
            backend.interaction_url(3, 7).unwrap().as_str(),
            "http://films.example/recofilm/users/3/interactions/7"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpBackend::new("not a url", None),
            Err(ClientError::Url(_))
        ));
    }

    #[tokio::test]
    async fn test_list_keeps_response_order() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":2,"title":"B"},{"id":1,"title":"A","year":1999,"status":{"value":"liked"}}]"#,
        )
        .await;
        let query = QueryState {
            name: Some("Heat".to_string()),
            year: None,
            limit: 10,
        };
        let movies = local_backend(&base)
            .list_movies(PageContext::Listing, &query)
            .await
            .unwrap();

        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(movies[1].status.as_ref().unwrap().value, "liked");
        assert_eq!(movies[0].year, None);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/movies?name=Heat&limit=10 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_list_server_error_is_status_error() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;
        let err = local_backend(&base)
            .list_movies(PageContext::Recommendations, &QueryState::new(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        assert!(err.is_network());

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/recommendations?limit=5 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_malformed_list_body_is_error() {
        let (base, server) = serve_once("200 OK", r#"{"detail":"nope"}"#).await;
        let err = local_backend(&base)
            .list_movies(PageContext::Listing, &QueryState::new(10))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_record_interaction_posts_json() {
        let (base, server) = serve_once("201 Created", "{}").await;
        let interaction = Interaction {
            status: "want_to_watch".to_string(),
            movie_id: 42,
        };
        local_backend(&base)
            .record_interaction(3, &interaction)
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /users/3/interactions HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        let body: serde_json::Value = serde_json::from_str(request_body(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "want_to_watch", "movie_id": 42})
        );
    }

    #[tokio::test]
    async fn test_clear_interaction_deletes() {
        let (base, server) = serve_once("204 No Content", "").await;
        local_backend(&base).clear_interaction(3, 42).await.unwrap();
        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /users/3/interactions/42 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_rejected_write_is_status_error() {
        let (base, server) = serve_once("404 Not Found", r#"{"detail":"no such movie"}"#).await;
        let interaction = Interaction {
            status: "liked".to_string(),
            movie_id: 9,
        };
        let err = local_backend(&base)
            .record_interaction(3, &interaction)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 404, .. }));
        server.await.unwrap();
    }
}
