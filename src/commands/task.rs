//! Task Commands
//!
//! HTTP implementation of `TaskApi` on top of reqwest (fetch on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Response;

use super::TaskApi;
use crate::config::normalize_base;
use crate::error::{ApiError, Result};
use crate::models::Task;

const TASKS_PATH: &str = "/api/tasks";

// Characters that cannot appear raw in a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Task endpoints of one backend origin
#[derive(Clone, Debug)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    base: String,
}

impl HttpTaskApi {
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base: normalize_base(base)?,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn tasks_url(&self) -> String {
        format!("{}{}", self.base, TASKS_PATH)
    }

    fn task_url(&self, id: &str) -> Result<String> {
        task_url(&self.base, id)
    }
}

/// `{base}/api/tasks/{id}` with the id percent-encoded
///
/// Dot segments are rejected: URL parsing collapses them (encoded or not),
/// which would point the request at another resource.
pub fn task_url(base: &str, id: &str) -> Result<String> {
    if matches!(id, "" | "." | "..") {
        return Err(ApiError::InvalidTaskId(id.to_string()));
    }
    Ok(format!("{}{}/{}", base, TASKS_PATH, utf8_percent_encode(id, SEGMENT_ENCODE_SET)))
}

/// Decode a `GET /api/tasks` body
pub fn parse_task_list(body: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(body)?)
}

/// Check that a mutation reply is JSON; its content is not used
pub fn parse_ack(body: &str) -> Result<()> {
    serde_json::from_str::<serde_json::Value>(body)?;
    Ok(())
}

/// Read the body regardless of status; non-2xx is only logged
async fn read_body(method: &str, url: &str, response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        log::warn!("{} {} answered {}", method, url, status);
    }
    Ok(response.text().await?)
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.tasks_url();
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let body = read_body("GET", &url, response).await?;
        parse_task_list(&body)
    }

    async fn create_task(&self, task: &Task) -> Result<()> {
        let url = self.tasks_url();
        log::debug!("POST {} id={}", url, task.id);
        let response = self.client.post(&url).json(task).send().await?;
        let body = read_body("POST", &url, response).await?;
        parse_ack(&body)
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        let url = self.task_url(id)?;
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        let body = read_body("DELETE", &url, response).await?;
        parse_ack(&body)
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Request as seen by the stub server
    struct Captured {
        request_line: String,
        headers: String,
        body: String,
    }

    /// Client that ignores proxy settings from the environment
    fn local_api(base: &str) -> HttpTaskApi {
        HttpTaskApi {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            base: normalize_base(base).unwrap(),
        }
    }

    fn header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
    }

    fn content_length(headers: &str) -> usize {
        headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Answer exactly one request with `status` and `body`
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let head_len = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = header_end(&buf) {
                    break end;
                }
            };
            let head = String::from_utf8_lossy(&buf[..head_len]).to_string();
            let wanted = head_len + content_length(&head);
            while buf.len() < wanted {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body");
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            let (request_line, headers) = head.split_once("\r\n").unwrap_or((head.as_str(), ""));
            Captured {
                request_line: request_line.to_string(),
                headers: headers.to_lowercase(),
                body: String::from_utf8_lossy(&buf[head_len..wanted]).to_string(),
            }
        });
        (base, handle)
    }

    #[tokio::test]
    async fn test_list_tasks_over_http() {
        let (base, server) = serve_once("200 OK", r#"[{"id":"a","text":"x"}]"#).await;
        let api = local_api(&base);

        let tasks = api.list_tasks().await.unwrap();

        assert_eq!(tasks, vec![Task { id: "a".into(), text: "x".into() }]);
        assert_eq!(server.await.unwrap().request_line, "GET /api/tasks HTTP/1.1");
    }

    #[tokio::test]
    async fn test_create_posts_task_as_json() {
        let (base, server) = serve_once("200 OK", r#"{"message":"ok"}"#).await;
        let api = local_api(&base);
        let task = Task { id: "id-1".into(), text: "Buy milk".into() };

        api.create_task(&task).await.unwrap();

        let seen = server.await.unwrap();
        assert_eq!(seen.request_line, "POST /api/tasks HTTP/1.1");
        assert!(seen.headers.contains("content-type: application/json"));
        let sent: Task = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(sent, task);
    }

    #[tokio::test]
    async fn test_delete_uses_encoded_path() {
        let (base, server) = serve_once("200 OK", "{}").await;
        let api = local_api(&base);

        api.delete_task("a/b c").await.unwrap();

        assert_eq!(server.await.unwrap().request_line, "DELETE /api/tasks/a%2Fb%20c HTTP/1.1");
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_completes() {
        let (base, server) = serve_once("404 Not Found", r#"{"detail":"Not Found"}"#).await;
        let api = local_api(&base);

        assert!(api.delete_task("gone").await.is_ok());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_with_text_body_is_decode_error() {
        let (base, server) = serve_once("500 Internal Server Error", "Internal Server Error").await;
        let api = local_api(&base);
        let task = Task { id: "id-1".into(), text: "Buy milk".into() };

        assert!(matches!(api.create_task(&task).await, Err(ApiError::Decode(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let api = local_api(&base);

        assert!(matches!(api.list_tasks().await, Err(ApiError::Request(_))));
    }

    #[tokio::test]
    async fn test_dot_id_never_reaches_backend() {
        // Nothing listens here; the id is rejected before any request
        let api = local_api("http://127.0.0.1:9");
        assert!(matches!(api.delete_task("..").await, Err(ApiError::InvalidTaskId(_))));
    }
}
