//! JSON over HTTP transport

use crate::{EditRequest, Person, Result, Transport, TransportConfig, TransportError};
use async_trait::async_trait;
use reqwest::{Client, Response};

/// Talks to the people server with reqwest
///
/// - `GET {base_url}/people` returns a JSON array of people
/// - `POST {base_url}/edit` accepts `{"firstName": .., "lastName": ..}`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Shared connection pool
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl HttpTransport {
    /// Create a transport from config
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(TransportError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, base_url })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(TransportError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_people(&self) -> Result<Vec<Person>> {
        let response = self.client.get(self.url("people")).send().await?;
        let people = Self::check(response)?.json::<Vec<Person>>().await?;
        tracing::debug!(count = people.len(), "fetched people");
        Ok(people)
    }

    async fn submit_edit(&self, first_name: &str, last_name: &str) -> Result<()> {
        let body = EditRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        let response = self.client.post(self.url("edit")).json(&body).send().await?;
        Self::check(response)?;
        tracing::debug!("edit accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned response and returns the raw request it received
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let task = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, task)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    fn transport(base_url: String) -> HttpTransport {
        HttpTransport::new(&TransportConfig {
            base_url,
            timeout_ms: 2000,
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = TransportConfig {
            base_url: "ftp://example.com".to_string(),
            ..TransportConfig::default()
        };
        assert!(matches!(
            HttpTransport::new(&config),
            Err(TransportError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let transport = transport("http://localhost:8000/".to_string());
        assert_eq!(transport.base_url(), "http://localhost:8000");
        assert_eq!(transport.url("people"), "http://localhost:8000/people");
    }

    #[tokio::test]
    async fn test_fetch_people() {
        let (base_url, server) =
            serve_once("200 OK", r#"[{"id":1,"name":"Ann","age":31},{"id":2,"name":"Bo","age":4}]"#)
                .await;

        let people = transport(base_url).fetch_people().await.unwrap();
        assert_eq!(people, vec![Person::new(1, "Ann", 31), Person::new(2, "Bo", 4)]);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /people HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_submit_edit() {
        let (base_url, server) = serve_once("200 OK", "{}").await;

        transport(base_url).submit_edit("Ann", "Lee").await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /edit HTTP/1.1"));
        assert!(request.contains(r#""firstName":"Ann""#));
        assert!(request.contains(r#""lastName":"Lee""#));
    }

    #[tokio::test]
    async fn test_error_status() {
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = transport(base_url).submit_edit("Ann", "Lee").await.unwrap_err();
        assert!(matches!(err, TransportError::Status(500)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = transport(base_url).fetch_people().await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}
