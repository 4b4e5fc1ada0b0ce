//! Article resource operations
//!
//! One-shot request/response calls built on the transport layer: submit a
//! generation request, fetch a snapshot, delete an article, and the
//! composed generate-and-wait flow. Every operation validates its required
//! inputs before any network I/O, and every non-success response is
//! translated through the shared error taxonomy.

use reqwest::{Method, StatusCode};

use crate::client::Client;
use crate::error::{Error, Result};
use crate::polling::WaitOptions;
use crate::types::{Article, GenerateArticleRequest, GenerateArticleResponse};

impl Client {
    /// Submit an article generation request.
    ///
    /// `target_keyword` is merged into `options` (overwriting any keyword the
    /// options carry) and the combined request is posted to the API.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty keyword (no request is made),
    /// a translated API error for a non-success response, or a transport
    /// error if the request never completed.
    pub async fn generate_article(
        &self,
        target_keyword: &str,
        options: Option<GenerateArticleRequest>,
    ) -> Result<GenerateArticleResponse> {
        if target_keyword.is_empty() {
            return Err(Error::Validation {
                field: "target_keyword".to_string(),
                message: "target keyword is required".to_string(),
            });
        }

        let mut request = options.unwrap_or_default();
        request.target_keyword = target_keyword.to_string();

        tracing::debug!(target_keyword, "submitting article generation request");

        let response = self
            .request(Method::POST, "/generate-article", Some(&request))
            .await?;

        if !response.status.is_success() {
            return Err(Error::from_response(response.status, &response.body));
        }

        let ack: GenerateArticleResponse = serde_json::from_slice(&response.body)?;
        tracing::debug!(article_id = %ack.article_id, "article generation accepted");
        Ok(ack)
    }

    /// Retrieve the current snapshot of an article.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty id (no request is made), a
    /// translated API error for a non-success response, or a transport error
    /// if the request never completed.
    pub async fn get_article(&self, article_id: &str) -> Result<Article> {
        if article_id.is_empty() {
            return Err(Error::Validation {
                field: "article_id".to_string(),
                message: "article ID is required".to_string(),
            });
        }

        let endpoint = format!("/articles/{article_id}");
        let response = self.request::<()>(Method::GET, &endpoint, None).await?;

        if !response.status.is_success() {
            return Err(Error::from_response(response.status, &response.body));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Delete an article.
    ///
    /// Both `200 OK` and `204 No Content` count as success; no response body
    /// is parsed on either.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty id (no request is made), or a
    /// translated API error carrying the exact status for any other response.
    pub async fn delete_article(&self, article_id: &str) -> Result<()> {
        if article_id.is_empty() {
            return Err(Error::Validation {
                field: "article_id".to_string(),
                message: "article ID is required".to_string(),
            });
        }

        let endpoint = format!("/articles/{article_id}");
        let response = self.request::<()>(Method::DELETE, &endpoint, None).await?;

        if response.status != StatusCode::OK && response.status != StatusCode::NO_CONTENT {
            return Err(Error::from_response(response.status, &response.body));
        }

        tracing::debug!(article_id, "article deleted");
        Ok(())
    }

    /// Submit a generation request and poll until the article completes.
    ///
    /// Composes [`generate_article`](Client::generate_article) with
    /// [`wait_for_article`](Client::wait_for_article); the generate phase is
    /// never retried.
    ///
    /// # Errors
    ///
    /// Fails with whatever error either phase produces.
    pub async fn generate_article_and_wait(
        &self,
        target_keyword: &str,
        options: Option<GenerateArticleRequest>,
        wait_options: Option<WaitOptions>,
    ) -> Result<Article> {
        let ack = self.generate_article(target_keyword, options).await?;
        self.wait_for_article(&ack.article_id, wait_options.unwrap_or_default())
            .await
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> Client {
        Client::with_config(
            "test-key",
            Config {
                base_url: server.uri(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn finished_article_body() -> serde_json::Value {
        json!({
            "id": "A1",
            "projectId": "P1",
            "status": "finished",
            "progress": 100,
            "title": "Generated Title",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:05:00Z"
        })
    }

    // -----------------------------------------------------------------------
    // Validation failures issue zero network requests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn generate_with_empty_keyword_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.generate_article("", None).await {
            Err(Error::Validation { field, message }) => {
                assert_eq!(field, "target_keyword");
                assert_eq!(message, "target keyword is required");
            }
            other => panic!("expected Validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn get_with_empty_id_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.get_article("").await {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "article_id"),
            other => panic!("expected Validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn delete_with_empty_id_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.delete_article("").await {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "article_id"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // Generate
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn generate_parses_the_ack() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate-article"))
            .and(body_partial_json(json!({ "targetKeyword": "rust testing" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "articleId": "A1",
                "projectId": "P1",
                "message": "Article generation started"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let ack = client.generate_article("rust testing", None).await.unwrap();

        assert_eq!(ack.article_id, "A1");
        assert_eq!(ack.project_id, "P1");
        assert_eq!(ack.message, "Article generation started");
    }

    #[tokio::test]
    async fn generate_keyword_argument_overrides_options_keyword() {
        let server = MockServer::start().await;

        // The request body must carry the argument keyword, not the one the
        // caller left inside the options struct.
        Mock::given(method("POST"))
            .and(path("/generate-article"))
            .and(body_partial_json(json!({ "targetKeyword": "winner" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "articleId": "A1",
                "projectId": "P1",
                "message": "ok"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = GenerateArticleRequest {
            target_keyword: "loser".into(),
            ..Default::default()
        };

        let client = test_client(&server);
        let ack = client
            .generate_article("winner", Some(options))
            .await
            .unwrap();
        assert_eq!(ack.article_id, "A1");
    }

    #[tokio::test]
    async fn generate_preserves_caller_option_groups() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate-article"))
            .and(body_partial_json(json!({
                "targetKeyword": "ai in healthcare",
                "seo": { "useSchema": true },
                "advanced": { "targetAudience": "professionals" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "articleId": "A2",
                "projectId": "P1",
                "message": "ok"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut advanced = std::collections::HashMap::new();
        advanced.insert("targetAudience".to_string(), json!("professionals"));

        let options = GenerateArticleRequest {
            seo: Some(crate::types::SeoOptions {
                use_schema: Some(true),
                ..Default::default()
            }),
            advanced: Some(advanced),
            ..Default::default()
        };

        let client = test_client(&server);
        let ack = client
            .generate_article("ai in healthcare", Some(options))
            .await
            .unwrap();
        assert_eq!(ack.article_id, "A2");
    }

    #[tokio::test]
    async fn generate_translates_structured_error_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate-article"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "bad request",
                "details": "missing field"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.generate_article("x", None).await {
            Err(Error::Api(api)) => {
                assert_eq!(api.status_code, 400);
                assert_eq!(api.message, "bad request");
                assert_eq!(api.details.as_deref(), Some("missing field"));
            }
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn generate_surfaces_rate_limiting_with_hint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate-article"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "message": "quota exhausted",
                "retryAfter": 120
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.generate_article("x", None).await {
            Err(Error::RateLimit(rl)) => {
                assert_eq!(rl.message, "quota exhausted");
                assert_eq!(rl.retry_after, Some(120));
            }
            other => panic!("expected RateLimit error, got {:?}", other.map(|_| ())),
        }
    }

    // -----------------------------------------------------------------------
    // Get
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn get_parses_the_snapshot() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/articles/A1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(finished_article_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let article = client.get_article("A1").await.unwrap();

        assert_eq!(article.id, "A1");
        assert_eq!(article.status, crate::types::ArticleStatus::Finished);
        assert_eq!(article.progress, 100);
        assert_eq!(article.title.as_deref(), Some("Generated Title"));
    }

    #[tokio::test]
    async fn get_translates_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/articles/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "message": "article not found" })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.get_article("missing").await {
            Err(Error::Api(api)) => {
                assert_eq!(api.status_code, 404);
                assert_eq!(api.message, "article not found");
            }
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    // -----------------------------------------------------------------------
    // Delete: 200 and 204 succeed, everything else is translated
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn delete_accepts_ok() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/articles/A1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete_article("A1").await.unwrap();
    }

    #[tokio::test]
    async fn delete_accepts_no_content() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/articles/A1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete_article("A1").await.unwrap();
    }

    #[tokio::test]
    async fn delete_translates_any_other_status() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/articles/A1"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({ "message": "still generating" })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.delete_article("A1").await {
            Err(Error::Api(api)) => {
                assert_eq!(api.status_code, 409);
                assert_eq!(api.message, "still generating");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // Generate-and-wait composition
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn generate_and_wait_returns_the_finished_snapshot() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate-article"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "articleId": "A1",
                "projectId": "P1",
                "message": "ok"
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/articles/A1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(finished_article_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let article = client
            .generate_article_and_wait(
                "rust testing",
                None,
                Some(WaitOptions::new().max_attempts(3).interval(std::time::Duration::ZERO)),
            )
            .await
            .unwrap();

        assert_eq!(article.id, "A1");
        assert_eq!(article.status, crate::types::ArticleStatus::Finished);
    }

    #[tokio::test]
    async fn generate_and_wait_does_not_poll_when_generate_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/generate-article"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "backend down" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        match client.generate_article_and_wait("x", None, None).await {
            Err(Error::Api(api)) => assert_eq!(api.status_code, 500),
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }
}
