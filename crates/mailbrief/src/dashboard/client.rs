use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{DashboardApi, DashboardError};
use crate::api::{DeleteResponse, ProcessResponse};
use crate::db::EmailSummary;

/// HTTP client for the REST surface.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .user_agent(concat!("mailbrief-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and turns any non-2xx status into
    /// [`DashboardError::Api`] carrying the response text.
    async fn send(&self, request: RequestBuilder) -> Result<Response, DashboardError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            return Err(DashboardError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, DashboardError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn list_emails(&self) -> Result<Vec<EmailSummary>, DashboardError> {
        self.json(self.client.get(self.url("/api/emails"))).await
    }

    async fn process_emails(&self) -> Result<ProcessResponse, DashboardError> {
        self.json(self.client.post(self.url("/api/emails/process")))
            .await
    }

    async fn resummarize(&self, id: i32) -> Result<EmailSummary, DashboardError> {
        self.json(
            self.client
                .post(self.url(&format!("/api/emails/{}/resummarize", id))),
        )
        .await
    }

    async fn delete_email(&self, id: i32) -> Result<(), DashboardError> {
        let _: DeleteResponse = self
            .json(self.client.delete(self.url(&format!("/api/emails/{}", id))))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::Category;

    const EMAIL_JSON: &str = r#"{
        "id": 7,
        "sender": "Marcus Chen",
        "senderEmail": "marcus.chen@startup.co",
        "subject": "Urgent: Login Issues with Mobile App",
        "body": "Hello Support Team",
        "summary": "Login fails with an authentication error.",
        "category": "Support Request",
        "processedAt": "2025-01-01T10:00:00Z",
        "updatedAt": "2025-01-01T10:05:00Z"
    }"#;

    #[tokio::test]
    async fn test_list_emails_decodes_camel_case() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/emails")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!("[{}]", EMAIL_JSON))
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let emails = client.list_emails().await.unwrap();

        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].id, 7);
        assert_eq!(emails[0].sender_email, "marcus.chen@startup.co");
        assert_eq!(emails[0].category, Category::SupportRequest);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_resummarize_posts_to_item_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/emails/7/resummarize")
            .with_status(200)
            .with_body(EMAIL_JSON)
            .create_async()
            .await;

        let client = ApiClient::new(&format!("{}/", server.url())).unwrap();
        let email = client.resummarize(7).await.unwrap();
        assert_eq!(email.summary, "Login fails with an authentication error.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/emails/99")
            .with_status(404)
            .with_body(r#"{"error":"Email not found"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let err = client.delete_email(99).await.unwrap_err();
        assert_eq!(err.to_string(), r#"404: {"error":"Email not found"}"#);
    }

    #[tokio::test]
    async fn test_process_emails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/emails/process")
            .with_status(200)
            .with_body(format!(
                r#"{{"success":true,"count":1,"emails":[{}]}}"#,
                EMAIL_JSON
            ))
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let response = client.process_emails().await.unwrap();
        assert!(response.success);
        assert_eq!(response.count, 1);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/emails")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let err = client.list_emails().await.unwrap_err();
        assert!(matches!(err, DashboardError::Decode(_)));
    }
}
