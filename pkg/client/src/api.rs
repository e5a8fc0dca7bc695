use crate::classify::{Outcome, classify};
use crate::transport::{ApiRequest, Transport};
use anyhow::Context;
use pkg_constants::network::NAMESPACES_SEGMENT;
use pkg_types::namespace::{CreateNamespaceRequest, NamespaceResources};
use tracing::info;

/// Typed endpoints of the provisioning API. Each method issues one request
/// and classifies the response.
pub struct NamespaceApi<'a> {
    transport: &'a dyn Transport,
}

impl<'a> NamespaceApi<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// `GET /namespaces`
    pub async fn list(&self) -> anyhow::Result<Outcome> {
        info!("Listing namespaces");
        self.call(ApiRequest::get([NAMESPACES_SEGMENT])).await
    }

    /// `GET /namespaces/{name}`; a successful body is the opaque credential payload.
    pub async fn credentials(&self, name: &str) -> anyhow::Result<Outcome> {
        info!("Fetching credentials for namespace {}", name);
        self.call(ApiRequest::get([NAMESPACES_SEGMENT, name])).await
    }

    /// `POST /namespaces`
    pub async fn create(&self, name: &str, resources: NamespaceResources) -> anyhow::Result<Outcome> {
        info!(
            "Creating namespace {} (cpu={}, mem={}, disk={})",
            name, resources.cpu, resources.memory, resources.disk_size
        );
        let payload = CreateNamespaceRequest {
            namespace_name: name.to_string(),
            resources,
        };
        let body = serde_json::to_value(&payload).context("failed to encode create request")?;
        self.call(ApiRequest::post([NAMESPACES_SEGMENT], body)).await
    }

    /// `DELETE /namespaces/{name}`
    pub async fn delete(&self, name: &str) -> anyhow::Result<Outcome> {
        info!("Deleting namespace {}", name);
        self.call(ApiRequest::delete([NAMESPACES_SEGMENT, name])).await
    }

    async fn call(&self, request: ApiRequest) -> anyhow::Result<Outcome> {
        let resp = self.transport.send(request).await?;
        Ok(classify(resp.status, resp.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::OutcomeKind;
    use crate::mock::MockTransport;
    use crate::transport::Method;
    use pkg_types::namespace::Quantity;
    use serde_json::json;

    #[tokio::test]
    async fn list_hits_collection() {
        let mock = MockTransport::new().on_get("/namespaces", 200, "[]");
        let outcome = NamespaceApi::new(&mock).list().await.unwrap();

        assert_eq!(outcome, Outcome::Success { body: b"[]".to_vec() });
        let reqs = mock.requests();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].method, Method::GET);
        assert_eq!(reqs[0].path(), "/namespaces");
        assert!(reqs[0].body.is_none());
    }

    #[tokio::test]
    async fn credentials_hits_item() {
        let mock = MockTransport::new().on_get("/namespaces/bar", 401, r#"{"error":"invalid token"}"#);
        let outcome = NamespaceApi::new(&mock).credentials("bar").await.unwrap();

        assert_eq!(outcome.kind(), OutcomeKind::Unauthorized);
        assert_eq!(outcome.message(), "invalid token");
        assert_eq!(mock.requests()[0].segments, vec!["namespaces", "bar"]);
    }

    #[tokio::test]
    async fn create_posts_payload() {
        let mock = MockTransport::new().on_post("/namespaces", 201, "{}");
        let resources = NamespaceResources {
            cpu: Quantity::new("200"),
            ..Default::default()
        };
        let outcome = NamespaceApi::new(&mock).create("foo", resources).await.unwrap();
        assert!(outcome.is_ok());

        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path(), "/namespaces");
        assert_eq!(
            req.body,
            Some(json!({
                "namespace_name": "foo",
                "resources": { "cpu": 200, "mem": 128, "disks_size": 0 }
            }))
        );
    }

    #[tokio::test]
    async fn name_stays_a_single_segment() {
        let mock = MockTransport::new();
        let api = NamespaceApi::new(&mock);
        api.delete("x?y").await.unwrap();
        api.credentials("a/b").await.unwrap();

        let reqs = mock.requests();
        assert_eq!(reqs[0].segments, vec!["namespaces", "x?y"]);
        assert_eq!(reqs[1].segments, vec!["namespaces", "a/b"]);
    }

    #[tokio::test]
    async fn repeated_delete_is_not_special_cased() {
        let mock = MockTransport::new().on_delete("/namespaces/gone", 404, r#"{"error":"namespace not found"}"#);
        let api = NamespaceApi::new(&mock);

        let first = api.delete("gone").await.unwrap();
        let second = api.delete("gone").await.unwrap();
        assert!(!first.is_ok());
        assert_eq!(first, second);
        assert_eq!(mock.call_count(), 2);
        assert!(mock.requests().iter().all(|r| r.method == Method::DELETE));
    }
}
