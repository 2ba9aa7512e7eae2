//! HTTP Monitoring Gateway
//!
//! Read-only lookups against the internal monitoring backend.

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use serde_json::Value;
use std::time::Duration;

use janai::{DomainError, GroupId, GroupInfo, MonitoringGateway, SensorSnapshot};

const GROUP_PATH: &str = "zone/box_group/get";
const SENSOR_GROUP_PATH: &str = "sensor/group";

/// HTTP implementation of MonitoringGateway
pub struct HttpMonitoringGateway {
    client: Client,
    base_url: String,
}

impl HttpMonitoringGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `GET <base>/<path>?id=<group_id>` with the id form-encoded
    fn request(&self, path: &str, group_id: &GroupId) -> Result<Request, DomainError> {
        self.client
            .get(self.endpoint(path))
            .header("Content-Type", "application/json")
            .query(&[("id", group_id.as_str())])
            .build()
            .map_err(|e| DomainError::Upstream(format!("{path}: invalid request: {e}")))
    }

    async fn fetch(&self, path: &str, group_id: &GroupId) -> Result<Value, DomainError> {
        let request = self.request(path, group_id)?;
        tracing::debug!(url = %request.url(), "Monitoring backend lookup");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| DomainError::Upstream(format!("{path}: request failed: {e}")))?;

        check_status(path, response.status())?;

        response
            .json::<Value>()
            .await
            .map_err(|e| DomainError::Upstream(format!("{path}: invalid JSON body: {e}")))
    }
}

/// Any non-2xx answer from the backend is an upstream failure
fn check_status(path: &str, status: StatusCode) -> Result<(), DomainError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(DomainError::Upstream(format!("{path}: HTTP error {status}")))
    }
}

#[async_trait]
impl MonitoringGateway for HttpMonitoringGateway {
    async fn fetch_group_info(&self, group_id: &GroupId) -> Result<GroupInfo, DomainError> {
        self.fetch(GROUP_PATH, group_id).await.map(GroupInfo::new)
    }

    async fn fetch_sensor_snapshot(
        &self,
        group_id: &GroupId,
    ) -> Result<SensorSnapshot, DomainError> {
        self.fetch(SENSOR_GROUP_PATH, group_id)
            .await
            .map(SensorSnapshot::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn gateway(base_url: &str) -> HttpMonitoringGateway {
        HttpMonitoringGateway::new(base_url, Duration::from_secs(5)).unwrap()
    }

    /// Serve `router` on an ephemeral loopback port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}/api/")
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        assert_eq!(
            gateway("http://backend.local/api/").endpoint(GROUP_PATH),
            "http://backend.local/api/zone/box_group/get"
        );
        assert_eq!(
            gateway("http://backend.local/api").endpoint(SENSOR_GROUP_PATH),
            "http://backend.local/api/sensor/group"
        );
    }

    #[test]
    fn test_request_encodes_group_id_query() {
        let group_id = GroupId::parse("a b&c=1").unwrap();
        let request = gateway("http://backend.local/api/")
            .request(GROUP_PATH, &group_id)
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://backend.local/api/zone/box_group/get?id=a+b%26c%3D1"
        );
        assert_eq!(request.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_request_numeric_group_id() {
        let group_id = GroupId::parse("42").unwrap();
        let request = gateway("http://backend.local/api")
            .request(SENSOR_GROUP_PATH, &group_id)
            .unwrap();

        assert_eq!(request.url().path(), "/api/sensor/group");
        assert_eq!(request.url().query(), Some("id=42"));
    }

    #[test]
    fn test_non_success_status_is_upstream_error() {
        assert!(check_status(GROUP_PATH, StatusCode::OK).is_ok());
        assert!(check_status(GROUP_PATH, StatusCode::NO_CONTENT).is_ok());

        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            match check_status(SENSOR_GROUP_PATH, status) {
                Err(DomainError::Upstream(message)) => {
                    assert!(message.starts_with("sensor/group: HTTP error"));
                    assert!(message.contains(status.as_str()));
                }
                other => panic!("expected upstream error for {status}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_group_info_from_backend() {
        let router = Router::new().route(
            "/api/zone/box_group/get",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                Json(json!({"name": "Site A", "id": query.get("id")}))
            }),
        );
        let base_url = serve(router).await;
        let group_id = GroupId::parse("a b&c=1").unwrap();

        let group = gateway(&base_url).fetch_group_info(&group_id).await.unwrap();

        assert_eq!(group.as_value(), &json!({"name": "Site A", "id": "a b&c=1"}));
    }

    #[tokio::test]
    async fn test_backend_error_status_is_upstream_error() {
        let router = Router::new().route(
            "/api/sensor/group",
            get(|| async { axum::http::StatusCode::SERVICE_UNAVAILABLE }),
        );
        let base_url = serve(router).await;
        let group_id = GroupId::parse("G1").unwrap();

        let result = gateway(&base_url).fetch_sensor_snapshot(&group_id).await;

        assert!(matches!(result, Err(DomainError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_non_json_body_is_upstream_error() {
        let router = Router::new().route("/api/sensor/group", get(|| async { "not json" }));
        let base_url = serve(router).await;
        let group_id = GroupId::parse("G1").unwrap();

        let result = gateway(&base_url).fetch_sensor_snapshot(&group_id).await;

        assert!(matches!(result, Err(DomainError::Upstream(_))));
    }
}
