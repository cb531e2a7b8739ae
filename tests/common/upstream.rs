//! Stub OpenWeatherMap group endpoint

use serde_json::{Value, json};
use std::collections::HashSet;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Path the client requests under the stub's base URL
pub const GROUP_PATH: &str = "/data/2.5/group";

/// Answers with one reading per requested id, except for `unknown` ids
#[derive(Debug, Clone, Default)]
pub struct GroupResponder {
    pub unknown: HashSet<u64>,
}

impl GroupResponder {
    /// Temperature reported for `id`, so artifacts can be checked
    pub fn temperature_for(id: u64) -> f64 {
        (id % 40) as f64 + 0.25
    }

    /// Humidity reported for `id`
    pub fn humidity_for(id: u64) -> f64 {
        (id % 100) as f64
    }
}

impl Respond for GroupResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let ids = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        let list: Vec<Value> = ids
            .split(',')
            .filter_map(|id| id.parse::<u64>().ok())
            .filter(|id| !self.unknown.contains(id))
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("city-{}", id),
                    "main": {
                        "temp": Self::temperature_for(id),
                        "humidity": Self::humidity_for(id),
                        "pressure": 1013
                    }
                })
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({ "cnt": list.len(), "list": list }))
    }
}

/// Running stub server
pub struct StubUpstream {
    pub server: MockServer,
}

impl StubUpstream {
    /// Stub that answers every batch
    pub async fn start() -> Self {
        Self::with_responder(GroupResponder::default()).await
    }

    pub async fn with_responder(responder: GroupResponder) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(GROUP_PATH))
            .respond_with(responder)
            .with_priority(10)
            .mount(&server)
            .await;
        Self { server }
    }

    /// Make the batch whose joined ids equal `ids` fail with `status`
    pub async fn fail_batch(&self, ids: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(GROUP_PATH))
            .and(query_param("id", ids))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "cod": status, "message": "upstream failure" })),
            )
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Base URL to configure the client with
    pub fn base_url(&self) -> String {
        format!("{}/data/2.5", self.server.uri())
    }

    /// Requests received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
