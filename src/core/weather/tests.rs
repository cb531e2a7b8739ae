//! Tests for the group endpoint client

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::UpstreamConfig;
    use crate::core::batch::{Batch, partition};
    use crate::core::traits::WeatherSource;
    use crate::core::types::{ApiKey, CityId};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> UpstreamConfig {
        UpstreamConfig {
            base_url: server.uri(),
            ..UpstreamConfig::default()
        }
    }

    fn batch_of(ids: &[u64]) -> Batch {
        let ids: Vec<CityId> = ids.iter().copied().map(CityId).collect();
        partition(&ids, 20).unwrap().remove(0)
    }

    fn city(id: u64, temp: f64, humidity: f64) -> serde_json::Value {
        json!({
            "id": id,
            "name": "somewhere",
            "main": { "temp": temp, "humidity": humidity, "pressure": 1012 }
        })
    }

    #[tokio::test]
    async fn test_fetch_parses_group_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/group"))
            .and(query_param("id", "3448439,3469058"))
            .and(query_param("appid", "test-key-123456"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cnt": 2,
                "list": [city(3448439, 21.5, 64.0), city(3469058, 18.25, 80.0)]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
        let records = client
            .fetch(
                &batch_of(&[3448439, 3469058]),
                &ApiKey::new("test-key-123456"),
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].city_id, CityId(3448439));
        assert_eq!(records[0].temperature, 21.5);
        assert_eq!(records[0].humidity, 64.0);
        assert_eq!(records[1].city_id, CityId(3469058));
        assert_eq!(records[1].temperature, 18.25);
        assert_eq!(records[0].captured_at, records[1].captured_at);
        assert_eq!(
            records[0].captured_at.timezone(),
            chrono_tz::America::Sao_Paulo
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_fewer_records_than_requested() {
        let server = MockServer::start().await;
        let known: Vec<serde_json::Value> = (1..=18).map(|id| city(id, 10.0, 50.0)).collect();
        Mock::given(method("GET"))
            .and(path("/group"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "list": known })))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
        let ids: Vec<u64> = (1..=20).collect();
        let records = client
            .fetch(&batch_of(&ids), &ApiKey::new("k"))
            .await
            .unwrap();

        assert_eq!(records.len(), 18);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/group"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
            )
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
        let err = client
            .fetch(&batch_of(&[1]), &ApiKey::new("bad"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.kind(), "status");
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/group"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&config_for(&server)).unwrap();
        let err = client
            .fetch(&batch_of(&[1]), &ApiKey::new("k"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/group"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "list": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = UpstreamConfig {
            timeout_seconds: 1,
            ..config_for(&server)
        };
        let client = OpenWeatherClient::new(&config).unwrap();
        let err = client
            .fetch(&batch_of(&[1]), &ApiKey::new("k"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "timeout");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..UpstreamConfig::default()
        };
        let client = OpenWeatherClient::new(&config).unwrap();
        let err = client
            .fetch(&batch_of(&[1]), &ApiKey::new("secret-key-value"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.to_string().contains("secret-key-value"));
    }

    #[test]
    fn test_group_url_trims_trailing_slash() {
        let config = UpstreamConfig {
            base_url: "http://api.openweathermap.org/data/2.5/".to_string(),
            ..UpstreamConfig::default()
        };
        let client = OpenWeatherClient::new(&config).unwrap();
        assert_eq!(
            client.group_url(),
            "http://api.openweathermap.org/data/2.5/group"
        );
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let config = UpstreamConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..UpstreamConfig::default()
        };
        assert!(OpenWeatherClient::new(&config).is_err());
    }
}
