//! End-to-end job tests
//!
//! Real client, orchestrator and file storage against a stub upstream.

#[cfg(test)]
mod tests {
    use crate::common::{GroupResponder, StubUpstream, TestEnv, city_ids};
    use std::collections::HashSet;
    use weather_batch::config::UpstreamConfig;
    use weather_batch::{ApiKey, JobState};

    fn artifact_ids(names: &[String]) -> Vec<u64> {
        let mut ids: Vec<u64> = names
            .iter()
            .filter_map(|name| name.split('_').next())
            .filter_map(|id| id.parse().ok())
            .collect();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_twenty_five_cities_two_batches() {
        let upstream = StubUpstream::start().await;
        let env = TestEnv::new(&upstream).await;

        let result = env
            .orchestrator
            .run_job(city_ids(1, 25), ApiKey::new("integration-key"))
            .await
            .unwrap();

        assert_eq!(result.batches, 2);
        assert_eq!(result.persisted, 25);
        assert_eq!(upstream.request_count().await, 2);

        let artifacts = env.artifacts().await;
        assert_eq!(artifact_ids(&artifacts), (1..=25).collect::<Vec<u64>>());
        assert_eq!(env.orchestrator.query_progress().unwrap(), 1.0);
        assert_eq!(env.orchestrator.state(), JobState::Completed);
    }

    #[tokio::test]
    async fn test_artifact_contents_match_upstream() {
        let upstream = StubUpstream::start().await;
        let env = TestEnv::new(&upstream).await;

        env.orchestrator
            .run_job(city_ids(7, 7), ApiKey::new("integration-key"))
            .await
            .unwrap();

        let artifacts = env.artifacts().await;
        assert_eq!(artifacts.len(), 1);
        assert!(artifacts[0].starts_with("7_"));

        let stored = env
            .storage
            .load(env.dir.path().join(&artifacts[0]))
            .await
            .unwrap();
        assert_eq!(stored.data.city_id.get(), 7);
        assert_eq!(stored.data.temperature, GroupResponder::temperature_for(7));
        assert_eq!(stored.data.humidity, GroupResponder::humidity_for(7));
        assert_eq!(stored.user_id, "integration-key");
        assert!(stored.datetime.ends_with("-03:00"));
    }

    #[tokio::test]
    async fn test_failing_middle_batch() {
        let upstream = StubUpstream::start().await;
        let middle: Vec<String> = (21..=40).map(|id| id.to_string()).collect();
        upstream.fail_batch(&middle.join(","), 500).await;
        let env = TestEnv::new(&upstream).await;

        let result = env
            .orchestrator
            .run_job(city_ids(1, 60), ApiKey::new("integration-key"))
            .await
            .unwrap();

        assert_eq!(result.batches, 3);
        assert_eq!(result.failed_batches, 1);
        assert_eq!(result.persisted, 40);

        let expected: Vec<u64> = (1..=20).chain(41..=60).collect();
        assert_eq!(artifact_ids(&env.artifacts().await), expected);

        let snapshot = env
            .orchestrator
            .current_job()
            .unwrap()
            .progress
            .snapshot()
            .unwrap();
        assert_eq!(snapshot.completed, 40);
        assert_eq!(snapshot.remaining, 20);
        assert_eq!(snapshot.failed_batches, 1);
    }

    #[tokio::test]
    async fn test_upstream_omits_unknown_ids() {
        let upstream = StubUpstream::with_responder(GroupResponder {
            unknown: HashSet::from([5, 9]),
        })
        .await;
        let env = TestEnv::new(&upstream).await;

        let result = env
            .orchestrator
            .run_job(city_ids(1, 20), ApiKey::new("integration-key"))
            .await
            .unwrap();

        assert_eq!(result.persisted, 18);
        assert_eq!(env.artifacts().await.len(), 18);

        let snapshot = env
            .orchestrator
            .current_job()
            .unwrap()
            .progress
            .snapshot()
            .unwrap();
        assert_eq!(snapshot.remaining, 2);
        assert_eq!(snapshot.fraction, 0.9);
    }

    #[tokio::test]
    async fn test_empty_job_makes_no_requests() {
        let upstream = StubUpstream::start().await;
        let env = TestEnv::new(&upstream).await;

        let result = env
            .orchestrator
            .run_job(Vec::new(), ApiKey::new("integration-key"))
            .await
            .unwrap();

        assert_eq!(result.batches, 0);
        assert_eq!(upstream.request_count().await, 0);
        assert_eq!(env.orchestrator.query_progress().unwrap(), 1.0);
    }

    #[tokio::test]
    async fn test_capped_concurrency_still_completes() {
        let upstream = StubUpstream::start().await;
        let config = UpstreamConfig {
            base_url: upstream.base_url(),
            max_batch_size: 10,
            max_concurrent_batches: Some(1),
            ..UpstreamConfig::default()
        };
        let env = TestEnv::with_config(&config).await;

        let result = env
            .orchestrator
            .run_job(city_ids(100, 129), ApiKey::new("integration-key"))
            .await
            .unwrap();

        assert_eq!(result.batches, 3);
        assert_eq!(result.persisted, 30);
        assert_eq!(upstream.request_count().await, 3);
    }

    #[tokio::test]
    async fn test_background_job_through_detached_run() {
        let upstream = StubUpstream::start().await;
        let env = TestEnv::new(&upstream).await;

        let job = env
            .orchestrator
            .spawn_job(city_ids(1, 45), ApiKey::new("integration-key"))
            .unwrap();
        assert_eq!(job.batches, 3);

        for _ in 0..500 {
            if job.state() == JobState::Completed {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let result = job.result().expect("job did not complete");
        assert_eq!(result.persisted, 45);
        assert_eq!(env.artifacts().await.len(), 45);

        // The slot is free, so a blocking run may follow
        let next = env
            .orchestrator
            .run_job_detached(city_ids(46, 50), ApiKey::new("integration-key"))
            .await
            .unwrap();
        assert_eq!(next.persisted, 5);
    }
}
