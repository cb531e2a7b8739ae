//! Configuration loading integration tests
//!
//! File, default and environment sources as the binary combines them.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio_test::{assert_err, assert_ok};
    use weather_batch::GatewayError;
    use weather_batch::server::builder::load_config;

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let (config, from_file) =
            assert_ok!(load_config(std::path::Path::new("/no/such/gateway.yaml")).await);

        assert!(!from_file);
        assert_eq!(config.upstream().max_batch_size, 20);
        assert_eq!(config.upstream().units, "metric");
    }

    #[tokio::test]
    async fn test_file_values_are_used() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"upstream:\n  max_batch_size: 5\n  max_concurrent_batches: 2\n")
            .unwrap();

        let (config, from_file) = assert_ok!(load_config(file.path()).await);

        assert!(from_file);
        assert_eq!(config.upstream().max_batch_size, 5);
        assert_eq!(config.upstream().max_concurrent_batches, Some(2));
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"upstream:\n  timezone: Mars/Olympus_Mons\n")
            .unwrap();

        let err = assert_err!(load_config(file.path()).await);
        assert!(matches!(err, GatewayError::Config(msg) if msg.contains("timezone")));
    }
}
