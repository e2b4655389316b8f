use ecogestion::config::{ConsoleConfig, DEFAULT_API_URL};
use ecogestion::error::CONNECTION_ERROR_MESSAGE;
use ecogestion::{ConsoleClient, Error};

#[test]
fn test_default_config_builds_a_client() {
    let client = ConsoleClient::new(ConsoleConfig::default()).unwrap();
    assert_eq!(client.config().api_url, DEFAULT_API_URL);
}

#[test]
fn test_config_is_normalized_by_the_client() {
    let client = ConsoleClient::new(ConsoleConfig::new("http://backend.local:8000/")).unwrap();
    assert_eq!(client.config().endpoint("/api/query/"), "http://backend.local:8000/api/query/");
}

#[test]
fn test_zero_timeout_is_rejected() {
    let mut config = ConsoleConfig::default();
    config.timeout_secs = 0;
    let err = ConsoleClient::new(config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_error_messages() {
    let err = Error::Config("test error".to_string());
    assert_eq!(format!("{}", err), "Configuration error: test error");
    assert_eq!(err.user_message(), "test error");
    assert_eq!(CONNECTION_ERROR_MESSAGE, "Erreur de connexion au serveur");
}
