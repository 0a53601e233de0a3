//! Integration tests for loading configuration and building a service from it.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use gorest_client::logging::Level;
use gorest_client::{
    ConfigError, ConfigSource, FileConfigSource, GoRestConfig, MemorySink, UserService,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[tokio::test]
async fn test_service_from_layered_files_uses_user_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/v2/users/3718"))
        .and(header("Authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3718,
            "name": "Bala Mehrotra II",
            "email": "bala@example.com",
            "gender": "male",
            "status": "active"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let global = write_file(
        &dir,
        "env/default.json",
        &json!({"url": mock_server.uri(), "accessToken": "global-token"}).to_string(),
    );
    let user = write_file(&dir, ".env", r#"{"accessToken": "user-token"}"#);

    let source = FileConfigSource::load([&global, &user]).unwrap();
    let config = GoRestConfig::from_source(&source);
    let service = UserService::new(&config, Arc::new(MemorySink::new()));

    let fetched = service.get(3718).await.unwrap();

    assert_eq!(fetched.name, "Bala Mehrotra II");
}

#[tokio::test]
async fn test_missing_url_fails_at_call_time() {
    let source: HashMap<String, String> =
        HashMap::from([("accessToken".to_string(), "token".to_string())]);
    let config = GoRestConfig::from_source(&source);
    let sink = Arc::new(MemorySink::new());
    let service = UserService::new(&config, sink.clone());

    let result = service.list_page(1, None).await;

    assert!(result.is_empty());
    let errors = sink.messages_at(Level::ERROR);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Something happened in setting up the list page 1 request"));
}

#[test]
fn test_malformed_user_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let global = write_file(&dir, "env/default.json", r#"{"url": "https://gorest.co.in"}"#);
    let user = write_file(&dir, ".env", "accessToken=abc");

    let result = FileConfigSource::load([&global, &user]);

    assert!(matches!(result, Err(ConfigError::Load { .. })));
}

#[test]
fn test_custom_source_implementation() {
    struct Fixed;

    impl ConfigSource for Fixed {
        fn get(&self, key: &str) -> Option<String> {
            match key {
                "url" => Some("https://gorest.co.in/".to_string()),
                "accessToken" => Some("fixed".to_string()),
                _ => None,
            }
        }
    }

    let config = GoRestConfig::from_source(&Fixed);
    let service = UserService::new(&config, Arc::new(MemorySink::new()));

    assert_eq!(
        service.http_client().url_for("1"),
        "https://gorest.co.in/public/v2/users/1"
    );
}
