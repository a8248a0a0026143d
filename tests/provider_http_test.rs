//! Full submission against a mock Gemini endpoint

use mockito::Matcher;
use serde_json::json;
use serial_test::serial;
use sitelens::analysis::{Category, WebsiteAnalyzer};
use sitelens::config::Config;
use sitelens::llm::factory;
use sitelens::ui::{Session, ViewState};
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const REPLY: &str = "```json\n{\"ux_recommendations\":[{\"title\":\"Improve navigation\",\"description\":\"Simplify the top menu.\"}],\"design_recommendations\":[],\"seo_recommendations\":[],\"product_attractiveness_recommendations\":[]}\n```";

fn config_for(server_url: &str) -> Config {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[llm]
provider = "gemini"
model = "gemini-test"
api_key_env = "SITELENS_HTTP_TEST_KEY"
base_url = "{}"
timeout_secs = 5
"#,
        server_url
    )
    .unwrap();
    Config::load_with_path(Some(file.path().to_string_lossy().to_string())).unwrap()
}

#[tokio::test]
#[serial]
async fn test_submit_through_gemini_endpoint() {
    env::set_var("SITELENS_HTTP_TEST_KEY", "secret");
    let body = json!({"candidates": [{"content": {"parts": [{"text": REPLY}]}}]});
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .match_header("x-goog-api-key", "secret")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {"temperature": 0.7, "responseMimeType": "application/json"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server.url());
    let client = factory::create_client(&config, false).unwrap();
    let analyzer = WebsiteAnalyzer::from_config(&config, client);
    let mut session = Session::new(analyzer).with_spinner(false);
    session.submit("https://example.com").await;

    let ViewState::Ready { result, .. } = session.state() else {
        panic!("expected Ready, got {:?}", session.state());
    };
    let first = &result.recommendations(Category::Ux)[0];
    assert_eq!(first.title, "Improve navigation");
    mock.assert_async().await;
    env::remove_var("SITELENS_HTTP_TEST_KEY");
}

#[tokio::test]
#[serial]
async fn test_http_error_becomes_failed_state() {
    env::set_var("SITELENS_HTTP_TEST_KEY", "secret");
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .with_status(403)
        .with_body("PERMISSION_DENIED")
        .create_async()
        .await;

    let config = config_for(&server.url());
    let client = factory::create_client(&config, false).unwrap();
    let analyzer = WebsiteAnalyzer::from_config(&config, client);
    let mut session = Session::new(analyzer).with_spinner(false);
    session.submit("https://example.com").await;

    let ViewState::Failed { message, .. } = session.state() else {
        panic!("expected Failed");
    };
    assert!(message.starts_with("Failed to analyze website:"));
    assert!(message.contains("403"));
    assert!(message.contains("PERMISSION_DENIED"));
    env::remove_var("SITELENS_HTTP_TEST_KEY");
}

#[tokio::test]
#[serial]
async fn test_missing_key_makes_no_request() {
    env::remove_var("SITELENS_HTTP_TEST_KEY");
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&server.url());
    let client = factory::create_client(&config, false).unwrap();
    assert!(client.is_none());
    let analyzer = WebsiteAnalyzer::from_config(&config, client);
    let mut session = Session::new(analyzer).with_spinner(false);
    session.submit("https://example.com").await;

    let ViewState::Failed { message, .. } = session.state() else {
        panic!("expected Failed");
    };
    assert!(message.contains("SITELENS_HTTP_TEST_KEY"));
    mock.assert_async().await;
}
