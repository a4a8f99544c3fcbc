use gemini_probe::{
    ai::MockGenerateContentClient,
    models::{Config, ProbeOptions, API_KEY_VAR},
    probe, prompts,
};
use pretty_assertions::assert_eq;
use std::process::{Command, Output};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HELLO_BODY: &str = r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#;

fn config_with_key(key: &str) -> Config {
    let key = key.to_string();
    Config::from_lookup(ProbeOptions::default(), move |name| {
        (name == API_KEY_VAR).then(|| key.clone())
    })
    .unwrap()
}

async fn run_to_string(config: &Config, client: &MockGenerateContentClient) -> String {
    let mut out = Vec::new();
    probe::run(config, client, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

/// Run the compiled binary in an empty directory so no `.env.local` is picked up.
async fn run_binary(api_key: Option<&str>, extra_args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gemini-probe"));
    cmd.current_dir(dir.path())
        .args(extra_args)
        .env_remove(API_KEY_VAR)
        .env("RUST_LOG", "off");
    if let Some(key) = api_key {
        cmd.env(API_KEY_VAR, key);
    }

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();
    drop(dir);
    output
}

#[tokio::test]
async fn test_success_prints_full_response_and_text() {
    let client = MockGenerateContentClient::new().with_response(200, HELLO_BODY);

    let output = run_to_string(&config_with_key("k"), &client).await;

    assert!(output.contains("Status Code: 200"));
    assert!(output.contains("--- Full Response ---\n{\n  \"candidates\": ["));
    assert_eq!(output.lines().last(), Some("Hello"));
    assert_eq!(client.get_call_count(), 1);
}

#[tokio::test]
async fn test_forbidden_prints_status_and_raw_body() {
    let client =
        MockGenerateContentClient::new().with_response(403, r#"{"error":"forbidden"}"#);

    let output = run_to_string(&config_with_key("k"), &client).await;

    assert!(output.contains("403"));
    assert!(output.contains(r#"{"error":"forbidden"}"#));
    assert!(!output.contains("Full Response"));
    assert!(!output.contains("Response Part"));
}

#[tokio::test]
async fn test_payload_independent_of_credential() {
    let first = MockGenerateContentClient::new().with_response(200, "{}");
    let second = MockGenerateContentClient::new().with_response(200, "{}");

    run_to_string(&config_with_key("key-one"), &first).await;
    run_to_string(&config_with_key("key-two"), &second).await;

    let sent = first.requests();
    assert_eq!(sent, second.requests());
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].contents.len(), 1);
    assert_eq!(sent[0].contents[0].parts.len(), 1);
    assert_eq!(sent[0].contents[0].parts[0].text, prompts::PROBE);
    assert_eq!(
        serde_json::to_value(&sent[0].tools).unwrap(),
        serde_json::json!([{ "google_search": {} }])
    );
}

#[tokio::test]
async fn test_repeated_runs_are_byte_identical() {
    let config = config_with_key("k");
    let client = MockGenerateContentClient::new().with_response(200, HELLO_BODY);

    let first = run_to_string(&config, &client).await;
    let second = run_to_string(&config, &client).await;

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_missing_credential_exits_nonzero_without_calling() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HELLO_BODY))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_binary(None, &["--base-url", &server.uri()]).await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("GEMINI_API_KEY not found in .env.local"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_invalid_json_reports_and_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_binary(Some("test-key"), &["--base-url", &server.uri()]).await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Status Code: 200"));
    assert!(stdout.contains("Exception: Serialization error:"));
    assert!(!stdout.contains("test-key"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_reads_key_from_env_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("key", "file-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HELLO_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let env_dir = tempfile::tempdir().unwrap();
    let env_file = env_dir.path().join("probe.env");
    std::fs::write(&env_file, "GEMINI_API_KEY=file-key\n").unwrap();
    let env_file = env_file.to_string_lossy().to_string();

    let output = run_binary(None, &["--base-url", &server.uri(), "--env-file", &env_file]).await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().last(), Some("Hello"));
}
