//! Integration tests for the `portbounce` CLI binary.
//!
//! Argument parsing, help output, completions and configuration errors run
//! without a controller. The end-to-end cases drive the binary against a
//! wiremock controller.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const ISOLATED_HOME: &str = "/tmp/portbounce-cli-test-nonexistent";

/// Build a [`Command`] for the `portbounce` binary with env isolation.
///
/// Clears every variable the CLI reads and points config directories at
/// `home` so tests never touch the user's real configuration.
fn portbounce_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("portbounce");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CCC_URL")
        .env_remove("CCC_UN")
        .env_remove("CCC_PW")
        .env_remove("PORTBOUNCE_PROFILE")
        .env_remove("PORTBOUNCE_CONTROLLER")
        .env_remove("PORTBOUNCE_USERNAME")
        .env_remove("PORTBOUNCE_PASSWORD")
        .env_remove("PORTBOUNCE_TOKEN")
        .env_remove("PORTBOUNCE_OUTPUT");
    cmd
}

fn portbounce_cmd() -> assert_cmd::Command {
    portbounce_cmd_in(Path::new(ISOLATED_HOME))
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the async runtime so wiremock keeps serving.
async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let uri = server.uri();
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    tokio::task::spawn_blocking(move || {
        portbounce_cmd()
            .args(["--controller", &uri, "--token", "tok", "--poll-interval", "0"])
            .args(["--max-polls", "5", "-o", "json-compact"])
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

async fn mount_port(server: &MockServer, admin_status: &str) {
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/client-detail"))
        .and(query_param("macAddress", "00:A2:89:AA:AA:AA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "detail": {
                "port": "GigabitEthernet1/0/3",
                "connectedDevice": [{ "id": "switch-1" }]
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(
            "/dna/intent/api/v1/interface/network-device/switch-1/interface-name",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "id": "int-1", "adminStatus": admin_status }
        })))
        .mount(server)
        .await;
}

async fn mount_task(server: &MockServer, task_id: &str, status: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/dna/intent/api/v1/tasks/{task_id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": { "status": status } })),
        )
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = portbounce_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    portbounce_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("bounce")
            .and(predicate::str::contains("lookup"))
            .and(predicate::str::contains("task"))
            .and(predicate::str::contains("--max-polls")),
    );
}

#[test]
fn test_version_flag() {
    portbounce_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portbounce"));
}

#[test]
fn test_bounce_requires_mac() {
    let output = portbounce_cmd().arg("bounce").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_malformed_mac_is_usage_error() {
    let output = portbounce_cmd()
        .args(["bounce", "not-a-mac", "--controller", "https://127.0.0.1:9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("invalid MAC address"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    portbounce_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    portbounce_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_bounce_without_controller() {
    let output = portbounce_cmd()
        .args(["bounce", "00:A2:89:AA:AA:AA"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(
        text.contains("No controller configured"),
        "Expected missing-controller error:\n{text}"
    );
}

#[test]
fn test_bounce_without_credentials() {
    let output = portbounce_cmd()
        .args(["--controller", "https://127.0.0.1:9", "bounce", "00:A2:89:AA:AA:AA"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("No credentials"));
}

#[test]
fn test_invalid_controller_url_is_usage_error() {
    let output = portbounce_cmd()
        .args(["--controller", "not a url", "--token", "t", "task", "t-1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_profile() {
    let output = portbounce_cmd()
        .args(["--profile", "prod", "task", "t-1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("Profile 'prod' not found"));
}

// ── Config subcommands ──────────────────────────────────────────────

#[test]
fn test_config_path() {
    portbounce_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_show_redacts_secrets() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("portbounce");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        r#"
default_profile = "lab"

[profiles.lab]
controller = "https://dnac.lab.test"
username = "admin"
password = "hunter2"
"#,
    )
    .unwrap();

    let output = portbounce_cmd_in(home.path())
        .args(["-o", "json-compact", "config", "show"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""name":"lab""#), "{stdout}");
    assert!(stdout.contains("https://dnac.lab.test"), "{stdout}");
    assert!(!stdout.contains("hunter2"), "{stdout}");
}

// ── Against a mocked controller ─────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_bounce_down_port_brings_it_up() {
    let server = MockServer::start().await;
    mount_port(&server, "DOWN").await;

    Mock::given(method("PUT"))
        .and(path("/dna/intent/api/v1/interface/int-1"))
        .and(query_param("deploymentMode", "Deploy"))
        .and(body_json(json!({ "adminStatus": "UP" })))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "response": { "taskId": "t-up" } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(body_json(json!({ "adminStatus": "DOWN" })))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;
    mount_task(&server, "t-up", "SUCCESS").await;

    let output = run_against(&server, &["bounce", "00a2.89aa.aaaa"]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""outcome":"brought_up""#), "{stdout}");
    assert!(stdout.contains(r#""mac_address":"00:A2:89:AA:AA:AA""#), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bounce_preview_mode_is_forwarded() {
    let server = MockServer::start().await;
    mount_port(&server, "DOWN").await;

    Mock::given(method("PUT"))
        .and(path("/dna/intent/api/v1/interface/int-1"))
        .and(query_param("deploymentMode", "Preview"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "response": { "taskId": "t-up" } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_task(&server, "t-up", "SUCCESS").await;

    let output = run_against(
        &server,
        &["bounce", "00:A2:89:AA:AA:AA", "--mode", "preview"],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_task_exits_with_task_code() {
    let server = MockServer::start().await;
    mount_port(&server, "UP").await;

    Mock::given(method("PUT"))
        .and(path("/dna/intent/api/v1/interface/int-1"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({ "response": { "taskId": "t-down" } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_task(&server, "t-down", "FAILURE").await;

    let output = run_against(&server, &["bounce", "00:A2:89:AA:AA:AA"]).await;

    assert_eq!(output.status.code(), Some(9), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("FAILURE"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pending_task_hits_poll_bound() {
    let server = MockServer::start().await;
    mount_port(&server, "DOWN").await;

    Mock::given(method("PUT"))
        .and(path("/dna/intent/api/v1/interface/int-1"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "response": { "taskId": "t-up" } })),
        )
        .mount(&server)
        .await;
    mount_task(&server, "t-up", "PENDING").await;

    let output = run_against(&server, &["bounce", "00:A2:89:AA:AA:AA"]).await;

    assert_eq!(output.status.code(), Some(8), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_unresolvable_client_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/client-detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "detail": { "port": "Gi1/0/1" },
            "topology": { "nodes": [{ "id": "client" }] }
        })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["lookup", "00:A2:89:AA:AA:AA"]).await;

    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("Could not resolve"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_prints_interface() {
    let server = MockServer::start().await;
    mount_port(&server, "UP").await;

    let output = run_against(&server, &["lookup", "00:A2:89:AA:AA:AA"]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""interface_name":"GigabitEthernet1/0/3""#), "{stdout}");
    assert!(stdout.contains(r#""admin_status":"UP""#), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_task_reports_status_without_failing() {
    let server = MockServer::start().await;
    mount_task(&server, "t-9", "FAILURE").await;

    let output = run_against(&server, &["task", "t-9"]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""status":"FAILURE""#), "{stdout}");
    assert!(stdout.contains(r#""terminal":true"#), "{stdout}");
}
