//! Tests that run the compiled CGI program as a web server would.

use std::io::{self, Write};
use std::process::Stdio;

mod common;

#[test]
fn test_binary_with_cleared_environment() {
    let output = common::run_binary(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (head, body) = common::split_response(&stdout);
    assert_eq!(head, "Content-Type: text/html; charset=UTF-8");
    assert!(body.contains("<strong>Request Method:</strong> UNKNOWN</p>"));
    assert!(body.contains("<strong>Query String:</strong> (none)</p>"));
    assert!(body.trim_end().ends_with("</html>"));
}

#[test]
fn test_binary_reads_request_variables() {
    let output = common::run_binary(&[
        ("REQUEST_METHOD", "POST"),
        ("QUERY_STRING", "name=%3Cscript%3E"),
        ("REMOTE_ADDR", "198.51.100.7"),
        ("SCRIPT_NAME", "/cgi-bin/info"),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("<strong>Request Method:</strong> POST</p>"));
    assert!(stdout.contains("<strong>Remote Address:</strong> 198.51.100.7</p>"));
    assert!(stdout.contains("<tr><td>name</td><td>&lt;script&gt;</td></tr>"));
    assert!(!stdout.contains("<script>"));
}

#[test]
fn test_binary_uses_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[page]\ntitle = \"Host Info\"\n\n[security]\nenable_headers = true\n")
        .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = common::run_binary(&[("CGI_INFO_CONFIG", path.as_str())]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (head, body) = common::split_response(&stdout);
    assert!(head.contains("X-Content-Type-Options: nosniff"));
    assert!(body.contains("<title>Host Info</title>"));
}

#[test]
fn test_binary_survives_bad_config() {
    let output = common::run_binary(&[("CGI_INFO_CONFIG", "/nonexistent/cgi-info.toml")]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Content-Type: text/html; charset=UTF-8\n\n"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Falling back to default configuration"));
}

fn injected_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        b"[page]\ntitle = \"Injected\"\n\n[[response.extra_headers]]\nname = \"Location\"\nvalue = \"http://evil.example/\"\n",
    )
    .unwrap();
    file
}

#[test]
fn test_cgi_invocation_ignores_argv_flags() {
    let file = injected_config();
    let path = file.path().to_str().unwrap().to_string();
    let query = format!("--config+{path}");

    let output = common::run_binary_with_args(
        &[
            ("GATEWAY_INTERFACE", "CGI/1.1"),
            ("QUERY_STRING", query.as_str()),
        ],
        &["--config", path.as_str()],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (head, body) = common::split_response(&stdout);
    assert_eq!(head, "Content-Type: text/html; charset=UTF-8");
    assert!(!body.contains("Injected"));
    assert!(body.contains("<title>Rust CGI Demo</title>"));
}

#[test]
fn test_manual_run_honours_config_flag() {
    let file = injected_config();
    let path = file.path().to_str().unwrap().to_string();

    let output = common::run_binary_with_args(&[], &["--config", path.as_str()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("<title>Injected</title>"));
}

#[test]
fn test_empty_config_variable_is_ignored() {
    let output = common::run_binary(&[
        ("GATEWAY_INTERFACE", "CGI/1.1"),
        ("CGI_INFO_CONFIG", ""),
    ]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Falling back to default configuration"));
}

#[test]
fn test_closed_stdout_exits_with_failure() {
    let (reader, writer) = io::pipe().unwrap();
    drop(reader);

    let output = common::binary_command(&[("GATEWAY_INTERFACE", "CGI/1.1")])
        .stdout(Stdio::from(writer))
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run cgi-info");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to produce response"));
}
