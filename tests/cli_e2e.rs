//! End-to-end CLI tests for the natpp binary.

use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use natpp::settings::Arch;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Install directory with a prebuilt shell for the host architecture.
fn setup_home() -> TempDir {
    let home = TempDir::new().expect("failed to create temp dir");
    let shell_dir = home.path().join(Arch::detect().shell_dir_name());
    std::fs::create_dir_all(&shell_dir).unwrap();
    std::fs::write(shell_dir.join("natpp.exe"), b"MZ").unwrap();
    home
}

fn natpp(home: &Path, desktop: &Path) -> Command {
    let mut cmd = Command::cargo_bin("natpp").unwrap();
    cmd.arg("--home")
        .arg(home)
        .arg("--desktop")
        .arg(desktop)
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env_remove("RUST_LOG");
    cmd
}

/// Shell Link strings are UTF-16LE when the unicode flag is set.
#[cfg(windows)]
fn lnk_contains(bytes: &[u8], text: &str) -> bool {
    let wide: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
    let contains = |needle: &[u8]| bytes.windows(needle.len()).any(|w| w == needle);
    contains(&wide) || contains(text.as_bytes())
}

fn desktop_entries(desktop: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(desktop)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

async fn mock_site(html: &'static str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;
    server
}

/// Test that running without a URL prints usage and exits with code 0.
#[test]
fn test_no_url_prints_help() {
    let mut cmd = Command::cargo_bin("natpp").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("$ natpp https://example.com/ -n myapp"));
}

/// Test that --help displays usage information.
#[test]
fn test_long_help_flag() {
    let mut cmd = Command::cargo_bin("natpp").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--height"))
        .stdout(predicate::str::contains("--desc"));
}

/// Test that -v displays the version.
#[test]
fn test_short_version_flag() {
    let mut cmd = Command::cargo_bin("natpp").unwrap();
    cmd.arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that a URL without "http" is reported and the run ends cleanly
/// before any build or write.
#[test]
fn test_invalid_url_writes_nothing() {
    let home = TempDir::new().unwrap();
    let desktop = TempDir::new().unwrap();

    natpp(home.path(), desktop.path())
        .arg("example.com")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown url example.com"));

    assert!(desktop_entries(desktop.path()).is_empty());
    assert!(!home.path().join(Arch::detect().shell_dir_name()).exists());
}

/// Test that a URL with no extractable hostname needs --name.
#[test]
fn test_unresolved_name_writes_nothing() {
    let home = setup_home();
    let desktop = TempDir::new().unwrap();

    natpp(home.path(), desktop.path())
        .arg("httpfoo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--name"));

    assert!(desktop_entries(desktop.path()).is_empty());
}

/// Test that a name cannot place the shortcut outside the desktop folder.
#[test]
fn test_name_with_path_separators_writes_nothing() {
    let home = setup_home();
    let root = TempDir::new().unwrap();
    let desktop = root.path().join("Desktop");

    natpp(home.path(), &desktop)
        .args(["https://example.com/", "-n", "sub/dir/app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid app name"));

    assert!(!desktop.exists());
    assert!(!root.path().join("sub").exists());
}

/// Test that non-numeric dimensions are a usage error.
#[test]
fn test_non_numeric_width_is_rejected() {
    let home = setup_home();
    let desktop = TempDir::new().unwrap();

    natpp(home.path(), desktop.path())
        .args(["https://example.com/", "-w", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));

    assert!(desktop_entries(desktop.path()).is_empty());
}

/// Test that a missing shell with no npm available aborts the run.
#[test]
fn test_build_failure_is_fatal() {
    let home = TempDir::new().unwrap();
    let desktop = TempDir::new().unwrap();

    natpp(home.path(), desktop.path())
        .arg("https://example.com/")
        .env("PATH", "")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("the native app (only first time)"))
        .stderr(predicate::str::contains("npm"));

    assert!(desktop_entries(desktop.path()).is_empty());
}

/// Test the full flow: name and width overrides, favicon accepted.
#[cfg(windows)]
#[tokio::test(flavor = "multi_thread")]
async fn test_creates_shortcut_with_overrides() {
    let server = mock_site(r#"<head><link rel="icon" href="/favicon.ico"></head>"#).await;
    let home = setup_home();
    let desktop = TempDir::new().unwrap();
    let url = format!("{}/", server.uri());
    let icon = format!("{}/favicon.ico", server.uri());

    let (home_path, desktop_path) = (home.path().to_path_buf(), desktop.path().to_path_buf());
    let run_url = url.clone();
    let output = tokio::task::spawn_blocking(move || {
        natpp(&home_path, &desktop_path)
            .args([run_url.as_str(), "-n", "myapp", "-w", "100"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("url - {}", url)))
        .stdout(predicate::str::contains("name - myapp"))
        .stdout(predicate::str::contains("width - 100"))
        .stdout(predicate::str::contains("height - 600"))
        .stdout(predicate::str::contains("description - a native web app"))
        .stdout(predicate::str::contains(format!("icon - {}", icon)))
        .stdout(predicate::str::contains("Success"));

    let lnk = desktop.path().join("myapp.lnk");
    let bytes = std::fs::read(&lnk).expect("shortcut written");
    assert!(lnk_contains(&bytes, &format!("url={} w=100 h=600", url)));
    assert!(lnk_contains(&bytes, "a native web app"));
    assert!(lnk_contains(&bytes, &icon));
}

/// Test the hostname fallback name and default icon for non-.ico favicons.
#[cfg(windows)]
#[tokio::test(flavor = "multi_thread")]
async fn test_hostname_name_and_default_icon() {
    let server = mock_site(r#"<link rel="icon" href="/icon.png">"#).await;
    let home = setup_home();
    let desktop = TempDir::new().unwrap();
    let url = format!("{}/", server.uri());

    let (home_path, desktop_path) = (home.path().to_path_buf(), desktop.path().to_path_buf());
    let run_url = url.clone();
    let output = tokio::task::spawn_blocking(move || {
        natpp(&home_path, &desktop_path)
            .args([run_url.as_str(), "-d", "my dashboards"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("name - 127.0.0.1"))
        .stdout(predicate::str::contains("icon - use default"));

    let bytes = std::fs::read(desktop.path().join("127.0.0.1.lnk")).expect("shortcut written");
    assert!(lnk_contains(&bytes, &format!("url={} w=800 h=600", url)));
    assert!(lnk_contains(&bytes, "my dashboards"));
    assert!(!lnk_contains(&bytes, "icon.png"));
}

/// Test that off Windows the full flow reports everything, then fails to
/// write the shortcut.
#[cfg(not(windows))]
#[tokio::test(flavor = "multi_thread")]
async fn test_shortcut_write_fails_off_windows() {
    let server = mock_site(r#"<link rel="icon" href="/favicon.ico">"#).await;
    let home = setup_home();
    let root = TempDir::new().unwrap();
    let desktop = root.path().join("Desktop");
    let icon = format!("{}/favicon.ico", server.uri());

    let (home_path, desktop_path) = (home.path().to_path_buf(), desktop.clone());
    let run_url = format!("{}/", server.uri());
    let output = tokio::task::spawn_blocking(move || {
        natpp(&home_path, &desktop_path)
            .args([run_url.as_str(), "-n", "myapp"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .code(1)
        .stdout(predicate::str::contains("name - myapp"))
        .stdout(predicate::str::contains(format!("icon - {}", icon)))
        .stdout(predicate::str::contains("Success").not())
        .stderr(predicate::str::contains("Failed to write shortcut"))
        .stderr(predicate::str::contains("Windows"));

    assert!(desktop.is_dir());
    assert!(desktop_entries(&desktop).is_empty());
}

/// Test that an unreachable site aborts before the shortcut is written.
#[test]
fn test_favicon_failure_is_fatal() {
    let home = setup_home();
    let desktop = TempDir::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    natpp(home.path(), desktop.path())
        .args([format!("http://127.0.0.1:{}/", port).as_str(), "-n", "offline"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert!(desktop_entries(desktop.path()).is_empty());
}
