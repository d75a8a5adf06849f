use assert_cmd::cargo;
use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// kdcli command isolated from the real home directory and environment
fn kdcli(home: &Path, api_url: &str) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("kdcli");
    cmd.env("KDCLI_HOME", home)
        .env("KDCLI_API_URL", api_url)
        .env("NO_COLOR", "1")
        .env_remove("KDCLI_TOKEN")
        .env_remove("KDCLI_USERNAME")
        .env_remove("KDCLI_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a stored session as `kdcli login` would
fn write_session(home: &Path) {
    fs::write(
        home.join("session.json"),
        r#"{"userToken": "tok", "childIds": ["c-1"], "loginName": "parent"}"#,
    )
    .unwrap();
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();

    kdcli(temp.path(), "http://127.0.0.1:1")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_draft_without_session_exits_1() {
    let temp = TempDir::new().unwrap();

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["draft", "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Credentials not found! Please login."));
}

#[test]
fn test_photo_without_session_exits_1() {
    let temp = TempDir::new().unwrap();

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["photo", "--list"])
        .assert()
        .code(1);
}

#[test]
fn test_login_then_logout() {
    let temp = TempDir::new().unwrap();
    let session_file = temp.path().join("session.json");

    let mut server = Server::new();
    let login = server
        .mock("POST", "/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"loginName": "parent", "password": "secret"}),
        ))
        .with_status(200)
        .with_body(r#"{"userToken": "tok", "childIds": ["c-1"], "loginName": "parent"}"#)
        .create();

    kdcli(temp.path(), &server.url())
        .args(["login", "--user", "parent", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login succeeded!"))
        .stdout(predicate::str::contains("Logged in as parent"));
    login.assert();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&session_file).unwrap()).unwrap();
    assert_eq!(saved["userToken"], "tok");
    assert_eq!(saved["childIds"], json!(["c-1"]));

    kdcli(temp.path(), &server.url())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
    assert!(!session_file.exists());

    // Logging out twice is fine
    kdcli(temp.path(), &server.url())
        .arg("logout")
        .assert()
        .success();

    kdcli(temp.path(), &server.url())
        .args(["draft", "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Credentials not found"));
}

#[test]
fn test_failed_login_reports_status() {
    let temp = TempDir::new().unwrap();

    let mut server = Server::new();
    let _login = server
        .mock("POST", "/login")
        .with_status(401)
        .with_body("bad credentials")
        .create();

    kdcli(temp.path(), &server.url())
        .args(["login", "-u", "parent", "-p", "wrong"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "login API returned status code: 401, message: bad credentials",
        ));

    assert!(!temp.path().join("session.json").exists());
}

#[test]
fn test_draft_create_when_no_draft_exists() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let list = server
        .mock("POST", "/diary/draft/list")
        .match_body(Matcher::Json(json!({"childId": "c-1", "userToken": "tok"})))
        .with_status(200)
        .with_body(r#"{"totalHits": 0, "list": []}"#)
        .create();
    let create = server
        .mock("POST", "/diary/draft/post")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "childId": "c-1",
                "userToken": "tok",
                "textContent": "See you\nat five",
                "pickUpPerson": "Mother",
                "publishScheduleDate": 1704843000000i64,
                "pickUpTime": 1704871800000i64
            })),
            Matcher::Regex(r#""foodMenu":"Rice""#.to_string()),
        ]))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    let update = server.mock("POST", "/diary/draft/update").expect(0).create();

    kdcli(temp.path(), &server.url())
        .args([
            "draft",
            "--create",
            "--date",
            "2024-01-10",
            "--message",
            "See you\\nat five",
            "--pick-up-person",
            "Mother",
            "--food-menu",
            "Rice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as parent"))
        .stdout(predicate::str::contains("Draft created."));

    list.assert();
    create.assert();
    update.assert();
}

#[test]
fn test_draft_create_updates_existing_draft() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let _list = server
        .mock("POST", "/diary/draft/list")
        .with_status(200)
        .with_body(r#"{"totalHits": 2, "list": [{"draftId": "d-1"}, {"draftId": "d-2"}]}"#)
        .create();
    let update = server
        .mock("POST", "/diary/draft/update")
        .match_body(Matcher::PartialJson(json!({"draftId": "d-1", "childId": "c-1"})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    let create = server.mock("POST", "/diary/draft/post").expect(0).create();

    kdcli(temp.path(), &server.url())
        .args(["draft", "--create", "--today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft d-1 updated."));

    update.assert();
    create.assert();
}

#[test]
fn test_draft_create_with_last_photos() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let _photos = server
        .mock("POST", "/album/photo/all")
        .match_body(Matcher::Json(json!({"userToken": "tok"})))
        .with_status(200)
        .with_body(
            r#"{"totalHits": 3, "list": [{"url": "https://img/3.jpg"}, {"url": "https://img/2.jpg"}, {"url": "https://img/1.jpg"}]}"#,
        )
        .create();
    let _list = server
        .mock("POST", "/diary/draft/list")
        .with_status(200)
        .with_body(r#"{"totalHits": 0}"#)
        .create();
    let create = server
        .mock("POST", "/diary/draft/post")
        .match_body(Matcher::PartialJson(json!({
            "photos": ["https://img/2.jpg", "https://img/3.jpg"]
        })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();

    kdcli(temp.path(), &server.url())
        .args(["draft", "-c", "-L", "2"])
        .assert()
        .success();

    create.assert();
}

#[test]
fn test_use_last_photos_is_limited() {
    let temp = TempDir::new().unwrap();

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["draft", "--create", "--use-last-photos", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_draft_dry_run_sends_nothing() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let list = server.mock("POST", "/diary/draft/list").expect(0).create();
    let create = server.mock("POST", "/diary/draft/post").expect(0).create();

    kdcli(temp.path(), &server.url())
        .args(["draft", "--create", "--date", "2024-01-10", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Draft preview"))
        .stdout(predicate::str::contains("| Publish | 2024-01-10 08:30 |"))
        .stdout(predicate::str::contains("| Pick-up | 2024-01-10 16:30 | Father |"))
        .stdout(predicate::str::contains("Milk and bread"));

    list.assert();
    create.assert();
}

#[test]
fn test_draft_list_shows_details() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let _list = server
        .mock("POST", "/diary/draft/list")
        .with_status(200)
        .with_body(r#"{"totalHits": 1, "list": [{"draftId": "d-1"}]}"#)
        .create();
    let detail = server
        .mock("POST", "/diary/draft/detail")
        .match_body(Matcher::PartialJson(json!({"draftId": "d-1"})))
        .with_status(200)
        .with_body(r#"{"draftId": "d-1", "textContent": "Good morning"}"#)
        .create();
    let update = server.mock("POST", "/diary/draft/update").expect(0).create();

    kdcli(temp.path(), &server.url())
        .arg("draft")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as parent"))
        .stdout(predicate::str::contains("## Drafts (1)"))
        .stdout(predicate::str::contains("> Good morning"));

    detail.assert();
    update.assert();
}

#[test]
fn test_draft_list_keeps_going_when_detail_fails() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let _list = server
        .mock("POST", "/diary/draft/list")
        .with_status(200)
        .with_body(r#"{"totalHits": 2, "list": [{"draftId": "d-1"}, {"draftId": "d-2"}]}"#)
        .create();
    let _first = server
        .mock("POST", "/diary/draft/detail")
        .match_body(Matcher::PartialJson(json!({"draftId": "d-1"})))
        .with_status(500)
        .with_body("gone")
        .create();
    let second = server
        .mock("POST", "/diary/draft/detail")
        .match_body(Matcher::PartialJson(json!({"draftId": "d-2"})))
        .with_status(200)
        .with_body(r#"{"draftId": "d-2", "textContent": "Still here"}"#)
        .create();

    kdcli(temp.path(), &server.url())
        .args(["draft", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Drafts (2)"))
        .stdout(predicate::str::contains("Content unavailable"))
        .stdout(predicate::str::contains("> Still here"));

    second.assert();
}

#[test]
fn test_draft_list_failure_exits_1() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let _list = server
        .mock("POST", "/diary/draft/list")
        .with_status(500)
        .with_body("maintenance")
        .create();

    kdcli(temp.path(), &server.url())
        .args(["draft", "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "diary/draft/list API returned status code: 500, message: maintenance",
        ));
}

#[test]
fn test_token_flag_overrides_stored_session() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let profile = server
        .mock("POST", "/my_profile")
        .match_body(Matcher::Json(json!({"userToken": "flag-token"})))
        .with_status(200)
        .with_body(r#"{"childIds": ["c-flag"], "loginName": "other"}"#)
        .create();
    let list = server
        .mock("POST", "/diary/draft/list")
        .match_body(Matcher::Json(
            json!({"childId": "c-flag", "userToken": "flag-token"}),
        ))
        .with_status(200)
        .with_body(r#"{"totalHits": 0}"#)
        .create();

    kdcli(temp.path(), &server.url())
        .args(["--token", "flag-token", "draft", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts."));

    profile.assert();
    list.assert();
}

#[test]
fn test_env_token_without_session_file() {
    let temp = TempDir::new().unwrap();

    let mut server = Server::new();
    let _profile = server
        .mock("POST", "/my_profile")
        .with_status(200)
        .with_body(r#"{"userToken": "env-token", "childIds": ["c-1"]}"#)
        .create();
    let photos = server
        .mock("POST", "/album/photo/all")
        .match_body(Matcher::Json(json!({"userToken": "env-token"})))
        .with_status(200)
        .with_body(r#"{"totalHits": 1, "list": [{"url": "https://img/1.jpg"}]}"#)
        .create();

    kdcli(temp.path(), &server.url())
        .env("KDCLI_TOKEN", "env-token")
        .args(["photo", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Photos (1)"))
        .stdout(predicate::str::contains("https://img/1.jpg"));

    photos.assert();
}

#[test]
fn test_photo_last_prints_oldest_first() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    let mut server = Server::new();
    let _photos = server
        .mock("POST", "/album/photo/all")
        .with_status(200)
        .with_body(
            r#"{"totalHits": 3, "list": [{"url": "https://img/3.jpg"}, {"url": "https://img/2.jpg"}, {"url": "https://img/1.jpg"}]}"#,
        )
        .create();

    kdcli(temp.path(), &server.url())
        .args(["photo", "--last", "2"])
        .assert()
        .success()
        .stdout("https://img/2.jpg\nhttps://img/3.jpg\n");
}

#[test]
fn test_network_error_is_reported() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["draft", "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_config_init() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("publish = \"08:30\""));

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_schedule_changes_payload() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());
    fs::write(
        temp.path().join("config.toml"),
        "[schedule]\npublish = \"07:45\"\n\n[defaults]\npick_up_person = \"Grandma\"\n",
    )
    .unwrap();

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["draft", "--create", "--date", "2024-01-10", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Publish | 2024-01-10 07:45 |"))
        .stdout(predicate::str::contains("Grandma"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_session(temp.path());
    fs::write(
        temp.path().join("config.toml"),
        "[health]\ntemperature_min = 38.0\ntemperature_max = 36.0\n",
    )
    .unwrap();

    kdcli(temp.path(), "http://127.0.0.1:1")
        .args(["draft", "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid temperature range"));
}
