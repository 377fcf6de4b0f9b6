use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NOW: &str = "2024-06-01T12:00:00Z";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("snapshot.json")
}

/// Command isolated from any config files or ACKS_* variables on the host
fn acks(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("acks");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("ACKS_CONFIG")
        .env_remove("ACKS_SNAPSHOT")
        .env_remove("ACKS_BASE_PATH")
        .env_remove("ACKS_PAGE_SIZE")
        .env_remove("ACKS_LOG_LEVEL")
        .arg("--color")
        .arg("never");
    cmd
}

fn render(home: &TempDir) -> Command {
    let mut cmd = acks(home);
    cmd.arg("--snapshot").arg(fixture()).args(["render", "--now", NOW]);
    cmd
}

#[test]
fn test_help_command() {
    cargo_bin_cmd!("acks")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render the ACKs admin dashboard"));
}

#[test]
fn test_render_pull_request_list() {
    let home = TempDir::new().unwrap();
    render(&home)
        .arg("pull-requests")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<table class="table table-striped table-bordered model-list">"#,
        ))
        .stdout(predicate::str::contains("<th>CI</th>"))
        .stdout(predicate::str::contains("<th>Reviews</th>"))
        .stdout(predicate::str::contains("net: rotate outbound peers &lt;faster&gt;"))
        .stdout(predicate::str::contains("10 days ago"))
        .stdout(predicate::str::contains("+1,234"))
        .stdout(predicate::str::contains("10,000 sats"))
        .stdout(predicate::str::contains(r#"class="label label-success">Mergeable</span>"#))
        .stdout(predicate::str::contains(r#"title="All checks passed""#));
}

#[test]
fn test_render_list_is_sorted_by_number_descending() {
    let home = TempDir::new().unwrap();
    let output = render(&home).arg("pull-requests").output().unwrap();
    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    let newer = html.find("pull/101").unwrap();
    let older = html.find("pull/99").unwrap();
    assert!(newer < older);
}

#[test]
fn test_render_search_and_pagination() {
    let home = TempDir::new().unwrap();
    render(&home)
        .args(["pull-requests", "--search", "typo", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""total": 1"#))
        .stdout(predicate::str::contains("doc: fix typo"))
        .stdout(predicate::str::contains("rotate outbound").not());

    render(&home)
        .args(["pull-requests", "--page-size", "1", "--page", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pull/99"))
        .stdout(predicate::str::contains("pull/101").not());
}

#[test]
fn test_render_pull_request_details() {
    let home = TempDir::new().unwrap();
    render(&home)
        .args(["pull-requests", "--details", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<table class="table table-hover table-bordered searchable">"#,
        ))
        .stdout(predicate::str::contains("<tr><td><b>Author</b></td>"))
        // details mode keeps the body markup
        .stdout(predicate::str::contains("<p>Rotates outbound peers when the tip is stale.</p>"))
        .stdout(predicate::str::contains(
            r#"<div style="color: #000000;"> tested ACK abc1234</div>"#,
        ));
}

#[test]
fn test_render_bounties_payable() {
    let home = TempDir::new().unwrap();
    render(&home)
        .arg("bounties")
        .assert()
        .success()
        .stdout(predicate::str::contains("<th>Payout</th>"))
        .stdout(predicate::str::contains("Pay Alice"))
        .stdout(predicate::str::contains(
            "/admin/invoices/generate_invoice/?bounty_id=B1&amp;recipient_user_id=U3",
        ))
        .stdout(predicate::str::contains("1 unpaid invoices"))
        .stdout(predicate::str::contains("https://github.com/satoshi-fan"));
}

#[test]
fn test_render_respects_base_path() {
    let home = TempDir::new().unwrap();
    render(&home)
        .args(["bounties", "--base-path", "/dash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/dash/invoices/generate_invoice/"))
        .stdout(predicate::str::contains("/admin/").not());
}

#[test]
fn test_render_invoices_json() {
    let home = TempDir::new().unwrap();
    render(&home)
        .args(["invoices", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""view": "Invoices""#))
        .stdout(predicate::str::contains(r#""total": 2"#));
}

#[test]
fn test_render_unknown_details_key() {
    let home = TempDir::new().unwrap();
    render(&home)
        .args(["pull-requests", "--details", "7"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("pull_request not found: 7"));
}

#[test]
fn test_render_without_snapshot() {
    let home = TempDir::new().unwrap();
    acks(&home)
        .args(["render", "invoices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No snapshot configured"));
}

#[test]
fn test_render_missing_snapshot_file_json_error() {
    let home = TempDir::new().unwrap();
    acks(&home)
        .args(["--format", "json", "--snapshot", "nope.json", "render", "invoices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""error": true"#))
        .stderr(predicate::str::contains("Failed to load snapshot"));
}

#[test]
fn test_dangling_bounty_reference() {
    let home = TempDir::new().unwrap();
    let snapshot = home.path().join("broken.json");
    let broken = serde_json::json!({
        "bounties": [{
            "id": "B9",
            "amount": 1,
            "published_at": NOW,
            "pull_request_number": 404,
            "recipient_user_id": null,
            "payer_user_id": null
        }]
    });
    std::fs::write(&snapshot, broken.to_string()).unwrap();

    acks(&home)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["render", "bounties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bounty B9 references missing pull request"));
}

#[test]
fn test_log_level_controls_stderr_diagnostics() {
    let home = TempDir::new().unwrap();
    render(&home)
        .arg("invoices")
        .assert()
        .success()
        .stderr(predicate::str::contains("loading snapshot").not());

    render(&home)
        .env("ACKS_LOG_LEVEL", "debug")
        .arg("invoices")
        .assert()
        .success()
        .stderr(predicate::str::contains("loading snapshot from"))
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_invalid_log_level() {
    let home = TempDir::new().unwrap();
    render(&home)
        .env("ACKS_LOG_LEVEL", "loud")
        .arg("invoices")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log_level 'loud'"));
}

#[test]
fn test_views_json() {
    let home = TempDir::new().unwrap();
    acks(&home)
        .args(["views", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Pull Requests""#))
        .stdout(predicate::str::contains(r#""name": "Bounties Payable""#))
        .stdout(predicate::str::contains(r#""formatter": "review_decisions""#));
}

#[test]
fn test_views_text() {
    let home = TempDir::new().unwrap();
    acks(&home)
        .arg("views")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoices (invoice)"))
        .stdout(predicate::str::contains("Sort: number desc"))
        .stdout(predicate::str::contains("Pages: list, details, create"));
}

#[test]
#[serial]
fn test_config_file_supplies_snapshot_and_base_path() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("acks.toml"),
        format!(
            "snapshot = {:?}\nbase_path = \"/ops\"\n",
            fixture().display().to_string()
        ),
    )
    .unwrap();

    acks(&home)
        .args(["render", "bounties", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("/ops/invoices/generate_invoice/"));
}

#[test]
#[serial]
fn test_env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("acks.toml"), "page_size = 5\n").unwrap();

    acks(&home)
        .env("ACKS_PAGE_SIZE", "7")
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""page_size": 7"#))
        .stdout(predicate::str::contains(r#""base_path": "/admin""#));
}

#[test]
fn test_explicit_config_not_found() {
    let home = TempDir::new().unwrap();
    acks(&home)
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_path_lists_local_file() {
    let home = TempDir::new().unwrap();
    acks(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acks.toml (missing)"));
}

#[test]
fn test_completions() {
    cargo_bin_cmd!("acks")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acks"));
}
