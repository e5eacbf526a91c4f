use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn wpt() -> Command {
    Command::cargo_bin("wpt").expect("binary is built")
}

#[test]
fn resolve_ms_path_rewrites_links() {
    wpt()
        .args(["resolve", "/ms/destinos", "--link", "/login", "--link", "/eventos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"brand\": \"descubra-ms\""))
        .stdout(predicate::str::contains("\"href\": \"/ms/login\""))
        .stdout(predicate::str::contains("\"href\": \"/ms/eventos\""));
}

#[test]
fn two_letter_policy_is_opt_in() {
    wpt()
        .args(["resolve", "/xy/page", "--link", "/login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"scope\": \"global\""))
        .stdout(predicate::str::contains("\"href\": \"/login\""));

    wpt()
        .args(["resolve", "/xy/page", "--link", "/login", "--policy", "two-letter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"href\": \"/xy/login\""));
}

#[test]
fn nav_prints_navigation_view() {
    wpt()
        .args(["nav", "/eventos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"eventsOnly\": true"));

    wpt()
        .args(["nav", "/ms", "--signed-in"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"/ms/profile\""));
}

#[test]
fn tenants_lists_default_routes() {
    wpt()
        .arg("tenants")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"policy\": \"strict\""))
        .stdout(predicate::str::contains("descubramatogrossodosul"));
}

#[test]
fn config_file_adds_tenant() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wpt.toml");
    fs::write(
        &path,
        r#"
[tenancy]
routes = [
  { segment = "ms", tenant = "ms", prefix = "/ms" },
  { segment = "pr", tenant = "pr", prefix = "/pr" },
]
"#,
    )?;

    wpt()
        .args(["--config", path.to_str().ok_or("utf-8 path")?, "resolve", "/pr/x", "--link", "/login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"href\": \"/pr/login\""));
    Ok(())
}

#[test]
fn login_splits_platform_and_portal() {
    wpt()
        .args(["login", "/viajar/precos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"platform\": true"))
        .stdout(predicate::str::contains("\"login\": \"/viajar/login\""))
        .stdout(predicate::str::contains("\"cookies\": \"/viajar/cookies\""));
}

#[test]
fn environment_overrides_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("wpt.toml");
    fs::write(&path, "[tenancy]\npolicy = \"strict\"\n")?;
    let config = path.to_str().ok_or("utf-8 path")?;

    wpt()
        .env("WPT__TENANCY__POLICY", "two-letter")
        .args(["--config", config, "tenants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"policy\": \"two-letter\""));

    wpt()
        .env("WPT__ACCESS__PLATFORM_PREFIXES", "/painel,/parceiros-admin")
        .args(["--config", config, "login", "/painel/eventos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"platform\": true"))
        .stdout(predicate::str::contains("\"login\": \"/viajar/login\""));

    // The list replaces the default prefixes.
    wpt()
        .env("WPT__ACCESS__PLATFORM_PREFIXES", "/painel,/parceiros-admin")
        .args(["--config", config, "login", "/viajar/precos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"platform\": false"))
        .stdout(predicate::str::contains("\"login\": \"/descubrams/login\""));
    Ok(())
}

#[test]
fn missing_config_file_fails() {
    wpt()
        .args(["--config", "/nonexistent/wpt.toml", "tenants"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn no_arguments_prints_help() {
    wpt().assert().failure().stderr(predicate::str::contains("Usage"));
}
