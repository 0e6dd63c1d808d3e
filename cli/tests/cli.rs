//! End-to-end tests for the orbit binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any route table on the machine
fn orbit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("orbit").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("ORBIT_CONFIG");
    cmd
}

#[test]
fn test_routes_builtin_table() {
    let dir = TempDir::new().unwrap();

    orbit(&dir)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in planets table"))
        .stdout(predicate::str::contains("/planetbuilder"))
        .stdout(predicate::str::contains("SortingGameView"));
}

#[test]
fn test_routes_json() {
    let dir = TempDir::new().unwrap();

    let output = orbit(&dir).args(["routes", "--json"]).output().unwrap();
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table["routes"].as_array().map(Vec::len), Some(7));
    assert_eq!(table["routes"][2]["name"], "PlanetMatch");
}

#[test]
fn test_resolve() {
    let dir = TempDir::new().unwrap();

    orbit(&dir)
        .args(["resolve", "/wordsearch"])
        .assert()
        .success()
        .stdout("/wordsearch\tWordSearch\tWordSearchView\n");

    orbit(&dir)
        .args(["resolve", "PlanetFacts"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/facts\t"));

    orbit(&dir)
        .args(["resolve", "/pluto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route matches '/pluto'"));
}

#[test]
fn test_visit_sequence() {
    let dir = TempDir::new().unwrap();

    orbit(&dir)
        .args(["visit", "/about", "/missing", "back", "back", "forward"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Who made this and why."))
        .stdout(predicate::str::contains("Nothing lives at '/missing'."))
        .stdout(predicate::str::contains("Nothing to go back to"));
}

#[test]
fn test_custom_table_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("orbit.json"),
        r#"{
            "base": "/app",
            "routes": [
                { "path": "/", "name": "Home", "view": "HomeView" },
                { "path": "/moon", "name": "Moon", "view": "MoonView" }
            ]
        }"#,
    )
    .unwrap();

    orbit(&dir)
        .args(["--start", "/app/moon", "visit", "current", "back"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/moon (Moon) -> MoonView"))
        .stdout(predicate::str::contains("no page registered for view 'MoonView'"))
        .stdout(predicate::str::contains("Nothing to go back to"));
}

#[test]
fn test_duplicate_route_aborts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(
        &path,
        r#"{ "routes": [
            { "path": "/", "name": "Home", "view": "HomeView" },
            { "path": "/", "name": "Start", "view": "HomeView" }
        ] }"#,
    )
    .unwrap();

    orbit(&dir)
        .arg("--config")
        .arg(&path)
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid route table"));
}

#[test]
fn test_interactive_shell() {
    let dir = TempDir::new().unwrap();

    orbit(&dir)
        .write_stdin("PlanetBuilder\nhistory\nbogus command here\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Build your own planet."))
        .stdout(predicate::str::contains("*  2. /planetbuilder (PlanetBuilder)"))
        .stdout(predicate::str::contains("Unknown command: bogus command here"));
}

#[test]
fn test_working_dir_table() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(
        project.join("orbit.json"),
        r#"{ "routes": [ { "path": "/", "name": "Lobby", "view": "LobbyView" } ] }"#,
    )
    .unwrap();

    orbit(&dir)
        .arg("--working-dir")
        .arg(&project)
        .args(["resolve", "Lobby"])
        .assert()
        .success()
        .stdout("/\tLobby\tLobbyView\n");
}
