//! Runs the `habitable` binary against temporary input files

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SYSTEM: &str = r#"{
    "name": "Sun", "mass": 1.0, "radius": 1.0, "age": 4.6,
    "luminosity": 1.0, "temperature": 5778.0, "spectral_type": "G2V",
    "planets": [
        {"name": "Earth", "mass": 1.0, "radius": 1.0, "age": 4.5,
         "orbital_distance": 1.0, "eccentricity": 0.0}
    ]
}"#;

fn habitable(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_habitable"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn zone_for_preset() {
    let dir = tempfile::tempdir().unwrap();
    let output = habitable(dir.path(), &["--no-cache", "zone", "--preset", "g2v"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Conservative zone: 0.9503 - 1.6761 AU"), "{}", text);
}

#[test]
fn zone_json_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let output = habitable(
        dir.path(),
        &["--no-cache", "zone", "--luminosity", "4.0", "--json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let inner = value["classic"]["inner"].as_f64().unwrap();
    assert!((inner - (4.0_f64 / 1.1).sqrt()).abs() < 1e-9);
}

#[test]
fn invalid_star_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = habitable(dir.path(), &["--no-cache", "zone", "--activity", "1.5"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("activity"), "{}", stderr);
}

#[test]
fn report_writes_cache() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("system.json"), SYSTEM).unwrap();

    let output = habitable(dir.path(), &["report", "system.json", "--json", "--track", "8"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["planets"][0]["name"], "Earth");
    assert_eq!(report["planets"][0]["track"].as_array().unwrap().len(), 8);

    let cached = fs::read_to_string(dir.path().join("cache/simulation_data.json")).unwrap();
    let cached: serde_json::Value = serde_json::from_str(&cached).unwrap();
    assert!(cached.get("report:Sun").is_some());
}

#[test]
fn no_cache_leaves_disk_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("system.json"), SYSTEM).unwrap();

    let output = habitable(dir.path(), &["--no-cache", "report", "system.json"]);
    assert!(output.status.success());
    assert!(!dir.path().join("cache").exists());
}

#[test]
fn orbit_position() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("system.json"), SYSTEM).unwrap();

    let output = habitable(
        dir.path(),
        &["--no-cache", "orbit", "system.json", "--planet", "Earth", "--time", "0"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("(1.000000, 0.000000, 0.000000) AU"));

    let missing = habitable(
        dir.path(),
        &["--no-cache", "orbit", "system.json", "--planet", "Vulcan"],
    );
    assert!(!missing.status.success());
}

#[test]
fn synthetic_galaxy_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let args = ["--no-cache", "galaxy", "--synthetic", "200", "--seed", "7", "--habitable", "--json"];

    let first = habitable(dir.path(), &args);
    let second = habitable(dir.path(), &args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stars: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    for star in stars.as_array().unwrap() {
        let mass = star["mass"].as_f64().unwrap();
        assert!((0.8..=1.2).contains(&mass));
    }
}

#[test]
fn missing_config_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = habitable(
        dir.path(),
        &["--config", "absent.json", "--no-cache", "zone"],
    );
    assert!(output.status.success());
}

#[test]
fn malformed_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.json"), "{ nope").unwrap();
    let output = habitable(dir.path(), &["--config", "config.json", "zone"]);
    assert!(!output.status.success());
}
