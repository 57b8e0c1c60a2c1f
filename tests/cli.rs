//! Integration tests driving the compiled binary.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

fn binary_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rupley"))
}

fn run_with_stdin(args: &[&str], stdin_data: &str) -> Value {
    let mut child = binary_command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run binary");

    child
        .stdin
        .as_mut()
        .expect("stdin was not piped")
        .write_all(stdin_data.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait for binary");
    assert!(output.status.success(), "binary exited with failure");

    let stdout = std::str::from_utf8(&output.stdout).expect("stdout was not UTF-8");
    serde_json::from_str(stdout).expect("failed to parse JSON output")
}

#[test]
fn computes_areas_for_xyzr_on_stdin() {
    let json = run_with_stdin(&["--quiet"], "0.0 0.0 0.0 1.5\n3.0 0.0 0.0 1.5\n");

    assert_eq!(json["atom_count"], 2);
    assert_eq!(json["ignored_count"], 0);
    assert_eq!(json["sample_points"], 960);

    let areas = json["areas"].as_array().expect("areas array");
    assert_eq!(areas.len(), 2);
    for area in areas {
        let area = area.as_f64().expect("numeric area");
        assert!(area > 0.0);
    }

    let total = json["total_area"].as_f64().expect("numeric total");
    let sum: f64 = areas.iter().filter_map(Value::as_f64).sum();
    assert!((total - sum).abs() < 1e-9);
}

#[test]
fn ignored_atoms_serialize_as_null() {
    let json = run_with_stdin(&["--quiet"], "0 0 0 1.5\n2 0 0 -1.0\n");

    assert_eq!(json["atom_count"], 2);
    assert_eq!(json["ignored_count"], 1);
    assert!(json["areas"][1].is_null());
    assert!(json["accessible_points"][1].is_null());

    // The ignored atom must not have shaded its neighbor.
    assert_eq!(json["accessible_points"][0], 960);
}

#[test]
fn sample_point_override_is_honored() {
    let json = run_with_stdin(&["--quiet", "--sample-points", "120"], "0 0 0 1.5\n");
    assert_eq!(json["sample_points"], 120);
    assert_eq!(json["accessible_points"][0], 120);
}

#[test]
fn malformed_input_fails() {
    let mut child = binary_command()
        .args(["--quiet"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"this is not xyzr\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
}
