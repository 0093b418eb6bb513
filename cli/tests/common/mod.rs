#![allow(dead_code)]
use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn duffman_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_duffman"));
    cmd.env_remove("DUFFMAN_LOG");
    cmd
}

pub fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);
    path.display().to_string()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed with {:?}: {}",
        output.status.code(),
        stderr(output)
    );
}

pub fn parse_json(output: &Output) -> Value {
    assert_success(output);
    serde_json::from_str(&stdout(output))
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", stdout(output)))
}

/// Every key of `expected` must be present in `actual` with a matching value.
/// The string `{{*}}` matches anything.
pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => exp_map
            .iter()
            .all(|(k, v)| act_map.get(k).is_some_and(|a| json_subset(v, a))),
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr.iter().zip(act_arr).all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        _ => expected == actual,
    }
}
