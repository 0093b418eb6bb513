mod common;
use common::{assert_success, duffman_cmd, fixture, parse_json, stderr, stdout};

fn show(name: &str, extra: &[&str]) -> std::process::Output {
    let collection = fixture("collection.json");
    let mut args = vec!["request", "show", "-f", collection.as_str(), "-n", name, "-o", "json"];
    args.extend_from_slice(extra);
    duffman_cmd().args(&args).output().unwrap()
}

#[test]
fn test_show_uses_collection_variables() {
    let details = parse_json(&show("health", &[]));

    assert_eq!(details["Request"], "health");
    assert_eq!(details["Method"], "GET");
    assert_eq!(details["URL"], "http://collection.local/health?");
    assert!(details.get("Unresolved").is_none());
}

#[test]
fn test_environment_overrides_collection() {
    let env = fixture("environment.json");
    let details = parse_json(&show("pets/list pets", &["-e", &env]));

    assert_eq!(details["Request"], "pets/list pets");
    assert_eq!(details["URL"], "http://env.local/v1/pets?limit=10&");
    assert_eq!(details["Headers"]["Accept"], "application/json");
}

#[test]
fn test_cli_variable_overrides_environment() {
    let env = fixture("environment.json");
    let details = parse_json(&show(
        "health",
        &["-e", &env, "-v", "baseUrl=http://cli.local"],
    ));
    assert_eq!(details["URL"], "http://cli.local/health?");
}

#[test]
fn test_path_parameter() {
    let details = parse_json(&show("pets/get pet", &["-v", "petId=7"]));
    assert_eq!(details["URL"], "http://collection.local/v1/pets/7?");
}

#[test]
fn test_unresolved_placeholders_are_reported() {
    // petId is disabled in the environment file.
    let env = fixture("environment.json");
    let output = show("pets/get pet", &["-e", &env]);
    let details = parse_json(&output);

    assert_eq!(details["URL"], "http://env.local/v1/pets/{{petId}}?");
    assert_eq!(details["Unresolved"], serde_json::json!(["petId"]));
    assert!(stderr(&output).contains("petId"), "{}", stderr(&output));
}

#[test]
fn test_nested_request_with_body() {
    let env = fixture("environment.json");
    let details = parse_json(&show(
        "pets/admin/create pet",
        &["-e", &env, "-v", "petName=Rex"],
    ));

    assert_eq!(details["Method"], "POST");
    assert_eq!(details["Headers"]["Authorization"], "Bearer abc");
    assert_eq!(details["Body"], r#"{"name": "Rex"}"#);
    assert_eq!(details["ContentType"], "application/json");
}

#[test]
fn test_form_parameters() {
    let details = parse_json(&show("login", &["-v", "user=admin"]));

    assert_eq!(details["Form"]["user"], "admin");
    assert_eq!(details["Form"]["pass"], "secret");
    assert_eq!(
        details["ContentType"],
        "application/x-www-form-urlencoded"
    );
}

#[test]
fn test_show_text_output() {
    let output = duffman_cmd()
        .args([
            "request",
            "show",
            "-f",
            &fixture("collection.json"),
            "-n",
            "pets/admin/create pet",
            "-v",
            "token=t0k",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("Request: pets/admin/create pet\n"), "{out}");
    assert!(out.contains("Method: POST\n"));
    assert!(out.contains("Headers:\n  Authorization: Bearer t0k\n"));
    assert!(out.contains("Unresolved:\n  - petName\n"));
}

#[test]
fn test_listed_path_with_slash_and_spaced_variable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.json");
    std::fs::write(
        &path,
        r#"{
            "info": {"name": "routes"},
            "item": [{"name": "users", "item": [
                {"name": "GET /users/:id", "request": {
                    "method": "GET",
                    "url": {"raw": "{{base url}}/users/:id", "variable": [{"key": "id", "value": "7"}]}
                }}
            ]}]
        }"#,
    )
    .unwrap();
    let collection = path.to_str().unwrap();

    let listing = parse_json(
        &duffman_cmd()
            .args(["request", "list", "-f", collection, "-o", "json"])
            .output()
            .unwrap(),
    );
    let listed = listing[1]["path"].as_str().unwrap().to_string();
    assert_eq!(listed, "users/GET /users/:id");

    let details = parse_json(
        &duffman_cmd()
            .args([
                "request",
                "show",
                "-f",
                collection,
                "-n",
                &listed,
                "-v",
                "base url=http://routes.local",
                "-o",
                "json",
            ])
            .output()
            .unwrap(),
    );
    assert_eq!(details["Request"], "users/GET /users/:id");
    assert_eq!(details["URL"], "http://routes.local/users/7?");
}
