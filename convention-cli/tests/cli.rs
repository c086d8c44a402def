//! Integration tests for each CLI command's output.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// canonicalize
// ============================================================================

#[test]
fn test_canonicalize_prints_each_path() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["canonicalize", "//a///b", "/already/fine", "x//y/"])
        .assert()
        .success()
        .stdout("/a/b\n/already/fine\nx/y/\n");
}

#[test]
fn test_canonicalize_requires_a_path() {
    let env = TestEnv::new();
    env.command_bare().arg("canonicalize").assert().failure();
}

// ============================================================================
// find
// ============================================================================

#[test]
fn test_find_reports_first_extension_in_priority_order() {
    let env = TestEnv::new();
    env.page("/WEB-INF/content/hello.ftl");
    env.page("/WEB-INF/content/hello.html");

    env.command()
        .args(["find", "//WEB-INF//content/hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found: /WEB-INF/content/hello.ftl (freemarker)"))
        .stdout(predicate::str::contains("/WEB-INF/content/hello.jsp"));
}

#[test]
fn test_find_with_explicit_extensions() {
    let env = TestEnv::new();
    env.page("/a.jsp");
    env.page("/a.vm");

    env.command()
        .args(["find", "/a", "--ext", "vm=velocity", "--ext", "jsp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found: /a.vm (velocity)"));
}

#[test]
fn test_find_json_output() {
    let env = TestEnv::new();
    let file = env.page("/docs/index.html");

    let output = env
        .command()
        .args(["--format", "json", "find", "/docs/index"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["requested"], "/docs/index");
    assert_eq!(report["candidates"].as_array().unwrap().len(), 7);
    assert_eq!(report["resolved"]["path"], "/docs/index.html");
    assert_eq!(report["resolved"]["extension"], "html");
    assert_eq!(report["resolved"]["location"], file.display().to_string());
    assert!(report["resolved"].get("kind").is_none());
}

#[test]
fn test_find_uses_project_extensions() {
    let env = TestEnv::new();
    env.write_project_config("extensions:\n  - extension: txt\n    result_type: plain\n");
    env.page("/notes.txt");

    env.command()
        .args(["find", "/notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found: /notes.txt (plain)"));
}

// ============================================================================
// lookup
// ============================================================================

#[test]
fn test_lookup_result_page() {
    let env = TestEnv::new();
    env.page("/WEB-INF/content/shop/cart-input.ftl");
    env.page("/WEB-INF/content/shop/cart.jsp");

    env.command()
        .args(["lookup", "/shop", "cart", "--result", "input"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "found: /WEB-INF/content/shop/cart-input.ftl (freemarker) [result]",
        ));
}

#[test]
fn test_lookup_action_index() {
    let env = TestEnv::new();
    env.page("/WEB-INF/content/orders/index.vm");

    env.command()
        .args(["lookup", "/", "orders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[index]"))
        .stdout(predicate::str::contains("/WEB-INF/content/orders.jsp"));
}

#[test]
fn test_lookup_honours_result_path_env() {
    let env = TestEnv::new();
    env.page("/pages/about.jsp");

    env.command()
        .env("CONVENTION_RESULT_PATH", "/pages/")
        .args(["lookup", "", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found: /pages/about.jsp (dispatcher) [action]"));
}

// ============================================================================
// extensions
// ============================================================================

#[test]
fn test_extensions_default_order() {
    let env = TestEnv::new();
    let output = env.command().arg("extensions").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let order: Vec<&str> = stdout
        .lines()
        .map(|line| line.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(order, ["jsp", "jspf", "jspx", "vm", "ftl", "html", "htm"]);
}

#[test]
fn test_extensions_json_from_env() {
    let env = TestEnv::new();
    let output = env
        .command()
        .env("CONVENTION_EXTENSIONS", "ftl=freemarker,jsp")
        .env("CONVENTION_OUTPUT_FORMAT", "json")
        .arg("extensions")
        .output()
        .unwrap();

    assert!(output.status.success());
    let list: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        list,
        serde_json::json!([
            {"extension": "ftl", "result_type": "freemarker"},
            {"extension": "jsp", "result_type": "dispatcher"}
        ])
    );
}

// ============================================================================
// validate and completions
// ============================================================================

#[test]
fn test_validate_good_file() {
    let env = TestEnv::new();
    let file = env.write_file(
        "convention.yaml",
        "result_path: /WEB-INF/content/\nextensions:\n  - extension: jsp\n",
    );

    env.command_bare()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("convention"));
}
