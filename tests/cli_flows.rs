// Representative end-to-end flows over a realistic config.

mod common;

use common::{parse_json, run_with_config, run_with_fixture};

#[test]
fn flow_python_project_plan() {
    let (stdout, _, exit_code) = run_with_fixture(
        "plan",
        "python-project.yaml",
        &[
            "--json",
            "pkg/core.py",
            "tests/test_core.py",
            "vendor/six.py",
            ".github/workflows/ci.yml",
            "docs/_build/index.html",
        ],
    );
    assert_eq!(exit_code, 0);
    let value = parse_json(&stdout);
    assert_eq!(value["eligible"], 3);

    let hook = |id: &str| {
        value["hooks"]
            .as_array()
            .unwrap()
            .iter()
            .find(|h| h["id"] == id)
            .cloned()
            .unwrap()
    };

    assert_eq!(
        hook("check-yaml")["filenames"],
        serde_json::json!([".github/workflows/ci.yml"])
    );
    assert_eq!(hook("mypy")["filenames"], serde_json::json!(["pkg/core.py"]));
    assert_eq!(hook("mypy")["require_serial"], true);
    assert_eq!(
        hook("black")["args"],
        serde_json::json!(["--line-length=100", "--target-version=py310"])
    );
    assert_eq!(hook("codespell")["status"], "run");
    assert_eq!(hook("codespell")["filenames"], serde_json::json!([]));
}

#[test]
fn flow_fix_duplicate_then_validate() {
    let broken = std::fs::read_to_string(common::fixture_path("duplicate-hook-id.yaml")).unwrap();
    let (_, _, exit_code) = run_with_config("validate", &broken, &[]);
    assert_eq!(exit_code, 1);

    let fixed = broken.replacen("      - id: flake8\n      - id: flake8\n", "      - id: flake8\n", 1);
    let (stdout, _, exit_code) = run_with_config("validate", &fixed, &[]);
    assert_eq!(exit_code, 0, "fixed config:\n{fixed}");
    assert_eq!(stdout.trim(), "ok: 1 repository, 1 hook");
}

#[test]
fn flow_fail_fast_reported_in_plan() {
    let config = "fail_fast: true\nrepos: []\n";
    let (stdout, _, exit_code) = run_with_config("plan", config, &["--json", "a.py"]);
    assert_eq!(exit_code, 0);
    assert_eq!(parse_json(&stdout)["fail_fast"], true);
}
