mod common;

use common::*;

#[test]
fn list_shows_prompts_with_editors() {
    let env = TestEnv::with_react_repository();
    env.register_default();

    let result = env.run(&["list"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("mine (default)"), "{}", result.stdout);
    assert!(result.stdout.contains("react v1.0.0 - React rules"));
    assert!(result.stdout.contains("editors: cursor, windsurf"));
    assert!(!result.stdout.contains("files:"));
}

#[test]
fn verbose_list_shows_top_level_files() {
    let env = TestEnv::with_react_repository();
    env.register_default();

    let result = env.run(&["list", "mine", "--verbose"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("files: AGENTS.md, rules/"), "{}", result.stdout);
}

#[test]
fn list_unknown_repository_fails() {
    let env = TestEnv::new();
    let result = env.run(&["list", "ghost"]);
    assert!(!result.success);
    assert!(result.stderr.contains("repository 'ghost' is not registered"));
}

#[test]
fn list_json_reports_prompts() {
    let env = TestEnv::with_react_repository();
    env.register_default();

    let json = env.run(&["list", "--json"]).json();
    assert_eq!(json["repositories"][0]["prompts"][0]["name"], "react");
    assert_eq!(json["repositories"][0]["prompts"][0]["editors"][1], "windsurf");
}
