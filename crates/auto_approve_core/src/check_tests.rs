use super::*;

#[test]
fn test_pr_wide_result_has_no_scope() {
    let result = CheckResult::new("authorshipMatches", true);
    assert_eq!(result.name, "authorshipMatches");
    assert!(result.status);
    assert_eq!(result.scope, None);
}

#[test]
fn test_scoped_result_carries_filename() {
    let result = CheckResult::scoped("isVersionValid", false, "package.json");
    assert_eq!(result.scope.as_deref(), Some("package.json"));
    assert!(!result.status);
}

#[test]
fn test_scope_is_omitted_from_serialized_pr_wide_results() {
    let result = CheckResult::new("titleMatches", true);
    let serialized = serde_json::to_string(&result).expect("Failed to serialize");
    assert!(!serialized.contains("scope"));

    let scoped = CheckResult::scoped("oneDependencyChanged", true, "pom.xml");
    let serialized = serde_json::to_string(&scoped).expect("Failed to serialize");
    assert!(serialized.contains(r#""scope":"pom.xml""#));
}
