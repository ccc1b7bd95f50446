use super::*;
use crate::test_support::base_pr;

struct FixedCheck(&'static str, bool);

#[async_trait]
impl CheckRule for FixedCheck {
    async fn check_pr(&self, _pull_request: &PullRequest) -> Vec<CheckResult> {
        vec![CheckResult::new(self.0, self.1)]
    }
}

struct StubRule {
    checks: Vec<Box<dyn CheckRule>>,
    additional: Vec<CheckResult>,
}

#[async_trait]
impl LanguageRule for StubRule {
    fn name(&self) -> &'static str {
        "stubRule"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }

    async fn additional_checks(&self, _pull_request: &PullRequest) -> Vec<CheckResult> {
        self.additional.clone()
    }
}

#[test]
fn test_empty_result_list_is_never_approved() {
    let evaluation = RuleEvaluation::new(Vec::new());
    assert!(!evaluation.approved());
}

#[test]
fn test_all_passing_results_approve() {
    let evaluation = RuleEvaluation::new(vec![
        CheckResult::new("authorshipMatches", true),
        CheckResult::scoped("isVersionValid", true, "package.json"),
    ]);
    assert!(evaluation.approved());
}

#[test]
fn test_any_failing_result_rejects() {
    let evaluation = RuleEvaluation::new(vec![
        CheckResult::new("authorshipMatches", true),
        CheckResult::new("titleMatches", false),
        CheckResult::new("allowedFileMatches", true),
    ]);
    assert!(!evaluation.approved());
}

#[tokio::test]
async fn test_rule_with_no_checks_returns_false() {
    let rule = StubRule {
        checks: Vec::new(),
        additional: Vec::new(),
    };
    assert!(!rule.check_pr(&base_pr()).await);
}

#[tokio::test]
async fn test_failing_check_does_not_short_circuit_the_rest() {
    let rule = StubRule {
        checks: vec![
            Box::new(FixedCheck("first", false)),
            Box::new(FixedCheck("second", true)),
        ],
        additional: vec![CheckResult::new("third", true)],
    };

    let evaluation = rule.evaluate(&base_pr()).await;
    // All three results are present, in evaluation order.
    let names: Vec<&str> = evaluation.results().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert!(!evaluation.approved());
}

#[tokio::test]
async fn test_additional_checks_alone_can_approve() {
    let rule = StubRule {
        checks: Vec::new(),
        additional: vec![CheckResult::new("isMergedOnWeekDay", true)],
    };
    assert!(rule.check_pr(&base_pr()).await);
}
