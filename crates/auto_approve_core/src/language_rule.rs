//! Composition of checks into a per-policy verdict.

use async_trait::async_trait;
use tracing::info;

use crate::check::{CheckResult, CheckRule};
use crate::pull_request::PullRequest;

#[cfg(test)]
#[path = "language_rule_tests.rs"]
mod tests;

/// The ordered check results of one evaluation plus the aggregate verdict.
///
/// Kept around after evaluation so the decision layer can log exactly which
/// named check failed, and on which file, alongside the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEvaluation {
    results: Vec<CheckResult>,
}

impl RuleEvaluation {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// The closed-world verdict: true iff at least one check produced a
    /// result and every result passed. An evaluation in which nothing was
    /// verified must never count as approval.
    pub fn approved(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|result| result.status)
    }

    /// The results in evaluation order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<CheckResult> {
        self.results
    }
}

/// One auto-approve policy: a fixed set of atomic checks plus a
/// policy-specific additional-checks step.
///
/// Both collections are fixed at construction. Evaluation runs every atomic
/// check (a failing check does not short-circuit the rest, so the audit
/// trail is always complete), then the additional checks, and reduces the
/// accumulated results to a single verdict. Each result is computed once
/// per evaluation; there are no retries and no externally observable
/// intermediate state.
#[async_trait]
pub trait LanguageRule: Send + Sync {
    /// Stable policy name, used in audit logs and by the dispatcher.
    fn name(&self) -> &'static str;

    /// The atomic checks this policy runs against the full pull request.
    fn checks(&self) -> &[Box<dyn CheckRule>];

    /// Policy-specific checks run after the atomic checks. The default is
    /// a no-op for policies fully described by their atomic checks.
    async fn additional_checks(&self, pull_request: &PullRequest) -> Vec<CheckResult> {
        let _ = pull_request;
        Vec::new()
    }

    /// Runs the full evaluation and returns the ordered results.
    async fn evaluate(&self, pull_request: &PullRequest) -> RuleEvaluation {
        let mut results = Vec::new();
        for check in self.checks() {
            results.extend(check.check_pr(pull_request).await);
        }
        results.extend(self.additional_checks(pull_request).await);

        for result in &results {
            info!(
                rule = self.name(),
                pr_number = pull_request.pr_number,
                check = %result.name,
                status = result.status,
                scope = result.scope.as_deref().unwrap_or_default(),
                "Check evaluated"
            );
        }

        RuleEvaluation::new(results)
    }

    /// Runs the full evaluation and reduces it to the pass/fail verdict.
    async fn check_pr(&self, pull_request: &PullRequest) -> bool {
        self.evaluate(pull_request).await.approved()
    }
}
