//! Lookup from configured policy names to constructed policies.

use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::clock::Clock;
use crate::errors::Error;
use crate::generated_api_changes::GeneratedApiChanges;
use crate::generated_template_changes::GeneratedTemplateChanges;
use crate::java_dependency::JavaDependency;
use crate::language_rule::LanguageRule;
use crate::node_dependency::NodeDependency;
use crate::node_release::NodeRelease;
use crate::python_dependency::PythonDependency;
use crate::python_sample_dependency::PythonSampleDependency;
use github_client::{PullRequestHistoryReader, RepositoryContentReader};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// The policy names accepted in repository configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    NodeDependency,
    NodeRelease,
    JavaDependency,
    PythonDependency,
    PythonSampleDependency,
    GeneratedApiChanges,
    GeneratedTemplateChanges,
}

impl RuleKind {
    /// The configuration spelling of this policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::NodeDependency => "nodeDependency",
            RuleKind::NodeRelease => "nodeRelease",
            RuleKind::JavaDependency => "javaDependency",
            RuleKind::PythonDependency => "pythonDependency",
            RuleKind::PythonSampleDependency => "pythonSampleDependency",
            RuleKind::GeneratedApiChanges => "generatedApiChanges",
            RuleKind::GeneratedTemplateChanges => "generatedTemplateChanges",
        }
    }
}

impl FromStr for RuleKind {
    type Err = Error;

    /// A name outside the known set is a configuration error, not a silent
    /// skip: a typo in a policy name must never make a repository
    /// unapprovable without anyone noticing.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "nodeDependency" => Ok(RuleKind::NodeDependency),
            "nodeRelease" => Ok(RuleKind::NodeRelease),
            "javaDependency" => Ok(RuleKind::JavaDependency),
            "pythonDependency" => Ok(RuleKind::PythonDependency),
            "pythonSampleDependency" => Ok(RuleKind::PythonSampleDependency),
            "generatedApiChanges" => Ok(RuleKind::GeneratedApiChanges),
            "generatedTemplateChanges" => Ok(RuleKind::GeneratedTemplateChanges),
            _ => Err(Error::UnknownRule(name.to_string())),
        }
    }
}

/// The collaborators a policy may need at construction time.
pub struct RuleContext {
    pub content_reader: Arc<dyn RepositoryContentReader>,
    pub history_reader: Arc<dyn PullRequestHistoryReader>,
    pub clock: Arc<dyn Clock>,
}

/// Constructs the policy a configuration name refers to, wiring in the
/// collaborators it needs.
pub fn build_rule(kind: RuleKind, context: &RuleContext) -> Result<Box<dyn LanguageRule>, Error> {
    debug!(rule = kind.as_str(), "Building auto-approve rule");

    let rule: Box<dyn LanguageRule> = match kind {
        RuleKind::NodeDependency => Box::new(NodeDependency::new()?),
        RuleKind::NodeRelease => Box::new(NodeRelease::new(Arc::clone(&context.clock))?),
        RuleKind::JavaDependency => Box::new(JavaDependency::new()?),
        RuleKind::PythonDependency => Box::new(PythonDependency::new()?),
        RuleKind::PythonSampleDependency => Box::new(PythonSampleDependency::new()?),
        RuleKind::GeneratedApiChanges => Box::new(GeneratedApiChanges::new(
            Arc::clone(&context.content_reader),
            Arc::clone(&context.history_reader),
        )?),
        RuleKind::GeneratedTemplateChanges => Box::new(GeneratedTemplateChanges::new(
            Arc::clone(&context.content_reader),
        )?),
    };

    Ok(rule)
}
