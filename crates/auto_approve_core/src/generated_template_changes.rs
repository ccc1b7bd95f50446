//! Auto-approve policy for generator-produced template changes.

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;

use crate::author_check::AuthorCheck;
use crate::body_check::BodyCheck;
use crate::check::CheckRule;
use crate::errors::Error;
use crate::language_rule::LanguageRule;
use crate::library_type_check::LibraryTypeCheck;
use crate::title_check::TitleCheck;
use github_client::RepositoryContentReader;

#[cfg(test)]
#[path = "generated_template_changes_tests.rs"]
mod tests;

/// Approves a template regeneration pushed by the API generator bot. The
/// title must opt in with the `[autoapprove]` tag and must not claim any
/// behavioral change; provenance and library type are checked the same way
/// as for API surface changes.
pub struct GeneratedTemplateChanges {
    checks: Vec<Box<dyn CheckRule>>,
}

impl GeneratedTemplateChanges {
    pub fn new(content_reader: Arc<dyn RepositoryContentReader>) -> Result<Self, Error> {
        let checks: Vec<Box<dyn CheckRule>> = vec![
            Box::new(TitleCheck::new(Regex::new(r"\[autoapprove\]")?)),
            Box::new(TitleCheck::inverted(Regex::new(r"(fix|feat|!)")?)),
            Box::new(AuthorCheck::new(["api-generator[bot]"])),
            Box::new(BodyCheck::new(Regex::new(r"Provenance-RevId")?)),
            Box::new(LibraryTypeCheck::new(content_reader, ["GENERATED_AUTO"])),
        ];

        Ok(Self { checks })
    }
}

#[async_trait]
impl LanguageRule for GeneratedTemplateChanges {
    fn name(&self) -> &'static str {
        "generatedTemplateChanges"
    }

    fn checks(&self) -> &[Box<dyn CheckRule>] {
        &self.checks
    }
}
