use crate::core::models::ProbeFailure;

/// Result of probing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Validated(String),
    Failed(ProbeFailure),
}

/// What the validator pool collected before it stopped listening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub validated_urls: Vec<String>,
    pub failures: Vec<ProbeFailure>,
    pub abandoned: usize,
}

impl ValidationSummary {
    pub fn with_capacity(candidate_count: usize) -> Self {
        Self {
            validated_urls: Vec::with_capacity(candidate_count),
            failures: Vec::with_capacity(candidate_count),
            abandoned: 0,
        }
    }

    pub fn record(&mut self, outcome: ValidationOutcome) {
        match outcome {
            ValidationOutcome::Validated(url) => self.validated_urls.push(url),
            ValidationOutcome::Failed(failure) => self.failures.push(failure),
        }
    }

    pub fn received(&self) -> usize {
        self.validated_urls.len() + self.failures.len()
    }
}
