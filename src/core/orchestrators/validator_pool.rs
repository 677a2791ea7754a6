use std::sync::Arc;
use std::time::Duration;

use futures::channel::mpsc;
use futures::StreamExt;

use crate::core::interfaces::adapters::ImageProbe;
use crate::core::models::{
    ensure_suffix, image_suffix_from_content_type, ProbeFailure, ValidationOutcome,
    ValidationSummary,
};
use crate::global_constants::LOG_TAG_VALIDATOR;

/// Probes every candidate concurrently and keeps what arrives before the deadline.
pub struct ValidatorPool {
    probe: Arc<dyn ImageProbe>,
    deadline: Duration,
}

impl ValidatorPool {
    pub fn new(probe: Arc<dyn ImageProbe>, deadline: Duration) -> Self {
        Self { probe, deadline }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Spawns one probe task per candidate and collects outcomes until all have
    /// reported or the deadline fires. Late probes are left running; their single
    /// send always has a free slot, so they finish even with nobody listening.
    pub async fn validate(&self, candidates: Vec<String>) -> ValidationSummary {
        let candidate_count = candidates.len();
        let mut summary = ValidationSummary::with_capacity(candidate_count);

        if candidate_count == 0 {
            return summary;
        }

        let deadline = tokio::time::sleep(self.deadline);
        tokio::pin!(deadline);

        let (outcome_sender, mut outcome_receiver) =
            mpsc::channel::<ValidationOutcome>(candidate_count);

        for candidate in candidates {
            let probe = Arc::clone(&self.probe);
            let mut outcome_sender = outcome_sender.clone();

            tokio::spawn(async move {
                let outcome = validate_candidate(probe.as_ref(), &candidate).await;
                if outcome_sender.try_send(outcome).is_err() {
                    log::debug!(
                        "{} Dropping late outcome for {}",
                        LOG_TAG_VALIDATOR,
                        candidate
                    );
                }
            });
        }
        drop(outcome_sender);

        while summary.received() < candidate_count {
            tokio::select! {
                outcome = outcome_receiver.next() => match outcome {
                    Some(outcome) => summary.record(outcome),
                    None => break,
                },
                _ = &mut deadline => {
                    log::warn!(
                        "{} Deadline of {:?} reached with {} of {} probes outstanding",
                        LOG_TAG_VALIDATOR,
                        self.deadline,
                        candidate_count - summary.received(),
                        candidate_count
                    );
                    break;
                }
            }
        }

        summary.abandoned = candidate_count - summary.received();

        log::info!(
            "{} {} validated, {} rejected, {} abandoned",
            LOG_TAG_VALIDATOR,
            summary.validated_urls.len(),
            summary.failures.len(),
            summary.abandoned
        );
        for failure in &summary.failures {
            log::debug!("{} {}", LOG_TAG_VALIDATOR, failure);
        }

        summary
    }
}

async fn validate_candidate(probe: &dyn ImageProbe, candidate: &str) -> ValidationOutcome {
    let report = match probe.probe(candidate).await {
        Ok(report) => report,
        Err(error) => {
            return ValidationOutcome::Failed(ProbeFailure::Request {
                url: candidate.to_string(),
                reason: format!("{:#}", error),
            })
        }
    };

    let content_type = report.content_type.unwrap_or_default();
    let Some(suffix) = image_suffix_from_content_type(&content_type) else {
        return ValidationOutcome::Failed(ProbeFailure::NotAnImage {
            url: candidate.to_string(),
            content_type,
        });
    };

    match ensure_suffix(&report.final_url, &suffix) {
        Ok(image_url) => ValidationOutcome::Validated(image_url),
        Err(failure) => ValidationOutcome::Failed(failure),
    }
}
