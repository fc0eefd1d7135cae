use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, error, info, warn};

use super::policy::{is_self_match, self_match_result};
use super::scanner::{self, Candidate};
use super::types::ComparisonResult;
use crate::config::{PlagConfig, SelfMatchPolicy};
use crate::errors::PlagError;
use crate::similarity::Scorer;

/// Scores a reference file against every regular file in a folder.
///
/// At most `workers` candidates are scored at once. Results come back in
/// directory-listing order regardless of completion order. All work lives
/// inside the returned future: dropping it (a client disconnect, say) stops
/// the batch.
#[derive(Debug, Clone)]
pub struct BatchComparer {
    scorer: Scorer,
    workers: usize,
    max_file_bytes: u64,
    self_match: SelfMatchPolicy,
}

impl BatchComparer {
    pub fn new(
        scorer: Scorer,
        workers: usize,
        max_file_bytes: u64,
        self_match: SelfMatchPolicy,
    ) -> Self {
        Self {
            scorer,
            workers: workers.max(1),
            max_file_bytes,
            self_match,
        }
    }

    pub fn from_config(config: &PlagConfig) -> Self {
        Self::new(
            Scorer::from_config(&config.scoring),
            config.server.effective_workers(),
            config.scoring.max_file_bytes,
            config.policy.self_match,
        )
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Fails only when the reference file or the folder cannot be read.
    /// Unreadable candidates are reported with a zero score and an error.
    pub async fn compare(
        &self,
        reference_path: &Path,
        folder: &Path,
    ) -> Result<Vec<ComparisonResult>, PlagError> {
        let reference = scanner::read_document(reference_path, self.max_file_bytes).await?;
        let reference = Arc::new(reference);
        let reference_base = scanner::base_name(reference_path);
        let candidates = scanner::list_candidates(folder).await?;

        info!(
            reference = %reference_path.display(),
            folder = %folder.display(),
            candidates = candidates.len(),
            workers = self.workers,
            "Starting comparison"
        );

        let outcomes = run_ordered(candidates, self.workers, |candidate| {
            let is_self = is_self_match(&candidate.file_name, reference_base.as_deref());
            let reference = reference.clone();
            async move {
                if is_self {
                    return self_match_result(self.self_match, &candidate.file_name);
                }
                let max_bytes = self.max_file_bytes;
                Some(score_candidate(self.scorer, reference, candidate, max_bytes).await)
            }
        })
        .await;
        let results: Vec<ComparisonResult> = outcomes.into_iter().flatten().collect();

        info!(results = results.len(), "Comparison complete");
        Ok(results)
    }
}

/// Runs `task` over `items` with at most `limit` in flight, yielding outputs
/// in input order. Nothing is spawned, so dropping the future cancels the
/// remaining work.
pub(crate) async fn run_ordered<I, T, F, Fut>(items: I, limit: usize, task: F) -> Vec<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = T>,
{
    futures::stream::iter(items)
        .map(task)
        .buffered(limit.max(1))
        .collect()
        .await
}

async fn score_candidate(
    scorer: Scorer,
    reference: Arc<String>,
    candidate: Candidate,
    max_bytes: u64,
) -> ComparisonResult {
    let Candidate { file_name, path } = candidate;
    let text = match scanner::read_document(&path, max_bytes).await {
        Ok(text) => text,
        Err(e) => {
            warn!(file = %file_name, error = %e, "Unreadable candidate, reporting 0");
            return ComparisonResult::failed(file_name, e.to_string());
        }
    };

    // Diffing is CPU-bound; keep it off the async workers.
    match tokio::task::spawn_blocking(move || scorer.breakdown(&reference, &text)).await {
        Ok(breakdown) => {
            if breakdown.approximate {
                warn!(
                    file = %file_name,
                    score = breakdown.score,
                    "Diff deadline expired, score may be under-counted"
                );
            } else {
                debug!(file = %file_name, score = breakdown.score, "Scored candidate");
            }
            ComparisonResult::scored(file_name, breakdown.score)
                .with_approximate(breakdown.approximate)
        }
        Err(e) => {
            error!(file = %file_name, error = %e, "Scorer panicked");
            ComparisonResult::failed(file_name, "scoring task failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_ordered_keeps_input_order() {
        let delays = [30u64, 1, 15];
        let out = run_ordered(delays, 3, |ms| async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            ms
        })
        .await;
        assert_eq!(out, vec![30, 1, 15]);
    }

    #[tokio::test]
    async fn test_run_ordered_respects_limit() {
        let started = AtomicUsize::new(0);
        let batch = run_ordered(0..10, 2, |_| {
            started.fetch_add(1, Ordering::SeqCst);
            std::future::pending::<()>()
        });
        assert!(tokio::time::timeout(Duration::from_millis(20), batch).await.is_err());
        assert_eq!(started.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_dropped_batch_starts_no_more_work() {
        let started = Arc::new(AtomicUsize::new(0));
        let counter = started.clone();
        let batch = run_ordered(0..10, 2, move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        });
        // Abandoned mid-batch, as a disconnected client's handler would be.
        assert!(tokio::time::timeout(Duration::from_millis(5), batch).await.is_err());
        let at_drop = started.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(started.load(Ordering::SeqCst), at_drop);
        assert!(at_drop < 10);
    }

    #[tokio::test]
    async fn test_run_ordered_zero_limit_still_runs() {
        let out = run_ordered(vec![1, 2], 0, |n| async move { n * 2 }).await;
        assert_eq!(out, vec![2, 4]);
    }
}
