use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffTag, TextDiff, TextDiffConfig};
use tracing::debug;

use super::normalizer::normalize;
use super::spans::{self, DiffSpan, SpanTag};
use crate::config::ScoringConfig;

/// Sequence-alignment algorithm driving the diff.
///
/// Both support deadlines. LCS is not offered: its table is O(N*M) in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(value: DiffAlgorithm) -> Self {
        match value {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
        }
    }
}

impl std::fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiffAlgorithm::Myers => "myers",
            DiffAlgorithm::Patience => "patience",
        };
        f.write_str(name)
    }
}

pub const DEFAULT_DIFF_TIMEOUT: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub equal_chars: usize,
    pub total_chars: usize,
    /// Normalized texts were identical and non-empty; no diff was run.
    pub identical: bool,
    /// A diff deadline expired, so shared text may be under-counted.
    pub approximate: bool,
}

/// Directional similarity scorer.
///
/// The score is the share of the *candidate's* normalized chars covered by
/// spans the diff marks equal, so `score(a, b)` and `score(b, a)` generally
/// differ. Scoring is pure and never fails.
///
/// Texts are aligned line by line first; only the changed hunks get a
/// char-level diff. Each diff gets its own deadline, so an expired one
/// coarsens a single hunk rather than the whole file.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    algorithm: DiffAlgorithm,
    timeout: Option<Duration>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Myers,
            timeout: Some(DEFAULT_DIFF_TIMEOUT),
        }
    }
}

struct Alignment {
    spans: Vec<DiffSpan>,
    approximate: bool,
}

impl Scorer {
    /// `timeout` bounds each individual diff.
    pub fn new(algorithm: DiffAlgorithm, timeout: Option<Duration>) -> Self {
        Self { algorithm, timeout }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(
            config.algorithm,
            config.timeout_ms.map(Duration::from_millis),
        )
    }

    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }

    pub fn score(&self, reference: &str, candidate: &str) -> f64 {
        self.breakdown(reference, candidate).score
    }

    pub fn breakdown(&self, reference: &str, candidate: &str) -> ScoreBreakdown {
        let reference = normalize(reference);
        let candidate = normalize(candidate);
        let total_chars = candidate.chars().count();

        if !candidate.is_empty() && reference == candidate {
            return ScoreBreakdown {
                score: 100.0,
                equal_chars: total_chars,
                total_chars,
                identical: true,
                approximate: false,
            };
        }

        if total_chars == 0 {
            return ScoreBreakdown {
                score: 0.0,
                equal_chars: 0,
                total_chars: 0,
                identical: false,
                approximate: false,
            };
        }

        let alignment = self.align(&reference, &candidate);
        let equal_chars = spans::equal_chars(&alignment.spans);
        if alignment.approximate {
            debug!(total_chars, equal_chars, "Diff deadline expired");
        }
        ScoreBreakdown {
            score: percentage(equal_chars, total_chars),
            equal_chars,
            total_chars,
            identical: false,
            approximate: alignment.approximate,
        }
    }

    /// Classified spans transforming normalized `reference` into normalized
    /// `candidate`. Adjacent spans never share a tag.
    pub fn diff(&self, reference: &str, candidate: &str) -> Vec<DiffSpan> {
        let reference = normalize(reference);
        let candidate = normalize(candidate);
        self.align(&reference, &candidate).spans
    }

    fn align(&self, reference: &str, candidate: &str) -> Alignment {
        let deadline = self.deadline();
        let lines = self.configure(deadline).diff_lines(reference, candidate);
        let mut approximate = expired(deadline);

        let old = lines.old_slices();
        let new = lines.new_slices();
        let mut spans: Vec<DiffSpan> = Vec::with_capacity(lines.ops().len());
        let mut old_hunk = String::new();
        let mut new_hunk = String::new();

        for op in lines.ops() {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            if matches!(tag, DiffTag::Equal) {
                approximate |= self.align_hunk(&old_hunk, &new_hunk, &mut spans);
                old_hunk.clear();
                new_hunk.clear();
                push_span(&mut spans, SpanTag::Equal, &new[new_range]);
            } else {
                old_hunk.extend(old[old_range].iter().copied());
                new_hunk.extend(new[new_range].iter().copied());
            }
        }
        approximate |= self.align_hunk(&old_hunk, &new_hunk, &mut spans);

        Alignment { spans, approximate }
    }

    /// Char-level diff of one changed hunk. Returns whether its deadline expired.
    fn align_hunk(&self, reference: &str, candidate: &str, spans: &mut Vec<DiffSpan>) -> bool {
        if reference.is_empty() || candidate.is_empty() {
            push_span(spans, SpanTag::Deleted, &[reference]);
            push_span(spans, SpanTag::Inserted, &[candidate]);
            return false;
        }

        let deadline = self.deadline();
        let diff = self.configure(deadline).diff_chars(reference, candidate);
        let old = diff.old_slices();
        let new = diff.new_slices();
        for op in diff.ops() {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => push_span(spans, SpanTag::Equal, &new[new_range]),
                DiffTag::Delete => push_span(spans, SpanTag::Deleted, &old[old_range]),
                DiffTag::Insert => push_span(spans, SpanTag::Inserted, &new[new_range]),
                DiffTag::Replace => {
                    push_span(spans, SpanTag::Deleted, &old[old_range]);
                    push_span(spans, SpanTag::Inserted, &new[new_range]);
                }
            }
        }
        expired(deadline)
    }

    fn deadline(&self) -> Option<Instant> {
        self.timeout.map(|timeout| Instant::now() + timeout)
    }

    fn configure(&self, deadline: Option<Instant>) -> TextDiffConfig {
        let mut config = TextDiff::configure();
        config.algorithm(self.algorithm.into());
        if let Some(deadline) = deadline {
            config.deadline(deadline);
        }
        config
    }
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

fn push_span(spans: &mut Vec<DiffSpan>, tag: SpanTag, chars: &[&str]) {
    if chars.iter().all(|c| c.is_empty()) {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.tag == tag => last.text.extend(chars.iter().copied()),
        _ => spans.push(DiffSpan::new(tag, chars.concat())),
    }
}

fn percentage(equal_chars: usize, total_chars: usize) -> f64 {
    let percent = equal_chars as f64 / total_chars as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Scores `candidate` against `reference` with the default scorer.
pub fn score(reference: &str, candidate: &str) -> f64 {
    Scorer::default().score(reference, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::spans::{equal_chars, reconstruct_candidate, reconstruct_reference};

    #[test]
    fn test_identical_is_exactly_100() {
        assert_eq!(score("The quick brown fox", "The quick brown fox"), 100.0);
        let b = Scorer::default().breakdown("x\ny", "x\ny");
        assert!(b.identical);
    }

    #[test]
    fn test_identity_after_normalization() {
        assert_eq!(score("line1\nline2", "line1  \n  line2\n\n"), 100.0);
        assert_eq!(score("a\r\nb\r\n", "a\nb"), 100.0);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        assert_eq!(score("anything", ""), 0.0);
        assert_eq!(score("", ""), 0.0);
        assert_eq!(score("abc", " \n\t\n"), 0.0);
    }

    #[test]
    fn test_empty_reference_scores_zero() {
        assert_eq!(score("", "abc"), 0.0);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(score("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_shared_prefix_fraction() {
        let b = Scorer::default().breakdown("foo\nbar\nbaz", "foo\nbar\nqux");
        assert_eq!(b.equal_chars, 8);
        assert_eq!(b.total_chars, 11);
        assert!((b.score - 72.727).abs() < 0.01, "got {}", b.score);
    }

    #[test]
    fn test_asymmetric() {
        let superset = "x\ny\nz";
        let subset = "x";
        assert_eq!(score(superset, subset), 100.0);
        assert!((score(subset, superset) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_invariant() {
        let pairs = [
            ("", "a"),
            ("abc", "abcabcabc"),
            ("fn main() {}", "fn  main ( ) { }"),
            ("héllo wörld", "hello world"),
            ("日本語のテキスト", "日本語"),
            ("a\nb\nc\nd", "d\nc\nb\na"),
        ];
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience] {
            let scorer = Scorer::new(algorithm, None);
            for (a, b) in pairs {
                for s in [scorer.score(a, b), scorer.score(b, a)] {
                    assert!((0.0..=100.0).contains(&s), "{algorithm}: {a:?} vs {b:?} -> {s}");
                }
            }
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 'é' is two bytes; a byte count would give 3/4 here.
        let b = Scorer::default().breakdown("éa", "éb");
        assert_eq!(b.total_chars, 2);
        assert_eq!(b.equal_chars, 1);
        assert_eq!(b.score, 50.0);
    }

    #[test]
    fn test_diff_spans_reconstruct_inputs() {
        let scorer = Scorer::default();
        let reference = "foo\nbar\nbaz";
        let candidate = "foo\nbar\nqux\nextra";
        let spans = scorer.diff(reference, candidate);
        assert_eq!(reconstruct_reference(&spans), normalize(reference));
        assert_eq!(reconstruct_candidate(&spans), normalize(candidate));
        assert_eq!(equal_chars(&spans), scorer.breakdown(reference, candidate).equal_chars);
        for pair in spans.windows(2) {
            assert_ne!(pair[0].tag, pair[1].tag);
        }
    }

    fn essay(lines: usize, edit_every: usize) -> (String, String) {
        let mut reference = String::new();
        let mut candidate = String::new();
        for i in 0..lines {
            let line = format!("sentence number {i} of the essay body\n");
            reference.push_str(&line);
            if edit_every > 0 && i % edit_every == 0 {
                candidate.push_str(&format!("sentence number {i} of the essay, reworded\n"));
            } else {
                candidate.push_str(&line);
            }
        }
        (reference, candidate)
    }

    #[test]
    fn test_large_edited_copy_scores_high_within_default_deadline() {
        let (reference, candidate) = essay(2700, 5);
        assert!(reference.len() >= 100_000, "fixture is {} bytes", reference.len());

        let b = Scorer::default().breakdown(&reference, &candidate);
        assert!(!b.approximate);
        assert!(b.score > 80.0, "got {}", b.score);

        let unbounded = Scorer::new(DiffAlgorithm::Myers, None).breakdown(&reference, &candidate);
        assert_eq!(b.equal_chars, unbounded.equal_chars);
    }

    #[test]
    fn test_expired_deadline_is_flagged() {
        let (reference, candidate) = essay(200, 3);
        let scorer = Scorer::new(DiffAlgorithm::Myers, Some(Duration::from_nanos(1)));
        let b = scorer.breakdown(&reference, &candidate);
        assert!(b.approximate);
        assert!((0.0..=100.0).contains(&b.score), "got {}", b.score);

        let spans = scorer.diff(&reference, &candidate);
        assert_eq!(reconstruct_reference(&spans), normalize(&reference));
        assert_eq!(reconstruct_candidate(&spans), normalize(&candidate));
    }

    #[test]
    fn test_shortcuts_are_never_approximate() {
        let scorer = Scorer::new(DiffAlgorithm::Myers, Some(Duration::from_nanos(1)));
        assert!(!scorer.breakdown("same", "same").approximate);
        assert!(!scorer.breakdown("text", "").approximate);
    }

    #[test]
    fn test_unchanged_lines_count_in_full() {
        // Only the middle line differs; its shared prefix still counts.
        let b = Scorer::default().breakdown("alpha\nbeta\ngamma", "alpha\nbetter\ngamma");
        assert_eq!(b.total_chars, 18);
        assert_eq!(b.equal_chars, "alpha\n".len() + "bet\n".len() + "gamma".len());
    }

    #[test]
    fn test_diff_of_normalized_inputs() {
        let spans = Scorer::default().diff("  a  \n\n", "a");
        assert_eq!(spans, vec![DiffSpan::new(SpanTag::Equal, "a")]);
    }

    #[test]
    fn test_from_config() {
        let config = ScoringConfig {
            algorithm: DiffAlgorithm::Patience,
            timeout_ms: None,
            ..Default::default()
        };
        let scorer = Scorer::from_config(&config);
        assert_eq!(scorer.algorithm(), DiffAlgorithm::Patience);
        assert_eq!(scorer.score("same", "same"), 100.0);
    }
}
