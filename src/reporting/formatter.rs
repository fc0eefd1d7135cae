use console::style;
use crate::compare::ComparisonResult;
use crate::errors::PlagError;
use crate::similarity::{DiffSpan, ScoreBreakdown, SpanTag};
use crate::utils::{format_chars, format_percent};

/// Results at or above `threshold` are highlighted as likely plagiarism.
pub fn format_results_table(results: &[ComparisonResult], threshold: f64) -> String {
    let width = results
        .iter()
        .map(|r| r.file_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("FILE".len());

    let mut out = format!("{:<width$}  {:>9}  NOTE\n", "FILE", "SCORE", width = width);
    for r in results {
        let percent = format!("{:>9}", format_percent(r.plagiarism));
        let (percent, mut note) = if r.self_match {
            (style(percent).dim().to_string(), "self".to_string())
        } else if let Some(err) = &r.error {
            (style(percent).yellow().to_string(), format!("unreadable: {}", err))
        } else if r.score_or_zero() >= threshold {
            (style(percent).red().bold().to_string(), "flagged".to_string())
        } else {
            (percent, String::new())
        };
        if r.approximate {
            if !note.is_empty() {
                note.push_str(", ");
            }
            note.push_str("approximate");
        }
        out.push_str(&format!("{:<width$}  {}  {}", r.file_name, percent, note, width = width));
        out.push('\n');
    }
    out
}

pub fn format_summary(results: &[ComparisonResult], threshold: f64) -> String {
    let scored: Vec<&ComparisonResult> = results
        .iter()
        .filter(|r| !r.self_match && r.error.is_none())
        .collect();
    let flagged = scored.iter().filter(|r| r.score_or_zero() >= threshold).count();
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let highest = scored
        .iter()
        .max_by(|a, b| a.score_or_zero().total_cmp(&b.score_or_zero()));

    let mut summary = format!(
        "{} files compared, {} at or above {:.0}%",
        scored.len(),
        flagged,
        threshold
    );
    if failed > 0 {
        summary.push_str(&format!(", {} unreadable", failed));
    }
    if let Some(top) = highest {
        summary.push_str(&format!(
            " (highest: {} at {})",
            top.file_name,
            format_percent(top.plagiarism)
        ));
    }
    summary
}

pub fn format_results_json(results: &[ComparisonResult]) -> Result<String, PlagError> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let line = format!(
        "{} ({} of {} matched)",
        format_percent(Some(breakdown.score)),
        format_chars(breakdown.equal_chars),
        format_chars(breakdown.total_chars),
    );
    if breakdown.approximate {
        format!("{line}, approximate: diff deadline expired")
    } else {
        line
    }
}

/// Inline rendering of diff spans: `[-deleted-]`, `{+inserted+}`.
pub fn format_spans(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .map(|span| match span.tag {
            SpanTag::Equal => span.text.clone(),
            SpanTag::Deleted => style(format!("[-{}-]", span.text)).red().to_string(),
            SpanTag::Inserted => style(format!("{{+{}+}}", span.text)).green().to_string(),
        })
        .collect()
}
