use serde::Serialize;

/// Classification of a diff span, relative to reference → candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanTag {
    Equal,
    /// Present only in the candidate.
    Inserted,
    /// Present only in the reference.
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSpan {
    pub tag: SpanTag,
    pub text: String,
}

impl DiffSpan {
    pub fn new(tag: SpanTag, text: impl Into<String>) -> Self {
        Self { tag, text: text.into() }
    }

    /// Length in chars, which is the unit every score is measured in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Total char length of the `Equal` spans.
pub fn equal_chars(spans: &[DiffSpan]) -> usize {
    spans
        .iter()
        .filter(|s| s.tag == SpanTag::Equal)
        .map(DiffSpan::char_len)
        .sum()
}

/// Rebuilds the reference side (Equal + Deleted spans).
#[cfg(test)]
pub(crate) fn reconstruct_reference(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.tag != SpanTag::Inserted)
        .map(|s| s.text.as_str())
        .collect()
}

/// Rebuilds the candidate side (Equal + Inserted spans).
#[cfg(test)]
pub(crate) fn reconstruct_candidate(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.tag != SpanTag::Deleted)
        .map(|s| s.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DiffSpan> {
        vec![
            DiffSpan::new(SpanTag::Equal, "ab"),
            DiffSpan::new(SpanTag::Deleted, "c"),
            DiffSpan::new(SpanTag::Inserted, "xy"),
            DiffSpan::new(SpanTag::Equal, "é"),
        ]
    }

    #[test]
    fn test_equal_chars_counts_chars_not_bytes() {
        assert_eq!(equal_chars(&sample()), 3);
    }

    #[test]
    fn test_reconstruct_sides() {
        let spans = sample();
        assert_eq!(reconstruct_reference(&spans), "abcé");
        assert_eq!(reconstruct_candidate(&spans), "abxyé");
    }

    #[test]
    fn test_span_serializes_snake_case_tag() {
        let json = serde_json::to_value(DiffSpan::new(SpanTag::Inserted, "q")).unwrap();
        assert_eq!(json["tag"], "inserted");
        assert_eq!(json["text"], "q");
    }
}
