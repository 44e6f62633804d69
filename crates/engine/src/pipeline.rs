use num_bigint::BigInt;

use crate::parse::{parse_classify_input, parse_spans, ParseError, ParseOptions};
use crate::query::contains;
use crate::span::{Span, SpanSet};


/// Result of one coverage run: the canonical spans, every per-segment
/// parse error and the exact count of distinct covered integers.
/// Errors never suppress the valid part of the batch.
#[derive(Debug)]
pub struct CoverageReport {
    pub spans: SpanSet,
    pub errors: Vec<ParseError>,
    pub total: BigInt
}


impl CoverageReport {
    /// No valid spans survived parsing. The caller decides how loudly to
    /// surface this; the report itself stays well-formed with a zero
    /// total.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}


#[derive(Debug)]
pub struct Classification {
    pub value: BigInt,
    pub contained: bool
}


#[derive(Debug)]
pub struct ClassifyReport {
    pub spans: Vec<Span>,
    pub classifications: Vec<Classification>,
    pub errors: Vec<ParseError>
}


/// parse -> merge -> count, one shot, no retained state.
pub fn run_coverage(text: &str, options: &ParseOptions) -> CoverageReport {
    let outcome = parse_spans(text, options);
    let spans = SpanSet::merge(outcome.spans);
    let total = spans.total_coverage();
    CoverageReport {
        spans,
        errors: outcome.errors,
        total
    }
}


/// Two-block parse followed by a membership test per candidate value.
/// Classification needs no canonical set, so the spans are used as
/// parsed.
pub fn run_classify(text: &str) -> Result<ClassifyReport, ParseError> {
    let input = parse_classify_input(text)?;
    let classifications = input.values.into_iter()
        .map(|value| {
            let contained = contains(&input.spans, &value);
            Classification { value, contained }
        })
        .collect();
    Ok(ClassifyReport {
        spans: input.spans,
        classifications,
        errors: input.errors
    })
}
