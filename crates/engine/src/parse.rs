use num_bigint::BigInt;
use thiserror::Error;

use crate::span::{InvertedBound, Span};


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed range '{0}': expected '<start>-<end>'")]
    MalformedSegment(String),

    #[error("non-numeric bound '{0}'")]
    NonNumericBound(String),

    #[error(transparent)]
    InvertedBound(#[from] InvertedBound),

    #[error("expected a blank line separating ranges from values")]
    MissingSeparator
}


#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub delimiter: char
}


impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ','
        }
    }
}


/// Successfully parsed spans together with one error per rejected
/// segment. A bad segment never discards the rest of the batch.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub spans: Vec<Span>,
    pub errors: Vec<ParseError>
}


/// Input of the two-block classification shape: spans to test against
/// and the candidate values to classify.
#[derive(Debug, Default)]
pub struct ClassifyInput {
    pub spans: Vec<Span>,
    pub values: Vec<BigInt>,
    pub errors: Vec<ParseError>
}


/// Parses delimiter-separated `<start>-<end>` segments.
///
/// Blank segments are skipped silently; every other rejected segment
/// contributes exactly one error, in input order.
pub fn parse_spans(text: &str, options: &ParseOptions) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    for segment in text.split(options.delimiter) {
        match parse_segment(segment) {
            Ok(Some(span)) => outcome.spans.push(span),
            Ok(None) => {},
            Err(err) => outcome.errors.push(err)
        }
    }
    outcome
}


/// Parses the two-block input shape: a newline-delimited span block, a
/// blank line, then a newline-delimited value block.
///
/// A missing blank-line separator is fatal for the whole batch; bad
/// lines inside either block are collected per item as usual.
pub fn parse_classify_input(text: &str) -> Result<ClassifyInput, ParseError> {
    let Some((span_block, value_block)) = split_blocks(text) else {
        return Err(ParseError::MissingSeparator)
    };

    let mut input = ClassifyInput::default();

    for line in span_block.lines() {
        match parse_segment(line) {
            Ok(Some(span)) => input.spans.push(span),
            Ok(None) => {},
            Err(err) => input.errors.push(err)
        }
    }

    for line in value_block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue
        }
        match line.parse() {
            Ok(value) => input.values.push(value),
            Err(_) => input.errors.push(ParseError::NonNumericBound(line.to_string()))
        }
    }

    Ok(input)
}


fn split_blocks(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() && offset > 0 {
            return Some((&text[..offset], &text[offset + line.len()..]))
        }
        offset += line.len();
    }
    None
}


fn parse_segment(segment: &str) -> Result<Option<Span>, ParseError> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Ok(None)
    }
    let mut parts = segment.split('-');
    let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::MalformedSegment(segment.to_string()))
    };
    let start = parse_bound(start)?;
    let end = parse_bound(end)?;
    Ok(Some(Span::new(start, end)?))
}


fn parse_bound(text: &str) -> Result<BigInt, ParseError> {
    let text = text.trim();
    text.parse().map_err(|_| ParseError::NonNumericBound(text.to_string()))
}
