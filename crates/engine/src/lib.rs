mod parse;
mod pipeline;
mod query;
mod span;

pub use parse::{parse_classify_input, parse_spans, ClassifyInput, ParseError, ParseOptions, ParseOutcome};
pub use pipeline::{run_classify, run_coverage, Classification, ClassifyReport, CoverageReport};
pub use query::{contains, total_coverage};
pub use span::{InvertedBound, Span, SpanSet};
