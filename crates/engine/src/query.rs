use num_bigint::BigInt;

use crate::span::Span;


/// Sum of span counts, computed in closed form.
///
/// Exact as a distinct-integer count only on a canonical set; on raw
/// input overlapping spans are counted twice, so merge first when the
/// answer must be exact.
pub fn total_coverage(spans: &[Span]) -> BigInt {
    spans.iter().map(Span::count).sum()
}


/// Whether any span covers `value`. Linear scan, no ordering assumption,
/// so raw un-merged input works as well as a canonical set.
pub fn contains(spans: &[Span], value: &BigInt) -> bool {
    spans.iter().any(|span| span.contains_value(value))
}
