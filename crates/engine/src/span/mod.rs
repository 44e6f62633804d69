use std::fmt::{Display, Formatter};

use num_bigint::BigInt;
use thiserror::Error;

use crate::span::arith::{intersection, merge};


mod arith;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("start {start} is greater than end {end}")]
pub struct InvertedBound {
    pub start: BigInt,
    pub end: BigInt
}


/// Closed interval `[start, end]` over arbitrary-precision integers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    start: BigInt,
    end: BigInt
}


impl Span {
    pub fn new(start: BigInt, end: BigInt) -> Result<Self, InvertedBound> {
        if start > end {
            return Err(InvertedBound { start, end })
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> &BigInt {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &BigInt {
        &self.end
    }

    /// Number of integers covered, `end - start + 1`.
    ///
    /// Computed in big-integer arithmetic, so astronomically wide spans
    /// report an exact count.
    pub fn count(&self) -> BigInt {
        &self.end - &self.start + 1
    }

    #[inline]
    pub fn contains_value(&self, value: &BigInt) -> bool {
        self.start <= *value && *value <= self.end
    }

    /// True when the two spans overlap or sit side by side with no
    /// integer excluded between them.
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= &other.end + 1 && other.start <= &self.end + 1
    }
}


impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}


/// Canonical form of a span collection: sorted ascending by start,
/// mutually disjoint and non-touching.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanSet {
    spans: Vec<Span>
}


impl TryFrom<Vec<Span>> for SpanSet {
    type Error = &'static str;

    fn try_from(spans: Vec<Span>) -> Result<Self, Self::Error> {
        for i in 1..spans.len() {
            let current = &spans[i];
            let prev = &spans[i-1];
            if *current.start() <= prev.end() + 1 {
                return Err("found unordered or touching spans in span set")
            }
        }
        Ok(Self {
            spans
        })
    }
}


impl SpanSet {
    /// Builds the canonical set covering exactly the integers covered by
    /// the input, folding every overlapping or touching pair. The result
    /// does not depend on input order.
    pub fn merge<L: IntoIterator<Item = Span>>(spans: L) -> Self {
        Self {
            spans: merge(spans)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.len() == 0
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn iter(&self) -> impl Iterator<Item=&Span> + '_ {
        self.spans.iter()
    }

    pub fn as_slice(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_vec(self) -> Vec<Span> {
        self.spans
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            spans: merge(self.iter().chain(other.iter()).cloned())
        }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            spans: intersection(self.iter().cloned(), other.iter().cloned()).collect()
        }
    }

    pub fn total_coverage(&self) -> BigInt {
        crate::query::total_coverage(&self.spans)
    }

    pub fn contains_value(&self, value: &BigInt) -> bool {
        crate::query::contains(&self.spans, value)
    }
}


#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use num_bigint::BigInt;
    use proptest::prelude::*;

    use crate::span::{Span, SpanSet};


    fn span(start: i64, end: i64) -> Span {
        Span::new(BigInt::from(start), BigInt::from(end)).unwrap()
    }


    #[test]
    fn touch_detection_is_symmetric() {
        assert!(span(1, 5).touches(&span(6, 10)));
        assert!(span(6, 10).touches(&span(1, 5)));
        assert!(span(1, 5).touches(&span(3, 8)));
        assert!(!span(1, 5).touches(&span(7, 10)));
        assert!(!span(7, 10).touches(&span(1, 5)));
    }

    #[test]
    fn constructor_rejects_inverted_bounds() {
        let err = Span::new(BigInt::from(30), BigInt::from(20)).unwrap_err();
        assert_eq!(err.start, BigInt::from(30));
        assert_eq!(err.end, BigInt::from(20));
    }

    #[test]
    fn count_is_exact_for_huge_spans() {
        let start: BigInt = "1000000000000000000000000000000".parse().unwrap();
        let end = &start + "100000000000000000000".parse::<BigInt>().unwrap();
        let expected: BigInt = "100000000000000000001".parse().unwrap();
        assert_eq!(Span::new(start, end).unwrap().count(), expected);
    }

    #[test]
    fn touching_spans_merge() {
        let merged = SpanSet::merge([span(1, 5), span(6, 10)]);
        assert_eq!(merged.as_slice(), &[span(1, 10)]);
    }

    #[test]
    fn spans_with_a_gap_stay_apart() {
        let merged = SpanSet::merge([span(1, 5), span(7, 10)]);
        assert_eq!(merged.as_slice(), &[span(1, 5), span(7, 10)]);
    }

    #[test]
    fn equal_spans_collapse() {
        let merged = SpanSet::merge([span(3, 8), span(3, 8), span(3, 8)]);
        assert_eq!(merged.as_slice(), &[span(3, 8)]);
    }

    #[test]
    fn single_span_passes_through() {
        let merged = SpanSet::merge([span(4, 4)]);
        assert_eq!(merged.as_slice(), &[span(4, 4)]);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(SpanSet::merge(std::iter::empty()).is_empty());
    }

    #[test]
    fn canonical_validation() {
        assert!(SpanSet::try_from(vec![span(1, 5), span(7, 10)]).is_ok());
        assert!(SpanSet::try_from(vec![span(1, 5), span(6, 10)]).is_err());
        assert!(SpanSet::try_from(vec![span(7, 10), span(1, 5)]).is_err());
    }

    #[test]
    fn union_of_interleaved_sets() {
        let a = SpanSet::merge([span(1, 3), span(10, 12)]);
        let b = SpanSet::merge([span(4, 6), span(20, 22)]);
        assert_eq!(
            a.union(&b).as_slice(),
            &[span(1, 6), span(10, 12), span(20, 22)]
        );
    }

    #[test]
    fn intersection_of_overlapping_sets() {
        let a = SpanSet::merge([span(1, 10), span(20, 30)]);
        let b = SpanSet::merge([span(5, 25)]);
        assert_eq!(
            a.intersection(&b).as_slice(),
            &[span(5, 10), span(20, 25)]
        );
    }

    #[test]
    fn intersection_of_disjoint_sets_is_empty() {
        let a = SpanSet::merge([span(1, 5)]);
        let b = SpanSet::merge([span(7, 10)]);
        assert!(a.intersection(&b).is_empty());
    }


    fn arb_spans() -> impl Strategy<Value = Vec<Span>> {
        prop::collection::vec((-1000i64..1000, 0i64..40), 0..30).prop_map(|pairs| {
            pairs.into_iter()
                .map(|(start, len)| span(start, start + len))
                .collect()
        })
    }


    #[test]
    fn merge_output_is_canonical_and_idempotent() {
        proptest!(|(spans in arb_spans())| {
            let merged = SpanSet::merge(spans.clone());
            for pair in merged.as_slice().windows(2) {
                prop_assert!(*pair[1].start() > pair[0].end() + 1);
            }
            let again = SpanSet::merge(merged.iter().cloned());
            prop_assert_eq!(&again, &merged);
        });
    }

    #[test]
    fn merge_does_not_depend_on_input_order() {
        let arb = arb_spans().prop_flat_map(|spans| {
            (Just(spans.clone()), Just(spans).prop_shuffle())
        });
        proptest!(|((spans, shuffled) in arb)| {
            prop_assert_eq!(SpanSet::merge(shuffled), SpanSet::merge(spans));
        });
    }

    #[test]
    fn coverage_of_merged_set_counts_distinct_integers() {
        proptest!(|(spans in arb_spans())| {
            let mut distinct = BTreeSet::new();
            for s in spans.iter() {
                let mut v = s.start().clone();
                while v <= *s.end() {
                    distinct.insert(v.clone());
                    v += 1;
                }
            }
            let merged = SpanSet::merge(spans);
            prop_assert_eq!(merged.total_coverage(), BigInt::from(distinct.len()));
        });
    }
}
