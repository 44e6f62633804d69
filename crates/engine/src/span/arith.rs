use std::cmp::{max, Ordering};

use crate::span::Span;


/// Folds an arbitrary span collection into the minimal sorted, disjoint,
/// non-touching sequence. `start <= head.end + 1` counts as touching, so
/// adjacent spans collapse as well as overlapping ones.
pub fn merge<L>(spans: L) -> Vec<Span>
where
    L: IntoIterator<Item = Span>
{
    let mut sorted: Vec<Span> = spans.into_iter().collect();
    sorted.sort();
    let mut list = sorted.into_iter().peekable();
    std::iter::from_fn(move || {
        let mut head = list.next()?;
        while let Some(next) = list.peek() {
            if *next.start() <= head.end() + 1 {
                let next = list.next().unwrap();
                // the list is sorted, so head already holds the least start
                head.end = max(head.end, next.end);
            } else {
                break
            }
        }
        Some(head)
    }).collect()
}


/// Intersection of two canonical span sequences.
pub fn intersection<L1, L2>(a: L1, b: L2) -> impl Iterator<Item=Span>
where
    L1: IntoIterator<Item = Span>,
    L2: IntoIterator<Item = Span>
{
    let mut list1 = a.into_iter().peekable();
    let mut list2 = b.into_iter().peekable();
    std::iter::from_fn(move || {
        loop {
            let (h1, h2) = match (list1.peek(), list2.peek()) {
                (Some(h1), Some(h2)) => (h1.clone(), h2.clone()),
                (_, None) | (None, _) => return None
            };
            let start = max(h1.start.clone(), h2.start.clone());
            let end = match h1.end.cmp(&h2.end) {
                Ordering::Less => {
                    list1.next();
                    h1.end
                }
                Ordering::Equal => {
                    list1.next();
                    list2.next();
                    h1.end
                }
                Ordering::Greater => {
                    list2.next();
                    h2.end
                }
            };
            if start <= end {
                return Some(Span { start, end })
            }
        }
    })
}
