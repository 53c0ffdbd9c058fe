use std::cmp::Ordering;

use crate::models::QuoteRecord;

/// Stable top-down merge sort.
///
/// Splits at the midpoint, sorts both halves and merges them into a new vector.
/// On ties the left half wins, so equal elements keep their input order.
pub fn merge_sort_by<T, F>(items: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_recursive(items, &compare)
}

fn sort_recursive<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mid = items.len() / 2;
    let right = items.split_off(mid);

    let left = sort_recursive(items, compare);
    let right = sort_recursive(right, compare);

    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}

/// Order quote records by trading date, oldest first, keeping same-day records in input order
pub fn sort_by_date(records: Vec<QuoteRecord>) -> Vec<QuoteRecord> {
    merge_sort_by(records, |a, b| a.date.cmp(&b.date))
}
