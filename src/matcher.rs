/// Tolerance-aware sorting and approximate binary search.
///
/// Two keys count as equal when they differ by less than `TOLERANCE`.
/// That relation is not transitive (a chain of near-equal keys can
/// drift past the threshold end to end), so a stable comparison sort is
/// used and its output taken as the one consistent order.
use std::cmp::Ordering;

use crate::{EnEntry, RuEntry, TOLERANCE};

/// Compare two keys, treating values within `TOLERANCE` as equal.
pub fn cmp_tolerant(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < TOLERANCE {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Stable ascending sort of Russian entries by `index`.
pub fn sort_russian(entries: &mut [RuEntry]) {
    entries.sort_by(|a, b| cmp_tolerant(a.index, b.index));
}

/// Stable ascending sort of English entries by combined score.
pub fn sort_english(entries: &mut [EnEntry]) {
    entries.sort_by(|a, b| cmp_tolerant(a.combined(), b.combined()));
}

/// Binary-search a sorted English list for an entry whose combined
/// score lies within `TOLERANCE` of `target`.
///
/// After the loop narrows `[left, right]` down to neighbours, the final
/// midpoint is checked first, then `left`, then `right`; `None` means
/// none of the three were within tolerance. An empty list never
/// matches.
pub fn find_combined(entries: &[EnEntry], target: f64) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }

    let mut left = 0;
    let mut right = entries.len() - 1;
    let mut middle = (left + right) / 2;

    while left + 1 < right {
        middle = (left + right) / 2;
        let score = entries[middle].combined();

        if (score - target).abs() < TOLERANCE {
            return Some(middle);
        }

        if score < target {
            left = middle;
        } else {
            right = middle;
        }
    }

    [middle, left, right]
        .into_iter()
        .find(|&i| (entries[i].combined() - target).abs() < TOLERANCE)
}
