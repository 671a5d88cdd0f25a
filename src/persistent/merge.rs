//! Merge algorithms over strictly increasing sequences.
//!
//! Every function here assumes its inputs are sorted in strictly ascending
//! order under the supplied comparator, and produces output with the same
//! property.

use std::cmp::Ordering;

/// Which elements a two-pointer merge keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeMode {
    left_only: bool,
    both: bool,
    right_only: bool,
}

impl MergeMode {
    pub const UNION: Self = Self {
        left_only: true,
        both: true,
        right_only: true,
    };

    pub const INTERSECTION: Self = Self {
        left_only: false,
        both: true,
        right_only: false,
    };

    pub const DIFFERENCE: Self = Self {
        left_only: true,
        both: false,
        right_only: false,
    };

    pub const SYMMETRIC_DIFFERENCE: Self = Self {
        left_only: true,
        both: false,
        right_only: true,
    };

    const fn swapped(self) -> Self {
        Self {
            left_only: self.right_only,
            both: self.both,
            right_only: self.left_only,
        }
    }
}

/// Merges two strictly increasing slices, keeping the elements selected by `mode`.
///
/// Runs in O(n + m). When the two ranges do not overlap the per-element
/// comparison loop is skipped.
pub fn merge_slices<T, F>(left: &[T], right: &[T], mode: MergeMode, mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) =
        (left.first(), left.last(), right.first(), right.last())
    else {
        let mut result = Vec::new();
        if mode.left_only {
            result.extend_from_slice(left);
        }
        if mode.right_only {
            result.extend_from_slice(right);
        }
        return result;
    };

    // Disjoint ranges: nothing is shared, so `both` never fires.
    if compare(left_last, right_first) == Ordering::Less {
        return concatenate_disjoint(left, right, mode);
    }
    if compare(right_last, left_first) == Ordering::Less {
        return concatenate_disjoint(right, left, mode.swapped());
    }

    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match compare(&left[left_index], &right[right_index]) {
            Ordering::Less => {
                if mode.left_only {
                    result.push(left[left_index].clone());
                }
                left_index += 1;
            }
            Ordering::Greater => {
                if mode.right_only {
                    result.push(right[right_index].clone());
                }
                right_index += 1;
            }
            Ordering::Equal => {
                if mode.both {
                    result.push(left[left_index].clone());
                }
                left_index += 1;
                right_index += 1;
            }
        }
    }

    if mode.left_only {
        result.extend_from_slice(&left[left_index..]);
    }
    if mode.right_only {
        result.extend_from_slice(&right[right_index..]);
    }

    result
}

/// `lower` lies entirely below `upper`.
fn concatenate_disjoint<T: Clone>(lower: &[T], upper: &[T], mode: MergeMode) -> Vec<T> {
    let mut result = Vec::with_capacity(lower.len() + upper.len());
    if mode.left_only {
        result.extend_from_slice(lower);
    }
    if mode.right_only {
        result.extend_from_slice(upper);
    }
    result
}

/// Sorts and deduplicates `elements` with a merge sort driven by `compare`.
///
/// Runs are merged in adjacent pairs, one level at a time, so of two equal
/// elements the one appearing first in the input is kept.
///
/// Unlike `slice::sort_by`, an inconsistent comparator never panics here;
/// callers that compare partially ordered values validate the output.
pub fn sort_dedup_by<T, F>(elements: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs: Vec<Vec<T>> = elements.into_iter().map(|element| vec![element]).collect();

    while runs.len() > 1 {
        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pending = runs.into_iter();
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged.push(merge_owned(left, right, &mut compare)),
                None => merged.push(left),
            }
        }
        runs = merged;
    }

    runs.pop().unwrap_or_default()
}

fn merge_owned<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(left_element), Some(right_element)) = (left.peek(), right.peek()) {
        match compare(left_element, right_element) {
            Ordering::Less => result.extend(left.next()),
            Ordering::Greater => result.extend(right.next()),
            Ordering::Equal => {
                result.extend(left.next());
                right.next();
            }
        }
    }

    result.extend(left);
    result.extend(right);
    result
}

/// Returns `true` if each element is strictly less than its successor.
pub fn is_strictly_increasing<T: PartialOrd>(slice: &[T]) -> bool {
    slice
        .windows(2)
        .all(|window| window[0].partial_cmp(&window[1]) == Some(Ordering::Less))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn merge(left: &[i32], right: &[i32], mode: MergeMode) -> Vec<i32> {
        merge_slices(left, right, mode, i32::cmp)
    }

    #[rstest]
    #[case::overlapping(&[1, 3, 5], &[2, 3, 4], vec![1, 2, 3, 4, 5])]
    #[case::disjoint_ascending(&[1, 2], &[5, 6], vec![1, 2, 5, 6])]
    #[case::disjoint_descending(&[5, 6], &[1, 2], vec![1, 2, 5, 6])]
    #[case::identical(&[1, 2], &[1, 2], vec![1, 2])]
    #[case::left_empty(&[], &[1], vec![1])]
    #[case::both_empty(&[], &[], vec![])]
    fn union_merges_and_dedups(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(merge(left, right, MergeMode::UNION), expected);
    }

    #[rstest]
    #[case::overlapping(&[1, 2, 3, 4], &[3, 4, 5], vec![3, 4])]
    #[case::disjoint(&[1, 2], &[3, 4], vec![])]
    #[case::right_empty(&[1, 2], &[], vec![])]
    fn intersection_keeps_shared(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(merge(left, right, MergeMode::INTERSECTION), expected);
    }

    #[rstest]
    #[case::overlapping(&[1, 2, 3, 4], &[3, 4, 5], vec![1, 2])]
    #[case::disjoint_below(&[5, 6], &[1, 2], vec![5, 6])]
    #[case::right_empty(&[1, 2], &[], vec![1, 2])]
    fn difference_keeps_left_only(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(merge(left, right, MergeMode::DIFFERENCE), expected);
    }

    #[rstest]
    #[case::overlapping(&[1, 2, 3], &[2, 3, 4], vec![1, 4])]
    #[case::disjoint_below(&[5], &[1], vec![1, 5])]
    fn symmetric_difference_drops_shared(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(merge(left, right, MergeMode::SYMMETRIC_DIFFERENCE), expected);
    }

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::single(vec![7], vec![7])]
    #[case::duplicates(vec![3, 1, 2, 3, 1], vec![1, 2, 3])]
    #[case::reversed(vec![5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5])]
    fn sort_dedup_by_normalizes(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(sort_dedup_by(input, i32::cmp), expected);
    }

    #[rstest]
    #[case::odd_run_count(vec![(1, 'a'), (0, 'x'), (1, 'b')])]
    #[case::trailing_duplicate(vec![(2, 'a'), (1, 'x'), (0, 'y'), (3, 'z'), (2, 'b')])]
    #[case::leading_pair(vec![(2, 'a'), (2, 'b'), (1, 'x')])]
    fn sort_dedup_by_keeps_first_of_equal_keys(#[case] input: Vec<(i32, char)>) {
        let output = sort_dedup_by(input, |left, right| left.0.cmp(&right.0));
        assert!(output.windows(2).all(|window| window[0].0 < window[1].0));
        assert!(output.iter().all(|(_, tag)| *tag != 'b'));
    }

    #[rstest]
    fn sort_dedup_by_tolerates_inconsistent_comparator() {
        let output = sort_dedup_by(vec![3, 1, 2], |_, _| Ordering::Less);
        assert_eq!(output.len(), 3);
    }

    #[rstest]
    #[case::ascending(&[1.0, 2.0, 3.0], true)]
    #[case::duplicate(&[1.0, 1.0], false)]
    #[case::nan(&[1.0, f64::NAN], false)]
    #[case::empty(&[], true)]
    fn is_strictly_increasing_checks_neighbours(#[case] slice: &[f64], #[case] expected: bool) {
        assert_eq!(is_strictly_increasing(slice), expected);
    }
}
