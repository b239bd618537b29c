//! Binary Heap Sort
//!
//! In-place heap sort over a slice with a caller-supplied ordering. Sorting
//! is ascending: the max-heap root is swapped to the end of the shrinking
//! unsorted region on every extraction.

use std::cmp::Ordering;

/// Sort `items` ascending by `compare`
pub fn heap_sort_by<T, F>(items: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap_select_by(items, items.len(), compare);
}

/// Move the `count` greatest items to the tail of `items`, ascending
///
/// Builds the heap bottom-up in O(n), then performs at most `count`
/// extractions. With `count >= items.len()` this is a full heap sort. The
/// order of the untouched prefix is unspecified.
pub fn heap_select_by<T, F>(items: &mut [T], count: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 || count == 0 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(items, root, len, &mut compare);
    }

    // The final extraction is implicit: a heap of one is already in place.
    let stop = len.saturating_sub(count).max(1);
    for end in (stop..len).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, &mut compare);
    }
}

/// Restore the max-heap property below `root` within `items[..end]`
fn sift_down<T, F>(items: &mut [T], mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && compare(&items[child], &items[child + 1]) == Ordering::Less {
            child += 1;
        }
        if compare(&items[root], &items[child]) != Ordering::Less {
            break;
        }
        items.swap(root, child);
        root = child;
    }
}
