use core::cmp::Ordering;
use core::ptr;

#[inline(always)]
pub fn sort<T: Ord>(v: &mut [T]) {
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline(always)]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` top-down: split at the midpoint, sort both halves, merge them.
fn merge_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], is_less);
    merge_sort(&mut v[mid..], is_less);
    merge(v, mid, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` through a scratch
/// buffer the size of `v`, and stores the result into `v[..]`.
///
/// Panic safety:
///
/// Elements are only bitwise copied *out* of `v` while `is_less` can still be
/// called, and `v` is only overwritten once every comparison is done. The
/// scratch `Vec` keeps a length of zero throughout, so if `is_less` panics `v`
/// still holds every object it initially held exactly once and nothing is
/// dropped twice.
fn merge<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], mid: usize, is_less: &mut F) {
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let mut scratch: Vec<T> = Vec::with_capacity(len);
    let src = v.as_mut_ptr();
    let dst = scratch.as_mut_ptr();

    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    // SAFETY: left < mid <= len and right < len inside the loop, and out never
    // exceeds left + right - mid < len, so every access is in bounds of `v` and
    // of the `len` capacity of `scratch`. The two allocations do not alias.
    unsafe {
        while left < mid && right < len {
            // Consume the lesser side.
            // If equal, prefer the left run to maintain stability.
            let take = if is_less(&*src.add(right), &*src.add(left)) {
                right += 1;
                right - 1
            } else {
                left += 1;
                left - 1
            };
            ptr::copy_nonoverlapping(src.add(take), dst.add(out), 1);
            out += 1;
        }

        // One side is exhausted, drain whatever remains of the other verbatim.
        ptr::copy_nonoverlapping(src.add(left), dst.add(out), mid - left);
        out += mid - left;
        ptr::copy_nonoverlapping(src.add(right), dst.add(out), len - right);

        ptr::copy_nonoverlapping(dst, src, len);
    }
}
