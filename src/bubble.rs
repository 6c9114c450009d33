use core::cmp::Ordering;

#[inline(always)]
pub fn sort<T: Ord>(v: &mut [T]) {
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline(always)]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` by repeatedly swapping out-of-order neighbours.
///
/// Pass `i` bubbles the largest element of `v[..=i]` up to index `i`, so the
/// upper bound shrinks by one each pass. There is no early exit on an already
/// sorted slice. Only pairs where the right element is strictly less than the
/// left are swapped, which keeps equal elements in their original order.
fn bubble_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    let len = v.len();
    if len < 2 {
        return;
    }

    for bound in (0..len).rev() {
        for j in 0..bound {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}
