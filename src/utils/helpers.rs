//! Generic slice helpers backing the cycling and reconciliation logic.

/// Number of leading elements equal in both slices.
///
/// Walks both slices pairwise from the front and counts matches until the
/// first mismatch or either slice ends.
pub fn common_prefix_len<T>(a: &[T], b: &[T]) -> usize
where
    T: PartialEq,
{
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Index into `list` treating it as a ring.
///
/// The cursor is interpreted with euclidean modulo, so negative cursors wrap
/// to the end of the list. Returns `None` only for an empty list.
pub fn cyclic_index<T>(list: &[T], cursor: isize) -> Option<&T> {
    if list.is_empty() {
        return None;
    }
    let len = list.len() as isize;
    list.get(cursor.rem_euclid(len) as usize)
}
