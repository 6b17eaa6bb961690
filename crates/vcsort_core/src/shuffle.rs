//! Non-mutating Fisher-Yates shuffle.

use rand::Rng;

/// Return a uniformly shuffled copy of `items`.
///
/// Walks the copy from the last index down, swapping each element with one
/// drawn uniformly from `0..=i`. The input slice is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
