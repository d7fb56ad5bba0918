//! The capacity schedule.
//!
//! Every capacity the table uses is a prime of the form `2^n - delta`, with
//! `n` between 4 and 50. Primes keep the probe modulus and the secondary hash
//! modulus (`capacity - 1`) decorrelated, which is why the schedule avoids
//! perfectly round powers of two. The deltas come from the published lists of
//! the largest primes below each power of two.

/// Distance from `2^(index + 4)` down to the chosen prime, per schedule
/// index.
const DELTAS: [usize; 47] = [
    3, 1, 3, 1, 5, 3, 3, 9, 3, 1, 3, 19, 15, 1, 5, 1, 3, 9, 3, 15, 3, 39, 5, 39, 57, 3, 35, 1, 5,
    9, 41, 31, 5, 25, 45, 7, 87, 21, 11, 57, 17, 55, 21, 115, 59, 81, 27,
];

/// Exponent of the smallest schedule entry.
const MIN_EXPONENT: u32 = 4;

/// Number of entries in the schedule.
pub const LEN: usize = DELTAS.len();

/// The capacity of a freshly created table: `2^4 - 3`.
pub const SMALLEST: usize = (1 << MIN_EXPONENT) - DELTAS[0];

/// Returns the schedule entry at `index`, or `None` past the end of the
/// schedule.
pub fn at(index: usize) -> Option<usize> {
    let delta = *DELTAS.get(index)?;
    Some((1usize << (MIN_EXPONENT + index as u32)) - delta)
}

/// Returns the smallest schedule entry strictly greater than `capacity`, or
/// `None` once `capacity` has reached the top of the schedule.
///
/// The argument does not have to be a schedule entry itself; a table resized
/// to an arbitrary capacity re-anchors onto the schedule through this
/// function.
pub fn next_after(capacity: usize) -> Option<usize> {
    (0..LEN).filter_map(at).find(|&entry| entry > capacity)
}

/// Returns the largest schedule entry strictly smaller than `capacity`, or
/// `None` when `capacity` is at or below the smallest entry.
pub fn prev_before(capacity: usize) -> Option<usize> {
    (0..LEN).filter_map(at).rev().find(|&entry| entry < capacity)
}
