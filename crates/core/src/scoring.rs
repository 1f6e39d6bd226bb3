//! Scoring module
//!
//! A group of `n` tiles is worth the n-th triangular number, so one large
//! group beats several small ones of the same total size.

/// Points for removing a group of `n` tiles: `n * (n + 1) / 2`
pub fn group_score(n: usize) -> u32 {
    let n = n as u128;
    let points = n * (n + 1) / 2;
    u32::try_from(points).unwrap_or(u32::MAX)
}
