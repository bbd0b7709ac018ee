//! Distance and change metrics over integer lists.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MetricsError {
    #[error("lists differ in length ({0} != {1})")]
    LengthMismatch(usize, usize),
    #[error("invalid change thresholds {min}..={max}")]
    InvalidThresholds { min: u64, max: u64 },
    #[error("arithmetic overflow")]
    Overflow,
}

/// Smallest permitted change between two levels of a safe report.
pub const MIN_CHANGE: u64 = 1;
/// Largest permitted change between two levels of a safe report.
pub const MAX_CHANGE: u64 = 3;

/// Sum of the pairwise distances between two lists.
///
/// # Examples
///
/// ```
/// use lib::metrics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(&[1, 2, 3, 3, 3, 4], &[3, 3, 3, 4, 5, 9])?, 11);
/// # Ok::<_, lib::metrics::MetricsError>(())
/// ```
pub fn manhattan_distance(a: &[u64], b: &[u64]) -> Result<u64, MetricsError> {
    same_len(a, b)?;

    a.iter()
        .zip(b)
        .try_fold(0u64, |sum, (a, b)| sum.checked_add(a.abs_diff(*b)))
        .ok_or(MetricsError::Overflow)
}

/// Sum of every value in `a` weighted by how often it occurs in `b`.
///
/// # Examples
///
/// ```
/// use lib::metrics::similarity_score;
///
/// assert_eq!(similarity_score(&[3, 4, 2, 1, 3, 3], &[4, 3, 5, 3, 9, 3])?, 31);
/// # Ok::<_, lib::metrics::MetricsError>(())
/// ```
pub fn similarity_score(a: &[u64], b: &[u64]) -> Result<u64, MetricsError> {
    same_len(a, b)?;

    let mut weights = HashMap::<u64, u64>::new();

    for value in b {
        *weights.entry(*value).or_default() += 1;
    }

    a.iter()
        .try_fold(0u64, |sum, value| {
            let weight = weights.get(value).copied().unwrap_or_default();
            sum.checked_add(value.checked_mul(weight)?)
        })
        .ok_or(MetricsError::Overflow)
}

fn same_len(a: &[u64], b: &[u64]) -> Result<(), MetricsError> {
    if a.len() != b.len() {
        return Err(MetricsError::LengthMismatch(a.len(), b.len()));
    }

    Ok(())
}

/// Differences between consecutive levels.
///
/// Differences which don't fit in an `i64` saturate, which keeps their sign.
#[inline]
pub fn diffs(levels: &[i64]) -> impl Iterator<Item = i64> + '_ {
    levels.windows(2).map(|w| w[1].saturating_sub(w[0]))
}

/// Count the changes going against the direction of the report.
///
/// The direction is decided by the first change which isn't zero.
pub fn monotonicity_violations(levels: &[i64]) -> usize {
    let Some(first) = diffs(levels).find(|d| *d != 0) else {
        return 0;
    };

    diffs(levels)
        .filter(|d| d.signum() == -first.signum())
        .count()
}

/// Count the changes whose magnitude falls outside of `min..=max`.
pub fn change_violations(levels: &[i64], min: u64, max: u64) -> Result<usize, MetricsError> {
    if min > max {
        return Err(MetricsError::InvalidThresholds { min, max });
    }

    Ok(diffs(levels)
        .filter(|d| !(min..=max).contains(&d.unsigned_abs()))
        .count())
}

/// Test if a report is safe.
///
/// A safe report either only increases or only decreases, by at least
/// [MIN_CHANGE] and at most [MAX_CHANGE] at each step.
pub fn is_safe(levels: &[i64]) -> bool {
    monotonicity_violations(levels) == 0
        && diffs(levels).all(|d| (MIN_CHANGE..=MAX_CHANGE).contains(&d.unsigned_abs()))
}

/// Test if a report is safe once at most one level is removed.
pub fn is_safe_dampened(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }

    let mut buf = Vec::with_capacity(levels.len());

    (0..levels.len()).any(|skip| {
        buf.clear();
        buf.extend_from_slice(&levels[..skip]);
        buf.extend_from_slice(&levels[skip + 1..]);
        is_safe(&buf)
    })
}
