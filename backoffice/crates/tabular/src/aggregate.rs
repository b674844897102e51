//! Numeric summarization over record collections.
//!
//! Dashboard cards only ever need two reductions: how many records match
//! a predicate, and the sum of a numeric field. Both are total functions
//! over finite collections and return zero on empty input.

/// Counts the records matching `predicate`.
///
/// # Example
///
/// ```
/// use tabular::count;
///
/// let balances = [0_u64, 45_800, 0];
/// assert_eq!(count(&balances, |b| *b > 0), 1);
/// ```
#[must_use]
pub fn count<T, P>(rows: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    rows.iter().filter(|row| predicate(row)).count()
}

/// Sums a numeric field across all records.
///
/// The selector returns `Option<u64>`; records where the field is absent
/// contribute zero. Saturating addition keeps the function total even on
/// adversarial inputs.
///
/// # Example
///
/// ```
/// use tabular::sum;
///
/// struct Debt(Option<u64>);
///
/// let debts = [Debt(Some(5)), Debt(None), Debt(Some(3))];
/// assert_eq!(sum(&debts, |d| d.0), 8);
/// ```
#[must_use]
pub fn sum<T, S>(rows: &[T], selector: S) -> u64
where
    S: Fn(&T) -> Option<u64>,
{
    rows.iter()
        .map(|row| selector(row).unwrap_or(0))
        .fold(0, u64::saturating_add)
}
