/// Indices of the best, second-best, and worst vertices.
///
/// Ties go to the lowest index. `second` is never `best`, but `worst` equals
/// `best` when every value is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Ranks {
    pub(super) best: usize,
    pub(super) second: usize,
    pub(super) worst: usize,
}

impl Ranks {
    /// Ranks a simplex by its cached objective values.
    ///
    /// `values` must hold at least two entries.
    pub(super) fn of(values: &[f64]) -> Self {
        let best = min_index(values, None);
        let worst = max_index(values);
        let second = min_index(values, Some(best));

        Self {
            best,
            second,
            worst,
        }
    }
}

/// Index of the first minimum, optionally skipping one index.
fn min_index(values: &[f64], skip: Option<usize>) -> usize {
    let mut found: Option<(usize, f64)> = None;
    for (index, &value) in values.iter().enumerate() {
        if Some(index) == skip {
            continue;
        }
        if found.is_none_or(|(_, min)| value < min) {
            found = Some((index, value));
        }
    }
    found.map_or(0, |(index, _)| index)
}

/// Index of the first maximum.
fn max_index(values: &[f64]) -> usize {
    let mut found: Option<(usize, f64)> = None;
    for (index, &value) in values.iter().enumerate() {
        if found.is_none_or(|(_, max)| value > max) {
            found = Some((index, value));
        }
    }
    found.map_or(0, |(index, _)| index)
}
