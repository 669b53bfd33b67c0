/// Descriptive statistics over a single column.
///
/// Every helper returns `None` instead of a non-finite value so callers can
/// surface an explicit "no data" state.
pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        finite(sum / values.len() as f64)
    }

    /// Middle value, or the average of the two middle values for even lengths.
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        finite(median)
    }

    pub fn min(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::min).and_then(finite)
    }

    pub fn max(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::max).and_then(finite)
    }

    /// Pearson correlation coefficient; `None` when either side has no variance.
    pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
        if xs.len() != ys.len() || xs.len() < 2 {
            return None;
        }
        let mean_x = Self::mean(xs)?;
        let mean_y = Self::mean(ys)?;

        let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
        for (&x, &y) in xs.iter().zip(ys) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }
        if var_x <= 0.0 || var_y <= 0.0 {
            return None;
        }
        finite(cov / (var_x.sqrt() * var_y.sqrt())).map(|r| r.clamp(-1.0, 1.0))
    }

    /// Min-max rescaling into [0, 1]; `None` for empty or constant columns.
    pub fn normalize(values: &[f64]) -> Option<Vec<f64>> {
        let min = Self::min(values)?;
        let max = Self::max(values)?;
        let span = max - min;
        if span <= 0.0 {
            return None;
        }
        Some(values.iter().map(|&v| (v - min) / span).collect())
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
