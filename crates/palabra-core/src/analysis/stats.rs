//! Descriptive statistics and the ranked frequency table.

use crate::frequency::FrequencyMap;

use super::reports::{DescriptiveStats, RankedRow};

/// Compute descriptive statistics over the count distribution.
///
/// Returns `None` for an empty frequency map; every divisor below is
/// guaranteed non-zero once that case is handled.
#[tracing::instrument(skip_all, fields(unique = freqs.len()))]
pub fn descriptive(freqs: &FrequencyMap) -> Option<DescriptiveStats> {
    if freqs.is_empty() {
        return None;
    }

    let mut values: Vec<usize> = freqs.counts().collect();
    values.sort_unstable();

    let n = values.len();
    let total: usize = values.iter().sum();
    let mean = total as f64 / n as f64;
    let variance = values
        .iter()
        .map(|v| {
            let d = *v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n as f64;

    Some(DescriptiveStats {
        unique_tokens: n,
        total_tokens: total,
        mean,
        median: percentile_sorted(&values, 50.0),
        std_dev: variance.sqrt(),
        variance,
        min: values[0],
        max: values[n - 1],
        p25: percentile_sorted(&values, 25.0),
        p50: percentile_sorted(&values, 50.0),
        p75: percentile_sorted(&values, 75.0),
    })
}

/// Percentile of a sorted slice using linear interpolation between the two
/// nearest ranks. `values` must be non-empty and sorted ascending.
fn percentile_sorted(values: &[usize], q: f64) -> f64 {
    let n = values.len();
    if n == 1 {
        return values[0] as f64;
    }
    let position = q / 100.0 * (n - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    let lo = values[lower] as f64;
    let hi = values[upper] as f64;
    fraction.mul_add(hi - lo, lo)
}

/// Build the ranked frequency table: count descending, ties in
/// first-occurrence order, with relative frequency, cumulative count, and
/// 1-based rank.
pub fn ranked_table(freqs: &FrequencyMap) -> Vec<RankedRow> {
    let total = freqs.total();
    if total == 0 {
        return Vec::new();
    }

    let mut cumulative = 0;
    freqs
        .top_n(freqs.len())
        .into_iter()
        .enumerate()
        .map(|(i, (token, count))| {
            cumulative += count;
            RankedRow {
                rank: i + 1,
                token,
                count,
                relative_frequency: count as f64 / total as f64,
                cumulative_count: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs_of(words: &[&str]) -> FrequencyMap {
        let tokens: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        FrequencyMap::from_tokens(&tokens)
    }

    #[test]
    fn empty_distribution_has_no_stats() {
        assert!(descriptive(&FrequencyMap::default()).is_none());
    }

    #[test]
    fn single_token_stats() {
        let stats = descriptive(&freqs_of(&["gato", "gato", "gato"])).unwrap();
        assert_eq!(stats.unique_tokens, 1);
        assert_eq!(stats.total_tokens, 3);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.min, 3);
        assert_eq!(stats.max, 3);
    }

    #[test]
    fn population_moments() {
        // counts: gato=1, corre=2, perro=1 → values [1, 1, 2]
        let stats = descriptive(&freqs_of(&["gato", "corre", "perro", "corre"])).unwrap();
        assert_eq!(stats.unique_tokens, 3);
        assert_eq!(stats.total_tokens, 4);
        assert!((stats.mean - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.median, 1.0);
        assert!((stats.variance - 2.0 / 9.0).abs() < 1e-12);
        assert!((stats.std_dev - (2.0f64 / 9.0).sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 1);
        assert_eq!(stats.max, 2);
    }

    #[test]
    fn percentiles_interpolate_and_order() {
        // values sorted: [1, 2, 3, 4]
        let stats =
            descriptive(&freqs_of(&["a", "b", "b", "c", "c", "c", "d", "d", "d", "d"])).unwrap();
        assert!((stats.p25 - 1.75).abs() < 1e-12);
        assert!((stats.p50 - 2.5).abs() < 1e-12);
        assert!((stats.p75 - 3.25).abs() < 1e-12);
        assert!(stats.p25 <= stats.p50 && stats.p50 <= stats.p75);
        assert_eq!(stats.median, stats.p50);
    }

    #[test]
    fn ranked_table_rows() {
        let rows = ranked_table(&freqs_of(&["gato", "corre", "perro", "corre"]));
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].token, "corre");
        assert_eq!(rows[0].count, 2);
        assert!((rows[0].relative_frequency - 0.5).abs() < 1e-12);
        assert_eq!(rows[0].cumulative_count, 2);

        // gato and perro tie at 1; gato first appeared earlier.
        assert_eq!(rows[1].token, "gato");
        assert_eq!(rows[2].token, "perro");
        assert_eq!(rows[2].cumulative_count, 4);
        assert_eq!(rows[2].rank, 3);
    }

    #[test]
    fn ranked_table_empty() {
        assert!(ranked_table(&FrequencyMap::default()).is_empty());
    }
}
