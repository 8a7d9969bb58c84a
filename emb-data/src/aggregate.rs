use emb_core::reservoir::ReservoirRecord;
use emb_utils::numbers::round_half_up;
use serde::Serialize;

/// Summary totals over a record subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Sum of capacities, hm³.
    pub total_capacity: f64,
    /// Sum of current volumes, hm³.
    pub total_current: f64,
    /// Rounded mean of the fill percentages; 0 for an empty subset.
    pub average_percentage: i64,
}

/// Reduce `records` to totals. Always recomputed from scratch.
pub fn summarize(records: &[ReservoirRecord]) -> Statistics {
    if records.is_empty() {
        return Statistics::default();
    }
    let total_capacity = records.iter().map(|r| r.capacity).sum();
    let total_current = records.iter().map(|r| r.current_volume).sum();
    let percentage_sum: i64 = records.iter().map(|r| r.fill_percentage).sum();
    Statistics {
        total_capacity,
        total_current,
        average_percentage: round_half_up(percentage_sum as f64 / records.len() as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_subset_is_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats.average_percentage, 0);
        assert_eq!(stats.total_capacity, 0.0);
        assert_eq!(stats.total_current, 0.0);
    }

    #[test]
    fn test_totals_and_mean() {
        let records = vec![
            ReservoirRecord::new(1, "Uno", "", 10.0, 7.0),
            ReservoirRecord::new(2, "Dos", "", 20.0, 8.0),
        ];
        let stats = summarize(&records);
        assert_eq!(stats.total_capacity, 30.0);
        assert_eq!(stats.total_current, 15.0);
        assert_eq!(stats.average_percentage, 55);
    }

    #[test]
    fn test_mean_rounds_half_up() {
        let records = vec![
            ReservoirRecord::new(1, "A", "", 100.0, 50.0),
            ReservoirRecord::new(2, "B", "", 100.0, 51.0),
        ];
        assert_eq!(summarize(&records).average_percentage, 51);
    }
}
