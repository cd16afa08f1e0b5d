/// Share of `completed` over `total` as a whole percentage in `0..=100`.
///
/// A `total` of zero yields 0.
pub fn progress_percentage(total: usize, completed: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let ratio = completed as f64 / total as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_whole_percent() {
        assert_eq!(progress_percentage(2, 1), 50);
        assert_eq!(progress_percentage(3, 1), 33);
        assert_eq!(progress_percentage(3, 2), 67);
        assert_eq!(progress_percentage(4, 4), 100);
        assert_eq!(progress_percentage(5, 0), 0);
    }

    #[test]
    fn empty_day_has_no_progress() {
        assert_eq!(progress_percentage(0, 0), 0);
        assert_eq!(progress_percentage(0, 3), 0);
    }

    #[test]
    fn out_of_sync_counts_stay_within_bounds() {
        assert_eq!(progress_percentage(2, 5), 100);
    }
}
