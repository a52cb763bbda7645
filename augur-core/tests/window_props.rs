use augur_core::{RangePreset, compute_window};
use proptest::prelude::*;

proptest! {
    #[test]
    fn window_brackets_last_known_and_stays_in_bounds(
        total in 1usize..500,
        last_frac in 0.0f64..1.0,
        lookback in 0usize..600,
        lookahead in 0usize..600,
    ) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let last = ((total as f64) * last_frac) as usize;
        let last = last.min(total - 1);
        let (start, end) = compute_window(last, lookback, lookahead, total).unwrap();
        prop_assert!(start <= last);
        prop_assert!(last <= end);
        prop_assert!(end < total);
        prop_assert_eq!(start, last.saturating_sub(lookback));
        prop_assert_eq!(end, (last + lookahead).min(total - 1));
    }

    #[test]
    fn all_preset_always_starts_at_zero(total in 1usize..500, last in 0usize..500) {
        let last = last.min(total - 1);
        let (lookback, lookahead) = RangePreset::All.span(last);
        let (start, _) = compute_window(last, lookback, lookahead, total).unwrap();
        prop_assert_eq!(start, 0);
    }
}
