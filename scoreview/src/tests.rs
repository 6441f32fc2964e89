use crate::*;

use alloc::string::ToString;
use alloc::vec::Vec;
use core::cmp::Ordering;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }
}

fn records(rows: &[(&str, &str, f64)]) -> Vec<Record> {
    rows.iter()
        .map(|&(id, content, score)| Record::new(id, content, score))
        .collect()
}

#[test]
fn sort_by_score_asc_and_desc() {
    let input = records(&[("1", "a", 3.5), ("2", "b", -1.0), ("3", "c", 0.0)]);

    let asc = sort_records(&input, SortKey::Score, SortOrder::Asc);
    let ids: Vec<&str> = asc.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["2", "3", "1"]);

    let desc = sort_records(&input, SortKey::Score, SortOrder::Desc);
    let ids: Vec<&str> = desc.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "3", "2"]);
}

#[test]
fn sort_does_not_mutate_input() {
    let input = records(&[("5", "e", 2.0), ("1", "a", 1.0), ("3", "c", 3.0)]);
    let before = input.clone();
    let _ = sort_records(&input, SortKey::Time, SortOrder::Asc);
    let _ = sort_records(&input, SortKey::Score, SortOrder::Desc);
    assert_eq!(input, before);
}

#[test]
fn sort_is_stable_on_equal_keys() {
    // All scores equal: output must keep input order, in both directions.
    let input = records(&[("10", "a", 1.0), ("20", "b", 1.0), ("30", "c", 1.0)]);
    for order in [SortOrder::Asc, SortOrder::Desc] {
        let out = sort_records(&input, SortKey::Score, order);
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["10", "20", "30"]);
    }
}

#[test]
fn sort_is_deterministic_when_applied_twice() {
    let input = records(&[
        ("3", "c", 2.0),
        ("1", "a", 2.0),
        ("2", "b", 1.0),
        ("4", "d", 2.0),
    ]);
    let once = sort_records(&input, SortKey::Score, SortOrder::Asc);
    let twice = sort_records(&once, SortKey::Score, SortOrder::Asc);
    assert_eq!(once, twice);
}

#[test]
fn time_sort_orders_ids_beyond_double_precision() {
    // These two differ only in the last digit; f64 cannot tell them apart.
    let input = records(&[
        ("99999999999999999999", "big", 0.0),
        ("99999999999999999998", "slightly less big", 0.0),
    ]);
    let out = sort_records(&input, SortKey::Time, SortOrder::Asc);
    assert_eq!(out[0].id, "99999999999999999998");
    assert_eq!(out[1].id, "99999999999999999999");
}

#[test]
fn time_sort_falls_back_to_lexicographic_for_non_numeric_ids() {
    let input = records(&[("abc", "x", 0.0), ("2", "y", 0.0), ("10", "z", 0.0)]);
    // Must not panic; pairs with a non-numeric side compare as strings.
    let out = sort_records(&input, SortKey::Time, SortOrder::Asc);
    assert_eq!(out.len(), 3);
    assert_eq!(cmp_record_ids("abc", "abd"), Ordering::Less);
    assert_eq!(cmp_record_ids("2", "abc"), Ordering::Less); // '2' < 'a'
}

#[test]
fn record_id_comparison_normalizes_sign_and_leading_zeros() {
    assert_eq!(cmp_record_ids("007", "7"), Ordering::Equal);
    assert_eq!(cmp_record_ids("0", "-0"), Ordering::Equal);
    assert_eq!(cmp_record_ids("+12", "12"), Ordering::Equal);
    assert_eq!(cmp_record_ids("-2", "1"), Ordering::Less);
    assert_eq!(cmp_record_ids("-10", "-2"), Ordering::Less);
    assert_eq!(cmp_record_ids("10", "2"), Ordering::Greater);
    assert_eq!(cmp_record_ids("", "1"), Ordering::Less); // lexicographic fallback
}

#[test]
fn time_sort_numeric_not_lexicographic() {
    let input = records(&[("10", "a", 0.0), ("2", "b", 0.0), ("100", "c", 0.0)]);
    let out = sort_records(&input, SortKey::Time, SortOrder::Asc);
    let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["2", "10", "100"]);
}

#[test]
fn window_matches_reference_vector() {
    // 1000 rows of 44, viewport 800, top of list, overscan 10.
    let opts = WindowOptions::new(44).with_overscan(10);
    let w = compute_window(1000, 0, 800, &opts);
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 30); // last materialized index is 29
    assert_eq!(w.leading_extent, 0);
    assert_eq!(w.trailing_extent, (1000 - 30) * 44);
    assert_eq!(
        w.leading_extent + w.len() as u64 * 44 + w.trailing_extent,
        1000 * 44
    );
}

#[test]
fn window_mid_scroll_applies_overscan_on_both_sides() {
    let opts = WindowOptions::new(44).with_overscan(10);
    let w = compute_window(1000, 4400, 800, &opts);
    // First visible row is 100; ceil((4400+800)/44) = 119.
    assert_eq!(w.start_index, 90);
    assert_eq!(w.end_index, 130);
    assert_eq!(w.leading_extent, 90 * 44);
    assert_eq!(w.trailing_extent, (1000 - 130) * 44);
}

#[test]
fn window_clamps_at_the_end_of_the_list() {
    let opts = WindowOptions::new(44).with_overscan(10);
    let w = compute_window(100, 100 * 44, 800, &opts);
    assert_eq!(w.end_index, 100);
    assert_eq!(w.trailing_extent, 0);
    assert!(w.start_index <= w.end_index);

    // Scrolled far past the end: the window stays valid (possibly empty).
    let w = compute_window(100, 1_000_000, 800, &opts);
    assert!(w.start_index <= w.end_index);
    assert!(w.end_index <= 100);
}

#[test]
fn window_disabled_returns_full_range_with_zero_extents() {
    let opts = WindowOptions::new(44).with_overscan(10).with_enabled(false);
    let w = compute_window(1000, 4400, 800, &opts);
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 1000);
    assert_eq!(w.leading_extent, 0);
    assert_eq!(w.trailing_extent, 0);
    // Same total rendered extent as the windowed mode.
    assert_eq!(w.len() as u64 * 44, 1000 * 44);
}

#[test]
fn window_handles_empty_and_degenerate_inputs() {
    let opts = WindowOptions::new(44).with_overscan(10);
    assert_eq!(compute_window(0, 0, 800, &opts), VirtualWindow::default());

    // Zero row extent cannot window; fall back to the full range.
    let w = compute_window(10, 123, 800, &WindowOptions::new(0));
    assert_eq!((w.start_index, w.end_index), (0, 10));
}

#[test]
fn window_extent_invariant_holds_for_random_inputs() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..500 {
        let total = rng.gen_range_u64(1, 10_000) as usize;
        let row = rng.gen_range_u64(1, 100) as u32;
        let viewport = rng.gen_range_u64(1, 2_000) as u32;
        let overscan = rng.gen_range_u64(0, 50) as usize;
        let scroll = rng.gen_range_u64(0, total as u64 * row as u64 + 1);

        let opts = WindowOptions::new(row).with_overscan(overscan);
        let w = compute_window(total, scroll, viewport, &opts);

        assert!(w.start_index <= w.end_index, "range must be ordered");
        assert!(w.end_index <= total, "range must stay in bounds");
        assert_eq!(
            w.leading_extent + w.len() as u64 * row as u64 + w.trailing_extent,
            total as u64 * row as u64,
            "total scrollable extent must not depend on the window"
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn record_serializes_as_a_three_element_array() {
    let r = Record::new("123", "hello", 7.5);
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, r#"["123","hello",7.5]"#);
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}

#[test]
fn record_new_accepts_string_and_str() {
    let r = Record::new("1".to_string(), "a", 0.5);
    assert_eq!(r.id, "1");
    assert_eq!(r.content, "a");
}
