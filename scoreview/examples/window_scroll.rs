// Example: windowing a million-row list while scrolling.
use scoreview::{WindowOptions, compute_window};

fn main() {
    let opts = WindowOptions::new(44).with_overscan(10);
    let total = 1_000_000usize;

    for scroll in [0u64, 44_000, 21_999_560] {
        let w = compute_window(total, scroll, 800, &opts);
        println!(
            "scroll={scroll}: rows [{}..{}), leading={}, trailing={}",
            w.start_index, w.end_index, w.leading_extent, w.trailing_extent
        );
    }

    // Windowing off: everything is materialized, extents collapse to zero.
    let w = compute_window(total, 44_000, 800, &opts.with_enabled(false));
    println!("unwindowed: {} rows", w.len());
}
