use crate::VirtualWindow;

/// Configuration for [`compute_window`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Estimated extent of every row in the scroll axis (e.g. row height
    /// for vertical lists). All rows share this one estimate; there is no
    /// per-row measurement.
    pub row_extent: u32,
    /// Extra rows materialized beyond each viewport edge to reduce flicker
    /// during fast scrolling.
    pub overscan: usize,
    /// When `false`, windowing is bypassed: the whole range is returned
    /// with zero filler extents. The total rendered extent is the same in
    /// both modes.
    pub enabled: bool,
}

impl WindowOptions {
    pub fn new(row_extent: u32) -> Self {
        Self {
            row_extent,
            overscan: 1,
            enabled: true,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Computes the window of rows to materialize for the current scroll state.
///
/// Stateless: the window is re-derived from its inputs on every call. The
/// range is clamped to `[0, total_count)` and `end_index` is exclusive.
///
/// Invariant (exact, since every row shares one extent):
/// `leading_extent + len() * row_extent + trailing_extent
///  == total_count * row_extent`.
pub fn compute_window(
    total_count: usize,
    scroll_offset: u64,
    viewport_extent: u32,
    options: &WindowOptions,
) -> VirtualWindow {
    let row = options.row_extent as u64;
    if total_count == 0 {
        return VirtualWindow::default();
    }
    if !options.enabled || row == 0 {
        return VirtualWindow {
            start_index: 0,
            end_index: total_count,
            leading_extent: 0,
            trailing_extent: 0,
        };
    }

    let first_visible = (scroll_offset / row) as usize;
    let start_index = first_visible
        .saturating_sub(options.overscan)
        .min(total_count);

    // The last materialized index is ceil((scroll_offset + viewport) / row)
    // plus overscan; `end_index` is one past it.
    let scroll_end = scroll_offset.saturating_add(viewport_extent as u64);
    let last_index = (scroll_end.div_ceil(row) as usize).saturating_add(options.overscan);
    let end_index = last_index
        .saturating_add(1)
        .min(total_count)
        .max(start_index);

    let window = VirtualWindow {
        start_index,
        end_index,
        leading_extent: start_index as u64 * row,
        trailing_extent: (total_count - end_index) as u64 * row,
    };
    sctrace!(
        total_count,
        scroll_offset,
        viewport_extent,
        start = window.start_index,
        end = window.end_index,
        "compute_window"
    );
    window
}
