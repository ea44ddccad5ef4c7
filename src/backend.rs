//! Plotting backend capability query and the shared color scale.

use std::sync::OnceLock;

/// Process-wide cache for the backend availability check. Read-only after the
/// first query, so concurrent callers are fine.
static BACKEND_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// The sequential Blues color scale used by downstream plots.
pub const COLOR_SCALE: &[&str] = &[
    "rgb(247,251,255)",
    "rgb(222,235,247)",
    "rgb(198,219,239)",
    "rgb(158,202,225)",
    "rgb(107,174,214)",
    "rgb(66,146,198)",
    "rgb(33,113,181)",
    "rgb(8,81,156)",
    "rgb(8,48,107)",
];

/// Returns whether the Plotly rendering backend is available.
///
/// Resolved once per process and cached; the answer reflects whether the
/// crate was built with the `plotly` feature. Rendering layers call this
/// before producing figures instead of probing the backend themselves.
#[must_use]
pub fn is_available() -> bool {
    *BACKEND_AVAILABLE.get_or_init(|| cfg!(feature = "plotly"))
}
