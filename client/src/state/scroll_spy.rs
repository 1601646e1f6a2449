//! Landing-page scroll spy.
//!
//! The browser listener measures each section's top offset and hands the
//! numbers to [`active_section`]; everything here is DOM-free.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// Sections tracked by the nav bar, in evaluation order.
pub const SECTION_IDS: [&str; 5] = ["how-it-works", "why-us", "about-us", "cta", "footer-contact"];

/// How far below the top of the viewport a section counts as reached.
pub const SPY_OFFSET_PX: f64 = 120.0;

/// The last section (in evaluation order) whose top is at or above
/// `scroll_y + SPY_OFFSET_PX`, or an empty string when none is.
pub fn active_section<'a, I>(scroll_y: f64, offsets: I) -> String
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let threshold = scroll_y + SPY_OFFSET_PX;
    let mut current = "";
    for (id, top) in offsets {
        if top <= threshold {
            current = id;
        }
    }
    current.to_owned()
}

/// Offsets for the tracked sections, skipping any `lookup` cannot find.
pub fn measure(lookup: impl Fn(&str) -> Option<f64>) -> Vec<(&'static str, f64)> {
    SECTION_IDS
        .iter()
        .filter_map(|id| lookup(id).map(|top| (*id, top)))
        .collect()
}
