use super::*;
use crate::state::scroll_spy::SECTION_IDS;

#[test]
fn every_nav_anchor_is_tracked_by_scroll_spy() {
    for (id, _) in NAV_LINKS {
        assert!(SECTION_IDS.contains(&id), "{id} is not spied");
    }
}

#[test]
fn landing_sections_cover_steps_and_features() {
    assert_eq!(STEPS.len(), 4);
    assert_eq!(FEATURES.map(|(_, title, _)| title)[1], "Verified Listings");
}
