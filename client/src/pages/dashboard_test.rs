use super::*;
use crate::data::{Catalog, RecordSource};

#[test]
fn stat_entries_follow_fixture_numbers() {
    let properties = Catalog::fixtures().properties.list().expect("fixtures decode");
    let entries = stat_entries(DashboardStats::from_properties(&properties));

    let rendered: Vec<_> = entries.iter().map(|e| (e.title, e.value.as_str())).collect();
    assert_eq!(
        rendered,
        vec![
            ("Properties Posted", "3"),
            ("Total Views", "124"),
            ("Verified Listings", "2"),
            ("Pending Approval", "1"),
        ]
    );
}

#[test]
fn stat_entries_for_empty_portfolio_are_zero() {
    let entries = stat_entries(DashboardStats::default());
    assert!(entries.iter().all(|e| e.value == "0"));
}
