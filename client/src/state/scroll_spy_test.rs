use super::*;

fn page_offsets(id: &str) -> Option<f64> {
    match id {
        "how-it-works" => Some(900.0),
        "why-us" => Some(1500.0),
        "cta" => Some(2300.0),
        "about-us" => Some(2700.0),
        "footer-contact" => Some(3400.0),
        _ => None,
    }
}

#[test]
fn top_of_page_has_no_active_section() {
    assert_eq!(active_section(0.0, measure(page_offsets)), "");
}

#[test]
fn reaching_threshold_activates_section() {
    // 1500 - 120 = 1380
    assert_eq!(active_section(1379.0, measure(page_offsets)), "how-it-works");
    assert_eq!(active_section(1380.0, measure(page_offsets)), "why-us");
}

#[test]
fn scrolling_back_above_first_section_clears_active() {
    let offsets = measure(page_offsets);
    assert_eq!(active_section(1600.0, offsets.clone()), "why-us");
    assert_eq!(active_section(100.0, offsets), "");
}

#[test]
fn evaluation_order_wins_over_document_order() {
    // about-us sits below cta in the document but is evaluated before it.
    assert_eq!(active_section(2650.0, measure(page_offsets)), "cta");
}

#[test]
fn bottom_of_page_activates_footer() {
    assert_eq!(active_section(10_000.0, measure(page_offsets)), "footer-contact");
}

#[test]
fn measure_skips_missing_sections() {
    let offsets = measure(|id| (id == "why-us").then_some(50.0));
    assert_eq!(offsets, vec![("why-us", 50.0)]);
    assert_eq!(active_section(0.0, offsets), "why-us");
}
