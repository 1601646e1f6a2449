#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn request_position_reports_unsupported_outside_browser() {
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    request_position(move |outcome| *sink.borrow_mut() = Some(outcome));
    assert_eq!(*seen.borrow(), Some(Err(GeolocationError::Unsupported)));
}

#[test]
fn failure_message_is_included_in_display() {
    let err = GeolocationError::Failed("User denied Geolocation".to_owned());
    assert_eq!(err.to_string(), "position request failed: User denied Geolocation");
}
