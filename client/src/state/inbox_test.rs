use super::*;

fn message(id: u32, unread: bool) -> Message {
    Message {
        id,
        sender: "Sarah Johnson".to_owned(),
        property: "Kilimani 2BR Apartment".to_owned(),
        body: "Is it available?".to_owned(),
        time: "2 hours ago".to_owned(),
        unread,
    }
}

#[test]
fn unread_flag_comes_from_record() {
    let state = InboxState::default();
    assert!(state.is_unread(&message(1, true)));
    assert!(!state.is_unread(&message(2, false)));
}

#[test]
fn mark_read_hides_new_badge() {
    let mut state = InboxState::default();
    let msg = message(1, true);
    state.mark_read(1);
    assert!(!state.is_unread(&msg));
    assert!(msg.unread);
}

#[test]
fn unread_count_tracks_marks() {
    let messages = vec![message(1, true), message(2, true), message(3, false)];
    let mut state = InboxState::default();
    assert_eq!(state.unread_count(&messages), 2);
    state.mark_read(2);
    assert_eq!(state.unread_count(&messages), 1);
    state.mark_read(3);
    assert_eq!(state.unread_count(&messages), 1);
}
