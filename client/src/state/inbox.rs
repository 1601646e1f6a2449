//! Inbox view state: which messages were marked read during this visit.
//!
//! Read marks live only as long as the page; the message records themselves
//! are never modified.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use std::collections::BTreeSet;

use crate::data::Message;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboxState {
    read: BTreeSet<u32>,
}

impl InboxState {
    pub fn mark_read(&mut self, id: u32) {
        self.read.insert(id);
    }

    pub fn is_unread(&self, message: &Message) -> bool {
        message.unread && !self.read.contains(&message.id)
    }

    pub fn unread_count(&self, messages: &[Message]) -> usize {
        messages.iter().filter(|m| self.is_unread(m)).count()
    }
}
