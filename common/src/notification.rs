//! Broadcast channel for toast messages and the single-slot display state.
//!
//! [`MessageService`] fans every message out to its subscribers as soon as it
//! is emitted. [`MessageSlot`] is what a toast widget keeps: one message at a
//! time, where each emission hands out a ticket and only the latest ticket
//! can clear the slot. A timer started for an older message therefore never
//! removes a newer one.

use std::cell::{Cell, RefCell};

use crate::model::message::{Message, MessageType};
use crate::service::Notifier;

/// Handle returned by [`MessageService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&Message)>;

/// In-process message bus. Interior mutability so it can be shared behind an
/// `Rc` by every view that reports to the user.
#[derive(Default)]
pub struct MessageService {
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for every subsequent message.
    pub fn subscribe(&self, callback: impl Fn(&Message) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Box::new(callback)));
        id
    }

    /// Returns `false` when the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Delivers the message to every current subscriber. Never fails; with no
    /// subscribers the message is dropped.
    pub fn emit(&self, message: Message) {
        for (_, subscriber) in self.subscribers.borrow().iter() {
            subscriber(&message);
        }
    }
}

impl Notifier for MessageService {
    fn show_message(&self, text: &str, kind: MessageType) {
        self.emit(Message::new(text, kind));
    }
}

/// Identifies one emission shown in a [`MessageSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Option<(Ticket, Message)>,
    issued: u64,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref().map(|(_, message)| message)
    }

    /// Replaces whatever is displayed. The returned ticket is what the expiry
    /// timer must hand back to [`MessageSlot::expire`].
    pub fn show(&mut self, message: Message) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.current = Some((ticket, message));
        ticket
    }

    /// Clears the slot if `ticket` belongs to the message on display.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        match &self.current {
            Some((shown, _)) if *shown == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Manual dismissal.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
