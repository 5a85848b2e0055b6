//! Selection events
//!
//! A bounded queue of "box picked" events built on `critical-section` and
//! `heapless::Deque`. Publishers may live in other tasks or interrupt
//! handlers; the light strip owns the subscriber and drains it every tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::config::BoxId;

/// A pick box was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    pub id: BoxId,
}

/// Error returned when publishing to a full queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub SelectionEvent);

/// Queue of pending selection events
pub struct SelectionChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<SelectionEvent, SIZE>>>,
}

impl<const SIZE: usize> SelectionChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a publisher handle for this channel
    pub const fn publisher(&self) -> SelectionPublisher<'_, SIZE> {
        SelectionPublisher { channel: self }
    }

    /// Get the subscriber handle for this channel
    ///
    /// Only the light strip should hold it, events are consumed on read.
    pub const fn subscriber(&self) -> SelectionSubscriber<'_, SIZE> {
        SelectionSubscriber { channel: self }
    }

    fn push(&self, event: SelectionEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFull)
        })
    }

    fn pop(&self) -> Option<SelectionEvent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for SelectionChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing end of a [`SelectionChannel`]
#[derive(Clone, Copy)]
pub struct SelectionPublisher<'a, const SIZE: usize> {
    channel: &'a SelectionChannel<SIZE>,
}

impl<const SIZE: usize> SelectionPublisher<'_, SIZE> {
    /// Announce that a box was picked
    pub fn publish(&self, id: BoxId) -> Result<(), QueueFull> {
        self.channel.push(SelectionEvent { id })
    }
}

/// Consuming end of a [`SelectionChannel`]
#[derive(Clone, Copy)]
pub struct SelectionSubscriber<'a, const SIZE: usize> {
    channel: &'a SelectionChannel<SIZE>,
}

impl<const SIZE: usize> SelectionSubscriber<'_, SIZE> {
    /// Take the oldest pending event
    pub fn try_next(&self) -> Option<SelectionEvent> {
        self.channel.pop()
    }
}
