//! Cancelable one-shot timers
//!
//! The queue never reads a clock. The owner passes the current [`Instant`]
//! when scheduling and when collecting due timers, which keeps the queue
//! portable and deterministic under test.
//!
//! Handles allow cancelling a single timer. The light strip itself only ever
//! cancels everything at once, the per-handle API is for other owners.

use embassy_time::{Duration, Instant};
use heapless::Vec;

/// Opaque handle of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u32);

#[derive(Debug, Clone)]
struct Entry<T> {
    handle: TimerHandle,
    deadline: Instant,
    payload: T,
}

/// A timer that reached its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expired<T> {
    /// The moment the timer was due, not the moment it was collected
    pub deadline: Instant,
    pub payload: T,
}

/// Fixed capacity queue of one-shot timers
///
/// N is the number of timers that can be pending at once
#[derive(Debug)]
pub struct TimerQueue<T, const N: usize> {
    entries: Vec<Entry<T>, N>,
    next_handle: u32,
}

impl<T, const N: usize> TimerQueue<T, N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Schedule `payload` to fire `delay` after `now`
    ///
    /// Returns the payload back if the queue is full
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> Result<TimerHandle, T> {
        self.schedule_at(now + delay, payload)
    }

    /// Schedule `payload` to fire at `deadline`
    ///
    /// Returns the payload back if the queue is full
    pub fn schedule_at(&mut self, deadline: Instant, payload: T) -> Result<TimerHandle, T> {
        let handle = TimerHandle(self.next_handle);
        self.entries
            .push(Entry {
                handle,
                deadline,
                payload,
            })
            .map_err(|entry| entry.payload)?;
        self.next_handle = self.next_handle.wrapping_add(1);
        Ok(handle)
    }

    /// Cancel a pending timer
    ///
    /// Returns false if the timer already fired or was cancelled
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let Some(position) = self.entries.iter().position(|e| e.handle == handle) else {
            return false;
        };
        self.entries.remove(position);
        true
    }

    /// Cancel every pending timer
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Remove and return the earliest timer due at `now`
    ///
    /// Timers sharing a deadline fire in scheduling order.
    pub fn pop_expired(&mut self, now: Instant) -> Option<Expired<T>> {
        let position = self.earliest()?;
        if self.entries[position].deadline > now {
            return None;
        }
        let entry = self.entries.remove(position);
        Some(Expired {
            deadline: entry.deadline,
            payload: entry.payload,
        })
    }

    /// Get the deadline of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Instant> {
        self.earliest().map(|position| self.entries[position].deadline)
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Get the number of pending timers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn earliest(&self) -> Option<usize> {
        // Handles wrap, so ties are broken by queue position which follows
        // scheduling order.
        let mut earliest: Option<usize> = None;
        for (position, entry) in self.entries.iter().enumerate() {
            match earliest {
                Some(best) if self.entries[best].deadline <= entry.deadline => {}
                _ => earliest = Some(position),
            }
        }
        earliest
    }
}

impl<T, const N: usize> Default for TimerQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
