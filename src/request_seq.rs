//! Request Sequencing
//!
//! A widget may have several requests in flight. Each dispatch takes a
//! ticket; only the reply holding the latest ticket is applied, so a slow
//! early reply can never overwrite a newer one.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 != 0 && ticket.0 == self.latest
    }
}

/// Copyable per-widget handle over a `RequestSeq`
#[derive(Clone, Copy)]
pub struct InFlight(StoredValue<RequestSeq>);

impl InFlight {
    pub fn new() -> Self {
        Self(StoredValue::new(RequestSeq::default()))
    }

    /// Ticket for a request about to be dispatched
    pub fn begin(&self) -> Ticket {
        self.0.try_update_value(RequestSeq::issue).unwrap_or_default()
    }

    /// Whether the reply for `ticket` may still be applied
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.try_with_value(|seq| seq.is_latest(ticket)).unwrap_or(false)
    }
}
