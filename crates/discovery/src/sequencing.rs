//! Dropping stale results.
//!
//! `discover` itself is synchronous, but a caller that also queries the
//! backend can have several searches in flight. Each search takes a ticket
//! when it starts; its result is only accepted if no newer search has
//! already delivered.

use tracing::debug;

/// Issued per search, ordered by issue time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Keeps the result of the most recently issued search that has delivered.
#[derive(Debug)]
pub struct ResultSequencer<T> {
    next: u64,
    accepted: Option<Ticket>,
    latest: Option<T>,
}

impl<T> ResultSequencer<T> {
    pub fn new() -> Self {
        Self {
            next: 0,
            accepted: None,
            latest: None,
        }
    }

    /// Start a new search. The counter saturates at `u64::MAX`.
    pub fn issue(&mut self) -> Ticket {
        let ticket = Ticket(self.next);
        self.next = self.next.saturating_add(1);
        ticket
    }

    /// Offer a finished search's result.
    ///
    /// Returns `false` (and drops `value`) if a newer ticket was already
    /// accepted.
    pub fn accept(&mut self, ticket: Ticket, value: T) -> bool {
        if self.accepted.is_some_and(|current| ticket <= current) {
            debug!("Dropping stale result for ticket {}", ticket.0);
            return false;
        }
        self.accepted = Some(ticket);
        self.latest = Some(value);
        true
    }

    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    /// Ticket of the result currently held
    pub fn accepted_ticket(&self) -> Option<Ticket> {
        self.accepted
    }
}

impl<T> Default for ResultSequencer<T> {
    fn default() -> Self {
        Self::new()
    }
}
