//! Single-flight guard for per-element asynchronous work.
//!
//! Each enhanced form (and like button) owns one [`FlightFlag`]. Starting a
//! request takes a [`FlightTicket`]; while the ticket is alive further
//! attempts are turned away. Dropping the ticket, on any path, reopens the
//! flag.

use std::{cell::Cell, rc::Rc};

/// Shared "request in flight" marker. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct FlightFlag(Rc<Cell<bool>>);

impl FlightFlag {
    /// A flag with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a ticket is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.0.get()
    }

    /// Claim the flag. Returns `None` when another request already holds it.
    pub fn try_begin(&self) -> Option<FlightTicket> {
        if self.0.replace(true) {
            return None;
        }
        Some(FlightTicket(Rc::clone(&self.0)))
    }
}

/// Proof that the holder owns the in-flight slot. Released on drop.
#[derive(Debug)]
#[must_use = "dropping the ticket immediately releases the flag"]
pub struct FlightTicket(Rc<Cell<bool>>);

impl Drop for FlightTicket {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::FlightFlag;

    #[test]
    fn second_attempt_is_rejected_while_first_is_in_flight() {
        let flag = FlightFlag::new();
        let ticket = flag.try_begin();
        assert!(ticket.is_some());
        assert!(flag.is_in_flight());
        assert!(flag.try_begin().is_none());
    }

    #[test]
    fn dropping_the_ticket_reopens_the_flag() {
        let flag = FlightFlag::new();
        let ticket = flag.try_begin();
        drop(ticket);
        assert!(!flag.is_in_flight());
        assert!(flag.try_begin().is_some());
    }

    #[test]
    fn clones_share_state() {
        let flag = FlightFlag::new();
        let other = flag.clone();
        let _ticket = flag.try_begin();
        assert!(other.is_in_flight());
        assert!(other.try_begin().is_none());
    }
}
