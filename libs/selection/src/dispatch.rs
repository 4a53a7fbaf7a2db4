use std::{cell::Cell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tags every outgoing query so that only the response to the most recently
/// dispatched one is ever rendered. Clones share the same sequence.
#[derive(Debug, Default, Clone)]
pub struct QueryDispatcher {
    issued: Rc<Cell<u64>>,
}

impl PartialEq for QueryDispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.issued, &other.issued)
    }
}

impl QueryDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, query: &str) -> Ticket {
        let ticket = Ticket(self.issued.get() + 1);
        self.issued.set(ticket.0);
        log::trace!("dispatch:issue {} {:?}", ticket, query);
        ticket
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued.get()
    }

    /// Passes `value` through only when `ticket` hasn't been superseded.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_latest(ticket) {
            Some(value)
        } else {
            log::debug!(
                "dispatch:stale {} (latest #{}), discarding",
                ticket,
                self.issued.get()
            );
            None
        }
    }
}
