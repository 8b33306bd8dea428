//! The page pretends to load for a moment after every navigation. Only the
//! most recent load may end the loading state; earlier ones are stale.
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingGate {
    issued: u64,
    pending: Option<LoadTicket>,
}

impl LoadingGate {
    /// Start a new load, superseding any pending one
    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// `true` if `ticket` was the pending load, which is now over
    pub fn finish(&mut self, ticket: LoadTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

pub async fn simulated_load(ticket: LoadTicket, delay: Duration) -> LoadTicket {
    tokio::time::sleep(delay).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_finishes() {
        let mut gate = LoadingGate::default();
        assert!(!gate.is_pending());
        let ticket = gate.begin();
        assert!(gate.is_pending());
        assert!(gate.finish(ticket));
        assert!(!gate.is_pending());
        // finishing twice does nothing
        assert!(!gate.finish(ticket));
    }

    #[test]
    fn superseded_ticket_is_ignored() {
        let mut gate = LoadingGate::default();
        let stale = gate.begin();
        let fresh = gate.begin();
        assert_ne!(stale, fresh);
        assert!(!gate.finish(stale));
        assert!(gate.is_pending());
        assert!(gate.finish(fresh));
    }

    #[test]
    fn stale_ticket_after_completion_is_ignored() {
        let mut gate = LoadingGate::default();
        let stale = gate.begin();
        let fresh = gate.begin();
        assert!(gate.finish(fresh));
        assert!(!gate.finish(stale));
        assert!(!gate.is_pending());
    }

    #[tokio::test]
    async fn simulated_load_hands_back_its_ticket() {
        let mut gate = LoadingGate::default();
        let ticket = gate.begin();
        let returned = simulated_load(ticket, Duration::from_millis(1)).await;
        assert_eq!(returned, ticket);
        assert!(gate.finish(returned));
    }
}
