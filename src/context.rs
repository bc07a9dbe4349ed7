use std::sync::Arc;

use crate::store::TicketStore;

/// Dependencies handed to command handlers. The store is injected here
/// rather than living in a global, so tests can run isolated instances.
#[derive(Clone)]
pub struct AppContext {
    pub tickets: Arc<TicketStore>,
}

impl AppContext {
    pub fn new(tickets: Arc<TicketStore>) -> Self {
        Self { tickets }
    }
}
