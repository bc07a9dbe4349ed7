use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ticket::{Ticket, TicketInput, TicketResponse, TicketStatus};
use crate::error::{AppError, AppResult};
use crate::services::BlobStore;

const TICKETS_KEY: &str = "tickets";
const LOGS_KEY: &str = "ticket_logs";
const RECORD_VERSION: u32 = 1;
const DEFAULT_AUTHOR: &str = "Support";

/// On-disk envelope for a ticket collection. The version tag exists so a
/// future schema change can migrate instead of corrupting silently.
#[derive(Serialize, Deserialize)]
struct TicketRecord {
    version: u32,
    tickets: Vec<Ticket>,
}

/// Authoritative owner of the live tickets and the resolved-ticket log.
///
/// Every operation is a full-collection read-modify-write against the
/// injected blob store: load, mutate in memory, write back. This assumes
/// a single writer; concurrent writers would lose updates.
pub struct TicketStore {
    blobs: Arc<dyn BlobStore>,
}

impl TicketStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// All tickets in insertion order. Callers filter client-side.
    pub fn list_tickets(&self) -> AppResult<Vec<Ticket>> {
        self.load(TICKETS_KEY)
    }

    pub fn get_ticket(&self, id: Uuid) -> AppResult<Ticket> {
        self.load(TICKETS_KEY)?
            .into_iter()
            .find(|ticket| ticket.id == id)
            .ok_or(AppError::TicketNotFound(id))
    }

    pub fn create_ticket(&self, input: TicketInput) -> AppResult<Ticket> {
        let mut tickets = self.load(TICKETS_KEY)?;

        let ticket = Ticket {
            id: Uuid::new_v4(),
            name: input.name,
            sector: input.sector,
            title: input.title,
            description: input.description,
            status: TicketStatus::Open,
            created_at: Utc::now(),
            resolved_at: None,
            responses: Vec::new(),
        };

        tickets.push(ticket.clone());
        self.save(TICKETS_KEY, &tickets)?;
        Ok(ticket)
    }

    /// Appends a support response and moves the ticket to `Pending`.
    /// A resolved ticket is terminal and rejects further responses.
    pub fn respond_to_ticket(
        &self,
        id: Uuid,
        message: &str,
        author: Option<&str>,
    ) -> AppResult<Ticket> {
        let mut tickets = self.load(TICKETS_KEY)?;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(AppError::TicketNotFound(id))?;

        if ticket.status == TicketStatus::Resolved {
            return Err(AppError::TicketResolved(id));
        }

        ticket.responses.push(TicketResponse {
            id: Uuid::new_v4(),
            message: message.to_string(),
            author: author.unwrap_or(DEFAULT_AUTHOR).to_string(),
            created_at: Utc::now(),
        });
        ticket.status = TicketStatus::Pending;

        let updated = ticket.clone();
        self.save(TICKETS_KEY, &tickets)?;
        Ok(updated)
    }

    /// Marks the ticket resolved and archives a snapshot of it to the log.
    /// Resolution is legal from `Open` or `Pending`; re-resolution is not.
    pub fn resolve_ticket(&self, id: Uuid) -> AppResult<Ticket> {
        let mut tickets = self.load(TICKETS_KEY)?;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(AppError::TicketNotFound(id))?;

        if ticket.status == TicketStatus::Resolved {
            return Err(AppError::TicketResolved(id));
        }

        ticket.status = TicketStatus::Resolved;
        ticket.resolved_at = Some(Utc::now());

        let resolved = ticket.clone();
        self.save(TICKETS_KEY, &tickets)?;

        let mut logs = self.load(LOGS_KEY)?;
        logs.push(resolved.clone());
        self.save(LOGS_KEY, &logs)?;

        Ok(resolved)
    }

    /// Archived snapshots of resolved tickets, in resolution order.
    pub fn logs(&self) -> AppResult<Vec<Ticket>> {
        self.load(LOGS_KEY)
    }

    fn load(&self, key: &str) -> AppResult<Vec<Ticket>> {
        let Some(raw) = self.blobs.read(key)? else {
            return Ok(Vec::new());
        };
        let record: TicketRecord = serde_json::from_str(&raw)
            .map_err(|err| AppError::Persistence(format!("invalid '{key}' record: {err}")))?;
        if record.version != RECORD_VERSION {
            return Err(AppError::Persistence(format!(
                "unsupported '{key}' record version {}",
                record.version
            )));
        }
        Ok(record.tickets)
    }

    fn save(&self, key: &str, tickets: &[Ticket]) -> AppResult<()> {
        let record = TicketRecord {
            version: RECORD_VERSION,
            tickets: tickets.to_vec(),
        };
        let data = serde_json::to_string_pretty(&record)
            .map_err(|err| AppError::Persistence(format!("failed to encode '{key}': {err}")))?;
        self.blobs.write(key, &data)
    }
}
