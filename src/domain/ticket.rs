use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle stage of a ticket. Serialized lowercase in the persisted
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "open" => Some(TicketStatus::Open),
            "pending" => Some(TicketStatus::Pending),
            "resolved" => Some(TicketStatus::Resolved),
            _ => None,
        }
    }

    /// User-facing badge label, matching the original UI.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Aberto",
            TicketStatus::Pending => "Em atendimento",
            TicketStatus::Resolved => "Resolvido",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub name: String,
    pub sector: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    pub responses: Vec<TicketResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: Uuid,
    pub message: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Submitter-supplied fields for a new ticket. The store accepts these
/// verbatim; required-field checks belong to the caller.
#[derive(Debug, Clone)]
pub struct TicketInput {
    pub name: String,
    pub sector: String,
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_status_lowercase() {
        let encoded = serde_json::to_string(&TicketStatus::Pending).unwrap();
        assert_eq!(encoded, "\"pending\"");
    }

    #[test]
    fn parses_status() {
        assert_eq!(TicketStatus::from_str("open"), Some(TicketStatus::Open));
        assert_eq!(
            TicketStatus::from_str("RESOLVED"),
            Some(TicketStatus::Resolved)
        );
        assert_eq!(TicketStatus::from_str("closed"), None);
    }

    #[test]
    fn ticket_round_trips_with_camel_case_fields() {
        let ticket = Ticket {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            sector: "TI".to_string(),
            title: "VPN down".to_string(),
            description: "Cannot connect".to_string(),
            status: TicketStatus::Open,
            created_at: Utc::now(),
            resolved_at: None,
            responses: Vec::new(),
        };

        let encoded = serde_json::to_string(&ticket).unwrap();
        assert!(encoded.contains("\"createdAt\""));
        assert!(!encoded.contains("\"resolvedAt\""));

        let decoded: Ticket = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, ticket);
    }

    #[test]
    fn response_serializes_created_at_camel_case() {
        let response = TicketResponse {
            id: Uuid::new_v4(),
            message: "Checking now".to_string(),
            author: "Bob".to_string(),
            created_at: Utc::now(),
        };

        let encoded = serde_json::to_string(&response).unwrap();
        assert!(encoded.contains("\"createdAt\""));
    }
}
