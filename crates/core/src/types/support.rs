//! Support tickets submitted from the contact form.

use serde::{Deserialize, Serialize};

/// Topic a ticket is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    #[default]
    General,
    Technical,
    Account,
    Billing,
    Feedback,
}

impl TicketCategory {
    /// Every category, in the order the form lists them.
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Technical,
        Self::Account,
        Self::Billing,
        Self::Feedback,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General inquiry",
            Self::Technical => "Technical issue",
            Self::Account => "Account help",
            Self::Billing => "Billing",
            Self::Feedback => "Feedback",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Technical => write!(f, "technical"),
            Self::Account => write!(f, "account"),
            Self::Billing => write!(f, "billing"),
            Self::Feedback => write!(f, "feedback"),
        }
    }
}

impl std::str::FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.to_string() == s)
            .ok_or_else(|| format!("invalid ticket category: {s}"))
    }
}

/// A ticket as sent to the backend. Write-only from the client's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub category: TicketCategory,
    pub subject: String,
    pub message: String,
}
