//! Type definitions for the lead intake service
//!
//! Request payload views, stored records and notification outcomes. Service
//! traits live in `traits.rs`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column headers of the record store, in row order
pub const LEAD_HEADERS: [&str; 17] = [
    "Timestamp",
    "Lead ID",
    "First Name",
    "Last Name",
    "Email",
    "Company",
    "Role",
    "Phone",
    "Topic",
    "Notes",
    "Consent",
    "Source Page",
    "UTM Source",
    "UTM Medium",
    "UTM Campaign",
    "UTM Term",
    "UTM Content",
];

/// A lead as submitted by the website form.
///
/// Every field is optional on the wire; absent values become empty strings
/// and an absent consent flag becomes `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub phone: String,
    pub topic: String,
    pub notes: String,
    pub consent: bool,
    pub source_page: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
}

impl LeadSubmission {
    /// Build a submission from an already validated JSON object.
    ///
    /// Non-string scalars are rendered with their JSON text so a numeric phone
    /// number or a boolean flag sent as a string is still stored.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        Self {
            first_name: field_text(payload, "firstName"),
            last_name: field_text(payload, "lastName"),
            email: field_text(payload, "email"),
            company: field_text(payload, "company"),
            role: field_text(payload, "role"),
            phone: field_text(payload, "phone"),
            topic: field_text(payload, "topic"),
            notes: field_text(payload, "notes"),
            consent: payload.get("consent").map(is_affirmative).unwrap_or(false),
            source_page: field_text(payload, "sourcePage"),
            utm_source: field_text(payload, "utmSource"),
            utm_medium: field_text(payload, "utmMedium"),
            utm_campaign: field_text(payload, "utmCampaign"),
            utm_term: field_text(payload, "utmTerm"),
            utm_content: field_text(payload, "utmContent"),
        }
    }

    /// Consent rendered the way the store and the alert email show it
    pub fn consent_label(&self) -> &'static str {
        if self.consent { "Yes" } else { "No" }
    }
}

fn field_text(payload: &Map<String, Value>, key: &str) -> String {
    match payload.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Interpret a consent value sent by a form: booleans, `"true"`/`"yes"`/`"on"`/`"1"`
/// strings and non-zero numbers count as given.
pub fn is_affirmative(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "1"
        ),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        _ => false,
    }
}

/// A lead after it has been written to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Local time of the write, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub lead_id: String,
    pub lead: LeadSubmission,
}

impl LeadRecord {
    /// Row values in `LEAD_HEADERS` order
    pub fn to_row(&self) -> [&str; 17] {
        let lead = &self.lead;
        [
            self.timestamp.as_str(),
            self.lead_id.as_str(),
            lead.first_name.as_str(),
            lead.last_name.as_str(),
            lead.email.as_str(),
            lead.company.as_str(),
            lead.role.as_str(),
            lead.phone.as_str(),
            lead.topic.as_str(),
            lead.notes.as_str(),
            lead.consent_label(),
            lead.source_page.as_str(),
            lead.utm_source.as_str(),
            lead.utm_medium.as_str(),
            lead.utm_campaign.as_str(),
            lead.utm_term.as_str(),
            lead.utm_content.as_str(),
        ]
    }
}

/// A plain-text message ready to hand to a mail transport
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// What happened to one notification
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Sent { recipient: String },
    Skipped { reason: String },
    Failed { recipient: String, reason: String },
}

impl DeliveryOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DeliveryOutcome::Sent { .. })
    }
}

/// Outcome of both notifications sent for one lead
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationReport {
    pub confirmation: DeliveryOutcome,
    pub internal_alert: DeliveryOutcome,
}

/// Body of a successful `/submit-lead` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeadResponse {
    pub success: bool,
    pub message: String,
    pub lead_id: String,
}
