//! Notification dispatcher
//!
//! Sends the submitter confirmation and the internal alert for a stored lead.
//! Failures are logged and reported back, never raised: a lead that reached
//! the record store is a successful submission regardless of mail.

use crate::config::MailConfig;
use crate::core::{confirmation_email, internal_alert_email};
use crate::traits::MailTransport;
use crate::types::{DeliveryOutcome, LeadRecord, NotificationReport, OutboundEmail};
use shared::{service_info, service_warn, ServiceId};

const NOT_CONFIGURED: &str = "email not configured";

pub struct NotificationDispatcher<M: MailTransport> {
    transport: M,
    config: MailConfig,
}

impl<M: MailTransport> NotificationDispatcher<M> {
    pub fn new(transport: M, config: MailConfig) -> Self {
        Self { transport, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Send both notifications for a stored lead.
    ///
    /// The two sends run concurrently and independently; one failing has no
    /// effect on the other.
    pub async fn notify(&self, record: &LeadRecord) -> NotificationReport {
        if !self.is_configured() {
            service_warn!(
                ServiceId::current(),
                "⚠️ Email not configured - skipping notifications for {}",
                record.lead_id
            );
            return NotificationReport {
                confirmation: DeliveryOutcome::Skipped { reason: NOT_CONFIGURED.to_string() },
                internal_alert: DeliveryOutcome::Skipped { reason: NOT_CONFIGURED.to_string() },
            };
        }

        let confirmation = confirmation_email(record, &self.config.email_user);
        let alert = internal_alert_email(record, &self.config.email_user, &self.config.internal_email);

        let (confirmation, internal_alert) = tokio::join!(
            self.deliver("confirmation email", confirmation),
            self.deliver("internal notification", alert),
        );

        NotificationReport { confirmation, internal_alert }
    }

    async fn deliver(&self, kind: &str, email: OutboundEmail) -> DeliveryOutcome {
        let recipient = email.to.clone();
        match self.transport.send(email).await {
            Ok(()) => {
                service_info!(ServiceId::current(), "✅ Sent {} to {}", kind, recipient);
                DeliveryOutcome::Sent { recipient }
            }
            Err(e) => {
                service_warn!(ServiceId::current(), "❌ Error sending {} to {}: {}", kind, recipient, e);
                DeliveryOutcome::Failed { recipient, reason: e.to_string() }
            }
        }
    }
}
