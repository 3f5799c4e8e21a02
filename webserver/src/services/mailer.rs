//! SMTP mail transport
//!
//! STARTTLS relay with username/password login, one connection pool shared by
//! both notifications.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::error::NotificationError;
use crate::traits::MailTransport;
use crate::types::OutboundEmail;
use shared::{service_warn, ServiceId};

/// Real SMTP transport; holds no connection when mail is not configured
#[derive(Clone)]
pub struct RealMailTransport {
    mailer: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl RealMailTransport {
    /// Build the transport from mail settings.
    ///
    /// Without a password no SMTP client is created and every send reports
    /// `NotConfigured`.
    pub fn new(config: &MailConfig) -> Result<Self, NotificationError> {
        let Some(password) = config.email_password.clone() else {
            return Ok(Self { mailer: None });
        };

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)
            .map_err(|e| NotificationError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(Credentials::new(config.email_user.clone(), password))
            .timeout(Some(config.timeout))
            .build();

        Ok(Self { mailer: Some(mailer) })
    }

    /// Build the transport, falling back to a disabled one when the SMTP
    /// settings are unusable. The returned config matches the transport, so a
    /// fallback reports mail as not configured.
    pub fn from_config(config: MailConfig) -> (Self, MailConfig) {
        match Self::new(&config) {
            Ok(transport) => (transport, config),
            Err(e) => {
                service_warn!(ServiceId::current(), "⚠️ Mail transport unavailable: {}", e);
                (Self::disabled(), config.without_password())
            }
        }
    }

    /// Transport that never connects anywhere
    pub fn disabled() -> Self {
        Self { mailer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some()
    }
}

#[async_trait]
impl MailTransport for RealMailTransport {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotificationError> {
        let mailer = self.mailer.as_ref().ok_or(NotificationError::NotConfigured)?;
        let message = build_message(email)?;

        mailer
            .send(message)
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address.parse().map_err(|e: lettre::address::AddressError| NotificationError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Turn an outbound email into a plain-text MIME message
pub fn build_message(email: OutboundEmail) -> Result<Message, NotificationError> {
    Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(|e| NotificationError::MessageBuild(e.to_string()))
}
