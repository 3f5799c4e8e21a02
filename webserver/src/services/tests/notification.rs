//! Tests for the notification dispatcher

use super::fixtures::{full_lead, minimal_lead, stored_record};
use crate::config::MailConfig;
use crate::error::NotificationError;
use crate::services::NotificationDispatcher;
use crate::traits::MockMailTransport;
use crate::types::DeliveryOutcome;

fn configured() -> MailConfig {
    let mut config = MailConfig::disabled().with_password("secret");
    config.internal_email = "ops@mobtronic.org".to_string();
    config
}

#[tokio::test]
async fn test_unconfigured_mail_skips_both_sends() {
    let mut transport = MockMailTransport::new();
    transport.expect_send().never();

    let dispatcher = NotificationDispatcher::new(transport, MailConfig::disabled());
    let report = dispatcher.notify(&stored_record(minimal_lead())).await;

    assert!(matches!(report.confirmation, DeliveryOutcome::Skipped { .. }));
    assert!(matches!(report.internal_alert, DeliveryOutcome::Skipped { .. }));
}

#[tokio::test]
async fn test_both_messages_are_sent() {
    let mut transport = MockMailTransport::new();
    transport
        .expect_send()
        .withf(|email| email.to == "a@x.com" && email.subject.starts_with("Thank you"))
        .times(1)
        .returning(|_| Ok(()));
    transport
        .expect_send()
        .withf(|email| email.to == "ops@mobtronic.org" && email.subject.starts_with("New Lead: "))
        .times(1)
        .returning(|_| Ok(()));

    let dispatcher = NotificationDispatcher::new(transport, configured());
    let report = dispatcher.notify(&stored_record(minimal_lead())).await;

    assert_eq!(report.confirmation, DeliveryOutcome::Sent { recipient: "a@x.com".to_string() });
    assert_eq!(
        report.internal_alert,
        DeliveryOutcome::Sent { recipient: "ops@mobtronic.org".to_string() }
    );
}

#[tokio::test]
async fn test_failed_confirmation_does_not_block_alert() {
    let mut transport = MockMailTransport::new();
    transport
        .expect_send()
        .withf(|email| email.to == "a@x.com")
        .times(1)
        .returning(|_| Err(NotificationError::Transport("mailbox unavailable".to_string())));
    transport
        .expect_send()
        .withf(|email| email.to == "ops@mobtronic.org")
        .times(1)
        .returning(|_| Ok(()));

    let dispatcher = NotificationDispatcher::new(transport, configured());
    let report = dispatcher.notify(&stored_record(minimal_lead())).await;

    match report.confirmation {
        DeliveryOutcome::Failed { recipient, reason } => {
            assert_eq!(recipient, "a@x.com");
            assert!(reason.contains("mailbox unavailable"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(report.internal_alert.is_sent());
}

#[tokio::test]
async fn test_failed_alert_does_not_block_confirmation() {
    let mut transport = MockMailTransport::new();
    transport
        .expect_send()
        .withf(|email| email.to == "ops@mobtronic.org")
        .times(1)
        .returning(|_| Err(NotificationError::Transport("535 authentication failed".to_string())));
    transport
        .expect_send()
        .withf(|email| email.to == "ravi@clinic.example")
        .times(1)
        .returning(|_| Ok(()));

    let dispatcher = NotificationDispatcher::new(transport, configured());
    let report = dispatcher.notify(&stored_record(full_lead())).await;

    assert!(report.confirmation.is_sent());
    assert!(matches!(report.internal_alert, DeliveryOutcome::Failed { .. }));
}

#[tokio::test]
async fn test_alert_body_carries_lead_details() {
    let mut transport = MockMailTransport::new();
    transport
        .expect_send()
        .withf(|email| email.to == "ravi@clinic.example")
        .returning(|_| Ok(()));
    transport
        .expect_send()
        .withf(|email| {
            email.to == "ops@mobtronic.org"
                && email.subject == "New Lead: MOB-20261018-0002 - North Clinic, LLC"
                && email.body.contains("- UTM Campaign: fall-launch")
                && email.body.contains("Consent Given: Yes")
        })
        .times(1)
        .returning(|_| Ok(()));

    let dispatcher = NotificationDispatcher::new(transport, configured());
    let report = dispatcher.notify(&stored_record(full_lead())).await;

    assert!(report.internal_alert.is_sent());
}
