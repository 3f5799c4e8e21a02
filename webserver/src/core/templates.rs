//! Email templates for lead notifications

use crate::types::{LeadRecord, OutboundEmail};

/// Human-readable service name for the `topic` a form was submitted under
pub fn service_name_for_topic(topic: &str) -> &'static str {
    match topic {
        "infra" => "AI-Ready Infrastructure Audit",
        "fhir" => "FHIR/TEFCA 90-Day Sprint",
        "consolidation" => "Technology Consolidation & Divestiture",
        _ => "Our Services",
    }
}

/// Thank-you message sent to the person who submitted the form
pub fn confirmation_email(record: &LeadRecord, from: &str) -> OutboundEmail {
    let lead = &record.lead;
    let service_name = service_name_for_topic(&lead.topic);

    let body = format!(
        "Dear {first_name},

Thank you for your interest in {service_name} from Mobtronic LLC.

We have received your inquiry (Reference: {lead_id}) and our team will review your requirements.
You can expect to hear from us within 24-48 hours.

In the meantime, you can download our executive briefs and service overviews from your confirmation page.

Best regards,
The Mobtronic Team

---
Mobtronic LLC
Building Infrastructure Behind $4T+ Alternative Investments
Email: support@mobtronic.org
Website: https://mobtronic.org

This email was sent in response to your inquiry on our website. If you did not make this request, please ignore this email.
",
        first_name = lead.first_name,
        service_name = service_name,
        lead_id = record.lead_id,
    );

    OutboundEmail {
        from: from.to_string(),
        to: lead.email.clone(),
        subject: format!("Thank you for your interest in Mobtronic LLC - {}", record.lead_id),
        body,
    }
}

/// Alert sent to the operations mailbox for every new lead
pub fn internal_alert_email(record: &LeadRecord, from: &str, to: &str) -> OutboundEmail {
    let lead = &record.lead;
    let company = if lead.company.is_empty() { "Unknown Company" } else { lead.company.as_str() };
    let notes = if lead.notes.is_empty() { "None provided" } else { lead.notes.as_str() };

    let body = format!(
        "New lead submission received:

Lead ID: {lead_id}
Timestamp: {timestamp}

Contact Information:
- Name: {first_name} {last_name}
- Email: {email}
- Company: {company_field}
- Role: {role}
- Phone: {phone}

Service Interest: {topic}
Notes: {notes}

Marketing Attribution:
- Source Page: {source_page}
- UTM Source: {utm_source}
- UTM Medium: {utm_medium}
- UTM Campaign: {utm_campaign}

Consent Given: {consent}

---
This notification was generated automatically by the Mobtronic CRM system.
",
        lead_id = record.lead_id,
        timestamp = record.timestamp,
        first_name = lead.first_name,
        last_name = lead.last_name,
        email = lead.email,
        company_field = lead.company,
        role = lead.role,
        phone = lead.phone,
        topic = lead.topic,
        notes = notes,
        source_page = lead.source_page,
        utm_source = lead.utm_source,
        utm_medium = lead.utm_medium,
        utm_campaign = lead.utm_campaign,
        consent = lead.consent_label(),
    );

    OutboundEmail {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!("New Lead: {} - {}", record.lead_id, company),
        body,
    }
}
