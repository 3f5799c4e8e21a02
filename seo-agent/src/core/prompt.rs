//! Prompt construction for the SEO analysis request

/// Services the recommendations should support
pub const SERVICES: [&str; 3] = [
    "AI-Ready Infrastructure Audit",
    "FHIR/TEFCA 90-Day Sprint",
    "Technology Consolidation & Divestiture",
];

pub const DEFAULT_KEYWORDS: [&str; 13] = [
    "AI infrastructure consulting",
    "healthcare IT consulting",
    "FHIR consulting",
    "TEFCA compliance",
    "cloud cost optimization",
    "M&A technology integration",
    "AI workload optimization",
    "Azure migration",
    "cybersecurity consulting",
    "data privacy compliance",
    "financial services technology",
    "IT due diligence",
    "digital transformation strategy",
];

/// Expertise summary used when `SEO_PROFILE_FILE` is not set
pub const DEFAULT_PROFILE: &str = "
Consultancy bridging technology with healthcare and financial services.
- Cloud and DevOps: Azure migrations, multi-cloud management (Azure, AWS, GCP), continuous delivery
- Identity and security: Azure Active Directory, MFA/SSO, Intune, ransomware response, ISO 27001 and SSAE 16 compliance
- Healthcare IT: FHIR/TEFCA interoperability and compliance, PHI handling
- Data: SQL Server reporting, data privacy regulations
- M&A technology: consolidation, divestiture, integration and workflow automation
- IT operations: networking, disaster recovery, vendor management, IT roadmapping
";

pub const SYSTEM_PROMPT: &str = "You are an expert SEO consultant providing actionable advice.";

/// Keys the model is asked to return
pub const REPORT_KEYS: [&str; 6] = [
    "summary",
    "on_page_optimizations",
    "content_enhancements",
    "technical_seo",
    "keyword_opportunities",
    "actionable_steps",
];

/// Inputs for one analysis prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub content: &'a str,
    pub keywords: &'a [String],
    pub profile: &'a str,
    pub previous_report: Option<&'a str>,
    pub max_content_chars: usize,
}

/// Cut `text` to at most `max_chars` characters on a char boundary.
/// Returns the kept slice and whether anything was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (&text[..byte_index], true),
        None => (text, false),
    }
}

/// Build the user message for the chat-completions request
pub fn build_prompt(ctx: &PromptContext<'_>) -> String {
    let (content, truncated) = truncate_chars(ctx.content, ctx.max_content_chars);
    let content_note = if truncated {
        format!("\n[content truncated to the first {} characters]", ctx.max_content_chars)
    } else {
        String::new()
    };

    let services = SERVICES
        .iter()
        .map(|s| format!("- {}", s))
        .collect::<Vec<_>>()
        .join("\n");
    let keywords = ctx
        .keywords
        .iter()
        .map(|k| format!("'{}'", k))
        .collect::<Vec<_>>()
        .join(", ");
    let keys = REPORT_KEYS
        .iter()
        .map(|k| format!("'{}'", k))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an expert SEO consultant. Analyze the following website content and provide actionable SEO improvement suggestions.
Focus on on-page SEO, content optimization, and keyword integration for the services offered:
{services}

Target keywords, based on the services and the expertise profile:
{keywords}.

Expertise profile (align recommendations with it):
---
{profile}
---

Current website content (HTML/text):
---
{content}{content_note}
---

Previous SEO report (if any):
---
{previous}
---

Provide a detailed report including:
1. Summary of current SEO status
2. Recommended on-page optimizations (title, meta description, H1s, content aligned with the expertise profile)
3. Content enhancement suggestions (new blog topics, case studies, updates to existing content)
4. Technical SEO recommendations (if any, based on content structure)
5. Keyword opportunities (new keywords to target or existing ones to strengthen)
6. Actionable steps (specific changes to make to the website files)

Format the output as a JSON object with keys: {keys}.",
        services = services,
        keywords = keywords,
        profile = ctx.profile,
        content = content,
        content_note = content_note,
        previous = ctx.previous_report.unwrap_or("None"),
        keys = keys,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["FHIR consulting".to_string(), "Azure migration".to_string()]
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let (kept, truncated) = truncate_chars("héllo wörld", 4);
        assert_eq!(kept, "héll");
        assert!(truncated);

        let (kept, truncated) = truncate_chars("short", 10);
        assert_eq!(kept, "short");
        assert!(!truncated);

        let (kept, truncated) = truncate_chars("exact", 5);
        assert_eq!(kept, "exact");
        assert!(!truncated);
    }

    #[test]
    fn test_prompt_lists_services_keywords_and_keys() {
        let keywords = keywords();
        let prompt = build_prompt(&PromptContext {
            content: "<h1>Mobtronic</h1>",
            keywords: &keywords,
            profile: "Healthcare IT",
            previous_report: None,
            max_content_chars: 1_000,
        });

        for service in SERVICES {
            assert!(prompt.contains(service));
        }
        assert!(prompt.contains("'FHIR consulting', 'Azure migration'"));
        assert!(prompt.contains("<h1>Mobtronic</h1>"));
        assert!(prompt.contains("Healthcare IT"));
        assert!(prompt.contains("'actionable_steps'"));
        assert!(prompt.contains("Previous SEO report (if any):\n---\nNone\n---"));
        assert!(!prompt.contains("content truncated"));
    }

    #[test]
    fn test_prompt_truncates_content_and_embeds_previous_report() {
        let keywords = keywords();
        let content = "a".repeat(50);
        let prompt = build_prompt(&PromptContext {
            content: &content,
            keywords: &keywords,
            profile: "",
            previous_report: Some(r#"{"summary":"last week"}"#),
            max_content_chars: 10,
        });

        assert!(prompt.contains(&format!("{}\n[content truncated to the first 10 characters]", "a".repeat(10))));
        assert!(!prompt.contains(&"a".repeat(11)));
        assert!(prompt.contains(r#"{"summary":"last week"}"#));
    }
}
