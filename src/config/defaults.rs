//! Built-in settings used when no file or environment value overrides them.

use crate::assistant::domain::{AssistantDomainError, AssistantId, AssistantKey, AssistantProfile};
use std::time::Duration;

pub(super) const DEFAULT_HOST: &str = "0.0.0.0";
pub(super) const DEFAULT_PORT: u16 = 3000;
pub(super) const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:5173", "http://localhost:3000"];
pub(super) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub(super) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub(super) const DEFAULT_ASSISTANT: &str = "customer-support";

struct BuiltinProfile {
    key: &'static str,
    assistant_id: &'static str,
    name: &'static str,
    welcome_message: &'static str,
    color: &'static str,
    allowed_domains: &'static [&'static str],
    requires_auth: bool,
    placeholder: &'static str,
}

const BUILTIN_PROFILES: [BuiltinProfile; 4] = [
    BuiltinProfile {
        key: "customer-support",
        assistant_id: "asst_customer_support_123",
        name: "Customer Support",
        welcome_message: "👋 Hello! I'm here to help with any questions or issues you have. How can I assist you today?",
        color: "#dc2626",
        allowed_domains: &["localhost", "yourcompany.com", "support.yourcompany.com"],
        requires_auth: false,
        placeholder: "Type your message...",
    },
    BuiltinProfile {
        key: "sales",
        assistant_id: "asst_sales_456",
        name: "Sales Assistant",
        welcome_message: "💼 Hi there! I'm here to help you learn about our products and find the perfect solution for your needs. What can I help you with today?",
        color: "#059669",
        allowed_domains: &["localhost", "yourcompany.com", "sales.yourcompany.com"],
        requires_auth: false,
        placeholder: "Ask about our products...",
    },
    BuiltinProfile {
        key: "hr-internal",
        assistant_id: "asst_hr_789",
        name: "HR Assistant",
        welcome_message: "🏢 Hello team member! I'm here to help with HR-related questions, policies, benefits, and workplace support. How can I assist you today?",
        color: "#7c3aed",
        allowed_domains: &["localhost", "internal.yourcompany.com"],
        requires_auth: true,
        placeholder: "Ask about HR policies, benefits...",
    },
    BuiltinProfile {
        key: "technical-support",
        assistant_id: "asst_tech_101",
        name: "Technical Support",
        welcome_message: "🔧 Technical support here! I'm ready to help you troubleshoot issues, resolve technical problems, and provide solutions. What technical issue can I help you with?",
        color: "#ea580c",
        allowed_domains: &["localhost", "support.yourcompany.com", "docs.yourcompany.com"],
        requires_auth: false,
        placeholder: "Describe your technical issue...",
    },
];

/// Returns the built-in profile table in its fixed order.
pub(super) fn builtin_profiles() -> Result<Vec<AssistantProfile>, AssistantDomainError> {
    BUILTIN_PROFILES
        .iter()
        .map(|builtin| {
            Ok(AssistantProfile::new(
                AssistantKey::new(builtin.key)?,
                AssistantId::new(builtin.assistant_id)?,
                builtin.name,
            )?
            .with_welcome_message(builtin.welcome_message)
            .with_color(builtin.color)
            .with_allowed_domains(builtin.allowed_domains.iter().map(|d| (*d).to_owned()))
            .with_requires_auth(builtin.requires_auth)
            .with_placeholder(builtin.placeholder))
        })
        .collect()
}
