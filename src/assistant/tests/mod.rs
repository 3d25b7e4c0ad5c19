//! Unit tests for the assistant module.


use crate::assistant::domain::{
    AssistantDomainError, AssistantId, AssistantKey, AssistantProfile, AssistantRegistry,
};

/// Builds a profile with the given key and restrictions.
fn profile(
    key: &str,
    domains: &[&str],
    requires_auth: bool,
) -> Result<AssistantProfile, AssistantDomainError> {
    Ok(AssistantProfile::new(
        AssistantKey::new(key)?,
        AssistantId::new(format!("asst_{}", key.replace('-', "_")))?,
        format!("{key} assistant"),
    )?
    .with_allowed_domains(domains.iter().map(|domain| (*domain).to_owned()))
    .with_requires_auth(requires_auth))
}

/// Registry mirroring the shape of the built-in profile table.
fn sample_registry() -> Result<AssistantRegistry, AssistantDomainError> {
    AssistantRegistry::new(
        vec![
            profile("customer-support", &["localhost", "yourcompany.com"], false)?,
            profile("hr-internal", &["localhost", "internal.yourcompany.com"], true)?,
            profile("open-chat", &[], false)?,
            profile("vip-desk", &[], true)?,
        ],
        AssistantKey::new("customer-support")?,
    )
}
