//! Role-discovery collaborator boundary
//!
//! External providers (web search, curated APIs) can suggest candidate role
//! titles for a profile. They are optional: the engine only requires the
//! `RoleDiscovery` capability, and the deterministic fallback below stands in
//! whenever no provider is configured or a provider fails.

use crate::error::Result;

/// Suggests candidate role titles for a set of detected skills.
pub trait RoleDiscovery {
    fn discover(&self, skills: &[String], resume_text: &str) -> Result<Vec<String>>;
}

/// Deterministic fallback provider with a small generic role set.
#[derive(Debug, Default, Clone)]
pub struct StaticRoleDiscovery;

impl StaticRoleDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl RoleDiscovery for StaticRoleDiscovery {
    fn discover(&self, skills: &[String], _resume_text: &str) -> Result<Vec<String>> {
        let roles: &[&str] = if skills.is_empty() {
            &["Software Engineer", "Systems Analyst", "Technical Consultant"]
        } else {
            &["Solution Architect", "Technical Lead", "Research Scientist"]
        };
        Ok(roles.iter().map(|r| r.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_without_skills() {
        let roles = StaticRoleDiscovery::new().discover(&[], "text").unwrap();
        assert_eq!(roles, ["Software Engineer", "Systems Analyst", "Technical Consultant"]);
    }

    #[test]
    fn test_fallback_with_skills() {
        let skills = vec!["Rust".to_string()];
        let roles = StaticRoleDiscovery::new().discover(&skills, "text").unwrap();
        assert_eq!(roles, ["Solution Architect", "Technical Lead", "Research Scientist"]);
    }
}
