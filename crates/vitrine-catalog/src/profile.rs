//! Site owner profile.

use serde::{Deserialize, Serialize};

/// The owner's profile, rendered in the hero, about, and footer sections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteProfile {
    /// Owner's display name
    #[serde(default)]
    pub name: String,

    /// One-line tagline under the name
    #[serde(default)]
    pub tagline: String,

    /// About-section paragraphs
    #[serde(default)]
    pub about: Vec<String>,

    /// Skill badges shown alongside the about panel
    #[serde(default)]
    pub skills: Vec<String>,

    /// Social links for the footer and hero
    #[serde(default)]
    pub social: SocialLinks,
}

/// External profile links. All optional; absent links are not rendered.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub twitter: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_profile() {
        let raw = r#"
            name = "Jane Doe"
            tagline = "Quantitative researcher"
            about = ["First paragraph.", "Second paragraph."]
            skills = ["Rust", "CUDA"]

            [social]
            github = "https://github.com/janedoe"
            email = "jane@example.com"
        "#;

        let profile: SiteProfile = toml::from_str(raw).unwrap();

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.about.len(), 2);
        assert_eq!(
            profile.social.github.as_deref(),
            Some("https://github.com/janedoe")
        );
        assert!(profile.social.linkedin.is_none());
    }

    #[test]
    fn everything_defaults_to_empty() {
        let profile: SiteProfile = toml::from_str("").unwrap();

        assert!(profile.name.is_empty());
        assert!(profile.skills.is_empty());
        assert_eq!(profile.social, SocialLinks::default());
    }
}
