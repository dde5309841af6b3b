//! Static site content for the about and contact sections.

use serde::Serialize;

/// Outbound profile network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
}

/// Fixed content rendered by the about (main) and contact sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteProfile {
    pub owner_name: &'static str,
    pub headline: &'static str,
    pub social_links: Vec<SocialLink>,
    pub contact_heading: &'static str,
    pub contact_message: &'static str,
}

pub fn site_profile() -> SiteProfile {
    SiteProfile {
        owner_name: "Khrul Sergei",
        headline: "Senior Developer",
        social_links: vec![
            SocialLink {
                kind: SocialKind::GitHub,
                url: "https://github.com/khrulsergey",
            },
            SocialLink {
                kind: SocialKind::LinkedIn,
                url: "https://www.linkedin.com/in/khrulsergey/",
            },
        ],
        contact_heading: "Contact Me",
        contact_message:
            "Got a project waiting to be realized? Let's collaborate and make it happen!",
    }
}
