//! # Site Content
//!
//! Typed view of the portfolio content tables: profile, hero copy, core
//! metrics, skills, navigation and projects with optional case studies.
//!
//! The tables ship inside the binary as YAML (`content/site.yaml`) and are
//! parsed once at startup with [`SiteContent::embedded`]. Field names
//! serialize as camelCase.
//!
//! ## Lookups
//!
//! - [`SiteContent::project`]: exact slug match.
//! - [`SiteContent::projects_in_domain`]: case-insensitive domain match;
//!   the literal `all` disables the filter.
//! - [`SiteContent::domains`]: distinct domains in first-seen order.
//! - [`SiteContent::featured`]: the first three projects.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_SITE: &str = include_str!("../content/site.yaml");

/// Number of projects shown on the home page.
pub const FEATURED_COUNT: usize = 3;

/// Domain filter value meaning "no filter".
pub const ALL_DOMAINS: &str = "all";

/// Content loading failures.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("project slug must not be empty (title: {0})")]
    EmptySlug(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyDecision {
    pub decision: String,
    pub alternative: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_offs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    pub overview: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub role: String,
    pub duration: String,
    pub stack: Vec<String>,
    pub problem: Vec<String>,
    pub constraints: Vec<String>,
    pub architecture: Architecture,
    pub key_decisions: Vec<CaseStudyDecision>,
    pub results: Vec<Metric>,
    pub outcomes: Vec<String>,
    pub code: Vec<SiteLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<SiteLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub domain: String,
    pub year: String,
    pub summary: String,
    pub metrics: Vec<Metric>,
    pub tech: Vec<String>,
    pub links: Vec<SiteLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

impl Project {
    /// Project links followed by case-study code links, as shown on the
    /// case-study page.
    pub fn all_links(&self) -> impl Iterator<Item = &SiteLink> {
        self.links.iter().chain(
            self.case_study
                .iter()
                .flat_map(|case_study| case_study.code.iter()),
        )
    }

    fn in_domain(&self, domain: &str) -> bool {
        self.domain.to_lowercase() == domain.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
    /// Path prefix that marks this item active.
    #[serde(rename = "match")]
    pub match_prefix: String,
}

impl NavigationItem {
    /// Whether this item is active for the current path. The root item
    /// matches only `/`; every other item matches by prefix.
    pub fn is_active(&self, path: &str) -> bool {
        if self.match_prefix == "/" {
            path == "/"
        } else {
            path.starts_with(&self.match_prefix)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub eyebrow: String,
    pub headline: String,
    pub subheadline: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLinks {
    pub resume: String,
    pub contact: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub calendly: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub description: String,
    pub base_url: String,
    pub links: ProfileLinks,
    pub socials: Vec<SiteLink>,
    pub footer_blurb: String,
}

impl Profile {
    /// Contact address without the `mailto:` scheme.
    pub fn email_address(&self) -> &str {
        self.links
            .email
            .strip_prefix("mailto:")
            .unwrap_or(&self.links.email)
    }
}

/// All site content tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub profile: Profile,
    pub hero: Hero,
    pub navigation: Vec<NavigationItem>,
    pub core_metrics: Vec<Metric>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// Parse the content compiled into this crate.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_yaml_str(EMBEDDED_SITE)
    }

    /// Parse and check a YAML content document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ContentError> {
        let content: Self = serde_yaml::from_str(yaml)?;
        content.check_slugs()?;
        Ok(content)
    }

    fn check_slugs(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.slug.trim().is_empty() {
                return Err(ContentError::EmptySlug(project.title.clone()));
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(project.slug.clone()));
            }
        }
        Ok(())
    }

    /// Find a project by exact slug.
    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Projects in the given domain, or every project for [`ALL_DOMAINS`].
    pub fn projects_in_domain(&self, domain: &str) -> Vec<&Project> {
        if domain == ALL_DOMAINS {
            return self.projects.iter().collect();
        }
        self.projects.iter().filter(|p| p.in_domain(domain)).collect()
    }

    /// Distinct project domains in first-seen order.
    pub fn domains(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.domain.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }

    pub fn featured(&self) -> &[Project] {
        let end = self.projects.len().min(FEATURED_COUNT);
        &self.projects[..end]
    }

    /// Navigation items paired with their active flag for `path`.
    pub fn active_navigation<'a>(
        &'a self,
        path: &'a str,
    ) -> impl Iterator<Item = (&'a NavigationItem, bool)> + 'a {
        self.navigation
            .iter()
            .map(move |item| (item, item.is_active(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteContent {
        SiteContent::embedded().unwrap()
    }

    #[test]
    fn embedded_content_parses() {
        let content = site();
        assert_eq!(content.profile.name, "Harish Kannan");
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.navigation.len(), 4);
        assert_eq!(content.skills.len(), 3);
        assert_eq!(content.core_metrics.len(), 3);
    }

    #[test]
    fn project_by_slug() {
        let content = site();
        let project = content.project("translate-ease").unwrap();
        assert_eq!(project.title, "TranslateEase Mobile");
        assert!(project.case_study.is_some());
        assert!(content.project("TRANSLATE-EASE").is_none());
        assert!(content.project("unknown").is_none());
    }

    #[test]
    fn domain_filter_is_case_insensitive() {
        let content = site();
        let matches = content.projects_in_domain("edtech");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].slug, "depth-training-website");
        assert_eq!(content.projects_in_domain("MOBILE AI").len(), 1);
    }

    #[test]
    fn all_disables_the_filter() {
        let content = site();
        assert_eq!(content.projects_in_domain(ALL_DOMAINS).len(), 3);
        assert!(content.projects_in_domain("Robotics").is_empty());
    }

    #[test]
    fn domains_in_first_seen_order() {
        let content = site();
        assert_eq!(
            content.domains(),
            vec!["EdTech", "Mobile AI", "Applied Research"]
        );
    }

    #[test]
    fn featured_is_first_three() {
        let content = site();
        let featured: Vec<_> = content.featured().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            featured,
            vec!["depth-training-website", "translate-ease", "fmasac-research"]
        );
    }

    #[test]
    fn featured_with_fewer_projects() {
        let mut content = site();
        content.projects.truncate(1);
        assert_eq!(content.featured().len(), 1);
    }

    #[test]
    fn navigation_prefix_matching() {
        let content = site();
        let active: Vec<_> = content
            .active_navigation("/projects/translate-ease")
            .filter(|(_, active)| *active)
            .map(|(item, _)| item.label.as_str())
            .collect();
        assert_eq!(active, vec!["Projects"]);
        assert_eq!(content.active_navigation("/").filter(|(_, a)| *a).count(), 0);
    }

    #[test]
    fn root_item_matches_only_root() {
        let home = NavigationItem {
            label: "Home".into(),
            href: "/".into(),
            match_prefix: "/".into(),
        };
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
    }

    #[test]
    fn duplicate_slugs_rejected() {
        let mut content = site();
        let copy = content.projects[0].clone();
        content.projects.push(copy);
        let yaml = serde_yaml::to_string(&content).unwrap();
        match SiteContent::from_yaml_str(&yaml) {
            Err(ContentError::DuplicateSlug(slug)) => assert_eq!(slug, "depth-training-website"),
            other => panic!("expected DuplicateSlug, got: {other:?}"),
        }
    }

    #[test]
    fn malformed_yaml_rejected() {
        assert!(matches!(
            SiteContent::from_yaml_str("profile: ["),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn json_uses_camel_case() {
        let content = site();
        let json = serde_json::to_value(content.project("depth-training-website").unwrap()).unwrap();
        assert!(json.get("caseStudy").is_some());
        assert!(json["caseStudy"].get("keyDecisions").is_some());
        assert!(json["caseStudy"]["keyDecisions"][0].get("tradeOffs").is_some());
        let nav = serde_json::to_value(&content.navigation[0]).unwrap();
        assert_eq!(nav["match"], "/projects");
    }

    #[test]
    fn case_study_links_follow_project_links() {
        let content = site();
        let project = content.project("fmasac-research").unwrap();
        let labels: Vec<_> = project.all_links().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["View case study", "Architecture deep-dive", "Systems diagram"]
        );
    }

    #[test]
    fn email_address_strips_scheme() {
        assert_eq!(site().profile.email_address(), "harish.kannan.dev@gmail.com");
    }

    #[test]
    fn optional_assets_default_empty() {
        let content = site();
        let case_study = content.project("translate-ease").unwrap().case_study.as_ref().unwrap();
        assert!(case_study.assets.is_empty());
    }
}
