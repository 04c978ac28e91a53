//! # Projects Subcommand
//!
//! Browses the embedded site content.
//!
//! - `list [--domain D]`: projects, optionally filtered by domain.
//! - `featured`: the home-page projects.
//! - `domains`: distinct domains.
//! - `show <slug> [--case-study]`: one project.
//!
//! `--json` prints the same camelCase JSON the API serves.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use folio_core::content::ALL_DOMAINS;
use folio_core::{Project, SiteContent};

/// Arguments for the `folio projects` subcommand.
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// List projects.
    List {
        /// Domain filter, case-insensitive.
        #[arg(long, default_value = ALL_DOMAINS)]
        domain: String,
    },
    /// Show the featured projects.
    Featured,
    /// List distinct project domains.
    Domains,
    /// Show one project by slug.
    Show {
        slug: String,
        /// Print only the case study.
        #[arg(long)]
        case_study: bool,
    },
}

/// Execute the projects subcommand.
pub fn run_projects(args: &ProjectsArgs) -> Result<u8> {
    let content = SiteContent::embedded()?;
    let output = render(&content, &args.command, args.json)?;
    println!("{output}");
    Ok(0)
}

/// Render a projects command against `content`.
pub fn render(content: &SiteContent, command: &ProjectsCommand, json: bool) -> Result<String> {
    match command {
        ProjectsCommand::List { domain } => {
            let projects = content.projects_in_domain(domain);
            if json {
                Ok(serde_json::to_string_pretty(&projects)?)
            } else {
                Ok(summary_lines(projects.iter().copied()))
            }
        }
        ProjectsCommand::Featured => {
            let projects = content.featured();
            if json {
                Ok(serde_json::to_string_pretty(projects)?)
            } else {
                Ok(summary_lines(projects.iter()))
            }
        }
        ProjectsCommand::Domains => {
            let domains = content.domains();
            if json {
                Ok(serde_json::to_string_pretty(&domains)?)
            } else {
                Ok(domains.join("\n"))
            }
        }
        ProjectsCommand::Show { slug, case_study } => {
            let Some(project) = content.project(slug) else {
                bail!("project '{slug}' not found");
            };
            if *case_study {
                let Some(study) = project.case_study.as_ref() else {
                    bail!("project '{slug}' has no case study");
                };
                return Ok(serde_json::to_string_pretty(study)?);
            }
            if json {
                Ok(serde_json::to_string_pretty(project)?)
            } else {
                Ok(project_detail(project))
            }
        }
    }
}

fn summary_lines<'a>(projects: impl Iterator<Item = &'a Project>) -> String {
    projects
        .map(|p| format!("{:<24} {:<18} {}  {}", p.slug, p.domain, p.year, p.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn project_detail(project: &Project) -> String {
    let mut out = vec![
        format!("{} ({})", project.title, project.year),
        format!("  Domain: {}", project.domain),
        format!("  Summary: {}", project.summary),
        format!("  Tech: {}", project.tech.join(", ")),
    ];
    for metric in &project.metrics {
        out.push(format!("  {}: {}", metric.label, metric.value));
    }
    for link in project.all_links() {
        out.push(format!("  -> {} <{}>", link.label, link.href));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteContent {
        SiteContent::embedded().unwrap()
    }

    #[test]
    fn list_filters_by_domain() {
        let out = render(
            &site(),
            &ProjectsCommand::List {
                domain: "edtech".into(),
            },
            false,
        )
        .unwrap();
        assert!(out.contains("depth-training-website"));
        assert!(!out.contains("translate-ease"));
    }

    #[test]
    fn list_all_as_json() {
        let out = render(
            &site(),
            &ProjectsCommand::List {
                domain: ALL_DOMAINS.into(),
            },
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[test]
    fn domains_one_per_line() {
        let out = render(&site(), &ProjectsCommand::Domains, false).unwrap();
        assert_eq!(out, "EdTech\nMobile AI\nApplied Research");
    }

    #[test]
    fn show_includes_links() {
        let out = render(
            &site(),
            &ProjectsCommand::Show {
                slug: "translate-ease".into(),
                case_study: false,
            },
            false,
        )
        .unwrap();
        assert!(out.starts_with("TranslateEase Mobile (2023)"));
        assert!(out.contains("-> GitHub repo"));
    }

    #[test]
    fn show_unknown_slug_fails() {
        let err = render(
            &site(),
            &ProjectsCommand::Show {
                slug: "nope".into(),
                case_study: false,
            },
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn show_case_study_json() {
        let out = render(
            &site(),
            &ProjectsCommand::Show {
                slug: "fmasac-research".into(),
                case_study: true,
            },
            false,
        )
        .unwrap();
        assert!(out.contains("\"keyDecisions\""));
    }
}
