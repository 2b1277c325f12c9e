//! Terminal front end for the leadboard client.
//!
//! # Usage
//!
//! ```bash
//! # Browse the dashboard
//! leadboard dashboard
//! leadboard dashboard --search ann --source referral --status qualified
//! leadboard dashboard --json
//!
//! # Capture a new lead (missing required fields are prompted)
//! leadboard capture --first-name Ann --last-name Field --email ann@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `LEAD_API_URL` (required): base URL of the lead service

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use leadboard::prelude::*;

/// Lead capture and pipeline dashboard client.
#[derive(Parser)]
#[command(name = "leadboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the leads dashboard
    Dashboard {
        /// Case-insensitive search across name, email and company
        #[arg(long, default_value = "")]
        search: String,

        /// Restrict to one acquisition channel (website, social-media,
        /// referral, cold-call, event, advertisement), or "all"
        #[arg(long, default_value = "all")]
        source: String,

        /// Restrict to one pipeline stage (new, contacted, qualified, lost),
        /// or "all"
        #[arg(long, default_value = "all")]
        status: String,

        /// Emit the view as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Capture a new lead
    Capture {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        /// Acquisition channel token, e.g. "website" or "cold-call"
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    config.validate()?;
    init_tracing(&config);

    let repository = Arc::new(ApiLeadRepository::new(
        config.api_base_url.clone(),
        config.request_timeout(),
    )?);

    match cli.command {
        Commands::Dashboard {
            search,
            source,
            status,
            json,
        } => {
            let criteria = FilterCriteria {
                search,
                source: Selection::parse(&source),
                status: Selection::parse(&status),
            };
            let view = DashboardService::new(repository).load(&criteria).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                render_dashboard(&view);
            }
        }

        Commands::Capture {
            first_name,
            last_name,
            email,
            phone,
            company,
            source,
            notes,
        } => {
            let payload = LeadPayload {
                first_name: required_field("First name", first_name)?,
                last_name: required_field("Last name", last_name)?,
                email: required_field("Email", email)?,
                phone,
                company,
                source,
                notes,
            };

            match LeadService::new(repository).submit(payload).await {
                Ok(lead) => {
                    println!(
                        "{} lead {} captured as {}",
                        "✓".green().bold(),
                        lead.full_name().bold(),
                        lead.id.cyan()
                    );
                }
                Err(AppError::Validation { message, details }) => {
                    eprintln!("{} {}", "✗".red().bold(), message.red());
                    if let Some(fields) = details.as_object() {
                        for (field, problem) in fields {
                            eprintln!(
                                "  {}: {}",
                                field.yellow(),
                                problem.as_str().unwrap_or_default()
                            );
                        }
                    }
                    std::process::exit(1);
                }
                Err(err) => {
                    // Nothing was saved; the same payload can be resubmitted.
                    eprintln!("{} {}", "✗".red().bold(), err.to_string().red());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Takes the flag value or prompts for it interactively.
fn required_field(label: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Input::<String>::new()
            .with_prompt(label)
            .interact_text()
            .with_context(|| format!("failed to read {label}")),
    }
}

fn render_dashboard(view: &DashboardView) {
    let s = &view.summary;
    println!("{}", "Leads Dashboard".bold());
    println!(
        "  {} {}   {} {}   {} {}   {} {}%",
        "Total:".dimmed(),
        s.total_leads.to_string().bold(),
        "New:".dimmed(),
        s.new_leads.to_string().bold(),
        "Qualified:".dimmed(),
        s.qualified_leads.to_string().bold(),
        "Conversion:".dimmed(),
        s.conversion_rate_percent.to_string().bold()
    );
    println!();

    if view.leads.is_empty() {
        println!("{}", "No leads found.".yellow());
        return;
    }

    println!(
        "  {:<24} {:<30} {:<20} {:<15} {}",
        "NAME".dimmed(),
        "EMAIL".dimmed(),
        "COMPANY".dimmed(),
        "SOURCE".dimmed(),
        "STATUS".dimmed()
    );
    for lead in &view.leads {
        println!(
            "  {:<24} {:<30} {:<20} {:<15} {}",
            lead.full_name(),
            lead.email,
            lead.company.as_deref().unwrap_or("-"),
            lead.source.as_deref().unwrap_or("-"),
            colorize_status(lead.display_status())
        );
    }
}

fn colorize_status(status: &str) -> ColoredString {
    match status.to_lowercase().as_str() {
        "new" => status.blue(),
        "contacted" => status.yellow(),
        "qualified" => status.green(),
        "lost" => status.red(),
        _ => status.normal(),
    }
}
