//! portfolio-contact - command-line front end for the contact form.
//!
//! Fills the form from arguments, submits it once and prints the status line
//! the visitor would see.

use anyhow::Result;
use clap::Parser;
use portfolio_contact::models::{ContactField, FormField};
use portfolio_contact::page::{ContactPage, FormEvent};
use portfolio_contact::{Config, SubmissionOutcome};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Send a message through the portfolio contact form.
#[derive(Parser, Debug)]
#[command(name = "portfolio-contact", version)]
struct Cli {
    /// Your name.
    #[arg(long, default_value = "")]
    name: String,
    /// Address replies should go to.
    #[arg(long, default_value = "")]
    email: String,
    /// Subject line (forms that ask for a subject).
    #[arg(long, conflicts_with = "phone")]
    subject: Option<String>,
    /// Phone number (forms that ask for a phone number).
    #[arg(long)]
    phone: Option<String>,
    /// The message itself.
    #[arg(long, default_value = "")]
    message: String,
}

impl Cli {
    /// The form's extra field follows whichever flag was given.
    fn contact_field(&self, configured: ContactField) -> ContactField {
        match (&self.subject, &self.phone) {
            (Some(_), _) => ContactField::Subject,
            (None, Some(_)) => ContactField::Phone,
            (None, None) => configured,
        }
    }

    fn into_events(self) -> Vec<FormEvent> {
        let detail = self.subject.or(self.phone).unwrap_or_default();
        [
            (FormField::Name, self.name),
            (FormField::Email, self.email),
            (FormField::Detail, detail),
            (FormField::Message, self.message),
        ]
        .into_iter()
        .map(|(field, value)| FormEvent::Input { field, value })
        .chain(std::iter::once(FormEvent::Submit))
        .collect()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.contact_field = cli.contact_field(config.contact_field);

    // stderr only, stdout carries the status line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Submitting to {} (timeout {}s, environment {})",
        config.api_base_url, config.request_timeout, config.environment
    );

    let mut page = ContactPage::init(&config);
    let mut outcome = None;
    for event in cli.into_events() {
        outcome = page.handle(event).await;
    }

    println!("{}", page.status());
    debug!(metrics = ?page.metrics().summary(), "Done");

    Ok(match outcome {
        Some(SubmissionOutcome::Sent(_)) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
