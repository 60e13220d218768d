use std::fs;

use anyhow::{bail, Result};
use catalog::{list_categories, ProjectCatalog, EMPTY_STATE_MESSAGE};
use clap::{Args, Parser, Subcommand};
use mail_relay::{
    config::{parse_settings_table, RelaySettings},
    ContactSubmission, EmailJsRelay,
};
use shared::{
    domain::{CategoryTag, SubmissionStatus},
    protocol::ContactFields,
};
use tracing_subscriber::EnvFilter;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the filter tabs in display order.
    Categories,
    /// Print the projects visible under a tab.
    Projects {
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Send one message through the mail relay.
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[command(flatten)]
        relay: RelayArgs,
    },
}

/// Flags that win over `server.toml` and the environment.
#[derive(Args, Debug, Default)]
struct RelayArgs {
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    service_id: Option<String>,
    #[arg(long)]
    template_id: Option<String>,
    #[arg(long)]
    public_key: Option<String>,
}

impl RelayArgs {
    fn resolve(
        self,
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> RelaySettings {
        let mut settings = RelaySettings::from_sources(&parse_settings_table(file), env);
        if let Some(v) = self.endpoint {
            settings.endpoint = v;
        }
        if self.service_id.is_some() {
            settings.service_id = self.service_id;
        }
        if self.template_id.is_some() {
            settings.template_id = self.template_id;
        }
        if self.public_key.is_some() {
            settings.public_key = self.public_key;
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Categories => {
            for category in list_categories() {
                println!("{}\t{}", category.id, category.label);
            }
        }
        Command::Projects { category } => {
            let tag: CategoryTag = category.parse()?;
            let catalog = ProjectCatalog::showcase()?;
            let view = catalog.view(tag);
            if view.is_empty() {
                println!("{EMPTY_STATE_MESSAGE}");
            }
            for project in &view.projects {
                println!(
                    "{}\t{}\t{}\t{}",
                    project.id.0,
                    project.title,
                    project.status.label(),
                    project.github_url
                );
            }
        }
        Command::Send {
            name,
            email,
            title,
            message,
            relay,
        } => {
            let file = fs::read_to_string(SETTINGS_FILE).ok();
            let settings = relay.resolve(file.as_deref(), |key| std::env::var(key).ok());
            let relay = EmailJsRelay::new(settings.endpoint_url()?);
            let credentials = settings.credentials();
            let mut submission =
                ContactSubmission::new(ContactFields::new(name, email, title, message));

            match submission.submit(&relay, &credentials).await {
                SubmissionStatus::Sent => println!("Sent!"),
                status => bail!("message not sent (status: {status:?})"),
            }
        }
    }

    Ok(())
}
