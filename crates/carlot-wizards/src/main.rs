//! carlot CLI
//!
//! Fills marketplace forms from JSON files and submits them to the backend.

use std::path::PathBuf;
use std::time::Duration;

use carlot_client::{ClientConfig, DryRunSubmitter, HttpSubmitter, DEFAULT_BASE_URL};
use carlot_forms::{render_step, AuthSession, FieldName, FormModel, Submitter, Wizard};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value as Json};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use carlot_wizards::consignment::attach_photos;
use carlot_wizards::drive::{advance, complete, fill, parse_data, take_paths};
use carlot_wizards::{ConsignmentField, ConsignmentForm, FormKind, QuotationForm, TradeInForm};

/// Submit vehicle marketplace forms from the command line.
#[derive(Parser)]
#[command(name = "carlot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "CARLOT_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Session token forwarded as a bearer credential.
    #[arg(long, env = "CARLOT_TOKEN")]
    token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a form from a JSON file and submit it.
    Submit {
        /// Which form to submit.
        #[arg(value_enum)]
        form: FormKind,

        /// JSON object of field values keyed by input name.
        #[arg(short, long)]
        data: PathBuf,

        /// Log the request instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the HTML of a form's current step.
    Render {
        /// Which form to render.
        #[arg(value_enum)]
        form: FormKind,

        /// Pre-fill from a JSON file and advance as far as it validates.
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Form action URL.
        #[arg(long, default_value = "")]
        action: String,
    },
}

fn session(token: Option<String>) -> AuthSession {
    token.map_or(AuthSession::Unauthenticated, AuthSession::bearer)
}

fn read_data(path: Option<&PathBuf>) -> anyhow::Result<Map<String, Json>> {
    match path {
        Some(path) => Ok(parse_data(&std::fs::read_to_string(path)?)?),
        None => Ok(Map::new()),
    }
}

fn open<F: FormModel>(
    session: AuthSession,
    data: &Map<String, Json>,
) -> anyhow::Result<Wizard<F>> {
    let mut wizard = Wizard::<F>::new(session)?;
    fill(&mut wizard, data)?;
    Ok(wizard)
}

async fn open_consignment(
    session: AuthSession,
    mut data: Map<String, Json>,
) -> anyhow::Result<Wizard<ConsignmentForm>> {
    let paths = take_paths(&mut data, ConsignmentField::Photos.name())?;
    let mut wizard = open::<ConsignmentForm>(session, &data)?;
    attach_photos(&mut wizard, &paths).await?;
    Ok(wizard)
}

async fn submit_form<F: FormModel>(
    mut wizard: Wizard<F>,
    submitter: &dyn Submitter,
) -> anyhow::Result<()> {
    let response = complete(&mut wizard, submitter).await?;
    info!(form = F::NAME, status = response.status, "submitted");
    if let Some(body) = response.body {
        println!("{}", serde_json::to_string_pretty(&body)?);
    }
    Ok(())
}

fn render_form<F: FormModel>(mut wizard: Wizard<F>, action: &str) {
    if let Err(err) = advance(&mut wizard) {
        info!(form = F::NAME, "{err}");
    }
    println!("{}", render_step(&wizard, action));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let session = session(cli.token);

    match cli.command {
        Commands::Submit {
            form,
            data,
            dry_run,
        } => {
            let data = read_data(Some(&data))?;
            let submitter: Box<dyn Submitter> = if dry_run {
                info!("Dry run mode - requests will be logged but not sent.");
                Box::new(DryRunSubmitter)
            } else {
                let config = ClientConfig::new(cli.api_url)
                    .timeout(Duration::from_secs(cli.timeout));
                Box::new(HttpSubmitter::new(config)?)
            };

            match form {
                FormKind::TradeIn => {
                    let wizard = open::<TradeInForm>(session, &data)?;
                    submit_form(wizard, submitter.as_ref()).await?;
                }
                FormKind::Quotation => {
                    let wizard = open::<QuotationForm>(session, &data)?;
                    submit_form(wizard, submitter.as_ref()).await?;
                }
                FormKind::Consignment => {
                    let wizard = open_consignment(session, data).await?;
                    submit_form(wizard, submitter.as_ref()).await?;
                }
            }
        }

        Commands::Render { form, data, action } => {
            let data = read_data(data.as_ref())?;
            match form {
                FormKind::TradeIn => {
                    render_form(open::<TradeInForm>(session, &data)?, &action);
                }
                FormKind::Quotation => {
                    render_form(open::<QuotationForm>(session, &data)?, &action);
                }
                FormKind::Consignment => {
                    render_form(open_consignment(session, data).await?, &action);
                }
            }
        }
    }

    Ok(())
}
