use clap::{Parser, Subcommand};
use std::sync::Arc;

use board_core::{
    BoardState, CoreConfig, DischargeForm, WardService,
    config::{
        consultations_table_from_env_value, patients_table_from_env_value,
        service_url_from_env_value,
    },
};
use board_datasource::HttpQueryClient;
use board_types::Specialty;

#[derive(Parser)]
#[command(name = "wardboard")]
#[command(about = "Ward discharge board CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List active records
    List {
        /// Free-text search over name and identifier
        #[arg(long)]
        search: Option<String>,
        /// Exact specialty selection (omit for all)
        #[arg(long)]
        specialty: Option<String>,
    },
    /// Discharge a patient or complete a consultation
    Discharge {
        /// Identifier of the record to discharge
        mrn: String,
        /// Discharge date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Discharge time (HH:MM, defaults to now)
        #[arg(long)]
        time: Option<String>,
        /// Free-text note (persisted for patients only)
        #[arg(long)]
        note: Option<String>,
    },
    /// List the recognised specialties
    Specialties,
}

fn service() -> Result<WardService<HttpQueryClient>, Box<dyn std::error::Error>> {
    let cfg = Arc::new(CoreConfig::new(
        service_url_from_env_value(std::env::var("BOARD_SERVICE_URL").ok())?,
        std::env::var("BOARD_SERVICE_KEY").ok(),
        patients_table_from_env_value(std::env::var("BOARD_PATIENTS_TABLE").ok()),
        consultations_table_from_env_value(std::env::var("BOARD_CONSULTATIONS_TABLE").ok()),
    )?);
    let client = HttpQueryClient::new(cfg.service_url(), cfg.service_key().map(str::to_owned))?;
    Ok(WardService::new(cfg, client))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { search, specialty }) => {
            let selection = match specialty.as_deref() {
                None | Some("") => None,
                Some(name) => Some(name.parse::<Specialty>()?),
            };

            let service = service()?;
            let records = service.load_active_records().await?;
            let mut board = BoardState::new();
            board.commit_load(records);

            let visible = board.visible(search.as_deref().unwrap_or(""), selection);
            if visible.is_empty() {
                println!("No active records found.");
            } else {
                for record in visible {
                    println!(
                        "MRN: {}, Name: {}, Kind: {}, Specialty: {}, Date: {}",
                        record.mrn(),
                        record.name(),
                        record.kind(),
                        record.specialty(),
                        record.reference_date()
                    );
                }
            }
        }
        Some(Commands::Discharge {
            mrn,
            date,
            time,
            note,
        }) => {
            let service = service()?;
            let records = service.load_active_records().await?;
            let mut board = BoardState::new();
            board.commit_load(records);

            let record = board.select(&mrn)?.clone();
            let seeded = board.form().clone();
            let form = DischargeForm {
                date: date.unwrap_or(seeded.date),
                time: time.unwrap_or(seeded.time),
                note: note.unwrap_or(seeded.note),
            };

            match service.discharge(&record, &form).await {
                Ok(outcome) => {
                    board.complete_discharge(&outcome);
                    println!("{}", outcome.message());
                }
                Err(e) => eprintln!("Error discharging {}: {}", mrn, e),
            }
        }
        Some(Commands::Specialties) => {
            for specialty in Specialty::ALL {
                println!("{}", specialty);
            }
        }
        None => {
            println!("Use 'wardboard --help' for commands");
        }
    }

    Ok(())
}
