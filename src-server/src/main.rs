mod error;
mod handlers;
mod logging;
mod middleware;
mod routes;
mod state;

use std::path::PathBuf;

use actix_web::{web, App, HttpServer};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use jobboard::config::ServerConfig;
use jobboard::dates::parse_calendar_date;
use jobboard::{
    build_report, load_config, stats_by_category_and_status, stats_by_client, stats_by_employee,
    CategoryStatusStats, ClientStats, Database, EmployeeStats, JobQuery, ReportRequest,
};

use state::AppState;

#[derive(Parser)]
#[command(name = "jobboard-server", version, about = "Job tracking API and tools")]
struct Cli {
    /// JSON configuration file. Environment variables prefixed
    /// `JOBBOARD_` override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default).
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Apply migrations and seed reference data, then exit.
    Migrate,
    /// Print dashboard statistics as JSON.
    Stats {
        #[arg(long)]
        client: Option<String>,
    },
    /// Print a job list report.
    Report {
        #[arg(long)]
        client: Option<String>,
        /// First delivery day, YYYY-MM-DD.
        #[arg(long, value_parser = parse_day)]
        from: NaiveDate,
        /// Last delivery day, YYYY-MM-DD. Included completely.
        #[arg(long, value_parser = parse_day)]
        to: NaiveDate,
        /// Emit JSON instead of a text table.
        #[arg(long)]
        json: bool,
    },
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw).map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct StatsOutput {
    overall: CategoryStatusStats,
    employees: std::collections::BTreeMap<String, EmployeeStats>,
    clients: std::collections::BTreeMap<String, ClientStats>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init_logging(&config.logging)?;

    info!("Starting jobboard v{}", env!("CARGO_PKG_VERSION"));

    let db = Database::open_configured(config.database.path.as_deref())?;
    let state = AppState::new(db, config.reference.clone());
    state.reference.ensure_defaults()?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            serve(state, server).await?;
        }
        Command::Migrate => {
            info!("Database is up to date");
        }
        Command::Stats { client } => {
            let filtered = state.jobs.list_jobs(&JobQuery {
                client,
                ..Default::default()
            })?;
            let all = state.jobs.list_jobs(&JobQuery::default())?;
            let output = StatsOutput {
                overall: stats_by_category_and_status(&filtered),
                employees: stats_by_employee(&all, &state.reference.employees_or_fallback()),
                clients: stats_by_client(&all, &state.reference.clients_or_fallback()),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Report {
            client,
            from,
            to,
            json,
        } => {
            let request = ReportRequest::new(client, from, to)?;
            let report = build_report(&state.jobs, &request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }

    Ok(())
}

async fn serve(state: AppState, server: ServerConfig) -> anyhow::Result<()> {
    let bind = (server.host.clone(), server.port);
    info!("Listening on http://{}:{}", bind.0, bind.1);

    let data = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::request_logger())
            .wrap(middleware::build_cors(&server))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind(bind)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
