use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use jiff::tz::TimeZone;
use tracing_subscriber::EnvFilter;

use almanac_ephem::{ALL_BODIES, Body, Engine, EngineConfig};
use almanac_search::{
    ScanConfig, SearchError, search_ingresses, search_lunar_phases, search_stations,
};
use almanac_time::{calendar_to_jd, jd_to_iso, load_zone};

mod report;

#[derive(Parser)]
#[command(name = "almanac", about = "Astronomical event calendar generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full event calendar as a JSON artifact
    Generate {
        /// Range start date (YYYY-MM-DD, midnight UT)
        #[arg(long, default_value = "2025-01-01")]
        start: String,
        /// Range end date (YYYY-MM-DD, midnight UT)
        #[arg(long, default_value = "2031-12-31")]
        end: String,
        /// Directory containing the per-body .eph tables
        #[arg(long)]
        data: PathBuf,
        /// IANA timezone for event timestamps
        #[arg(long, default_value = "Europe/Warsaw")]
        zone: String,
        /// Output path for the JSON artifact
        #[arg(long, default_value = "events.json")]
        out: PathBuf,
    },
    /// List sign ingresses for one body
    Ingresses {
        #[arg(long, default_value = "2025-01-01")]
        start: String,
        #[arg(long, default_value = "2031-12-31")]
        end: String,
        /// Body name (Sun, Moon, Mercury, ...)
        #[arg(long)]
        body: String,
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value = "Europe/Warsaw")]
        zone: String,
    },
    /// List retrograde/direct stations for one body
    Stations {
        #[arg(long, default_value = "2025-01-01")]
        start: String,
        #[arg(long, default_value = "2031-12-31")]
        end: String,
        /// Body name (Mercury ... Pluto; the Sun and Moon have no stations)
        #[arg(long)]
        body: String,
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value = "Europe/Warsaw")]
        zone: String,
    },
    /// List lunar phase events
    Phases {
        #[arg(long, default_value = "2025-01-01")]
        start: String,
        #[arg(long, default_value = "2031-12-31")]
        end: String,
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value = "Europe/Warsaw")]
        zone: String,
    },
}

fn main() {
    // RUST_LOG overrides; default keeps skipped-event warnings visible.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = ScanConfig::default();

    match cli.command {
        Commands::Generate {
            start,
            end,
            data,
            zone,
            out,
        } => {
            let (jd_start, jd_end) = (require_date(&start), require_date(&end));
            let engine = require_engine(data);
            let tz = require_zone(&zone);

            let mut ingresses = Vec::new();
            let mut stations = Vec::new();
            for body in ALL_BODIES {
                ingresses.extend(require_search(search_ingresses(
                    &engine, body, jd_start, jd_end, &config,
                )));
                if has_stations(body) {
                    stations.extend(require_search(search_stations(
                        &engine, body, jd_start, jd_end, &config,
                    )));
                }
            }
            let phases = require_search(search_lunar_phases(&engine, jd_start, jd_end, &config));

            let records = match report::build_report(&ingresses, &stations, &phases, &tz) {
                Ok(records) => records,
                Err(e) => fail(e),
            };
            let json = match serde_json::to_string_pretty(&records) {
                Ok(json) => json,
                Err(e) => fail(e),
            };
            if let Err(e) = std::fs::write(&out, json + "\n") {
                fail(format!("cannot write {}: {e}", out.display()));
            }
            println!("{} events written to {}", records.len(), out.display());
        }

        Commands::Ingresses {
            start,
            end,
            body,
            data,
            zone,
        } => {
            let (jd_start, jd_end) = (require_date(&start), require_date(&end));
            let body = require_body(&body);
            let engine = require_engine(data);
            let tz = require_zone(&zone);

            let events = require_search(search_ingresses(&engine, body, jd_start, jd_end, &config));
            for e in &events {
                println!("{}  {}", require_iso(e.jd_ut, &tz), report::describe_ingress(e));
            }
        }

        Commands::Stations {
            start,
            end,
            body,
            data,
            zone,
        } => {
            let (jd_start, jd_end) = (require_date(&start), require_date(&end));
            let body = require_body(&body);
            let engine = require_engine(data);
            let tz = require_zone(&zone);

            let events = require_search(search_stations(&engine, body, jd_start, jd_end, &config));
            for e in &events {
                println!("{}  {}", require_iso(e.jd_ut, &tz), report::describe_station(e));
            }
        }

        Commands::Phases {
            start,
            end,
            data,
            zone,
        } => {
            let (jd_start, jd_end) = (require_date(&start), require_date(&end));
            let engine = require_engine(data);
            let tz = require_zone(&zone);

            let events = require_search(search_lunar_phases(&engine, jd_start, jd_end, &config));
            for e in &events {
                println!("{}  {}", require_iso(e.jd_ut, &tz), report::describe_phase(e));
            }
        }
    }
}

fn has_stations(body: Body) -> bool {
    !matches!(body, Body::Sun | Body::Moon)
}

/// Parse a `YYYY-MM-DD` date string.
fn parse_date(s: &str) -> Option<(i32, u32, u32)> {
    let mut parts = s.split('-');
    let year = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

fn require_date(s: &str) -> f64 {
    match parse_date(s) {
        Some((year, month, day)) => calendar_to_jd(year, month, day as f64),
        None => fail(format!("invalid date '{s}', expected YYYY-MM-DD")),
    }
}

fn require_body(name: &str) -> Body {
    match Body::from_name(name) {
        Some(body) => body,
        None => fail(format!("unknown body '{name}'")),
    }
}

fn require_zone(name: &str) -> TimeZone {
    match load_zone(name) {
        Ok(tz) => tz,
        Err(e) => fail(e),
    }
}

fn require_engine(data: PathBuf) -> Engine {
    match Engine::new(EngineConfig::new(data)) {
        Ok(engine) => engine,
        Err(e) => fail(e),
    }
}

fn require_search<T>(result: Result<Vec<T>, SearchError>) -> Vec<T> {
    match result {
        Ok(events) => events,
        Err(e) => fail(e),
    }
}

fn require_iso(jd_ut: f64, tz: &TimeZone) -> String {
    match jd_to_iso(jd_ut, tz) {
        Ok(iso) => iso,
        Err(e) => fail(e),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}
