#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chantemerle::{
    calendar::CalendarMonth,
    client::{BookingApi, HttpBookingApi, MemoryApi},
    config::{Config, FallbackPolicy},
    io,
    model::{parse_day, BookingId},
    render::{render_upcoming, CalendarRenderer, TextCalendar},
    reservation::{ConflictKind, SlotRequest},
    sync::{BookingService, RefreshOutcome},
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Réservation de l'appartement de Chantemerle
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier de configuration JSON
    #[arg(long, global = true)]
    config: Option<String>,

    /// URL du backend (remplace celle de la configuration)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Jeu de données JSON hors-ligne à la place du backend (modifications non persistées)
    #[arg(long, global = true)]
    dataset: Option<String>,

    /// Échouer au lieu d'afficher les données d'exemple si le backend est injoignable
    #[arg(long, global = true)]
    no_fallback: bool,

    /// Date du jour (YYYY-MM-DD), par défaut la date locale
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les prochains occupants
    List {
        #[arg(long)]
        limit: Option<usize>,
        /// Masquer les séjours terminés
        #[arg(long)]
        hide_past: bool,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher le calendrier d'un mois
    Calendar {
        /// YYYY-MM, par défaut le mois courant
        #[arg(long)]
        month: Option<String>,
    },

    /// Vérifier qu'une période est libre
    Check {
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD
        #[arg(long)]
        end: String,
    },

    /// Réserver un créneau
    Book {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        end: Option<String>,
    },

    /// Supprimer une réservation
    Delete {
        #[arg(long)]
        id: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
        config.validate()?;
    }
    if cli.no_fallback {
        config.fallback = FallbackPolicy::Fail;
    }

    let today = match &cli.today {
        Some(raw) => parse_day(raw).map_err(anyhow::Error::msg)?,
        None => Local::now().date_naive(),
    };

    let code = match &cli.dataset {
        Some(path) => {
            let api = MemoryApi::new(io::load_bookings_json(path)?);
            run(BookingService::new(api, config.fallback), cli.cmd, &config, today)?
        }
        None => {
            let api = HttpBookingApi::from_config(&config)?;
            run(BookingService::new(api, config.fallback), cli.cmd, &config, today)?
        }
    };

    std::process::exit(code);
}

fn run<A: BookingApi>(
    mut service: BookingService<A>,
    cmd: Commands,
    config: &Config,
    today: NaiveDate,
) -> Result<i32> {
    match (service.refresh()?, service.banner()) {
        (RefreshOutcome::Sample(count), Some(banner)) => {
            eprintln!("! {banner} ({count} réservations d'exemple affichées)");
        }
        (_, Some(banner)) => eprintln!("! {banner}"),
        (_, None) => {}
    }

    let code = match cmd {
        Commands::List {
            limit,
            hide_past,
            out_json,
            out_csv,
        } => {
            let limit = limit.unwrap_or(config.upcoming_limit);
            let upcoming = service.upcoming(hide_past.then_some(today), limit);
            if let Some(path) = out_json {
                io::export_bookings_json(path, &upcoming)?;
            }
            if let Some(path) = out_csv {
                io::export_bookings_csv(path, &upcoming)?;
            }
            println!("Prochains occupants");
            println!("{}", render_upcoming(&upcoming));
            0
        }
        Commands::Calendar { month } => {
            let month = match month {
                Some(raw) => raw.parse()?,
                None => CalendarMonth::containing(today),
            };
            let grid = service.month_grid(month, today)?;
            println!("{}", TextCalendar.render(&grid));
            0
        }
        Commands::Check { start, end } => {
            let start = parse_day(&start).map_err(anyhow::Error::msg)?;
            let end = parse_day(&end).map_err(anyhow::Error::msg)?;
            let conflicts = service.store().find_conflicts(start, end)?;
            if conflicts.is_empty() {
                println!("OK: période libre");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                for c in &conflicts {
                    let name = service
                        .store()
                        .find(c.booking)
                        .map(|b| b.name.as_str())
                        .unwrap_or("-");
                    let kind = match c.kind {
                        ConflictKind::Overlap => "overlap",
                        ConflictKind::SharedBoundary => "boundary",
                    };
                    println!("{} | {} | {}", c.booking, name, kind);
                }
                // Code 2 = période occupée
                2
            }
        }
        Commands::Book { name, start, end } => {
            let start = start
                .map(|s| parse_day(&s).map_err(anyhow::Error::msg))
                .transpose()?;
            let end = end
                .map(|s| parse_day(&s).map_err(anyhow::Error::msg))
                .transpose()?;
            let created = service.create(&SlotRequest::new(name, start, end))?;
            println!(
                "Réservation {} créée pour {} ({} → {})",
                created.id, created.name, created.start, created.end
            );
            0
        }
        Commands::Delete { id } => {
            let id = BookingId::new(id);
            if service.store().find(id).is_none() {
                bail!("unknown booking: {id}");
            }
            service.delete(id)?;
            println!("Réservation {id} supprimée");
            0
        }
    };

    Ok(code)
}
