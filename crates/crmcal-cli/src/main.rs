mod prefs;
mod render;
mod source;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use crmcal_core::{
    AppConfig, CalendarPreferences, CalendarState, DateRange, EntityFilter, EventDateIndex,
    EventType, FilePreferences, TypeFilter,
};
use tracing_subscriber::EnvFilter;

use crate::prefs::PrefsCommands;
use crate::source::EventSource;

#[derive(Debug, Parser)]
#[command(name = "crmcal-cli")]
#[command(about = "CRM activity calendar command line interface")]
struct Cli {
    /// Fetch events from the calendar API instead of the local events file
    #[arg(long, global = true)]
    remote: bool,

    /// Events file to read instead of `CRMCAL_EVENTS_PATH`
    #[arg(long, global = true, value_name = "PATH")]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Args)]
struct FilterArgs {
    /// Talent ids to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    talent: Vec<String>,

    /// Brand ids to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    brand: Vec<String>,

    /// Event types to include (comma-separated); all types when omitted
    #[arg(long = "type", value_delimiter = ',')]
    types: Vec<EventType>,
}

impl FilterArgs {
    fn entity_filter(&self) -> EntityFilter {
        EntityFilter::new(&self.talent, &self.brand)
    }
}

fn type_filter(types: &[EventType]) -> TypeFilter {
    if types.is_empty() {
        TypeFilter::all()
    } else {
        TypeFilter::only(types.iter().copied())
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the calendar pane and one day's events
    Day {
        /// Day to show (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show per-day event indicators for a month
    Month {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, value_parser = parse_month)]
        month: Option<NaiveDate>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the calendar of a single talent client
    Talent {
        /// Talent client id
        id: String,

        /// Day to show (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Event types to include (comma-separated); all types when omitted
        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<EventType>,
    },
    /// Read or change stored calendar preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
}

fn parse_month(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{raw}'; expected YYYY-MM"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days to load so that both the visible pane and the same-month fallback
/// have their events.
fn fetch_range(state: &CalendarState) -> DateRange {
    let month = DateRange::month_of(state.selected_date);
    let visible = state.visible_range();
    DateRange {
        start: month.start.min(visible.start),
        end: month.end.max(visible.end),
    }
}

/// Calendar state seeded from stored view mode and split ratio.
fn load_state(config: &AppConfig, mut state: CalendarState) -> anyhow::Result<CalendarState> {
    let stored = CalendarPreferences::new(FilePreferences::open(config.preferences_path.clone())?);
    state.view_mode = stored.view_mode().unwrap_or_default();
    state.split = prefs::stored_layout(&stored, config.split_bounds);
    Ok(state)
}

async fn run_screen(source: &EventSource, state: &CalendarState) -> anyhow::Result<()> {
    let events = source.load(fetch_range(state)).await?;
    let index = EventDateIndex::for_state(&events, state);

    print!("{}", render::render_layout(&state.split));
    print!("{}", render::render_calendar(&index, state));
    println!();
    print!("{}", render::render_day(&index, state.selected_date));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = crmcal_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("crmcal-cli ready; run with --help for commands");
        return Ok(());
    };

    match command {
        Commands::Day { date, filters } => {
            let source = EventSource::from_config(&config, cli.remote, cli.events)?;
            let mut state = load_state(&config, CalendarState::new(date.unwrap_or_else(today)))?;
            state.entities = filters.entity_filter();
            state.types = type_filter(&filters.types);
            run_screen(&source, &state).await?;
        }
        Commands::Month { month, filters } => {
            let source = EventSource::from_config(&config, cli.remote, cli.events)?;
            let first_day = month.unwrap_or_else(|| DateRange::month_of(today()).start);
            let range = DateRange::month_of(first_day);
            let events = source.load(range).await?;
            let index = EventDateIndex::new(
                &events,
                &filters.entity_filter(),
                &type_filter(&filters.types),
            );
            let heading = first_day.format("%B %Y").to_string();
            print!("{}", render::render_indicators(&index, range, &heading));
        }
        Commands::Talent { id, date, types } => {
            let source = EventSource::from_config(&config, cli.remote, cli.events)?;
            let mut state = load_state(
                &config,
                CalendarState::for_talent(id, date.unwrap_or_else(today)),
            )?;
            state.types = type_filter(&types);
            run_screen(&source, &state).await?;
        }
        Commands::Prefs { command } => prefs::run(&config, command)?,
    }

    Ok(())
}
