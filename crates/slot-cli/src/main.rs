//! `slotgrid` CLI — inspect room free-slot responses and timetable grids.
//!
//! ## Usage
//!
//! ```sh
//! # Canonical labels for the default 09:00-20:00 hourly grid
//! slotgrid slots
//!
//! # Half-hour grid from 08:00 to 12:00
//! slotgrid slots --start-hour 8 --end-hour 12 --interval 30
//!
//! # Flatten a free-slot response into "<day> <start> - <end>" lines
//! slotgrid flatten -i free_slots.json
//!
//! # Free/busy grid for one day (by token or by index, 0 = Monday)
//! slotgrid grid -i free_slots.json --day 월
//! slotgrid grid -i free_slots.json --day-index 1
//!
//! # Pick flattened lines by index
//! slotgrid select -i free_slots.json --checked 0,2
//!
//! # Derive free slots from occupied timetable entries
//! slotgrid free -i timetable.json --window-start 09:00 --window-end 18:00
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slot_resolver::canonical::{DEFAULT_END_HOUR, DEFAULT_INTERVAL_MINUTES, DEFAULT_START_HOUR};
use slot_resolver::{DayTokens, FreeSlotsResponse, FreeWindow, OccupiedEntry};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slotgrid",
    version,
    about = "Classroom free-slot and timetable grid tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct GridArgs {
    /// First canonical hour (0-23)
    #[arg(long, default_value_t = DEFAULT_START_HOUR)]
    start_hour: u32,
    /// Last canonical hour, inclusive (0-23)
    #[arg(long, default_value_t = DEFAULT_END_HOUR)]
    end_hour: u32,
    /// Minutes between canonical labels
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MINUTES)]
    interval: u32,
}

#[derive(clap::Args)]
struct Io {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print canonical slot labels
    Slots {
        #[command(flatten)]
        grid: GridArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Flatten a free-slot response into one line per interval
    Flatten {
        #[command(flatten)]
        io: Io,
    },
    /// Show the free/busy status of every canonical slot for one day
    Grid {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        grid: GridArgs,
        /// Day token as sent by the backend (e.g. 월)
        #[arg(long, conflicts_with = "day_index", required_unless_present = "day_index")]
        day: Option<String>,
        /// Day index, 0 = Monday .. 6 = Sunday
        #[arg(long)]
        day_index: Option<usize>,
    },
    /// Print the flattened lines at the given indices
    Select {
        #[command(flatten)]
        io: Io,
        /// Comma-separated indices into the flattened list
        #[arg(long)]
        checked: String,
    },
    /// Derive a free-slot map from occupied timetable entries
    Free {
        #[command(flatten)]
        io: Io,
        /// Start of the searched window (HH:MM)
        #[arg(long, default_value = "09:00")]
        window_start: String,
        /// End of the searched window (HH:MM)
        #[arg(long, default_value = "20:00")]
        window_end: String,
        /// Comma-separated day tokens (defaults to Monday-Friday)
        #[arg(long)]
        days: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Slots { grid, output } => {
            let labels = canonical(&grid)?;
            info!(count = labels.len(), "generated canonical slots");
            write_output(output.as_deref(), &lines(&labels))?;
        }
        Commands::Flatten { io } => {
            let response = read_response(io.input.as_deref())?;
            let flat = slot_resolver::flatten(&response.free_slots_by_day);
            info!(
                building = %response.building_code,
                room = %response.room_number,
                count = flat.len(),
                "flattened free slots"
            );
            write_output(io.output.as_deref(), &lines(&flat))?;
        }
        Commands::Grid {
            io,
            grid,
            day,
            day_index,
        } => {
            let response = read_response(io.input.as_deref())?;
            let labels = canonical(&grid)?;
            let day = match (day, day_index) {
                (Some(day), _) => day,
                (None, Some(index)) => DayTokens::default()
                    .token(index)
                    .context("Invalid --day-index")?
                    .to_string(),
                (None, None) => anyhow::bail!("Either --day or --day-index is required"),
            };
            debug!(%day, "resolving day grid");

            let states = slot_resolver::resolve_day(&labels, &response.free_slots_by_day, &day)
                .with_context(|| format!("Failed to resolve slots for day '{}'", day))?;
            let rows: Vec<String> = states
                .iter()
                .map(|s| format!("{}\t{}", s.label, s.status.as_str()))
                .collect();
            write_output(io.output.as_deref(), &lines(&rows))?;
        }
        Commands::Select { io, checked } => {
            let response = read_response(io.input.as_deref())?;
            let flat = slot_resolver::flatten(&response.free_slots_by_day);
            let flags = checked_flags(&checked, flat.len())?;
            let selected = slot_resolver::selected_slots_from_checklist(&flat, &flags)
                .context("Failed to select slots")?;
            info!(selected = selected.len(), of = flat.len(), "selected slots");
            write_output(io.output.as_deref(), &lines(&selected))?;
        }
        Commands::Free {
            io,
            window_start,
            window_end,
            days,
        } => {
            let input = read_input(io.input.as_deref())?;
            let entries: Vec<OccupiedEntry> =
                serde_json::from_str(&input).context("Failed to parse occupied entries")?;
            let window = FreeWindow::parse(&window_start, &window_end).context("Invalid window")?;

            let tokens = DayTokens::default();
            let days: Vec<String> = match days.as_deref() {
                Some(raw) => split_list(raw),
                None => tokens.school_days().into_iter().map(str::to_string).collect(),
            };
            let day_refs: Vec<&str> = days.iter().map(|s| s.as_str()).collect();
            debug!(entries = entries.len(), days = ?day_refs, "deriving free slots");

            let free = slot_resolver::free_slots_by_day(&entries, &day_refs, window)
                .context("Failed to derive free slots")?;
            let pretty = serde_json::to_string_pretty(&free)?;
            write_output(io.output.as_deref(), &format!("{}\n", pretty))?;
        }
    }

    Ok(())
}

fn canonical(grid: &GridArgs) -> Result<Vec<String>> {
    slot_resolver::generate_canonical_slots(grid.start_hour, grid.end_hour, grid.interval)
        .context("Invalid canonical slot range")
}

/// Turn `--checked 0,2` into a flag per flattened line.
fn checked_flags(raw: &str, len: usize) -> Result<Vec<bool>> {
    let mut flags = vec![false; len];
    for part in split_list(raw) {
        let index: usize = part
            .parse()
            .with_context(|| format!("Invalid slot index: '{}'", part))?;
        let flag = flags
            .get_mut(index)
            .with_context(|| format!("Slot index {} out of range ({} slots)", index, len))?;
        *flag = true;
    }
    Ok(flags)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn lines(items: &[String]) -> String {
    items.iter().map(|item| format!("{}\n", item)).collect()
}

fn read_response(path: Option<&str>) -> Result<FreeSlotsResponse> {
    let json = read_input(path)?;
    FreeSlotsResponse::from_json(&json).context("Failed to parse free-slot response")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path, "reading input file");
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            debug!("reading input from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
