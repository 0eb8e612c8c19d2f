//! `roomscout` CLI — free-room lookup over directory JSON dumps.
//!
//! Feeds saved responses from the room directory (rooms, allocations, and
//! optionally the exam schedule) through the full availability service, the
//! same path a server deployment drives over HTTP.
//!
//! ## Usage
//!
//! ```sh
//! # Which rooms are free at 10:00?
//! roomscout free --rooms rooms.json --allocations allocations.json \
//!     --date 2026-08-06 --time 10:00
//!
//! # Only rooms seating 30+, scoped to one campus, short labels only
//! roomscout free --rooms rooms.json --allocations allocations.json \
//!     --date 2026-08-06 --time 10:00 --min-size 30 --location Feki --short
//!
//! # Fold in the exam schedule
//! roomscout free --rooms rooms.json --allocations allocations.json \
//!     --exams exams.json --date 2026-08-06 --time 10:00
//!
//! # List the known location names
//! roomscout locations
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use roomscout_engine::{
    Allocation, AllocationsQuery, AvailabilityRequest, AvailabilityService, DirectoryClient,
    ExamAppointment, Room, RoomsQuery, ScoutError,
};

#[derive(Parser)]
#[command(name = "roomscout", version, about = "Find free rooms in the directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the rooms free at a given date and time
    Free {
        /// Rooms endpoint dump (JSON array)
        #[arg(long)]
        rooms: PathBuf,
        /// Allocations endpoint dump (JSON array)
        #[arg(long)]
        allocations: PathBuf,
        /// Exam schedule dump (JSON array); folded in when given
        #[arg(long)]
        exams: Option<PathBuf>,
        /// Date to search, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Time to search, HH:MM
        #[arg(long)]
        time: String,
        /// Only rooms seating at least this many
        #[arg(long)]
        min_size: Option<u32>,
        /// Restrict to a named location (see `roomscout locations`)
        #[arg(long)]
        location: Option<String>,
        /// Restrict to a single building key
        #[arg(long)]
        building_key: Option<String>,
        /// Print only the short labels, one per line
        #[arg(long)]
        short: bool,
    },
    /// List the known location names
    Locations,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Free {
            rooms,
            allocations,
            exams,
            date,
            time,
            min_size,
            location,
            building_key,
            short,
        } => {
            let request = AvailabilityRequest::parse(
                &date,
                &time,
                min_size,
                location.as_deref(),
                building_key.as_deref(),
            )?;
            let service = AvailabilityService::new(FileDirectory {
                rooms,
                allocations,
                exams,
            });
            let free = service.free_rooms(&request)?;

            if short {
                for entry in &free {
                    println!("{}", entry.short);
                }
            } else {
                let rendered = serde_json::to_string_pretty(&free)
                    .context("Failed to render the result list as JSON")?;
                println!("{rendered}");
            }
        }
        Commands::Locations => {
            let service = AvailabilityService::new(FileDirectory::default());
            for name in service.locations().names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// Directory client backed by saved endpoint responses on disk.
///
/// Applies the building-key scoping the live service would apply server-side,
/// so location filtering behaves the same as against the real directory.
#[derive(Default)]
struct FileDirectory {
    rooms: PathBuf,
    allocations: PathBuf,
    exams: Option<PathBuf>,
}

impl DirectoryClient for FileDirectory {
    fn fetch_rooms(&self, query: &RoomsQuery) -> roomscout_engine::Result<Vec<Room>> {
        let mut rooms: Vec<Room> = read_json(&self.rooms, "rooms")?;
        if !query.building_keys.is_empty() {
            rooms.retain(|room| query.building_keys.contains(&room.building_key));
        }
        Ok(rooms)
    }

    fn fetch_allocations(
        &self,
        _query: &AllocationsQuery,
    ) -> roomscout_engine::Result<Vec<Allocation>> {
        read_json(&self.allocations, "allocations")
    }

    fn fetch_exams(&self) -> roomscout_engine::Result<Option<Vec<ExamAppointment>>> {
        match &self.exams {
            Some(path) => Ok(Some(read_json(path, "exams")?)),
            None => Ok(None),
        }
    }
}

/// Read and decode one endpoint dump; any failure reports as an upstream
/// failure for that endpoint, exactly like a transport error would.
fn read_json<T: DeserializeOwned>(path: &Path, endpoint: &'static str) -> roomscout_engine::Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|err| ScoutError::Upstream {
        endpoint,
        reason: format!("{}: {err}", path.display()),
    })?;
    serde_json::from_str(&raw).map_err(|err| ScoutError::Upstream {
        endpoint,
        reason: format!("{}: {err}", path.display()),
    })
}
