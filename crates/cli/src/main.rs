// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # mentor-alloc
//!
//! Assigns students to mentors in fixed-size batches.
//!
//! Rosters live as CSV files in the data directory (`students.csv` and
//! `mentors.csv`). Each command that changes assignments writes both files
//! back and exports a summary CSV, a detailed CSV and a JSON summary to the
//! reports directory.
//!
//! Log output honours `RUST_LOG`; without it the level follows `-v`/`-q`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod config;
mod report;
mod sample;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use commands::{RunOutcome, Workspace};
use config::Profile;
use mentor_alloc_persistence::{CsvStore, ReportExporter};
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    let workspace: Workspace = Workspace {
        config: config::resolve(args.profile, args.config.as_deref(), args.batch_size)?,
        store: CsvStore::new(args.data_dir),
        exporter: ReportExporter::new(args.reports_dir),
    };

    args.command.run(&workspace)
}

/// Mentor allocation - batch assignment of students to mentors
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration file; keys it leaves out keep the profile's values
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Configuration preset to start from
    #[arg(long, global = true, value_enum, default_value_t = Profile::Development)]
    profile: Profile,

    /// Students per batch, overriding the configuration
    #[arg(long, global = true, value_name = "N")]
    batch_size: Option<usize>,

    /// Directory holding students.csv and mentors.csv
    #[arg(long, global = true, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Directory reports are written to
    #[arg(long, global = true, value_name = "DIR", default_value = "reports")]
    reports_dir: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assign every student to a mentor in batches
    #[command(visible_alias = "a")]
    Assign {
        /// Write the sample rosters before assigning
        #[arg(long)]
        sample_data: bool,
    },

    /// Place new students with mentors that still have room
    Add {
        /// CSV file of students to add
        #[arg(long, value_name = "FILE")]
        students: PathBuf,
    },

    /// Clear every assignment and assign again
    #[command(visible_alias = "r")]
    Reassign {
        /// Faculty ID of a mentor to take out of rotation first
        #[arg(long, value_name = "ID")]
        remove_mentor: Option<String>,
    },

    /// Write the sample rosters to the data directory
    SampleData,

    /// Print the effective configuration as JSON
    ShowConfig,
}

impl Command {
    fn run(self, workspace: &Workspace) -> Result<()> {
        let outcome: RunOutcome = match self {
            Self::Assign { sample_data } => workspace.assign(sample_data)?,
            Self::Add { students } => workspace.add(&students)?,
            Self::Reassign { remove_mentor } => workspace.reassign(remove_mentor.as_deref())?,
            Self::SampleData => return workspace.write_sample_data(),
            Self::ShowConfig => return workspace.show_config(),
        };

        info!(
            students = outcome.students.len(),
            mentors = outcome.mentors.len(),
            assignments = outcome.summary.total_assignments(),
            unassigned = outcome.summary.unassigned_students().len(),
            reports = outcome.reports.len(),
            "Command completed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args: Args = Args::try_parse_from(["mentor-alloc", "assign"]).unwrap();

        assert_eq!(args.profile, Profile::Development);
        assert_eq!(args.data_dir, PathBuf::from("data"));
        assert_eq!(args.reports_dir, PathBuf::from("reports"));
        assert_eq!(args.batch_size, None);
        assert_eq!(args.log_level(), LevelFilter::INFO);
        assert!(matches!(args.command, Command::Assign { sample_data: false }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args: Args = Args::try_parse_from([
            "mentor-alloc",
            "reassign",
            "--remove-mentor",
            "FAC002",
            "--profile",
            "production",
            "--batch-size",
            "25",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.profile, Profile::Production);
        assert_eq!(args.batch_size, Some(25));
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
        assert!(matches!(
            args.command,
            Command::Reassign { remove_mentor: Some(ref id) } if id == "FAC002"
        ));
    }

    #[test]
    fn test_add_requires_students_file() {
        assert!(Args::try_parse_from(["mentor-alloc", "add"]).is_err());

        let args: Args =
            Args::try_parse_from(["mentor-alloc", "add", "--students", "new.csv"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Add { ref students } if students == &PathBuf::from("new.csv")
        ));
    }

    #[test]
    fn test_rejects_unknown_profile() {
        let result = Args::try_parse_from(["mentor-alloc", "--profile", "staging", "show-config"]);
        assert!(result.is_err());
    }
}
