#[macro_use]
extern crate log;

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use openapnea::{
    algo::SummaryCalculator,
    codec::{write_series, write_summary, ColumnNames},
    store::{write_history, CsvHistoryFile, HistoryStorage},
    types::summary::IndexSource,
    OpenApnea, PipelineConfig,
};

#[derive(Parser)]
pub struct OpenApneaCli {
    #[arg(env, long, default_value = "sleep_apnea_history.csv")]
    pub history_path: PathBuf,
    #[arg(env, long, default_value = ColumnNames::DEFAULT_TIME)]
    pub time_column: String,
    #[arg(env, long, default_value = ColumnNames::DEFAULT_SPO2)]
    pub spo2_column: String,
    #[arg(env, long, default_value = ColumnNames::DEFAULT_PULSE)]
    pub pulse_column: String,
    #[clap(subcommand)]
    pub subcommand: OpenApneaCommand,
}

#[derive(Subcommand)]
pub enum OpenApneaCommand {
    ///
    /// Summarize an oximeter CSV export and add it to history
    ///
    Process {
        file: PathBuf,
        /// AHI from a sleep study, used instead of the ODI based estimate
        #[arg(long, requires = "odi", value_parser = non_negative)]
        ahi: Option<f64>,
        /// ODI from a sleep study, used instead of the computed one
        #[arg(long, requires = "ahi", value_parser = non_negative)]
        odi: Option<f64>,
        /// Write the summary row as CSV
        #[arg(long)]
        summary_out: Option<PathBuf>,
        /// Write the cleaned SpO2 and pulse series as CSV
        #[arg(long)]
        series_out: Option<PathBuf>,
        /// Do not read or update history
        #[arg(long)]
        no_history: bool,
    },
    ///
    /// Print stored history as CSV
    ///
    History,
}

fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = env_file {
        debug!("No .env loaded: {}", error);
    }

    let cli = OpenApneaCli::parse();
    let columns = ColumnNames::new(cli.time_column, cli.spo2_column, cli.pulse_column);
    let storage = CsvHistoryFile::new(cli.history_path);

    match cli.subcommand {
        OpenApneaCommand::Process {
            file,
            ahi,
            odi,
            summary_out,
            series_out,
            no_history,
        } => {
            let index_source = match (ahi, odi) {
                (Some(ahi), Some(odi)) => IndexSource::Supplied { ahi, odi },
                _ => IndexSource::Estimated,
            };
            let config = PipelineConfig {
                columns: columns.clone(),
                index_source,
            };

            let bytes =
                fs::read(&file).with_context(|| format!("Unable to read {}", file.display()))?;
            let mut openapnea = OpenApnea::new(config, storage);

            let (analysis, history) = if no_history {
                (openapnea.analyze(&bytes)?, None)
            } else {
                let run = openapnea.process(&bytes)?;
                (run.analysis, Some(run.history))
            };

            println!("{}", analysis.summary);
            match index_source {
                IndexSource::Estimated => println!(
                    "AHI is {}: ODI x {}, not a clinical measurement",
                    index_source.ahi_label(),
                    SummaryCalculator::AHI_PER_ODI
                ),
                IndexSource::Supplied { .. } => {
                    println!("AHI and ODI are {}", index_source.ahi_label())
                }
            }
            if analysis.report.rows_dropped() > 0 {
                println!(
                    "Dropped {} of {} row(s) without a valid time or SpO2",
                    analysis.report.rows_dropped(),
                    analysis.report.rows_read
                );
            }

            if let Some(path) = summary_out {
                let out = create(&path)?;
                write_summary(&analysis.summary, out)
                    .with_context(|| format!("Unable to write {}", path.display()))?;
                info!("Summary written to {}", path.display());
            }

            if let Some(path) = series_out {
                let out = create(&path)?;
                write_series(&analysis.series, &columns, out)
                    .with_context(|| format!("Unable to write {}", path.display()))?;
                info!("Series written to {}", path.display());
            }

            match history {
                Some(Ok(ledger)) => println!("History: {} day(s) stored", ledger.len()),
                Some(Err(error)) => println!("History not updated: {}", error),
                None => {}
            }

            Ok(())
        }
        OpenApneaCommand::History => {
            let ledger = storage.load()?;
            write_history(&ledger, io::stdout().lock())?;
            Ok(())
        }
    }
}

fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(String::from("must be a non-negative number"))
    }
}
