//! Export shell: renders the ledger to text, CSV or JSON, on stdout or into
//! a file. The text layout itself lives in `core::report`.

use crate::core::report;
use crate::errors::{AppError, AppResult};
use crate::models::{period::Period, rate_config::RateConfig};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use chrono::Local;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row shared by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub period_start: String,
    pub period_end: Option<String>,
    pub date: String,
    pub hours: f64,
    pub note: String,
    pub logged_at: String,
}

fn flatten(periods: &[Period]) -> Vec<EntryExport> {
    periods
        .iter()
        .flat_map(|period| {
            let period_start = period.start_str();
            let period_end = period.end_date.map(|d| d.format("%Y-%m-%d").to_string());
            period.entries.iter().map(move |entry| EntryExport {
                period_start: period_start.clone(),
                period_end: period_end.clone(),
                date: entry.date_str(),
                hours: entry.hours,
                note: entry.note.clone().unwrap_or_default(),
                logged_at: entry.created_at.clone(),
            })
        })
        .collect()
}

fn to_csv(rows: &[EntryExport]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// Refuse to clobber an existing file unless `force` is set; create parent
/// directories as needed.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        periods: &[Period],
        rate: &RateConfig,
        currency: &str,
        format: &ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let payload = match format {
            ExportFormat::Text => {
                let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                report::render_text(periods, rate, currency, &generated_at)
            }
            ExportFormat::Csv => to_csv(&flatten(periods))?,
            ExportFormat::Json => serde_json::to_string_pretty(&flatten(periods))
                .map_err(|e| AppError::Export(e.to_string()))?,
        };

        match file {
            None => println!("{}", payload),
            Some(raw) => {
                let path = expand_tilde(raw);
                ensure_writable(&path, force)?;

                let mut f = fs::File::create(&path)?;
                f.write_all(payload.as_bytes())?;
                f.write_all(b"\n")?;

                success(format!(
                    "{} export completed: {}",
                    format.as_str(),
                    path.display()
                ));
            }
        }

        Ok(())
    }
}
