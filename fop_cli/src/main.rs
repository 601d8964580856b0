use std::{env::current_dir, fs::write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use fop_core::{get_calendar, CalendarSource, TaxGroup};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the single tax group, defaults to 1 and is clamped to 3 when out of range
    pub group: Option<String>,
    /// use the VAT-inclusive rate of group 3
    #[arg(long)]
    pub with_pdv: bool,
    /// the directory containing the calendar documents
    #[arg(long, env = "FOP_DATA_ROOT", default_value = "data")]
    pub data_root: PathBuf,
    /// the calendar year
    #[arg(long, env = "FOP_YEAR", default_value_t = 2019)]
    pub year: i32,
    /// the file to write, defaults to `calendar.json` in the current directory
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fop_cli=info")),
        )
        .init();

    let args = Arguments::parse();
    let group = TaxGroup::from_param(args.group.as_deref());
    let source = CalendarSource::new(&args.data_root, args.year);
    let calendar = get_calendar(&source, group, args.with_pdv)?;
    let path = match args.output {
        Some(path) => path,
        None => current_dir()?.join("calendar.json"),
    };
    write(&path, serde_json::to_string_pretty(&calendar)?)?;
    tracing::info!(path = %path.display(), %group, "calendar written");
    Ok(())
}
