//! This binary serves the FOP single tax payment calendar as JSON.
//!
//! The path and query string are `/calendar?group=<1|2|3>&with_pdv=<0|1>`.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use fop_core::CalendarSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod route;

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the directory containing the calendar documents
    #[arg(long, env = "FOP_DATA_ROOT", default_value = "data")]
    pub data_root: PathBuf,
    /// the port to listen on
    #[arg(long, env = "FOP_PORT", default_value_t = 8010)]
    pub port: u16,
    /// the calendar year
    #[arg(long, env = "FOP_YEAR", default_value_t = 2019)]
    pub year: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fop_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Arguments::parse();
    let app = route::router(CalendarSource::new(args.data_root, args.year));
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!(%addr, year = args.year, "starting server");
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
