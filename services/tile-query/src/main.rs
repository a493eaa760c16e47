//! Tile query tool.
//!
//! Builds one tiled CRS and service bounds from configuration, answers a
//! single tile query and prints the result as JSON on stdout:
//! - Built-in or YAML-defined CRS registry
//! - Query extent in geographic, projected or pixel units
//! - Paginated, distance-ordered tile lists

mod query;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tcrs_common::BoundingBox;
use tiled_crs::TcrsConfig;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use query::{BboxUnits, TileQuery};

#[derive(Parser, Debug)]
#[command(name = "tile-query")]
#[command(about = "List the tiles of a tiled CRS that cover an extent")]
struct Args {
    /// Registered CRS name
    #[arg(long, env = "TCRS_CRS", default_value = "OSMTILE")]
    crs: String,

    /// YAML CRS registry (default: built-in OSMTILE, CBMTILE, APSTILE)
    #[arg(long, env = "TCRS_REGISTRY")]
    registry: Option<PathBuf>,

    /// Zoom level of the query
    #[arg(short, long)]
    zoom: Option<u32>,

    /// Query extent as west,south,east,north
    #[arg(short, long, allow_hyphen_values = true)]
    bbox: Option<String>,

    /// Units of --bbox
    #[arg(long, value_enum, default_value = "latlng")]
    bbox_units: BboxUnits,

    /// Offset into the row-major tile sequence
    #[arg(long, default_value = "0")]
    start: u64,

    /// Maximum tiles per page
    #[arg(long, env = "TCRS_PAGE_SIZE")]
    page_size: Option<usize>,

    /// Lowest zoom the service answers
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    min_zoom: i32,

    /// Highest zoom the service answers (default: last zoom of the CRS)
    #[arg(long, allow_hyphen_values = true)]
    max_zoom: Option<i32>,

    /// Service coverage as west,south,east,north in degrees (default: whole CRS)
    #[arg(long, allow_hyphen_values = true)]
    coverage: Option<String>,

    /// List the registered CRS definitions and exit
    #[arg(long)]
    list: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    status: u16,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    let mut config = TcrsConfig::from_env();
    if let Some(path) = &args.registry {
        config.registry_path = Some(path.clone());
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
    config.validate().context("Invalid configuration")?;

    let registry = config.load_registry().context("Failed to load CRS registry")?;

    if args.list {
        print_json(&query::list_registry(&registry)?, args.pretty)?;
        return Ok(());
    }

    let coverage = args
        .coverage
        .as_deref()
        .map(BoundingBox::from_query_string)
        .transpose()
        .context("Invalid --coverage")?;

    let service = query::build_service(
        &registry,
        &config,
        &args.crs,
        args.min_zoom,
        args.max_zoom,
        coverage.as_ref(),
    )
    .with_context(|| format!("Failed to configure service for {}", args.crs))?;

    info!(
        crs = %args.crs,
        min_zoom = service.min_zoom(),
        max_zoom = service.max_zoom(),
        page_size = config.page_size,
        "Service configured"
    );

    let (Some(zoom), Some(bbox)) = (args.zoom, args.bbox.as_deref()) else {
        bail!("--zoom and --bbox are required unless --list is given");
    };

    let request = match BoundingBox::from_query_string(bbox) {
        Ok(bbox) => TileQuery {
            zoom,
            bbox,
            units: args.bbox_units,
            start: args.start,
        },
        Err(e) => return fail(e, args.pretty),
    };

    match query::run_query(&service, &request) {
        Ok(response) => {
            info!(
                total = response.total,
                returned = response.tiles.len(),
                next = ?response.next,
                "Query complete"
            );
            print_json(&response, args.pretty)
        }
        Err(e) => fail(e, args.pretty),
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries the query result
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Print a request error as JSON and exit with a failure status.
fn fail(e: tcrs_common::TcrsError, pretty: bool) -> Result<()> {
    error!(error = %e, "Query failed");
    print_json(
        &ErrorResponse {
            error: e.to_string(),
            status: e.http_status_code(),
        },
        pretty,
    )?;
    std::process::exit(1);
}
