use anyhow::Context;
use clap::Parser;
use geojson::GeoJson;
use substrate_map::config::{BboxArgs, Cli, Command, ServeArgs};
use substrate_map::utils::geometry::{FeatureFilter, feature_bounds};
use substrate_map::{Config, ViewerServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            let server = ViewerServer::new(Config::from(args)).await?;
            server.start().await
        }
        Command::Bbox(args) => print_bbox(args),
    }
}

fn print_bbox(args: BboxArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let geojson: GeoJson = text
        .parse()
        .with_context(|| format!("Invalid GeoJSON in {}", args.path.display()))?;

    let filter = match (args.property, args.prefix) {
        (Some(property), Some(prefix)) => Some(FeatureFilter { property, prefix }),
        _ => None,
    };

    let bounds = feature_bounds(&geojson, filter.as_ref())
        .context("No matching coordinates in the GeoJSON file")?;
    println!("{}", bounds);
    Ok(())
}
