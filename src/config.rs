use crate::models::bounds::GeoBounds;
use crate::utils::style::is_builtin_palette;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const MAX_COLORBAR_SIDE: u32 = 4096;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `assets/`.
    pub root: PathBuf,
    pub port: u16,
    pub bounds: GeoBounds,
    pub default_palette: Option<String>,
    pub escape_units: bool,
    pub colorbar_width: u32,
    pub colorbar_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: PathBuf::from("."),
            port: 8000,
            bounds: GeoBounds::default(),
            default_palette: Some("viridis".to_string()),
            escape_units: false,
            colorbar_width: 256,
            colorbar_height: 20,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "substrate-map")]
#[command(about = "Interactive substrate overlay map viewer")]
pub struct Cli {
    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the map viewer (default)
    Serve(ServeArgs),
    /// Print the bounds of a GeoJSON file as "left bottom right top"
    Bbox(BboxArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Site root containing the assets folder
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Fixed map extent as left,bottom,right,top
    #[arg(long, allow_hyphen_values = true)]
    pub bounds: Option<GeoBounds>,

    /// Palette for generated colour bars of substrates without one
    #[arg(long, default_value = "viridis", value_parser = parse_palette)]
    pub default_palette: String,

    /// Show unit markup as plain text
    #[arg(long)]
    pub escape_units: bool,

    /// Generated colour-bar size in pixels, capped at 4096 per side
    #[arg(long, default_value_t = 256)]
    pub colorbar_width: u32,

    #[arg(long, default_value_t = 20)]
    pub colorbar_height: u32,
}

impl Default for ServeArgs {
    fn default() -> Self {
        let config = Config::default();
        ServeArgs {
            root: config.root,
            port: config.port,
            bounds: None,
            default_palette: config.default_palette.unwrap_or_default(),
            escape_units: config.escape_units,
            colorbar_width: config.colorbar_width,
            colorbar_height: config.colorbar_height,
        }
    }
}

impl From<ServeArgs> for Config {
    fn from(args: ServeArgs) -> Self {
        Config {
            root: args.root,
            port: args.port,
            bounds: args.bounds.unwrap_or_default(),
            default_palette: Some(args.default_palette).filter(|p| !p.is_empty()),
            escape_units: args.escape_units,
            colorbar_width: args.colorbar_width.clamp(1, MAX_COLORBAR_SIDE),
            colorbar_height: args.colorbar_height.clamp(1, MAX_COLORBAR_SIDE),
        }
    }
}

/// Empty means no default: unpaletted colour bars render grayscale.
fn parse_palette(name: &str) -> Result<String, String> {
    if name.is_empty() || is_builtin_palette(name) {
        Ok(name.to_string())
    } else {
        Err(format!("unknown palette '{}'", name))
    }
}

#[derive(Args, Debug, Clone)]
pub struct BboxArgs {
    /// GeoJSON file to measure
    pub path: PathBuf,

    /// Feature property to filter on
    #[arg(long, requires = "prefix")]
    pub property: Option<String>,

    /// Keep features whose property starts with this
    #[arg(long, requires = "property")]
    pub prefix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults() {
        let cli = Cli::try_parse_from(["substrate-map"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "info");
        let config = Config::from(ServeArgs::default());
        assert_eq!(config.port, 8000);
        assert_eq!(config.bounds, GeoBounds::default());
        assert_eq!(config.default_palette.as_deref(), Some("viridis"));
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::try_parse_from([
            "substrate-map",
            "serve",
            "--root",
            "site",
            "--port",
            "9000",
            "--bounds",
            "0,0,100,50",
            "--escape-units",
        ])
        .unwrap();
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        let config = Config::from(args);
        assert_eq!(config.root, PathBuf::from("site"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.bounds, GeoBounds::from((0.0, 0.0, 100.0, 50.0)));
        assert!(config.escape_units);
    }

    #[test]
    fn test_default_palette_must_be_builtin() {
        assert!(
            Cli::try_parse_from(["substrate-map", "serve", "--default-palette", "jet"]).is_err()
        );
        let cli =
            Cli::try_parse_from(["substrate-map", "serve", "--default-palette", ""]).unwrap();
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert!(Config::from(args).default_palette.is_none());
    }

    #[test]
    fn test_colorbar_size_is_clamped() {
        let cli = Cli::try_parse_from([
            "substrate-map",
            "serve",
            "--colorbar-width",
            "4000000000",
            "--colorbar-height",
            "0",
        ])
        .unwrap();
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        let config = Config::from(args);
        assert_eq!(config.colorbar_width, MAX_COLORBAR_SIDE);
        assert_eq!(config.colorbar_height, 1);
    }

    #[test]
    fn test_bbox_filter_needs_both_flags() {
        assert!(Cli::try_parse_from(["substrate-map", "bbox", "a.geojson", "--prefix", "SE"]).is_err());
        let cli = Cli::try_parse_from([
            "substrate-map",
            "bbox",
            "a.geojson",
            "--property",
            "NUTS_ID",
            "--prefix",
            "SE",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Command::Bbox(BboxArgs { prefix: Some(_), .. }))));
    }
}
