// main.rs - Command line front end for spiral lookups

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use ulam_spiral::{try_ulam, Coord, Dimensions};

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about = "Number at a coordinate of an anticlockwise Ulam spiral", long_about = None)]
pub struct Args {
    /// Grid width (equal to the height, or one more)
    #[arg(short = 'W', long)]
    pub width: u32,

    /// Grid height
    #[arg(short = 'H', long)]
    pub height: u32,

    /// Target column, 1-based from the left
    #[arg(short)]
    pub x: u32,

    /// Target row, 1-based from the top
    #[arg(short)]
    pub y: u32,

    /// Print a JSON object instead of the bare value
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Lookup {
    dimensions: Dimensions,
    coord: Coord,
    value: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    info!("Starting with {args:?}");

    let value = try_ulam(args.width, args.height, args.x, args.y).with_context(|| {
        format!(
            "Failed to look up ({}, {}) on a {}x{} spiral",
            args.x, args.y, args.width, args.height
        )
    })?;

    if args.json {
        let lookup = Lookup {
            dimensions: Dimensions::new(args.width, args.height),
            coord: Coord::new(args.x, args.y),
            value,
        };
        println!("{}", serde_json::to_string(&lookup).context("Failed to encode lookup as JSON")?);
    } else {
        println!("{value}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["ulam", "-W", "5", "-H", "5", "-x", "1", "-y", "1", "--json"]).unwrap();
        assert_eq!((args.width, args.height, args.x, args.y), (5, 5, 1, 1));
        assert!(args.json);
    }

    #[test]
    fn test_missing_coordinate_rejected() {
        assert!(Args::try_parse_from(["ulam", "--width", "5", "--height", "5", "-x", "1"]).is_err());
    }

    #[test]
    fn test_lookup_json() {
        let lookup = Lookup {
            dimensions: Dimensions::new(5, 5),
            coord: Coord::new(1, 1),
            value: 17,
        };
        assert_eq!(
            serde_json::to_string(&lookup).unwrap(),
            r#"{"dimensions":{"width":5,"height":5},"coord":{"x":1,"y":1},"value":17}"#
        );
    }
}
