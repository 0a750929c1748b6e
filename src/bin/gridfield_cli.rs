//! CLI tool for gridfield - builds a grid and prints its surface or value
//!
//! Usage:
//!   gridfield_cli <config.json>                      # blank grid, HTML to stdout
//!   gridfield_cli <config.json> -v value.json        # preloaded from a value file
//!   gridfield_cli <config.json> --serialize          # canonical serialization instead of HTML

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;

use gridfield::config::{Geometry, GridConfig};
use gridfield::{builder, render, serialize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gridfield_cli <config.json> [-v value.json] [--serialize]");
        std::process::exit(1);
    }

    let config_path = &args[1];
    let mut value_path: Option<&String> = None;
    let mut emit_serialized = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-v" if i + 1 < args.len() => {
                value_path = Some(&args[i + 1]);
                i += 2;
            }
            "--serialize" => {
                emit_serialized = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    // Read and parse the configuration
    let config_text = match fs::read_to_string(config_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", config_path, e);
            std::process::exit(1);
        }
    };
    let config: GridConfig = match serde_json::from_str(&config_text) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error parsing configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Read the serialized value, if any
    let value = match value_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(v) => v.trim_end().to_string(),
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => String::new(),
    };

    // Build the grid
    let geometry = match Geometry::interpret(&config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Build failed [{}]: {}", e.identifier(), e);
            std::process::exit(1);
        }
    };
    let grid = match builder::build(&geometry, &value) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Build failed [{}]: {}", e.identifier(), e);
            std::process::exit(1);
        }
    };

    if emit_serialized {
        println!("{}", serialize::to_wire(&grid));
    } else {
        println!("{}", render::render_surface(&grid, &geometry));
    }
}
