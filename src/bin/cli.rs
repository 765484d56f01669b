// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Keywell Project

//! Keywell CLI - triangulate face documents into binary STL

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use keywell::geo::{GeoError, Triangle};
use keywell::{io, model};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keywell")]
#[command(about = "Keywell - triangulate JSON face documents into binary STL", long_about = None)]
struct Cli {
    /// Input face document (JSON)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output STL file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Mirror the result across the yz plane (left-hand parts)
    #[arg(short, long)]
    mirror: bool,

    /// Number of worker threads (0 = one per core)
    #[arg(short, long, default_value = "0")]
    threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        if error.downcast_ref::<GeoError>().is_some() {
            eprintln!(
                "{} overlapping points or malformed geometry - check margins and chamfers",
                "Error:".red().bold()
            );
        } else {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()?;
    }

    if cli.verbose {
        println!("Loading: {}", cli.input.display());
    }
    let faces = io::load_faces(&cli.input)?;

    if cli.verbose {
        println!("Triangulating {} faces...", faces.len());
    }
    let start = std::time::Instant::now();
    let mut triangles: Vec<Triangle> = model::triangulate_faces(&faces)?
        .into_iter()
        .flatten()
        .collect();
    let elapsed = start.elapsed();

    if cli.mirror {
        triangles = model::mirrored_x(&triangles);
    }

    io::write_stl(&cli.output, &triangles)?;

    if cli.verbose {
        println!("Triangulated in {:.2?}", elapsed);
        println!("Triangles: {}", triangles.len());
        println!("Output: {}", cli.output.display());
    } else {
        println!(
            "{} {} ({} triangles)",
            "Wrote".green().bold(),
            cli.output.display(),
            triangles.len()
        );
    }

    Ok(())
}
