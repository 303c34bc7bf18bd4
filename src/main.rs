use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use notelogo::{check_size, layout_logo, output, IconSetConfig, DEFAULT_SIZES};

/// Render the notepad logo as transparent PNG icons.
#[derive(Parser, Debug)]
#[command(name = "notelogo", version, about, long_about = None)]
struct Cli {
    /// Directory the icons are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Icon size in pixels; repeat for several (default: 1024, 128, 48, 16)
    #[arg(short, long = "size", value_name = "PX")]
    sizes: Vec<u32>,

    /// Number of icons rendered concurrently (default: one per CPU)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Also write a JSON manifest (relative to the output directory)
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Print the computed layout for one size as JSON and exit
    #[arg(long, value_name = "PX")]
    print_layout: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(size) = cli.print_layout {
        check_size(size)?;
        let layout = layout_logo(size);
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    let sizes = if cli.sizes.is_empty() { DEFAULT_SIZES.to_vec() } else { cli.sizes };
    let mut config = IconSetConfig {
        out_dir: cli.out_dir,
        manifest: cli.manifest,
        ..Default::default()
    }
    .with_sizes(&sizes);
    if let Some(jobs) = cli.jobs {
        config.jobs = jobs;
    }

    let written = output::write_icons(&config)
        .with_context(|| format!("failed to write icons to {}", config.out_dir.display()))?;

    for icon in &written {
        println!("Created {}", icon.file);
    }
    if let Some(manifest) = &config.manifest {
        println!("Created {}", manifest.display());
    }
    println!("\nAll {} PNG icons created with transparent backgrounds!", written.len());
    Ok(())
}
