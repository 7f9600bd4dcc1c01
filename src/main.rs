//! rpak CLI - Command-line tool for listing assets in Respawn RPak archives.
//!
//! Archives are read from pre-extracted page dumps described by a JSON manifest.

mod manifest;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::{MatchOptions, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::Level;

use rpak_info::{AssetEntry, AssetInfo, AssetKind, AssetStatus, AssetType, BuildContext};

use crate::manifest::{Loaded, Manifest};

/// rpak - Respawn RPak asset listing tool
#[derive(Parser)]
#[command(name = "rpak")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log per-asset failures and layout decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List asset names and summaries
    List {
        /// Path to the archive manifest
        #[arg(short, long, env = "RPAK_MANIFEST")]
        manifest: PathBuf,

        /// Filter pattern for asset names (glob-style)
        #[arg(short, long)]
        filter: Option<String>,

        /// Only list assets with this category tag, e.g. `mdl_`
        #[arg(short, long)]
        kind: Option<String>,

        /// Show debug information
        #[arg(short, long)]
        detailed: bool,

        /// Print records as JSON
        #[arg(long)]
        json: bool,

        /// Build assets on all cores
        #[arg(short, long)]
        parallel: bool,
    },

    /// Build every asset and print per-category counts
    Stats {
        /// Path to the archive manifest
        #[arg(short, long, env = "RPAK_MANIFEST")]
        manifest: PathBuf,

        /// Build assets on all cores
        #[arg(short, long)]
        parallel: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List {
            manifest,
            filter,
            kind,
            detailed,
            json,
            parallel,
        } => {
            let options = ListOptions {
                filter: filter.as_deref(),
                kind: kind.as_deref(),
                detailed,
                json,
                parallel,
            };
            cmd_list(&manifest, &options)?;
        }
        Commands::Stats { manifest, parallel } => {
            cmd_stats(&manifest, parallel)?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<Loaded> {
    let start = Instant::now();
    let loaded = Manifest::read(path)?
        .load(path)
        .context("Failed to load archives")?;

    tracing::info!(
        archives = loaded.archives.len(),
        assets = loaded.entries.len(),
        elapsed = ?start.elapsed(),
        "loaded manifest"
    );
    Ok(loaded)
}

struct ListOptions<'a> {
    filter: Option<&'a str>,
    kind: Option<&'a str>,
    detailed: bool,
    json: bool,
    parallel: bool,
}

fn cmd_list(path: &Path, options: &ListOptions<'_>) -> Result<()> {
    let loaded = load(path)?;

    let entries: Vec<AssetEntry> = match options.kind {
        Some(tag) => {
            let kind = AssetKind::from_fourcc(tag)
                .with_context(|| format!("Invalid category tag {tag:?}"))?;
            loaded
                .entries
                .iter()
                .filter(|entry| entry.kind == kind)
                .copied()
                .collect()
        }
        None => loaded.entries.clone(),
    };

    let pattern = options
        .filter
        .map(Pattern::new)
        .transpose()
        .context("Invalid filter pattern")?;
    let match_options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let cx = BuildContext::new(&loaded.archives, &loaded.subtitles);
    let results = if options.parallel {
        cx.build_all_parallel(&entries)
    } else {
        cx.build_all(&entries)
    };

    let records: Vec<AssetInfo> = results
        .into_iter()
        .map(|result| result.unwrap_or_else(|failure| failure.to_info()))
        .filter(|info| {
            pattern
                .as_ref()
                .map_or(true, |p| p.matches_with(&info.name, match_options))
        })
        .collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut failed = 0;
    for info in &records {
        if info.status == AssetStatus::Error {
            failed += 1;
        }
        println!(
            "{:<48} {:<12} {:<6} {}",
            info.name,
            info.asset_type.to_string(),
            info.status.to_string(),
            info.info.as_deref().unwrap_or("")
        );
        if options.detailed {
            if let Some(debug_info) = &info.debug_info {
                println!("{:>48} {}", "", debug_info);
            }
        }
    }

    println!("\nTotal: {} assets ({} failed)", records.len(), failed);

    Ok(())
}

fn cmd_stats(path: &Path, parallel: bool) -> Result<()> {
    let loaded = load(path)?;
    let cx = BuildContext::new(&loaded.archives, &loaded.subtitles);

    let pb = ProgressBar::new(loaded.entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let build = |entry: &AssetEntry| {
        let result = cx.build(entry);
        if let Err(error) = &result {
            tracing::debug!(hash = format_args!("{:#x}", entry.name_hash), %error, "asset build failed");
        }
        pb.inc(1);
        (entry.kind.asset_type(), result.is_ok())
    };

    let start = Instant::now();
    let outcomes: Vec<(AssetType, bool)> = if parallel {
        loaded.entries.par_iter().map(build).collect()
    } else {
        loaded.entries.iter().map(build).collect()
    };
    pb.finish_with_message("Done");

    let mut counts: FxHashMap<AssetType, (usize, usize)> = FxHashMap::default();
    for (asset_type, ok) in outcomes {
        let (built, failed) = counts.entry(asset_type).or_default();
        if ok {
            *built += 1;
        } else {
            *failed += 1;
        }
    }

    let mut rows: Vec<_> = counts.into_iter().collect();
    rows.sort_by_key(|(asset_type, _)| asset_type.to_string());

    println!("Built {} assets in {:?}", loaded.entries.len(), start.elapsed());
    println!("{:<14} {:>8} {:>8}", "Type", "Loaded", "Failed");
    for (asset_type, (ok, failed)) in rows {
        println!("{:<14} {:>8} {:>8}", asset_type.to_string(), ok, failed);
    }

    Ok(())
}
