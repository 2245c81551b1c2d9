/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use dsi_progress_logger::ProgressLogger;

use mesh_stripifier::{
    assemble_strips_with_options, fixture, narrow_vertex_indices, LoggingObserver, SeedPolicy, StripifyOptions,
    Winding,
};

pub const COMMAND_NAME: &str = "strip";

#[derive(Args, Debug)]
#[command(about = "Strip a mesh loaded from an ASCII triangle-list fixture", long_about = None)]
struct CliArgs {
    /// Path to the triangle-list fixture (one `v0 v1 v2` triple per line).
    input: PathBuf,

    /// Apply the odd-parity winding fix-up for one-sided strips.
    #[arg(long)]
    one_sided: bool,

    /// Seed new strips from the least-connected triangles first.
    #[arg(long)]
    least_connected_first: bool,

    /// Join every strip into one via degenerate bridge vertices.
    #[arg(long)]
    connect_all: bool,
}

pub fn cli(command: Command) -> Command {
    command.subcommand(CliArgs::augment_args(Command::new(COMMAND_NAME)))
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    let args = CliArgs::from_arg_matches(submatches)?;

    let file = File::open(&args.input).with_context(|| format!("opening {}", args.input.display()))?;
    let wide_indices = fixture::read_triangle_list(BufReader::new(file))
        .with_context(|| format!("parsing {}", args.input.display()))?;
    let triangle_indices = narrow_vertex_indices(&wide_indices)
        .with_context(|| format!("narrowing vertex indices in {}", args.input.display()))?;
    let triangle_count = triangle_indices.len() / 3;

    let options = StripifyOptions {
        seed_policy: if args.least_connected_first {
            SeedPolicy::LeastConnectedFirst
        } else {
            SeedPolicy::Natural
        },
        winding: if args.one_sided { Winding::OneSided } else { Winding::TwoSided },
        connect_all: args.connect_all,
    };

    let mut pl = ProgressLogger::default();
    pl.item_name = "triangle";
    pl.expected_updates = Some(triangle_count);
    pl.start("Stripifying mesh...");

    let strips = assemble_strips_with_options(&triangle_indices, &options, &LoggingObserver)
        .with_context(|| format!("stripifying {}", args.input.display()))?;
    pl.done_with_count(triangle_count);

    let total_indices: usize = strips.iter().map(|s| s.len()).sum();
    for (i, strip) in strips.iter().enumerate() {
        println!("strip {i}: len={} {:?}", strip.len(), strip);
    }
    println!(
        "{} strip(s), {} indices emitted for {} triangles (was {} flat indices)",
        strips.len(),
        total_indices,
        triangle_count,
        triangle_count * 3,
    );

    Ok(())
}
