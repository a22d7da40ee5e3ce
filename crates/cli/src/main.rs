// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lotto terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use std::time::Duration;

pub mod roster;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of computer players.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=10))]
    computers: u8,
    /// A human player nickname, repeat to add more human players.
    #[clap(long = "human", value_name = "NICKNAME")]
    humans: Vec<String>,
    /// Seed used to generate cards and shuffle the bag.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Stop the game after the given number of seconds.
    #[clap(long, short, value_name = "SECS")]
    time_limit: Option<u64>,
    /// Pause in milliseconds after announcing an eliminated player.
    #[clap(long, default_value_t = 2000)]
    pause: u64,
}

fn main() -> Result<()> {
    // Logs go to stderr and would mix with the game screen, use RUST_LOG to
    // enable more.
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = terminal::Config {
        computers: cli.computers as usize,
        humans: cli.humans,
        seed: cli.seed,
        time_limit: cli.time_limit.map(Duration::from_secs),
        pause: Duration::from_millis(cli.pause),
    };

    terminal::run(config)
}
