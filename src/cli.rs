// src/cli.rs
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::options::AppOptions;
use crate::core::HttpFetcher;
use crate::detector::LeaderDetector;
use crate::error::Result;
use crate::query;
use crate::runner::Scheduler;
use crate::sink::NullSink;

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Query rally leaderboards on demand")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Top 5 of every configured track of a leg
    Leg { number: u32 },
    /// Top 10 of the general leaderboard
    Leaderboard,
    /// Championship link, name and password
    Info,
    /// List configured tracks
    Tracks,
    /// Run a single poll cycle (bootstraps leaders only; no changes possible)
    Once,
}

pub fn run(args: Args) -> Result<()> {
    let options = AppOptions::from_env()?;

    match args.command {
        Command::Leg { number } => {
            let fetcher = HttpFetcher::new(&options.user_agent)?;
            println!("{}", query::leg(&options, &fetcher, number));
        }
        Command::Leaderboard => {
            let fetcher = HttpFetcher::new(&options.user_agent)?;
            println!("{}", query::leaderboard(&options, &fetcher));
        }
        Command::Info => println!("{}", query::info(&options)),
        Command::Tracks => {
            if options.tracks.is_empty() {
                println!("No tracks configured (set LEG_<n>_<k>).");
            }
            for t in &options.tracks {
                println!("{}\t{}", t.key, t.url);
            }
        }
        Command::Once => {
            let fetcher = HttpFetcher::new(&options.user_agent)?;
            // A single cycle can only bootstrap leaders, so there is nothing to deliver
            let mut sched = Scheduler::new(options.tracks, Duration::ZERO, fetcher, NullSink, LeaderDetector::new());
            let r = sched.run_cycle()?;
            println!("{}/{} tracks scraped, {} failed", r.scraped, r.tracks, r.failed);
            for t in sched.tracks() {
                match sched.detector().leader(&t.key) {
                    Some(l) => println!("{}\t{}\t{}", t.key, l.name, l.time),
                    None => println!("{}\t-", t.key),
                }
            }
        }
    }
    Ok(())
}
