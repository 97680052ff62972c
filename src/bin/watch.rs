// src/bin/watch.rs
use rbr_leader::{
    config::AppOptions,
    core::HttpFetcher,
    detector::LeaderDetector,
    log,
    runner::Scheduler,
    sink::LogSink,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let options = AppOptions::from_env()?;
    if options.tracks.is_empty() {
        color_eyre::eyre::bail!("no tracks configured; set LEG_<n>_<k> in the environment or .env");
    }

    let fetcher = HttpFetcher::new(&options.user_agent)?;
    let mut scheduler = Scheduler::from_options(&options, fetcher, LogSink, LeaderDetector::new());
    scheduler.run()
}
