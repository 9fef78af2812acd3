//! Writes the page script for the settings to stdout, or to the path given as
//! the first argument (e.g. `public/javascripts/config.js`).

use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt};
use tweetwall_config::config;

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = config();
    info!(
        "Rendering settings for {:?} (notice hold {:?}, tweet interval {:?})",
        settings.title,
        settings.timings.notice_hold_time()?,
        settings.timings.tweet_interval()?,
    );
    let script = settings.to_default_script()?;

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, &script)?;
            info!("Wrote {}", path);
        }
        None => print!("{}", script),
    }
    Ok(())
}
