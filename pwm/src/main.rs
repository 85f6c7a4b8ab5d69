#![warn(clippy::all, clippy::nursery, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
#[cfg(feature = "deadlock_detection")]
use std::thread;
#[cfg(feature = "deadlock_detection")]
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::anyhow;
#[cfg(feature = "deadlock_detection")]
use parking_lot::deadlock;
use parking_lot::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

use pwm::Message;
use pwm::RecordingBackend;
use pwm::StaticConfig;
use pwm::WindowManager;
use pwm::core::Rect;
use pwm::listen_for_messages;

fn setup(log_level: &str) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(std::env::temp_dir(), "pwm.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish()
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            ),
    )?;

    // https://github.com/tokio-rs/tracing/blob/master/examples/examples/panic_hook.rs
    // Record panics as `tracing` events at the `ERROR` level, including the
    // current span if there is one.
    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            tracing::error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic);
        }
    }));

    Ok(guard)
}

#[cfg(feature = "deadlock_detection")]
#[tracing::instrument]
fn detect_deadlocks() {
    // Create a background thread which checks for deadlocks every 5s
    thread::spawn(move || {
        loop {
            tracing::info!("running deadlock detector");
            thread::sleep(Duration::from_secs(5));
            let deadlocks = deadlock::check_deadlock();
            if deadlocks.is_empty() {
                continue;
            }

            tracing::error!("{} deadlocks detected", deadlocks.len());
            for (i, threads) in deadlocks.iter().enumerate() {
                tracing::error!("deadlock #{}", i);
                for t in threads {
                    tracing::error!("thread id: {:#?}", t.thread_id());
                    tracing::error!("{:#?}", t.backtrace());
                }
            }
        }
    });
}

#[derive(Parser)]
#[clap(author, about, version)]
struct Opts {
    /// Path to a pwm.json or pwm.yaml configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Width of the screen in pixels
    #[clap(long, default_value_t = 1920)]
    width: i32,
    /// Height of the screen in pixels
    #[clap(long, default_value_t = 1080)]
    height: i32,
    /// Validate the configuration and exit
    #[clap(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    color_eyre::install()?;

    let config = StaticConfig::load(opts.config.as_deref())?;
    config.validate()?;

    // File logging worker guard has to have an assignment in the main fn to work
    let _guard = setup(config.log_level())?;

    if opts.dry_run {
        tracing::info!("configuration is valid");
        return Ok(());
    }

    #[cfg(feature = "deadlock_detection")]
    detect_deadlocks();

    let area = Rect::new(0, 0, opts.width, opts.height);
    let wm = Arc::new(Mutex::new(WindowManager::new(
        &config,
        area,
        RecordingBackend::default(),
    )));

    let (outgoing, incoming) = crossbeam_channel::unbounded();
    let (responses, replies) = crossbeam_channel::unbounded();
    let listener = listen_for_messages(wm.clone(), incoming, responses);

    // Newline-delimited JSON messages stand in for the display connection
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Message>(&line) {
            Ok(message) => outgoing.send(message)?,
            Err(error) => tracing::warn!("ignoring malformed message: {}", error),
        }
    }

    drop(outgoing);
    listener
        .join()
        .map_err(|_| anyhow!("the message listener panicked"))?;

    for state in replies.try_iter() {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    let state = wm.lock().state();
    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
