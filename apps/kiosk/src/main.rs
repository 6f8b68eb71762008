use std::{path::PathBuf, time::Duration};

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::KioskApp;

#[derive(Debug, Parser)]
#[command(name = "mustso-kiosk", version, about = "MUSTSO information kiosk")]
struct CliArgs {
    /// Directory containing mustso.json and usrc.json. The fixtures embedded
    /// in the binary are used when absent.
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// News carousel auto-advance interval in milliseconds. Must be at
    /// least 1; a zero-period ticker cannot be scheduled.
    #[arg(
        long,
        default_value_t = app_core::DEFAULT_AUTO_ADVANCE_INTERVAL.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    news_interval_ms: u64,

    /// Tracing filter when RUST_LOG is unset, e.g. "info" or "kiosk=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = CliArgs::parse();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::spawn_backend_thread(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MUSTSO Kiosk")
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    let news_interval = Duration::from_millis(args.news_interval_ms);
    eframe::run_native(
        "MUSTSO Kiosk",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(KioskApp::new(
                cmd_tx,
                ui_rx,
                args.content_dir,
                news_interval,
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn zero_news_interval_is_rejected_on_the_command_line() {
        let err = CliArgs::try_parse_from(["mustso-kiosk", "--news-interval-ms", "0"])
            .expect_err("zero interval must not parse");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn default_news_interval_is_five_seconds() {
        let args = CliArgs::try_parse_from(["mustso-kiosk"]).expect("defaults parse");
        assert_eq!(args.news_interval_ms, 5000);
    }
}
