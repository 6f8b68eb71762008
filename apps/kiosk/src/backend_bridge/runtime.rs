//! Worker thread hosting the tokio runtime.
//!
//! Fixture loading and the recurring news tick both live here, off the UI
//! thread. Every outcome (loaded content, a load failure, each tick) is
//! marshalled back onto the UI thread as a `UiEvent` over the crossbeam
//! channel, so all state mutation stays strictly sequential on the UI side.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use tokio::{task::JoinHandle, time::MissedTickBehavior};

use content::ContentStore;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn spawn_backend_thread(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let mut ticker_task: Option<JoinHandle<()>> = None;

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadContent { content_dir } => {
                        let loaded = tokio::task::spawn_blocking(move || match content_dir {
                            Some(dir) => ContentStore::load_from_dir(&dir),
                            None => ContentStore::embedded_default(),
                        })
                        .await;

                        let event = match loaded {
                            Ok(Ok(store)) => UiEvent::ContentLoaded(Arc::new(store)),
                            Ok(Err(err)) => UiEvent::Error(UiError::from_message(
                                UiErrorContext::ContentLoad,
                                err.to_string(),
                            )),
                            Err(err) => UiEvent::Error(UiError::from_message(
                                UiErrorContext::BackendStartup,
                                format!("content loader task failed: {err}"),
                            )),
                        };
                        let _ = ui_tx.try_send(event);
                    }
                    BackendCommand::StartNewsTicker {
                        interval,
                        slide_count,
                    } => {
                        if let Some(task) = ticker_task.take() {
                            task.abort();
                        }
                        if !should_schedule_ticker(interval, slide_count) {
                            tracing::debug!(
                                ?interval,
                                slide_count,
                                "news ticker not scheduled"
                            );
                            continue;
                        }

                        tracing::debug!(?interval, slide_count, "starting news ticker");
                        let tick_tx = ui_tx.clone();
                        ticker_task = Some(tokio::spawn(async move {
                            let mut ticker = tokio::time::interval(interval);
                            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                            // interval() fires immediately; swallow that so the
                            // first visible advance happens one full period in.
                            ticker.tick().await;
                            loop {
                                ticker.tick().await;
                                if !deliver_tick(&tick_tx) {
                                    break;
                                }
                            }
                        }));
                    }
                    BackendCommand::StopNewsTicker => {
                        if let Some(task) = ticker_task.take() {
                            tracing::debug!("news ticker cancelled");
                            task.abort();
                        }
                    }
                }
            }

            // Command channel disconnected: the UI is gone. Cancel the ticker
            // rather than letting it tick into a dead channel.
            if let Some(task) = ticker_task.take() {
                task.abort();
            }
        });
    });
}

/// An empty carousel has nothing to cycle through, and
/// `tokio::time::interval` panics on a zero period, so neither case gets a
/// ticker. The CLI already rejects a zero interval; this keeps the worker
/// safe against any caller.
pub fn should_schedule_ticker(interval: std::time::Duration, slide_count: usize) -> bool {
    slide_count > 0 && !interval.is_zero()
}

/// Push one tick to the UI. A full queue means the UI is behind; the tick is
/// dropped and the ticker keeps running. Only a disconnected channel stops it.
fn deliver_tick(tick_tx: &Sender<UiEvent>) -> bool {
    match tick_tx.try_send(UiEvent::NewsTick) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            tracing::trace!("ui event queue full; news tick dropped");
            true
        }
        Err(TrySendError::Disconnected(_)) => false,
    }
}
