//! Async driver
//!
//! Runs an [`ImageLoadController`] on the tokio event loop: executes its
//! commands, owns the single in-flight fetch and the single pending timer,
//! and feeds outcomes back until the image settles.

use std::future::pending;
use std::pin::Pin;

use log::debug;
use tokio::time::Sleep;
use tokio_util::sync::CancellationToken;

use crate::controller::{Command, Generation, ImageLoadController, Phase, Timer};
use crate::image_loader::{BoxFuture, DecodedImage, ImageFetcher, ImageLoadError};
use crate::view::ImageView;

type FetchOutcome = Result<DecodedImage, ImageLoadError>;

/// Final state of a driven image
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub phase: Phase,
    /// URL of the last attempt
    pub src: String,
    pub retries: u32,
    pub view: ImageView,
    /// Pixels, present only when the image loaded
    pub image: Option<DecodedImage>,
}

/// What woke the driver up
enum Wake {
    Cancelled,
    Fetched(Generation, FetchOutcome),
    Timer(Timer),
}

/// Drive a freshly mounted controller until it settles or `cancel` fires
///
/// `commands` are the ones returned by [`ImageLoadController::mount`].
/// Cancellation unmounts the controller; the report then reflects whatever
/// state it was in.
pub async fn drive<F>(
    mut controller: ImageLoadController,
    mut commands: Vec<Command>,
    fetcher: &F,
    cancel: &CancellationToken,
) -> LoadReport
where
    F: ImageFetcher + ?Sized,
{
    let mut fetch: Option<(Generation, BoxFuture<'_, FetchOutcome>)> = None;
    let mut timer: Option<(Timer, Pin<Box<Sleep>>)> = None;
    let mut image = None;

    loop {
        for command in commands.drain(..) {
            match command {
                Command::Fetch { attempt, src } => {
                    // Replacing an in-flight fetch stops listening to it
                    fetch = Some((attempt, fetcher.fetch(&src)));
                }
                Command::Schedule { timer: t, after } => {
                    timer = Some((t, Box::pin(tokio::time::sleep(after))));
                }
                Command::Cancel { timer: t } => {
                    if matches!(&timer, Some((armed, _)) if *armed == t) {
                        timer = None;
                    }
                }
            }
        }

        if controller.is_settled() || (fetch.is_none() && timer.is_none()) {
            break;
        }

        // Cancellation, then load/error, then timers: a fetch that completes
        // in the same tick as its deadline wins.
        let wake = tokio::select! {
            biased;
            _ = cancel.cancelled() => Wake::Cancelled,
            (attempt, outcome) = next_fetch(&mut fetch) => Wake::Fetched(attempt, outcome),
            fired = next_timer(&mut timer) => Wake::Timer(fired),
        };

        commands = match wake {
            Wake::Cancelled => {
                debug!("Image load cancelled: {}", controller.current_src());
                controller.unmount();
                break;
            }
            Wake::Fetched(attempt, Ok(decoded)) => {
                fetch = None;
                let commands = controller.on_load(attempt);
                if controller.phase() == Phase::Loaded {
                    image = Some(decoded);
                }
                commands
            }
            Wake::Fetched(attempt, Err(e)) => {
                fetch = None;
                debug!("Image attempt failed: {}: {}", controller.current_src(), e);
                controller.on_error(attempt)
            }
            Wake::Timer(fired) => {
                timer = None;
                controller.on_timer(fired)
            }
        };
    }

    if controller.phase() == Phase::Loaded {
        controller.advance_fade(f32::INFINITY);
    }

    LoadReport {
        phase: controller.phase(),
        src: controller.current_src().to_string(),
        retries: controller.retry_count(),
        view: controller.view(),
        image,
    }
}

async fn next_fetch<'a>(
    slot: &mut Option<(Generation, BoxFuture<'a, FetchOutcome>)>,
) -> (Generation, FetchOutcome) {
    match slot {
        Some((attempt, future)) => {
            let outcome = future.await;
            (*attempt, outcome)
        }
        None => pending().await,
    }
}

async fn next_timer(slot: &mut Option<(Timer, Pin<Box<Sleep>>)>) -> Timer {
    match slot {
        Some((timer, sleep)) => {
            sleep.as_mut().await;
            *timer
        }
        None => pending().await,
    }
}
