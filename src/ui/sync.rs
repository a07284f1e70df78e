//! Delivery of editor pushes: one immediate attempt, at most one delayed retry

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::editor::{BufferPush, DomEditors, PushOutcome};
use crate::playground::PlaygroundState;

/// Fire-and-forget: nothing awaits the outcome, a newer transition simply
/// supersedes a push that is still waiting for its retry.
pub fn deliver(mut push: BufferPush, state: Signal<PlaygroundState>, retry_delay_ms: u32) {
    let outcome = push.attempt(&DomEditors, state.peek().revision());
    if outcome != PushOutcome::RetryLater {
        report(&push, outcome);
        return;
    }

    debug!(revision = push.revision(), delay_ms = retry_delay_ms, "editor not mounted, retrying once");
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(retry_delay_ms).await;
        let outcome = push.attempt(&DomEditors, state.peek().revision());
        report(&push, outcome);
    });
}

fn report(push: &BufferPush, outcome: PushOutcome) {
    match outcome {
        PushOutcome::Delivered => debug!(revision = push.revision(), "editor buffer updated"),
        PushOutcome::Superseded => debug!(revision = push.revision(), "editor push superseded"),
        PushOutcome::RetryLater => unreachable!("a push asks for at most one retry"),
        PushOutcome::Abandoned(err) => warn!(revision = push.revision(), %err, "editor push abandoned"),
    }
}
