//! warmup — drive a learning-rate and momentum schedule through a toy loop.
//!
//! The learning rate warms up linearly for `WARMUP_STEPS` batches, then
//! follows a cosine curve that is defined per epoch and queried per batch,
//! restarting every `CYCLE_EPOCHS` epochs.  Momentum follows a triangular
//! wave and only moves at epoch boundaries.
//!
//! Run with `RUST_LOG=debug` to see schedule construction, or
//! `RUST_LOG=trace` to see every cursor advance.

use std::cell::Cell;
use std::f64::consts::PI;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hs_combinators::{Interpolator, Loop, Sequence, sequence, symmetric};
use hs_core::{Schedule, from_fn, from_real_fn};
use hs_cursor::Stateful;

// ── Constants ─────────────────────────────────────────────────────────────────

const PEAK_LR:           f64 = 0.1;
const WARMUP_STEPS:      u64 = 8;
const BATCHES_PER_EPOCH: u64 = 4;
const CYCLE_EPOCHS:      u64 = 3;
const TOTAL_EPOCHS:      u64 = 8;

// ── Schedules ─────────────────────────────────────────────────────────────────

fn learning_rate() -> Result<Sequence<f64>> {
    let warmup = from_fn(|t| PEAK_LR * t as f64 / WARMUP_STEPS as f64);

    // Defined over epochs in (0, CYCLE_EPOCHS]; queried per batch.
    let cosine = from_real_fn(|epoch: f64| {
        0.5 * PEAK_LR * (1.0 + (PI * epoch / CYCLE_EPOCHS as f64).cos())
    });
    let per_batch = Interpolator::new(cosine, BATCHES_PER_EPOCH as f64)?;
    let restarts = Loop::new(per_batch, CYCLE_EPOCHS * BATCHES_PER_EPOCH)?;

    Ok(sequence![
        warmup   => WARMUP_STEPS,
        restarts => 1,
    ]?)
}

fn momentum() -> impl Schedule<Output = f64> {
    // Triangle from 0.85 at the first epoch of each cycle.  0.95 is reached
    // only when the cycle length is even; with 3 epochs: 0.85, 0.917, 0.917.
    let wave = symmetric(
        |e: u64| 0.85 + 0.1 * (2 * e) as f64 / CYCLE_EPOCHS as f64,
        CYCLE_EPOCHS,
    );
    from_fn(move |epoch| wave((epoch - 1) % CYCLE_EPOCHS))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let lr = learning_rate()?;
    let momentum = momentum();

    // Momentum advances only after the last batch of each epoch.
    let batch = Cell::new(0u64);
    let mut lr_cursor = Stateful::new(&lr);
    let mut momentum_cursor =
        Stateful::with_advance(&momentum, |_: u64| batch.get() % BATCHES_PER_EPOCH == 0);

    info!(
        total_epochs = TOTAL_EPOCHS,
        batches_per_epoch = BATCHES_PER_EPOCH,
        "starting toy training loop"
    );

    for epoch in 1..=TOTAL_EPOCHS {
        for _ in 0..BATCHES_PER_EPOCH {
            batch.set(batch.get() + 1);
            let lr_now = lr_cursor.next_value();
            let m_now = momentum_cursor.next_value();
            info!(epoch, batch = batch.get(), lr = lr_now, momentum = m_now, "step");
        }
    }

    // A second run starts from scratch.
    lr_cursor.reset();
    info!(lr = lr_cursor.next_value(), "first learning rate after reset");

    Ok(())
}
