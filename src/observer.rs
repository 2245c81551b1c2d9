/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Injectable phase observers.
//!
//! The core algorithm never logs directly (spec: "the core does not log").
//! Instead it reports structured `phase_started`/`phase_ended` events to a
//! trait object, so that timing/logging stay entirely optional and the
//! algorithm is callable with a no-op observer and produce identical results.

use std::time::Instant;

/// Receives structured phase events from the assembler.
pub trait StripObserver {
    /// A phase of the pipeline (`"edge_generation"`, `"sort"`, `"run_scan"`,
    /// `"strip_walk"`, ...) has started.
    fn phase_started(&self, _name: &str) {}

    /// The named phase has ended, `duration_ns` after it started.
    fn phase_ended(&self, _name: &str, _duration_ns: u64) {}
}

/// The default observer: does nothing, costs nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StripObserver for NoopObserver {}

/// An observer that times each phase and reports it through the `log` crate
/// at `debug` level, in the spirit of the progress-logger instrumentation
/// wrapped around batch phases elsewhere in this ecosystem.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl StripObserver for LoggingObserver {
    fn phase_started(&self, name: &str) {
        log::debug!("phase `{name}` started");
    }

    fn phase_ended(&self, name: &str, duration_ns: u64) {
        log::debug!("phase `{name}` finished in {:.3} ms", duration_ns as f64 / 1e6);
    }
}

/// Times a closure and reports it as one phase to `observer`.
pub(crate) fn timed_phase<T>(observer: &dyn StripObserver, name: &str, f: impl FnOnce() -> T) -> T {
    observer.phase_started(name);
    let start = Instant::now();
    let result = f();
    observer.phase_ended(name, start.elapsed().as_nanos() as u64);
    result
}
