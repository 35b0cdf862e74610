// SPDX-License-Identifier: PMPL-1.0-or-later

//! Frame loop for the wave field

use super::{Point, Surface, WaveField};
use anyhow::{anyhow, Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// What a finished loop hands back
#[derive(Debug)]
pub struct LoopReport<S> {
    pub frames: u64,
    pub surface: S,
}

/// Shared access to a running field for pointer and resize events
#[derive(Debug, Clone)]
pub struct LoopHandle {
    field: Arc<Mutex<WaveField>>,
}

impl LoopHandle {
    pub fn set_pointer(&self, pointer: Option<Point>) {
        lock(&self.field).set_pointer(pointer);
    }

    pub fn resize(&self, width: f64, height: f64) {
        lock(&self.field).resize(width, height);
    }

    pub fn time(&self) -> f64 {
        lock(&self.field).time()
    }
}

/// A running animation. Stops (and joins) when dropped.
pub struct RenderLoop<S: Surface + 'static> {
    field: Arc<Mutex<WaveField>>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<Result<LoopReport<S>>>>,
}

impl<S: Surface + 'static> RenderLoop<S> {
    /// Draw one frame every `interval` until stopped, or until `frame_limit`
    /// frames have been drawn.
    pub fn start(
        field: WaveField,
        mut surface: S,
        interval: Duration,
        frame_limit: Option<u64>,
    ) -> Result<Self> {
        let field = Arc::new(Mutex::new(field));
        let stop = Arc::new(AtomicBool::new(false));

        let worker = {
            let field = Arc::clone(&field);
            let stop = Arc::clone(&stop);
            thread::Builder::new()
                .name("wave-render".to_string())
                .spawn(move || -> Result<LoopReport<S>> {
                    let mut frames = 0u64;
                    while !stop.load(Ordering::Relaxed) {
                        if frame_limit.is_some_and(|limit| frames >= limit) {
                            break;
                        }
                        let started = Instant::now();
                        {
                            let mut field = lock(&field);
                            field.advance();
                            field
                                .draw(&mut surface)
                                .with_context(|| format!("drawing frame {}", frames + 1))?;
                        }
                        frames += 1;
                        if let Some(rest) = interval.checked_sub(started.elapsed()) {
                            thread::sleep(rest);
                        }
                    }
                    debug!(frames, "render loop finished");
                    Ok(LoopReport { frames, surface })
                })
                .context("spawning render loop")?
        };

        Ok(Self {
            field,
            stop,
            worker: Some(worker),
        })
    }

    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            field: Arc::clone(&self.field),
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Signal the loop to stop and wait for it. Surface errors that ended
    /// the loop early are returned here.
    pub fn stop(mut self) -> Result<LoopReport<S>> {
        self.stop.store(true, Ordering::Relaxed);
        self.join_worker()
    }

    /// Wait for a frame-limited loop to finish on its own.
    pub fn wait(mut self) -> Result<LoopReport<S>> {
        self.join_worker()
    }

    fn join_worker(&mut self) -> Result<LoopReport<S>> {
        let worker = self
            .worker
            .take()
            .ok_or_else(|| anyhow!("render loop already joined"))?;
        worker
            .join()
            .map_err(|_| anyhow!("render loop panicked"))?
    }
}

impl<S: Surface + 'static> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        if self.worker.is_none() {
            return;
        }
        self.stop.store(true, Ordering::Relaxed);
        if let Err(e) = self.join_worker() {
            warn!("render loop ended with error: {:#}", e);
        }
    }
}

fn lock(field: &Mutex<WaveField>) -> MutexGuard<'_, WaveField> {
    field.lock().unwrap_or_else(PoisonError::into_inner)
}
