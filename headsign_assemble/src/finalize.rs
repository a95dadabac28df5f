// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning an edited configuration into a fully rasterized record.

use std::sync::{Arc, mpsc};

use hashbrown::HashMap;
use headsign_config::{BitmapRecord, DisplayConfig, Language, ResolvedConfig, SlotAddress};
use log::{debug, warn};
use threadpool::ThreadPool;

use crate::services::{BitmapRasterizer, RasterRequest, ServiceError};

/// Glyph size requested from the rasterization service, in pixels.
pub const RASTER_GLYPH_SIZE: u32 = 16;

/// Number of rasterization workers used when none is configured.
const DEFAULT_WORKERS: usize = 4;

/// Rasterizes every translated string of a configuration.
///
/// Finalization walks all text slots of all screens, issues one
/// rasterization request per non-empty `(slot, language)` translation, and
/// merges the answers back into a deep copy of the configuration. Requests
/// run on a worker pool so one slow answer does not serialize the batch,
/// and a failed request degrades that single pair to a [fallback record]
/// instead of aborting the batch.
///
/// [fallback record]: BitmapRecord::fallback
#[derive(Debug)]
pub struct Assembler<R> {
    rasterizer: Arc<R>,
    workers: usize,
}

impl<R: BitmapRasterizer + 'static> Assembler<R> {
    /// Creates an assembler driving the given rasterizer.
    pub fn new(rasterizer: R) -> Self {
        Self {
            rasterizer: Arc::new(rasterizer),
            workers: DEFAULT_WORKERS,
        }
    }

    /// Sets the number of rasterization workers.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Produces the authoritative record for `config`.
    ///
    /// The input is not touched; the caller keeps its draft and may retry
    /// after a partial failure. Every non-empty translation ends up with a
    /// bitmap in the result: rasterized pixels where the service answered,
    /// the original text as a zero-sized [`BitmapRecord::fallback`] where
    /// it did not. Failed pairs are listed on the returned
    /// [`ResolvedConfig`] in slot order.
    pub fn finalize(&self, config: &DisplayConfig) -> ResolvedConfig {
        let mut resolved = config.clone();

        // One job per non-empty translation, in deterministic slot order.
        let jobs: Vec<(SlotAddress, Language, String)> = resolved
            .display_config
            .screens
            .slots()
            .flat_map(|(addr, slot)| {
                slot.translations
                    .iter()
                    .filter(|(_, text)| !text.is_empty())
                    .map(move |(lang, text)| (addr, *lang, text.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();

        if jobs.is_empty() {
            return ResolvedConfig::new(resolved, Vec::new());
        }

        let workers = self.workers.min(jobs.len());
        debug!(
            "rasterizing {} slot/language pairs with {workers} workers",
            jobs.len()
        );

        let pool = ThreadPool::new(workers);
        let (tx, rx) = mpsc::channel();
        for (addr, lang, text) in &jobs {
            let rasterizer = Arc::clone(&self.rasterizer);
            let tx = tx.clone();
            let (addr, lang, text) = (*addr, *lang, text.clone());
            pool.execute(move || {
                let request = RasterRequest {
                    text: &text,
                    font_file: lang.font_file(),
                    size: RASTER_GLYPH_SIZE,
                };
                let record = rasterizer.rasterize(&request).map(|raster| {
                    BitmapRecord::from_pixels(&raster.bitmap, raster.width, raster.height)
                });
                // The receiver is read to completion below, so a failed
                // send means finalize itself has gone away.
                let _ = tx.send(((addr, lang), record));
            });
        }
        drop(tx);

        let mut answers: HashMap<(SlotAddress, Language), Result<BitmapRecord, ServiceError>> =
            rx.iter().collect();
        pool.join();

        // Merge in job order so the fallback list is stable regardless of
        // which worker answered first.
        let mut fallbacks = Vec::new();
        for (addr, lang, text) in jobs {
            let record = match answers.remove(&(addr, lang)) {
                Some(Ok(record)) => record,
                Some(Err(err)) => {
                    warn!("rasterization failed for {addr} [{lang}]: {err}");
                    fallbacks.push((addr, lang));
                    BitmapRecord::fallback(&text)
                }
                // A worker that panicked never reports; degrade the same
                // way a failed request does.
                None => {
                    warn!("rasterization worker lost for {addr} [{lang}]");
                    fallbacks.push((addr, lang));
                    BitmapRecord::fallback(&text)
                }
            };
            if let Some(slot) = resolved.display_config.screens.slot_mut(addr) {
                slot.bitmaps.insert(lang, record);
            }
        }

        ResolvedConfig::new(resolved, fallbacks)
    }
}
