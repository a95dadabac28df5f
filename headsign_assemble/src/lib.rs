// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headsign Assemble: finalization and service contracts for route
//! display configurations.
//!
//! This crate owns the step between an edited draft and an authoritative
//! record: bulk translation of a draft's English text, fan-out
//! rasterization of every `(slot, language)` pair over a worker pool, and
//! the submission payload handed to the persistence service. The remote
//! services sit behind small traits ([`BitmapRasterizer`], [`Translator`],
//! [`RouteStore`]) so previews and tests can stand in for the network.
//!
//! Finalization never aborts: a failed rasterization degrades that single
//! pair to [`BitmapRecord::fallback`] and the batch carries on, with the
//! degraded pairs reported on the returned
//! [`ResolvedConfig`](headsign_config::ResolvedConfig).
//!
//! ## Minimal example
//!
//! ```
//! use headsign_assemble::{
//!     Assembler, BitmapRasterizer, RasterBitmap, RasterRequest, ServiceError,
//! };
//! use headsign_config::{DraftConfig, Language, Route, ScreenKind, SlotAddress, TextSlot};
//!
//! /// Draws every string as a single lit pixel.
//! struct Dot;
//!
//! impl BitmapRasterizer for Dot {
//!     fn rasterize(&self, _: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
//!         Ok(RasterBitmap {
//!             bitmap: vec![1],
//!             width: 1,
//!             height: 1,
//!         })
//!     }
//! }
//!
//! let route = Route {
//!     route_number: "300".to_string(),
//!     ..Route::default()
//! };
//! let mut draft = DraftConfig::new(route, Language::En);
//! let addr = SlotAddress::new(ScreenKind::Front, TextSlot::Text);
//! draft.set_translation(addr, Language::En, "UPPAL");
//!
//! let resolved = Assembler::new(Dot).finalize(&draft.to_config());
//! assert!(resolved.is_fully_rasterized());
//! let slot = resolved.config().screens().slot(addr).unwrap();
//! assert_eq!(slot.bitmaps[&Language::En].bitmap, "1");
//! ```
//!
//! [`BitmapRecord::fallback`]: headsign_config::BitmapRecord::fallback

mod finalize;
mod services;
mod session;
mod translate;

pub use finalize::{Assembler, RASTER_GLYPH_SIZE};
pub use services::{
    BitmapRasterizer, RasterBitmap, RasterRequest, RouteStore, ServiceError, Translator,
};
pub use session::{RouteAck, RouteSubmission, SessionContext, submit_route};
pub use translate::fill_translations;
