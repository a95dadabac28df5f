// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts for the remote services finalization talks to.

use headsign_config::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::{RouteAck, RouteSubmission};

/// A request to rasterize one translated string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterRequest<'a> {
    /// The text to draw, in the target language's script.
    pub text: &'a str,
    /// The font file the service should draw with.
    pub font_file: &'a str,
    /// Glyph size in pixels.
    pub size: u32,
}

/// A rasterized string as the bitmap service reports it.
///
/// `bitmap` is a flat row-major pixel buffer of `width * height` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterBitmap {
    /// Row-major pixel values.
    pub bitmap: Vec<u32>,
    /// Width of the rendered strip in pixels.
    pub width: u32,
    /// Height of the rendered strip in pixels.
    pub height: u32,
}

/// Why a service call produced no usable answer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The service answered with a non-success status.
    #[error("service answered with status {0}")]
    Status(u16),
    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response arrived but its body was not the promised shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Renders text into pixel data.
///
/// Implementations are shared across the finalize worker pool, so they
/// must be callable from several threads at once.
pub trait BitmapRasterizer: Send + Sync {
    /// Rasterizes one string.
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError>;
}

/// Translates display text between languages.
pub trait Translator {
    /// Translates `text` from `source` into `target`.
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ServiceError>;
}

/// Persists finalized route configurations.
pub trait RouteStore {
    /// Creates a route record and returns the store's acknowledgement.
    fn create_route(&self, submission: &RouteSubmission<'_>) -> Result<RouteAck, ServiceError>;
}
