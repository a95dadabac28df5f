// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headsign HTTP: client bindings to the rasterization, translation, and
//! route persistence services.
//!
//! [`HttpServices`] implements the three service traits from
//! [`headsign_assemble`] over a shared [`ureq::Agent`]. Every endpoint
//! answers with an `{ "data": … }` envelope; this crate unwraps it and
//! maps transport, status, and body-shape failures onto
//! [`ServiceError`], so callers never see `ureq` types.
//!
//! ## Minimal example
//!
//! ```no_run
//! use headsign_assemble::Assembler;
//! use headsign_config::{DraftConfig, Language, Route};
//! use headsign_http::HttpServices;
//!
//! let services = HttpServices::new("http://10.20.0.5:8080");
//! let draft = DraftConfig::new(Route::default(), Language::En);
//! let resolved = Assembler::new(services).finalize(&draft.to_config());
//! ```

use std::fmt;

use headsign_assemble::{
    BitmapRasterizer, RasterBitmap, RasterRequest, RouteAck, RouteStore, RouteSubmission,
    ServiceError, Translator,
};
use headsign_config::Language;
use log::debug;
use serde::{Deserialize, Serialize};
use ureq::Agent;

/// The `{ "data": … }` wrapper every service answer arrives in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateBody<'a> {
    text: &'a str,
    source_language: &'a str,
    target_language: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

/// Client for the display services.
///
/// Cheap to clone; the underlying agent pools connections, and one client
/// can serve every finalize worker at once.
#[derive(Clone)]
pub struct HttpServices {
    agent: Agent,
    base_url: String,
}

impl fmt::Debug for HttpServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpServices")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpServices {
    /// Creates a client for the service root at `base_url`.
    ///
    /// A trailing slash on `base_url` is tolerated.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_agent(base_url, Agent::new_with_defaults())
    }

    /// Creates a client over a preconfigured agent (timeouts, TLS, proxy).
    #[must_use]
    pub fn with_agent(base_url: &str, agent: Agent) -> Self {
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn service_error(err: ureq::Error) -> ServiceError {
    match err {
        ureq::Error::StatusCode(code) => ServiceError::Status(code),
        ureq::Error::Json(err) => ServiceError::Malformed(err.to_string()),
        other => ServiceError::Transport(other.to_string()),
    }
}

impl BitmapRasterizer for HttpServices {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
        debug!(
            "generateBitmap: {} chars with {}",
            request.text.chars().count(),
            request.font_file
        );
        let mut response = self
            .agent
            .get(self.endpoint("/routes/generateBitmap"))
            .query("text", request.text)
            .query("fontFile", request.font_file)
            .query("size", request.size.to_string())
            .call()
            .map_err(service_error)?;
        let envelope: Envelope<RasterBitmap> =
            response.body_mut().read_json().map_err(service_error)?;
        Ok(envelope.data)
    }
}

impl Translator for HttpServices {
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ServiceError> {
        let body = TranslateBody {
            text,
            source_language: source.code(),
            target_language: target.code(),
        };
        let mut response = self
            .agent
            .post(self.endpoint("/translate"))
            .send_json(&body)
            .map_err(service_error)?;
        let envelope: Envelope<TranslatedText> =
            response.body_mut().read_json().map_err(service_error)?;
        Ok(envelope.data.translated_text)
    }
}

impl RouteStore for HttpServices {
    fn create_route(&self, submission: &RouteSubmission<'_>) -> Result<RouteAck, ServiceError> {
        let mut response = self
            .agent
            .post(self.endpoint("/routes/create"))
            .send_json(submission)
            .map_err(service_error)?;
        let envelope: Envelope<RouteAck> =
            response.body_mut().read_json().map_err(service_error)?;
        Ok(envelope.data)
    }
}
