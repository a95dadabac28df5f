// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session scope and the persistence submission built from it.

use headsign_config::{DisplayConfig, ResolvedConfig};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::services::{RouteStore, ServiceError};

/// The organizational scope a user works in.
///
/// Established at login and passed by reference to the calls that need it;
/// nothing reads it from ambient state. Dropping it is logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    /// Operator organization the user belongs to.
    pub organization_id: String,
    /// Area the route is filed under.
    pub area_id: String,
    /// Depot the route is filed under.
    pub depot_id: String,
}

impl SessionContext {
    /// Creates a session scope from its identifiers.
    #[must_use]
    pub fn new(organization_id: &str, area_id: &str, depot_id: &str) -> Self {
        Self {
            organization_id: organization_id.to_string(),
            area_id: area_id.to_string(),
            depot_id: depot_id.to_string(),
        }
    }
}

/// The persistence payload: a resolved record flattened together with the
/// session's area and depot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSubmission<'a> {
    /// The finalized record, serialized at the top level.
    #[serde(flatten)]
    pub config: &'a DisplayConfig,
    /// Area the route is filed under.
    pub area_id: &'a str,
    /// Depot the route is filed under.
    pub depot_id: &'a str,
}

/// Acknowledgement returned by the route persistence service.
///
/// The store answers with the stored record plus bookkeeping; only the
/// identifier matters here, and even that may be absent on older
/// deployments, so every field is defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteAck {
    /// Identifier of the created route record.
    pub id: String,
}

/// Persists a finalized configuration under the session's scope.
///
/// One attempt, no retry: a failure surfaces to the caller, whose draft is
/// still intact for another try.
pub fn submit_route<S: RouteStore + ?Sized>(
    store: &S,
    resolved: &ResolvedConfig,
    session: &SessionContext,
) -> Result<RouteAck, ServiceError> {
    let submission = RouteSubmission {
        config: resolved.config(),
        area_id: &session.area_id,
        depot_id: &session.depot_id,
    };
    let ack = store
        .create_route(&submission)
        .inspect_err(|err| error!("route submission failed: {err}"))?;
    info!(
        "route {} persisted as {}",
        resolved.config().route.route_number,
        ack.id
    );
    Ok(ack)
}
