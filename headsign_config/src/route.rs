// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route records as entered on the route form.

use alloc::string::String;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator token rendered between the two endpoints of a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separation {
    /// A plain dash.
    #[default]
    #[serde(rename = "-")]
    Dash,
    /// The word `TO`.
    #[serde(rename = "TO")]
    To,
    /// The word `VICE-VERSA`, for routes that run both directions.
    #[serde(rename = "VICE-VERSA")]
    ViceVersa,
}

impl Separation {
    /// Returns the token as it appears on the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dash => "-",
            Self::To => "TO",
            Self::ViceVersa => "VICE-VERSA",
        }
    }
}

/// A route field the placeholder generator can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteField {
    /// The whole-board route number.
    RouteNumber,
    /// The origin stop.
    Source,
    /// The destination stop.
    Destination,
    /// The comma-separated intermediate stops.
    Via,
}

impl RouteField {
    /// Returns the field's name in pattern strings, e.g. `"routeNumber"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::RouteNumber => "routeNumber",
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Via => "via",
        }
    }
}

/// One bus route as entered on the route form.
///
/// Textual fields are stored uppercase; [`Route::normalized`] performs that
/// fold and hosts are expected to apply it at the input boundary. A route
/// is immutable once assembled into a display configuration.
///
/// A route number is either a single string of up to
/// [`Route::MAX_NUMBER_LEN`] characters, or — when `split_route` is set —
/// two stacked halves of up to [`Route::MAX_HALF_LEN`] characters each.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Route {
    /// Route number shown across the whole board.
    pub route_number: String,
    /// Origin stop name.
    pub source: String,
    /// Destination stop name.
    pub destination: String,
    /// Comma-separated intermediate stops.
    pub via: String,
    /// Separator rendered between source and destination.
    pub separation: Separation,
    /// Whether the number board is split into two stacked halves.
    pub split_route: bool,
    /// Upper half of a split route number.
    pub route_number_upper_half: String,
    /// Lower half of a split route number.
    pub route_number_lower_half: String,
}

/// Why a route failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The whole-board route number exceeds [`Route::MAX_NUMBER_LEN`].
    #[error("route number exceeds {} characters", Route::MAX_NUMBER_LEN)]
    NumberTooLong,
    /// A split-route half exceeds [`Route::MAX_HALF_LEN`].
    #[error("split route half exceeds {} characters", Route::MAX_HALF_LEN)]
    HalfTooLong,
    /// A split route left one of its halves empty.
    #[error("split route is missing one of its halves")]
    MissingHalf,
    /// Source or destination is empty.
    #[error("source and destination are required")]
    MissingEndpoint,
}

impl Route {
    /// Maximum length of a whole-board route number.
    pub const MAX_NUMBER_LEN: usize = 7;
    /// Maximum length of each half of a split route number.
    pub const MAX_HALF_LEN: usize = 4;

    /// Returns the value of `field`.
    ///
    /// The lookup is total; an unset field simply yields the empty string,
    /// which the placeholder generator drops.
    #[must_use]
    pub fn field(&self, field: RouteField) -> &str {
        match field {
            RouteField::RouteNumber => &self.route_number,
            RouteField::Source => &self.source,
            RouteField::Destination => &self.destination,
            RouteField::Via => &self.via,
        }
    }

    /// Returns a copy with every textual field folded to uppercase.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            route_number: self.route_number.to_uppercase(),
            source: self.source.to_uppercase(),
            destination: self.destination.to_uppercase(),
            via: self.via.to_uppercase(),
            separation: self.separation,
            split_route: self.split_route,
            route_number_upper_half: self.route_number_upper_half.to_uppercase(),
            route_number_lower_half: self.route_number_lower_half.to_uppercase(),
        }
    }

    /// Checks the form-boundary rules: endpoint presence, number length,
    /// and split-half lengths.
    ///
    /// Enforcement is the host's duty; the model only reports.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.source.is_empty() || self.destination.is_empty() {
            return Err(RouteError::MissingEndpoint);
        }
        if self.split_route {
            if self.route_number_upper_half.is_empty() || self.route_number_lower_half.is_empty() {
                return Err(RouteError::MissingHalf);
            }
            if self.route_number_upper_half.chars().count() > Self::MAX_HALF_LEN
                || self.route_number_lower_half.chars().count() > Self::MAX_HALF_LEN
            {
                return Err(RouteError::HalfTooLong);
            }
        } else if self.route_number.chars().count() > Self::MAX_NUMBER_LEN {
            return Err(RouteError::NumberTooLong);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn sample() -> Route {
        Route {
            route_number: "300".to_string(),
            source: "UPPAL".to_string(),
            destination: "MEHDIPATNAM".to_string(),
            via: "ARAMGHAR,LB NAGAR".to_string(),
            ..Route::default()
        }
    }

    #[test]
    fn normalized_uppercases_every_text_field() {
        let route = Route {
            route_number: "10h".to_string(),
            source: "uppal".to_string(),
            destination: "Mehdipatnam".to_string(),
            via: "lb nagar".to_string(),
            ..Route::default()
        };
        let normalized = route.normalized();
        assert_eq!(normalized.route_number, "10H");
        assert_eq!(normalized.source, "UPPAL");
        assert_eq!(normalized.destination, "MEHDIPATNAM");
        assert_eq!(normalized.via, "LB NAGAR");
    }

    #[test]
    fn field_lookup_is_total() {
        let route = sample();
        assert_eq!(route.field(RouteField::RouteNumber), "300");
        assert_eq!(route.field(RouteField::Source), "UPPAL");
        assert_eq!(route.field(RouteField::Destination), "MEHDIPATNAM");
        assert_eq!(route.field(RouteField::Via), "ARAMGHAR,LB NAGAR");
    }

    #[test]
    fn validate_enforces_number_length() {
        let mut route = sample();
        route.route_number = "12345678".to_string();
        assert_eq!(route.validate(), Err(RouteError::NumberTooLong));
        route.route_number = "1234567".to_string();
        assert_eq!(route.validate(), Ok(()));
    }

    #[test]
    fn validate_enforces_split_halves() {
        let mut route = sample();
        route.split_route = true;
        assert_eq!(route.validate(), Err(RouteError::MissingHalf));

        route.route_number_upper_half = "10".to_string();
        route.route_number_lower_half = "HYDER".to_string();
        assert_eq!(route.validate(), Err(RouteError::HalfTooLong));

        route.route_number_lower_half = "HYD".to_string();
        assert_eq!(route.validate(), Ok(()));
    }

    #[test]
    fn separation_serializes_as_its_label() {
        for sep in [Separation::Dash, Separation::To, Separation::ViceVersa] {
            let json = serde_json::to_value(sep).unwrap();
            assert_eq!(json, serde_json::Value::String(sep.label().into()));
        }
    }

    #[test]
    fn route_serializes_with_legacy_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "routeNumber",
            "source",
            "destination",
            "via",
            "separation",
            "splitRoute",
            "routeNumberUpperHalf",
            "routeNumberLowerHalf",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
