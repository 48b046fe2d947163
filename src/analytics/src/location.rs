use common::event::Event;
use common::event::EventData;
use serde::Deserialize;
use tracing::debug;

use crate::error::AnalyticsError;
use crate::error::Result;

/// Event category tag reported to the backend for location events.
pub const ANALYTICS_TYPE: &str = "location";

/// Conventional platform sentinel for "no distance filter". Any negative
/// filter value is treated the same way.
pub const DISTANCE_FILTER_NONE: f64 = -1.0;

/// Fixed wire rendering of the sentinel. Never a number, so a consumer
/// cannot misread it as a real filter distance.
pub const DISTANCE_FILTER_NONE_VALUE: &str = "NONE";

pub const FOREGROUND_YES: &str = "YES";
pub const FOREGROUND_NO: &str = "NO";

/// Recognized payload field names. The fix-based construction path writes
/// only these keys; session id and foreground are filled in by the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnalyticsKey {
    SessionId,
    Foreground,
    Latitude,
    Longitude,
    DesiredAccuracy,
    UpdateType,
    Provider,
    DistanceFilter,
    HorizontalAccuracy,
    VerticalAccuracy,
}

impl AnalyticsKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsKey::SessionId => "session_id",
            AnalyticsKey::Foreground => "foreground",
            AnalyticsKey::Latitude => "lat",
            AnalyticsKey::Longitude => "long",
            AnalyticsKey::DesiredAccuracy => "requested_accuracy",
            AnalyticsKey::UpdateType => "update_type",
            AnalyticsKey::Provider => "provider",
            AnalyticsKey::DistanceFilter => "update_dist",
            AnalyticsKey::HorizontalAccuracy => "h_accuracy",
            AnalyticsKey::VerticalAccuracy => "v_accuracy",
        }
    }
}

/// What triggered the event. `None` is reserved for service-state events
/// built from a raw context, e.g. "location services disabled".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
    Change,
    Continuous,
    Single,
    None,
}

impl UpdateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateType::Change => "CHANGE",
            UpdateType::Continuous => "CONTINUOUS",
            UpdateType::Single => "SINGLE",
            UpdateType::None => "NONE",
        }
    }

    fn from_wire(value: &str) -> Option<UpdateType> {
        match value {
            "CHANGE" => Some(UpdateType::Change),
            "CONTINUOUS" => Some(UpdateType::Continuous),
            "SINGLE" => Some(UpdateType::Single),
            "NONE" => Some(UpdateType::None),
            _ => None,
        }
    }
}

/// Classification supplied with a location fix. Deliberately has no `None`
/// variant: a fix-based event always carries a concrete trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Change,
    Continuous,
    Single,
}

impl From<UpdateKind> for UpdateType {
    fn from(kind: UpdateKind) -> Self {
        match kind {
            UpdateKind::Change => UpdateType::Change,
            UpdateKind::Continuous => UpdateType::Continuous,
            UpdateKind::Single => UpdateType::Single,
        }
    }
}

/// Positioning source that produced a fix. Platform strings outside the
/// known set are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Provider {
    Gps,
    Network,
    Passive,
    Unknown,
    Other(String),
}

impl Provider {
    pub fn name(&self) -> &str {
        match self {
            Provider::Gps => "gps",
            Provider::Network => "network",
            Provider::Passive => "passive",
            Provider::Unknown => "unknown",
            Provider::Other(name) => name,
        }
    }
}

impl From<String> for Provider {
    fn from(name: String) -> Self {
        match name.as_str() {
            "gps" => Provider::Gps,
            "network" => Provider::Network,
            "passive" => Provider::Passive,
            "unknown" => Provider::Unknown,
            _ => Provider::Other(name),
        }
    }
}

impl From<&str> for Provider {
    fn from(name: &str) -> Self {
        Provider::from(name.to_string())
    }
}

/// Fix as reported by the positioning subsystem. Accuracies are in meters;
/// a negative accuracy means the platform could not estimate one.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: f64,
    pub vertical_accuracy: f64,
}

/// Location-service configuration active when the fix was obtained.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub provider: Provider,
    /// Requested accuracy in meters; negative means "best available".
    pub desired_accuracy: f64,
    /// Minimum movement in meters before a new fix is emitted.
    pub distance_filter: f64,
}

// Locale-independent and round-trippable. Integral values keep one
// fractional digit so "unavailable" markers like -1.0 stay visibly decimal.
fn decimal_string(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Finalized location analytics payload. Built once and never mutated; the
/// envelope framework takes it over for queueing and transmission.
#[derive(Debug, Clone)]
pub struct LocationEvent {
    update_type: UpdateType,
    data: EventData,
}

impl LocationEvent {
    /// Builds a coordinate-carrying event from a platform fix and the
    /// service configuration that produced it.
    ///
    /// Non-finite coordinates are rejected before serialization. Accuracy
    /// values are recorded verbatim, negative or not: the backend tells
    /// "unavailable" from "zero accuracy" by sign.
    pub fn from_fix(
        fix: &LocationFix,
        config: &ServiceConfig,
        kind: UpdateKind,
    ) -> Result<LocationEvent> {
        for (field, value) in [("lat", fix.latitude), ("long", fix.longitude)] {
            if !value.is_finite() {
                debug!("rejecting location fix: {field} = {value}");
                return Err(AnalyticsError::InvalidNumeric { field, value });
            }
        }

        let update_type = UpdateType::from(kind);
        let mut data = EventData::new();
        data.insert(
            AnalyticsKey::Latitude.as_str().to_string(),
            decimal_string(fix.latitude),
        );
        data.insert(
            AnalyticsKey::Longitude.as_str().to_string(),
            decimal_string(fix.longitude),
        );
        data.insert(
            AnalyticsKey::HorizontalAccuracy.as_str().to_string(),
            decimal_string(fix.horizontal_accuracy),
        );
        data.insert(
            AnalyticsKey::VerticalAccuracy.as_str().to_string(),
            decimal_string(fix.vertical_accuracy),
        );
        data.insert(
            AnalyticsKey::Provider.as_str().to_string(),
            config.provider.name().to_string(),
        );
        data.insert(
            AnalyticsKey::DesiredAccuracy.as_str().to_string(),
            decimal_string(config.desired_accuracy),
        );
        let distance_filter = if config.distance_filter < 0.0 {
            DISTANCE_FILTER_NONE_VALUE.to_string()
        } else {
            decimal_string(config.distance_filter)
        };
        data.insert(
            AnalyticsKey::DistanceFilter.as_str().to_string(),
            distance_filter,
        );
        data.insert(
            AnalyticsKey::UpdateType.as_str().to_string(),
            update_type.as_str().to_string(),
        );

        Ok(LocationEvent { update_type, data })
    }

    /// Builds an event from a pre-formed context, for service-state events
    /// that carry no coordinate.
    ///
    /// Entries are copied verbatim with no key allow-listing; the caller's
    /// mapping stays untouched and later mutation of it does not reach the
    /// event. Classification defaults to [`UpdateType::None`] unless the
    /// context carries a recognized `update_type` entry.
    pub fn from_context(context: &EventData) -> Result<LocationEvent> {
        if context.is_empty() {
            debug!("rejecting location event: empty context");
            return Err(AnalyticsError::MissingInput("context".to_string()));
        }

        let update_type = context
            .get(AnalyticsKey::UpdateType.as_str())
            .and_then(|value| UpdateType::from_wire(value))
            .unwrap_or(UpdateType::None);

        Ok(LocationEvent {
            update_type,
            data: context.clone(),
        })
    }

    pub fn update_type(&self) -> UpdateType {
        self.update_type
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }
}

impl Event for LocationEvent {
    fn event_type(&self) -> &str {
        ANALYTICS_TYPE
    }

    fn data(&self) -> &EventData {
        &self.data
    }
}

impl TryFrom<&EventData> for LocationEvent {
    type Error = AnalyticsError;

    fn try_from(context: &EventData) -> Result<LocationEvent> {
        LocationEvent::from_context(context)
    }
}
