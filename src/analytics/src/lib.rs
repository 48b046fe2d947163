pub mod error;
pub mod location;

pub use location::AnalyticsKey;
pub use location::ANALYTICS_TYPE;
pub use location::DISTANCE_FILTER_NONE;
pub use location::DISTANCE_FILTER_NONE_VALUE;
pub use location::LocationEvent;
pub use location::LocationFix;
pub use location::Provider;
pub use location::ServiceConfig;
pub use location::UpdateKind;
pub use location::UpdateType;
