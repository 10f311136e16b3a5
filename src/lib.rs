//! iplocation Library
//!
//! Resolves a textual IP address to geolocation data by querying
//! interchangeable HTTP lookup providers in a fixed fallback order.
//! Caller-supplied provider templates are tried before the built-in
//! default; malformed or error-flagged responses fall through to the
//! next provider, while a transport failure aborts the whole call.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{FieldMapNormaliser, HttpProviderGateway, SyntaxIpValidator};
pub use application::{ResolveError, ResolverService};
pub use config::load_config;
pub use domain::entities::GeoLocation;
pub use domain::ports::{IpValidator, ProviderGateway, ResponseNormaliser, TransportError};
pub use domain::value_objects::{ProviderTemplate, TemplateError};
