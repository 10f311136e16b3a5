pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::GeoLocation;
pub use value_objects::{ProviderTemplate, TemplateError};
