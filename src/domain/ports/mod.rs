mod ip_validator;
mod provider_gateway;
mod response_normaliser;

pub use ip_validator::IpValidator;
pub use provider_gateway::{ProviderGateway, TransportError};
pub use response_normaliser::ResponseNormaliser;
