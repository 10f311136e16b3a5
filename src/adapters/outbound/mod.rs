mod field_map_normaliser;
mod http_gateway;
mod syntax_validator;

pub use field_map_normaliser::FieldMapNormaliser;
pub use http_gateway::HttpProviderGateway;
pub use syntax_validator::SyntaxIpValidator;
