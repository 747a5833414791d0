/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI and the use case, keeping the domain
/// layer free of host concerns.
mod normalize_request;
mod normalize_response;
mod template_format;

pub use normalize_request::NormalizeRequest;
pub use normalize_response::NormalizeResponse;
pub use template_format::TemplateFormat;
