pub mod constants;
pub mod mime;
pub mod model_resolver;
