pub mod api_key;
pub mod extractors;

pub use api_key::{get_api_key, ApiKey};
pub use extractors::MaybeApiKey;
