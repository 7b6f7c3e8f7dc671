pub mod error;
pub mod types;

pub use error::{HeliaError, HeliaResult};
pub use types::ServiceInfo;
