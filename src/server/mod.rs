//! HTTP façade: routing, transport error mapping, response shaping

pub mod error;
pub mod formats;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use formats::{format_file_size, FormatDescriptor, VideoDetails};
pub use routes::router;
pub use state::AppState;
