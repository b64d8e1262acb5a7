//! vidgate library

pub mod resolver;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use resolver::{
    ResolvedVideo, StreamKind, StreamPayload, StreamResolver, StreamVariant, YtDlpResolver,
};
pub use server::{router, AppState, FormatDescriptor, VideoDetails};
pub use utils::{ServerSettings, VidgateError};
