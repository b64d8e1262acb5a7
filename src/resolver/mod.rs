pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{ByteStream, ResolvedVideo, StreamKind, StreamPayload, StreamVariant};
pub use traits::StreamResolver;
pub use ytdlp::YtDlpResolver;
