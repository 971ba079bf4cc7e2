pub mod filter;

pub use filter::{handle_filter, handle_preview, FilterQuery, PreviewQuery};
pub use filter::{__path_handle_filter, __path_handle_preview};
