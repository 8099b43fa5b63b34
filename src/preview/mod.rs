//! Profile-picture selection and asynchronous thumbnail decoding.
//!
//! Each file selection is issued a [`SelectionToken`]. Decodes run on the
//! tokio runtime and report back over a channel; an outcome is applied only
//! if its token still matches the current selection, so a slow decode can
//! never overwrite a newer choice.

mod error;
mod file;
mod loader;
mod thumbnail;

pub use error::PreviewError;
pub use file::SelectedFile;
pub use loader::{DecodeOutcome, PreviewLoader, SelectionToken, decode};
pub use thumbnail::{MAX_PREVIEW_SIDE, Thumbnail};

#[cfg(test)]
pub(crate) use thumbnail::tests::{encoded_bytes, png_bytes};
