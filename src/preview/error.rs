/// Errors raised while selecting or decoding a profile picture.
///
/// The `Display` text is the inline message shown beneath the file input.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The file input holds no selection.
    #[error("Please select an image file")]
    NoFile,

    /// The selected file's media type is not `image/*`.
    #[error("Selected file is not an image")]
    NotAnImage,

    /// The file could not be read from disk.
    #[error("Could not read the image file")]
    Read(#[source] std::io::Error),

    /// The file was read but could not be decoded as an image.
    #[error("Could not read the image file")]
    Decode(#[source] image::ImageError),

    /// The decode task stopped before producing a result.
    #[error("Could not read the image file")]
    Aborted(#[source] tokio::task::JoinError),
}
