use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::form::{FormView, apply_result, clear_validity};
use crate::model::FieldId;

use super::error::PreviewError;
use super::thumbnail::Thumbnail;

/// Identifies one file selection. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionToken(u64);

/// The result of decoding one selection.
#[derive(Debug)]
pub struct DecodeOutcome {
    /// The selection this outcome belongs to.
    pub token: SelectionToken,
    /// The decoded thumbnail, or why decoding failed.
    pub result: Result<Thumbnail, PreviewError>,
}

/// Reads and decodes the image at `path` without blocking the caller's task.
pub async fn decode(token: SelectionToken, path: PathBuf) -> DecodeOutcome {
    let result = match tokio::fs::read(&path).await {
        Ok(bytes) => tokio::task::spawn_blocking(move || Thumbnail::from_bytes(&bytes))
            .await
            .unwrap_or_else(|e| Err(PreviewError::Aborted(e))),
        Err(e) => Err(PreviewError::Read(e)),
    };
    DecodeOutcome { token, result }
}

/// Drives the profile-picture input: validates each new selection,
/// launches its decode, and applies only the outcome of the latest one.
#[derive(Debug)]
pub struct PreviewLoader {
    last_issued: u64,
    current: Option<SelectionToken>,
    pending: Option<JoinHandle<()>>,
    outcomes: UnboundedSender<DecodeOutcome>,
}

impl PreviewLoader {
    /// Creates a loader that sends decode outcomes to `outcomes`.
    pub fn new(outcomes: UnboundedSender<DecodeOutcome>) -> Self {
        Self {
            last_issued: 0,
            current: None,
            pending: None,
            outcomes,
        }
    }

    /// The selection whose decode outcome is still wanted, if any.
    pub fn current(&self) -> Option<SelectionToken> {
        self.current
    }

    /// Handles a change of the profile-picture input.
    ///
    /// Clears the previous preview, message and validity, rejects a missing or
    /// non-image selection, and otherwise spawns a decode on the current
    /// tokio runtime. Returns the token issued to the new decode.
    pub fn on_change<V: FormView + ?Sized>(&mut self, view: &mut V) -> Option<SelectionToken> {
        self.discard();
        view.set_preview(None);
        clear_validity(view, FieldId::ProfilePicture);

        let Some(file) = view.selected_file().cloned() else {
            debug!("profile picture cleared");
            apply_result(view, FieldId::ProfilePicture, Err(PreviewError::NoFile));
            return None;
        };

        if !file.is_image() {
            info!(
                path = %file.path().display(),
                media_type = file.media_type().unwrap_or("unknown"),
                "rejected non-image profile picture"
            );
            apply_result(view, FieldId::ProfilePicture, Err(PreviewError::NotAnImage));
            view.clear_file_selection();
            return None;
        }

        let token = self.issue();
        info!(path = %file.path().display(), ?token, "decoding profile picture");
        let outcomes = self.outcomes.clone();
        let path = file.path().to_path_buf();
        self.pending = Some(tokio::spawn(async move {
            // The receiver is gone only when the form has been dropped.
            let _ = outcomes.send(decode(token, path).await);
        }));
        Some(token)
    }

    /// Applies a decode outcome if it belongs to the current selection.
    ///
    /// Returns `false` when the outcome is stale and was ignored.
    pub fn complete<V: FormView + ?Sized>(&mut self, view: &mut V, outcome: DecodeOutcome) -> bool {
        if self.current != Some(outcome.token) {
            debug!(token = ?outcome.token, current = ?self.current, "discarding stale decode");
            return false;
        }
        self.current = None;
        self.pending = None;

        match outcome.result {
            Ok(thumbnail) => {
                debug!(
                    width = thumbnail.width(),
                    height = thumbnail.height(),
                    "profile picture decoded"
                );
                view.set_preview(Some(thumbnail));
                apply_result(view, FieldId::ProfilePicture, Ok::<(), PreviewError>(()));
            }
            Err(e) => {
                warn!(error = ?e, "profile picture decode failed");
                apply_result(view, FieldId::ProfilePicture, Err(e));
            }
        }
        true
    }

    /// Forgets the current selection and aborts its decode, if any.
    ///
    /// Any outcome of that decode still in flight will be ignored.
    pub fn discard(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.current = None;
    }

    fn issue(&mut self) -> SelectionToken {
        self.last_issued += 1;
        let token = SelectionToken(self.last_issued);
        self.current = Some(token);
        token
    }
}
