use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::model::{FieldId, FieldKind};
use crate::preview::{DecodeOutcome, PreviewLoader, SelectionToken};

use super::gate::{SubmitOutcome, submit};
use super::live::{on_change, on_input};
use super::reset::reset;
use super::view::FormView;

/// A registration form bound to a view.
///
/// Routes every user event to the matching handler and owns the image
/// preview loader, so resets and accepted submissions also invalidate any
/// decode still in flight.
#[derive(Debug)]
pub struct RegistrationForm<V> {
    view: V,
    loader: PreviewLoader,
}

impl<V: FormView> RegistrationForm<V> {
    /// Creates a form over `view`; decode outcomes are sent to `outcomes`
    /// and must be fed back through [`finish_decode`](Self::finish_decode).
    pub fn new(view: V, outcomes: UnboundedSender<DecodeOutcome>) -> Self {
        Self {
            view,
            loader: PreviewLoader::new(outcomes),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Handles an input event on a text field.
    pub fn input(&mut self, id: FieldId) {
        on_input(&mut self.view, id);
    }

    /// Handles a change event on a checkbox or the file input.
    ///
    /// Returns the selection token when a decode was started.
    pub fn change(&mut self, id: FieldId) -> Option<SelectionToken> {
        match id.kind() {
            FieldKind::File => self.loader.on_change(&mut self.view),
            _ => {
                on_change(&mut self.view, id);
                None
            }
        }
    }

    /// Applies a decode outcome; stale outcomes are ignored.
    pub fn finish_decode(&mut self, outcome: DecodeOutcome) -> bool {
        self.loader.complete(&mut self.view, outcome)
    }

    /// Handles a submit event.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = submit(&mut self.view);
        if matches!(outcome, SubmitOutcome::Accepted { .. }) {
            self.loader.discard();
        }
        outcome
    }

    /// Handles an explicit reset.
    pub fn reset(&mut self) {
        self.loader.discard();
        reset(&mut self.view);
        debug!("reset requested");
    }
}
