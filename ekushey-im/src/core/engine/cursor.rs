//! Backspace handling and composition invalidation.

use ekushey_engine::Splice;

use super::*;

impl KeyboardEngine {
    /// Destructive backspace.
    ///
    /// With a selection the selection goes and composition state with it;
    /// caret-only backspace deletes one character and rolls the composer
    /// back so the next keystroke never matches against an already-deleted
    /// raw sequence.
    pub(super) fn backspace(&mut self, target: &EditableText) -> EngineResult {
        if target.has_selection() {
            if let Some(composer) = &mut self.composer {
                composer.reset();
            }
            // An empty splice consumes the selection and inserts nothing.
            return EngineResult::consumed().with_splice(Splice::noop());
        }
        if target.caret() == 0 {
            return EngineResult::consumed();
        }
        if let Some(composer) = &mut self.composer {
            composer.rollback();
        }
        EngineResult::consumed().with_splice(Splice::delete(1))
    }

    /// The host moved the caret by some means the engine did not see.
    /// The match history no longer lines up with the text: drop it.
    pub fn notify_cursor_moved(&mut self) {
        if let Some(composer) = &mut self.composer {
            composer.reset();
        }
    }

    /// The host mutated the text outside `apply_splice`/`backspace`
    /// (paste, undo, programmatic replacement, assistance results).
    /// Conservative recovery: clear composition state.
    pub fn notify_external_edit(&mut self) {
        if let Some(composer) = &mut self.composer {
            composer.reset();
        }
    }
}
