//! Handler für Laufzeit-Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Wendet die übergebenen Optionen an.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    use_cases::options::apply_options(state, options);
}
