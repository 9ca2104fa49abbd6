//! Use-Case-Funktionen für Node-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick`: Einzelklick-Selektion (Node unter dem Zeiger)
//! - `move_nodes`: Verschieben selektierter Nodes
//! - `helpers`: Gemeinsame Hilfsfunktionen

mod helpers;
mod move_nodes;
mod pick;

pub use helpers::clear_selection;
pub use move_nodes::move_selected_nodes;
pub use pick::select_node_at;
