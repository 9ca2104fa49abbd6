//! Use-Case-Funktionen für Node/Connection-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_node`: Neuen Node hinzufügen
//! - `delete_nodes`: Selektierte Nodes löschen
//! - `connect`: Verbindungen erstellen
//! - `disconnect`: Verbindungen entfernen
//! - `bias`: Routing-Bias ändern

mod add_node;
mod bias;
mod connect;
mod delete_nodes;
mod disconnect;

pub use add_node::add_node;
pub use bias::{set_connection_bias, set_default_bias};
pub use connect::add_connection;
pub use delete_nodes::delete_selected_nodes;
pub use disconnect::remove_connection;
