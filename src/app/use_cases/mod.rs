//! Use-Cases der Application-Layer-Orchestrierung.

pub mod connector;
pub mod editing;
pub mod options;
pub mod selection;
