//! Rendering der Szene als SVG-Dokument.
//!
//! Der Writer konsumiert ausschließlich die `RenderScene` und kennt weder
//! Diagramm noch Router.

mod svg;

pub use crate::shared::RenderScene;
pub use svg::write_svg;
