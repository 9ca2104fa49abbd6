//! Zentrale Konfiguration für den FlowLine Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{NodeKind, RoutingBias};
use serde::{Deserialize, Serialize};

// ── Routing ─────────────────────────────────────────────────────────

/// Radius der abgerundeten Ecken; zugleich Toleranz für "gleiche Zeile/Spalte".
pub const CORNER_RADIUS: f32 = 6.0;
/// Mindestabstand zwischen zugewandten Node-Kanten für gerade Segmente.
pub const MIN_NODE_GAP: f32 = 25.0;
/// Mindestabstand zur halben Ausdehnung des Gegen-Nodes für L-Routen.
pub const MIN_SEGMENT_CLEARANCE: f32 = 20.0;
/// Pfeil-Länge.
pub const ARROW_LENGTH: f32 = 10.0;
/// Pfeil-Breite (Abstand jedes Flügels zur Linie).
pub const ARROW_WIDTH: f32 = 5.0;

// ── Nodes ───────────────────────────────────────────────────────────

/// Standard-Größe von Prozess-Nodes [Breite, Höhe].
pub const DEFAULT_NODE_SIZE: [f32; 2] = [100.0, 50.0];
/// Radius der Start-/End-Kreise.
pub const TERMINAL_RADIUS: f32 = 20.0;
/// Kantenlänge des Connector-Griffs rechts neben dem Label.
pub const CONNECTOR_HANDLE_SIZE: f32 = 12.0;
/// Geschätzte Zeichenbreite des Labels (ohne Font-Metriken).
pub const LABEL_CHAR_WIDTH: f32 = 7.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Linienfarbe für Nodes, Verbindungen und Pfeile (RGBA: Schwarz).
pub const STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Umrissfarbe des Nodes unter dem Connector-Drag (RGBA: Blau).
pub const HOVER_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Umrissfarbe selektierter Nodes (RGBA: Magenta).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Füllfarbe der Nodes (RGBA: Weiß).
pub const NODE_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Linienstärke von Verbindungen.
pub const LINE_WIDTH: f32 = 2.0;

/// Unveränderliche Routing- und Darstellungsparameter.
///
/// Wird einmal pro Diagramm gehalten und von Router, Pfad-Renderer und
/// Pfeilberechnung gemeinsam gelesen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteStyle {
    /// Eckenradius und Ausrichtungstoleranz
    pub corner_radius: f32,
    /// Mindestabstand zugewandter Kanten
    pub min_node_gap: f32,
    /// Mindestabstand für L-Routen
    pub min_segment_clearance: f32,
    /// Pfeil-Länge
    pub arrow_length: f32,
    /// Pfeil-Breite
    pub arrow_width: f32,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            corner_radius: CORNER_RADIUS,
            min_node_gap: MIN_NODE_GAP,
            min_segment_clearance: MIN_SEGMENT_CLEARANCE,
            arrow_length: ARROW_LENGTH,
            arrow_width: ARROW_WIDTH,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `flowline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Routing ─────────────────────────────────────────────────
    /// Routing-Konstanten
    #[serde(default)]
    pub route: RouteStyle,
    /// Routing-Bias für neu gezogene Verbindungen
    #[serde(default)]
    pub default_bias: RoutingBias,

    // ── Nodes ───────────────────────────────────────────────────
    /// Größe neuer Prozess-Nodes
    pub node_size: [f32; 2],
    /// Radius neuer Start-/End-Nodes
    pub terminal_radius: f32,
    /// Art neuer Nodes
    #[serde(default)]
    pub default_node_kind: NodeKind,
    /// Kantenlänge des Connector-Griffs
    #[serde(default = "default_connector_handle_size")]
    pub connector_handle_size: f32,
    /// Geschätzte Zeichenbreite für die Griff-Platzierung
    #[serde(default = "default_label_char_width")]
    pub label_char_width: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienfarbe
    pub stroke_color: [f32; 4],
    /// Hover-Farbe beim Connector-Drag
    pub hover_color: [f32; 4],
    /// Farbe selektierter Nodes
    pub selected_color: [f32; 4],
    /// Füllfarbe der Nodes
    pub node_fill_color: [f32; 4],
    /// Linienstärke
    pub line_width: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            route: RouteStyle::default(),
            default_bias: RoutingBias::Auto,

            node_size: DEFAULT_NODE_SIZE,
            terminal_radius: TERMINAL_RADIUS,
            default_node_kind: NodeKind::Process,
            connector_handle_size: CONNECTOR_HANDLE_SIZE,
            label_char_width: LABEL_CHAR_WIDTH,

            stroke_color: STROKE_COLOR,
            hover_color: HOVER_COLOR,
            selected_color: SELECTED_COLOR,
            node_fill_color: NODE_FILL_COLOR,
            line_width: LINE_WIDTH,
        }
    }
}

/// Serde-Default für `connector_handle_size` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_connector_handle_size() -> f32 {
    CONNECTOR_HANDLE_SIZE
}

/// Serde-Default für `label_char_width` (Abwärtskompatibilität).
fn default_label_char_width() -> f32 {
    LABEL_CHAR_WIDTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("flowline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("flowline_editor.toml")
    }

    /// Liefert die Standardgröße eines neuen Nodes der gegebenen Art.
    ///
    /// Start-/End-Nodes sind Kreise; ihre Geometrie ist die Bounding-Box.
    pub fn size_for(&self, kind: NodeKind) -> glam::Vec2 {
        if kind.is_terminal() {
            glam::Vec2::splat(self.terminal_radius * 2.0)
        } else {
            glam::Vec2::from(self.node_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_route_style() {
        let mut options = EditorOptions::default();
        options.route.min_node_gap = 40.0;
        options.default_bias = RoutingBias::HorizontalStart;

        let text = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&text).expect("Parsing erwartet");

        assert_eq!(parsed, options);
    }

    #[test]
    fn save_then_load_restores_options() {
        let tmp = std::env::temp_dir().join("test_flowline_options_roundtrip");
        std::fs::create_dir_all(&tmp).expect("Temp-Verzeichnis erwartet");
        let path = tmp.join("flowline_editor.toml");
        let mut options = EditorOptions::default();
        options.route.corner_radius = 12.0;
        options.default_bias = RoutingBias::VerticalStart;
        options.node_size = [140.0, 70.0];

        options.save_to_file(&path).expect("Speichern erwartet");
        let loaded = EditorOptions::load_from_file(&path);

        assert_eq!(loaded, options);
        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir()
            .join("test_flowline_options_missing")
            .join("gibt_es_nicht.toml");

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let text = r#"
            node_size = [120.0, 60.0]
            terminal_radius = 15.0
            stroke_color = [0.0, 0.0, 0.0, 1.0]
            hover_color = [0.0, 0.0, 1.0, 1.0]
            selected_color = [1.0, 0.0, 1.0, 1.0]
            node_fill_color = [1.0, 1.0, 1.0, 1.0]
            line_width = 2.0
        "#;

        let parsed: EditorOptions = toml::from_str(text).expect("Parsing erwartet");

        assert_eq!(parsed.route, RouteStyle::default());
        assert_eq!(parsed.default_bias, RoutingBias::Auto);
        assert_eq!(parsed.connector_handle_size, CONNECTOR_HANDLE_SIZE);
        assert_eq!(parsed.node_size, [120.0, 60.0]);
    }

    #[test]
    fn terminal_nodes_use_circle_bounding_box() {
        let options = EditorOptions::default();

        assert_eq!(options.size_for(NodeKind::Start), glam::Vec2::splat(40.0));
        assert_eq!(
            options.size_for(NodeKind::Process),
            glam::Vec2::new(100.0, 50.0)
        );
    }
}
