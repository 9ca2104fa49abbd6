//! FlowLine Editor (headless).
//!
//! Baut ein Beispiel-Flussdiagramm über dieselben Intents auf, die eine
//! Zeichenfläche senden würde, und gibt die Szene als SVG (Standard) oder
//! mit `--json` als JSON auf stdout aus.

use anyhow::Context;
use flowline_editor::{
    write_svg, AppController, AppIntent, AppState, EditorOptions, NodeId, NodeKind, RoutingBias,
};
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Ausgabeformat der Szene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Json,
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "FlowLine Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let format = parse_format(std::env::args().skip(1))?;

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut app = EditorApp::new(editor_options);
        app.build_sample()?;

        let scene = app.controller.build_render_scene(&app.state);
        let output = match format {
            OutputFormat::Svg => write_svg(&scene)?,
            OutputFormat::Json => serde_json::to_string_pretty(&scene)?,
        };
        println!("{output}");

        log::info!(
            "{} Nodes, {} Verbindungen, {} Commands ausgeführt",
            app.state.node_count(),
            app.state.connection_count(),
            app.state.command_log.len()
        );
        Ok(())
    }
}

fn parse_format(args: impl Iterator<Item = String>) -> anyhow::Result<OutputFormat> {
    let mut format = OutputFormat::Svg;
    for arg in args {
        match arg.as_str() {
            "--json" => format = OutputFormat::Json,
            "--svg" => format = OutputFormat::Svg,
            other => anyhow::bail!("Unbekanntes Argument: {other} (erlaubt: --svg, --json)"),
        }
    }
    Ok(format)
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }

    fn send(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Fügt einen Node hinzu; der neue Node ist danach allein selektiert.
    fn add_node(&mut self, kind: NodeKind, center: Vec2, label: &str) -> anyhow::Result<NodeId> {
        self.send(AppIntent::AddNodeRequested {
            canvas_pos: center,
            kind: Some(kind),
            label: Some(label.to_string()),
        })?;
        self.state
            .selection
            .sorted_ids()
            .first()
            .copied()
            .with_context(|| format!("Node '{label}' wurde nicht erstellt"))
    }

    /// Zieht vom Connector-Griff von `from` bis zur Mitte von `to`.
    fn drag_connection(&mut self, from: NodeId, to: NodeId) -> anyhow::Result<()> {
        let options = &self.state.options;
        let handle = self
            .state
            .diagram
            .node(from)
            .and_then(|n| n.connector_handle(options.connector_handle_size, options.label_char_width))
            .with_context(|| format!("Node {from} hat keinen Connector-Griff"))?;
        let target = self
            .state
            .diagram
            .node(to)
            .map(|n| n.geometry.center())
            .with_context(|| format!("Node {to} existiert nicht"))?;

        self.send(AppIntent::ConnectorPointerPressed {
            canvas_pos: handle.center(),
        })?;
        self.send(AppIntent::ConnectorPointerMoved {
            canvas_pos: (handle.center() + target) * 0.5,
        })?;
        self.send(AppIntent::ConnectorPointerMoved { canvas_pos: target })?;
        self.send(AppIntent::ConnectorPointerReleased { canvas_pos: target })
    }

    fn build_sample(&mut self) -> anyhow::Result<()> {
        let start = self.add_node(NodeKind::Start, Vec2::new(200.0, 40.0), "Start")?;
        let read = self.add_node(NodeKind::Process, Vec2::new(200.0, 160.0), "Eingabe lesen")?;
        let check = self.add_node(NodeKind::Process, Vec2::new(420.0, 300.0), "Prüfen")?;
        let end = self.add_node(NodeKind::End, Vec2::new(200.0, 440.0), "Ende")?;

        self.drag_connection(start, read)?;
        self.drag_connection(read, check)?;
        self.send(AppIntent::AddConnectionRequested {
            from_id: check,
            to_id: end,
            bias: Some(RoutingBias::HorizontalStart),
        })?;
        self.send(AppIntent::AddConnectionRequested {
            from_id: check,
            to_id: read,
            bias: None,
        })?;

        // "Prüfen" etwas nach rechts ziehen; alle drei Verbindungen folgen
        self.send(AppIntent::NodePickRequested {
            canvas_pos: Vec2::new(420.0, 300.0),
            additive: false,
        })?;
        self.send(AppIntent::BeginMoveSelectedNodesRequested)?;
        for _ in 0..4 {
            self.send(AppIntent::MoveSelectedNodesRequested {
                delta: Vec2::new(10.0, 0.0),
            })?;
        }
        self.send(AppIntent::EndMoveSelectedNodesRequested)?;
        self.send(AppIntent::ClearSelectionRequested)
    }
}
