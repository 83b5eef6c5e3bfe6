//! ID.EXPLORE — single-window identity search.
//!
//! One text query per round trip: the Gemini bridge classifies the subject
//! (Person / Object / Place), summarizes it, and gathers paper, image, and
//! video references, grounded in live web search. The shell state machine
//! lives in idex-core; this binary renders it.

use chrono::Datelike;
use eframe::egui;
use idex_core::{
    BridgeSource, ExplorerShell, ExplorerState, FetchFailure, GeminiBridge, IdentityResult,
    IdentitySource,
};
use idex_explorer_ui::{results, UiConfig};
use std::sync::Arc;
use std::time::Duration;

const QUICK_SEARCHES: [&str; 3] = ["Nikola Tesla", "Voyager 1", "The Great Wall of China"];

fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = UiConfig::load();
    let source: Arc<dyn IdentitySource> = match GeminiBridge::from_env() {
        Some(bridge) => Arc::new(BridgeSource::new(bridge)),
        None => {
            tracing::warn!(
                "No Gemini API key configured; searches will fail until IDEX_API_KEY is set"
            );
            Arc::new(MissingKeySource)
        }
    };
    let shell = ExplorerShell::new(source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("ID.EXPLORE — Identity Intelligence"),
        ..Default::default()
    };

    eframe::run_native(
        "ID.EXPLORE",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(shell, config)))),
    )
}

/// Stand-in source when no credential is configured: every submit surfaces
/// an actionable failure instead of a doomed network call.
struct MissingKeySource;

impl IdentitySource for MissingKeySource {
    fn fetch(&self, _query: &str) -> Result<IdentityResult, FetchFailure> {
        Err(FetchFailure::new(
            "No API key configured. Set IDEX_API_KEY (or GEMINI_API_KEY) in the environment or .env.",
        ))
    }
}

struct ExplorerApp {
    shell: ExplorerShell,
    config: UiConfig,
    query: String,
}

impl ExplorerApp {
    fn new(shell: ExplorerShell, config: UiConfig) -> Self {
        Self {
            shell,
            config,
            query: String::new(),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shell.poll();
        if self.shell.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let loading = self.shell.is_loading();
        let mut submit: Option<String> = None;
        let mut reset = false;

        egui::TopBottomPanel::top("explorer_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("ID.EXPLORE").strong().size(18.0))
                    .clicked()
                {
                    reset = true;
                }
                ui.separator();
                let edit = egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Search for a person, object, or place...")
                    .desired_width(420.0);
                ui.add_enabled(!loading, edit);

                let can_submit = !loading && !self.query.trim().is_empty();
                let label = if loading { "AI Scanning…" } else { "Analyze" };
                if ui
                    .add_enabled(can_submit, egui::Button::new(label))
                    .clicked()
                {
                    submit = Some(self.query.trim().to_string());
                }
            });
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Suggestions:")
                        .small()
                        .color(egui::Color32::GRAY),
                );
                // Quick searches route through submit; the shell's pending
                // guard makes them a no-op while a request is outstanding.
                for preset in QUICK_SEARCHES {
                    if ui.small_button(preset).clicked() {
                        self.query = preset.to_string();
                        submit = Some(preset.to_string());
                    }
                }
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("explorer_footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "© {} ID.EXPLORE • Real-time Grounding Engine",
                        chrono::Utc::now().year()
                    ))
                    .small()
                    .color(egui::Color32::GRAY),
                );
            });
        });

        let mut dismiss = false;
        egui::CentralPanel::default().show(ctx, |ui| match self.shell.state() {
            ExplorerState::Idle => {
                ui.add_space(60.0);
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new("Identity Intelligence").size(30.0).strong());
                    ui.add_space(8.0);
                    ui.label(
                        "One name is all it takes. The model classifies the identity and \
                         gathers papers, imagery, and video records instantly.",
                    );
                });
            }
            ExplorerState::Loading => {
                ui.add_space(80.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.add_space(10.0);
                    ui.heading("Identifying & Sourcing...");
                    ui.label(
                        egui::RichText::new("CLASSIFYING DATA POINTS")
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                });
            }
            ExplorerState::Error(message) => {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.heading(
                            egui::RichText::new("Search Disrupted")
                                .color(egui::Color32::RED)
                                .strong(),
                        );
                        ui.add_space(6.0);
                        ui.label(message);
                        ui.add_space(8.0);
                        if ui.button("Reset Search").clicked() {
                            dismiss = true;
                        }
                    });
                });
            }
            ExplorerState::Result(result) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    results::show_results(ui, result, self.config.card_width);
                });
            }
        });

        if dismiss {
            self.shell.dismiss_error();
        }
        if reset {
            self.shell.reset();
        }
        if let Some(query) = submit {
            self.shell.submit(&query);
        }
    }
}
