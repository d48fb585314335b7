/// Main `eframe::App` implementation for StartWriting.
///
/// This is the top-level UI layout that composes all widgets.
use crate::state::AppState;
use crate::theme::WritingTheme;
use crate::widgets;
use startwriting_core::library::ScanReport;
use startwriting_core::settings::Settings;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so the folder
/// scan completes before the OS window is created.
pub struct StartWritingState {
    pub(crate) inner: AppState,
    exit_code: Rc<Cell<i32>>,
}

impl StartWritingState {
    /// Wrap the result of the startup folder scan.
    pub fn build(settings: Settings, images_dir: PathBuf, report: ScanReport) -> Self {
        Self {
            inner: AppState::from_scan(settings, images_dir, report),
            exit_code: Rc::new(Cell::new(0)),
        }
    }

    /// Shared slot the running app writes its exit status into. Read it
    /// after `eframe::run_native` returns.
    pub fn exit_code(&self) -> Rc<Cell<i32>> {
        Rc::clone(&self.exit_code)
    }
}

/// The StartWriting application.
pub struct StartWritingApp {
    state: AppState,
    exit_code: Rc<Cell<i32>>,
    /// GPU copy of the shown picture, tagged with its revision.
    texture: Option<(u64, egui::TextureHandle)>,
}

impl StartWritingApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: StartWritingState) -> Self {
        let StartWritingState { inner: state, exit_code } = state;
        WritingTheme::for_settings(state.settings.dark_mode, state.settings.vowel_color)
            .apply(&cc.egui_ctx);
        Self {
            state,
            exit_code,
            texture: None,
        }
    }

    /// Upload the current picture when it changed since the last frame.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        match &self.state.picture {
            Some(shown) => {
                if self.texture.as_ref().map(|(rev, _)| *rev) != Some(shown.revision) {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        shown.picture.size(),
                        &shown.picture.rgba,
                    );
                    let handle = ctx.load_texture(
                        format!("picture-{}", shown.word),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.texture = Some((shown.revision, handle));
                }
            }
            None => self.texture = None,
        }
    }
}

impl eframe::App for StartWritingApp {
    /// Match the GPU clear colour to the panel fill so there is no flash
    /// between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        let theme =
            WritingTheme::for_settings(self.state.settings.dark_mode, self.state.settings.vowel_color);
        theme.apply(ctx);

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Word box and Check button ─────────────────────────────────────
        egui::TopBottomPanel::top("word_panel")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    let submitted = widgets::word_input::word_input(ui, &mut self.state, &theme);
                    ui.add_space(8.0);
                    let check = ui.add(
                        egui::Button::new(egui::RichText::new("Check").size(22.0))
                            .min_size(egui::vec2(160.0, 44.0)),
                    );
                    if submitted || check.clicked() {
                        self.state.check_word();
                    }
                });
                ui.add_space(16.0);
            });

        // ── Dialogs ───────────────────────────────────────────────────────
        widgets::dialogs::dialogs(ctx, &mut self.state, &theme);
        if self.state.should_close {
            tracing::info!("Closing after fatal error");
            self.exit_code.set(self.state.exit_code());
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // ── Central panel (picture) ───────────────────────────────────────
        self.sync_texture(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            let texture = self.texture.as_ref().map(|(_, t)| t);
            widgets::picture_view::picture_view(ui, &self.state, texture, &theme);
        });
    }
}
