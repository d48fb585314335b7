//! StartWriting — a spelling game for children.
//!
//! Thin binary entry point. All logic lives in the `startwriting-core`
//! and `startwriting-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use startwriting_core::library::scan_folder;
use startwriting_core::settings::Settings;
use startwriting_gui::state::FOLDER_ERROR_MESSAGE;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("StartWriting starting");

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd);
    let images_dir = settings.images_dir(&cwd);

    // Scan before the window exists; an unreadable folder ends the program.
    let report = match scan_folder(&images_dir) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{}", e);
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("StartWriting")
                .set_description(FOLDER_ERROR_MESSAGE)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            std::process::exit(1);
        }
    };

    let icon = startwriting_gui::icon::generate_icon(64);
    let state = startwriting_gui::StartWritingState::build(settings, images_dir, report);
    let exit_code = state.exit_code();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("StartWriting")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 400.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "StartWriting",
        options,
        Box::new(|cc| {
            Ok(Box::new(startwriting_gui::StartWritingApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    // A folder failure inside the window closes it the normal way; the
    // status still has to say it failed.
    let code = exit_code.get();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
