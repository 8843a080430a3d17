mod app;
mod charts;
mod color;
mod data;
mod report;
mod state;
mod stats;

use anyhow::Context;
use app::IrisScopeApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = data::fetch::load_remote().context("loading the iris dataset")?;
    let analysis = stats::Analysis::compute(&table);
    report::print_report(&table, &analysis);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let app = IrisScopeApp::new(AppState::new(table, analysis));
    eframe::run_native(
        "Iris Scope – Dataset Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("chart renderer failed: {e}"))?;

    Ok(())
}
