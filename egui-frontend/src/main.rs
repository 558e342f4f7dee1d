use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::FabricWaterVizApp;
use ui::components::water_chart::config::{CHART_MARGIN, CHART_SIZE};

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting fabric water-use visualization");

    // Size the window around the chart card plus the heading and button row
    let width = CHART_SIZE.canvas_width(&CHART_MARGIN) + 72.0;
    let height = CHART_SIZE.canvas_height(&CHART_MARGIN) + 160.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([width, height])
            .with_title("Fabric Water Use")
            .with_resizable(false),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Fabric Water Use",
        options,
        Box::new(|cc| match FabricWaterVizApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized water-use visualization");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                // Convert anyhow::Error to eframe::Error
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
