use checkpoint_timer::{config::Config, gui::Gui};

use anyhow::{Error, Result};
use eframe::egui;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    info!("Refreshing every {:?}", config.refresh_interval);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Box::new(Gui::new(&config, cc))),
    )
    .map_err(|e| Error::msg(e.to_string()))
}
