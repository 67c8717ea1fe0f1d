use crate::{
    app::{App, AppEvent, AppRequest},
    checkpoint_log::CheckpointLog,
    config::Config,
    refresh::RefreshTicker,
};

use anyhow::{Context, Error, Result};
use clipboard::{ClipboardContext, ClipboardProvider};
use eframe::{
    egui::{self, Button, Key, Modifiers, RichText},
    CreationContext,
};
use log::{error, warn};

use std::time::Instant;

pub struct Gui {
    app: App,
    ticker: RefreshTicker,
    clipboard: Option<ClipboardContext>,
}

impl Gui {
    const TIMER_FONT_SIZE: f32 = 40.0;

    pub fn new(config: &Config, cc: &CreationContext<'_>) -> Gui {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let clipboard = match ClipboardContext::new() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Clipboard unavailable, copying the log is disabled: {}", e);
                None
            }
        };

        Gui {
            app: App::default(),
            ticker: RefreshTicker::new(config.refresh_interval),
            clipboard,
        }
    }

    fn send(&mut self, req: AppRequest) {
        // Rejected requests are no-ops, App already logs them
        let event = match self.app.handle_request(req) {
            Ok(v) => v,
            Err(_) => return,
        };

        match event {
            AppEvent::Started | AppEvent::Resumed => self.ticker.arm(Instant::now()),
            AppEvent::Paused | AppEvent::Reset => self.ticker.cancel(),
            AppEvent::CheckpointRecorded(_) => (),
        }
    }

    fn copy_log(&mut self) -> Result<()> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| Error::msg("No clipboard available"))?;
        clipboard
            .set_contents(self.app.log().to_text())
            .map_err(|e| Error::msg(e.to_string()))
            .context("Failed to copy checkpoint log")
    }

    fn render(&mut self, ctx: &egui::Context) -> Result<()> {
        let mut requests = collect_shortcuts(ctx, &self.app);

        egui::TopBottomPanel::top("timer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(self.app.display())
                        .monospace()
                        .size(Self::TIMER_FONT_SIZE),
                );
            });
            render_controls(ui, &self.app, &mut requests);
        });

        let copy_log = egui::CentralPanel::default()
            .show(ctx, |ui| render_log(ui, self.app.log(), self.clipboard.is_some()))
            .inner;

        for req in requests {
            self.send(req);
        }

        let now = Instant::now();
        if self.ticker.poll(now, self.app.is_running()) {
            self.app.refresh_display();
        }

        if let Some(wait) = self.ticker.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }

        if copy_log {
            self.copy_log()?;
        }

        Ok(())
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(e) = self.render(ctx) {
            error!("{:?}", e);
        }
    }
}

/// Keys are consumed up front so a focused button doesn't also see them
fn collect_shortcuts(ctx: &egui::Context, app: &App) -> Vec<AppRequest> {
    ctx.input_mut(|input| {
        let mut ret = Vec::new();
        if input.consume_key(Modifiers::NONE, Key::Space) {
            if app.is_running() {
                ret.push(AppRequest::Pause);
            } else {
                ret.push(AppRequest::Start);
            }
        }

        if input.consume_key(Modifiers::NONE, Key::Enter) {
            ret.push(AppRequest::Checkpoint);
        }

        if input.consume_key(Modifiers::NONE, Key::Escape) {
            ret.push(AppRequest::Reset);
        }
        ret
    })
}

fn render_controls(ui: &mut egui::Ui, app: &App, requests: &mut Vec<AppRequest>) {
    let running = app.is_running();
    let start_text = if app.is_paused() { "Resume" } else { "Start" };

    ui.horizontal(|ui| {
        if ui.add_enabled(!running, Button::new(start_text)).clicked() {
            requests.push(AppRequest::Start);
        }

        if ui.add_enabled(running, Button::new("Pause")).clicked() {
            requests.push(AppRequest::Pause);
        }

        if ui.add_enabled(running, Button::new("Checkpoint")).clicked() {
            requests.push(AppRequest::Checkpoint);
        }

        if ui.button("Reset").clicked() {
            requests.push(AppRequest::Reset);
        }
    });
}

fn render_log(ui: &mut egui::Ui, log: &CheckpointLog, can_copy: bool) -> bool {
    let copy_clicked = ui
        .add_enabled(can_copy && !log.is_empty(), Button::new("Copy log"))
        .clicked();
    ui.separator();

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in log.entries() {
                ui.monospace(entry.to_string())
                    .on_hover_text(entry.recorded_at.format("%H:%M:%S").to_string());
            }
        });

    copy_clicked
}
