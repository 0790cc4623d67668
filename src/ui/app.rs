use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, Color32, RichText, TextEdit, Ui, ViewportCommand};
use tracing::debug;

use crate::manager::{ClockManager, NoticeKind};
use crate::ui::render::{self, DisplayEvent};

pub fn run_gui(manager: ClockManager) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fullclock")
            .with_inner_size([600.0, 240.0])
            .with_resizable(false),
        ..Default::default()
    };

    let app = ManagerApp { manager };

    eframe::run_native(
        "Fullclock",
        native_options,
        Box::new(move |cc| {
            configure_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch Fullclock GUI: {err}"))?;

    Ok(())
}

fn configure_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(Color32::from_rgb(226, 234, 246));
    visuals.panel_fill = Color32::from_rgb(8, 16, 26);
    visuals.window_fill = Color32::from_rgb(12, 20, 32);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(16, 24, 38);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(26, 42, 62);
    visuals.widgets.active.bg_fill = Color32::from_rgb(34, 60, 88);
    visuals.selection.bg_fill = Color32::from_rgb(43, 148, 178);
    ctx.set_visuals(visuals);
}

struct ManagerApp {
    manager: ClockManager,
}

impl ManagerApp {
    fn show_form(&mut self, ui: &mut Ui, at: Instant) {
        ui.horizontal(|ui| {
            if ui.button("Create Clock").clicked() {
                self.manager.create_clock(at);
            }
            if ui.button("Create Countdown").clicked() {
                self.manager.create_countdown(at);
            }
            if ui.button("Create Timer").clicked() {
                self.manager.create_count_up(at);
            }
            if ui.button("About").clicked() {
                self.manager.show_about();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Timer Time (seconds):");
            ui.add(
                TextEdit::singleline(&mut self.manager.timer_seconds_input).desired_width(70.0),
            );
            let mut enabled = self.manager.timer_enabled;
            if ui.checkbox(&mut enabled, "Enable Timer").changed() {
                self.manager.set_timer_enabled(enabled, at);
            }
            if ui.button("Show Timer").clicked() {
                self.manager.show_timer();
            }
        });

        ui.add_space(4.0);
        ui.group(|ui| {
            ui.label(RichText::new("Count Down").strong());
            ui.horizontal(|ui| {
                ui.label("Count down ends at:");
                ui.add(
                    TextEdit::singleline(&mut self.manager.end_time_input).desired_width(220.0),
                );
            });
        });

        ui.group(|ui| {
            ui.label(RichText::new("Options").strong());
            ui.horizontal(|ui| {
                ui.label("Font size:");
                ui.add(
                    TextEdit::singleline(&mut self.manager.font_size_input).desired_width(70.0),
                );
                ui.label("pt");
            });
        });
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.manager.notice() else {
            return;
        };
        let title = match notice.kind {
            NoticeKind::Validation => "Message",
            NoticeKind::About => "About",
        };
        let message = notice.message.clone();

        let modal = egui::Modal::new(egui::Id::new("manager_notice")).show(ctx, |ui| {
            ui.set_width(300.0);
            ui.heading(title);
            ui.label(message);
            ui.add_space(8.0);
            ui.button("OK").clicked()
        });
        if modal.inner || modal.should_close() {
            self.manager.dismiss_notice();
        }
    }

    fn show_displays(&mut self, ctx: &egui::Context) {
        let mut closed = Vec::new();
        for display in self.manager.displays_mut() {
            if render::show_display(ctx, display) == DisplayEvent::CloseRequested {
                closed.push(display.serial());
            }
        }
        for serial in closed {
            self.manager.close_display(serial);
        }
    }
}

impl eframe::App for ManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            debug!(spawned = self.manager.displays().len(), "manager closing");
            for serial in self.manager.close_all() {
                ctx.send_viewport_cmd_to(render::viewport_id(serial), ViewportCommand::Close);
            }
            return;
        }

        let at = Instant::now();
        self.manager.tick_all(at);

        egui::CentralPanel::default().show(ctx, |ui| self.show_form(ui, at));
        self.show_notice(ctx);
        self.show_displays(ctx);

        // Windows spawned this frame only get a deadline now.
        if let Some(wait) = self.manager.tick_all(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
