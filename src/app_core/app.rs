use crate::{
    get_readable_duration,
    library::scan_folder,
    metadata::{read_track_info, CoverArt, TrackInfo, ART_SIZE},
    player::Player,
    POLL_INTERVAL,
};
use eframe::egui::{
    Button, CentralPanel, Color32, ColorImage, Context, CornerRadius, RichText, Sense, Slider,
    TextureHandle, TextureOptions, Ui, Vec2,
};
use std::time::Duration;
use tracing::{info, warn};

pub struct Tonearm {
    player: Player,
    now_playing: Option<TrackInfo>,
    art_texture: Option<TextureHandle>,
    scrub_pos: f32,
}

impl Tonearm {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        cc.egui_ctx.set_visuals(eframe::egui::Visuals::dark());

        let mut player = Player::new()?;
        player.set_volume(0.5);

        Ok(Tonearm {
            player,
            now_playing: None,
            art_texture: None,
            scrub_pos: 0.0,
        })
    }

    fn load_folder(&mut self, ctx: &Context) {
        // A cancelled dialog falls through without touching the session
        let Some(folder) = rfd::FileDialog::new()
            .set_title("Select Music Folder")
            .pick_folder()
        else {
            return;
        };

        let playlist = scan_folder(&folder);
        info!(folder = %folder.display(), tracks = playlist.len(), "folder scanned");

        self.player.set_playlist(playlist);
        self.scrub_pos = 0.0;
        self.refresh_now_playing(ctx);
    }

    /// Pull title, duration and art for the track under the cursor.
    fn refresh_now_playing(&mut self, ctx: &Context) {
        self.art_texture = None;
        self.now_playing = self.player.current_track().map(read_track_info);

        if let Some(info) = &self.now_playing {
            if let CoverArt::Embedded(img) = &info.artwork {
                let size = [img.width() as usize, img.height() as usize];
                let raster = ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                self.art_texture =
                    Some(ctx.load_texture("album-art", raster, TextureOptions::LINEAR));
            }
        }
    }

    fn track_duration(&self) -> Duration {
        self.now_playing
            .as_ref()
            .map(|info| info.duration)
            .unwrap_or_default()
    }

    fn art_panel(&self, ui: &mut Ui) {
        let side = Vec2::splat(ART_SIZE as f32);
        match &self.art_texture {
            Some(tex) => {
                ui.image(tex);
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(side, Sense::hover());
                ui.painter()
                    .rect_filled(rect, CornerRadius::same(4), Color32::from_gray(38));
            }
        }
    }

    fn progress_row(&mut self, ui: &mut Ui) {
        let total = self.track_duration().as_secs_f32();

        let response = ui.add(
            Slider::new(&mut self.scrub_pos, 0.0..=total.max(1.0))
                .show_value(false)
                .trailing_fill(true),
        );

        if response.drag_started() {
            self.player.begin_seek();
        }
        if response.drag_stopped() || (response.clicked() && !response.dragged()) {
            let target = Duration::from_secs_f32(self.scrub_pos.max(0.0));
            if let Err(e) = self.player.end_seek(target) {
                warn!(error = %e, "seek failed");
            }
        }
    }

    fn time_row(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(get_readable_duration(self.player.position()));
            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| {
                    ui.label(get_readable_duration(self.track_duration()));
                },
            );
        });
    }

    fn volume_row(&mut self, ui: &mut Ui) {
        let mut volume = self.player.volume();
        let response = ui.add(Slider::new(&mut volume, 0.0..=1.0).show_value(false));
        if response.changed() {
            self.player.set_volume(volume);
        }
    }

    fn transport_row(&mut self, ui: &mut Ui, ctx: &Context) {
        ui.horizontal(|ui| {
            if transport_button(ui, "⏮").clicked() {
                match self.player.prev() {
                    Ok(true) => self.refresh_now_playing(ctx),
                    Ok(false) => {}
                    Err(e) => warn!(error = %e, "could not step back"),
                }
            }
            if transport_button(ui, "▶").clicked() {
                if let Err(e) = self.player.play() {
                    warn!(error = %e, "could not start playback");
                }
            }
            if transport_button(ui, "⏸").clicked() {
                self.player.pause();
            }
            if transport_button(ui, "⏭").clicked() {
                match self.player.next() {
                    Ok(true) => self.refresh_now_playing(ctx),
                    Ok(false) => {}
                    Err(e) => warn!(error = %e, "could not step forward"),
                }
            }
        });
    }
}

fn transport_button(ui: &mut Ui, glyph: &str) -> eframe::egui::Response {
    ui.add(Button::new(RichText::new(glyph).size(22.0)).min_size(Vec2::new(48.0, 48.0)))
}

impl eframe::App for Tonearm {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // The fixed-interval poll: repaint requests double as the tick
        ctx.request_repaint_after(POLL_INTERVAL);

        match self.player.poll() {
            Ok(true) => self.refresh_now_playing(ctx),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "could not advance after track end"),
        }

        // Mirror the engine position into the slider unless a drag is
        // fighting for it
        if !self.player.is_seeking() {
            self.scrub_pos = self.player.position().as_secs_f32();
        }

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                self.art_panel(ui);
                ui.add_space(10.0);

                let title = self
                    .now_playing
                    .as_ref()
                    .map(|info| info.title.as_str())
                    .unwrap_or("No Song Loaded");
                ui.label(RichText::new(title).size(16.0));
                ui.add_space(10.0);

                ui.spacing_mut().slider_width = 300.0;
                self.progress_row(ui);
                self.time_row(ui);
                ui.add_space(6.0);
                self.volume_row(ui);
                ui.add_space(20.0);

                self.transport_row(ui, ctx);
                ui.add_space(20.0);

                if ui.button("Load Music Folder").clicked() {
                    self.load_folder(ctx);
                }
            });
        });
    }
}
