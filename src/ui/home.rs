use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui, Vec2};

const GALLERY_HEIGHT: f32 = 220.0;

/// A gallery slot; `uri` is `None` when the file is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub path: PathBuf,
    pub uri: Option<String>,
}

/// Check the gallery files once, so missing ones are reported a single time.
pub fn resolve_gallery(paths: Vec<PathBuf>) -> Vec<GalleryImage> {
    paths
        .into_iter()
        .map(|path| {
            let uri = if path.is_file() {
                Some(format!("file://{}", path.display()))
            } else {
                log::warn!("Gallery image not found: {}", path.display());
                None
            };
            GalleryImage { path, uri }
        })
        .collect()
}

/// Render the landing page with the sample-image gallery.
pub fn home_page(ui: &mut Ui, gallery: &[GalleryImage]) {
    ui.heading("🌱 Plant Disease Detection Dashboard");
    ui.label("Welcome to your intelligent assistant for plant health monitoring.");
    ui.add_space(10.0);

    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(0xec, 0xff, 0xdc))
        .stroke(egui::Stroke::new(2.0, Color32::from_rgb(0x4c, 0xaf, 0x50)))
        .show(ui, |ui: &mut Ui| {
            ui.label(
                RichText::new("🌿 Why Plant Disease Detection?")
                    .strong()
                    .color(Color32::DARK_GREEN),
            );
            ui.add_space(4.0);
            for (topic, detail) in [
                (
                    "Agricultural Productivity:",
                    "Early identification of diseases can prevent widespread outbreaks.",
                ),
                (
                    "Economic Impact:",
                    "Minimizing crop losses helps farmers' economic stability.",
                ),
                (
                    "Food Security:",
                    "Protecting crops maintains stable food supply.",
                ),
                (
                    "Environmental Protection:",
                    "Reduces need for chemical treatments.",
                ),
            ] {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.label(RichText::new(format!("• {topic}")).strong().color(Color32::BLACK));
                    ui.label(RichText::new(detail).color(Color32::BLACK));
                });
            }
        });

    ui.add_space(12.0);
    gallery_strip(ui, gallery);
}

/// Horizontally scrolling row of sample images.
fn gallery_strip(ui: &mut Ui, gallery: &[GalleryImage]) {
    ScrollArea::horizontal()
        .id_salt("gallery")
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for image in gallery {
                    match &image.uri {
                        Some(uri) => {
                            ui.add(egui::Image::new(uri.as_str()).max_height(GALLERY_HEIGHT))
                                .on_hover_text(image.path.display().to_string());
                        }
                        None => placeholder(ui),
                    }
                }
            });
        });
}

fn placeholder(ui: &mut Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_size(Vec2::new(300.0, GALLERY_HEIGHT));
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("Image Not Found").weak());
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn missing_images_have_no_uri() {
        let dir = tempfile::TempDir::new().unwrap();
        let present = dir.path().join("healthy.jpg");
        File::create(&present).unwrap();
        let missing = dir.path().join("Late_blight.jpg");

        let gallery = resolve_gallery(vec![present.clone(), missing.clone()]);
        assert_eq!(gallery.len(), 2);
        assert_eq!(
            gallery[0].uri,
            Some(format!("file://{}", present.display()))
        );
        assert_eq!(gallery[1], GalleryImage { path: missing, uri: None });
    }
}
