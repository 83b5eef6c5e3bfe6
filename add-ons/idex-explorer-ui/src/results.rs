//! Results View: renders one `IdentityResult` into three horizontally
//! scrollable card strips. Pure presentation — items appear in array order,
//! no sorting, no dedup, no pagination.

use eframe::egui;
use idex_core::{IdentityResult, MediaAsset, PaperAsset};

pub const NO_PAPERS: &str = "No matching scholarly records";
pub const NO_IMAGES: &str = "No visual forensic data";
pub const NO_VIDEOS: &str = "No available motion records";

/// Snippet body with fallback when the model returned an empty string.
pub fn snippet_text(paper: &PaperAsset) -> &str {
    if paper.snippet.trim().is_empty() {
        "No summary available"
    } else {
        &paper.snippet
    }
}

pub fn source_text(paper: &PaperAsset) -> &str {
    if paper.source.trim().is_empty() {
        "Verified Source"
    } else {
        &paper.source
    }
}

pub fn platform_text(asset: &MediaAsset) -> &str {
    if asset.platform.trim().is_empty() {
        "Public Asset"
    } else {
        &asset.platform
    }
}

/// Full result layout: identity banner plus the three collection strips.
pub fn show_results(ui: &mut egui::Ui, result: &IdentityResult, card_width: f32) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.heading(egui::RichText::new(&result.name).size(28.0).strong());
        ui.label(
            egui::RichText::new(format!(
                "Automatically Identified: {}",
                result.category.as_str()
            ))
            .small()
            .color(egui::Color32::GRAY),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(&result.summary).size(16.0));
        ui.add_space(12.0);
    });

    section(ui, "Scholarly Records", NO_PAPERS, result.papers.is_empty(), |ui| {
        for paper in &result.papers {
            paper_card(ui, paper, card_width);
        }
    });

    section(ui, "Visual Forensics", NO_IMAGES, result.images.is_empty(), |ui| {
        for image in &result.images {
            media_card(ui, image, card_width);
        }
    });

    section(ui, "Motion Records", NO_VIDEOS, result.videos.is_empty(), |ui| {
        for video in &result.videos {
            media_card(ui, video, card_width);
        }
    });
}

fn section(
    ui: &mut egui::Ui,
    title: &str,
    empty_label: &str,
    is_empty: bool,
    add_cards: impl FnOnce(&mut egui::Ui),
) {
    ui.add_space(10.0);
    ui.heading(title);
    ui.add_space(4.0);
    if is_empty {
        ui.label(
            egui::RichText::new(empty_label)
                .small()
                .color(egui::Color32::GRAY),
        );
    } else {
        egui::ScrollArea::horizontal()
            .id_salt(title.to_string())
            .show(ui, |ui| {
                ui.horizontal(|ui| add_cards(ui));
            });
    }
    ui.add_space(6.0);
    ui.separator();
}

fn paper_card(ui: &mut egui::Ui, paper: &PaperAsset, width: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(|ui| {
            ui.hyperlink_to(egui::RichText::new(&paper.title).strong(), &paper.url);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(snippet_text(paper)).small());
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(source_text(paper))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        });
    });
}

fn media_card(ui: &mut egui::Ui, asset: &MediaAsset, width: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(platform_text(asset))
                    .small()
                    .color(egui::Color32::GRAY),
            );
            ui.hyperlink_to(egui::RichText::new(&asset.title).strong(), &asset.url);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(snippet: &str, source: &str) -> PaperAsset {
        PaperAsset {
            title: "X".to_string(),
            url: "http://a".to_string(),
            source: source.to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn empty_snippet_and_source_fall_back() {
        let p = paper("", "");
        assert_eq!(snippet_text(&p), "No summary available");
        assert_eq!(source_text(&p), "Verified Source");
    }

    #[test]
    fn present_fields_render_verbatim() {
        let p = paper("An abstract.", "JPL");
        assert_eq!(snippet_text(&p), "An abstract.");
        assert_eq!(source_text(&p), "JPL");
    }

    #[test]
    fn media_platform_falls_back_to_public_asset() {
        let a = MediaAsset {
            title: "T".to_string(),
            url: "http://b".to_string(),
            platform: " ".to_string(),
        };
        assert_eq!(platform_text(&a), "Public Asset");
    }
}
