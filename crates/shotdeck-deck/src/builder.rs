//! Deck assembly.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use shotdeck_models::{Metadata, Shot, Shotlist};

use crate::error::DeckResult;
use crate::package;
use crate::xml::{emu, round_rect, slide_part, text_box, TextStyle};

/// Deck color palette (RRGGBB).
mod colors {
    pub const BG: &str = "0B0B0B";
    pub const PANEL: &str = "141414";
    pub const TEXT: &str = "FFFFFF";
    pub const MUTED: &str = "B5B5B5";
    pub const STROKE: &str = "2A2A2A";
}

/// Page geometry in inches.
#[derive(Debug, Clone, Copy)]
struct Page {
    w: f64,
    h: f64,
}

impl Page {
    /// Widescreen for landscape/square, portrait page for vertical
    /// deliveries.
    fn for_metadata(metadata: &Metadata) -> Self {
        if metadata.aspect_ratio.is_vertical() {
            Self { w: 7.5, h: 13.333 }
        } else {
            Self { w: 13.333, h: 7.5 }
        }
    }
}

/// Sanitize a project title into a filename base.
///
/// Runs of anything outside `[A-Za-z0-9_-]` collapse to a single `_`,
/// leading/trailing `_` are trimmed, and an empty result falls back to
/// `Storyboard`.
pub fn safe_filename_base(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_sep = false;

    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "Storyboard".to_string()
    } else {
        trimmed.to_string()
    }
}

fn title_slide(metadata: &Metadata, page: Page) -> String {
    let mut shapes = Vec::new();
    let mut id = 2;

    shapes.push(text_box(
        id,
        "Title",
        0.8,
        1.2,
        page.w - 1.6,
        0.8,
        &[metadata.project_title.clone()],
        TextStyle::new(34.0, colors::TEXT).bold(),
    ));
    id += 1;

    let subtitle_parts: Vec<String> = [
        metadata.brand.clone(),
        metadata.director.as_ref().map(|d| format!("Director: {d}")),
        metadata.dop.as_ref().map(|d| format!("DoP: {d}")),
        Some(format!("AR: {}", metadata.aspect_ratio)),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect();

    let subtitle = if subtitle_parts.is_empty() {
        "Generated storyboard".to_string()
    } else {
        subtitle_parts.join("  \u{2022}  ")
    };

    shapes.push(text_box(
        id,
        "Subtitle",
        0.8,
        2.05,
        page.w - 1.6,
        0.5,
        &[subtitle],
        TextStyle::new(14.0, colors::MUTED),
    ));
    id += 1;

    if let Some(notes) = metadata.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        shapes.push(round_rect(
            id,
            "Notes panel",
            0.8,
            2.8,
            page.w - 1.6,
            1.1,
            colors::PANEL,
            colors::STROKE,
        ));
        id += 1;
        shapes.push(text_box(
            id,
            "Notes",
            1.05,
            2.95,
            page.w - 2.1,
            0.8,
            &[notes.to_string()],
            TextStyle::new(12.0, colors::TEXT),
        ));
    }

    slide_part(colors::BG, &shapes)
}

fn shot_slide(shot: &Shot, index: usize, total: usize, page: Page) -> String {
    let margin = 0.6;
    let panel_y = 0.9;
    let panel_h = page.h - panel_y - 0.5;
    let frame_w = (page.w - 2.0 * margin - 0.2) * 0.62;
    let details_x = margin + frame_w + 0.2;
    let details_w = page.w - details_x - margin;

    let mut shapes = Vec::new();

    shapes.push(text_box(
        2,
        "Header",
        margin,
        0.3,
        page.w - 2.0 * margin,
        0.4,
        &[format!("{}  \u{2022}  {}", shot.shot_id, shot.shot_type)],
        TextStyle::new(14.0, colors::TEXT).bold(),
    ));

    // Frame placeholder (left)
    shapes.push(round_rect(
        3,
        "Frame",
        margin,
        panel_y,
        frame_w,
        panel_h,
        colors::PANEL,
        colors::STROKE,
    ));

    let caption = if shot.sketch_description.is_empty() {
        "Storyboard frame placeholder".to_string()
    } else {
        shot.sketch_description.clone()
    };
    shapes.push(text_box(
        4,
        "Frame caption",
        margin + 0.3,
        panel_y + 0.2,
        frame_w - 0.6,
        panel_h - 0.4,
        &[caption],
        TextStyle::new(14.0, colors::MUTED),
    ));

    // Details panel (right)
    shapes.push(round_rect(
        5,
        "Details panel",
        details_x,
        panel_y,
        details_w,
        panel_h,
        colors::PANEL,
        colors::STROKE,
    ));

    let mut lines = vec![
        format!("Scene: {}", shot.scene_id),
        format!("Beat: {}", shot.beat_id),
        String::new(),
        format!("Action: {}", shot.action),
        String::new(),
        format!("Intent: {}", shot.intent),
        String::new(),
        format!("Camera: {}, {}", shot.camera.angle, shot.camera.height),
        format!("Move: {} ({})", shot.camera.movement, shot.camera.support),
        format!("Lens: {} \u{2014} {}", shot.lens.mm_range, shot.lens.rationale),
    ];
    if !shot.risk_flags.is_empty() {
        lines.push(String::new());
        lines.push(format!("Flags: {}", shot.risk_flags.join(", ")));
    }

    shapes.push(text_box(
        6,
        "Details",
        details_x + 0.3,
        panel_y + 0.25,
        details_w - 0.6,
        panel_h - 0.5,
        &lines,
        TextStyle::new(11.0, colors::TEXT),
    ));

    shapes.push(text_box(
        7,
        "Page",
        page.w - 1.6,
        page.h - 0.5,
        1.0,
        0.3,
        &[format!("{} / {}", index + 1, total)],
        TextStyle::new(10.0, colors::MUTED).right(),
    ));

    slide_part(colors::BG, &shapes)
}

/// Build the storyboard deck as PPTX bytes.
///
/// One title slide plus one slide per shot.
pub fn build_storyboard_deck(shotlist: &Shotlist, metadata: &Metadata) -> DeckResult<Vec<u8>> {
    let page = Page::for_metadata(metadata);
    let slide_count = shotlist.shots.len() + 1;

    debug!(
        "Building storyboard deck: {} slides, page {}x{}in",
        slide_count, page.w, page.h
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let put = |writer: &mut ZipWriter<Cursor<Vec<u8>>>, path: &str, body: &str| -> DeckResult<()> {
        writer.start_file(path, options)?;
        writer.write_all(body.as_bytes())?;
        Ok(())
    };

    put(&mut writer, package::CONTENT_TYPES_PATH, &package::content_types(slide_count))?;
    put(&mut writer, package::ROOT_RELS_PATH, &package::root_rels())?;
    put(
        &mut writer,
        package::PRESENTATION_PATH,
        &package::presentation(slide_count, emu(page.w), emu(page.h)),
    )?;
    put(
        &mut writer,
        package::PRESENTATION_RELS_PATH,
        &package::presentation_rels(slide_count),
    )?;
    put(&mut writer, package::SLIDE_MASTER_PATH, &package::slide_master())?;
    put(&mut writer, package::SLIDE_MASTER_RELS_PATH, &package::slide_master_rels())?;
    put(&mut writer, package::SLIDE_LAYOUT_PATH, &package::slide_layout())?;
    put(&mut writer, package::SLIDE_LAYOUT_RELS_PATH, &package::slide_layout_rels())?;
    put(&mut writer, package::THEME_PATH, &package::theme())?;
    put(
        &mut writer,
        package::CORE_PROPS_PATH,
        &package::core_props(&metadata.project_title),
    )?;
    put(
        &mut writer,
        package::APP_PROPS_PATH,
        &package::app_props(&metadata.project_title),
    )?;

    put(&mut writer, &package::slide_path(1), &title_slide(metadata, page))?;
    put(&mut writer, &package::slide_rels_path(1), &package::slide_rels())?;

    let total = shotlist.shots.len();
    for (i, shot) in shotlist.shots.iter().enumerate() {
        put(
            &mut writer,
            &package::slide_path(i + 2),
            &shot_slide(shot, i, total, page),
        )?;
        put(&mut writer, &package::slide_rels_path(i + 2), &package::slide_rels())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    use shotdeck_models::{AspectRatio, Camera, ContinuityNotes, Lens, ShotType};

    fn sample_shot(id: &str) -> Shot {
        Shot {
            shot_id: id.to_string(),
            scene_id: "SC001".to_string(),
            beat_id: "B001_1".to_string(),
            shot_type: ShotType::Insert,
            action: "A hand taps the bottle.".to_string(),
            intent: "Product showcase".to_string(),
            camera: Camera {
                angle: "flat".to_string(),
                height: "table".to_string(),
                movement: "micro-slide".to_string(),
                support: "slider/tripod".to_string(),
            },
            lens: Lens {
                mm_range: "100mm".to_string(),
                rationale: "Product detail, texture".to_string(),
            },
            continuity_notes: ContinuityNotes {
                line_of_action: "Standard".to_string(),
                eyelines: "N/A".to_string(),
                match_action: "N/A".to_string(),
                props_wardrobe: "Hero product visible".to_string(),
            },
            risk_flags: vec!["Insert beat not framed as INSERT".to_string()],
            sketch_description: "Insert/macro of bottle".to_string(),
            sketch_image_url: None,
            sketch_error: None,
        }
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_safe_filename_base() {
        assert_eq!(safe_filename_base("Chai Ad  (v2)!"), "Chai_Ad_v2");
        assert_eq!(safe_filename_base("already_safe-name"), "already_safe-name");
        assert_eq!(safe_filename_base("!!!"), "Storyboard");
        assert_eq!(safe_filename_base(""), "Storyboard");
    }

    #[test]
    fn test_deck_has_one_slide_per_shot_plus_title() {
        let shotlist = Shotlist {
            shots: vec![sample_shot("S001"), sample_shot("S002")],
        };
        let bytes = build_storyboard_deck(&shotlist, &Metadata::default()).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"ppt/presentation.xml".to_string()));
        assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
        assert!(names.contains(&"ppt/slides/slide3.xml".to_string()));
        assert!(!names.contains(&"ppt/slides/slide4.xml".to_string()));
    }

    #[test]
    fn test_shot_slide_carries_details_and_flags() {
        let shotlist = Shotlist {
            shots: vec![sample_shot("S001")],
        };
        let bytes = build_storyboard_deck(&shotlist, &Metadata::default()).unwrap();

        let slide = read_entry(&bytes, "ppt/slides/slide2.xml");
        assert!(slide.contains("S001"));
        assert!(slide.contains("INSERT"));
        assert!(slide.contains("Lens: 100mm"));
        assert!(slide.contains("Flags: Insert beat not framed as INSERT"));
        assert!(slide.contains("Insert/macro of bottle"));
    }

    #[test]
    fn test_title_slide_content_is_escaped() {
        let metadata = Metadata {
            project_title: "Chai & Co".to_string(),
            brand: Some("Chai & Co".to_string()),
            notes: Some("Keep <hero> pack visible".to_string()),
            ..Metadata::default()
        };
        let bytes = build_storyboard_deck(&Shotlist::default(), &metadata).unwrap();

        let slide = read_entry(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("Chai &amp; Co"));
        assert!(slide.contains("Keep &lt;hero&gt; pack visible"));
        assert!(!slide.contains("Chai & Co"));
    }

    #[test]
    fn test_vertical_aspect_gets_portrait_page() {
        let metadata = Metadata {
            aspect_ratio: AspectRatio::Portrait,
            ..Metadata::default()
        };
        let bytes = build_storyboard_deck(&Shotlist::default(), &metadata).unwrap();

        let pres = read_entry(&bytes, "ppt/presentation.xml");
        // Portrait: cx < cy
        assert!(pres.contains("cx=\"6858000\""));
        assert!(pres.contains("cy=\"12191695\""));
    }

    #[test]
    fn test_deck_build_is_deterministic() {
        let shotlist = Shotlist {
            shots: vec![sample_shot("S001")],
        };
        let a = build_storyboard_deck(&shotlist, &Metadata::default()).unwrap();
        let b = build_storyboard_deck(&shotlist, &Metadata::default()).unwrap();
        assert_eq!(a, b);
    }
}
