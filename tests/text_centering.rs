use bookster_thumbnail::rendering::layout::{TextPlacement, ThumbnailLayout};
use bookster_thumbnail::rendering::text;
use bookster_thumbnail::{FontRole, FontSet, ThumbnailConfig};

const SAMPLES: &[&str] = &[
    "Bookster",
    "ISU Student Marketplace & Community",
    "i",
    "W",
    "jgpq",
    "  padded  ",
    "A much longer run of text that will not fit on a 1200 pixel banner at this size",
];

#[test]
fn measured_runs_center_within_one_pixel() {
    let fonts = FontSet::embedded().expect("embedded fonts");
    for role in [FontRole::Title, FontRole::Subtitle] {
        let face = fonts.face(role);
        for size in [8.0, 13.5, 50.0, 120.0, 240.0] {
            for sample in SAMPLES {
                let ink = text::measure(face, size, sample);
                for canvas_width in [1200u32, 1201, 333] {
                    let p = TextPlacement::centered(canvas_width, ink, 0);
                    let diff = (p.mid_x() - canvas_width as f32 / 2.0).abs();
                    assert!(
                        diff <= 1.0,
                        "{:?} {:?} at {}px on {}: off by {}",
                        role,
                        sample,
                        size,
                        canvas_width,
                        diff
                    );
                }
            }
        }
    }
}

#[test]
fn leading_whitespace_does_not_shift_ink() {
    let fonts = FontSet::embedded().expect("embedded fonts");
    let face = fonts.face(FontRole::Subtitle);
    let plain = text::measure(face, 50.0, "Bookster");
    let padded = text::measure(face, 50.0, "   Bookster");
    // subpixel caret offsets can move a rounded edge by one pixel
    assert!((plain.width() - padded.width()).abs() <= 1);
    assert!(padded.left > plain.left);

    let a = TextPlacement::centered(1200, plain, 0);
    let b = TextPlacement::centered(1200, padded, 0);
    assert!((a.ink_x - b.ink_x).abs() <= 1);
    assert!(b.origin().0 < a.origin().0);
}

#[test]
fn default_banner_layout_is_centered() {
    let config = ThumbnailConfig::default();
    let fonts = FontSet::load(&config.fonts).expect("fonts");
    let layout = ThumbnailLayout::measure(&config, &fonts);
    assert!((layout.title.mid_x() - 600.0).abs() <= 1.0);
    assert!((layout.subtitle.mid_x() - 600.0).abs() <= 1.0);
    assert!(layout.title.ink.width() > 0);
    assert!(layout.subtitle.ink.width() > layout.title.ink.width() / 2);
}

#[test]
fn default_runs_fit_the_canvas() {
    let config = ThumbnailConfig::default();
    let fonts = FontSet::embedded().expect("embedded fonts");
    let layout = ThumbnailLayout::measure(&config, &fonts);
    for placement in [layout.title, layout.subtitle] {
        assert!(placement.ink_x > 0, "{:?}", placement);
        let (right, bottom) = (
            placement.ink_x + placement.ink.width(),
            placement.ink_y + placement.ink.height(),
        );
        assert!(right < config.width as i32, "{:?}", placement);
        assert!(placement.ink_y > 0, "{:?}", placement);
        assert!(bottom < config.height as i32, "{:?}", placement);
    }
}
