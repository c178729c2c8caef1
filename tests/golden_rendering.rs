#![cfg(feature = "render")]

use std::fs;
use std::path::PathBuf;

use ayahcards::rendering::{paint_card, layout_card, FontSet, Rasterizer};
use ayahcards::{CardSize, Segmenter, TextColor, ThemeCategory, ThemeDecision, VerseUnit};
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

const GOLDEN_ROWS: [u32; 5] = [0, 32, 64, 96, 127];

/// `row r g b` lines; `#` starts a comment.
fn parse_golden(text: &str) -> Vec<(u32, [u8; 3])> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| {
            let v: Vec<u32> = l.split_whitespace().map(|n| n.parse().expect("golden number")).collect();
            assert_eq!(v.len(), 4, "bad golden line {:?}", l);
            (v[0], [v[1] as u8, v[2] as u8, v[3] as u8])
        })
        .collect()
}

#[test]
fn golden_background_matches_fixture() {
    let segment = Segmenter::default()
        .segment("Al-Ikhlas", &[VerseUnit::new(1, "قُلْ هُوَ ٱللَّهُ أَحَدٌ", "Say, He is Allah, [who is] One")])
        .remove(0);
    let theme = ThemeDecision {
        category: ThemeCategory::Sky,
        text_color: TextColor::Light,
        overlay_opacity: 0.5,
        scores: Default::default(),
        randomized: false,
    };
    let size = CardSize { width: 256, height: 128 };
    let commands = paint_card(&layout_card(&segment, size), &theme);

    // No fonts: only background and overlay are drawn, so the pixels are
    // stable across machines.
    let image = Rasterizer::new(FontSet::default()).rasterize(&commands, size).expect("rasterize");
    let pixels = image::load_from_memory(&image.png_data).expect("decode").to_rgba8();
    let actual: Vec<(u32, [u8; 3])> = GOLDEN_ROWS
        .iter()
        .map(|&y| {
            let p = pixels.get_pixel(0, y).0;
            (y, [p[0], p[1], p[2]])
        })
        .collect();

    let expected_path = golden_path("sky_card.txt");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        let mut out = String::from("# Sky card, 256x128, no fonts: background rows under the 50% overlay.\n# row r g b\n");
        for (y, [r, g, b]) in &actual {
            out.push_str(&format!("{} {} {} {}\n", y, r, g, b));
        }
        fs::write(&expected_path, out).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("missing golden {:?} ({}); run with UPDATE_GOLDENS=1", expected_path, e));
    assert_eq!(actual, parse_golden(&exp));

    // Rows are uniform: the right edge matches the left.
    for &y in &GOLDEN_ROWS {
        assert_eq!(pixels.get_pixel(0, y), pixels.get_pixel(size.width - 1, y));
    }
}

#[test]
fn rendering_is_deterministic() {
    let segment = Segmenter::default()
        .segment("Al-Ikhlas", &[VerseUnit::new(2, "ٱللَّهُ ٱلصَّمَدُ", "Allah, the Eternal Refuge")])
        .remove(0);
    let theme = ThemeDecision {
        category: ThemeCategory::Nature,
        text_color: TextColor::Light,
        overlay_opacity: 0.5,
        scores: Default::default(),
        randomized: true,
    };
    let size = CardSize { width: 128, height: 128 };
    let commands = paint_card(&layout_card(&segment, size), &theme);
    let r = Rasterizer::new(FontSet::default());
    let a = r.rasterize(&commands, size).unwrap();
    let b = r.rasterize(&commands, size).unwrap();
    assert_eq!(Sha256::digest(&a.png_data), Sha256::digest(&b.png_data));
}
