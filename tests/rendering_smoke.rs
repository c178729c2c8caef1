#![cfg(feature = "render")]

use ayahcards::rendering::{render_card, FontSet, Rasterizer};
use ayahcards::{CardDeck, CardSize, Chapter, Segmenter, ThemeCategory, ThemeClassifier, VerseUnit};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn chapter() -> Chapter {
    Chapter {
        number: 55,
        name: "الرحمن".into(),
        english_name: "Ar-Rahman".into(),
        total_ayahs: 78,
        verses: vec![
            VerseUnit::new(46, "وَلِمَنْ خَافَ مَقَامَ رَبِّهِۦ جَنَّتَانِ", "But for he who has feared the position of his Lord are two gardens"),
            VerseUnit::new(47, "فَبِأَىِّ ءَالَآءِ رَبِّكُمَا تُكَذِّبَانِ", "So which of the favors of your Lord would you deny?"),
        ],
    }
}

#[test]
fn renders_every_card_with_theme_background() {
    let deck = CardDeck::plan(&chapter(), &Segmenter::default(), &ThemeClassifier::default(), &mut StdRng::seed_from_u64(5));
    assert_eq!(deck.theme.category, ThemeCategory::Paradise);

    let size = CardSize { width: 320, height: 240 };
    let rasterizer = Rasterizer::new(FontSet::default());
    for card in &deck.cards {
        let img = render_card(card, size, &rasterizer).expect("render");
        assert_eq!(&img.png_data[0..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&img.png_data).expect("decode").to_rgba8();
        assert_eq!(decoded.dimensions(), (320, 240));

        // Top-left pixel: palette top color darkened by the 50% overlay.
        let (top, _) = ThemeCategory::Paradise.palette();
        let expected: Vec<u8> = top.iter().map(|c| (*c as f32 * (1.0 - 128.0 / 255.0)).round() as u8).collect();
        assert_eq!(&decoded.get_pixel(0, 0).0[..3], expected.as_slice());
    }
}

#[test]
fn card_can_be_saved_and_exported_as_data_url() {
    let deck = CardDeck::plan(&chapter(), &Segmenter::default(), &ThemeClassifier::default(), &mut StdRng::seed_from_u64(5));
    let img = render_card(&deck.cards[0], CardSize { width: 64, height: 64 }, &Rasterizer::new(FontSet::default()))
        .expect("render");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(&deck.cards[0].file_name);
    img.save(&path).expect("save");
    assert_eq!(std::fs::read(&path).unwrap(), img.png_data);
    assert!(img.to_data_url().starts_with("data:image/png;base64,iVBORw0KGgo"));
}
