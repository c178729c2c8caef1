use ayahcards::{CardDeck, Chapter, Segmenter, ThemeClassifier, VerseUnit};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn long_chapter() -> Chapter {
    // Roughly the size of Al-Baqara.
    let verses = (1..=286)
        .map(|n| {
            VerseUnit::new(
                n,
                "ذَٰلِكَ ٱلْكِتَٰبُ لَا رَيْبَ ۛ فِيهِ ۛ هُدًى لِّلْمُتَّقِينَ ".repeat((n as usize % 5) + 1),
                "This is the Book about which there is no doubt, a guidance for those conscious of Allah",
            )
        })
        .collect();
    Chapter {
        number: 2,
        name: "البقرة".into(),
        english_name: "Al-Baqara".into(),
        total_ayahs: 286,
        verses,
    }
}

fn bench_segment(c: &mut Criterion) {
    let chapter = long_chapter();
    let segmenter = Segmenter::default();
    c.bench_function("segment_286_verses", |b| {
        b.iter(|| segmenter.segment(black_box(&chapter.english_name), black_box(&chapter.verses)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = ThemeClassifier::default();
    let text = "Indeed, in the creation of the heavens and the earth and the alternation of the night and the day \
                and the great ships which sail through the sea with that which benefits people";
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("classify_translation", |b| b.iter(|| classifier.classify(black_box(text), &mut rng)));
}

fn bench_plan(c: &mut Criterion) {
    let chapter = long_chapter();
    let segmenter = Segmenter::default();
    let classifier = ThemeClassifier::default();
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("plan_deck", |b| {
        b.iter(|| CardDeck::plan(black_box(&chapter), &segmenter, &classifier, &mut rng))
    });
}

criterion_group!(benches, bench_segment, bench_classify, bench_plan);
criterion_main!(benches);
