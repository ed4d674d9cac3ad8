use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use newsnex_core::{
    ContentLocator, Document, PreprocessConfig, ProfileExtractor, Profiler, deduplicate, extract_profiles,
    preprocess_html,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{name}")).unwrap()
}

fn bench_preprocess(c: &mut Criterion) {
    let html = fixture("news_article.html");
    let config = PreprocessConfig::default();

    c.bench_function("preprocess", |b| b.iter(|| preprocess_html(black_box(&html), &config)));
}

fn bench_locate(c: &mut Criterion) {
    let locator = ContentLocator::default();
    let mut group = c.benchmark_group("locate");

    for name in ["news_article.html", "container_article.html", "nav_only.html"] {
        let doc = Document::parse(&fixture(name));
        group.bench_with_input(BenchmarkId::from_parameter(name), &doc, |b, doc| {
            b.iter(|| locator.locate(black_box(doc)))
        });
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let text = "Jane Doe, CEO of Acme Corp, said the deal was final. \"We expect strong growth,\" said Mark Lee. \
                According to Sarah Johnson, the merger will close in March. Tom Brown of Globex declined to comment. "
        .repeat(50);
    let extractor = ProfileExtractor::default();

    c.bench_function("extract_rules", |b| b.iter(|| extractor.extract(black_box(&text))));
    c.bench_function("extract_and_dedup", |b| b.iter(|| deduplicate(extract_profiles(black_box(&text)))));
}

fn bench_full_pipeline(c: &mut Criterion) {
    let html = fixture("news_article.html");
    let profiler = Profiler::new();

    c.bench_function("profile_html", |b| b.iter(|| profiler.profile_html(black_box(&html), None)));
}

criterion_group!(benches, bench_preprocess, bench_locate, bench_extract, bench_full_pipeline);
criterion_main!(benches);
