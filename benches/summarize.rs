use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use webgist::{
    clean, count_words, extract_paragraph_text, score_sentences, sentences, summarize_html, words,
    Config, StopwordFilter,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Small page: two article paragraphs plus nav/footer noise.
const SMALL_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Glaciers</title></head>
<body>
<nav><a href="/">Home</a> | <a href="/maps">Maps</a></nav>
<p>Glaciers carve valleys over many centuries. The ice moves slowly downhill
under its own weight, grinding rock into fine sediment as it goes.</p>
<p>Meltwater from the glacier feeds the rivers below. In warm years the
retreat accelerates and the valley floor is exposed a little further.</p>
<footer>Contact us</footer>
</body>
</html>"#;

const TOPICS: &[&str] = &["glacier", "valley", "river", "ridge", "moraine", "sediment"];

/// Generated article with `paragraphs` three-sentence paragraphs cycling
/// through a small topic vocabulary, so the frequency table stays varied.
fn article_html(paragraphs: usize) -> String {
    let mut s = String::from("<!DOCTYPE html><html><head><title>Survey</title></head><body>\n");
    for i in 0..paragraphs {
        let a = TOPICS[i % TOPICS.len()];
        let b = TOPICS[(i + 2) % TOPICS.len()];
        s.push_str(&format!(
            "<p>The {a} shapes the {b} over time. Each season the {a} shifts \
             and the {b} records the change. Observers measured the {a} again \
             in year {i} and noted how the {b} responded.</p>\n",
        ));
    }
    s.push_str("</body></html>");
    s
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Full pipeline at three page sizes with the English stopword filter.
fn bench_summarize(c: &mut Criterion) {
    let stopwords = StopwordFilter::english();
    let config = Config::default();

    let inputs: &[(&str, String)] = &[
        ("small", SMALL_HTML.to_string()),
        ("medium", article_html(20)),
        ("large", article_html(100)),
    ];

    let mut group = c.benchmark_group("summarize_html");
    for (id, html) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(id), html, |b, html| {
            b.iter(|| summarize_html(black_box(html), black_box(120), stopwords, &config))
        });
    }
    group.finish();
}

/// Individual stages over a medium article.
fn bench_stages(c: &mut Criterion) {
    let stopwords = StopwordFilter::english();
    let text = extract_paragraph_text(&article_html(20));
    let cleaned = clean(&text);
    let sents = sentences(&cleaned.text);
    let frequencies = count_words(
        words(&cleaned.formatted)
            .into_iter()
            .filter(|w| !stopwords.is_stopword(w)),
    )
    .normalize()
    .unwrap();

    let mut group = c.benchmark_group("stages");
    group.bench_function("clean", |b| b.iter(|| clean(black_box(&text))));
    group.bench_function("sentences", |b| {
        b.iter(|| sentences(black_box(&cleaned.text)))
    });
    group.bench_function("count_and_normalize", |b| {
        b.iter(|| {
            count_words(
                words(black_box(&cleaned.formatted))
                    .into_iter()
                    .filter(|w| !stopwords.is_stopword(w)),
            )
            .normalize()
            .unwrap()
        })
    });
    group.bench_function("score_sentences", |b| {
        b.iter(|| score_sentences(black_box(&sents), black_box(&frequencies), 30))
    });
    group.finish();
}

criterion_group!(benches, bench_summarize, bench_stages);
criterion_main!(benches);
