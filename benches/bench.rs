use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mailtab::document::{Document, SparseVector};
use mailtab::similarity::{Similarity, SimilarityMetric};
use mailtab::vectorize::{Vectorizer, WeightedVectorizer};

fn generate_vector(seed: usize, features: usize) -> SparseVector {
    (0..features)
        .map(|i| {
            let key = format!("term{}", (i * 7 + seed) % (features * 2));
            (key, ((i + seed) % 11) as f64 + 1.0)
        })
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    let query = generate_vector(0, 200);
    let profiles: Vec<SparseVector> = (1..=5).map(|s| generate_vector(s, 5000)).collect();

    let mut group = c.benchmark_group("similarity_metrics");
    for metric in SimilarityMetric::ALL {
        group.bench_function(metric.name(), |b| {
            b.iter(|| {
                for profile in &profiles {
                    black_box(metric.score(black_box(&query), black_box(profile)));
                }
            })
        });
    }
    group.finish();
}

fn bench_vectorize(c: &mut Criterion) {
    let mut doc = Document::placeholder(1);
    doc.sender = "newsletter@shop.example".to_string();
    doc.subject = vec!["weekly".to_string(), "deals".to_string()];
    doc.hour = "09".to_string();
    doc.body = (0..500)
        .map(|i| match i % 10 {
            0 => "https://shop.example/track".to_string(),
            1 => "unsubscribe".to_string(),
            _ => format!("word{}", i % 97),
        })
        .collect();

    let vectorizer = WeightedVectorizer::default();
    c.bench_function("weighted_vectorize", |b| {
        b.iter(|| black_box(vectorizer.vectorize(black_box(&doc))))
    });
}

criterion_group!(benches, bench_similarity, bench_vectorize);
criterion_main!(benches);
