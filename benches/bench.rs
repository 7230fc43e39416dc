// Criterion benchmarks for Estate Price

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use estate_price::core::{encode_features, ColumnSchema, PricePredictor};
use estate_price::models::PredictionInput;
use estate_price::services::LinearModel;
use std::sync::Arc;

fn create_schema(location_count: usize) -> ColumnSchema {
    let mut columns = vec![
        "area".to_string(),
        "bathrooms".to_string(),
        "bedrooms".to_string(),
    ];
    columns.extend((0..location_count).map(|i| format!("location_Area{}", i)));
    ColumnSchema::new(columns).unwrap()
}

fn create_input(location: String) -> PredictionInput {
    PredictionInput {
        area: 1250.0,
        bedrooms: 3,
        bathrooms: 2,
        location,
    }
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    for location_count in [10, 100, 1000].iter() {
        let schema = create_schema(*location_count);
        // Worst case for the location lookup: the last column
        let input = create_input(format!("Area{}", location_count - 1));

        group.bench_with_input(
            BenchmarkId::new("encode_features", location_count),
            location_count,
            |b, _| {
                b.iter(|| encode_features(black_box(&schema), black_box(&input)));
            },
        );
    }

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let schema = create_schema(250);
    let coefficients = (0..schema.len()).map(|i| i as f64 * 10.0).collect();
    let predictor = PricePredictor::new(
        Arc::new(schema),
        Arc::new(LinearModel::new(50_000.0, coefficients)),
    );
    let input = create_input("Area125".to_string());

    c.bench_function("predict_250_locations", |b| {
        b.iter(|| predictor.predict(black_box(&input)));
    });
}

criterion_group!(benches, bench_encoding, bench_prediction);

criterion_main!(benches);
