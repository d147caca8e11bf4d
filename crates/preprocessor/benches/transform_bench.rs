use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_builder::RawFeatureRow;
use preprocessor::{
    AgeFallbackEntry, AgeLookupEntry, ArtifactsDocument, PreprocessingArtifacts, Preprocessor,
    ScalerDocument, ScalerKind,
};

fn artifacts() -> PreprocessingArtifacts {
    let columns = [
        "Pclass",
        "Sex",
        "Age",
        "SibSp",
        "Parch",
        "Fare",
        "HasCabin",
        "Embarked_Queenstown",
        "Embarked_Southampton",
    ];

    let doc = ArtifactsDocument {
        age_lookup: vec![AgeLookupEntry {
            sex: "male".to_string(),
            ticket_class: 3,
            title: "Mr".to_string(),
            siblings_spouses: 0,
            parents_children: 0,
            age: 26.0,
        }],
        age_lookup_fallback: vec![AgeFallbackEntry {
            sex: "male".to_string(),
            ticket_class: 3,
            age: 25.0,
        }],
        embarked_fallback: "Southampton".to_string(),
        sex_classes: vec!["female".to_string(), "male".to_string()],
        embarked_dummy_columns: vec![
            "Embarked_Queenstown".to_string(),
            "Embarked_Southampton".to_string(),
        ],
        embarked_baseline: Some("Cherbourg".to_string()),
        scaler: ScalerDocument {
            feature_names: columns.iter().map(|c| c.to_string()).collect(),
            kind: ScalerKind::Standard {
                mean: vec![2.3, 0.65, 29.5, 0.5, 0.4, 32.0, 0.2, 0.1, 0.7],
                scale: vec![0.8, 0.48, 13.0, 1.1, 0.8, 50.0, 0.4, 0.3, 0.45],
            },
        },
    };

    match PreprocessingArtifacts::try_from(doc) {
        Ok(artifacts) => artifacts,
        Err(e) => panic!("benchmark artifacts are invalid: {e}"),
    }
}

fn bench_transform(c: &mut Criterion) {
    let artifacts = artifacts();
    let preprocessor = Preprocessor::new();
    let row = RawFeatureRow {
        name: "Saundercock, Mr. William Henry".to_string(),
        passenger_class: 3,
        sex: "male".to_string(),
        age: None,
        siblings_spouses: 0,
        parents_children: 0,
        cabin: None,
        ticket: "A/5. 2151".to_string(),
        fare: Some(8.05),
        embarked: Some("Southampton".to_string()),
    };

    c.bench_function("transform_with_age_imputation", |b| {
        b.iter(|| preprocessor.transform(black_box(&row), black_box(&artifacts)))
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
