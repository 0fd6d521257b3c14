// Criterion benchmarks for Aura Twin

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use aura_twin::core::{build_match_card, score, simulate_transcript, Matcher};
use aura_twin::models::{AuraProfile, SocialSpeed};
use aura_twin::services::demo_profiles;

fn create_candidate(id: usize, template: &AuraProfile) -> AuraProfile {
    let mut profile = template.clone();
    profile.id = format!("user_{}", id);
    profile.user_id = profile.id.clone();
    profile.display_name = format!("User {}", id);
    profile.aura.introversion_level = 1 + (id % 10) as i32;
    profile.aura.social_speed = match id % 3 {
        0 => SocialSpeed::Slow,
        1 => SocialSpeed::Normal,
        _ => SocialSpeed::Fast,
    };
    profile
}

fn bench_score(c: &mut Criterion) {
    let profiles = demo_profiles();
    let a = profiles[0].twin();
    let b = profiles[2].twin();

    c.bench_function("score", |bench| {
        bench.iter(|| score(black_box(&a), black_box(&b)));
    });

    c.bench_function("match_card", |bench| {
        bench.iter(|| build_match_card(black_box(&a), black_box(&b)));
    });

    c.bench_function("simulate_transcript", |bench| {
        bench.iter(|| simulate_transcript(black_box(&a), black_box(&b), black_box(6)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profiles = demo_profiles();
    let viewer = profiles[0].clone();
    let exclude: Vec<String> = Vec::new();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<AuraProfile> = (0..*candidate_count)
            .map(|i| create_candidate(i, &profiles[i % profiles.len()]))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |bench, _| {
                bench.iter(|| {
                    matcher.rank_candidates(
                        black_box(&viewer),
                        black_box(candidates.clone()),
                        black_box(&exclude),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score, bench_ranking);

criterion_main!(benches);
