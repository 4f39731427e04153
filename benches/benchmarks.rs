criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        drawing_a_prng_stream,
        sampling_a_joker,
        sampling_a_voucher,
        sampling_an_erratic_deck,
        walking_a_seed_batch_lane_group,
        compiling_a_filter_document,
        evaluating_a_compiled_pipeline_over_one_batch_group,
}

fn drawing_a_prng_stream(c: &mut criterion::Criterion) {
    c.bench_function("draw 1000 doubles from one PRNG stream", |b| {
        b.iter(|| {
            let mut stream = Stream::from_parts("Joker0", 1, "ABCD2345");
            stream.next_n(1000)
        })
    });
}

fn sampling_a_joker(c: &mut criterion::Criterion) {
    c.bench_function("sample a shop joker", |b| {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        b.iter(|| sample_joker(&mut ctx, 1, 0))
    });
}

fn sampling_a_voucher(c: &mut criterion::Criterion) {
    c.bench_function("sample a voucher", |b| {
        let mut ctx = SampleContext::new(Deck::Red, Stake::White, "ABCD2345");
        b.iter(|| sample_voucher(&mut ctx, 1))
    });
}

fn sampling_an_erratic_deck(c: &mut criterion::Criterion) {
    c.bench_function("sample a 52-card Erratic deck", |b| {
        let mut ctx = SampleContext::new(Deck::Erratic, Stake::White, "ABCD2345");
        b.iter(|| sample_erratic_deck(&mut ctx))
    });
}

fn walking_a_seed_batch_lane_group(c: &mut criterion::Criterion) {
    c.bench_function("walk a one-character-suffix batch's lane groups", |b| {
        let batch = SeedBatch::new(7, 0);
        b.iter(|| (0..batch.total_groups()).map(|g| batch.lane_group(g)).count())
    });
}

fn compiling_a_filter_document(c: &mut criterion::Criterion) {
    let text = r#"{
        "deck": "Red",
        "stake": "White",
        "must": [{ "type": "Voucher", "value": "Telescope", "antes": [1,2] }],
        "should": [{ "joker": "Blueprint", "antes": [1,2,3], "score": 100 }]
    }"#;
    c.bench_function("compile a filter document", |b| {
        b.iter(|| {
            let doc = FilterDocument::parse(text).unwrap();
            compile(&doc).unwrap()
        })
    });
}

fn evaluating_a_compiled_pipeline_over_one_batch_group(c: &mut criterion::Criterion) {
    let text = r#"{
        "deck": "Red",
        "stake": "White",
        "must": [{ "type": "Voucher", "value": "Telescope", "antes": [1,2] }],
        "should": [{ "joker": "Blueprint", "antes": [1,2,3], "score": 100 }]
    }"#;
    let doc = FilterDocument::parse(text).unwrap();
    let pipeline = compile(&doc).unwrap();
    let batch = SeedBatch::new(8, 0);
    let (seeds, _) = batch.lane_group(0);

    c.bench_function("evaluate must+should over one 8-lane group", |b| {
        b.iter(|| {
            let mut ctx = EvalCtx::new(&seeds, pipeline.deck, pipeline.stake);
            for evaluator in &pipeline.must {
                evaluator.evaluate(&mut ctx);
            }
            for (evaluator, _) in &pipeline.should {
                evaluator.evaluate(&mut ctx);
            }
        })
    });
}

use seedsieve::domain::{Deck, Stake};
use seedsieve::filters::{compile, EvalCtx, FilterDocument};
use seedsieve::prng::Stream;
use seedsieve::sample::{sample_erratic_deck, sample_joker, sample_voucher, SampleContext};
use seedsieve::search::SeedBatch;
