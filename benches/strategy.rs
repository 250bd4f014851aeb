use std::hint::black_box;

use blackjack_rs::agents::recommend;
use blackjack_rs::cards::{Card, Rank, Suit};
use blackjack_rs::game::Game;
use blackjack_rs::hand::calculate_score;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_score(c: &mut Criterion) {
    let hard = [Card::new(Rank::Ten, Suit::Hearts), Card::new(Rank::Seven, Suit::Clubs)];
    let aces = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Clubs),
    ];

    let mut g = c.benchmark_group("calculate_score");
    g.bench_with_input(BenchmarkId::new("hard", "T,7"), &hard, |b, input| {
        b.iter(|| calculate_score(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("demote_aces", "A,A,A,9"), &aces, |b, input| {
        b.iter(|| calculate_score(black_box(input)))
    });
    g.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let soft = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Seven, Suit::Hearts)];
    let up = Card::new(Rank::Nine, Suit::Diamonds);
    c.bench_function("recommend_soft_18", |b| b.iter(|| recommend(black_box(&soft), up)));
}

fn bench_round(c: &mut Criterion) {
    let mut game = Game::seeded(6, 7);
    c.bench_function("deal_and_stand", |b| {
        b.iter(|| {
            game.deal_hand().ok();
            black_box(game.stand().ok())
        })
    });
}

criterion_group!(benches, bench_score, bench_recommend, bench_round);
criterion_main!(benches);
