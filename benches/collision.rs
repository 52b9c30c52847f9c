use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dodge::core::{CollisionDetector, Game, GameConfig, ObstacleGenerator};
use tui_dodge::types::{Bounds, PlayerAction};

fn bench_collides(c: &mut Criterion) {
    let obstacles = ObstacleGenerator::new(Bounds::new(80, 24), 12345).generate(20);
    let detector = CollisionDetector::new(obstacles);

    c.bench_function("collides_20_obstacles", |b| {
        b.iter(|| detector.collides(black_box(40), black_box(12)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut gen = ObstacleGenerator::new(Bounds::new(80, 24), 12345);

    c.bench_function("generate_20_obstacles", |b| b.iter(|| gen.generate(black_box(20))));
}

fn bench_handle_key(c: &mut Criterion) {
    let config = GameConfig {
        seed: Some(12345),
        ..GameConfig::default()
    };
    let mut game = Game::new(&config, Bounds::new(80, 24));
    let mut screen = std::io::sink();
    let mut flip = false;

    c.bench_function("handle_key", |b| {
        b.iter(|| {
            flip = !flip;
            let action = if flip {
                PlayerAction::MoveRight
            } else {
                PlayerAction::MoveLeft
            };
            game.handle(black_box(Some(action)), &mut screen)
        })
    });
}

criterion_group!(benches, bench_collides, bench_generate, bench_handle_key);
criterion_main!(benches);
