use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use sky_gap::GameConfig;
use sky_gap::sim::{
    Actor, BoundaryContact, Command, Engine, Obstacle, ObstacleStream, RunState,
    actor_hits_obstacle,
};

proptest! {
    #[test]
    fn velocity_strictly_increases_until_clamped(
        start_y in 0.0f32..456.0,
        start_vel in -7.0f32..10.0,
    ) {
        let config = GameConfig::default();
        let mut actor = Actor::new(&config);
        actor.pos.y = start_y;
        actor.vel_y = start_vel;

        for _ in 0..200 {
            let before = actor.vel_y;
            match actor.apply_gravity_step(&config) {
                BoundaryContact::None => prop_assert!(actor.vel_y > before),
                BoundaryContact::Ceiling => {
                    prop_assert_eq!(actor.pos.y, 0.0);
                    prop_assert_eq!(actor.vel_y, 0.0);
                }
                BoundaryContact::Floor => {
                    prop_assert_eq!(actor.pos.y, config.floor_y());
                    prop_assert_eq!(actor.vel_y, 0.0);
                    break;
                }
            }
            prop_assert!(actor.pos.y >= 0.0 && actor.pos.y <= config.floor_y());
        }
    }

    #[test]
    fn flap_always_sets_exact_impulse(prior in -100.0f32..100.0, flaps in 1usize..5) {
        let config = GameConfig::default();
        let mut engine = Engine::new(config.clone(), 9).unwrap();
        engine.start();
        engine.step(1.0);
        let mut actor = engine.actor().clone();
        actor.vel_y = prior;
        for _ in 0..flaps {
            actor.flap(config.flap_impulse);
            prop_assert_eq!(actor.vel_y, config.flap_impulse);
        }
        for _ in 0..flaps {
            engine.apply(Command::Flap);
            prop_assert_eq!(engine.actor().vel_y, config.flap_impulse);
        }
    }

    #[test]
    fn spawned_heights_stay_in_range(seed in any::<u64>()) {
        let config = GameConfig::default();
        let (min, max) = config.top_height_range();
        let mut stream = ObstacleStream::new();
        let mut rng = Pcg32::seed_from_u64(seed);
        for i in 1..=20 {
            stream.maybe_spawn(i as f64 * 1801.0, &config, &mut rng);
        }
        prop_assert_eq!(stream.len(), 20);
        for obstacle in stream.obstacles() {
            prop_assert!(obstacle.top_height >= min as f32);
            prop_assert!(obstacle.top_height <= max as f32);
        }
    }

    #[test]
    fn offscreen_obstacles_never_survive_advance(
        xs in prop::collection::vec(-120.0f32..320.0, 0..12),
    ) {
        let config = GameConfig::default();
        let mut stream = ObstacleStream::new();
        for x in &xs {
            stream.push(Obstacle::new(*x, 100.0, &config));
        }
        for _ in 0..250 {
            stream.advance(config.actor_x, &config);
            for obstacle in stream.obstacles() {
                prop_assert!(obstacle.x + obstacle.width >= 0.0);
            }
        }
        prop_assert!(stream.is_empty());
    }

    #[test]
    fn each_obstacle_scores_exactly_once(
        xs in prop::collection::vec(0.0f32..320.0, 1..8),
    ) {
        let config = GameConfig::default();
        let mut stream = ObstacleStream::new();
        for x in &xs {
            stream.push(Obstacle::new(*x, 100.0, &config));
        }
        let mut total = 0;
        for _ in 0..250 {
            total += stream.advance(config.actor_x, &config);
        }
        prop_assert_eq!(total as usize, xs.len());
    }

    #[test]
    fn collision_requires_both_overlaps(
        actor_y in 0.0f32..456.0,
        obstacle_x in -60.0f32..320.0,
        top_height in 50.0f32..310.0,
    ) {
        let config = GameConfig::default();
        let mut actor = Actor::new(&config);
        actor.pos.y = actor_y;
        let obstacle = Obstacle::new(obstacle_x, top_height, &config);

        let horizontal = actor.pos.x < obstacle.x + obstacle.width
            && actor.pos.x + actor.width > obstacle.x;
        let vertical = actor.pos.y < top_height
            || actor.pos.y + actor.height > top_height + obstacle.gap_height;
        prop_assert_eq!(actor_hits_obstacle(&actor, &obstacle), horizontal && vertical);
    }

    #[test]
    fn score_never_decreases_within_a_run(seed in any::<u64>(), flap_every in 8u64..30) {
        let mut engine = Engine::new(GameConfig::default(), seed).unwrap();
        engine.start();
        let mut last = 0;
        let mut frame = 0u64;
        while engine.state() == RunState::Running && frame < 3000 {
            frame += 1;
            if frame % flap_every == 0 {
                engine.apply(Command::Flap);
            }
            let snap = engine.step(frame as f64 * 16.0);
            prop_assert!(snap.score >= last);
            last = snap.score;
        }
        if engine.state() == RunState::Ended {
            prop_assert_eq!(engine.final_score(), Some(last));
        }
    }
}
