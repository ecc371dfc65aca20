//! End-to-end session scenarios driven through the public tick API.

use glam::Vec2;

use zombie_rush::SimConfig;
use zombie_rush::consts::*;
use zombie_rush::sim::{
    Bullet, GameEvent, GamePhase, GameState, LevelDef, TickInput, Zombie, tick,
};

fn single_level(zombie_count: u32, spawn_interval: u32) -> SimConfig {
    SimConfig {
        target: false,
        levels: vec![LevelDef {
            zombie_count,
            spawn_interval,
        }],
        ..SimConfig::default()
    }
}

/// Drop enough bullets on every zombie that has walked onto the field to
/// kill it this tick. Bullets are culled at the playfield border, so a
/// zombie still outside it cannot be hit yet and has to walk in first.
fn volley(state: &mut GameState) {
    let shots_to_kill = (ZOMBIE_MAX_HP as f32 / BULLET_DAMAGE as f32).ceil() as usize;
    let marks: Vec<Vec2> = state
        .zombies
        .iter()
        .filter(|z| z.pos.x > 50.0)
        .map(|z| z.pos)
        .collect();
    for pos in marks {
        for _ in 0..shots_to_kill {
            state.bullets.push(Bullet {
                pos,
                dir: Vec2::new(1.0, 0.0),
                radius: BULLET_RADIUS,
                speed: BULLET_SPEED,
            });
        }
    }
}

fn field_zombie(pos: Vec2) -> Zombie {
    Zombie {
        pos,
        radius: ZOMBIE_RADIUS,
        speed: 1.0,
        hp: ZOMBIE_MAX_HP,
        max_hp: ZOMBIE_MAX_HP,
        detection_radius: ZOMBIE_DETECTION_RADIUS,
        separation_radius: ZOMBIE_SEPARATION_RADIUS,
        wander_angle: 0.0,
        wander_timer: 0,
        damage_cooldown: 0,
        flash_timer: 0,
        angle: 0.0,
    }
}

#[test]
fn clearing_a_level_completes_it_with_the_kill_reward() {
    let mut state = GameState::with_config(21, single_level(3, 180));
    let idle = TickInput::default();

    let mut safety = 0;
    while state.phase == GamePhase::Playing {
        safety += 1;
        assert!(safety < 10_000, "level never completed");
        volley(&mut state);
        tick(&mut state, &idle);
    }

    assert_eq!(state.phase, GamePhase::LevelComplete);
    assert_eq!(state.kills, 3);
    assert_eq!(state.to_spawn, 0);
    assert!(state.zombies.is_empty());
    assert_eq!(state.score, 3 * KILL_REWARD);
    assert!(
        state
            .drain_events()
            .contains(&GameEvent::LevelComplete { level: 1 })
    );
}

#[test]
fn clearing_the_default_table_wins_the_run() {
    let config = SimConfig {
        target: false,
        ..SimConfig::default()
    };
    let mut state = GameState::with_config(33, config);
    let idle = TickInput::default();
    let advance = TickInput {
        next_level: true,
        ..TickInput::default()
    };

    let mut safety = 0;
    loop {
        safety += 1;
        assert!(safety < 50_000, "run never finished, phase {:?}", state.phase);
        match state.phase {
            GamePhase::Playing => {
                volley(&mut state);
                tick(&mut state, &idle);
            }
            GamePhase::LevelComplete => tick(&mut state, &advance),
            GamePhase::Victory => break,
            other => panic!("unexpected phase {other:?}"),
        }
    }

    // 3 + 6 kills across the default table
    assert_eq!(state.score, 9 * KILL_REWARD);
    assert!(
        state
            .drain_events()
            .contains(&GameEvent::Victory { score: 9 * KILL_REWARD })
    );
}

#[test]
fn lethal_contact_ends_the_session() {
    let mut state = GameState::new(5);
    state.player.hp = CONTACT_DAMAGE;
    state.score = 70;
    let beside_player = state.player.pos + Vec2::new(10.0, 0.0);
    state.zombies.push(field_zombie(beside_player));

    tick(&mut state, &TickInput::default());

    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.hud().hp, 0);
    assert!(state.drain_events().contains(&GameEvent::GameOver { score: 70 }));

    // Terminal: further ticks change nothing
    let ticks = state.ticks;
    tick(&mut state, &TickInput::default());
    assert_eq!(state.ticks, ticks);
}

#[test]
fn zombies_outlast_any_stay_offscreen() {
    // Long spawn interval keeps the director quiet for the whole test
    let mut state = GameState::with_config(8, single_level(1, 10_000));
    state.zombies.push(field_zombie(Vec2::new(-500.0, -500.0)));

    let idle = TickInput::default();
    for _ in 0..300 {
        tick(&mut state, &idle);
    }

    assert_eq!(state.zombies.len(), 1, "off-bounds zombies are never culled");
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn restart_mid_run_replays_from_level_one() {
    let mut state = GameState::with_config(13, single_level(3, 10));
    let idle = TickInput::default();
    for _ in 0..50 {
        tick(&mut state, &idle);
    }
    assert!(!state.zombies.is_empty());
    state.player.hp = 1;

    tick(
        &mut state,
        &TickInput {
            restart: true,
            ..TickInput::default()
        },
    );

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.level_index, 0);
    assert_eq!(state.score, 0);
    assert_eq!(state.player.hp, state.player.max_hp);
    assert!(state.zombies.is_empty());
    assert_eq!(state.to_spawn, 3);
}
