use glam::Vec2;
use penguin_chase::GameConfig;
use penguin_chase::sim::{BoundingRect, GameEvent, Session, SessionPhase};

fn run_frames(session: &mut Session, frames: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        events.extend(session.advance(16.0));
    }
    events
}

#[test]
fn test_autopilot_catches_the_pig() {
    let mut session = Session::new(0xC0FFEE, GameConfig::default());
    session.handle_resize(1000.0, 800.0);
    session.start();
    session.set_autopilot(true);

    // One minute of frames
    let events = run_frames(&mut session, 3750);
    let catches: Vec<u64> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Collision { score, .. } => Some(*score),
            _ => None,
        })
        .collect();

    assert!(!catches.is_empty(), "autopilot never caught the pig");
    // Scores are reported in order, one at a time
    for (i, score) in catches.iter().enumerate() {
        assert_eq!(*score, i as u64 + 1);
    }
    assert_eq!(session.state.score(), catches.len() as u64);
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let mut session = Session::new(42, GameConfig::default());
        session.start();
        for frame in 0..600 {
            if frame % 10 == 0 {
                session.handle_key("ArrowLeft");
            }
            session.advance(16.0);
        }
        (session.state.avatar(), session.state.target(), session.state.score())
    };
    assert_eq!(play(), play());
}

#[test]
fn test_manual_catch_and_relocation() {
    let mut session = Session::new(7, GameConfig::default());
    session.start();

    // Drag the penguin onto the pig
    let rect = BoundingRect::new(100.0, 50.0, 600.0, 400.0);
    let target = session.state.target();
    let client = Vec2::new(100.0 + target.x * 6.0, 50.0 + target.y * 4.0);
    assert!(session.handle_pointer(client, Some(&rect)));
    assert_eq!(session.state.score(), 1);
    assert!(session.state.is_hit());

    // Hit window: further overlaps don't score
    session.state.set_avatar_position(session.state.target());
    assert_eq!(session.state.score(), 1);

    let events = session.advance(500.0_f64.min(session.config().max_frame_ms));
    assert!(events.iter().all(|e| !matches!(e, GameEvent::Relocated { .. })));

    let events = run_frames(&mut session, 20);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::Relocated { .. }))
    );
}

#[test]
fn test_positions_stay_in_bounds() {
    let mut session = Session::new(99, GameConfig::default());
    session.start();

    for frame in 0..2000 {
        let key = ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"][frame % 4];
        if frame % 3 == 0 {
            session.handle_key(key);
        }
        session.advance(16.0);

        for p in [session.state.avatar(), session.state.target()] {
            assert!((0.0..=100.0).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((0.0..=100.0).contains(&p.y), "y out of bounds: {}", p.y);
        }
    }
}

#[test]
fn test_teardown_freezes_the_game() {
    let mut session = Session::new(3, GameConfig::default());
    session.start();
    run_frames(&mut session, 30);

    session.teardown();
    assert_eq!(session.phase(), SessionPhase::Ended);

    let avatar = session.state.avatar();
    let target = session.state.target();
    let score = session.state.score();

    assert!(run_frames(&mut session, 100).is_empty());
    assert!(!session.handle_key("ArrowUp"));
    let rect = BoundingRect::new(0.0, 0.0, 100.0, 100.0);
    assert!(!session.handle_pointer(Vec2::new(10.0, 10.0), Some(&rect)));

    assert_eq!(session.state.avatar(), avatar);
    assert_eq!(session.state.target(), target);
    assert_eq!(session.state.score(), score);
}

#[test]
fn test_config_from_page_json() {
    let config = GameConfig::from_json(r#"{ "avatar_step": 5.0, "seed": 11 }"#).unwrap();
    let mut session = Session::new(1, config);
    session.start();
    assert_eq!(session.state.seed, 11);

    assert!(session.handle_key("ArrowDown"));
    assert_eq!(session.state.avatar(), Vec2::new(50.0, 55.0));
}
