use bloktris::application_state::input_manager::InputManager;
use bloktris::application_state::input_state::{binding, KeyAction};
use bloktris::engine_state::EngineState;
use bloktris::{Axis, Command, GameConfig, GameStatus};
use web_time::{Duration, Instant};
use winit::keyboard::KeyCode;

fn engine(now: Instant) -> EngineState {
    let config = GameConfig {
        seed: Some(5),
        tick_interval_ms: 1000,
        ..GameConfig::default()
    };
    EngineState::new(&config, now).unwrap()
}

#[test]
fn bindings_cover_every_command() {
    let expected = [
        (KeyCode::KeyW, Command::Translate { dx: 0, dz: -1 }),
        (KeyCode::KeyS, Command::Translate { dx: 0, dz: 1 }),
        (KeyCode::KeyA, Command::Translate { dx: -1, dz: 0 }),
        (KeyCode::KeyD, Command::Translate { dx: 1, dz: 0 }),
        (KeyCode::ArrowLeft, Command::Rotate { axis: Axis::Y, sign: 1 }),
        (KeyCode::ArrowRight, Command::Rotate { axis: Axis::Y, sign: -1 }),
        (KeyCode::ArrowUp, Command::Rotate { axis: Axis::X, sign: -1 }),
        (KeyCode::ArrowDown, Command::Rotate { axis: Axis::X, sign: 1 }),
        (KeyCode::KeyQ, Command::Rotate { axis: Axis::Z, sign: -1 }),
        (KeyCode::KeyE, Command::Rotate { axis: Axis::Z, sign: 1 }),
    ];
    for (key, command) in expected {
        assert_eq!(binding(key), Some(KeyAction::Game(command)), "{:?}", key);
    }
    assert_eq!(binding(KeyCode::Space), Some(KeyAction::Play));
    assert_eq!(binding(KeyCode::Enter), Some(KeyAction::Play));
    assert_eq!(binding(KeyCode::KeyP), Some(KeyAction::Pause));
    assert_eq!(binding(KeyCode::Escape), Some(KeyAction::Exit));
}

#[test]
fn rotation_commands_are_quarter_turns_about_one_axis() {
    assert_eq!(
        Command::rotation_angle(Axis::Y, 1),
        cgmath::Vector3::new(0, 90, 0)
    );
    assert_eq!(
        Command::rotation_angle(Axis::X, -1),
        cgmath::Vector3::new(-90, 0, 0)
    );
    assert_eq!(
        Command::rotation_angle(Axis::Z, 3),
        cgmath::Vector3::new(0, 0, 90)
    );
}

#[test]
fn held_key_moves_the_piece_until_released() {
    let start = Instant::now();
    let mut engine = engine(start);
    let mut input = InputManager::new(Duration::from_millis(150));
    engine.play(start);

    let x = engine.game().active_piece().location.x;
    let Some(KeyAction::Game(command)) = input.press(KeyCode::KeyA, start) else {
        panic!("A is not bound to a piece command");
    };
    assert!(engine.dispatch(command));
    assert_eq!(engine.game().active_piece().location.x, x - 1);

    for command in input.due_commands(start + Duration::from_millis(160)) {
        engine.dispatch(command);
    }
    let after_repeat = engine.game().active_piece().location.x;
    assert!(after_repeat <= x - 1);

    input.release(KeyCode::KeyA);
    assert!(input.due_commands(start + Duration::from_secs(2)).is_empty());
}

#[test]
fn pause_and_resume_through_the_engine() {
    let start = Instant::now();
    let mut engine = engine(start);
    assert_eq!(engine.hud().status, GameStatus::Ready);

    engine.play(start);
    assert_eq!(engine.hud().status, GameStatus::Playing);
    assert!(engine.next_deadline().is_some());

    engine.pause(start);
    assert_eq!(engine.hud().status, GameStatus::Paused);
    assert!(engine.next_deadline().is_none());
    assert!(engine.hud().title().contains("paused"));

    engine.play(start);
    assert_eq!(engine.game().status(), GameStatus::Playing);
}
