//! Integration test: the facade prelude covers an end-to-end session.

use tilelife::prelude::*;
use tilelife_test_utils::{CountingPower, RecordingScreen, ScriptedInput};

#[test]
fn seed_run_save_restore() {
    let config = EngineConfig::default().with_strategy(PartitionStrategy::Block { rows: 30, cols: 25 });
    let mut world = World::new(config, RecordingScreen::new()).unwrap();
    let glider = Pattern::parse("!glider\n.O.\n..O\nOOO").unwrap();
    world.stamp(&glider, 26, 20);

    let mut slots = MemorySlots::new();
    world.save_to(&mut slots, "start").unwrap();

    let mut input = ScriptedInput::new([
        Some(Action::Start),
        None,
        None,
        Some(Action::Stop),
        Some(Action::Step),
    ]);
    let mut power = CountingPower::default();
    let summary = Session::new(&mut world).run(&mut input, &mut power);
    assert_eq!(summary.final_generation, Generation(4));
    assert!(glider.matches_at(world.plane(), 27, 21));

    world.load_from(&slots, "start").unwrap();
    assert!(glider.matches_at(world.plane(), 26, 20));
}

#[test]
fn text_screen_draws_the_device_grid() {
    let mut world = World::new(EngineConfig::default(), TextScreen::new(Vec::new())).unwrap();
    world.set_cell(0, 0, true);
    world.redraw();
    let (_, screen) = world.into_parts();
    let text = String::from_utf8(screen.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // 64 rows and a blank separator line.
    assert_eq!(lines.len(), 65);
    assert_eq!(lines[0].len(), 96);
    assert!(lines[0].starts_with("#."));
}

#[test]
fn rule_and_strategy_errors_surface() {
    assert!(matches!("B3/S23x".parse::<Rule>(), Err(_)));
    let bad = EngineConfig::new(10, 10).with_strategy(PartitionStrategy::Strip { rows: 1 });
    assert!(matches!(StepEngine::new(bad), Err(ConfigError::StripTooShort { rows: 1 })));
}
