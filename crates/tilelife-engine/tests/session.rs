//! Integration test: the interactive loop against mock collaborators.

use tilelife_core::Generation;
use tilelife_engine::{Action, EngineConfig, RunState, Session, SessionSummary, World};
use tilelife_test_utils::fixtures::{blinker, blinker_vertical};
use tilelife_test_utils::{CountingPower, RecordingScreen, ScriptedInput};

fn blinker_world() -> World<RecordingScreen> {
    let mut world = World::new(EngineConfig::new(8, 8), RecordingScreen::new()).unwrap();
    for &(r, c) in blinker().cells() {
        world.set_cell(3 + r, 2 + c, true);
    }
    world
}

#[test]
fn quit_while_paused_never_steps() {
    let mut world = blinker_world();
    let mut input = ScriptedInput::new([None, None, Some(Action::Quit)]);
    let mut power = CountingPower::default();
    let summary = Session::new(&mut world).run(&mut input, &mut power);

    assert_eq!(
        summary,
        SessionSummary {
            steps: 0,
            polls: 3,
            final_generation: Generation(0),
        }
    );
    assert_eq!(power.idles, 2);
    assert_eq!(power.busy_on, 0);
    // The seed is drawn once up front.
    assert_eq!(world.screen().frames.len(), 1);
}

#[test]
fn single_steps_redraw_each_generation() {
    let mut world = blinker_world();
    let mut input = ScriptedInput::new([Some(Action::Step), None, Some(Action::Step)]);
    let summary = Session::new(&mut world).run(&mut input, &mut CountingPower::default());

    assert_eq!(summary.steps, 2);
    let frames = &world.screen().frames;
    assert_eq!(frames.len(), 3);
    assert!(blinker().matches_at(&frames[0], 3, 2));
    assert!(blinker_vertical().matches_at(&frames[1], 2, 3));
    assert!(blinker().matches_at(&frames[2], 3, 2));
}

#[test]
fn running_steps_every_poll_until_stopped() {
    let mut world = blinker_world();
    let mut input = ScriptedInput::new([
        Some(Action::Start),
        None,
        None,
        Some(Action::Stop),
        None,
        Some(Action::Start),
        Some(Action::Quit),
    ]);
    let mut power = CountingPower::default();
    let summary = Session::new(&mut world).run(&mut input, &mut power);

    // Start + two idle polls, then Start again.
    assert_eq!(summary.steps, 4);
    assert_eq!(summary.final_generation, Generation(4));
    assert_eq!(world.generation(), Generation(4));
    assert_eq!(power.busy_on, 2);
    assert_eq!(power.busy_off, 2);
    // Stop and the empty poll after it.
    assert_eq!(power.idles, 2);
}

#[test]
fn exhausted_input_ends_the_session() {
    let mut world = blinker_world();
    let mut input = ScriptedInput::new([Some(Action::Start)]);
    let summary = Session::new(&mut world).run(&mut input, &mut CountingPower::default());
    assert_eq!(summary.steps, 1);
    assert_eq!(input.polls(), 2);
}

#[test]
fn handle_reports_state() {
    let mut world = blinker_world();
    let mut session = Session::new(&mut world);
    session.handle(Some(Action::Start));
    assert_eq!(session.state(), RunState::Running);
    session.handle(Some(Action::Quit));
    assert_eq!(session.state(), RunState::Done);
    assert!(!session.handle(Some(Action::Start)));
    assert_eq!(session.world().generation(), Generation(1));
}
