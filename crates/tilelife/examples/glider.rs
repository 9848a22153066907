//! Run a glider across the device screen and print each generation.
//!
//! ```text
//! cargo run -p tilelife --example glider -- [generations]
//! ```

use std::io;

use tilelife::prelude::*;

/// Starts immediately and quits after a fixed number of polls.
struct Countdown {
    remaining: u64,
    started: bool,
}

impl Input for Countdown {
    fn poll(&mut self) -> Option<Action> {
        if !self.started {
            self.started = true;
            return Some(Action::Start);
        }
        if self.remaining <= 1 {
            return Some(Action::Quit);
        }
        self.remaining -= 1;
        None
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let generations = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 8,
    };

    let glider = Pattern::parse(".O.\n..O\nOOO")?;
    let mut world = World::new(EngineConfig::default(), TextScreen::new(io::stdout().lock()))?;
    world.stamp(&glider, 1, 1);

    let mut input = Countdown {
        remaining: generations,
        started: false,
    };
    let summary = Session::new(&mut world).run(&mut input, &mut NoPower);

    eprintln!(
        "{} generations, {} live cells, {} frames",
        summary.final_generation,
        world.plane().population(),
        world.screen().frames()
    );
    Ok(())
}
