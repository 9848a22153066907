//! Outside collaborators: the screen, the input source and the power hook.
//!
//! The engine never touches hardware. Whatever shows the plane, reads keys or
//! drives a busy indicator plugs in through these traits.

use std::io;

use tilelife_core::BitPlane;

// ── Screen ─────────────────────────────────────────────────────────

/// Something that can show a whole plane.
pub trait Screen {
    /// Redraw the full plane.
    fn redraw(&mut self, plane: &BitPlane);
}

/// A screen that shows nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScreen;

impl Screen for NullScreen {
    fn redraw(&mut self, _plane: &BitPlane) {}
}

/// Renders each frame as `#`/`.` text, followed by a blank line.
///
/// Write errors are logged and swallowed; a broken pipe does not stop the
/// simulation.
#[derive(Debug)]
pub struct TextScreen<W: io::Write> {
    out: W,
    frames: u64,
}

impl<W: io::Write> TextScreen<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames successfully written.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, plane: &BitPlane) -> io::Result<()> {
        writeln!(self.out, "{plane}")?;
        self.out.flush()
    }
}

impl<W: io::Write> Screen for TextScreen<W> {
    fn redraw(&mut self, plane: &BitPlane) {
        match self.write_frame(plane) {
            Ok(()) => self.frames += 1,
            Err(e) => tracing::warn!(error = %e, "text screen redraw failed"),
        }
    }
}

// ── Input ──────────────────────────────────────────────────────────

/// User commands, polled between whole steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Run continuously.
    Start,
    /// Pause.
    Stop,
    /// Advance one generation while paused.
    Step,
    /// End the session.
    Quit,
}

/// Non-blocking source of [`Action`]s.
pub trait Input {
    /// The next pending action, if any.
    fn poll(&mut self) -> Option<Action>;
}

// ── PowerHook ──────────────────────────────────────────────────────

/// Busy indicator and idle hook.
///
/// Both methods default to doing nothing.
pub trait PowerHook {
    /// Called with `true` when continuous running begins and `false` when it
    /// ends.
    fn set_busy(&mut self, _busy: bool) {}

    /// Called on every poll while paused.
    fn idle(&mut self) {}
}

/// A power hook that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPower;

impl PowerHook for NoPower {}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn text_screen_renders_rows() {
        let mut plane = BitPlane::new(2, 3).unwrap();
        plane.set(0, 1, true);
        plane.set(1, 2, true);
        let mut screen = TextScreen::new(Vec::new());
        screen.redraw(&plane);
        assert_eq!(screen.frames(), 1);
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert_eq!(text, format!("{plane}\n"));
        assert!(text.starts_with(".#.\n..#"));
    }

    #[test]
    fn text_screen_swallows_write_errors() {
        let plane = BitPlane::new(1, 1).unwrap();
        let mut screen = TextScreen::new(BrokenPipe);
        screen.redraw(&plane);
        assert_eq!(screen.frames(), 0);
    }
}
