/// Input adapter: crossterm key events to player intent and fire requests.
///
/// Handlers only set the intent and append a bullet through
/// [`crate::game`]; they never touch the enemy list.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → intent is cleared on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  A direction key that has not been refreshed within
///   `HOLD_WINDOW` counts as released.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::DEFAULT_FPS;
use crate::entities::{Direction, GameState};
use crate::game::{fire, set_intent};

/// Two key-repeat intervals at the slowest common OS rate (15 Hz).
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Whole frames of `frame` length needed to cover [`HOLD_WINDOW`], at least one.
pub fn hold_frames(frame: Duration) -> u64 {
    let frame = frame.as_nanos().max(1);
    let frames = HOLD_WINDOW.as_nanos().div_ceil(frame);
    u64::try_from(frames).unwrap_or(u64::MAX).max(1)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub fire: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
    pub restart: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::Left],
            right: vec![KeyCode::Right],
            fire: vec![KeyCode::Char(' ')],
            quit: vec![KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc],
            restart: vec![KeyCode::Char('r'), KeyCode::Char('R')],
        }
    }
}

/// What the host should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Continue,
    Quit,
    /// Only produced while the session is over.
    Restart,
}

#[derive(Debug)]
pub struct InputAdapter {
    bindings: KeyBindings,
    /// Each held direction key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    hold_frames: u64,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(KeyBindings::default(), Duration::from_secs(1) / DEFAULT_FPS)
    }
}

impl InputAdapter {
    /// `frame` is the host's frame length; the hold window is converted to
    /// frames with it.
    pub fn new(bindings: KeyBindings, frame: Duration) -> Self {
        Self { bindings, key_frame: HashMap::new(), frame: 0, hold_frames: hold_frames(frame) }
    }

    pub fn hold_frames(&self) -> u64 {
        self.hold_frames
    }

    fn direction_of(&self, code: &KeyCode) -> Option<Direction> {
        if self.bindings.left.contains(code) {
            Some(Direction::Left)
        } else if self.bindings.right.contains(code) {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn handle_key(&mut self, state: &mut GameState, event: &KeyEvent) -> InputCommand {
        let code = event.code;

        if event.kind == KeyEventKind::Press {
            if self.bindings.quit.contains(&code)
                || (code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL))
            {
                return InputCommand::Quit;
            }
            if state.is_over() && self.bindings.restart.contains(&code) {
                self.key_frame.clear();
                return InputCommand::Restart;
            }
        }

        if let Some(direction) = self.direction_of(&code) {
            match event.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.key_frame.insert(code, self.frame);
                    set_intent(state, direction);
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                    set_intent(state, Direction::None);
                }
            }
        } else if self.bindings.fire.contains(&code)
            && matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat)
            && !state.is_over()
        {
            fire(state);
        }

        InputCommand::Continue
    }

    /// Call once per frame after draining events.  Expires direction keys
    /// that have gone quiet and clears the intent if none is left held.
    pub fn end_frame(&mut self, state: &mut GameState) {
        let (frame, window) = (self.frame, self.hold_frames);
        let before = self.key_frame.len();
        self.key_frame
            .retain(|_, &mut last| frame.saturating_sub(last) <= window);
        if before > 0 && self.key_frame.is_empty() {
            set_intent(state, Direction::None);
        }
        self.frame += 1;
    }
}
