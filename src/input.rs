/// Keyboard state tracking: turns a stream of crossterm key events into one
/// [`Input`] snapshot per frame.
///
/// Instead of acting on each event as it arrives we remember the frame in
/// which every key was last seen (press or repeat).  A key counts as held
/// while that record is younger than the hold window.  This works on two
/// classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, so keys drop out on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows up as
///   repeated presses).  Keys expire after the hold window of silence, which
///   is shorter than the OS repeat interval.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Input;

/// Frames a key stays held after its last press/repeat event.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Debug)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    hold_window: u64,
    fire_pending: bool,
    quit: bool,
}

impl Default for KeyTracker {
    fn default() -> Self {
        KeyTracker::new(HOLD_WINDOW)
    }
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        KeyTracker {
            key_frame: HashMap::new(),
            hold_window,
            fire_pending: false,
            quit: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Record one key event observed during `frame`.
    pub fn handle(&mut self, event: &KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(event.code, frame);
                match event.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Char(' ') => self.fire_pending = true,
                    _ => {}
                }
            }
            // Repeat keeps a key held but never fires again.
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|key| self.is_held(key, frame))
    }

    /// The input for `frame`. A fire press is consumed by the first snapshot
    /// that sees it.
    pub fn snapshot(&mut self, frame: u64) -> Input {
        let left = self.any_held(
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        );
        let right = self.any_held(
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        );
        let fire = std::mem::take(&mut self.fire_pending);
        Input { left, right, fire }
    }
}
