use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::components::EditProposal;
use super::FieldState;

impl FieldState {
    /// Translates a terminal key event into core operations. All text
    /// mutation goes through `propose_text_change`; this adapter adds no
    /// semantics of its own. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.is_focused() {
            return false;
        }
        match key.code {
            KeyCode::Enter => {
                self.propose_text_change(&EditProposal::insert(
                    self.raw_text().chars().count(),
                    "\n",
                ));
                true
            }
            KeyCode::Up => self.step_picker(-1),
            KeyCode::Down => self.step_picker(1),
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                let end = self.raw_text().chars().count();
                self.propose_text_change(&EditProposal::insert(end, ch.to_string()));
                true
            }
            KeyCode::Backspace => {
                let end = self.raw_text().chars().count();
                if end > 0 {
                    self.propose_text_change(&EditProposal::delete(end - 1..end));
                }
                true
            }
            KeyCode::Delete => {
                let end = self.raw_text().chars().count();
                if end > 0 {
                    self.propose_text_change(&EditProposal::delete(0..end));
                }
                true
            }
            _ => false,
        }
    }

    fn step_picker(&mut self, delta: i32) -> bool {
        self.component.step_picker(&self.def, &mut self.raw, delta)
    }
}
