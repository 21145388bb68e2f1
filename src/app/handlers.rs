//! Keyboard input handlers for the application

use crossterm::event::KeyCode;

use skiphire::wizard::Panel;

use super::App;

impl App {
    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        // Handle exit confirmation dialog
        if self.show_exit_confirm {
            match key {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.show_exit_confirm = false;
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.show_exit_confirm = true;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.theme.toggle();
            }
            // Step indicator: jump back to a completed step
            KeyCode::Char(c @ '1'..='6') => {
                if let Some(target) = c.to_digit(10) {
                    self.wizard.go_to(target as u8);
                }
            }
            KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
                self.wizard.back();
            }
            KeyCode::Enter => {
                if self.wizard.can_continue() {
                    self.wizard.advance();
                }
            }
            _ => {
                if self.wizard.panel() == Panel::SelectSkip {
                    self.handle_grid_key(key);
                }
            }
        }
    }

    /// Card grid navigation and selection
    fn handle_grid_key(&mut self, key: KeyCode) {
        // Step content is inert until the catalog arrives
        if self.wizard.is_loading() {
            return;
        }

        let count = self.wizard.catalog().len();
        match key {
            KeyCode::Left | KeyCode::Char('h') => self.cursor.left(),
            KeyCode::Right | KeyCode::Char('l') => self.cursor.right(count),
            KeyCode::Up | KeyCode::Char('k') => self.cursor.up(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.down(count),
            KeyCode::Char(' ') => {
                self.wizard.toggle_select_at(self.cursor.index());
            }
            _ => {}
        }
    }
}
