// Modal system for TUI overlays
//
// Self-contained dialogs that handle their own input and return actions.
// App just holds Option<Modal>; input routing acts on the returned action.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal without acting
    Close,
    /// The user confirmed the pending action
    Confirm,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - keyboard shortcuts
    Help,
    /// Recent application logs
    Logs,
    /// Destructive-action confirmation ("Delete <title>?")
    Confirm {
        title: String,
        action: ConfirmAction,
    },
}

/// What a confirmation applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteEvent { event_id: String },
    CancelRegistration { registration_id: String },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn logs() -> Self {
        Modal::Logs
    }

    pub fn confirm_delete_event(event_id: impl Into<String>, title: impl Into<String>) -> Self {
        Modal::Confirm {
            title: format!("Delete \"{}\"?", title.into()),
            action: ConfirmAction::DeleteEvent {
                event_id: event_id.into(),
            },
        }
    }

    pub fn confirm_cancel_registration(
        registration_id: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Modal::Confirm {
            title: format!("Cancel registration for {}?", user_name.into()),
            action: ConfirmAction::CancelRegistration {
                registration_id: registration_id.into(),
            },
        }
    }

    /// Handle keyboard input, return the action for the caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::Logs => match key {
                KeyCode::Esc | KeyCode::Char('!') | KeyCode::Char('q') | KeyCode::Enter => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::Confirm { .. } => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ModalAction::Confirm,
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_escape_and_question_mark() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
    }

    #[test]
    fn confirm_distinguishes_yes_and_no() {
        let mut modal = Modal::confirm_delete_event("4", "Startup Pitch Competition");
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::Confirm);
        assert_eq!(modal.handle_input(KeyCode::Char('n')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('z')), ModalAction::None);
    }
}
