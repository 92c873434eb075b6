use serde::{Deserialize, Serialize};

pub const PHASE_RESET_MS: u32 = 3_000;

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ContactPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub phase: ContactPhase,
}

impl ContactForm {
    /// Accepts the submit only from `Idle`; repeated triggers while a
    /// request is in flight are ignored.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != ContactPhase::Idle {
            return false;
        }

        self.phase = ContactPhase::Submitting;
        true
    }

    /// Success clears the fields; failure keeps them so the sender can
    /// retry without retyping.
    pub fn complete_submit(&mut self, succeeded: bool) {
        if self.phase != ContactPhase::Submitting {
            return;
        }

        if succeeded {
            self.fields = ContactMessage::default();
            self.phase = ContactPhase::Submitted;
        } else {
            self.phase = ContactPhase::Error;
        }
    }

    /// Returns the terminal banners to the idle form after the display
    /// window elapses.
    pub fn reset_phase(&mut self) {
        if matches!(self.phase, ContactPhase::Submitted | ContactPhase::Error) {
            self.phase = ContactPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn whitespace_only_fields_do_not_satisfy_presence() {
        let mut fields = filled_fields();
        assert!(fields.has_required_fields());

        fields.email = "   ".to_string();
        assert!(!fields.has_required_fields());
    }

    #[test]
    fn successful_submission_clears_fields_and_returns_to_idle() {
        let mut form = ContactForm {
            fields: filled_fields(),
            phase: ContactPhase::Idle,
        };

        assert!(form.begin_submit());
        assert_eq!(form.phase, ContactPhase::Submitting);

        form.complete_submit(true);
        assert_eq!(form.phase, ContactPhase::Submitted);
        assert_eq!(form.fields, ContactMessage::default());

        form.reset_phase();
        assert_eq!(form.phase, ContactPhase::Idle);
    }

    #[test]
    fn failed_submission_preserves_fields_for_retry() {
        let mut form = ContactForm {
            fields: filled_fields(),
            phase: ContactPhase::Idle,
        };

        assert!(form.begin_submit());
        form.complete_submit(false);

        assert_eq!(form.phase, ContactPhase::Error);
        assert_eq!(form.fields, filled_fields());

        form.reset_phase();
        assert_eq!(form.phase, ContactPhase::Idle);
        assert_eq!(form.fields, filled_fields());
    }

    #[test]
    fn concurrent_submits_are_ignored_while_in_flight() {
        let mut form = ContactForm {
            fields: filled_fields(),
            phase: ContactPhase::Idle,
        };

        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.phase, ContactPhase::Submitting);
    }

    #[test]
    fn completion_is_only_honored_while_submitting() {
        let mut form = ContactForm::default();

        form.complete_submit(true);
        assert_eq!(form.phase, ContactPhase::Idle);

        form.reset_phase();
        assert_eq!(form.phase, ContactPhase::Idle);
    }
}
