use crate::error::FormError;

/// Label shown on the submit button while the contact form is "sending".
pub const SENDING_LABEL_HTML: &str = r#"<span class="loading-spinner"></span> Envoi..."#;
pub const SENT_MESSAGE: &str = "Message envoyé avec succès!";

/// Simulated submission state of the contact form.
///
/// No request is made; the form stays busy for a fixed delay and then
/// always succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
}

impl FormPhase {
    pub fn begin(&mut self) -> Result<(), FormError> {
        match self {
            FormPhase::Idle => {
                *self = FormPhase::Sending;
                Ok(())
            }
            FormPhase::Sending => Err(FormError::AlreadySending),
        }
    }

    pub fn finish(&mut self) -> Result<(), FormError> {
        match self {
            FormPhase::Sending => {
                *self = FormPhase::Idle;
                Ok(())
            }
            FormPhase::Idle => Err(FormError::NotSending),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, FormPhase::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_phase_transitions() {
        let mut phase = FormPhase::default();
        assert!(phase.begin().is_ok());
        assert!(phase.is_sending());
        assert_eq!(phase.begin(), Err(FormError::AlreadySending));
        assert!(phase.finish().is_ok());
        assert_eq!(phase.finish(), Err(FormError::NotSending));
        assert!(!phase.is_sending());
    }
}
