use crate::models::form::FormField;

/// Discrete user or lifecycle actions interpreted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchingIntent {
    /// Starts (or restarts) the one-second countdown.
    InitializeCountdown,
    /// Recomputes the countdown once from the clock.
    UpdateCountdown,
    UpdateField { field: FormField, value: String },
    UpdateAgreeToTerms(bool),
    Submit,
    ClearError,
    CloseSuccessDialog,
    OpenLink(String),
}

impl LaunchingIntent {
    pub fn update_field(field: FormField, value: impl Into<String>) -> Self {
        Self::UpdateField {
            field,
            value: value.into(),
        }
    }
}

/// One-shot notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchingEffect {
    ShowSuccess(String),
    ShowError(String),
    OpenLink(String),
}
