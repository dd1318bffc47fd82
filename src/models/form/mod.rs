// Early access form model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::early_access::EarlyAccessRequest;

/// Text fields of the early access form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    FullName,
    Email,
    Institution,
    Role,
    ReferralCode,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::FullName,
        FormField::Email,
        FormField::Institution,
        FormField::Role,
        FormField::ReferralCode,
    ];

    /// Human readable label, used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full name",
            FormField::Email => "Email",
            FormField::Institution => "Institution",
            FormField::Role => "Role",
            FormField::ReferralCode => "Referral code",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::ReferralCode)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "fullname" | "full_name" => Ok(FormField::FullName),
            "email" => Ok(FormField::Email),
            "institution" => Ok(FormField::Institution),
            "role" => Ok(FormField::Role),
            "referral" | "referralcode" | "referral_code" => Ok(FormField::ReferralCode),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

/// Field values, per-field errors and submission lifecycle flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub institution: String,
    pub role: String,
    pub referral_code: String,
    pub agree_to_terms: bool,

    pub full_name_error: Option<String>,
    pub email_error: Option<String>,
    pub institution_error: Option<String>,
    pub role_error: Option<String>,

    pub is_submitting: bool,
    pub show_success_dialog: bool,
    pub success_message: String,
    pub access_code: Option<String>,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Institution => &self.institution,
            FormField::Role => &self.role,
            FormField::ReferralCode => &self.referral_code,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Institution => &mut self.institution,
            FormField::Role => &mut self.role,
            FormField::ReferralCode => &mut self.referral_code,
        }
    }

    /// Error slot for a field. The referral code is optional and has none.
    pub fn error_mut(&mut self, field: FormField) -> Option<&mut Option<String>> {
        match field {
            FormField::FullName => Some(&mut self.full_name_error),
            FormField::Email => Some(&mut self.email_error),
            FormField::Institution => Some(&mut self.institution_error),
            FormField::Role => Some(&mut self.role_error),
            FormField::ReferralCode => None,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FullName => self.full_name_error.as_deref(),
            FormField::Email => self.email_error.as_deref(),
            FormField::Institution => self.institution_error.as_deref(),
            FormField::Role => self.role_error.as_deref(),
            FormField::ReferralCode => None,
        }
    }

    /// Aggregate validity used by the submit path.
    ///
    /// Institution and role errors are deliberately not consulted here; only
    /// their blankness is.
    pub fn is_form_valid(&self) -> bool {
        !is_blank(&self.full_name)
            && !is_blank(&self.email)
            && !is_blank(&self.institution)
            && !is_blank(&self.role)
            && self.agree_to_terms
            && self.full_name_error.is_none()
            && self.email_error.is_none()
    }

    /// Builds the request sent to the endpoint. A blank referral code is
    /// sent as absent.
    pub fn to_request(&self) -> EarlyAccessRequest {
        EarlyAccessRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            institution: self.institution.clone(),
            role: self.role.clone(),
            referral_code: if is_blank(&self.referral_code) {
                None
            } else {
                Some(self.referral_code.clone())
            },
            agree_to_terms: self.agree_to_terms,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
