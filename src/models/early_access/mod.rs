// Early access request/response models
// Immutable values exchanged with the submission endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyAccessRequest {
    pub full_name: String,
    pub email: String,
    pub institution: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyAccessResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_and_omits_missing_referral() {
        let request = EarlyAccessRequest {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.org".to_string(),
            institution: "Analytical Society".to_string(),
            role: "Researcher".to_string(),
            referral_code: None,
            agree_to_terms: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["agreeToTerms"], true);
        assert!(json.get("referralCode").is_none());
    }

    #[test]
    fn response_access_code_is_optional() {
        let response: EarlyAccessResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.access_code, None);
    }
}
