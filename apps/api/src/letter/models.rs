use serde::{Deserialize, Serialize};

/// Raw request body for `POST /api/generate-letter`.
///
/// Every field is optional on the wire; `validation::validate_form` decides
/// which ones are required and turns this into an `ApplicantInput`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub company_name: Option<String>,
    pub motivation: Option<String>,
    pub skills: Option<String>,
    pub address: Option<String>,
    pub education: Option<String>,
    pub major: Option<String>,
    pub internship_company: Option<String>,
    pub project_experience: Option<String>,
}

/// Validated applicant details. Required fields are non-blank and trimmed;
/// optional fields are `Some` only when they carry text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInput {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    /// Comma-separated, e.g. `"React, Node.js, SQL"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internship_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_experience: Option<String>,
}

/// Success body: the rendered letter plus an echo of the input it was built from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLetterResponse {
    pub success: bool,
    #[serde(rename = "letterHTML")]
    pub letter_html: String,
    pub data: ApplicantInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_deserializes_camel_case_and_nulls() {
        let json = r#"{
            "fullName": "Dewi Lestari",
            "email": "dewi@example.com",
            "phoneNumber": "08123456789",
            "position": "Backend Developer",
            "companyName": "PT Maju Jaya",
            "internshipCompany": "PT Telkom",
            "motivation": null
        }"#;

        let form: LetterForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.full_name.as_deref(), Some("Dewi Lestari"));
        assert_eq!(form.internship_company.as_deref(), Some("PT Telkom"));
        assert!(form.motivation.is_none());
        assert!(form.skills.is_none());
    }

    #[test]
    fn test_form_accepts_empty_object() {
        let form: LetterForm = serde_json::from_str("{}").unwrap();
        assert!(form.full_name.is_none());
    }

    #[test]
    fn test_response_uses_letter_html_key_and_omits_absent_fields() {
        let response = GenerateLetterResponse {
            success: true,
            letter_html: "<div></div>".to_string(),
            data: ApplicantInput {
                full_name: "Dewi Lestari".to_string(),
                email: "dewi@example.com".to_string(),
                phone_number: "08123456789".to_string(),
                position: "Backend Developer".to_string(),
                company_name: "PT Maju Jaya".to_string(),
                motivation: None,
                skills: Some("Rust".to_string()),
                address: None,
                education: None,
                major: None,
                internship_company: None,
                project_experience: None,
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["letterHTML"], "<div></div>");
        assert_eq!(value["data"]["phoneNumber"], "08123456789");
        assert_eq!(value["data"]["skills"], "Rust");
        assert!(value["data"].get("motivation").is_none());
    }
}
