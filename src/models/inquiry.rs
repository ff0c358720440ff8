use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Raw form submission. Absent keys deserialize as empty strings so a partial
/// body is rejected by validation rather than by the JSON extractor.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub question: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Question,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Question => "Question",
        }
    }

    pub fn labels(fields: &[Field]) -> String {
        fields
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub question: String,
}

impl InquiryForm {
    pub fn validate(self) -> Result<Inquiry, AppError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let question = self.question;

        let missing: Vec<Field> = [
            (Field::Name, name.as_str()),
            (Field::Email, email.as_str()),
            (Field::Question, question.trim()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(missing));
        }

        Ok(Inquiry {
            name,
            email,
            question,
        })
    }
}
