// src/domain/form/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::form::value_objects::{FormId, FormName, FormSlug, FormStatus, Questions};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct Form {
    pub id: FormId,
    pub name: FormName,
    pub slug: FormSlug,
    pub created_by: String,
    pub questions: Questions,
    pub status: FormStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    pub fn is_published(&self) -> bool {
        self.status == FormStatus::Published
    }

    pub fn is_owned_by(&self, subject: &str) -> bool {
        self.created_by == subject
    }

    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.questions.is_empty() {
            return Err(DomainError::Validation(
                "a form needs at least one question before it can be published".into(),
            ));
        }
        self.status = FormStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = FormStatus::Draft;
        self.published_at = None;
        self.updated_at = now;
    }

    /// Check a set of answers, keyed by question id, against this form.
    pub fn validate_answers(&self, answers: &Map<String, Value>) -> DomainResult<()> {
        if let Some(unknown) = answers
            .keys()
            .find(|key| self.questions.get(key).is_none())
        {
            return Err(DomainError::Validation(format!(
                "unknown question `{unknown}`"
            )));
        }

        for question in self.questions.as_slice().iter().filter(|q| q.required) {
            let answered = match answers.get(&question.id) {
                None | Some(Value::Null) => false,
                Some(Value::String(text)) => !text.trim().is_empty(),
                Some(Value::Array(items)) => !items.is_empty(),
                Some(_) => true,
            };
            if !answered {
                return Err(DomainError::Validation(format!(
                    "question `{}` requires an answer",
                    question.id
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewForm {
    pub id: FormId,
    pub name: FormName,
    pub slug: FormSlug,
    pub created_by: String,
    pub questions: Questions,
    pub status: FormStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New publish state for an existing form.
#[derive(Debug, Clone)]
pub struct FormPublication {
    pub id: FormId,
    pub status: FormStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Form> for FormPublication {
    fn from(form: &Form) -> Self {
        Self {
            id: form.id,
            status: form.status,
            published_at: form.published_at,
            updated_at: form.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::value_objects::Question;
    use serde_json::json;

    fn form_with(questions: Vec<Question>) -> Form {
        let now = Utc::now();
        Form {
            id: FormId::generate(),
            name: FormName::new("Feedback").unwrap(),
            slug: FormSlug::new("feedback").unwrap(),
            created_by: "alice".into(),
            questions: Questions::new(questions).unwrap(),
            status: FormStatus::Draft,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn question(id: &str, required: bool) -> Question {
        Question {
            id: id.into(),
            kind: "text".into(),
            label: id.to_uppercase(),
            required,
        }
    }

    fn answers(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn publish_requires_questions() {
        let mut empty = form_with(vec![]);
        assert!(empty.publish(Utc::now()).is_err());

        let mut form = form_with(vec![question("q1", false)]);
        let now = Utc::now();
        form.publish(now).unwrap();
        assert!(form.is_published());
        assert_eq!(form.published_at, Some(now));

        form.unpublish(now);
        assert!(!form.is_published());
        assert!(form.published_at.is_none());
    }

    #[test]
    fn answers_must_cover_required_questions() {
        let form = form_with(vec![question("name", true), question("note", false)]);

        assert!(form.validate_answers(&answers(json!({"name": "Ada"}))).is_ok());
        assert!(form.validate_answers(&answers(json!({"note": "hi"}))).is_err());
        assert!(form.validate_answers(&answers(json!({"name": "  "}))).is_err());
        assert!(form.validate_answers(&answers(json!({"name": null}))).is_err());
    }

    #[test]
    fn answers_reject_unknown_questions() {
        let form = form_with(vec![question("name", false)]);
        let err = form
            .validate_answers(&answers(json!({"age": 3})))
            .unwrap_err();
        assert!(err.to_string().contains("unknown question `age`"));
    }
}
