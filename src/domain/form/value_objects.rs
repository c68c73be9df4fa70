// src/domain/form/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::form::slug;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

const MAX_FORM_NAME_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(Uuid);

impl FormId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for FormId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<FormId> for Uuid {
    fn from(value: FormId) -> Self {
        value.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormName(String);

impl FormName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("form name cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_FORM_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "form name must be at most {MAX_FORM_NAME_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-empty slug already in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormSlug(String);

impl FormSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !slug::is_canonical(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` may only contain lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FormSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FormSlug> for String {
    fn from(value: FormSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Draft,
    Published,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(DomainError::Validation(format!(
                "unknown form status `{other}`"
            ))),
        }
    }
}

/// One question of a form. `kind` is free-form and interpreted by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

impl Question {
    fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::Validation("question id cannot be empty".into()));
        }
        if self.kind.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "question `{}` must have a type",
                self.id
            )));
        }
        if self.label.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "question `{}` must have a label",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Questions(Vec<Question>);

impl Questions {
    pub fn new(questions: Vec<Question>) -> DomainResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for question in &questions {
            question.validate()?;
            if !seen.insert(question.id.as_str()) {
                return Err(DomainError::Validation(format!(
                    "duplicate question id `{}`",
                    question.id
                )));
            }
        }
        Ok(Self(questions))
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.0.iter().find(|q| q.id == id)
    }

    pub fn into_inner(self) -> Vec<Question> {
        self.0
    }
}
