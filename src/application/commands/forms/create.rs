// src/application/commands/forms/create.rs
use super::FormCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CreateFormResultDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        form::{FormId, FormName, FormSlug, FormStatus, NewForm, Question, Questions},
    },
};
use uuid::Uuid;

/// How many times a derived slug is re-allocated after losing an insert race.
pub const MAX_SLUG_ATTEMPTS: usize = 3;

pub struct CreateFormCommand {
    pub form_id: Option<Uuid>,
    pub name: String,
    pub slug: Option<String>,
    pub questions: Vec<Question>,
    pub publish: bool,
}

impl CreateFormCommand {
    pub fn builder() -> CreateFormCommandBuilder {
        CreateFormCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateFormCommandBuilder {
    form_id: Option<Uuid>,
    name: Option<String>,
    slug: Option<String>,
    questions: Vec<Question>,
    publish: bool,
}

impl CreateFormCommandBuilder {
    pub fn form_id(mut self, form_id: Uuid) -> Self {
        self.form_id = Some(form_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreateFormCommand, &'static str> {
        Ok(CreateFormCommand {
            form_id: self.form_id,
            name: self.name.ok_or("name is required")?,
            slug: self.slug,
            questions: self.questions,
            publish: self.publish,
        })
    }
}

impl FormCommandService {
    pub async fn create_form(
        &self,
        actor: &AuthenticatedUser,
        command: CreateFormCommand,
    ) -> ApplicationResult<CreateFormResultDto> {
        let CreateFormCommand {
            form_id,
            name,
            slug,
            questions,
            publish,
        } = command;

        let name = FormName::new(name)?;
        let questions = Questions::new(questions)?;
        if publish && questions.is_empty() {
            return Err(ApplicationError::validation(
                "a form needs at least one question before it can be published",
            ));
        }
        let explicit_slug = slug
            .filter(|slug| !slug.trim().is_empty())
            .map(FormSlug::new)
            .transpose()?;

        let id = form_id.map_or_else(FormId::generate, FormId::from);
        let now = self.clock.now();
        let (status, published_at) = if publish {
            (FormStatus::Published, Some(now))
        } else {
            (FormStatus::Draft, None)
        };

        let mut attempt = 0;
        let created = loop {
            attempt += 1;
            let slug = match &explicit_slug {
                Some(slug) => slug.clone(),
                None => self.slug_service.generate_unique_slug(&name).await?,
            };

            let new_form = NewForm {
                id,
                name: name.clone(),
                slug,
                created_by: actor.subject.clone(),
                questions: questions.clone(),
                status,
                published_at,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_form).await {
                Ok(form) => break form,
                Err(DomainError::DuplicateSlug(taken))
                    if explicit_slug.is_none() && attempt < MAX_SLUG_ATTEMPTS =>
                {
                    tracing::warn!(slug = %taken, attempt, "slug claimed concurrently, allocating again");
                }
                Err(DomainError::DuplicateSlug(taken)) => {
                    return Err(ApplicationError::conflict(format!(
                        "slug `{taken}` is already in use"
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        };

        tracing::info!(
            form_id = %created.id,
            form_slug = %created.slug,
            created_by = %created.created_by,
            "form created"
        );

        let message = if created.is_published() {
            "Form saved and published"
        } else {
            "Form saved as draft"
        };

        Ok(CreateFormResultDto {
            success: true,
            form_id: created.id.into(),
            edit_url: self.edit_url(&created.slug),
            form_slug: created.slug.into_inner(),
            message: message.to_owned(),
            created_at: created.created_at,
        })
    }
}
