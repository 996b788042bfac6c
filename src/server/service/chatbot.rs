//! Club assistant backed by the Gemini `generateContent` API.

use std::fmt::Write;

use chrono::{NaiveDateTime, Utc};
use entity::{agreement, event, location, post, profile, sea_orm_active_enums::PostStatus, team};
use sea_orm::{ColumnTrait, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::server::{config::Config, error::AppError, service::crud::CrudService};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const INSTRUCTIONS: &str = "Eres un chatbot informativo del club de motociclistas. Responde \
en oraciones completas y en un tono amigable usando la fuente incluida a continuación. No \
menciones la fuente y explica los conceptos complicados de forma sencilla. Si la fuente es \
irrelevante para la pregunta, puedes ignorarla.";

/// Current state of the club as fed to the assistant.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClubSummary {
    /// Team name, location name and number of active members.
    pub teams: Vec<(String, String, u64)>,
    /// Name, start date and meeting point of events that have not started yet.
    pub upcoming_events: Vec<(String, NaiveDateTime, Option<String>)>,
    /// Agreement name and description for agreements flagged active.
    pub agreements: Vec<(String, Option<String>)>,
    /// Titles of published posts.
    pub posts: Vec<String>,
}

impl ClubSummary {
    /// Renders the summary as plain text, one section per family.
    pub fn render(&self) -> String {
        let mut text = String::from("EQUIPOS DEL CLUB:\n");
        for (index, (name, location, members)) in self.teams.iter().enumerate() {
            let _ = writeln!(text, "{}- {} ({}): {} miembros.", index + 1, name, location, members);
        }

        text.push_str("PRÓXIMOS EVENTOS:\n");
        for (index, (name, start, meeting_point)) in self.upcoming_events.iter().enumerate() {
            let _ = write!(text, "{}- {} [{}]", index + 1, name, start.format("%Y-%m-%d %H:%M"));
            match meeting_point {
                Some(point) => {
                    let _ = writeln!(text, ", punto de encuentro: {}.", point);
                }
                None => text.push_str(".\n"),
            }
        }

        text.push_str("CONVENIOS ACTIVOS:\n");
        for (index, (name, description)) in self.agreements.iter().enumerate() {
            let _ = writeln!(
                text,
                "{}- {}: {}.",
                index + 1,
                name,
                description.as_deref().unwrap_or("sin descripción")
            );
        }

        text.push_str("PUBLICACIONES:\n");
        for (index, title) in self.posts.iter().enumerate() {
            let _ = writeln!(text, "{}- {}.", index + 1, title);
        }

        text
    }
}

/// Full prompt sent to the model.
pub fn build_prompt(question: &str, summary: &ClubSummary, asked_at: NaiveDateTime) -> String {
    format!(
        "{}\nPREGUNTA: {}\nFECHA Y HORA DE LA PREGUNTA: {}\nFUENTE:\n{}RESPUESTA:",
        INSTRUCTIONS,
        question.trim(),
        asked_at.format("%Y-%m-%d %H:%M"),
        summary.render()
    )
}

/// Reply used when no Gemini API key is configured.
pub fn simulated_response(prompt: &str) -> String {
    format!(
        "Received your prompt: {}. This is a simulated response.",
        prompt
    )
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

pub struct ChatbotService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> ChatbotService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Answers a member's question about the club.
    ///
    /// # Returns
    /// - `Ok(String)` - Model reply, or the simulated reply without an API key
    /// - `Err(AppError::BadRequest)` - Empty prompt
    /// - `Err(AppError::ReqwestErr)` - Gemini could not be reached or answered with an error status
    /// - `Err(AppError::InternalError)` - Gemini answered without any text
    pub async fn ask(&self, prompt: &str) -> Result<String, AppError> {
        if prompt.trim().is_empty() {
            return Err(AppError::BadRequest("Prompt must not be empty.".to_string()));
        }

        let Some(api_key) = self.config.gemini_api_key.as_deref() else {
            tracing::debug!("GEMINI_API_KEY not set, returning simulated response");
            return Ok(simulated_response(prompt));
        };

        let summary = self.summary().await?;
        let full_prompt = build_prompt(prompt, &summary, Utc::now().naive_utc());

        let response = self
            .http_client
            .post(format!(
                "{}/{}:generateContent",
                GEMINI_ENDPOINT, self.config.gemini_model
            ))
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest {
                contents: [Content {
                    parts: [Part { text: &full_prompt }],
                }],
            })
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::InternalError("Gemini returned no candidates".to_string()))?;

        Ok(text)
    }

    /// Collects the club summary from the database.
    pub async fn summary(&self) -> Result<ClubSummary, AppError> {
        let profiles = CrudService::<profile::Entity>::new(self.db);
        let locations = CrudService::<location::Entity>::new(self.db);

        let mut teams = Vec::new();
        for team in CrudService::<team::Entity>::new(self.db)
            .find_where(sea_orm::Condition::all())
            .await?
        {
            let members = profiles
                .repo()
                .count_where(profile::Column::TeamId.eq(team.id))
                .await?;
            let location = locations
                .repo()
                .find_active(team.location_id)
                .await?
                .map(|location| location.name)
                .unwrap_or_default();

            teams.push((team.name, location, members));
        }

        let upcoming_events = CrudService::<event::Entity>::new(self.db)
            .find_where(event::Column::StartDate.gte(Utc::now().naive_utc()))
            .await?
            .into_iter()
            .map(|event| (event.name, event.start_date, event.meeting_point))
            .collect();

        let agreements = CrudService::<agreement::Entity>::new(self.db)
            .find_where(agreement::Column::Active.eq(true))
            .await?
            .into_iter()
            .map(|agreement| (agreement.name, agreement.description))
            .collect();

        let posts = CrudService::<post::Entity>::new(self.db)
            .find_where(post::Column::Status.eq(PostStatus::Published))
            .await?
            .into_iter()
            .map(|post| post.title)
            .collect();

        Ok(ClubSummary {
            teams,
            upcoming_events,
            agreements,
            posts,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, day)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    #[test]
    fn simulated_response_echoes_prompt() {
        assert_eq!(
            simulated_response("hola"),
            "Received your prompt: hola. This is a simulated response."
        );
    }

    #[test]
    fn renders_every_section() {
        let summary = ClubSummary {
            teams: vec![("Halcones".to_string(), "Medellín".to_string(), 3)],
            upcoming_events: vec![("Rodada al mar".to_string(), at(2), None)],
            agreements: vec![("Descuento taller".to_string(), None)],
            posts: vec!["Bienvenidos".to_string()],
        };

        let text = summary.render();

        assert!(text.contains("1- Halcones (Medellín): 3 miembros."));
        assert!(text.contains("1- Rodada al mar [2026-05-02 08:30]."));
        assert!(text.contains("1- Descuento taller: sin descripción."));
        assert!(text.contains("1- Bienvenidos."));
    }

    #[test]
    fn prompt_carries_question_and_time() {
        let prompt = build_prompt("  ¿Cuándo es la rodada?  ", &ClubSummary::default(), at(1));

        assert!(prompt.contains("PREGUNTA: ¿Cuándo es la rodada?\n"));
        assert!(prompt.contains("2026-05-01 08:30"));
        assert!(prompt.ends_with("RESPUESTA:"));
    }
}
