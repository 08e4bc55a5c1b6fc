//! Wire contracts shared by the HTTP handlers and the client.
//!
//! Each route is an [`Endpoint`]: method, path, success status and the
//! request/response types. Handlers are mounted at `Endpoint::PATH` and
//! the client builds its URLs from the same constant. Response bodies are
//! checked with [`ResponseSchema`] before the server emits them and again
//! after the client decodes them.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::error;
use validator::Validate;

use crate::{
    client::ClientError,
    entities::{
        experience::{self, Experience},
        message::{self, Message, NewMessage},
        project::{self, Project},
        skill::{self, Skill},
    },
    errors::AppError,
    validation::{FieldError, ValidationFailure},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

pub trait Endpoint {
    const METHOD: HttpMethod;
    const PATH: &'static str;
    const SUCCESS_STATUS: u16;

    type Request: Serialize + Send + Sync;
    type Response: ResponseSchema + Serialize + DeserializeOwned + Send + Sync;
}

pub struct ListProjects;
pub struct ListSkills;
pub struct ListExperiences;
pub struct CreateMessage;

impl Endpoint for ListProjects {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/projects";
    const SUCCESS_STATUS: u16 = 200;

    type Request = ();
    type Response = Vec<Project>;
}

impl Endpoint for ListSkills {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/skills";
    const SUCCESS_STATUS: u16 = 200;

    type Request = ();
    type Response = Vec<Skill>;
}

impl Endpoint for ListExperiences {
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/experiences";
    const SUCCESS_STATUS: u16 = 200;

    type Request = ();
    type Response = Vec<Experience>;
}

impl Endpoint for CreateMessage {
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/messages";
    const SUCCESS_STATUS: u16 = 201;

    type Request = NewMessage;
    type Response = Message;
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

pub trait ResponseSchema {
    fn check(&self) -> Result<(), ValidationFailure>;
}

macro_rules! entity_schema {
    ($($ty:ty => $columns:path),* $(,)?) => {
        $(
            impl ResponseSchema for $ty {
                fn check(&self) -> Result<(), ValidationFailure> {
                    self.validate()
                        .map_err(|errors| ValidationFailure::from_errors(&errors, $columns))
                }
            }
        )*
    };
}

entity_schema! {
    Project => project::COLUMNS,
    Skill => skill::COLUMNS,
    Experience => experience::COLUMNS,
    Message => message::COLUMNS,
}

impl<T: ResponseSchema> ResponseSchema for Vec<T> {
    fn check(&self) -> Result<(), ValidationFailure> {
        let errors: Vec<FieldError> = self
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.check().err().map(|f| f.at_index(i)))
            .flat_map(|f| f.errors)
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { errors })
        }
    }
}

/// Server side: refuses to emit a response that would not parse on the client.
pub fn checked<E: Endpoint>(value: E::Response) -> Result<E::Response, AppError> {
    match value.check() {
        Ok(()) => Ok(value),
        Err(failure) => {
            error!("Response for {} failed its schema: {}", E::PATH, failure);
            Err(AppError::InternalError(format!("invalid response for {}", E::PATH)))
        }
    }
}

/// Client side: maps a status and raw body to the endpoint's response type.
pub fn parse_response<E: Endpoint>(status: u16, body: &[u8]) -> Result<E::Response, ClientError> {
    if status == E::SUCCESS_STATUS {
        let value: E::Response = serde_json::from_slice(body)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        value.check().map_err(ClientError::InvalidResponse)?;
        return Ok(value);
    }

    let (message, errors) = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(body) if !body.message.trim().is_empty() => (body.message, body.errors),
        _ => (format!("Request failed with status {status}"), Vec::new()),
    };

    Err(ClientError::Api { status, message, errors })
}
