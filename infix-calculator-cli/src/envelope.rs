use infix_calculator::interpreter::{evaluate, format_value};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// A request to evaluate a single expression.
#[derive(Deserialize, Debug)]
pub struct Request {
    #[serde(default)]
    pub expression: String,
}

/// The answer to a [`Request`]; exactly one of the fields is set.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn success(result: String) -> Response {
        Response {
            result: Some(result),
            error: None,
        }
    }

    fn failure(message: &str) -> Response {
        Response {
            result: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    UnprocessableEntity,
    InternalServerError,
}

impl Status {
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::UnprocessableEntity => 422,
            Status::InternalServerError => 500,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

/// Decodes a request body, evaluates its expression and builds the response.
///
/// # Arguments
///
/// * `body`: The raw request, e.g. `{"expression": "1 + 2"}`.
///
/// returns: The status of the response together with its body.
pub fn respond(body: &str) -> (Status, Response) {
    let request: Request = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(error) => {
            warn!("Could not decode request: {}", error);
            return (
                Status::InternalServerError,
                Response::failure(INTERNAL_ERROR_MESSAGE),
            );
        }
    };
    if request.expression.is_empty() {
        warn!("Request did not contain an expression");
        return (
            Status::InternalServerError,
            Response::failure(INTERNAL_ERROR_MESSAGE),
        );
    }

    match evaluate(&request.expression) {
        Ok(value) => (Status::Ok, Response::success(format_value(value))),
        Err(error) => {
            debug!("Rejected {:?}: {}", request.expression, error);
            (
                Status::UnprocessableEntity,
                Response::failure(error.user_message()),
            )
        }
    }
}
