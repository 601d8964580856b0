use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        HeaderName, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use fop_core::{get_calendar, CalendarError, CalendarSource, TaxGroup};
use serde::Serialize;

static JSON: &str = "application/json";

type ErrorResponse = (StatusCode, [(HeaderName, &'static str); 1], Json<ErrorBody>);

#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    group: Option<String>,
    with_pdv: Option<String>,
}

/// Repeated keys keep their first value.
impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut query_params = QueryParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "group" => &mut query_params.group,
                "with_pdv" => &mut query_params.with_pdv,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query_params
    }
}

impl QueryParams {
    pub fn group(&self) -> TaxGroup {
        TaxGroup::from_param(self.group.as_deref())
    }

    /// Anything but an empty value or `0` enables VAT.
    pub fn with_pdv(&self) -> bool {
        matches!(self.with_pdv.as_deref(), Some(value) if !value.is_empty() && value != "0")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> ErrorResponse {
    (
        status,
        [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ErrorBody { error: message }),
    )
}

fn status_code(err: &CalendarError) -> StatusCode {
    match err {
        CalendarError::DataUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        CalendarError::DataMalformed { .. } | CalendarError::InvalidDate { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle calendar requests.
///
/// The `group` defaults to 1 and is clamped to 3 when out of range, `with_pdv` is off unless given.
pub async fn handler(
    State(source): State<Arc<CalendarSource>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ErrorResponse> {
    let query_params = QueryParams::from(pairs);
    let group = query_params.group();
    let with_pdv = query_params.with_pdv();
    let calendar = tokio::task::spawn_blocking(move || get_calendar(&source, group, with_pdv))
        .await
        .map_err(|err| {
            tracing::error!(%err, "calendar task failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        })?
        .map_err(|err| {
            tracing::error!(%err, %group, with_pdv, "failed to build calendar");
            error_response(status_code(&err), err.to_string())
        })?;
    let response = (
        [(CONTENT_TYPE, JSON), (ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(calendar),
    )
        .into_response();
    Ok(response)
}
