use crate::{
    app_state::AppState,
    domain::{SubmittedRecord, SyncError, SyncOutcome},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/submissions", post(submit))
}

#[tracing::instrument(name = "Process a form submission", skip(app_state, record))]
async fn submit(
    State(app_state): State<AppState>,
    Form(record): Form<SubmittedRecord>,
) -> Result<Response, SubmissionError> {
    let signup_field = &app_state.signup_field;
    let outcome = app_state
        .subscription_sync
        .sync(&signup_field.name, record, &signup_field.mapping)
        .await?;

    match outcome {
        SyncOutcome::Skipped => Ok(StatusCode::NO_CONTENT.into_response()),
        SyncOutcome::Finished(result) => Ok(result.as_str().into_response()),
    }
}

#[derive(Debug, thiserror::Error)]
enum SubmissionError {
    #[error(transparent)]
    InvalidSubmission(#[from] SyncError),
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        tracing::warn!("{:#?}", self);

        match self {
            Self::InvalidSubmission(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
        }
    }
}
