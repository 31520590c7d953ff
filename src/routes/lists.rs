use crate::{app_state::AppState, domain::MailingList};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/lists", get(lists))
}

#[tracing::instrument(name = "List mailing lists", skip(app_state))]
async fn lists(State(app_state): State<AppState>) -> Json<ListsBody> {
    let lists = app_state.subscription_sync.list_available_lists().await;

    Json(ListsBody {
        configurable: !lists.is_empty(),
        lists,
    })
}

#[derive(Serialize)]
struct ListsBody {
    lists: Vec<MailingList>,
    /// The signup field can only be mapped once there is a list to point it at.
    configurable: bool,
}
