pub mod routes;

use crate::DashboardAppData;
use askama::Template;
use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;

pub fn dashboard_routes() -> Router<DashboardAppData> {
    Router::new().merge(routes::routes())
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub players: Vec<PlayerViewModel>,
    pub tournament_count: usize,
}

pub struct PlayerViewModel {
    pub username: String,
    pub epic_id: String,
}

pub async fn dashboard_action(State(state): State<DashboardAppData>) -> impl IntoResponse {
    let data = &state.data;

    let players = data
        .registry
        .iter()
        .map(|entry| PlayerViewModel {
            username: entry.username.clone(),
            epic_id: entry.epic_id.clone(),
        })
        .collect();

    DashboardTemplate {
        title: String::from("Fortnite Stats Dashboard"),
        players,
        tournament_count: data.tournament_event_ids().len(),
    }
}
