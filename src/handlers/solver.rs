use axum::extract::{Form, State};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::views::solver as solver_views;
use crate::{names, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::SOLVER_URL, get(solver_page).post(solve))
}

async fn solver_page() -> maud::Markup {
    views::page("Calculator", solver_views::page(None))
}

#[derive(Deserialize)]
struct SolveBody {
    expression: String,
}

async fn solve(State(state): State<AppState>, Form(body): Form<SolveBody>) -> maud::Markup {
    let result = state.solver.evaluate(&body.expression).await;
    views::page("Calculator", solver_views::page(Some(&result)))
}
