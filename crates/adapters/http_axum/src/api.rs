//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod lego_sets;

use axum::Router;
use axum::routing::get;

use bricklog_app::ports::LegoSetRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: LegoSetRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/lego-sets",
            get(lego_sets::list::<R>).post(lego_sets::create::<R>),
        )
        .route(
            "/lego-sets/{id}",
            get(lego_sets::get::<R>)
                .put(lego_sets::update::<R>)
                .delete(lego_sets::delete::<R>),
        )
}
