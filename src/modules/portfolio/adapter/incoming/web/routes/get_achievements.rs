use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::Achievement;
use crate::shared::read_outcome::collection_response;
use crate::AppState;

/// Approved achievements, most recent first
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "portfolio",
    responses(
        (status = 200, description = "Approved achievements", body = inline(SuccessResponse<Vec<Achievement>>)),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[get("/api/achievements")]
pub async fn get_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    collection_response(data.portfolio.facade.get_achievements().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::domain::drafts::AchievementDraft;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures;
    use crate::tests::support::memory_store::MemoryStore;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_only_approved_are_listed() {
        let store = Arc::new(MemoryStore::<AchievementDraft>::with_rows(vec![
            fixtures::achievement("Hackathon winner", true),
            fixtures::achievement("Pending award", false),
        ]));
        let state = TestAppStateBuilder::default().with_achievements(store).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_achievements_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/achievements").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Hackathon winner");
    }
}
