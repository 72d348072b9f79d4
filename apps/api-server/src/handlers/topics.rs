//! Topic suggestion endpoint.

use actix_web::{HttpResponse, web};

use postforge_core::content::{self, prompt};
use postforge_shared::dto::{TopicsRequest, TopicsResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/topics
///
/// Generate three evergreen topic suggestions for a field/sub-field pair,
/// each with a virality estimate.
pub async fn suggest(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<TopicsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let prompt = prompt::topics_prompt(&req.field, &req.sub_field);
    let raw = state.generator.generate(&prompt).await?;
    let suggestions = content::topic_suggestions(&raw)?;

    Ok(HttpResponse::Ok().json(TopicsResponse {
        field: req.field,
        sub_field: req.sub_field,
        suggestions,
    }))
}
