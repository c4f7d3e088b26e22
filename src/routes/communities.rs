use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    CategoriesResponse, Category, Community, ErrorResponse, HealthResponse, MembershipRequest,
    MembershipResponse, SuggestCommunitiesRequest, SuggestCommunitiesResponse,
};
use crate::services::{CacheError, CacheKey, CacheManager, CommunityApiClient, CommunityApiError, MembershipAction};
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<CommunityApiClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
}

/// Configure all community-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(list_categories))
        .route("/communities/suggestions", web::post().to(suggest_communities))
        .route("/communities/{id}/join", web::post().to(join_community))
        .route("/communities/{id}/leave", web::post().to(leave_community));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Category vocabulary endpoint
///
/// GET /api/v1/categories
async fn list_categories() -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        categories: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
    })
}

/// Read the community listing through the cache
async fn load_communities(state: &AppState) -> Result<Vec<Community>, CommunityApiError> {
    let key = CacheKey::communities();

    match state.cache.get::<Vec<Community>>(&key).await {
        Ok(communities) => return Ok(communities),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Cache read failed, fetching communities directly: {}", e),
    }

    let communities = state.api.list_communities().await?;

    if let Err(e) = state.cache.set(&key, &communities).await {
        tracing::warn!("Failed to cache community listing: {}", e);
    }

    Ok(communities)
}

fn api_error_response(error: &str, e: &CommunityApiError) -> HttpResponse {
    let body = |status_code: u16| ErrorResponse {
        error: error.to_string(),
        message: e.to_string(),
        status_code,
    };

    match e {
        CommunityApiError::NotFound(_) => HttpResponse::NotFound().json(body(404)),
        CommunityApiError::Unauthorized => HttpResponse::Unauthorized().json(body(401)),
        _ => HttpResponse::BadGateway().json(body(502)),
    }
}

/// Suggest starter communities
///
/// POST /api/v1/communities/suggestions
///
/// Request body:
/// ```json
/// {
///   "categories": ["Bible Study", "Women"],
///   "communities": [ ... ]
/// }
/// ```
///
/// `communities` is optional; without it the backend listing is ranked.
async fn suggest_communities(
    state: web::Data<AppState>,
    req: web::Json<SuggestCommunitiesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let SuggestCommunitiesRequest { categories, communities } = req.into_inner();

    tracing::info!(
        "Suggesting communities for {} categories (request {})",
        categories.len(),
        request_id
    );

    let communities = match communities {
        Some(communities) => communities,
        None => match load_communities(&state).await {
            Ok(communities) => communities,
            Err(e) => {
                tracing::error!("Failed to load communities (request {}): {}", request_id, e);
                return api_error_response("Failed to load communities", &e);
            }
        },
    };

    let result = state.matcher.rank_communities(&communities, &categories);

    let response = SuggestCommunitiesResponse {
        empty_state: result.is_empty(),
        matched_count: result.matched_count,
        total_candidates: result.total_candidates,
        suggestions: result.suggestions,
        request_id,
    };

    tracing::info!(
        "Returning {} suggestions ({} matched) from {} communities (request {})",
        response.suggestions.len(),
        response.matched_count,
        response.total_candidates,
        response.request_id
    );

    HttpResponse::Ok().json(response)
}

/// POST /api/v1/communities/{id}/join
async fn join_community(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<MembershipRequest>,
) -> impl Responder {
    update_membership(&state, path.into_inner(), &req, MembershipAction::Join).await
}

/// POST /api/v1/communities/{id}/leave
async fn leave_community(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<MembershipRequest>,
) -> impl Responder {
    update_membership(&state, path.into_inner(), &req, MembershipAction::Leave).await
}

async fn update_membership(
    state: &AppState,
    community_id: i64,
    req: &MembershipRequest,
    action: MembershipAction,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let result = match action {
        MembershipAction::Join => state.api.join_community(community_id, &req.user_id).await,
        MembershipAction::Leave => state.api.leave_community(community_id, &req.user_id).await,
    };

    match result {
        Ok(()) => {
            tracing::info!("User {} {:?} community {}", req.user_id, action, community_id);

            // Member counts changed
            if let Err(e) = state.cache.delete(&CacheKey::communities()).await {
                tracing::warn!("Failed to invalidate community cache: {}", e);
            }

            HttpResponse::Ok().json(MembershipResponse {
                success: true,
                community_id,
            })
        }
        Err(e) => {
            tracing::error!("Membership update failed for community {}: {}", community_id, e);
            api_error_response("Failed to update membership", &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_mapping() {
        let not_found = api_error_response("x", &CommunityApiError::NotFound("community 1".into()));
        let unauthorized = api_error_response("x", &CommunityApiError::Unauthorized);
        let upstream = api_error_response("x", &CommunityApiError::ApiError("boom".into()));

        assert_eq!(not_found.status().as_u16(), 404);
        assert_eq!(unauthorized.status().as_u16(), 401);
        assert_eq!(upstream.status().as_u16(), 502);
    }
}
