//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use scribe_core::domain::{Post, PostChanges};
use scribe_shared::dto::{CreatePostRequest, MessageResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(
        req.title,
        req.author,
        req.content,
        req.published_at,
        req.published,
    );
    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// GET /posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{post_id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();

    state
        .posts
        .update(
            id,
            PostChanges {
                title: req.title,
                author: req.author,
                content: req.content,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post has been updated succesfully")))
}

/// DELETE /posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post has been deleted succesfully")))
}

/// A path segment that does not parse as a UUID cannot match any stored
/// post, so it is reported as missing rather than malformed.
fn parse_post_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}
