//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::ports::{BaseRepository, PostRepository};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // The store assigns the id; `created` defaults to now when omitted.
    let post = BlogPost::new(req.author, req.title, req.content, req.created);
    let saved = state.posts.save(post).await?;

    tracing::debug!(post_id = %saved.id, "post created");

    Ok(HttpResponse::Created().json(PostResponse::from(saved)))
}

/// PUT /posts/{id}
///
/// Applies a partial update: only the fields present in the body change.
/// Returns 200 with the updated post.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id
        && body_id != id
    {
        return Err(AppError::BadRequest(format!(
            "path id {id} and body id {body_id} must match"
        )));
    }

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(content) = req.content {
        post.content = content;
    }
    if let Some(author) = req.author {
        post.author = author;
    }

    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(saved)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;

    tracing::debug!(post_id = %id, "post deleted");

    Ok(HttpResponse::NoContent().finish())
}
