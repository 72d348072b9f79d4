//! Post handlers: CRUD plus the AI generation pathways.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use postforge_core::content::{self, prompt, prompt::SourceMaterial};
use postforge_core::domain::{GeneratedContent, Post, PostOrder};
use postforge_shared::dto::{
    CreateFromTopicRequest, CreateFromUrlRequest, CreateFromYoutubeRequest, EditAiRequest,
    EditAiResponse, EditContentRequest, ListPostsQuery, PostResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Sentence budget applied to web/transcript material before prompting.
const SOURCE_SENTENCE_BUDGET: usize = 200;

/// Word cap for titles derived from editor content.
const TITLE_MAX_WORDS: usize = 8;

const DEFAULT_PER_PAGE: u64 = 50;
const MAX_PER_PAGE: u64 = 100;

/// Fetch a post by id, scoped to its owner. Anything else is a 404.
async fn find_owned(state: &AppState, identity: &Identity, id: Uuid) -> Result<Post, AppError> {
    state
        .posts
        .find_by_id(id)
        .await?
        .filter(|post| post.user_id == identity.user_id)
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))
}

/// The shared generation pipeline: prompt in, sanitized structured content out.
async fn generate_content(state: &AppState, prompt: &str) -> Result<GeneratedContent, AppError> {
    let raw = state.generator.generate(prompt).await?;
    let mut generated = content::generated_content(&raw)?;
    generated.content = content::sanitize_generated(&generated.content);
    Ok(generated)
}

/// Append the caller's call-to-action after a line break, if one was given.
fn append_cta(content: String, cta: Option<&str>) -> String {
    match cta {
        Some(cta) if !cta.trim().is_empty() => format!("{content} <br> {cta}"),
        _ => content,
    }
}

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let order = PostOrder::from_frame(query.frame.as_deref().unwrap_or("most_recent"));
    let page = query.page.unwrap_or(0);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);

    let posts = state
        .posts
        .list_by_user(identity.user_id, order, page, per_page)
        .await?;

    let body: Vec<PostResponse> = posts.iter().map(PostResponse::from_post).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_owned(&state, &identity, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from_post(&post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_owned(&state, &identity, path.into_inner()).await?;
    state.posts.delete(post.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/posts/create-text
///
/// Generate a post from a topic keyword.
pub async fn create_from_topic(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateFromTopicRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let topic = req.topic.trim();
    if topic.is_empty() {
        return Err(AppError::BadRequest("Topic is required".to_string()));
    }

    let prompt = prompt::post_prompt(SourceMaterial::Topic(topic), req.tone.as_deref());
    let generated = generate_content(&state, &prompt).await?;

    let content = append_cta(generated.content, req.cta.as_deref());
    let post = Post::with_length(identity.user_id, generated.title, content, generated.length);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from_post(&saved)))
}

/// POST /api/posts/create-url
///
/// Generate a post from the readable text of a web page.
pub async fn create_from_url(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateFromUrlRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let text = state.pages.extract(&req.w_url).await?;
    let material = content::summarize(&text, SOURCE_SENTENCE_BUDGET);

    let prompt = prompt::post_prompt(SourceMaterial::Raw(&material), req.tone.as_deref());
    let generated = generate_content(&state, &prompt).await?;

    let content = append_cta(generated.content, req.cta.as_deref());
    let post = Post::with_length(identity.user_id, generated.title, content, generated.length);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from_post(&saved)))
}

/// POST /api/posts/create-youtube
///
/// Generate a post from a video transcript.
pub async fn create_from_youtube(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateFromYoutubeRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let transcript = state.transcripts.fetch(&req.y_url).await?;
    let material = content::summarize(&transcript, SOURCE_SENTENCE_BUDGET);

    let prompt = prompt::post_prompt(SourceMaterial::Raw(&material), req.tone.as_deref());
    let generated = generate_content(&state, &prompt).await?;

    let content = append_cta(generated.content, req.cta.as_deref());
    let post = Post::with_length(identity.user_id, generated.title, content, generated.length);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from_post(&saved)))
}

/// POST /api/posts/regenerate/{id}
///
/// Regenerate an existing post's content while maintaining its core message.
pub async fn regenerate(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let mut post = find_owned(&state, &identity, path.into_inner()).await?;

    let prompt = prompt::regenerate_prompt(&post);
    let generated = generate_content(&state, &prompt).await?;

    post.title = generated.title;
    post.replace_content(generated.content, Some(generated.length));
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from_post(&saved)))
}

/// POST /api/posts/edit/{id}
///
/// Replace a post's content with hand-edited text from the editor.
pub async fn edit(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<EditContentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Acceptance gate: enough plain text must remain once markup is stripped
    content::plain_text_gate(&req.content)?;

    let mut post = find_owned(&state, &identity, path.into_inner()).await?;
    post.replace_content(req.content, None);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from_post(&saved)))
}

/// POST /api/posts/save-editor
///
/// Save hand-written editor content as a new post, deriving a title from its
/// first words.
pub async fn save_editor(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<EditContentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let plain = content::plain_text_gate(&req.content)?;
    let title = content::derive_title(&plain, TITLE_MAX_WORDS);

    let post = Post::new(identity.user_id, title, req.content);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from_post(&saved)))
}

/// POST /api/posts/edit-ai
///
/// AI-assisted rewrite of editor content. Nothing is persisted; the caller
/// decides what to do with the result.
pub async fn edit_ai(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<EditAiRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let instruction = req.prompt.as_deref().unwrap_or("improve");
    let prompt = prompt::edit_prompt(&req.content, instruction);

    let raw = state.generator.generate(&prompt).await?;
    let rewritten = content::rewritten_content(&raw)?;

    Ok(HttpResponse::Ok().json(EditAiResponse {
        result: rewritten.content,
    }))
}
