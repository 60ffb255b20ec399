//! Route handlers.
//!
//! Each handler validates request shape, runs one service call on the blocking
//! pool under the connection lock, and turns neutral results (empty page, no matches) into
//! the matching error kind.

use super::dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionBody, CreatedResponse,
    DeletedResponse, PageParams, QuestionPageResponse, QuizBody, QuizResponse, SearchBody,
    SearchResponse,
};
use super::error::ApiError;
use super::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use log::debug;
use trivia_core::{CategoryId, QuestionId, SearchQuery};

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<CategoriesResponse> {
    let categories = state
        .with_service(|service| Ok(service.list_categories()?))
        .await?;
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

pub async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<QuestionPageResponse> {
    let Query(params) = params.map_err(|rejection| {
        debug!("event=bad_query module=api status=error error={rejection}");
        ApiError::BadRequest
    })?;

    let page = state
        .with_service(move |service| Ok(service.questions_page(params.page)?))
        .await?;
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories: page.categories,
        current_category: page.current_category,
    }))
}

pub async fn questions_in_category(
    State(state): State<AppState>,
    category_id: Result<Path<CategoryId>, PathRejection>,
) -> ApiResult<CategoryQuestionsResponse> {
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;

    let listing = state
        .with_service(move |service| Ok(service.questions_in_category(category_id)?))
        .await?;
    if listing.questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        current_category: listing.current_category,
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionBody>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(body) = body.map_err(|rejection| {
        debug!("event=bad_body module=api status=error route=create_question error={rejection}");
        ApiError::BadRequest
    })?;
    let new_question = body.into_new_question()?;

    let created = state
        .with_service(move |service| Ok(service.create_question(&new_question)?))
        .await?;
    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
    }))
}

pub async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<QuestionId>, PathRejection>,
) -> ApiResult<DeletedResponse> {
    let Path(question_id) = question_id.map_err(|_| ApiError::NotFound)?;

    state
        .with_service(move |service| Ok(service.delete_question(question_id)?))
        .await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

pub async fn search_questions(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<SearchResponse> {
    let Json(body) = body.map_err(|rejection| {
        debug!("event=bad_body module=api status=error route=search error={rejection}");
        ApiError::BadRequest
    })?;

    let query = SearchQuery::new(body.search_term);
    let outcome = state
        .with_service(move |service| Ok(service.search(&query)?))
        .await?;
    if outcome.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SearchResponse {
        success: true,
        questions: outcome.questions,
        total_questions: outcome.total_questions,
        current_category: outcome.current_category,
    }))
}

pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResult<QuizResponse> {
    let Json(body) = body.map_err(|rejection| {
        debug!("event=bad_body module=api status=error route=quiz error={rejection}");
        ApiError::Unprocessable
    })?;
    let request = body.into_quiz_request()?;

    let round = state
        .with_quiz_service(move |service, rng| Ok(service.next_quiz_question(&request, rng)?))
        .await?;
    Ok(Json(QuizResponse {
        success: true,
        question: round.question,
        total_questions: round.total_questions,
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
