use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
};
use futures::stream::{self, Stream, StreamExt};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use pregnancy_guide_domain::entities::assistant::AssistantAnswer;
use pregnancy_guide_domain::services::assistant::word_stream;
use pregnancy_guide_domain::services::{AssistantServiceError, AssistantServiceTrait};

use crate::entities::assistant::{AskRequest, AskResponse, VideoResponse};
use crate::entities::common::{validation_details, ErrorResponse};

/// Service type for dependency injection
pub type SharedAssistantService = Arc<dyn AssistantServiceTrait + Send + Sync>;

/// Ask the pregnancy assistant a question
#[utoipa::path(
    post,
    path = "/api/v1/assistant/ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Answer with links and videos; failed services are listed as warnings", body = AskResponse),
        (status = 400, description = "Invalid question", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "assistant"
)]
#[instrument(skip(service, request))]
pub async fn ask_assistant(
    State(service): State<SharedAssistantService>,
    Json(request): Json<AskRequest>,
) -> Result<impl IntoResponse, Response> {
    let answer = answer_question(service.as_ref(), &request).await?;
    Ok((StatusCode::OK, Json(convert_to_public_answer(answer))))
}

/// Ask the pregnancy assistant and stream the answer word by word
///
/// Emits `answer` events carrying one word each, then `links`, `videos` and
/// `warnings` events with JSON arrays, then a final `done` event.
#[utoipa::path(
    post,
    path = "/api/v1/assistant/ask/stream",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Server-sent event stream", content_type = "text/event-stream"),
        (status = 400, description = "Invalid question", body = ErrorResponse),
    ),
    tag = "assistant"
)]
#[instrument(skip(service, request))]
pub async fn ask_assistant_stream(
    State(service): State<SharedAssistantService>,
    Json(request): Json<AskRequest>,
) -> Result<impl IntoResponse, Response> {
    let answer = answer_question(service.as_ref(), &request).await?;
    let events = answer_events(convert_to_public_answer(answer), service.stream_word_delay());
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

async fn answer_question(
    service: &(dyn AssistantServiceTrait + Send + Sync),
    request: &AskRequest,
) -> Result<AssistantAnswer, Response> {
    if let Err(errors) = request.validate() {
        warn!("Invalid assistant request: {}", errors);
        return Err(
            ErrorResponse::validation_error("Invalid question", Some(validation_details(&errors))).into_response(),
        );
    }

    info!("Answering assistant question");

    service.ask(&request.question).await.map_err(|e| match e {
        AssistantServiceError::ValidationError(msg) => {
            warn!("Question rejected: {}", msg);
            ErrorResponse::validation_error(&msg, None).into_response()
        }
        AssistantServiceError::ConfigurationError(msg) => {
            error!("Assistant is misconfigured: {}", msg);
            ErrorResponse::internal_error().into_response()
        }
    })
}

/// Build the event stream for an answer
fn answer_events(
    answer: AskResponse,
    delay: std::time::Duration,
) -> impl Stream<Item = Result<Event, axum::Error>> + Send + 'static {
    // SSE frames cannot carry carriage returns
    let text = answer.answer.as_deref().unwrap_or_default().replace('\r', "");
    let words = if text.is_empty() {
        stream::empty::<String>().boxed()
    } else {
        word_stream(&text, delay).boxed()
    };

    let tail = vec![
        Event::default().event("links").json_data(&answer.links),
        Event::default().event("videos").json_data(&answer.videos),
        Event::default().event("warnings").json_data(&answer.warnings),
        Ok(Event::default().event("done").data("[DONE]")),
    ];

    words
        .map(|word| Ok(Event::default().event("answer").data(word)))
        .chain(stream::iter(tail))
}

fn convert_to_public_answer(answer: AssistantAnswer) -> AskResponse {
    AskResponse {
        question: answer.question,
        answer: answer.answer,
        links: answer.links,
        videos: answer
            .videos
            .into_iter()
            .map(|video| VideoResponse {
                video_id: video.video_id,
                title: video.title,
                embed_url: video.embed_url,
            })
            .collect(),
        warnings: answer.warnings,
    }
}
