use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::{debug, info};

use chatrelay_core::envelope::Envelope;
use chatrelay_core::models::chat::{ChatMessage, Conversation};
use chatrelay_core::prompt::render_prompt;
use chatrelay_generate::payload::GenerationRequest;

use crate::error::ApiError;
use crate::event::{ProxyEvent, ProxyResponse};
use crate::invocation::region_from_arn;
use crate::state::AppState;

pub const SUCCESS_STATUS: u16 = 200;

/// Lambda entry point. Always answers with a proxy response; failures are
/// reported in the envelope, never to the runtime.
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<ProxyResponse, lambda_runtime::Error> {
    let region = region_from_arn(&event.context.invoked_function_arn);
    info!(
        request_id = %event.context.request_id,
        region,
        event = %event.payload,
        "received event"
    );

    let response = match relay(state, event.payload).await {
        Ok(envelope) => ProxyResponse::json(SUCCESS_STATUS, &envelope),
        Err(e) => e.into_response(),
    };

    Ok(response)
}

/// Validate the event, forward the conversation, and build the success
/// envelope.
pub async fn relay(state: &AppState, payload: Value) -> Result<Envelope, ApiError> {
    let event: ProxyEvent = serde_json::from_value(payload)?;

    if let Some(claims) = event.claims() {
        info!(
            user = claims.user_label().unwrap_or("unknown"),
            "authenticated user"
        );
    }

    let request = event.chat_request()?;
    info!(
        user_message = %request.message,
        history_len = request.conversation_history.len(),
        endpoint = state.client.endpoint(),
        "processing message"
    );

    let mut conversation = Conversation::from_history(&request.conversation_history);
    conversation.push(ChatMessage::user(request.message));

    let prompt = render_prompt(conversation.messages());
    debug!(%prompt, "constructed prompt");

    let generation = GenerationRequest::new(prompt);
    debug!(payload = ?generation, "generation payload");

    let text = state.client.generate(&generation).await?;
    info!(response_len = text.len(), "generation complete");

    conversation.push(ChatMessage::assistant(text.clone()));

    Ok(Envelope::success(text, conversation.into_messages()))
}
