//! Single-attempt narrative generation via the Bedrock Converse API.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use crate::error::BedrockError;

const SYSTEM_PROMPT: &str = "\
You are a compassionate relationship counselor providing a confidential \
assessment. Analyze the situation with nuance, empathy, and professional \
insight. Never accuse; always acknowledge multiple possible explanations \
for a change in behavior.";

/// Sampling parameters for a generation request.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_tokens: i32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// Send the assembled prompt to the model and return its raw reply text.
///
/// One attempt, no retry: a service error or an empty response fails the
/// whole request. Parsing the reply into sections happens downstream and
/// never fails (`sections::extract_sections`).
pub async fn generate_analysis(
    config: &aws_config::SdkConfig,
    model_id: &str,
    prompt: &str,
    params: &GenerationParams,
) -> Result<String, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let generation_id = Uuid::new_v4();
    info!(generation_id = %generation_id, model = model_id, "starting narrative generation");

    let inference_config = InferenceConfiguration::builder()
        .max_tokens(params.max_tokens)
        .temperature(params.temperature)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
        .inference_config(inference_config)
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(prompt.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if response_text.trim().is_empty() {
        return Err(BedrockError::ResponseParse(
            "model returned no text content".to_string(),
        ));
    }

    info!(
        generation_id = %generation_id,
        text_len = response_text.len(),
        "narrative generation complete"
    );

    Ok(response_text)
}
