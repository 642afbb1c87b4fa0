use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ChatError;
use crate::prompts::SYSTEM_PROMPT;

/// Replies are short advice-sized messages, so the token cap is small.
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 300;

// Attribution headers expected by OpenRouter.
const REFERER: &str = "http://localhost:3000";
const TITLE: &str = "Eco Advisor";

#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

impl CompletionRequest {
    pub fn for_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                CompletionMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                CompletionMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// One bearer-authorized POST to the completions endpoint, no retry. Any
/// transport failure, non-success status, or a payload without a first
/// choice maps to a `ChatError`.
pub async fn send_completion(
    client: &reqwest::Client,
    config: &Config,
    prompt: &str,
) -> Result<String, ChatError> {
    let request = CompletionRequest::for_prompt(&config.model, prompt);

    let response = client
        .post(&*config.api_url)
        .bearer_auth(&config.api_key)
        .header("HTTP-Referer", REFERER)
        .header("X-Title", TITLE)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChatError::UpstreamStatus(status));
    }

    let completion = response.json::<CompletionResponse>().await?;
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(ChatError::MalformedUpstream)
}
