use std::error::Error;

use reqwest::Client;

use advisor_dto::{ChatReply, ChatRequest};

// The relay normally serves this app itself; the default matches its
// out-of-the-box listening address.
static BASE_URL: &str = match option_env!("CHAT_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

pub async fn send_prompt(prompt: &str) -> Result<String, Box<dyn Error>> {
    let client = Client::new();
    let response = client
        .post(format!("{BASE_URL}/chat"))
        .json(&ChatRequest {
            prompt: prompt.to_string(),
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(format!("chat relay returned {}", response.status()).into());
    }

    Ok(response.json::<ChatReply>().await?.message)
}
