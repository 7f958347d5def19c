use serde::{Deserialize, Serialize};

use crate::names;

pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

const INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Client for the hosted text-generation endpoint behind the Ask page.
#[derive(Clone)]
pub struct EduBot {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    temperature: f64,
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

impl EduBot {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    pub fn prompt(subject: &str, question: &str) -> String {
        format!(
            "Answer the following {subject} question clearly and concisely \
             and if it is not a {subject} question, then ignore:\n\n{question}"
        )
    }

    /// Sends one question to the inference endpoint. Failures come back as
    /// plain text so the page can render them verbatim.
    pub async fn ask(&self, subject: &str, question: &str) -> String {
        let prompt = Self::prompt(subject, question);
        let body = GenerateRequest {
            inputs: &prompt,
            parameters: GenerateParameters {
                temperature: names::LLM_TEMPERATURE,
                max_new_tokens: names::LLM_MAX_NEW_TOKENS,
                return_full_text: false,
            },
        };

        let resp = match self
            .client
            .post(format!("{INFERENCE_API_BASE}/{}", self.model))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("inference request failed: {e}");
                return format!("Error: {e}");
            }
        };

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("inference API error: {status} - {text}");
            return format!("Error: {status} - {text}");
        }

        match resp.json::<Vec<GeneratedText>>().await {
            Ok(outputs) => match outputs.into_iter().next() {
                Some(output) => output.generated_text,
                None => "Failed to parse response: empty completion list".to_string(),
            },
            Err(e) => format!("Failed to parse response: {e}"),
        }
    }
}
