use serde::{Deserialize, Serialize};

/// A pre-processed calculator input, ready to forward to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolveRequest {
    Expression { expression: String },
    Equation { lhs: String, rhs: String },
}

/// Trims and classifies raw calculator input. An `=` anywhere makes it an
/// equation, split on the first occurrence; anything after a second `=`
/// stays on the right-hand side for the evaluator to reject.
pub fn prepare(input: &str) -> Result<SolveRequest, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Error: empty expression".to_string());
    }

    match input.split_once('=') {
        Some((lhs, rhs)) => {
            let (lhs, rhs) = (lhs.trim(), rhs.trim());
            if lhs.is_empty() || rhs.is_empty() {
                return Err(
                    "Error: an equation needs an expression on both sides of '='".to_string()
                );
            }
            Ok(SolveRequest::Equation {
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
            })
        }
        None => Ok(SolveRequest::Expression {
            expression: input.to_string(),
        }),
    }
}

#[derive(Deserialize)]
struct SolveResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Forwards pre-processed input to the external symbolic evaluator. All
/// outcomes, parse errors included, are strings rendered verbatim.
#[derive(Clone)]
pub struct SolverClient {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl SolverClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn evaluate(&self, input: &str) -> String {
        let request = match prepare(input) {
            Ok(request) => request,
            Err(message) => return message,
        };

        let Some(endpoint) = &self.endpoint else {
            return "Error: no symbolic evaluator endpoint is configured".to_string();
        };

        let resp = match self.client.post(endpoint).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("evaluator request failed: {e}");
                return format!("Error: {e}");
            }
        };

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("evaluator error: {status} - {text}");
            return format!("Error: {status} - {text}");
        }

        match resp.json::<SolveResponse>().await {
            Ok(SolveResponse {
                error: Some(error), ..
            }) => error,
            Ok(SolveResponse {
                result: Some(result),
                ..
            }) => result,
            Ok(_) => "Failed to parse response: evaluator returned neither result nor error"
                .to_string(),
            Err(e) => format!("Failed to parse response: {e}"),
        }
    }
}
