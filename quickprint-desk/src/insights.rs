//! Business insights advisory
//!
//! Sends a compact summary of recent orders to the Gemini API and asks
//! for three short suggestions. Strictly best-effort: every failure
//! mode (no key, network, quota, malformed reply) collapses into a
//! friendly placeholder string and the dashboard renders on.

use serde::Deserialize;
use std::time::Duration;

use shared::Order;

use crate::config::Config;

const GEMINI_MODEL: &str = "gemini-3-flash-preview";
const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Shown when no API key is configured.
pub const NOT_CONFIGURED: &str =
    "AI insights are not configured. Set GEMINI_API_KEY to enable business analysis.";

/// Shown when the request fails for any reason.
pub const UNAVAILABLE: &str =
    "Unable to generate insights at this moment. Please check your network connection and try again later.";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Client for the insights advisory
#[derive(Debug, Clone)]
pub struct InsightsClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl InsightsClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.insights_timeout_ms))
            .build()?;
        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
        })
    }

    /// Ask for three actionable suggestions based on recent orders.
    ///
    /// Never returns an error: the result is always a displayable
    /// string, a placeholder when the advisory cannot answer.
    pub async fn business_insights(&self, orders: &[Order]) -> String {
        let Some(api_key) = &self.api_key else {
            return NOT_CONFIGURED.to_string();
        };

        match self.request(api_key, orders).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!("insights response contained no text");
                UNAVAILABLE.to_string()
            }
            Err(err) => {
                tracing::warn!(error = %err, "insights request failed");
                UNAVAILABLE.to_string()
            }
        }
    }

    async fn request(&self, api_key: &str, orders: &[Order]) -> reqwest::Result<String> {
        let url = format!("{GEMINI_ENDPOINT}/{GEMINI_MODEL}:generateContent");
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": build_prompt(orders) }] }]
        });

        let response: GenerateResponse = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default())
    }
}

/// Advisor prompt over a summary of the ten most recent orders.
fn build_prompt(orders: &[Order]) -> String {
    let summary: Vec<serde_json::Value> = orders
        .iter()
        .take(10)
        .map(|order| {
            let items = order
                .items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let date = chrono::DateTime::from_timestamp_millis(order.created_at)
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default();
            serde_json::json!({
                "total": order.total,
                "items": items,
                "status": order.status.label(),
                "date": date,
            })
        })
        .collect();

    format!(
        "You are a professional business advisor for a printing and photography shop in Pakistan.\n\
         Analyze the following recent orders and provide 3 short, actionable business insights:\n\
         {}\n\n\
         Format the response as a bulleted list of 3 items. Keep it concise and professional.",
        serde_json::Value::Array(summary)
    )
}
