//! OpenAI-compatible chat-completions client for the Groq API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::narrator::{NarrationRequest, Narrator, NarratorError};
use crate::config::NarratorConfig;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

/// Network-backed narrator. The request timeout is set on the underlying client; the
/// orchestrator applies its own deadline on top.
pub struct GroqNarrator {
    api_key: String,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl GroqNarrator {
    pub fn from_config(config: &NarratorConfig) -> Result<Self, NarratorError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(NarratorError::MissingCredential)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| NarratorError::Client(err.to_string()))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for GroqNarrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqNarrator")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Narrator for GroqNarrator {
    async fn summarize(&self, request: &NarrationRequest) -> Result<String, NarratorError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| NarratorError::Upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(NarratorError::Upstream(format!("status {status}: {detail}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| NarratorError::Upstream(format!("unreadable response: {err}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(NarratorError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::{decide, UserProfile};
    use crate::explain::{
        ExplanationOrchestrator, FallbackReason, Locale, NarrationOutcome, NarrationSettings,
    };
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;

    fn config(api_key: Option<&str>) -> NarratorConfig {
        NarratorConfig {
            api_key: api_key.map(str::to_string),
            model: "llama-3.1-8b-instant".to_string(),
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            max_tokens: 300,
            temperature: 0.3,
            timeout: Duration::from_secs(5),
        }
    }

    fn request() -> NarrationRequest {
        NarrationRequest {
            system: "You explain scheme decisions.".to_string(),
            user: "TOP RECOMMENDED SCHEMES: PM-KISAN".to_string(),
            max_tokens: 300,
            temperature: 0.3,
        }
    }

    /// Serves `reply` for every chat-completions call and returns a narrator pointed at it.
    async fn narrator_against(
        reply: impl Fn(&HeaderMap, &Value) -> (StatusCode, String) + Clone + Send + Sync + 'static,
    ) -> GroqNarrator {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let reply = reply.clone();
                async move { reply(&headers, &body) }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub upstream");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub upstream serves");
        });

        let mut config = config(Some("gsk_test"));
        config.base_url = format!("http://{addr}/v1");
        GroqNarrator::from_config(&config).expect("narrator builds")
    }

    fn completion(content: Value) -> String {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
            .to_string()
    }

    #[tokio::test]
    async fn sends_bearer_key_and_returns_trimmed_content() {
        let narrator = narrator_against(|headers, body| {
            let authorized = headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                == Some("Bearer gsk_test");
            if !authorized {
                return (StatusCode::UNAUTHORIZED, "missing key".to_string());
            }
            let echoed = format!(
                "  {} via {}  ",
                body["messages"][1]["content"].as_str().unwrap_or_default(),
                body["model"].as_str().unwrap_or_default()
            );
            (StatusCode::OK, completion(json!(echoed)))
        })
        .await;

        let text = narrator.summarize(&request()).await.expect("generated");
        assert_eq!(
            text,
            "TOP RECOMMENDED SCHEMES: PM-KISAN via llama-3.1-8b-instant"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_failure() {
        let narrator = narrator_against(|_, _| {
            (StatusCode::SERVICE_UNAVAILABLE, "over capacity".to_string())
        })
        .await;

        match narrator.summarize(&request()).await {
            Err(NarratorError::Upstream(detail)) => assert!(detail.contains("503")),
            other => panic!("expected upstream failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_and_null_content_are_empty_responses() {
        let narrator =
            narrator_against(|_, _| (StatusCode::OK, json!({ "choices": [] }).to_string())).await;
        assert_eq!(
            narrator.summarize(&request()).await,
            Err(NarratorError::EmptyResponse)
        );

        let narrator = narrator_against(|_, _| (StatusCode::OK, completion(Value::Null))).await;
        assert_eq!(
            narrator.summarize(&request()).await,
            Err(NarratorError::EmptyResponse)
        );

        let narrator = narrator_against(|_, _| (StatusCode::OK, completion(json!("   ")))).await;
        assert_eq!(
            narrator.summarize(&request()).await,
            Err(NarratorError::EmptyResponse)
        );
    }

    #[tokio::test]
    async fn malformed_body_is_upstream_failure() {
        let narrator =
            narrator_against(|_, _| (StatusCode::OK, "<html>gateway</html>".to_string())).await;

        assert!(matches!(
            narrator.summarize(&request()).await,
            Err(NarratorError::Upstream(_))
        ));
    }

    #[tokio::test]
    async fn upstream_failure_degrades_to_fallback_narrative() {
        let narrator = narrator_against(|_, _| {
            (StatusCode::INTERNAL_SERVER_ERROR, "secret stack trace".to_string())
        })
        .await;
        let orchestrator =
            ExplanationOrchestrator::new(Arc::new(narrator), NarrationSettings::default());
        let profile = UserProfile {
            land_size: 1.0,
            crop_type: "rice".to_string(),
            annual_income: 50000.0,
            irrigation_available: true,
            state: "Assam".to_string(),
        };
        let decision = decide(&profile, &[], 3);

        let narrative = orchestrator.explain(&decision, Locale::Hindi).await;

        assert_eq!(
            narrative.outcome,
            NarrationOutcome::Fallback(FallbackReason::UpstreamFailed)
        );
        assert!(!narrative.text.is_empty());
        assert!(!narrative.text.contains("secret"));
    }

    #[test]
    fn missing_key_is_reported() {
        let err = GroqNarrator::from_config(&config(None)).expect_err("no key");
        assert_eq!(err, NarratorError::MissingCredential);
    }

    #[test]
    fn builds_chat_completions_endpoint() {
        let narrator = GroqNarrator::from_config(&config(Some("gsk_test"))).expect("builds");
        assert_eq!(
            narrator.endpoint,
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(narrator.model(), "llama-3.1-8b-instant");
        assert!(!format!("{narrator:?}").contains("gsk_test"));
    }

    #[test]
    fn request_serializes_in_openai_shape() {
        let body = ChatRequest {
            model: "m",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "s",
                },
                ChatMessage {
                    role: "user",
                    content: "u",
                },
            ],
            max_tokens: 300,
            temperature: 0.5,
        };

        let value = serde_json::to_value(&body).expect("serializes");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["max_tokens"], 300);
        assert_eq!(value["temperature"], 0.5);
    }

    #[test]
    fn response_without_content_parses() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
                .expect("parses");
        assert!(parsed.choices[0].message.content.is_none());
    }
}
