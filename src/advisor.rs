//! External reassignment advisor.
//!
//! An advisor receives the ranked SKUs plus optional operator instructions and
//! answers with a summary and suggested zone changes. Advisors never fail:
//! any problem is reported through the summary with no reassignments, so the
//! layout can always be produced from the scored zones.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::AdvisorConfig;
use crate::model::{ScoredSku, ZoneLabel};

/// Longest instruction text forwarded to an advisor (in characters).
pub const MAX_INSTRUCTIONS_LEN: usize = 600;

const DEFAULT_CONFIDENCE: f64 = 0.5;
const EMPTY_SUMMARY: &str = "No SKUs available for optimization.";
const MISSING_SUMMARY: &str = "AI optimization completed, but no summary provided.";

/// A suggested zone change for one SKU.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Reassignment {
    pub sku_code: String,
    #[schema(example = "A")]
    pub recommended_zone: String,
    pub confidence: f64,
    pub reason: String,
}

/// Advisor answer.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Suggestion {
    pub summary: String,
    pub reassignments: Vec<Reassignment>,
}

impl Suggestion {
    /// A suggestion without reassignments.
    pub fn summary_only(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            reassignments: Vec::new(),
        }
    }

    /// Zone overrides keyed by SKU code; entries naming no valid zone are skipped.
    pub fn overrides(&self) -> HashMap<String, ZoneLabel> {
        self.reassignments
            .iter()
            .filter_map(|entry| {
                entry
                    .recommended_zone
                    .parse::<ZoneLabel>()
                    .ok()
                    .map(|zone| (entry.sku_code.clone(), zone))
            })
            .collect()
    }
}

/// Source of zone reassignment suggestions.
pub trait ReassignmentAdvisor: Send + Sync {
    fn suggest_reassignments<'a>(
        &'a self,
        skus: &'a [ScoredSku],
        instructions: Option<&'a str>,
    ) -> BoxFuture<'a, Suggestion>;
}

/// Advisor used when no endpoint is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledAdvisor;

impl ReassignmentAdvisor for DisabledAdvisor {
    fn suggest_reassignments<'a>(
        &'a self,
        skus: &'a [ScoredSku],
        _instructions: Option<&'a str>,
    ) -> BoxFuture<'a, Suggestion> {
        let suggestion = if skus.is_empty() {
            Suggestion::summary_only(EMPTY_SUMMARY)
        } else {
            Suggestion::summary_only(
                "AI optimization unavailable: no advisor endpoint configured.",
            )
        };
        Box::pin(async move { suggestion })
    }
}

#[derive(Debug, Error)]
enum AdvisorError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct AdvisorRequest<'a> {
    instructions: Option<&'a str>,
    skus: &'a [ScoredSku],
}

/// Advisor that posts the SKU list as JSON to an HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpAdvisor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAdvisor {
    pub fn new(endpoint: impl Into<String>, config: &AdvisorConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(user_agent())
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn request(
        &self,
        skus: &[ScoredSku],
        instructions: Option<&str>,
    ) -> Result<Value, AdvisorError> {
        let body = AdvisorRequest { instructions, skus };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}

impl ReassignmentAdvisor for HttpAdvisor {
    fn suggest_reassignments<'a>(
        &'a self,
        skus: &'a [ScoredSku],
        instructions: Option<&'a str>,
    ) -> BoxFuture<'a, Suggestion> {
        Box::pin(async move {
            if skus.is_empty() {
                return Suggestion::summary_only(EMPTY_SUMMARY);
            }
            match self.request(skus, instructions).await {
                Ok(value) => sanitize_suggestion(&value),
                Err(err) => {
                    Suggestion::summary_only(format!("AI optimization unavailable: {}", err))
                }
            }
        })
    }
}

/// Builds the advisor described by the configuration.
pub fn advisor_from_config(config: &AdvisorConfig) -> Result<Arc<dyn ReassignmentAdvisor>, reqwest::Error> {
    Ok(match config.endpoint() {
        Some(endpoint) => Arc::new(HttpAdvisor::new(endpoint, config)?),
        None => Arc::new(DisabledAdvisor),
    })
}

/// Turns an untrusted advisor reply into a well-formed suggestion.
///
/// Entries without a string `sku_code` or zone (`recommended_zone` or `zone`)
/// are skipped; zones are trimmed and upper-cased; confidence defaults to 0.5
/// and is clamped to `[0,1]`.
pub fn sanitize_suggestion(value: &Value) -> Suggestion {
    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or(MISSING_SUMMARY)
        .to_string();

    let reassignments = value
        .get("reassignments")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(sanitize_entry).collect())
        .unwrap_or_default();

    Suggestion {
        summary,
        reassignments,
    }
}

fn sanitize_entry(entry: &Value) -> Option<Reassignment> {
    let sku_code = entry
        .get("sku_code")
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty())?;
    let zone = entry
        .get("recommended_zone")
        .and_then(Value::as_str)
        .filter(|zone| !zone.is_empty())
        .or_else(|| entry.get("zone").and_then(Value::as_str))
        .filter(|zone| !zone.is_empty())?;
    let confidence = entry
        .get("confidence")
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite())
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(0.0, 1.0);
    let reason = entry
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(Reassignment {
        sku_code: sku_code.to_string(),
        recommended_zone: zone.trim().to_ascii_uppercase(),
        confidence,
        reason,
    })
}

fn user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    format!("slap-planner/{version} ({os}; {arch})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attributes;
    use axum::{Json, Router, routing::post};
    use serde_json::json;
    use std::time::Duration;

    fn ranked() -> Vec<ScoredSku> {
        vec![ScoredSku {
            id: 1,
            sku_code: "SKU01".to_string(),
            product_name: None,
            attributes: Attributes { f: 0.9, w: 0.05, s: 0.006, i: 0.9 },
            priority: 0.5172,
            zone: ZoneLabel::B,
        }]
    }

    #[test]
    fn sanitize_cleans_entries() {
        let reply = json!({
            "summary": "Moved fast movers forward",
            "reassignments": [
                { "sku_code": "SKU01", "recommended_zone": " a ", "confidence": 0.9, "reason": "fast" },
                { "sku_code": "SKU02", "zone": "c" },
                { "sku_code": "SKU03", "recommended_zone": "B", "confidence": 7 },
                { "sku_code": 4, "recommended_zone": "A" },
                { "sku_code": "SKU05" },
                "garbage"
            ]
        });

        let suggestion = sanitize_suggestion(&reply);

        assert_eq!(suggestion.summary, "Moved fast movers forward");
        assert_eq!(suggestion.reassignments.len(), 3);
        assert_eq!(suggestion.reassignments[0].recommended_zone, "A");
        assert_eq!(suggestion.reassignments[0].reason, "fast");
        assert_eq!(suggestion.reassignments[1].recommended_zone, "C");
        assert_eq!(suggestion.reassignments[1].confidence, 0.5);
        assert_eq!(suggestion.reassignments[2].confidence, 1.0);
    }

    #[test]
    fn sanitize_fills_missing_summary() {
        let suggestion = sanitize_suggestion(&json!({ "reassignments": "nope" }));
        assert_eq!(suggestion.summary, MISSING_SUMMARY);
        assert!(suggestion.reassignments.is_empty());
    }

    #[test]
    fn overrides_skip_unknown_zones() {
        let suggestion = sanitize_suggestion(&json!({
            "summary": "",
            "reassignments": [
                { "sku_code": "SKU01", "recommended_zone": "a" },
                { "sku_code": "SKU02", "recommended_zone": "Z" }
            ]
        }));
        let overrides = suggestion.overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("SKU01"), Some(&ZoneLabel::A));
    }

    #[tokio::test]
    async fn disabled_advisor_reports_missing_endpoint() {
        let advisor = DisabledAdvisor;
        let suggestion = advisor.suggest_reassignments(&ranked(), None).await;
        assert!(suggestion.summary.contains("unavailable"));
        assert!(suggestion.reassignments.is_empty());

        let empty = advisor.suggest_reassignments(&[], Some("anything")).await;
        assert_eq!(empty.summary, EMPTY_SUMMARY);
    }

    #[tokio::test]
    async fn http_advisor_posts_skus_and_sanitizes_reply() {
        let app = Router::new().route(
            "/suggest",
            post(|Json(body): Json<Value>| async move {
                let code = body["skus"][0]["sku_code"].as_str().unwrap_or_default().to_string();
                let hint = body["instructions"].as_str().unwrap_or_default().to_string();
                Json(json!({
                    "summary": hint,
                    "reassignments": [{ "sku_code": code, "recommended_zone": "a", "confidence": 0.8 }]
                }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let endpoint = format!("http://{addr}/suggest");
        let advisor =
            HttpAdvisor::new(endpoint, &AdvisorConfig::default()).expect("client builds");
        let suggestion = advisor
            .suggest_reassignments(&ranked(), Some("prefer zone A"))
            .await;

        assert_eq!(suggestion.summary, "prefer zone A");
        assert_eq!(suggestion.reassignments.len(), 1);
        assert_eq!(suggestion.reassignments[0].sku_code, "SKU01");
        assert_eq!(suggestion.overrides().get("SKU01"), Some(&ZoneLabel::A));
    }

    #[tokio::test]
    async fn http_advisor_reports_transport_failures() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let advisor = HttpAdvisor::new(format!("http://{addr}/suggest"), &AdvisorConfig::default())
            .expect("client builds");
        let suggestion = tokio::time::timeout(
            Duration::from_secs(30),
            advisor.suggest_reassignments(&ranked(), None),
        )
        .await
        .expect("advisor answers before the timeout");

        assert!(suggestion.summary.starts_with("AI optimization unavailable"));
        assert!(suggestion.reassignments.is_empty());
    }
}
