use async_trait::async_trait;
use ipo_screener_domain::entities::{
    OfferingMetrics, OfferingProfile, OutcomePrediction, OutcomeProbabilities,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Failures while resolving a prediction.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("prediction request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but not with a usable prediction.
    #[error("prediction service returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("malformed prediction payload: {0}")]
    InvalidPayload(String),

    #[error("probability out of range: {name}={value}")]
    InvalidProbability { name: &'static str, value: f64 },
}

/// Resolves outcome predictions for new offerings.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// Submits an offering profile and returns the resolved prediction.
    async fn predict(&self, offering: &OfferingProfile) -> Result<OutcomePrediction, ProviderError>;
}

/// Wire shape of the service's successful `/predict` response.
#[derive(Debug, Deserialize)]
struct PredictPayload {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    prediction: Option<String>,
    #[serde(default)]
    probabilities: Option<PayloadProbabilities>,
    #[serde(default)]
    metrics: Option<PayloadMetrics>,
}

#[derive(Debug, Deserialize)]
struct PayloadProbabilities {
    loss: f64,
    profit: f64,
    /// The service still names the band-up class after the exchange slang.
    ara: f64,
}

#[derive(Debug, Deserialize)]
struct PayloadMetrics {
    size_billion: f64,
    price_pos: f64,
}

/// Parses and validates a `/predict` response body.
///
/// # Errors
/// Rejects unparseable JSON, explicit error statuses, and probabilities that
/// are non-finite or outside [0, 1].
pub fn parse_prediction_payload(body: &str) -> Result<OutcomePrediction, ProviderError> {
    let payload: PredictPayload =
        serde_json::from_str(body).map_err(|err| ProviderError::InvalidPayload(err.to_string()))?;

    if payload.status != "success" {
        return Err(ProviderError::Upstream {
            status: 200,
            message: payload
                .message
                .unwrap_or_else(|| format!("service status {:?}", payload.status)),
        });
    }

    let label = payload
        .prediction
        .ok_or_else(|| ProviderError::InvalidPayload("missing prediction label".into()))?;
    let probs = payload
        .probabilities
        .ok_or_else(|| ProviderError::InvalidPayload("missing probabilities".into()))?;
    let metrics = payload
        .metrics
        .ok_or_else(|| ProviderError::InvalidPayload("missing metrics".into()))?;

    check_probability("loss", probs.loss)?;
    check_probability("profit", probs.profit)?;
    check_probability("ara", probs.ara)?;

    Ok(OutcomePrediction {
        label,
        probabilities: OutcomeProbabilities {
            loss: probs.loss,
            profit: probs.profit,
            band_up: probs.ara,
        },
        metrics: OfferingMetrics {
            offering_size_billion: Decimal::from_f64(metrics.size_billion)
                .unwrap_or(Decimal::ZERO),
            price_range_position: Decimal::from_f64(metrics.price_pos).unwrap_or(Decimal::ZERO),
        },
    })
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ProviderError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ProviderError::InvalidProbability { name, value });
    }
    Ok(())
}

/// HTTP client for the prediction service.
#[derive(Debug, Clone)]
pub struct HttpPredictionProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPredictionProvider {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PredictionProvider for HttpPredictionProvider {
    async fn predict(&self, offering: &OfferingProfile) -> Result<OutcomePrediction, ProviderError> {
        let url = format!("{}/predict", self.base_url.trim_end_matches('/'));
        debug!(ticker = %offering.ticker, %url, "requesting prediction");

        let response = self.client.post(&url).json(offering).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }
        parse_prediction_payload(&body)
    }
}

/// A provider that always answers with the same prediction. Stands in for
/// the real service in tests and offline demos.
#[derive(Debug, Clone)]
pub struct FixedPredictionProvider {
    prediction: OutcomePrediction,
}

impl FixedPredictionProvider {
    #[must_use]
    pub fn new(prediction: OutcomePrediction) -> Self {
        Self { prediction }
    }
}

#[async_trait]
impl PredictionProvider for FixedPredictionProvider {
    async fn predict(
        &self,
        _offering: &OfferingProfile,
    ) -> Result<OutcomePrediction, ProviderError> {
        Ok(self.prediction.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipo_screener_domain::enums::OutcomeClass;
    use rust_decimal_macros::dec;

    const SUCCESS_BODY: &str = r#"{
        "status": "success",
        "prediction": "Positive Profit",
        "probabilities": {"loss": 0.21, "profit": 0.54, "ara": 0.25},
        "metrics": {"size_billion": 2794.0, "price_pos": 0.6875}
    }"#;

    #[test]
    fn parses_a_successful_payload() {
        let prediction = parse_prediction_payload(SUCCESS_BODY).unwrap();
        assert_eq!(prediction.label, "Positive Profit");
        assert_eq!(prediction.probabilities.band_up, 0.25);
        assert_eq!(
            prediction.probabilities.dominant_class(),
            OutcomeClass::Profit
        );
        assert_eq!(prediction.metrics.offering_size_billion, dec!(2794));
    }

    #[test]
    fn rejects_error_statuses() {
        let body = r#"{"status": "error", "message": "model not trained"}"#;
        let err = parse_prediction_payload(body).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Upstream { message, .. } if message == "model not trained"
        ));
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let body = r#"{
            "status": "success",
            "prediction": "Loss / Stagnant",
            "probabilities": {"loss": 1.2, "profit": -0.1, "ara": 0.0},
            "metrics": {"size_billion": 1.0, "price_pos": 0.5}
        }"#;
        let err = parse_prediction_payload(body).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::InvalidProbability { name: "loss", .. }
        ));
    }

    #[test]
    fn rejects_unparseable_bodies() {
        assert!(matches!(
            parse_prediction_payload("not json"),
            Err(ProviderError::InvalidPayload(_))
        ));
        assert!(matches!(
            parse_prediction_payload(r#"{"status": "success"}"#),
            Err(ProviderError::InvalidPayload(_))
        ));
    }

    #[tokio::test]
    async fn fixed_provider_answers_with_its_canned_prediction() {
        let canned = parse_prediction_payload(SUCCESS_BODY).unwrap();
        let provider = FixedPredictionProvider::new(canned.clone());
        let offering = OfferingProfile {
            ticker: "SUPA".into(),
            final_price: dec!(635),
            shares_offered: 4_400_000_000,
            low_price: dec!(525),
            high_price: dec!(695),
            has_warrant: false,
            lead_underwriter: "CC".into(),
            sector: "Financials".into(),
            is_oversubscribed: true,
        };
        let prediction = provider.predict(&offering).await.unwrap();
        assert_eq!(prediction, canned);
    }
}
