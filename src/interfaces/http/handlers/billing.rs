//! Billing endpoint: prices one parking session.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Billing, Session};
use crate::interfaces::http::common::{ApiError, ErrorResponse};

/// Entry and exit timestamps of one parking session, local wall clock,
/// e.g. `2020-09-05T23:30:00`.
///
/// Absent fields fall back to the epoch and are then caught by date
/// validation, which names the missing field in its message.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingRequest {
    #[serde(default)]
    pub entry_date_time: NaiveDateTime,
    #[serde(default)]
    pub exit_date_time: NaiveDateTime,
}

/// The priced session.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingResponse {
    /// Amount owed, as a plain JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub cost: Decimal,
    pub currency: String,
    pub rate_name: String,
    pub rate_type: String,
}

impl From<Billing> for BillingResponse {
    fn from(billing: Billing) -> Self {
        Self {
            cost: billing.cost,
            currency: billing.currency,
            rate_name: billing.rate_name,
            rate_type: billing.rate_type,
        }
    }
}

/// Calculate the parking fee for one session
#[utoipa::path(
    post,
    path = "/api/v1/billing",
    tag = "Billing",
    request_body = BillingRequest,
    responses(
        (status = 200, description = "Session priced", body = BillingResponse),
        (status = 400, description = "Missing body or timestamp outside the supported range", body = ErrorResponse),
        (status = 422, description = "No pricing rule matched the session", body = ErrorResponse)
    )
)]
pub async fn calculate_billing(
    body: Result<Json<BillingRequest>, JsonRejection>,
) -> Result<Json<BillingResponse>, ApiError> {
    let Json(request) = body?;

    let session = Session::new(request.entry_date_time, request.exit_date_time);
    session.validate()?;
    let billing = session.calculate_billing()?;

    info!(cost = %billing.cost, rate = %billing.rate_name, "session priced");

    Ok(Json(billing.into()))
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde_json::{json, Value};

    fn app() -> Router {
        Router::new().route("/api/v1/billing", post(calculate_billing))
    }

    async fn send(body: Body) -> (StatusCode, Value) {
        use tower::Service;
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/billing")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let mut svc = app().into_service();
        let resp = svc.call(req).await.unwrap();

        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    async fn send_json(body: Value) -> (StatusCode, Value) {
        send(Body::from(serde_json::to_vec(&body).unwrap())).await
    }

    async fn price(entry: &str, exit: &str) -> (StatusCode, Value) {
        send_json(json!({ "entryDateTime": entry, "exitDateTime": exit })).await
    }

    #[tokio::test]
    async fn an_empty_body_returns_400_with_the_required_message() {
        let (status, body) = send(Body::empty()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "entryDateTime and exitDateTime is required");
    }

    #[tokio::test]
    async fn a_missing_exit_fails_date_validation() {
        let (status, body) = send_json(json!({ "entryDateTime": "2020-09-02T06:00:00" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "exitDateTime must be greater than 2020/01/01");
    }

    #[tokio::test]
    async fn a_missing_entry_fails_date_validation() {
        let (status, body) = send_json(json!({ "exitDateTime": "2020-09-02T16:00:00" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "entryDateTime must be greater than 2020/01/01");
    }

    #[tokio::test]
    async fn an_early_bird_session_is_priced_at_13() {
        let (status, body) = price("2020-09-02T06:00:00", "2020-09-02T23:00:00").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"].as_f64(), Some(13.0));
        assert_eq!(body["rateName"], "Early Bird");
        assert_eq!(body["currency"], "AUD");
    }

    #[tokio::test]
    async fn an_overnight_weekday_session_is_priced_at_6_50() {
        let (status, body) = price("2020-09-02T21:00:00", "2020-09-03T16:00:00").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"].as_f64(), Some(6.5));
        assert_eq!(body["rateName"], "Night Rate");
    }

    #[tokio::test]
    async fn a_friday_night_session_exiting_saturday_keeps_the_night_rate() {
        let (status, body) = price("2020-09-04T21:00:00", "2020-09-05T16:00:00").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"].as_f64(), Some(6.5));
        assert_eq!(body["rateName"], "Night Rate");
    }

    #[tokio::test]
    async fn a_weekend_session_is_priced_at_10() {
        let (status, body) = price("2020-09-05T06:00:00", "2020-09-06T23:00:00").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"].as_f64(), Some(10.0));
        assert_eq!(body["rateName"], "Weekend Rate");
    }

    #[tokio::test]
    async fn a_sub_hour_weekend_session_falls_back_to_the_standard_rate() {
        let (status, body) = price("2020-09-05T23:30:00", "2020-09-06T00:29:00").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"].as_f64(), Some(5.0));
        assert_eq!(body["rateName"], "Standard Rate");
    }

    #[tokio::test]
    async fn a_weekend_cost_tie_reports_the_weekend_rate() {
        let (status, body) = price("2020-09-05T23:30:00", "2020-09-06T01:29:00").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"].as_f64(), Some(10.0));
        assert_eq!(body["rateName"], "Weekend Rate");
    }

    #[tokio::test]
    async fn a_week_of_parking_charges_every_started_day() {
        let week_and_a_bit = [
            ("2020-09-12T23:29:00", 160.0),
            ("2020-09-12T23:30:00", 160.0),
            ("2020-09-12T23:31:00", 160.0),
            ("2020-09-13T01:29:00", 180.0),
        ];

        for (exit, expected) in week_and_a_bit {
            let (status, body) = price("2020-09-05T23:30:00", exit).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["cost"].as_f64(), Some(expected));
            assert_eq!(body["rateName"], "Standard Rate");
        }
    }

    #[tokio::test]
    async fn the_response_uses_camel_case_field_names() {
        let (_, body) = price("2020-09-02T06:00:00", "2020-09-02T23:00:00").await;

        for key in ["cost", "currency", "rateName", "rateType"] {
            assert!(body.get(key).is_some(), "missing key {key}");
        }
    }
}
