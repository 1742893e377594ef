//! Event finance routes.
//!
//! One POST endpoint dispatches mutating actions by name; one GET endpoint
//! serves read actions selected by query string.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use jamii_core::event::EventFinanceProfile;
use jamii_core::expenditure::{ExpenditureStatus, NewExpenditure};
use jamii_core::fundraising::DonationInput;
use jamii_core::reports::ReportType;
use jamii_shared::AppError;
use jamii_shared::types::{BudgetCategoryId, EventId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::AppState;
use crate::response::{ApiError, ApiResult, success};

/// Creates the finance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/finances", get(get_finances).post(post_finances))
}

// ============================================================================
// Request Types
// ============================================================================

/// Envelope of every POST request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceRequest {
    /// Action name, e.g. `addDonation`.
    pub action: String,
    /// Target event.
    #[serde(default)]
    pub event_id: Option<String>,
    /// Action-specific payload.
    #[serde(default)]
    pub data: Value,
}

/// Query string of the GET endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceQuery {
    /// Target event.
    pub event_id: Option<String>,
    /// `getFinancialData` or `generateSummary`.
    pub action: Option<String>,
}

/// Payload of `initializeFinances`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeFinancesData {
    /// Event title.
    #[serde(default)]
    pub title: String,
    /// Whether the event opted into financial tracking.
    #[serde(default)]
    pub uses_financial_tracking: bool,
    /// Configured fundraising goal.
    pub fundraising_goal: Option<Decimal>,
    /// Estimated cost of the event.
    pub estimated_cost: Option<Decimal>,
    /// Event currency.
    pub currency: Option<String>,
    /// Explicit budget total.
    pub initial_budget: Option<Decimal>,
    /// Explicit fundraising target.
    pub fundraising_target: Option<Decimal>,
}

/// Payload of `createFundraising`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFundraisingData {
    /// Campaign target.
    pub target_amount: Decimal,
    /// Campaign currency.
    pub currency: Option<String>,
}

/// Payload of `createBudget`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetData {
    /// Budget total.
    pub total_budget: Decimal,
    /// Budget currency.
    pub currency: Option<String>,
}

/// Payload of `addExpenditure`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExpenditureData {
    /// Budget category the spend is booked against.
    pub category_id: Option<BudgetCategoryId>,
    /// What was bought.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Date of the spend.
    pub date: Option<DateTime<Utc>>,
    /// Payment status, `pending` when omitted.
    pub status: Option<ExpenditureStatus>,
}

/// Payload of `generateReport`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportData {
    /// Report type, `summary` when omitted.
    pub report_type: Option<String>,
    /// Who requested the report.
    pub generated_by: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn require_event_id(raw: Option<&str>) -> ApiResult<EventId> {
    match raw.map(EventId::from) {
        Some(id) if !id.is_blank() => Ok(id),
        _ => Err(AppError::Validation("eventId is required".to_string()).into()),
    }
}

/// Deserializes the action payload; an absent payload reads as `{}`.
fn parse_data<T: DeserializeOwned>(action: &str, data: Value) -> ApiResult<T> {
    let data = if data.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        data
    };

    serde_json::from_value(data)
        .map_err(|e| AppError::Validation(format!("Invalid data for {action}: {e}")).into())
}

// ============================================================================
// Handlers
// ============================================================================

async fn post_finances(
    State(state): State<AppState>,
    payload: Result<Json<FinanceRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return ApiError::from(AppError::Validation(rejection.body_text())).into_response();
        }
    };

    dispatch_action(&state, request).unwrap_or_else(IntoResponse::into_response)
}

fn dispatch_action(state: &AppState, request: FinanceRequest) -> ApiResult<Response> {
    let event_id = require_event_id(request.event_id.as_deref())?;
    let finance = &state.finance;
    let action = request.action.as_str();
    debug!(event_id = %event_id, action = %action, "Finance action received");

    match action {
        "initializeFinances" => {
            let data: InitializeFinancesData = parse_data(action, request.data)?;
            let profile = EventFinanceProfile {
                id: event_id,
                title: data.title,
                uses_financial_tracking: data.uses_financial_tracking,
                fundraising_goal: data.fundraising_goal,
                estimated_cost: data.estimated_cost,
                currency: data.currency,
            };
            let created = finance.initialize_event_finances(
                &profile,
                data.initial_budget,
                data.fundraising_target,
            )?;
            Ok(success(created))
        }
        "createFundraising" => {
            let data: CreateFundraisingData = parse_data(action, request.data)?;
            Ok(success(finance.create_fundraising(
                &event_id,
                data.target_amount,
                data.currency,
            )?))
        }
        "addDonation" => {
            let data: DonationInput = parse_data(action, request.data)?;
            Ok(success(finance.add_donation(&event_id, data)?))
        }
        "addExpenditure" => {
            let data: AddExpenditureData = parse_data(action, request.data)?;
            let stored = finance.add_expenditure(NewExpenditure {
                event_id,
                category_id: data.category_id,
                description: data.description,
                amount: data.amount,
                vendor: data.vendor,
                date: data.date,
                status: data.status.unwrap_or(ExpenditureStatus::Pending),
            })?;
            Ok(success(stored))
        }
        "createBudget" => {
            let data: CreateBudgetData = parse_data(action, request.data)?;
            Ok(success(finance.create_budget(
                &event_id,
                data.total_budget,
                data.currency,
            )?))
        }
        "generateReport" => {
            let data: GenerateReportData = parse_data(action, request.data)?;
            let report_type = data
                .report_type
                .as_deref()
                .map_or(Ok(ReportType::Summary), str::parse)?;
            let generated_by = data.generated_by.unwrap_or_else(|| "system".to_string());
            Ok(success(finance.generate_report(
                &event_id,
                report_type,
                &generated_by,
            )?))
        }
        other => Err(AppError::Validation(format!("Unknown action: {other}")).into()),
    }
}

async fn get_finances(State(state): State<AppState>, Query(query): Query<FinanceQuery>) -> Response {
    dispatch_query(&state, &query).unwrap_or_else(IntoResponse::into_response)
}

fn dispatch_query(state: &AppState, query: &FinanceQuery) -> ApiResult<Response> {
    let event_id = require_event_id(query.event_id.as_deref())?;

    match query.action.as_deref() {
        Some("getFinancialData") => Ok(success(state.finance.get_event_financial_data(&event_id))),
        Some("generateSummary") => Ok(success(
            state.finance.generate_financial_summary(&event_id)?,
        )),
        Some(other) => Err(AppError::Validation(format!("Unknown action: {other}")).into()),
        None => Err(AppError::Validation("action is required".to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use jamii_core::budget::Budget;
    use jamii_core::fundraising::{DonationMethod, Fundraising};
    use jamii_shared::FinancePolicy;
    use jamii_store::{FinanceRepository, FinanceStore};
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::new(FinanceRepository::new(
            Arc::new(FinanceStore::new()),
            FinancePolicy::default(),
        ));
        Router::new().merge(routes()).with_state(state)
    }

    async fn post(app: &Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/finances")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }

    async fn get(app: &Router, query: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/finances{query}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }

    async fn read(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_budget_action() {
        let app = test_app();

        let (status, body) = post(
            &app,
            json!({"action": "createBudget", "eventId": "e1", "data": {"totalBudget": 1000, "currency": "KES"}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        let budget: Budget = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(budget.contingency.amount, dec!(100));
        assert_eq!(budget.categories[0].allocated_amount, dec!(300));
    }

    #[tokio::test]
    async fn test_add_donation_action() {
        let app = test_app();
        post(
            &app,
            json!({"action": "createFundraising", "eventId": "e1", "data": {"targetAmount": 1000}}),
        )
        .await;

        let (status, body) = post(
            &app,
            json!({
                "action": "addDonation",
                "eventId": "e1",
                "data": {"donorName": "A", "amount": 100, "method": "cash", "isAnonymous": false}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let campaign: Fundraising = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(campaign.current_amount, dec!(100));
        let cash = campaign
            .donation_methods
            .iter()
            .find(|m| m.method == DonationMethod::Cash)
            .unwrap();
        assert_eq!(cash.percentage, dec!(100));
    }

    #[tokio::test]
    async fn test_add_donation_without_campaign_is_404() {
        let app = test_app();

        let (status, body) = post(
            &app,
            json!({
                "action": "addDonation",
                "eventId": "nope",
                "data": {"donorName": "A", "amount": 5, "method": "cash"}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("NOT_FOUND"));
    }

    #[rstest]
    #[case(json!({"action": "explode", "eventId": "e1"}))]
    #[case(json!({"action": "createBudget", "data": {"totalBudget": 10}}))]
    #[case(json!({"action": "createBudget", "eventId": "  ", "data": {"totalBudget": 10}}))]
    #[case(json!({"action": "createBudget", "eventId": "e1", "data": {"totalBudget": "lots"}}))]
    #[case(json!({"action": "addExpenditure", "eventId": "e1", "data": {"description": "x", "amount": -1}}))]
    #[case(json!({"action": "createBudget", "eventId": "e1", "data": {"totalBudget": "100000000000000000000"}}))]
    #[case(json!({"action": "createFundraising", "eventId": "e1", "data": {"targetAmount": -5}}))]
    #[case(json!({"action": "addExpenditure", "eventId": "e1", "data": {"description": "x", "amount": "100000000000000000000"}}))]
    #[tokio::test]
    async fn test_invalid_post_is_400(#[case] body: Value) {
        let app = test_app();

        let (status, response) = post(&app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], json!(false));
    }

    #[tokio::test]
    async fn test_donation_past_amount_limit_is_400() {
        let app = test_app();
        post(
            &app,
            json!({"action": "createFundraising", "eventId": "e1", "data": {"targetAmount": 1000}}),
        )
        .await;
        let donate = |amount: &str| {
            json!({
                "action": "addDonation",
                "eventId": "e1",
                "data": {"donorName": "A", "amount": amount, "method": "cash"}
            })
        };

        let (status, _) = post(&app, donate("1000000000000000")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = post(&app, donate("1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("VALIDATION_ERROR"));

        let (status, body) = get(&app, "?eventId=e1&action=getFinancialData").await;
        assert_eq!(status, StatusCode::OK);
        let campaign: Fundraising =
            serde_json::from_value(body["data"]["fundraising"].clone()).unwrap();
        assert_eq!(campaign.current_amount, dec!(1000000000000000));
    }

    #[tokio::test]
    async fn test_initialize_untracked_event_is_422() {
        let app = test_app();

        let (status, _) = post(
            &app,
            json!({"action": "initializeFinances", "eventId": "e1", "data": {"usesFinancialTracking": false}}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_initialize_then_get_financial_data() {
        let app = test_app();

        let (status, _) = post(
            &app,
            json!({
                "action": "initializeFinances",
                "eventId": "e1",
                "data": {"title": "Fair", "usesFinancialTracking": true, "fundraisingGoal": 500, "estimatedCost": 400}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(&app, "?eventId=e1&action=getFinancialData").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["fundraising"].is_object());
        assert!(body["data"]["budget"].is_object());
        assert_eq!(body["data"]["expenditures"], json!([]));
        assert!(body["data"]["summary"].is_object());
    }

    #[tokio::test]
    async fn test_generate_report_action() {
        let app = test_app();
        post(
            &app,
            json!({"action": "createFundraising", "eventId": "e1", "data": {"targetAmount": 100}}),
        )
        .await;
        post(
            &app,
            json!({"action": "createBudget", "eventId": "e1", "data": {"totalBudget": 1000}}),
        )
        .await;
        post(
            &app,
            json!({"action": "addDonation", "eventId": "e1", "data": {"donorName": "B", "amount": 40, "method": "online"}}),
        )
        .await;

        let (status, body) = post(
            &app,
            json!({"action": "generateReport", "eventId": "e1", "data": {"reportType": "Fundraising", "generatedBy": "chair"}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reportType"], json!("fundraising"));
        assert_eq!(body["data"]["generatedBy"], json!("chair"));
        assert_eq!(
            body["data"]["insights"][0]["title"],
            json!("Low Fundraising Progress")
        );
        assert_eq!(body["data"]["insights"][0]["trend"], json!("negative"));
    }

    #[tokio::test]
    async fn test_generate_report_unknown_type_is_400() {
        let app = test_app();

        let (status, body) = post(
            &app,
            json!({"action": "generateReport", "eventId": "e1", "data": {"reportType": "weekly"}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("VALIDATION_ERROR"));
    }

    #[rstest]
    #[case("", StatusCode::BAD_REQUEST)]
    #[case("?action=getFinancialData", StatusCode::BAD_REQUEST)]
    #[case("?eventId=&action=getFinancialData", StatusCode::BAD_REQUEST)]
    #[case("?eventId=e1", StatusCode::BAD_REQUEST)]
    #[case("?eventId=e1&action=deleteEverything", StatusCode::BAD_REQUEST)]
    #[case("?eventId=e1&action=generateSummary", StatusCode::NOT_FOUND)]
    #[case("?eventId=e1&action=getFinancialData", StatusCode::OK)]
    #[tokio::test]
    async fn test_get_status_codes(#[case] query: &str, #[case] expected: StatusCode) {
        let app = test_app();

        let (status, _) = get(&app, query).await;

        assert_eq!(status, expected);
    }

    #[tokio::test]
    async fn test_get_financial_data_for_unknown_event_is_empty() {
        let app = test_app();

        let (_, body) = get(&app, "?eventId=ghost&action=getFinancialData").await;

        assert_eq!(body["data"]["fundraising"], Value::Null);
        assert_eq!(body["data"]["budget"], Value::Null);
        assert_eq!(body["data"]["summary"], Value::Null);
        assert_eq!(body["data"]["expenditures"], json!([]));
    }
}
