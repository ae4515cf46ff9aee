use std::sync::{Arc, Mutex};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::api::ScoringApi;
use crate::config::SubmitMode;
use crate::error::DashboardError;
use crate::format::{format_score, parse_amount};
use crate::rows::DisplayRow;
use crate::surface::DashboardSurface;
use crate::types::{ScoreRequest, ScoreResponse};

pub const DEFAULT_REQUESTER: &str = "U100";
pub const DEFAULT_TRAVELLER: &str = "U100";
pub const DEFAULT_APPROVER: &str = "A10";
pub const DEFAULT_CURRENCY: &str = "BRL";
pub const DEFAULT_JOB_TITLE: &str = "Analista";
pub const DEFAULT_DEPARTMENT: &str = "Financeiro";
pub const DEFAULT_STATUS: &str = "Aprovado";

pub const IN_PROGRESS_TEXT: &str = "Calculating...";

/// Upper bound (exclusive) of the numeric part of generated identifiers.
const ID_RANGE: u32 = 10_000_000;

/// Raw values of the score form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub requester: String,
    pub traveller: String,
    pub approver: String,
    pub request_date: String,
    pub travel_date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub currency: String,
    pub job_title: String,
    pub department: String,
    pub status: String,
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

impl FormValues {
    /// Build the request payload, substituting defaults for blank fields.
    /// Dates and category are passed through untouched.
    pub fn to_request(&self, expense_id: String, request_id: String) -> ScoreRequest {
        ScoreRequest {
            expense_id,
            request_id,
            requester_id: or_default(&self.requester, DEFAULT_REQUESTER),
            traveller_id: or_default(&self.traveller, DEFAULT_TRAVELLER),
            approver_id: or_default(&self.approver, DEFAULT_APPROVER),
            request_date: self.request_date.clone(),
            travel_date: self.travel_date.clone(),
            category: self.category.clone(),
            description: self.description.trim().to_string(),
            amount: parse_amount(&self.amount),
            currency: or_default(&self.currency, DEFAULT_CURRENCY),
            job_title: or_default(&self.job_title, DEFAULT_JOB_TITLE),
            department: or_default(&self.department, DEFAULT_DEPARTMENT),
            approval_status: or_default(&self.status, DEFAULT_STATUS),
        }
    }
}

/// Client-side expense/request identifiers: a letter prefix and a number in
/// `[0, 10^7)`. Collisions are possible and tolerated.
#[derive(Clone)]
pub struct IdGenerator {
    rng: Arc<Mutex<SmallRng>>,
}

impl IdGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(SmallRng::seed_from_u64(seed))),
        }
    }

    fn token(&self, prefix: char) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        format!("{}{}", prefix, rng.random_range(0..ID_RANGE))
    }

    /// `(expense_id, request_id)`.
    pub fn next_pair(&self) -> (String, String) {
        (self.token('E'), self.token('R'))
    }
}

/// Submits a what-if score and, in optimistic mode, prepends the scored row
/// without re-fetching the table.
#[derive(Clone)]
pub struct OptimisticSubmitController<A, S> {
    api: A,
    surface: S,
    ids: IdGenerator,
    currency_label: String,
    mode: SubmitMode,
}

impl<A: ScoringApi, S: DashboardSurface> OptimisticSubmitController<A, S> {
    pub fn new(
        api: A,
        surface: S,
        ids: IdGenerator,
        currency_label: impl Into<String>,
        mode: SubmitMode,
    ) -> Self {
        Self {
            api,
            surface,
            ids,
            currency_label: currency_label.into(),
            mode,
        }
    }

    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    /// Every failure ends up as `"Error: <message>"` in the result region with
    /// warnings cleared; the table is only touched on success.
    pub async fn submit(&self, form: &FormValues) -> Result<ScoreResponse, DashboardError> {
        let (expense_id, request_id) = self.ids.next_pair();
        let request = form.to_request(expense_id, request_id);

        self.surface.set_result_text(IN_PROGRESS_TEXT.to_string());
        self.surface.set_warnings_text(String::new());

        match self.api.predict(&request).await {
            Ok(response) => {
                self.surface.set_result_text(format!(
                    "Score: {} \u{2014} Risk: {}",
                    format_score(response.score),
                    response.risk
                ));
                self.surface
                    .set_warnings_text(response.flags_text().unwrap_or_default());

                if self.mode == SubmitMode::Optimistic {
                    self.surface.prepend_row(DisplayRow::from_submission(
                        &request,
                        &response,
                        &self.currency_label,
                    ));
                }
                info!(
                    "Scored {}: {} ({})",
                    request.expense_id,
                    format_score(response.score),
                    response.risk
                );
                Ok(response)
            }
            Err(e) => {
                warn!("Scoring {} failed: {}", request.expense_id, e);
                self.surface.set_result_text(format!("Error: {}", e));
                self.surface.set_warnings_text(String::new());
                Err(e)
            }
        }
    }
}
