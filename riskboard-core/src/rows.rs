use crate::format::{format_amount, format_model, format_score};
use crate::types::{ExpenseRecord, Risk, ScoreRequest, ScoreResponse};

/// One rendered table row. Cells are display-ready strings; `risk` drives the
/// risk cell's class.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub expense_id: String,
    pub category: String,
    pub amount: String,
    pub department: String,
    pub date: String,
    pub score: String,
    pub risk_label: String,
    pub risk: Risk,
    pub model: String,
}

impl DisplayRow {
    pub fn from_record(record: &ExpenseRecord, currency_label: &str) -> Self {
        Self {
            expense_id: record.expense_id.clone(),
            category: record.category.clone(),
            amount: format_amount(currency_label, record.amount),
            department: record.department.clone(),
            date: record.date.clone(),
            score: format_score(record.score),
            risk_label: record.risk.clone(),
            risk: Risk::from_label(&record.risk),
            model: format_model(record.model.as_deref()),
        }
    }

    /// Row for a freshly scored submission. The request date stands in for
    /// the record date.
    pub fn from_submission(
        request: &ScoreRequest,
        response: &ScoreResponse,
        currency_label: &str,
    ) -> Self {
        Self {
            expense_id: request.expense_id.clone(),
            category: request.category.clone(),
            amount: format_amount(currency_label, request.amount),
            department: request.department.clone(),
            date: request.request_date.clone(),
            score: format_score(response.score),
            risk_label: response.risk.clone(),
            risk: Risk::from_label(&response.risk),
            model: format_model(response.model.as_deref()),
        }
    }

    pub fn risk_class(&self) -> &'static str {
        self.risk.css_class()
    }
}

/// Render records in server order.
pub fn render_rows(records: &[ExpenseRecord], currency_label: &str) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|record| DisplayRow::from_record(record, currency_label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, amount: f64, score: f64, risk: &str) -> ExpenseRecord {
        ExpenseRecord {
            expense_id: id.to_string(),
            category: "taxi".to_string(),
            amount,
            department: "Financeiro".to_string(),
            date: "2024-05-02".to_string(),
            score,
            risk: risk.to_string(),
            model: None,
        }
    }

    #[test]
    fn test_row_formatting() {
        let row = DisplayRow::from_record(&record("E1", 12.5, 0.2, "baixo"), "R$");
        assert_eq!(row.amount, "R$ 12.50");
        assert_eq!(row.score, "0.200");
        assert_eq!(row.model, "\u{2014}");
        assert_eq!(row.risk_label, "baixo");
        assert_eq!(row.risk_class(), "risk-low");
    }

    #[test]
    fn test_render_keeps_server_order_and_source() {
        let records = vec![
            record("E3", 1.0, 0.9, "alto"),
            record("E1", 2.0, 0.1, "baixo"),
            record("E2", 3.0, 0.5, "medio"),
        ];
        let before = records.clone();
        let rows = render_rows(&records, "R$");
        let ids: Vec<&str> = rows.iter().map(|r| r.expense_id.as_str()).collect();
        assert_eq!(ids, vec!["E3", "E1", "E2"]);
        assert_eq!(records, before);
    }

    #[test]
    fn test_row_from_submission_uses_request_date() {
        let request = ScoreRequest {
            expense_id: "E42".to_string(),
            request_id: "R7".to_string(),
            requester_id: "U100".to_string(),
            traveller_id: "U100".to_string(),
            approver_id: "A10".to_string(),
            request_date: "2024-06-01".to_string(),
            travel_date: "2024-06-03".to_string(),
            category: "hospedagem".to_string(),
            description: String::new(),
            amount: 350.0,
            currency: "BRL".to_string(),
            job_title: "Analista".to_string(),
            department: "Vendas".to_string(),
            approval_status: "Aprovado".to_string(),
        };
        let response = ScoreResponse {
            score: 0.42,
            risk: "high".to_string(),
            flags: None,
            model: Some("DecisionTree".to_string()),
        };
        let row = DisplayRow::from_submission(&request, &response, "R$");
        assert_eq!(row.expense_id, "E42");
        assert_eq!(row.date, "2024-06-01");
        assert_eq!(row.amount, "R$ 350.00");
        assert_eq!(row.score, "0.420");
        assert_eq!(row.risk, Risk::High);
        assert_eq!(row.model, "DecisionTree");
    }
}
