pub mod budget_service;
pub mod insight_service;
pub mod report_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use insight_service::InsightService;
pub use report_service::{MonthTotals, ReportService};
pub use transaction_service::TransactionService;

use crate::errors::FinanceError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Finance(#[from] FinanceError),
    #[error("{0}")]
    Invalid(String),
}
