use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Metrics calculation failed: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("The dataset contains no fiscal years to display")]
    EmptyDataset,
}
