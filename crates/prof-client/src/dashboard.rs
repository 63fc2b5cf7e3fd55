use prof_core::entities::DashboardStats;

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /dashboard/stats`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        const PATH: &str = "/dashboard/stats";
        self.get(PATH).await?.field_or_default("stats", PATH)
    }
}
