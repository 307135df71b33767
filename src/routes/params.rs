use serde::Deserialize;
use utoipa::IntoParams;

/// Offset pagination shared by every list endpoint. No upper bound is put on `limit`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Rows to skip, default 0.
    pub skip: Option<u64>,
    /// Maximum rows to return; absent means all.
    pub limit: Option<u64>,
}

impl PageParams {
    pub fn new(skip: u64, limit: Option<u64>) -> Self {
        Self {
            skip: Some(skip),
            limit,
        }
    }

    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }
}
