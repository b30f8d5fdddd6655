//! Revenue report adapter

use shared::ApiResponse;
use shared::models::Revenue;

use super::{check, list, with_query};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/revenue`
pub struct RevenueApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> RevenueApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Revenue of a single day (`YYYY-MM-DD`); `None` when nothing was sold
    pub async fn day(&self, date: &str) -> ClientResult<Option<Revenue>> {
        let path = with_query("/revenue/day", &[("date", date)])?;
        let resp: ApiResponse<Revenue> = self.http.get(&path).await?;
        Ok(check(resp, "Không thể tải doanh thu theo ngày")?.data)
    }

    /// Daily revenue of the week containing `date`
    pub async fn week(&self, date: &str) -> ClientResult<Vec<Revenue>> {
        let path = with_query("/revenue/week", &[("date", date)])?;
        let resp: ApiResponse<Vec<Revenue>> = self.http.get(&path).await?;
        list(resp, "Không thể tải doanh thu theo tuần")
    }

    /// Daily revenue of a month (`YYYY-MM`)
    pub async fn month(&self, month: &str) -> ClientResult<Vec<Revenue>> {
        let path = with_query("/revenue/month", &[("month", month)])?;
        let resp: ApiResponse<Vec<Revenue>> = self.http.get(&path).await?;
        list(resp, "Không thể tải doanh thu theo tháng")
    }
}
