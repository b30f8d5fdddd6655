//! Invoice adapter

use shared::ApiResponse;
use shared::models::{Invoice, InvoiceCreate};

use super::{Ack, check, data, list, with_query};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/invoice`
pub struct InvoicesApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> InvoicesApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Invoice>> {
        let resp: ApiResponse<Vec<Invoice>> = self.http.get("/invoice").await?;
        list(resp, "Không thể tải danh sách hóa đơn")
    }

    /// Invoices created on a day (`YYYY-MM-DD`)
    pub async fn list_by_date(&self, date: &str) -> ClientResult<Vec<Invoice>> {
        let path = with_query("/invoice", &[("createdAt", date)])?;
        let resp: ApiResponse<Vec<Invoice>> = self.http.get(&path).await?;
        list(resp, "Không thể tải danh sách hóa đơn")
    }

    /// Pending invoice of a table, computed by the backend
    pub async fn for_table(&self, table_id: &str) -> ClientResult<Invoice> {
        let resp: ApiResponse<Invoice> = self.http.get(&format!("/invoice/{}", table_id)).await?;
        data(resp, "Không thể tải hóa đơn của bàn")
    }

    /// Settle a table. Returns the created invoice when the backend echoes it.
    pub async fn create(
        &self,
        table_id: &str,
        invoice: &InvoiceCreate,
    ) -> ClientResult<Option<Invoice>> {
        let resp: Ack = self
            .http
            .post(&format!("/invoice/{}", table_id), invoice)
            .await?;
        let resp = check(resp, "Không thể tạo hóa đơn")?;
        Ok(resp
            .data
            .and_then(|value| serde_json::from_value::<Invoice>(value).ok()))
    }
}
