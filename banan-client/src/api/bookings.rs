//! Table booking adapter

use shared::ApiResponse;
use shared::models::{Booking, BookingCreate};

use super::{Ack, ack, list};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/ordered-table`
pub struct BookingsApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> BookingsApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Booking>> {
        let resp: ApiResponse<Vec<Booking>> = self.http.get("/ordered-table").await?;
        list(resp, "Không thể tải danh sách đặt bàn")
    }

    pub async fn create(&self, booking: &BookingCreate) -> ClientResult<()> {
        let resp: Ack = self.http.post("/ordered-table", booking).await?;
        ack(resp, "Không thể đặt bàn")?;
        Ok(())
    }

    pub async fn approve(&self, booking_id: &str) -> ClientResult<()> {
        let resp: Ack = self
            .http
            .put_empty(&format!("/ordered-table/{}/approve", booking_id))
            .await?;
        ack(resp, "Không thể duyệt đặt bàn")?;
        Ok(())
    }

    pub async fn reject(&self, booking_id: &str) -> ClientResult<()> {
        let resp: Ack = self
            .http
            .put_empty(&format!("/ordered-table/{}/reject", booking_id))
            .await?;
        ack(resp, "Không thể từ chối đặt bàn")?;
        Ok(())
    }
}
