//! Order item adapter, scoped to a table

use shared::ApiResponse;
use shared::models::{OrderItem, OrderItemCreate, OrderItemQuantityUpdate, OrderItemStatus};

use super::{Ack, ack, list, with_query};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/order-items`
pub struct OrdersApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> OrdersApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self, table_id: &str) -> ClientResult<Vec<OrderItem>> {
        let resp: ApiResponse<Vec<OrderItem>> =
            self.http.get(&format!("/order-items/{}", table_id)).await?;
        list(resp, "Không thể tải món ăn của bàn")
    }

    /// Attach order lines to a table
    pub async fn add(&self, table_id: &str, items: &[OrderItemCreate]) -> ClientResult<()> {
        let resp: Ack = self
            .http
            .post(&format!("/order-items/{}", table_id), &items)
            .await?;
        ack(resp, "Không thể thêm món vào bàn")?;
        Ok(())
    }

    pub async fn update_status(&self, item_id: &str, status: OrderItemStatus) -> ClientResult<()> {
        let path = with_query(
            &format!("/order-items/{}/update-status", item_id),
            &[("status", status.as_str())],
        )?;
        let resp: Ack = self.http.patch_empty(&path).await?;
        ack(resp, "Không thể cập nhật trạng thái món")?;
        Ok(())
    }

    /// Push an absolute quantity (not a delta)
    pub async fn update_quantity(
        &self,
        table_id: &str,
        item_id: &str,
        quantity: u32,
    ) -> ClientResult<()> {
        let body = OrderItemQuantityUpdate {
            id: item_id.to_string(),
            quantity,
        };
        let resp: Ack = self
            .http
            .patch(&format!("/order-items/{}/quantity", table_id), &body)
            .await?;
        ack(resp, "Không thể cập nhật số lượng món")?;
        Ok(())
    }

    pub async fn remove(&self, table_id: &str, item_id: &str) -> ClientResult<()> {
        let path = with_query(&format!("/order-items/{}", item_id), &[("tableId", table_id)])?;
        let resp: Ack = self.http.delete(&path).await?;
        ack(resp, "Không thể xóa món khỏi bàn")?;
        Ok(())
    }
}
