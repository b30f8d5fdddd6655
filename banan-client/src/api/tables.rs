//! Table repository adapter

use shared::ApiResponse;
use shared::models::{
    RestaurantTable, TableCreate, TableStatus, TableStatusUpdate, TableType, TableTypeCreate,
};

use super::{Ack, ack, list};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/tables` and `/tables/type`
pub struct TablesApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> TablesApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<RestaurantTable>> {
        let resp: ApiResponse<Vec<RestaurantTable>> = self.http.get("/tables").await?;
        list(resp, "Không thể tải danh sách bàn")
    }

    pub async fn create(&self, table: &TableCreate) -> ClientResult<()> {
        let resp: Ack = self.http.post("/tables", table).await?;
        let message = ack(resp, "Không thể thêm bàn mới")?;
        tracing::debug!(name = %table.name, message = %message, "Table created");
        Ok(())
    }

    pub async fn delete(&self, table_id: &str) -> ClientResult<()> {
        let resp: Ack = self.http.delete(&format!("/tables/{}", table_id)).await?;
        ack(resp, "Không thể xóa bàn")?;
        Ok(())
    }

    pub async fn update_status(&self, table_id: &str, status: TableStatus) -> ClientResult<()> {
        let body = TableStatusUpdate { status };
        let resp: Ack = self
            .http
            .patch(&format!("/tables/{}/update-status", table_id), &body)
            .await?;
        ack(resp, "Không thể cập nhật trạng thái bàn")?;
        Ok(())
    }

    pub async fn types(&self) -> ClientResult<Vec<TableType>> {
        let resp: ApiResponse<Vec<TableType>> = self.http.get("/tables/type").await?;
        list(resp, "Không thể tải danh sách loại bàn")
    }

    pub async fn create_type(&self, name: &str) -> ClientResult<()> {
        let body = TableTypeCreate {
            name: name.to_string(),
        };
        let resp: Ack = self.http.post("/tables/type", &body).await?;
        ack(resp, "Không thể thêm loại bàn")?;
        Ok(())
    }

    pub async fn delete_type(&self, type_id: &str) -> ClientResult<()> {
        let resp: Ack = self.http.delete(&format!("/tables/type/{}", type_id)).await?;
        ack(resp, "Không thể xóa loại bàn")?;
        Ok(())
    }
}
