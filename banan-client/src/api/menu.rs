//! Menu adapter: dishes and dish types

use shared::ApiResponse;
use shared::models::{Dish, DishCreate, DishType, DishTypeCreate, DishUpdate};

use super::{Ack, ack, list, with_query};
use crate::client::HttpClient;
use crate::error::ClientResult;

/// `/dishes` and `/dish-types`
pub struct MenuApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> MenuApi<'a, C> {
    pub(crate) fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn dishes(&self) -> ClientResult<Vec<Dish>> {
        let resp: ApiResponse<Vec<Dish>> = self.http.get("/dishes").await?;
        list(resp, "Không thể tải thực đơn")
    }

    pub async fn dishes_by_type(&self, dish_type_id: &str) -> ClientResult<Vec<Dish>> {
        let path = with_query("/dishes", &[("dishTypeId", dish_type_id)])?;
        let resp: ApiResponse<Vec<Dish>> = self.http.get(&path).await?;
        list(resp, "Không thể tải món theo loại")
    }

    pub async fn create_dish(&self, dish: &DishCreate) -> ClientResult<()> {
        let resp: Ack = self.http.post("/dishes", dish).await?;
        ack(resp, "Không thể thêm món")?;
        Ok(())
    }

    pub async fn update_dish(&self, dish_id: &str, update: &DishUpdate) -> ClientResult<()> {
        let resp: Ack = self.http.put(&format!("/dishes/{}", dish_id), update).await?;
        ack(resp, "Không thể cập nhật món")?;
        Ok(())
    }

    pub async fn delete_dish(&self, dish_id: &str) -> ClientResult<()> {
        let resp: Ack = self.http.delete(&format!("/dishes/{}", dish_id)).await?;
        ack(resp, "Không thể xóa món")?;
        Ok(())
    }

    pub async fn dish_types(&self) -> ClientResult<Vec<DishType>> {
        let resp: ApiResponse<Vec<DishType>> = self.http.get("/dish-types").await?;
        list(resp, "Không thể tải loại món")
    }

    pub async fn create_dish_type(&self, name: &str) -> ClientResult<()> {
        let body = DishTypeCreate {
            name: name.to_string(),
        };
        let resp: Ack = self.http.post("/dish-types", &body).await?;
        ack(resp, "Không thể tạo loại món")?;
        Ok(())
    }

    pub async fn delete_dish_type(&self, type_id: &str) -> ClientResult<()> {
        let resp: Ack = self.http.delete(&format!("/dish-types/{}", type_id)).await?;
        ack(resp, "Không thể xóa loại món")?;
        Ok(())
    }
}
