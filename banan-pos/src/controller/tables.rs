//! Grid management: adding and removing tables and table types

use banan_client::HttpClient;
use shared::models::{RestaurantTable, TableType};

use super::TableController;
use crate::error::{ErrorScope, PosError, PosResult};
use crate::stats::{TableFilter, TableStats};
use crate::validation::{NewTable, validate_new_table};

impl<C: HttpClient> TableController<C> {
    pub fn table_statistics(&self) -> TableStats {
        TableStats::from_tables(&self.tables)
    }

    pub fn filtered_tables(&self, filter: &TableFilter) -> Vec<&RestaurantTable> {
        filter.apply(&self.tables)
    }

    /// Validate and create a table, then reload the grid
    pub async fn add_table(&mut self, input: &NewTable) -> PosResult<()> {
        const FAILED: &str = "Không thể thêm bàn mới. Vui lòng thử lại.";

        let create = match validate_new_table(input, &self.tables, &self.table_types) {
            Ok(create) => create,
            Err(e) => return self.fail(ErrorScope::AddTable, FAILED, e),
        };

        let result = self.api.tables().create(&create).await;
        if let Err(e) = result {
            let err = PosError::from(e);
            let message = match &err {
                PosError::Client(c) => c.backend_message().map(str::to_string),
                _ => None,
            };
            let outcome = self.fail(ErrorScope::AddTable, FAILED, err);
            if let Some(message) = message {
                self.add_table_error = Some(message);
            }
            return outcome;
        }
        tracing::info!(name = %create.name, table_type = %create.table_type.name, "Table added");

        self.add_table_error = None;
        self.show_flash("Thêm bàn thành công!");
        self.load_tables().await
    }

    /// Delete a table; leaves the table view when it was the selected one
    pub async fn delete_table(&mut self, table_id: &str) -> PosResult<()> {
        let result = self.api.tables().delete(table_id).await;
        if let Err(e) = result {
            self.show_flash("Xóa bàn thất bại!");
            return self.fail(ErrorScope::Table, "Xóa bàn thất bại!", e.into());
        }
        tracing::info!(table_id = %table_id, "Table deleted");

        if self.selected_table.as_deref() == Some(table_id) {
            self.back_to_grid();
        }
        self.payment_requested_at.remove(table_id);
        self.show_flash("Xóa bàn thành công!");
        self.load_tables().await
    }

    /// Create a table type and return it once it shows up in the reloaded list
    pub async fn add_table_type(&mut self, name: &str) -> PosResult<TableType> {
        const FAILED: &str = "Thêm loại bàn thất bại!";

        let name = name.trim();
        if name.is_empty() {
            return self.fail(
                ErrorScope::AddTable,
                FAILED,
                PosError::validation("Vui lòng nhập tên loại bàn."),
            );
        }

        let result = self.api.tables().create_type(name).await;
        if let Err(e) = result {
            return self.fail(ErrorScope::AddTable, FAILED, e.into());
        }
        self.load_table_types().await?;

        let added = self
            .table_types
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.table_types.last())
            .cloned();
        match added {
            Some(table_type) => {
                tracing::info!(id = %table_type.id, name = %table_type.name, "Table type added");
                self.show_flash("Thêm loại bàn thành công!");
                Ok(table_type)
            }
            None => self.fail(
                ErrorScope::AddTable,
                FAILED,
                PosError::not_found("Không tìm thấy loại bàn vừa thêm."),
            ),
        }
    }

    /// Remove a table type, then reload the type list
    pub async fn delete_table_type(&mut self, type_id: &str) -> PosResult<()> {
        let result = self.api.tables().delete_type(type_id).await;
        if let Err(e) = result {
            return self.fail(ErrorScope::AddTable, "Xóa loại bàn thất bại!", e.into());
        }
        tracing::info!(type_id = %type_id, "Table type deleted");
        self.load_table_types().await
    }
}
