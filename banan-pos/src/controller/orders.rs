//! Cart assembly and order item handling for the selected table

use banan_client::HttpClient;
use futures::future::join_all;
use shared::models::{Dish, OrderItemStatus};

use super::{TableController, ViewMode};
use crate::error::{ErrorScope, PosError, PosResult};
use crate::notifications::Notification;
use crate::view::run_scoped;

impl<C: HttpClient> TableController<C> {
    // ========== Cart ==========

    pub fn add_to_cart(&mut self, dish: &Dish) {
        self.cart.add(dish);
    }

    /// Signed change; the line disappears when it would reach 0
    pub fn change_cart_quantity(&mut self, dish_id: &str, delta: i64) -> Option<u32> {
        self.cart.change_quantity(dish_id, delta)
    }

    pub fn update_cart_note(&mut self, dish_id: &str, note: &str) -> bool {
        self.cart.set_note(dish_id, note)
    }

    /// Send every cart line to the selected table.
    ///
    /// One creation call per line, issued together. On the first failure the
    /// cart is kept and nothing is rolled back. On success the cart is
    /// emptied and the table list and dishes are refetched.
    pub async fn commit_cart_to_table(&mut self) -> PosResult<usize> {
        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Dish, "Không thể thêm món vào bàn", e),
        };
        if self.cart.is_empty() {
            return self.fail(
                ErrorScope::Dish,
                "Không thể thêm món vào bàn",
                PosError::validation("Giỏ hàng đang trống."),
            );
        }

        let lines = self.cart.to_order_lines(&table_id);
        let token = self.tracker.token();
        let results = {
            let orders = self.api.orders();
            let calls = lines
                .iter()
                .map(|line| orders.add(&table_id, std::slice::from_ref(line)));
            tokio::select! {
                biased;
                _ = token.cancelled() => None,
                results = join_all(calls) => Some(results),
            }
        };
        let Some(results) = results else {
            return self.fail(ErrorScope::Dish, "Không thể thêm món vào bàn", PosError::Cancelled);
        };

        let (failed, first_err) = results
            .into_iter()
            .fold((0usize, None), |(failed, first), result| match result {
                Ok(_) => (failed, first),
                Err(e) => (failed + 1, first.or(Some(e))),
            });
        if let Some(err) = first_err {
            tracing::warn!(
                table_id = %table_id,
                lines = lines.len(),
                failed,
                "Cart commit partially failed"
            );
            return self.fail(ErrorScope::Dish, "Không thể thêm món vào bàn", err.into());
        }

        let committed = lines.len();
        tracing::info!(table_id = %table_id, lines = committed, "Cart committed");
        self.cart.clear();
        if self.view == ViewMode::Menu {
            self.view = ViewMode::Table;
        }

        let refreshed = self.fetch_tables().await;
        if let Err(e) = refreshed {
            return self.fail(ErrorScope::Table, "Không thể tải danh sách bàn. Vui lòng thử lại.", e);
        }
        self.refresh_dishes().await?;
        Ok(committed)
    }

    // ========== Dish status ==========

    /// Successor used by the toggle.
    ///
    /// `NotCalled` moves to `Ordered`. Leaving `Cancelled` is a reopen back to
    /// `Ordered`, refused when cancelled items are configured as terminal.
    fn toggle_target(&self, current: OrderItemStatus) -> PosResult<OrderItemStatus> {
        match current.next() {
            Some(next) => Ok(next),
            None if self.options.cancelled_is_terminal => {
                Err(PosError::validation("Món đã bị hủy, không thể đổi trạng thái."))
            }
            None => Ok(OrderItemStatus::Ordered),
        }
    }

    /// Advance one order item along
    /// `Đã gọi → Đang chuẩn bị → Đã hoàn thành → Bị hủy → Đã gọi`.
    ///
    /// The local status changes and a notification is posted only after the
    /// backend accepted the update.
    pub async fn toggle_dish_status(&mut self, order_item_id: &str) -> PosResult<OrderItemStatus> {
        const FAILED: &str = "Không thể cập nhật trạng thái món";

        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };
        let item = match self.order_item(&table_id, order_item_id) {
            Ok(item) => item,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };
        let next = match self.toggle_target(item.status) {
            Ok(next) => next,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };

        let token = self.tracker.token();
        let result = run_scoped(&token, self.api.orders().update_status(&item.id, next)).await;
        if let Err(e) = result {
            return self.fail(ErrorScope::Dish, FAILED, e);
        }

        if item.status == OrderItemStatus::Cancelled {
            tracing::info!(order_item_id = %item.id, "Cancelled order item reopened");
        } else {
            tracing::info!(order_item_id = %item.id, from = %item.status, to = %next, "Order item status changed");
        }
        self.set_item_status(&table_id, &item.id, next);
        self.notifications.push(Notification::new(
            &table_id,
            &item.id,
            &item.dish_name,
            item.quantity,
            next,
        ));
        self.dish_error = None;
        Ok(next)
    }

    fn set_item_status(&mut self, table_id: &str, order_item_id: &str, status: OrderItemStatus) {
        if let Some(item) = self
            .table_mut(table_id)
            .and_then(|t| t.dishes.as_mut())
            .and_then(|items| items.iter_mut().find(|i| i.id == order_item_id))
        {
            item.status = status;
        }
    }

    /// Send every `Chưa gọi` item of the selected table to the kitchen.
    /// Returns how many items were called.
    pub async fn call_order(&mut self) -> PosResult<usize> {
        const FAILED: &str = "Không thể cập nhật trạng thái món";

        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };
        let pending: Vec<_> = self
            .selected_dishes()
            .unwrap_or_default()
            .iter()
            .filter(|i| i.status == OrderItemStatus::NotCalled)
            .cloned()
            .collect();
        if pending.is_empty() {
            tracing::debug!(table_id = %table_id, "No uncalled items");
            return Ok(0);
        }

        let token = self.tracker.token();
        for item in &pending {
            let result = run_scoped(
                &token,
                self.api.orders().update_status(&item.id, OrderItemStatus::Ordered),
            )
            .await;
            if let Err(e) = result {
                return self.fail(ErrorScope::Dish, FAILED, e);
            }
            self.set_item_status(&table_id, &item.id, OrderItemStatus::Ordered);
            self.notifications.push(Notification::new(
                &table_id,
                &item.id,
                &item.dish_name,
                item.quantity,
                OrderItemStatus::Ordered,
            ));
        }
        tracing::info!(table_id = %table_id, count = pending.len(), "Order called");

        self.refresh_dishes().await?;
        Ok(pending.len())
    }

    // ========== Quantity and removal ==========

    /// Push an absolute quantity for one order item, then refetch
    pub async fn change_dish_quantity(&mut self, order_item_id: &str, quantity: u32) -> PosResult<()> {
        const FAILED: &str = "Không thể cập nhật số lượng món";

        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };
        if quantity == 0 {
            return self.fail(
                ErrorScope::Dish,
                FAILED,
                PosError::validation("Số lượng phải lớn hơn 0."),
            );
        }

        let token = self.tracker.token();
        let result = run_scoped(
            &token,
            self.api.orders().update_quantity(&table_id, order_item_id, quantity),
        )
        .await;
        if let Err(e) = result {
            return self.fail(ErrorScope::Dish, FAILED, e);
        }
        tracing::info!(table_id = %table_id, order_item_id = %order_item_id, quantity, "Order item quantity set");
        self.refresh_dishes().await
    }

    /// Remove one order item from the selected table, then refetch
    pub async fn delete_dish(&mut self, order_item_id: &str) -> PosResult<()> {
        const FAILED: &str = "Không thể xóa món khỏi bàn";

        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };

        let token = self.tracker.token();
        let result = run_scoped(&token, self.api.orders().remove(&table_id, order_item_id)).await;
        if let Err(e) = result {
            return self.fail(ErrorScope::Dish, FAILED, e);
        }
        tracing::info!(table_id = %table_id, order_item_id = %order_item_id, "Order item removed");
        self.selected_dish = None;
        self.show_flash("Xóa món thành công!");
        self.refresh_dishes().await
    }
}
