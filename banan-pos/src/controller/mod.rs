//! Table screen controller
//!
//! Single owner of the table screen state: loaded tables, the selected table
//! and its dishes, the cart, the payment dialog, the notification feed and
//! the scoped error strings. Handlers receive it by `&mut`.
//!
//! Every backend failure is caught here, logged, turned into a localized
//! string in the matching error slot and returned as a typed error. Requests
//! issued from the table view run in a cancellable scope; a cancelled request
//! returns `PosError::Cancelled` and leaves state untouched.

mod orders;
mod payment;
mod tables;

use std::collections::HashMap;

use banan_client::{HttpClient, RestaurantApi};
use chrono::{DateTime, Local};
use shared::models::{Dish, OrderItem, RestaurantTable, TableType};
use tokio_util::sync::CancellationToken;

use crate::cart::Cart;
use crate::config::ControllerOptions;
use crate::error::{ErrorScope, PosError, PosResult};
use crate::notifications::{Flash, NotificationFeed};
use crate::payment::PaymentDialog;
use crate::routes::Route;
use crate::view::{NavigationHandle, ViewTracker, run_scoped};

/// Which part of the table screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
    Menu,
}

pub struct TableController<C: HttpClient> {
    api: RestaurantApi<C>,
    options: ControllerOptions,
    tracker: ViewTracker,

    tables: Vec<RestaurantTable>,
    table_types: Vec<TableType>,
    menu: Vec<Dish>,

    view: ViewMode,
    route: Route,
    selected_table: Option<String>,
    selected_dish: Option<String>,
    cart: Cart,
    payment: PaymentDialog,
    payment_requested_at: HashMap<String, DateTime<Local>>,
    notifications: NotificationFeed,
    flash: Option<Flash>,

    table_error: Option<String>,
    dish_error: Option<String>,
    add_table_error: Option<String>,
}

impl<C: HttpClient> TableController<C> {
    pub fn new(api: RestaurantApi<C>, options: ControllerOptions) -> Self {
        Self {
            api,
            options,
            tracker: ViewTracker::new(),
            tables: Vec::new(),
            table_types: Vec::new(),
            menu: Vec::new(),
            view: ViewMode::Grid,
            route: Route::Tables,
            selected_table: None,
            selected_dish: None,
            cart: Cart::new(),
            payment: PaymentDialog::default(),
            payment_requested_at: HashMap::new(),
            notifications: NotificationFeed::default(),
            flash: None,
            table_error: None,
            dish_error: None,
            add_table_error: None,
        }
    }

    // ========== State accessors ==========

    pub fn api(&self) -> &RestaurantApi<C> {
        &self.api
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn tables(&self) -> &[RestaurantTable] {
        &self.tables
    }

    pub fn table(&self, table_id: &str) -> Option<&RestaurantTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Lookup by id first, then by exact name
    pub fn find_table(&self, key: &str) -> Option<&RestaurantTable> {
        self.table(key)
            .or_else(|| self.tables.iter().find(|t| t.name == key))
    }

    pub fn table_types(&self) -> &[TableType] {
        &self.table_types
    }

    pub fn menu(&self) -> &[Dish] {
        &self.menu
    }

    pub fn view(&self) -> ViewMode {
        if self.left_elsewhere() {
            return ViewMode::Grid;
        }
        self.view
    }

    /// Page the front end should show; `Login` after the session expired
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn selected_table_id(&self) -> Option<&str> {
        if self.left_elsewhere() {
            return None;
        }
        self.selected_table.as_deref()
    }

    pub fn selected_table(&self) -> Option<&RestaurantTable> {
        self.selected_table_id().and_then(|id| self.table(id))
    }

    /// Order items of the selected table, once fetched
    pub fn selected_dishes(&self) -> Option<&[OrderItem]> {
        self.selected_table().and_then(|t| t.dishes.as_deref())
    }

    pub fn selected_dish(&self) -> Option<&str> {
        self.selected_dish.as_deref()
    }

    pub fn select_dish(&mut self, order_item_id: Option<String>) {
        self.selected_dish = order_item_id;
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn payment(&self) -> &PaymentDialog {
        &self.payment
    }

    /// When payment was requested for a table, in local time
    pub fn payment_requested_at(&self, table_id: &str) -> Option<DateTime<Local>> {
        self.payment_requested_at.get(table_id).copied()
    }

    pub fn notifications(&self) -> &NotificationFeed {
        &self.notifications
    }

    /// Flash notice, if still within its lifetime
    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref().filter(|f| f.is_visible())
    }

    pub fn table_error(&self) -> Option<&str> {
        self.table_error.as_deref()
    }

    pub fn dish_error(&self) -> Option<&str> {
        self.dish_error.as_deref()
    }

    pub fn add_table_error(&self) -> Option<&str> {
        self.add_table_error.as_deref()
    }

    pub fn error(&self, scope: ErrorScope) -> Option<&str> {
        match scope {
            ErrorScope::Table => self.table_error(),
            ErrorScope::Dish => self.dish_error(),
            ErrorScope::AddTable => self.add_table_error(),
        }
    }

    /// Handle another task can use to leave the table view
    pub fn navigation(&self) -> NavigationHandle {
        self.tracker.handle()
    }

    // ========== Internal helpers ==========

    fn clear_errors(&mut self) {
        self.table_error = None;
        self.dish_error = None;
    }

    fn show_flash(&mut self, message: &str) {
        self.flash = Some(Flash::new(message, self.options.flash_duration));
    }

    /// A table is selected but its visit was cancelled through a
    /// `NavigationHandle`
    fn left_elsewhere(&self) -> bool {
        self.selected_table.is_some() && self.tracker.token().is_cancelled()
    }

    /// Catch up with a leave requested from another task: drop the selection
    /// exactly as `back_to_grid` does
    fn settle_navigation(&mut self) {
        if !self.left_elsewhere() {
            return;
        }
        tracing::debug!(table_id = ?self.selected_table, "Table view left from another task");
        self.selected_table = None;
        self.selected_dish = None;
        self.view = ViewMode::Grid;
        self.cart.clear();
        self.payment.close();
        self.clear_errors();
    }

    fn require_table(&mut self) -> PosResult<String> {
        self.settle_navigation();
        self.selected_table
            .clone()
            .ok_or_else(|| PosError::validation("Vui lòng chọn bàn trước."))
    }

    fn table_mut(&mut self, table_id: &str) -> Option<&mut RestaurantTable> {
        self.tables.iter_mut().find(|t| t.id == table_id)
    }

    fn order_item(&self, table_id: &str, order_item_id: &str) -> PosResult<OrderItem> {
        self.table(table_id)
            .and_then(|t| t.dishes.as_ref())
            .and_then(|items| items.iter().find(|i| i.id == order_item_id))
            .cloned()
            .ok_or_else(|| PosError::not_found("Không tìm thấy món trong bàn."))
    }

    /// Record a failure in its error slot and hand it back.
    ///
    /// Cancelled requests leave state alone. An expired session routes to the
    /// login page and drops view state.
    fn fail<T>(&mut self, scope: ErrorScope, fallback: &str, err: PosError) -> PosResult<T> {
        if err.is_cancelled() {
            tracing::debug!(operation = fallback, "Request cancelled, response dropped");
            self.settle_navigation();
            return Err(err);
        }

        tracing::warn!(scope = ?scope, operation = fallback, error = %err, "Operation failed");
        if err.is_session_expired() {
            self.route = Route::Login;
            self.tracker.leave();
            self.selected_table = None;
            self.view = ViewMode::Grid;
            self.cart.clear();
            self.payment.close();
        }

        let message = err.user_message(fallback);
        match scope {
            ErrorScope::Table => self.table_error = Some(message),
            ErrorScope::Dish => self.dish_error = Some(message),
            ErrorScope::AddTable => self.add_table_error = Some(message),
        }
        Err(err)
    }

    /// Replace the table list, keeping dishes already fetched for a table
    /// when the new entry carries none
    fn merge_tables(&mut self, fresh: Vec<RestaurantTable>) {
        let mut previous: HashMap<String, Vec<OrderItem>> = self
            .tables
            .drain(..)
            .filter_map(|t| t.dishes.map(|d| (t.id, d)))
            .collect();
        self.tables = fresh
            .into_iter()
            .map(|mut t| {
                if t.dishes.is_none() {
                    t.dishes = previous.remove(&t.id);
                }
                t
            })
            .collect();
    }

    async fn fetch_tables(&mut self) -> PosResult<()> {
        let fresh = self.api.tables().list().await?;
        tracing::debug!(count = fresh.len(), "Tables loaded");
        self.merge_tables(fresh);
        Ok(())
    }

    async fn fetch_dishes(&mut self, token: &CancellationToken, table_id: &str) -> PosResult<()> {
        let items = run_scoped(token, self.api.orders().list(table_id)).await?;
        tracing::debug!(table_id = %table_id, count = items.len(), "Table dishes loaded");
        if let Some(table) = self.table_mut(table_id) {
            table.dishes = Some(items);
        }
        Ok(())
    }

    // ========== Loading ==========

    pub async fn load_tables(&mut self) -> PosResult<()> {
        let result = self.fetch_tables().await;
        match result {
            Ok(()) => {
                self.table_error = None;
                Ok(())
            }
            Err(e) => self.fail(
                ErrorScope::Table,
                "Không thể tải danh sách bàn. Vui lòng thử lại.",
                e,
            ),
        }
    }

    pub async fn load_table_types(&mut self) -> PosResult<()> {
        let result = self.api.tables().types().await;
        match result {
            Ok(types) => {
                self.table_types = types;
                Ok(())
            }
            Err(e) => self.fail(
                ErrorScope::AddTable,
                "Không thể tải danh sách loại bàn",
                e.into(),
            ),
        }
    }

    /// Menu shown while ordering; optionally restricted to one dish type
    pub async fn load_menu(&mut self, dish_type_id: Option<&str>) -> PosResult<()> {
        self.settle_navigation();
        // outside a table visit the request is not tied to any view
        let token = match self.selected_table {
            Some(_) => self.tracker.token(),
            None => CancellationToken::new(),
        };
        let result = match dish_type_id {
            Some(type_id) => run_scoped(&token, self.api.menu().dishes_by_type(type_id)).await,
            None => run_scoped(&token, self.api.menu().dishes()).await,
        };
        match result {
            Ok(dishes) => {
                self.menu = dishes;
                Ok(())
            }
            Err(e) => self.fail(ErrorScope::Dish, "Không thể tải thực đơn", e),
        }
    }

    // ========== Navigation ==========

    /// Make `table_id` the active table and fetch its order items.
    ///
    /// A failed fetch sets the dish error but keeps the selection.
    pub async fn select_table(&mut self, table_id: &str) -> PosResult<()> {
        if self.table(table_id).is_none() {
            return self.fail(
                ErrorScope::Table,
                "Không tìm thấy bàn",
                PosError::not_found(format!("Không tìm thấy bàn {}", table_id)),
            );
        }

        let token = self.tracker.enter();
        tracing::info!(table_id = %table_id, "Table selected");
        self.selected_table = Some(table_id.to_string());
        self.selected_dish = None;
        self.view = ViewMode::Table;
        self.cart.clear();
        self.payment.close();
        self.clear_errors();

        let result = self.fetch_dishes(&token, table_id).await;
        match result {
            Ok(()) => Ok(()),
            Err(e) => self.fail(ErrorScope::Dish, "Không thể tải danh sách món ăn của bàn", e),
        }
    }

    /// Refetch the selected table's order items
    pub async fn refresh_dishes(&mut self) -> PosResult<()> {
        let table_id = self.require_table()?;
        let token = self.tracker.token();
        let result = self.fetch_dishes(&token, &table_id).await;
        match result {
            Ok(()) => Ok(()),
            Err(e) => self.fail(ErrorScope::Dish, "Không thể tải danh sách món ăn của bàn", e),
        }
    }

    /// Leave the table view. In-flight requests of the view are cancelled.
    pub fn back_to_grid(&mut self) {
        self.tracker.leave();
        self.selected_table = None;
        self.selected_dish = None;
        self.view = ViewMode::Grid;
        self.cart.clear();
        self.payment.close();
        self.clear_errors();
    }

    /// Switch the selected table to the menu; the cart starts empty
    pub async fn show_menu(&mut self) -> PosResult<()> {
        if let Err(e) = self.require_table() {
            return self.fail(ErrorScope::Dish, "Vui lòng chọn bàn trước.", e);
        }
        self.view = ViewMode::Menu;
        self.cart.clear();
        self.load_menu(None).await
    }

    pub fn back_from_menu(&mut self) {
        self.settle_navigation();
        if self.view == ViewMode::Menu {
            self.view = ViewMode::Table;
        }
        self.cart.clear();
        self.dish_error = None;
    }
}
