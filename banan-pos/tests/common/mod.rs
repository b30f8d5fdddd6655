//! In-memory restaurant backend driven through `OneshotHttpClient`

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use banan_client::{OneshotHttpClient, RestaurantApi, SessionStore};
use banan_pos::{ControllerOptions, TableController};
use serde_json::{Value, json};
use shared::ApiResponse;
use shared::models::{
    Dish, DishType, Invoice, InvoiceCreate, InvoiceDish, InvoiceStatus, OrderItem, OrderItemCreate,
    OrderItemQuantityUpdate, OrderItemStatus, RestaurantTable, Review, TableCreate, TableStatus,
    TableStatusUpdate, TableType,
};

#[derive(Default)]
pub struct BackendState {
    pub tables: Vec<RestaurantTable>,
    pub items: HashMap<String, Vec<OrderItem>>,
    pub dishes: Vec<Dish>,
    pub table_types: Vec<TableType>,
    pub invoices: Vec<Invoice>,
    pub reviews: Vec<Review>,
    pub dish_types: Vec<DishType>,
    pub calls: Vec<String>,
    pub pay_methods: Vec<Option<String>>,

    /// `update-status` of order items answers `{code: 500}`
    pub fail_item_status: bool,
    /// `update-status` of tables answers `{code: 500}`
    pub fail_table_status: bool,
    /// Order-item creation fails from this call index on (0-based)
    pub fail_order_add_from: Option<usize>,
    /// GET /order-items never answers
    pub hang_item_list: bool,
    /// GET /order-items answers `{code: 500}`
    pub fail_item_list: bool,
    /// GET /tables answers 401
    pub reject_token: bool,

    next_id: u32,
    order_add_calls: usize,
}

impl BackendState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    fn record(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }

    fn find_item_mut(&mut self, item_id: &str) -> Option<&mut OrderItem> {
        self.items
            .values_mut()
            .flat_map(|items| items.iter_mut())
            .find(|i| i.id == item_id)
    }
}

pub type Shared = Arc<Mutex<BackendState>>;

pub type Controller = TableController<OneshotHttpClient>;

fn ok<T: serde::Serialize>(data: T) -> Response {
    Json(ApiResponse::ok(data)).into_response()
}

fn ack() -> Response {
    Json(json!({"code": 200, "message": "Success", "data": null})).into_response()
}

fn business_error(message: &str) -> Response {
    Json(ApiResponse::<()>::error(500, message)).into_response()
}

fn lock(state: &Shared) -> MutexGuard<'_, BackendState> {
    state.lock().unwrap()
}

async fn list_tables(State(state): State<Shared>) -> Response {
    let mut s = lock(&state);
    s.record("GET /tables");
    if s.reject_token {
        return (StatusCode::UNAUTHORIZED, "token expired").into_response();
    }
    ok(s.tables.clone())
}

async fn create_table(State(state): State<Shared>, Json(body): Json<TableCreate>) -> Response {
    let mut s = lock(&state);
    s.record("POST /tables");
    if s.tables.iter().any(|t| t.name == body.name) {
        return Json(ApiResponse::<()>::error(400, "Tên bàn đã tồn tại")).into_response();
    }
    let id = s.next_id("t");
    s.tables.push(RestaurantTable {
        id,
        name: body.name,
        status: TableStatus::Empty,
        table_type: body.table_type,
        max_person: Some(body.max_person),
        note: body.note,
        dishes: None,
    });
    ack()
}

async fn delete_table(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut s = lock(&state);
    s.record(format!("DELETE /tables/{}", id));
    s.tables.retain(|t| t.id != id);
    s.items.remove(&id);
    ack()
}

async fn update_table_status(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<TableStatusUpdate>,
) -> Response {
    let mut s = lock(&state);
    s.record(format!("PATCH /tables/{}/update-status {}", id, body.status));
    if s.fail_table_status {
        return business_error("Lỗi hệ thống");
    }
    if let Some(table) = s.tables.iter_mut().find(|t| t.id == id) {
        table.status = body.status;
    }
    ack()
}

async fn list_table_types(State(state): State<Shared>) -> Response {
    let mut s = lock(&state);
    s.record("GET /tables/type");
    ok(s.table_types.clone())
}

async fn create_table_type(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut s = lock(&state);
    s.record("POST /tables/type");
    let id = s.next_id("tt");
    let name = body["name"].as_str().unwrap_or_default().to_string();
    s.table_types.push(TableType { id, name });
    ack()
}

async fn delete_table_type(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut s = lock(&state);
    s.record(format!("DELETE /tables/type/{}", id));
    s.table_types.retain(|t| t.id != id);
    ack()
}

async fn list_dishes(
    State(state): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let mut s = lock(&state);
    s.record("GET /dishes");
    let dishes: Vec<Dish> = match q.get("dishTypeId") {
        Some(type_id) => s
            .dishes
            .iter()
            .filter(|d| d.dish_type.as_ref().is_some_and(|t| &t.id == type_id))
            .cloned()
            .collect(),
        None => s.dishes.clone(),
    };
    ok(dishes)
}

async fn list_items(State(state): State<Shared>, Path(table_id): Path<String>) -> Response {
    let (hang, fail) = {
        let mut s = lock(&state);
        s.record(format!("GET /order-items/{}", table_id));
        (s.hang_item_list, s.fail_item_list)
    };
    if fail {
        return business_error("Lỗi hệ thống");
    }
    if hang {
        std::future::pending::<()>().await;
    }
    let s = lock(&state);
    ok(s.items.get(&table_id).cloned().unwrap_or_default())
}

async fn add_items(
    State(state): State<Shared>,
    Path(table_id): Path<String>,
    Json(lines): Json<Vec<OrderItemCreate>>,
) -> Response {
    let mut s = lock(&state);
    s.record(format!("POST /order-items/{}", table_id));
    let call = s.order_add_calls;
    s.order_add_calls += 1;
    if s.fail_order_add_from.is_some_and(|from| call >= from) {
        return business_error("Không thể thêm món");
    }
    for line in lines {
        let Some(dish) = s.dishes.iter().find(|d| d.id == line.dish_id).cloned() else {
            return business_error("Món không tồn tại");
        };
        let id = s.next_id("oi");
        s.items.entry(table_id.clone()).or_default().push(OrderItem {
            id,
            table_id: table_id.clone(),
            dish_id: dish.id,
            dish_name: dish.name,
            price: dish.price,
            unit: dish.unit,
            image: dish.image,
            quantity: line.quantity,
            note: line.note,
            status: OrderItemStatus::NotCalled,
        });
    }
    if let Some(table) = s.tables.iter_mut().find(|t| t.id == table_id) {
        table.status = TableStatus::Occupied;
    }
    ack()
}

async fn remove_item(
    State(state): State<Shared>,
    Path(item_id): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let mut s = lock(&state);
    let table_id = q.get("tableId").cloned().unwrap_or_default();
    s.record(format!("DELETE /order-items/{}?tableId={}", item_id, table_id));
    if let Some(items) = s.items.get_mut(&table_id) {
        items.retain(|i| i.id != item_id);
    }
    ack()
}

async fn update_item_status(
    State(state): State<Shared>,
    Path(item_id): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let mut s = lock(&state);
    let raw = q.get("status").cloned().unwrap_or_default();
    s.record(format!("PATCH /order-items/{}/update-status {}", item_id, raw));
    if s.fail_item_status {
        return business_error("Lỗi hệ thống");
    }
    let Ok(status) = serde_json::from_value::<OrderItemStatus>(Value::String(raw)) else {
        return Json(ApiResponse::<()>::error(400, "Trạng thái không hợp lệ")).into_response();
    };
    match s.find_item_mut(&item_id) {
        Some(item) => {
            item.status = status;
            ack()
        }
        None => Json(ApiResponse::<()>::error(404, "Không tìm thấy món")).into_response(),
    }
}

async fn update_item_quantity(
    State(state): State<Shared>,
    Path(table_id): Path<String>,
    Json(body): Json<OrderItemQuantityUpdate>,
) -> Response {
    let mut s = lock(&state);
    s.record(format!("PATCH /order-items/{}/quantity {}", table_id, body.quantity));
    if let Some(item) = s
        .items
        .get_mut(&table_id)
        .and_then(|items| items.iter_mut().find(|i| i.id == body.id))
    {
        item.quantity = body.quantity;
    }
    ack()
}

fn invoice_for(s: &BackendState, table_id: &str) -> Option<Invoice> {
    let table = s.tables.iter().find(|t| t.id == table_id)?;
    let items = s.items.get(table_id).cloned().unwrap_or_default();
    let sum = items.iter().map(|i| i.price * f64::from(i.quantity)).sum();
    Some(Invoice {
        invoice_id: format!("inv-{}", table_id),
        table_name: table.name.clone(),
        status: InvoiceStatus::Unpaid,
        pay_method: None,
        user_account_id: None,
        user_account_name: None,
        invoice_dish_responses: items
            .iter()
            .map(|i| InvoiceDish {
                dish_id: i.dish_id.clone(),
                dish_name: i.dish_name.clone(),
                quantity: i.quantity,
                price: i.price,
                unit: Some(i.unit.clone()),
                image: i.image.clone(),
            })
            .collect(),
        created_at: None,
        sum,
    })
}

async fn get_invoice(State(state): State<Shared>, Path(table_id): Path<String>) -> Response {
    let mut s = lock(&state);
    s.record(format!("GET /invoice/{}", table_id));
    match invoice_for(&s, &table_id) {
        Some(invoice) => ok(invoice),
        None => Json(ApiResponse::<()>::error(404, "Không tìm thấy bàn")).into_response(),
    }
}

async fn create_invoice(
    State(state): State<Shared>,
    Path(table_id): Path<String>,
    Json(body): Json<InvoiceCreate>,
) -> Response {
    let mut s = lock(&state);
    s.record(format!("POST /invoice/{}", table_id));
    let Some(mut invoice) = invoice_for(&s, &table_id) else {
        return business_error("Không thể tạo hóa đơn");
    };
    invoice.status = InvoiceStatus::Paid;
    invoice.pay_method = body.pay_method.clone();
    s.pay_methods.push(body.pay_method);
    s.invoices.push(invoice.clone());
    s.items.remove(&table_id);
    if let Some(table) = s.tables.iter_mut().find(|t| t.id == table_id) {
        table.status = TableStatus::Empty;
    }
    ok(invoice)
}

async fn list_reviews(State(state): State<Shared>) -> Response {
    let mut s = lock(&state);
    s.record("GET /review");
    ok(s.reviews.clone())
}

async fn list_dish_types(State(state): State<Shared>) -> Response {
    let mut s = lock(&state);
    s.record("GET /dish-types");
    ok(s.dish_types.clone())
}

async fn create_dish_type(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut s = lock(&state);
    s.record("POST /dish-types");
    let id = s.next_id("dt");
    let name = body["name"].as_str().unwrap_or_default().to_string();
    s.dish_types.push(DishType { id, name });
    ack()
}

async fn list_invoices(
    State(state): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let mut s = lock(&state);
    s.record("GET /invoice");
    let invoices: Vec<Invoice> = match q.get("createdAt") {
        Some(day) => s
            .invoices
            .iter()
            .filter(|i| i.created_at.as_deref().is_some_and(|c| c.starts_with(day.as_str())))
            .cloned()
            .collect(),
        None => s.invoices.clone(),
    };
    ok(invoices)
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/tables", get(list_tables).post(create_table))
        .route("/tables/type", get(list_table_types).post(create_table_type))
        .route("/tables/type/{key}", axum::routing::delete(delete_table_type))
        .route("/tables/{key}", axum::routing::delete(delete_table))
        .route("/tables/{key}/update-status", patch(update_table_status))
        .route("/dishes", get(list_dishes))
        .route(
            "/order-items/{key}",
            get(list_items).post(add_items).delete(remove_item),
        )
        .route("/order-items/{key}/update-status", patch(update_item_status))
        .route("/order-items/{key}/quantity", patch(update_item_quantity))
        .route("/dish-types", get(list_dish_types).post(create_dish_type))
        .route("/invoice", get(list_invoices))
        .route("/invoice/{key}", get(get_invoice).post(create_invoice))
        .route("/review", get(list_reviews))
        .with_state(state)
}

fn table(id: &str, name: &str, status: TableStatus) -> RestaurantTable {
    RestaurantTable {
        id: id.into(),
        name: name.into(),
        status,
        table_type: TableType {
            id: "tt-thuong".into(),
            name: "Thường".into(),
        },
        max_person: Some(4),
        note: None,
        dishes: None,
    }
}

pub fn dish(id: &str, name: &str, price: f64) -> Dish {
    Dish {
        id: id.into(),
        name: name.into(),
        dish_type: Some(DishType {
            id: "dt-mon-chinh".into(),
            name: "Món chính".into(),
        }),
        price,
        unit: "phần".into(),
        image: None,
        note: None,
    }
}

pub fn order_item(id: &str, table_id: &str, dish: &Dish, quantity: u32, status: OrderItemStatus) -> OrderItem {
    OrderItem {
        id: id.into(),
        table_id: table_id.into(),
        dish_id: dish.id.clone(),
        dish_name: dish.name.clone(),
        price: dish.price,
        unit: dish.unit.clone(),
        image: None,
        quantity,
        note: None,
        status,
    }
}

pub struct FakeBackend {
    pub state: Shared,
    pub session: SessionStore,
}

impl FakeBackend {
    /// Three tables; `t2` has two items, one of them not yet called
    pub fn seeded() -> Self {
        let pho = dish("d-pho", "Phở bò", 45000.0);
        let com = dish("d-com", "Cơm rang", 35000.0);
        let tra = dish("d-tra", "Trà đá", 5000.0);

        let mut state = BackendState {
            tables: vec![
                table("t1", "Bàn 1", TableStatus::Empty),
                table("t2", "Bàn 2", TableStatus::Occupied),
                table("t3", "Bàn 3", TableStatus::Reserved),
            ],
            dishes: vec![pho.clone(), com.clone(), tra],
            table_types: vec![TableType {
                id: "tt-thuong".into(),
                name: "Thường".into(),
            }],
            dish_types: vec![DishType {
                id: "dt-mon-chinh".into(),
                name: "Món chính".into(),
            }],
            ..BackendState::default()
        };
        state.items.insert(
            "t2".into(),
            vec![
                order_item("oi-a", "t2", &pho, 2, OrderItemStatus::Ordered),
                order_item("oi-b", "t2", &com, 1, OrderItemStatus::NotCalled),
            ],
        );

        Self {
            state: Arc::new(Mutex::new(state)),
            session: SessionStore::with_token(Some("test-token".into())),
        }
    }

    pub fn api(&self) -> RestaurantApi<OneshotHttpClient> {
        let http = OneshotHttpClient::new(router(self.state.clone())).with_session(self.session.clone());
        RestaurantApi::new(http)
    }

    pub fn controller(&self) -> Controller {
        self.controller_with(ControllerOptions::default())
    }

    pub fn controller_with(&self, options: ControllerOptions) -> Controller {
        TableController::new(self.api(), options)
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut BackendState) -> R) -> R {
        f(&mut lock(&self.state))
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.state).calls.clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        lock(&self.state)
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn clear_calls(&self) {
        lock(&self.state).calls.clear();
    }
}
