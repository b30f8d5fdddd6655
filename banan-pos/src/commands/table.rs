//! Table grid commands: list, stats, show, menu.

use banan_pos::TableFilter;
use banan_pos::money::{format_amount, line_total};
use banan_pos::routes::Route;
use clap::Args;
use serde::Serialize;
use shared::models::{Dish, OrderItem, RestaurantTable, TableStatus};
use tabled::Tabled;

use super::{Context, open_table};
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Name filter (case-insensitive substring)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Status filter: empty, occupied, awaiting, reserved
    #[arg(short, long, value_parser = parse_status)]
    pub status: Option<TableStatus>,

    /// Table type id filter
    #[arg(long)]
    pub table_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Table id or name
    pub table: String,
}

#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Only dishes of this dish type id
    #[arg(long)]
    pub dish_type: Option<String>,
}

fn parse_status(raw: &str) -> Result<TableStatus, String> {
    match raw.trim().to_lowercase().as_str() {
        "empty" | "trống" => Ok(TableStatus::Empty),
        "occupied" | "đang sử dụng" => Ok(TableStatus::Occupied),
        "awaiting" | "chờ thanh toán" => Ok(TableStatus::AwaitingPayment),
        "reserved" | "đã đặt" => Ok(TableStatus::Reserved),
        other => Err(format!("unknown table status: {}", other)),
    }
}

#[derive(Debug, Serialize, Tabled)]
struct TableRow {
    id: String,
    #[tabled(rename = "tên")]
    name: String,
    #[tabled(rename = "trạng thái")]
    status: String,
    #[tabled(rename = "loại")]
    table_type: String,
    #[tabled(rename = "số người")]
    max_person: String,
}

impl From<&RestaurantTable> for TableRow {
    fn from(t: &RestaurantTable) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            status: t.status.to_string(),
            table_type: t.table_type.name.clone(),
            max_person: t.max_person.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub(crate) struct DishRow {
    id: String,
    #[tabled(rename = "món")]
    dish: String,
    #[tabled(rename = "SL")]
    quantity: u32,
    #[tabled(rename = "đơn giá")]
    price: String,
    #[tabled(rename = "thành tiền")]
    amount: String,
    #[tabled(rename = "trạng thái")]
    status: String,
    #[tabled(rename = "ghi chú")]
    note: String,
}

impl From<&OrderItem> for DishRow {
    fn from(i: &OrderItem) -> Self {
        Self {
            id: i.id.clone(),
            dish: i.dish_name.clone(),
            quantity: i.quantity,
            price: format_amount(banan_pos::money::to_decimal(i.price)),
            amount: format_amount(line_total(i)),
            status: i.status.to_string(),
            note: i.note.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct MenuRow {
    id: String,
    #[tabled(rename = "món")]
    name: String,
    #[tabled(rename = "loại")]
    dish_type: String,
    #[tabled(rename = "giá")]
    price: String,
    #[tabled(rename = "đơn vị")]
    unit: String,
}

impl From<&Dish> for MenuRow {
    fn from(d: &Dish) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            dish_type: d.dish_type.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
            price: format_amount(banan_pos::money::to_decimal(d.price)),
            unit: d.unit.clone(),
        }
    }
}

pub async fn list(ctx: &Context, args: &TablesArgs) -> anyhow::Result<()> {
    ctx.ensure_access(Route::Tables).await?;
    let mut controller = ctx.controller();
    controller.load_tables().await?;

    let filter = TableFilter {
        query: args.query.clone(),
        status: args.status,
        table_type_id: args.table_type.clone(),
    };
    let rows: Vec<TableRow> = controller
        .filtered_tables(&filter)
        .into_iter()
        .map(TableRow::from)
        .collect();
    output::print_list(&rows, ctx.format);
    Ok(())
}

pub async fn stats(ctx: &Context) -> anyhow::Result<()> {
    ctx.ensure_access(Route::Tables).await?;
    let mut controller = ctx.controller();
    controller.load_tables().await?;
    let stats = controller.table_statistics();

    match ctx.format {
        OutputFormat::Json => output::print_json(&stats),
        OutputFormat::Text => {
            output::print_kv("Tổng số bàn", &stats.total.to_string());
            output::print_kv("Đang sử dụng", &stats.occupied.to_string());
            output::print_kv("Số bàn trống", &stats.empty.to_string());
            output::print_kv("Đã đặt", &stats.reserved.to_string());
            output::print_kv("Chờ thanh toán", &stats.awaiting_payment.to_string());
        }
    }
    Ok(())
}

pub async fn show(ctx: &Context, args: &ShowArgs) -> anyhow::Result<()> {
    let controller = open_table(ctx, &args.table).await?;
    print_table(ctx, &controller);
    Ok(())
}

/// Selected table with its dishes and total
pub(crate) fn print_table<C: banan_pos::banan_client::HttpClient>(
    ctx: &Context,
    controller: &banan_pos::TableController<C>,
) {
    let Some(table) = controller.selected_table() else {
        output::print_warning("Chưa chọn bàn.");
        return;
    };
    let dishes = controller.selected_dishes().unwrap_or_default();
    let total = controller.table_total();

    match ctx.format {
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "table": table,
            "total": format_amount(total),
        })),
        OutputFormat::Text => {
            output::print_kv("Bàn", &table.name);
            output::print_kv("Trạng thái", table.status.as_str());
            output::print_kv("Loại bàn", &table.table_type.name);
            if let Some(at) = controller.payment_requested_at(&table.id) {
                output::print_kv("Yêu cầu thanh toán", &at.format("%H:%M").to_string());
            }
            let rows: Vec<DishRow> = dishes.iter().map(DishRow::from).collect();
            output::print_list(&rows, OutputFormat::Text);
            output::print_kv("Tổng cộng", &format_amount(total));
        }
    }
}

pub async fn menu(ctx: &Context, args: &MenuArgs) -> anyhow::Result<()> {
    ctx.ensure_access(Route::Tables).await?;
    let dishes = ctx.backoffice().dishes(args.dish_type.as_deref()).await?;
    let rows: Vec<MenuRow> = dishes.iter().map(MenuRow::from).collect();
    output::print_list(&rows, ctx.format);
    Ok(())
}
