//! Ordering commands: order, call, toggle, quantity, remove.

use anyhow::{Context as _, bail};
use clap::Args;

use super::{Context, open_table};
use super::table::print_table;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Table id or name
    pub table: String,

    /// Dishes as `dish[:qty[:note]]`, dish by id or name
    #[arg(required = true, num_args = 1..)]
    pub dishes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TableArg {
    /// Table id or name
    pub table: String,
}

#[derive(Debug, Args)]
pub struct ItemArgs {
    /// Table id or name
    pub table: String,
    /// Order item id
    pub item: String,
}

#[derive(Debug, Args)]
pub struct QuantityArgs {
    /// Table id or name
    pub table: String,
    /// Order item id
    pub item: String,
    /// New absolute quantity
    pub quantity: u32,
}

/// One parsed `dish[:qty[:note]]` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub dish: String,
    pub quantity: u32,
    pub note: Option<String>,
}

impl std::str::FromStr for OrderSpec {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.splitn(3, ':');
        let dish = parts.next().unwrap_or_default().trim();
        if dish.is_empty() {
            bail!("Thiếu tên món trong '{}'", raw);
        }
        let quantity = match parts.next().map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => q
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("Số lượng không hợp lệ trong '{}'", raw))?,
            None => 1,
        };
        let note = parts
            .next()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Ok(Self {
            dish: dish.to_string(),
            quantity,
            note,
        })
    }
}

pub async fn order(ctx: &Context, args: &OrderArgs) -> anyhow::Result<()> {
    let specs = args
        .dishes
        .iter()
        .map(|raw| raw.parse::<OrderSpec>())
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut controller = open_table(ctx, &args.table).await?;
    controller.show_menu().await?;

    for spec in &specs {
        let dish = controller
            .menu()
            .iter()
            .find(|d| d.id == spec.dish || d.name == spec.dish)
            .cloned()
            .with_context(|| format!("Không có món {} trong thực đơn", spec.dish))?;
        controller.add_to_cart(&dish);
        if spec.quantity > 1 {
            controller.change_cart_quantity(&dish.id, i64::from(spec.quantity) - 1);
        }
        if let Some(note) = &spec.note {
            controller.update_cart_note(&dish.id, note);
        }
    }

    let committed = controller.commit_cart_to_table().await?;
    if ctx.format == OutputFormat::Text {
        output::print_success(&format!("Đã thêm {} món vào bàn", committed));
    }
    print_table(ctx, &controller);
    Ok(())
}

pub async fn call(ctx: &Context, args: &TableArg) -> anyhow::Result<()> {
    let mut controller = open_table(ctx, &args.table).await?;
    let called = controller.call_order().await?;
    if called == 0 {
        output::print_warning("Không có món nào ở trạng thái 'Chưa gọi'");
    } else {
        output::print_success(&format!(
            "Đã cập nhật {} món 'Chưa gọi' thành 'Đã gọi'",
            called
        ));
    }
    if ctx.format == OutputFormat::Json {
        output::print_json(controller.notifications().entries());
    }
    Ok(())
}

pub async fn toggle(ctx: &Context, args: &ItemArgs) -> anyhow::Result<()> {
    let mut controller = open_table(ctx, &args.table).await?;
    let status = controller.toggle_dish_status(&args.item).await?;
    match ctx.format {
        OutputFormat::Json => output::print_json(controller.notifications().entries()),
        OutputFormat::Text => output::print_success(&format!("Trạng thái mới: {}", status)),
    }
    Ok(())
}

pub async fn quantity(ctx: &Context, args: &QuantityArgs) -> anyhow::Result<()> {
    let mut controller = open_table(ctx, &args.table).await?;
    controller
        .change_dish_quantity(&args.item, args.quantity)
        .await?;
    print_table(ctx, &controller);
    Ok(())
}

pub async fn remove(ctx: &Context, args: &ItemArgs) -> anyhow::Result<()> {
    let mut controller = open_table(ctx, &args.table).await?;
    controller.delete_dish(&args.item).await?;
    if let Some(flash) = controller.flash() {
        output::print_success(&flash.message);
    }
    print_table(ctx, &controller);
    Ok(())
}
