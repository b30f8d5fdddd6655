//! Payment command.

use banan_pos::PayMethod;
use banan_pos::money::format_amount;
use clap::Args;

use super::{Context, open_table};
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct PayArgs {
    /// Table id or name
    pub table: String,

    /// cash or transfer
    #[arg(short, long, default_value = "cash")]
    pub method: PayMethod,

    /// Only mark the table as awaiting payment
    #[arg(long)]
    pub request_only: bool,
}

pub async fn execute(ctx: &Context, args: &PayArgs) -> anyhow::Result<()> {
    let mut controller = open_table(ctx, &args.table).await?;

    if args.request_only {
        controller.request_payment().await?;
        output::print_success("Đã gửi yêu cầu thanh toán");
        return Ok(());
    }

    let invoice = controller.fetch_invoice_for_payment().await?;
    controller.select_pay_method(args.method)?;
    let total = controller.table_total();

    if ctx.format == OutputFormat::Text {
        output::print_kv("Hóa đơn", &invoice.invoice_id);
        output::print_kv("Bàn", &invoice.table_name);
        output::print_kv("Tổng cộng", &format_amount(total));
        output::print_kv("Phương thức", args.method.label());
        if let Some(url) = controller.payment().qr_url() {
            output::print_kv("Mã QR", url);
        }
    }

    let created = controller.confirm_payment().await?;
    match ctx.format {
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "invoice": created.unwrap_or(invoice),
            "method": args.method,
            "total": format_amount(total),
        })),
        OutputFormat::Text => {
            if let Some(flash) = controller.flash() {
                output::print_success(&flash.message);
            }
        }
    }
    Ok(())
}
