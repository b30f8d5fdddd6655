//! Back-office commands: invoices, revenue, reviews, bookings.

use banan_pos::RevenueReport;
use banan_pos::money::{format_amount, to_decimal};
use banan_pos::routes::Route;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use shared::models::{Booking, Invoice, Review};
use tabled::Tabled;

use super::Context;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct InvoicesArgs {
    /// Only invoices created on this day (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct RevenueArgs {
    #[command(subcommand)]
    pub period: RevenuePeriod,
}

#[derive(Debug, Subcommand)]
pub enum RevenuePeriod {
    /// Revenue of one day
    Day {
        /// YYYY-MM-DD, defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Daily revenue of the week containing a day
    Week {
        /// YYYY-MM-DD, defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Daily revenue of the month containing a day
    Month {
        /// YYYY-MM-DD, defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Debug, Args)]
pub struct ReviewsArgs {
    #[command(subcommand)]
    pub command: Option<ReviewCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Submit a review as the logged-in user
    Submit {
        /// 1 to 5 stars
        #[arg(short, long)]
        rating: u8,
        /// Review text
        content: String,
    },
}

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: Option<BookingCommand>,
}

#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    /// Approve a pending booking
    Approve { id: String },
    /// Reject a pending booking
    Reject { id: String },
}

#[derive(Debug, Serialize, Tabled)]
struct InvoiceRow {
    id: String,
    #[tabled(rename = "bàn")]
    table: String,
    #[tabled(rename = "thu ngân")]
    cashier: String,
    #[tabled(rename = "phương thức")]
    method: String,
    #[tabled(rename = "ngày")]
    created_at: String,
    #[tabled(rename = "tổng")]
    sum: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(i: &Invoice) -> Self {
        Self {
            id: i.invoice_id.clone(),
            table: i.table_name.clone(),
            cashier: i.user_account_name.clone().unwrap_or_default(),
            method: i.pay_method.clone().unwrap_or_default(),
            created_at: i.created_at.clone().unwrap_or_default(),
            sum: format_amount(to_decimal(i.sum)),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct RevenueRow {
    #[tabled(rename = "ngày")]
    date: String,
    #[tabled(rename = "hóa đơn")]
    invoices: u32,
    #[tabled(rename = "doanh thu")]
    amount: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ReviewRow {
    #[tabled(rename = "sao")]
    stars: String,
    #[tabled(rename = "khách")]
    user: String,
    #[tabled(rename = "nội dung")]
    content: String,
    #[tabled(rename = "ngày")]
    created_at: String,
}

impl From<&Review> for ReviewRow {
    fn from(r: &Review) -> Self {
        Self {
            stars: "★".repeat(usize::from(r.star_rating.min(5))),
            user: r
                .user
                .as_ref()
                .and_then(|u| u.name.clone().or_else(|| u.username.clone()))
                .unwrap_or_default(),
            content: r.content.clone(),
            created_at: r.created_at.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct BookingRow {
    id: String,
    #[tabled(rename = "tên")]
    name: String,
    #[tabled(rename = "SĐT")]
    phone: String,
    #[tabled(rename = "thời gian")]
    time: String,
    #[tabled(rename = "số người")]
    persons: String,
    #[tabled(rename = "trạng thái")]
    status: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.clone(),
            name: b.name.clone(),
            phone: b.phone.clone().unwrap_or_default(),
            time: b.ordered_time.clone().unwrap_or_default(),
            persons: b.person_number.map(|n| n.to_string()).unwrap_or_default(),
            status: format!("{:?}", b.status).to_uppercase(),
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub async fn invoices(ctx: &Context, args: &InvoicesArgs) -> anyhow::Result<()> {
    ctx.ensure_access(Route::Invoices).await?;
    let invoices = ctx.backoffice().invoices(args.date).await?;
    let rows: Vec<InvoiceRow> = invoices.iter().map(InvoiceRow::from).collect();
    output::print_list(&rows, ctx.format);
    Ok(())
}

pub async fn revenue(ctx: &Context, args: &RevenueArgs) -> anyhow::Result<()> {
    ctx.ensure_access(Route::Revenue).await?;
    let backoffice = ctx.backoffice();
    let report = match &args.period {
        RevenuePeriod::Day { date } => backoffice.revenue_day(date.unwrap_or_else(today)).await?,
        RevenuePeriod::Week { date } => backoffice.revenue_week(date.unwrap_or_else(today)).await?,
        RevenuePeriod::Month { date } => {
            backoffice.revenue_month(date.unwrap_or_else(today)).await?
        }
    };
    print_report(&report, ctx.format);
    Ok(())
}

fn print_report(report: &RevenueReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(report),
        OutputFormat::Text => {
            let rows: Vec<RevenueRow> = report
                .days
                .iter()
                .map(|d| RevenueRow {
                    date: d.date.clone(),
                    invoices: d.invoice_count,
                    amount: format_amount(to_decimal(d.total_amount)),
                })
                .collect();
            output::print_list(&rows, format);
            output::print_kv("Số hóa đơn", &report.invoice_count.to_string());
            output::print_kv("Tổng doanh thu", &format_amount(report.total));
        }
    }
}

pub async fn reviews(ctx: &Context, args: &ReviewsArgs) -> anyhow::Result<()> {
    match &args.command {
        Some(ReviewCommand::Submit { rating, content }) => {
            ctx.ensure_access(Route::Customer).await?;
            ctx.backoffice().submit_review(content, *rating).await?;
            output::print_success("Cảm ơn bạn đã đánh giá!");
        }
        None => {
            let reviews = ctx.backoffice().reviews().await?;
            let rows: Vec<ReviewRow> = reviews.iter().map(ReviewRow::from).collect();
            output::print_list(&rows, ctx.format);
        }
    }
    Ok(())
}

pub async fn bookings(ctx: &Context, args: &BookingsArgs) -> anyhow::Result<()> {
    ctx.ensure_access(Route::Bookings).await?;
    let backoffice = ctx.backoffice();
    match &args.command {
        Some(BookingCommand::Approve { id }) => {
            backoffice.approve_booking(id).await?;
            output::print_success("Đã duyệt yêu cầu đặt bàn");
        }
        Some(BookingCommand::Reject { id }) => {
            backoffice.reject_booking(id).await?;
            output::print_success("Đã từ chối yêu cầu đặt bàn");
        }
        None => {
            let bookings = backoffice.bookings().await?;
            let rows: Vec<BookingRow> = bookings.iter().map(BookingRow::from).collect();
            output::print_list(&rows, ctx.format);
        }
    }
    Ok(())
}
