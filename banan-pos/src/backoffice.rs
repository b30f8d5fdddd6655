//! Back-office services: menu administration, invoices, revenue, reviews,
//! bookings and staff accounts
//!
//! Stateless wrappers over the adapters that add input validation and the
//! small amount of shaping the screens need (sorting, totals).

use banan_client::{HttpClient, RestaurantApi};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use shared::client::RegisterRequest;
use shared::models::{
    Booking, BookingCreate, Dish, DishCreate, DishType, DishUpdate, Invoice, Revenue, Review,
};

use crate::error::{PosError, PosResult};
use crate::money::revenue_total;
use crate::validation::{
    validate_booking, validate_dish, validate_dish_type, validate_registration, validate_review,
};

/// Revenue series with its total
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub days: Vec<Revenue>,
    pub total: Decimal,
    pub invoice_count: u32,
}

impl RevenueReport {
    pub fn new(days: Vec<Revenue>) -> Self {
        let total = revenue_total(&days);
        let invoice_count = days.iter().map(|d| d.invoice_count).sum();
        Self {
            days,
            total,
            invoice_count,
        }
    }
}

pub struct BackOffice<C> {
    api: RestaurantApi<C>,
}

impl<C: HttpClient> BackOffice<C> {
    pub fn new(api: RestaurantApi<C>) -> Self {
        Self { api }
    }

    // ========== Menu ==========

    pub async fn dishes(&self, dish_type_id: Option<&str>) -> PosResult<Vec<Dish>> {
        let dishes = match dish_type_id {
            Some(id) => self.api.menu().dishes_by_type(id).await?,
            None => self.api.menu().dishes().await?,
        };
        Ok(dishes)
    }

    pub async fn create_dish(&self, dish: &DishCreate) -> PosResult<()> {
        validate_dish(dish)?;
        self.api.menu().create_dish(dish).await?;
        tracing::info!(name = %dish.name, "Dish created");
        Ok(())
    }

    pub async fn update_dish(&self, dish_id: &str, update: &DishUpdate) -> PosResult<()> {
        if let Some(price) = update.price
            && (!price.is_finite() || price <= 0.0)
        {
            return Err(PosError::validation("Giá món phải là số dương."));
        }
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(PosError::validation("Vui lòng nhập tên món."));
        }
        self.api.menu().update_dish(dish_id, update).await?;
        tracing::info!(dish_id = %dish_id, "Dish updated");
        Ok(())
    }

    pub async fn delete_dish(&self, dish_id: &str) -> PosResult<()> {
        self.api.menu().delete_dish(dish_id).await?;
        tracing::info!(dish_id = %dish_id, "Dish deleted");
        Ok(())
    }

    pub async fn dish_types(&self) -> PosResult<Vec<DishType>> {
        Ok(self.api.menu().dish_types().await?)
    }

    pub async fn create_dish_type(&self, name: &str) -> PosResult<()> {
        let existing = self.api.menu().dish_types().await?;
        let name = validate_dish_type(name, &existing)?;
        self.api.menu().create_dish_type(&name).await?;
        Ok(())
    }

    pub async fn delete_dish_type(&self, type_id: &str) -> PosResult<()> {
        Ok(self.api.menu().delete_dish_type(type_id).await?)
    }

    // ========== Invoices ==========

    /// All invoices, or those created on `date`
    pub async fn invoices(&self, date: Option<NaiveDate>) -> PosResult<Vec<Invoice>> {
        let invoices = match date {
            Some(date) => {
                let day = date.format("%Y-%m-%d").to_string();
                self.api.invoices().list_by_date(&day).await?
            }
            None => self.api.invoices().list().await?,
        };
        Ok(invoices)
    }

    pub async fn invoice_for_table(&self, table_id: &str) -> PosResult<Invoice> {
        Ok(self.api.invoices().for_table(table_id).await?)
    }

    // ========== Revenue ==========

    pub async fn revenue_day(&self, date: NaiveDate) -> PosResult<RevenueReport> {
        let day = date.format("%Y-%m-%d").to_string();
        let revenue = self.api.revenue().day(&day).await?;
        Ok(RevenueReport::new(revenue.into_iter().collect()))
    }

    pub async fn revenue_week(&self, date: NaiveDate) -> PosResult<RevenueReport> {
        let day = date.format("%Y-%m-%d").to_string();
        Ok(RevenueReport::new(self.api.revenue().week(&day).await?))
    }

    pub async fn revenue_month(&self, date: NaiveDate) -> PosResult<RevenueReport> {
        let month = format!("{:04}-{:02}", date.year(), date.month());
        Ok(RevenueReport::new(self.api.revenue().month(&month).await?))
    }

    // ========== Reviews ==========

    /// Newest first; reviews without a date go last
    pub async fn reviews(&self) -> PosResult<Vec<Review>> {
        let mut reviews = self.api.reviews().list().await?;
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    /// Submit as the logged-in user
    pub async fn submit_review(&self, content: &str, rating: u8) -> PosResult<()> {
        let user_id = self
            .api
            .session()
            .snapshot()
            .await
            .user_id()
            .unwrap_or_default();
        let review = validate_review(&user_id, content, rating)?;
        self.api.reviews().submit(&review).await?;
        tracing::info!(rating, "Review submitted");
        Ok(())
    }

    // ========== Bookings ==========

    pub async fn bookings(&self) -> PosResult<Vec<Booking>> {
        Ok(self.api.bookings().list().await?)
    }

    pub async fn create_booking(&self, booking: &BookingCreate) -> PosResult<()> {
        let booking = validate_booking(booking)?;
        self.api.bookings().create(&booking).await?;
        tracing::info!(name = %booking.name, persons = booking.person_number, "Booking created");
        Ok(())
    }

    pub async fn approve_booking(&self, booking_id: &str) -> PosResult<()> {
        self.api.bookings().approve(booking_id).await?;
        tracing::info!(booking_id = %booking_id, "Booking approved");
        Ok(())
    }

    pub async fn reject_booking(&self, booking_id: &str) -> PosResult<()> {
        self.api.bookings().reject(booking_id).await?;
        tracing::info!(booking_id = %booking_id, "Booking rejected");
        Ok(())
    }

    // ========== Accounts ==========

    pub async fn register_account(&self, request: &RegisterRequest) -> PosResult<()> {
        validate_registration(request)?;
        self.api.auth().register(request).await?;
        tracing::info!(account = %request.account, "Account registered");
        Ok(())
    }
}
