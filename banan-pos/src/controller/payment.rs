//! Payment flow of the selected table

use banan_client::HttpClient;
use rust_decimal::Decimal;
use shared::models::{Invoice, InvoiceCreate, TableStatus};

use super::TableController;
use crate::error::{ErrorScope, PosError, PosResult};
use crate::money::items_total;
use crate::payment::PayMethod;
use crate::view::run_scoped;

impl<C: HttpClient> TableController<C> {
    /// Σ price × quantity over the selected table's order items
    pub fn table_total(&self) -> Decimal {
        items_total(self.selected_dishes())
    }

    /// Mark the selected table as awaiting payment and remember when.
    ///
    /// Only the status changes; the table's dishes are left as they are.
    pub async fn request_payment(&mut self) -> PosResult<()> {
        const FAILED: &str = "Không thể cập nhật trạng thái bàn";

        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Table, FAILED, e),
        };

        let token = self.tracker.token();
        let result = run_scoped(
            &token,
            self.api
                .tables()
                .update_status(&table_id, TableStatus::AwaitingPayment),
        )
        .await;
        if let Err(e) = result {
            return self.fail(ErrorScope::Table, FAILED, e);
        }

        if let Some(table) = self.table_mut(&table_id) {
            table.status = TableStatus::AwaitingPayment;
        }
        let now = chrono::Local::now();
        tracing::info!(table_id = %table_id, at = %now.format("%H:%M"), "Payment requested");
        self.payment_requested_at.insert(table_id, now);
        Ok(())
    }

    /// Fetch the table's invoice and open the payment dialog with no method chosen
    pub async fn fetch_invoice_for_payment(&mut self) -> PosResult<Invoice> {
        const FAILED: &str = "Không thể tải hóa đơn";

        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };

        let token = self.tracker.token();
        let result = run_scoped(&token, self.api.invoices().for_table(&table_id)).await;
        let invoice = match result {
            Ok(invoice) => invoice,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };

        tracing::info!(table_id = %table_id, invoice_id = %invoice.invoice_id, "Invoice loaded");
        self.payment = crate::payment::PaymentDialog::open(invoice.clone());
        Ok(invoice)
    }

    /// Choose cash or transfer. Transfer builds the VietQR URL for the
    /// current table total.
    pub fn select_pay_method(&mut self, method: PayMethod) -> PosResult<()> {
        if !self.payment.is_open() {
            return self.fail(
                ErrorScope::Dish,
                "Không thể tạo hóa đơn",
                PosError::validation("Vui lòng mở hóa đơn trước khi chọn phương thức thanh toán."),
            );
        }
        let qr_url = match method {
            PayMethod::Transfer => Some(self.options.merchant.qr_url(self.table_total())),
            PayMethod::Cash => None,
        };
        tracing::debug!(method = %method, qr = ?qr_url, "Payment method chosen");
        self.payment.choose(method, qr_url);
        Ok(())
    }

    /// Settle the table: create the invoice, refresh, close the dialog and
    /// show a success notice.
    pub async fn confirm_payment(&mut self) -> PosResult<Option<Invoice>> {
        const FAILED: &str = "Không thể xác nhận thanh toán";

        let table_id = match self.require_table() {
            Ok(id) => id,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };
        let Some(method) = self.payment.method() else {
            return self.fail(
                ErrorScope::Dish,
                FAILED,
                PosError::validation("Vui lòng chọn phương thức thanh toán."),
            );
        };

        let request = InvoiceCreate {
            pay_method: Some(method.as_str().to_string()),
            ..InvoiceCreate::default()
        };
        let token = self.tracker.token();
        let result = run_scoped(&token, self.api.invoices().create(&table_id, &request)).await;
        let invoice = match result {
            Ok(invoice) => invoice,
            Err(e) => return self.fail(ErrorScope::Dish, FAILED, e),
        };
        tracing::info!(table_id = %table_id, method = %method, "Payment confirmed");

        self.payment.close();
        self.payment_requested_at.remove(&table_id);
        self.show_flash("Thanh toán thành công!");

        let refreshed = self.fetch_tables().await;
        if let Err(e) = refreshed {
            return self.fail(ErrorScope::Table, "Không thể tải danh sách bàn. Vui lòng thử lại.", e);
        }
        self.refresh_dishes().await?;
        Ok(invoice)
    }

    /// Dismiss the dialog, dropping method and QR code
    pub fn close_payment(&mut self) {
        self.payment.close();
        self.clear_errors();
    }
}
