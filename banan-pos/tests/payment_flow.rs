//! Payment request, invoice, QR code and settlement

mod common;

use std::time::Duration;

use banan_pos::{ErrorScope, PayMethod, PosError};
use common::{Controller, FakeBackend, dish, order_item};
use rust_decimal::Decimal;
use shared::models::{OrderItemStatus, TableStatus};

async fn open(backend: &FakeBackend, table_id: &str) -> Controller {
    let mut controller = backend.controller();
    controller.load_tables().await.unwrap();
    controller.select_table(table_id).await.unwrap();
    controller
}

#[tokio::test]
async fn payment_request_marks_table_and_keeps_dishes() {
    let backend = FakeBackend::seeded();
    let pho = dish("d-pho", "Phở bò", 45000.0);
    backend.with(|s| {
        s.items.insert(
            "t1".into(),
            vec![order_item("oi-x", "t1", &pho, 1, OrderItemStatus::Ordered)],
        );
    });
    let mut controller = open(&backend, "t1").await;
    assert_eq!(controller.selected_table().unwrap().status, TableStatus::Empty);
    let before = controller.selected_table().unwrap().dish_count();

    controller.request_payment().await.unwrap();

    let table = controller.selected_table().unwrap();
    assert_eq!(table.status, TableStatus::AwaitingPayment);
    assert!(table.dish_count() >= before);
    assert!(controller.payment_requested_at("t1").is_some());
    assert_eq!(
        backend.count_calls("PATCH /tables/t1/update-status Chờ thanh toán"),
        1
    );
}

#[tokio::test]
async fn rejected_payment_request_leaves_table_status() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;
    backend.with(|s| s.fail_table_status = true);

    let err = controller.request_payment().await.unwrap_err();

    assert!(matches!(err, PosError::Client(_)));
    assert_eq!(controller.selected_table().unwrap().status, TableStatus::Occupied);
    assert!(controller.payment_requested_at("t2").is_none());
    assert_eq!(
        controller.error(ErrorScope::Table),
        Some("Không thể cập nhật trạng thái bàn: Lỗi hệ thống")
    );
}

#[tokio::test]
async fn transfer_qr_embeds_table_total() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;
    assert_eq!(controller.table_total(), Decimal::from(125_000));

    let invoice = controller.fetch_invoice_for_payment().await.unwrap();
    assert_eq!(invoice.invoice_dish_responses.len(), 2);
    assert!(controller.payment().is_open());
    assert!(controller.payment().method().is_none());
    assert!(!controller.payment().shows_options());

    controller.select_pay_method(PayMethod::Transfer).unwrap();
    assert!(controller.payment().shows_options());
    let url = controller.payment().qr_url().unwrap();
    assert!(url.starts_with("https://img.vietqr.io/image/mbbank-"));
    assert!(url.contains("amount=125000"));

    controller.select_pay_method(PayMethod::Cash).unwrap();
    assert!(controller.payment().qr_url().is_none());
}

#[tokio::test]
async fn choosing_a_method_needs_an_open_invoice() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;

    let err = controller.select_pay_method(PayMethod::Cash).unwrap_err();
    assert!(matches!(err, PosError::Validation(_)));
}

#[tokio::test]
async fn confirming_without_a_method_is_rejected() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;
    controller.fetch_invoice_for_payment().await.unwrap();
    backend.clear_calls();

    let err = controller.confirm_payment().await.unwrap_err();
    assert!(matches!(err, PosError::Validation(_)));
    assert_eq!(backend.count_calls("POST /invoice"), 0);
}

#[tokio::test]
async fn confirmed_payment_settles_table_and_flashes() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;
    controller.request_payment().await.unwrap();
    controller.fetch_invoice_for_payment().await.unwrap();
    controller.select_pay_method(PayMethod::Transfer).unwrap();

    let invoice = controller.confirm_payment().await.unwrap().unwrap();

    assert_eq!(invoice.pay_method.as_deref(), Some("transfer"));
    assert_eq!(backend.with(|s| s.pay_methods.clone()), vec![Some("transfer".to_string())]);
    assert!(!controller.payment().is_open());
    assert!(controller.payment_requested_at("t2").is_none());
    assert_eq!(controller.selected_table().unwrap().status, TableStatus::Empty);
    assert_eq!(controller.selected_dishes().unwrap().len(), 0);

    let flash = controller.flash().unwrap();
    assert_eq!(flash.message, "Thanh toán thành công!");
    assert_eq!(controller.options().flash_duration, Duration::from_secs(3));
    assert!(flash.is_visible_at(flash.shown_at() + Duration::from_millis(2900)));
    assert!(!flash.is_visible_at(flash.shown_at() + Duration::from_secs(3)));
}

#[tokio::test]
async fn closing_the_dialog_drops_method_and_qr() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;
    controller.fetch_invoice_for_payment().await.unwrap();
    controller.select_pay_method(PayMethod::Transfer).unwrap();

    controller.close_payment();

    assert!(!controller.payment().is_open());
    assert!(controller.payment().method().is_none());
    assert!(controller.payment().qr_url().is_none());
}
