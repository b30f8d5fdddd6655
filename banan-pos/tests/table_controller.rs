//! Table screen flows against the in-memory backend

mod common;

use banan_pos::{ControllerOptions, ErrorScope, NewTable, PosError, TableFilter, ViewMode};
use common::{Controller, FakeBackend, dish};
use shared::models::{OrderItemStatus, TableStatus};

async fn open(backend: &FakeBackend, table_id: &str) -> Controller {
    let mut controller = backend.controller();
    controller.load_tables().await.unwrap();
    controller.select_table(table_id).await.unwrap();
    controller
}

fn status_of(controller: &Controller, item_id: &str) -> OrderItemStatus {
    controller
        .selected_dishes()
        .unwrap()
        .iter()
        .find(|i| i.id == item_id)
        .unwrap()
        .status
}

#[tokio::test]
async fn selecting_a_table_loads_its_dishes() {
    let backend = FakeBackend::seeded();
    let controller = open(&backend, "t2").await;

    assert_eq!(controller.view(), ViewMode::Table);
    assert_eq!(controller.selected_table_id(), Some("t2"));
    assert_eq!(controller.selected_dishes().unwrap().len(), 2);
    assert!(controller.dish_error().is_none());
}

#[tokio::test]
async fn failed_dish_fetch_keeps_the_selection() {
    let backend = FakeBackend::seeded();
    backend.with(|s| s.fail_item_list = true);
    let mut controller = backend.controller();
    controller.load_tables().await.unwrap();

    let err = controller.select_table("t2").await.unwrap_err();

    assert!(matches!(err, PosError::Client(_)));
    assert_eq!(controller.selected_table_id(), Some("t2"));
    assert_eq!(controller.view(), ViewMode::Table);
    assert_eq!(
        controller.dish_error(),
        Some("Không thể tải danh sách món ăn của bàn: Lỗi hệ thống")
    );
}

#[tokio::test]
async fn selecting_an_unknown_table_is_rejected() {
    let backend = FakeBackend::seeded();
    let mut controller = backend.controller();
    controller.load_tables().await.unwrap();

    let err = controller.select_table("t99").await.unwrap_err();
    assert!(matches!(err, PosError::NotFound(_)));
    assert!(controller.selected_table_id().is_none());
    assert!(controller.table_error().is_some());
}

#[tokio::test]
async fn same_dish_twice_is_one_line_with_quantity_two() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t1").await;
    let pho = dish("d-pho", "Phở bò", 45000.0);

    controller.add_to_cart(&pho);
    controller.add_to_cart(&pho);

    assert_eq!(controller.cart().len(), 1);
    assert_eq!(controller.cart().get("d-pho").unwrap().quantity, 2);
}

#[tokio::test]
async fn decrementing_to_zero_drops_the_line() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t1").await;
    let tra = dish("d-tra", "Trà đá", 5000.0);

    controller.add_to_cart(&tra);
    assert_eq!(controller.change_cart_quantity("d-tra", 2), Some(3));
    assert_eq!(controller.change_cart_quantity("d-tra", -3), None);
    assert!(controller.cart().is_empty());
}

#[tokio::test]
async fn commit_sends_one_call_per_line_and_empties_cart() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t1").await;
    controller.show_menu().await.unwrap();
    assert_eq!(controller.menu().len(), 3);

    let pho = dish("d-pho", "Phở bò", 45000.0);
    let tra = dish("d-tra", "Trà đá", 5000.0);
    controller.add_to_cart(&pho);
    controller.add_to_cart(&pho);
    controller.add_to_cart(&tra);
    assert!(controller.update_cart_note("d-pho", "ít hành"));
    backend.clear_calls();

    let committed = controller.commit_cart_to_table().await.unwrap();

    assert_eq!(committed, 2);
    assert_eq!(backend.count_calls("POST /order-items/t1"), 2);
    assert!(controller.cart().is_empty());
    assert_eq!(controller.view(), ViewMode::Table);

    let dishes = controller.selected_dishes().unwrap();
    assert_eq!(dishes.len(), 2);
    let pho_line = dishes.iter().find(|i| i.dish_id == "d-pho").unwrap();
    assert_eq!(pho_line.quantity, 2);
    assert_eq!(pho_line.note.as_deref(), Some("ít hành"));
    assert_eq!(controller.selected_table().unwrap().status, TableStatus::Occupied);
}

#[tokio::test]
async fn failed_commit_keeps_the_cart() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t1").await;
    controller.add_to_cart(&dish("d-pho", "Phở bò", 45000.0));
    controller.add_to_cart(&dish("d-com", "Cơm rang", 35000.0));
    backend.with(|s| s.fail_order_add_from = Some(1));

    let err = controller.commit_cart_to_table().await.unwrap_err();

    assert!(matches!(err, PosError::Client(_)));
    assert_eq!(controller.cart().len(), 2);
    assert_eq!(
        controller.dish_error(),
        Some("Không thể thêm món vào bàn: Không thể thêm món")
    );
}

#[tokio::test]
async fn empty_cart_is_not_committed() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t1").await;
    backend.clear_calls();

    let err = controller.commit_cart_to_table().await.unwrap_err();
    assert!(matches!(err, PosError::Validation(_)));
    assert_eq!(controller.dish_error(), Some("Giỏ hàng đang trống."));
    assert_eq!(backend.count_calls("POST"), 0);
}

#[tokio::test]
async fn four_toggles_return_to_the_starting_status() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(controller.toggle_dish_status("oi-a").await.unwrap());
    }

    assert_eq!(
        seen,
        vec![
            OrderItemStatus::Preparing,
            OrderItemStatus::Completed,
            OrderItemStatus::Cancelled,
            OrderItemStatus::Ordered,
        ]
    );
    assert_eq!(status_of(&controller, "oi-a"), OrderItemStatus::Ordered);
    assert_eq!(controller.notifications().len(), 4);
    assert_eq!(backend.count_calls("PATCH /order-items/oi-a/update-status"), 4);
}

#[tokio::test]
async fn toggle_posts_a_notification_with_the_new_status() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;

    controller.toggle_dish_status("oi-a").await.unwrap();

    let note = &controller.notifications().entries()[0];
    assert_eq!(note.table_id, "t2");
    assert_eq!(note.dish_name, "Phở bò");
    assert_eq!(note.quantity, 2);
    assert_eq!(note.status, OrderItemStatus::Preparing);
}

#[tokio::test]
async fn completed_goes_to_cancelled_then_back_to_ordered() {
    let backend = FakeBackend::seeded();
    backend.with(|s| s.items.get_mut("t2").unwrap()[0].status = OrderItemStatus::Completed);
    let mut controller = open(&backend, "t2").await;

    assert_eq!(
        controller.toggle_dish_status("oi-a").await.unwrap(),
        OrderItemStatus::Cancelled
    );
    assert_eq!(
        controller.toggle_dish_status("oi-a").await.unwrap(),
        OrderItemStatus::Ordered
    );
}

#[tokio::test]
async fn terminal_cancellation_refuses_the_toggle() {
    let backend = FakeBackend::seeded();
    backend.with(|s| s.items.get_mut("t2").unwrap()[0].status = OrderItemStatus::Cancelled);
    let options = ControllerOptions {
        cancelled_is_terminal: true,
        ..ControllerOptions::default()
    };
    let mut controller = backend.controller_with(options);
    controller.load_tables().await.unwrap();
    controller.select_table("t2").await.unwrap();
    backend.clear_calls();

    let err = controller.toggle_dish_status("oi-a").await.unwrap_err();

    assert!(matches!(err, PosError::Validation(_)));
    assert_eq!(status_of(&controller, "oi-a"), OrderItemStatus::Cancelled);
    assert_eq!(backend.count_calls("PATCH"), 0);
}

#[tokio::test]
async fn rejected_status_update_keeps_local_status() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;
    backend.with(|s| s.fail_item_status = true);

    let err = controller.toggle_dish_status("oi-a").await.unwrap_err();

    assert!(matches!(err, PosError::Client(_)));
    assert_eq!(status_of(&controller, "oi-a"), OrderItemStatus::Ordered);
    assert_eq!(
        controller.error(ErrorScope::Dish),
        Some("Không thể cập nhật trạng thái món: Lỗi hệ thống")
    );
    assert!(controller.notifications().is_empty());
}

#[tokio::test]
async fn call_order_sends_uncalled_items_to_the_kitchen() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;
    backend.clear_calls();

    let called = controller.call_order().await.unwrap();

    assert_eq!(called, 1);
    assert_eq!(backend.count_calls("PATCH /order-items/oi-b/update-status"), 1);
    assert_eq!(backend.count_calls("PATCH /order-items/oi-a"), 0);
    assert_eq!(status_of(&controller, "oi-b"), OrderItemStatus::Ordered);
    assert_eq!(controller.notifications().for_table("t2").count(), 1);

    assert_eq!(controller.call_order().await.unwrap(), 0);
}

#[tokio::test]
async fn quantity_change_and_removal_refetch_dishes() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;

    controller.change_dish_quantity("oi-a", 5).await.unwrap();
    let pho = controller
        .selected_dishes()
        .unwrap()
        .iter()
        .find(|i| i.id == "oi-a")
        .unwrap();
    assert_eq!(pho.quantity, 5);

    let err = controller.change_dish_quantity("oi-a", 0).await.unwrap_err();
    assert!(matches!(err, PosError::Validation(_)));

    controller.delete_dish("oi-b").await.unwrap();
    assert_eq!(controller.selected_dishes().unwrap().len(), 1);
    assert_eq!(controller.flash().unwrap().message, "Xóa món thành công!");
    assert_eq!(backend.count_calls("DELETE /order-items/oi-b?tableId=t2"), 1);
}

#[tokio::test]
async fn add_table_validates_then_creates() {
    let backend = FakeBackend::seeded();
    let mut controller = backend.controller();
    controller.load_tables().await.unwrap();
    controller.load_table_types().await.unwrap();

    let blank = NewTable::default();
    assert!(controller.add_table(&blank).await.is_err());
    assert_eq!(controller.add_table_error(), Some("Vui lòng nhập tên bàn."));

    let duplicate = NewTable {
        name: "Bàn 1".into(),
        table_type_id: Some("tt-thuong".into()),
        max_person: Some(4),
        note: None,
    };
    assert!(controller.add_table(&duplicate).await.is_err());
    assert!(controller.add_table_error().unwrap().contains("đã tồn tại"));
    assert_eq!(backend.count_calls("POST /tables"), 0);

    let fresh = NewTable {
        name: "Bàn 4".into(),
        ..duplicate
    };
    controller.add_table(&fresh).await.unwrap();
    assert!(controller.add_table_error().is_none());
    assert_eq!(controller.tables().len(), 4);
    assert_eq!(controller.flash().unwrap().message, "Thêm bàn thành công!");
}

#[tokio::test]
async fn deleting_the_selected_table_returns_to_grid() {
    let backend = FakeBackend::seeded();
    let mut controller = open(&backend, "t2").await;

    controller.delete_table("t2").await.unwrap();

    assert_eq!(controller.view(), ViewMode::Grid);
    assert!(controller.selected_table_id().is_none());
    assert_eq!(controller.tables().len(), 2);
    assert_eq!(controller.flash().unwrap().message, "Xóa bàn thành công!");
}

#[tokio::test]
async fn statistics_and_filter_follow_loaded_tables() {
    let backend = FakeBackend::seeded();
    let mut controller = backend.controller();
    controller.load_tables().await.unwrap();

    let stats = controller.table_statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.empty, 1);
    assert_eq!(stats.occupied, 1);
    assert_eq!(stats.reserved, 1);

    let filter = TableFilter {
        status: Some(TableStatus::Reserved),
        ..TableFilter::default()
    };
    let names: Vec<_> = controller
        .filtered_tables(&filter)
        .into_iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bàn 3"]);
}

#[tokio::test]
async fn table_types_are_added_and_removed() {
    let backend = FakeBackend::seeded();
    let mut controller = backend.controller();
    controller.load_table_types().await.unwrap();

    let vip = controller.add_table_type(" VIP ").await.unwrap();
    assert_eq!(vip.name, "VIP");
    assert_eq!(controller.table_types().len(), 2);

    assert!(controller.add_table_type("  ").await.is_err());
    assert_eq!(controller.add_table_error(), Some("Vui lòng nhập tên loại bàn."));

    controller.delete_table_type(&vip.id).await.unwrap();
    assert_eq!(controller.table_types().len(), 1);
    assert_eq!(backend.count_calls("DELETE /tables/type/"), 1);
}
