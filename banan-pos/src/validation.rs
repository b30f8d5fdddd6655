//! Client-side input validation
//!
//! Runs before any backend call; failures are `PosError::Validation` with a
//! message ready to show to the user.

use std::sync::LazyLock;

use regex::Regex;
use shared::client::RegisterRequest;
use shared::models::{
    BookingCreate, DishCreate, DishType, RestaurantTable, ReviewCreate, TableCreate, TableType,
};

use crate::error::{PosError, PosResult};

/// Review text limit
pub const MAX_REVIEW_LEN: usize = 500;

/// Notes on tables, dishes and cart lines
pub const MAX_NOTE_LEN: usize = 500;

/// Vietnamese mobile number: `0` followed by 9 digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d{9}$").expect("phone pattern is valid"));

/// Add-table form input
#[derive(Debug, Clone, Default)]
pub struct NewTable {
    pub name: String,
    pub table_type_id: Option<String>,
    pub max_person: Option<u32>,
    pub note: Option<String>,
}

fn required(value: &str, message: &str) -> PosResult<()> {
    if value.trim().is_empty() {
        return Err(PosError::validation(message));
    }
    Ok(())
}

fn optional_note(note: &Option<String>) -> PosResult<Option<String>> {
    match note.as_deref().map(str::trim) {
        Some(n) if n.chars().count() > MAX_NOTE_LEN => Err(PosError::validation(format!(
            "Ghi chú quá dài (tối đa {} ký tự).",
            MAX_NOTE_LEN
        ))),
        Some(n) if !n.is_empty() => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

/// Name must be non-empty and unique, a type must be chosen, capacity positive
pub fn validate_new_table(
    input: &NewTable,
    existing: &[RestaurantTable],
    types: &[TableType],
) -> PosResult<TableCreate> {
    let name = input.name.trim();
    required(name, "Vui lòng nhập tên bàn.")?;
    if existing.iter().any(|t| t.name == name) {
        return Err(PosError::validation(format!(
            "Bàn {} đã tồn tại. Vui lòng chọn tên khác.",
            name
        )));
    }
    let type_id = input
        .table_type_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| PosError::validation("Vui lòng chọn loại bàn."))?;
    let max_person = input
        .max_person
        .filter(|n| *n > 0)
        .ok_or_else(|| PosError::validation("Số lượng người tối đa phải là số dương."))?;

    let type_name = types
        .iter()
        .find(|t| t.id == type_id)
        .map(|t| t.name.clone())
        .unwrap_or_default();

    Ok(TableCreate {
        name: name.to_string(),
        table_type: TableType {
            id: type_id.to_string(),
            name: type_name,
        },
        max_person,
        note: optional_note(&input.note)?,
    })
}

/// Content 1..=500 characters, rating 1..=5
pub fn validate_review(user_id: &str, content: &str, rating: u8) -> PosResult<ReviewCreate> {
    required(user_id, "Vui lòng đăng nhập để gửi đánh giá.")?;
    let content = content.trim();
    required(content, "Vui lòng nhập nội dung đánh giá.")?;
    if content.chars().count() > MAX_REVIEW_LEN {
        return Err(PosError::validation(format!(
            "Nội dung đánh giá không được vượt quá {} ký tự.",
            MAX_REVIEW_LEN
        )));
    }
    if !(1..=5).contains(&rating) {
        return Err(PosError::validation("Vui lòng chọn số sao từ 1 đến 5."));
    }
    Ok(ReviewCreate {
        user_id: user_id.to_string(),
        content: content.to_string(),
        rating_star: rating,
    })
}

pub fn validate_booking(input: &BookingCreate) -> PosResult<BookingCreate> {
    let name = input.name.trim();
    required(name, "Vui lòng nhập họ tên.")?;
    let phone = input.phone.trim();
    if !PHONE_RE.is_match(phone) {
        return Err(PosError::validation(
            "Số điện thoại không hợp lệ (10 chữ số, bắt đầu bằng 0).",
        ));
    }
    required(&input.ordered_time, "Vui lòng chọn thời gian đặt bàn.")?;
    if input.person_number < 1 {
        return Err(PosError::validation("Số người phải lớn hơn 0."));
    }
    Ok(BookingCreate {
        name: name.to_string(),
        phone: phone.to_string(),
        ordered_time: input.ordered_time.trim().to_string(),
        person_number: input.person_number,
    })
}

pub fn validate_dish(input: &DishCreate) -> PosResult<()> {
    required(&input.name, "Vui lòng nhập tên món.")?;
    required(&input.dish_type.id, "Vui lòng chọn loại món.")?;
    if !input.price.is_finite() || input.price <= 0.0 {
        return Err(PosError::validation("Giá món phải là số dương."));
    }
    required(&input.unit, "Vui lòng nhập đơn vị tính.")?;
    optional_note(&input.note)?;
    Ok(())
}

pub fn validate_dish_type(name: &str, existing: &[DishType]) -> PosResult<String> {
    let name = name.trim();
    required(name, "Vui lòng nhập tên loại món.")?;
    if existing.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
        return Err(PosError::validation(format!("Loại món {} đã tồn tại.", name)));
    }
    Ok(name.to_string())
}

pub fn validate_registration(input: &RegisterRequest) -> PosResult<()> {
    required(&input.account_name, "Vui lòng nhập họ tên.")?;
    required(&input.account, "Vui lòng nhập tên đăng nhập.")?;
    required(&input.password, "Vui lòng nhập mật khẩu.")?;
    if input.password != input.confirm_password {
        return Err(PosError::validation("Mật khẩu xác nhận không khớp."));
    }
    Ok(())
}
