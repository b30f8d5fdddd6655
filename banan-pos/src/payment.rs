//! Payment dialog state and VietQR transfer payload

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Invoice;

use crate::error::PosError;
use crate::money::format_amount;

/// How the guest settles the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayMethod {
    Cash,
    Transfer,
}

impl PayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Transfer => "transfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Tiền mặt",
            Self::Transfer => "Chuyển khoản",
        }
    }
}

impl fmt::Display for PayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayMethod {
    type Err = PosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "transfer" => Ok(Self::Transfer),
            other => Err(PosError::validation(format!(
                "Phương thức thanh toán không hợp lệ: {}",
                other
            ))),
        }
    }
}

/// Receiving account for transfer payments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMerchant {
    /// VietQR bank code, e.g. `mbbank`
    pub bank: String,
    pub account_number: String,
    pub account_name: String,
    /// VietQR image template
    pub template: String,
}

impl Default for QrMerchant {
    fn default() -> Self {
        Self {
            bank: "mbbank".to_string(),
            account_number: "02012345678909".to_string(),
            account_name: "LE XUAN DUNG".to_string(),
            template: "compact2".to_string(),
        }
    }
}

impl QrMerchant {
    /// VietQR image URL with the amount embedded
    pub fn qr_url(&self, amount: Decimal) -> String {
        format!(
            "https://img.vietqr.io/image/{}-{}-{}.jpg?amount={}&accountName={}",
            self.bank,
            self.account_number,
            self.template,
            format_amount(amount),
            self.account_name.replace(' ', "%20"),
        )
    }
}

/// State of the payment dialog of the selected table
#[derive(Debug, Clone, Default)]
pub struct PaymentDialog {
    invoice: Option<Invoice>,
    method: Option<PayMethod>,
    qr_url: Option<String>,
}

impl PaymentDialog {
    /// Open on a freshly fetched invoice with no method chosen
    pub fn open(invoice: Invoice) -> Self {
        Self {
            invoice: Some(invoice),
            method: None,
            qr_url: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.invoice.is_some()
    }

    pub fn invoice(&self) -> Option<&Invoice> {
        self.invoice.as_ref()
    }

    pub fn method(&self) -> Option<PayMethod> {
        self.method
    }

    /// Payment options are shown once a method is chosen
    pub fn shows_options(&self) -> bool {
        self.method.is_some()
    }

    pub fn qr_url(&self) -> Option<&str> {
        self.qr_url.as_deref()
    }

    pub(crate) fn choose(&mut self, method: PayMethod, qr_url: Option<String>) {
        self.method = Some(method);
        self.qr_url = qr_url;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}
