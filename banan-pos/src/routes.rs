//! Page routing and role gating
//!
//! Protected pages list the roles allowed to see them; anyone else lands on
//! `NotFound`. Role names are the backend's Vietnamese labels.

use std::fmt;

/// Staff and customer roles as issued in the token `role` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    Staff,
    Kitchen,
    Cashier,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "Người quản lý",
            Self::Staff => "Nhân viên",
            Self::Kitchen => "Nhân viên bếp",
            Self::Cashier => "Nhân viên thu ngân",
            Self::Customer => "Khách hàng",
        }
    }

    /// Unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Người quản lý" => Some(Self::Manager),
            "Nhân viên" => Some(Self::Staff),
            "Nhân viên bếp" => Some(Self::Kitchen),
            "Nhân viên thu ngân" => Some(Self::Cashier),
            "Khách hàng" => Some(Self::Customer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const FLOOR_STAFF: &[Role] = &[Role::Manager, Role::Staff, Role::Kitchen, Role::Cashier];
const MANAGERS: &[Role] = &[Role::Manager];
const CUSTOMERS: &[Role] = &[Role::Customer];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Logout,
    Tables,
    Bookings,
    Invoices,
    Dishes,
    Revenue,
    Employees,
    Accounts,
    Customer,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Logout => "/logout",
            Self::Tables => "/table",
            Self::Bookings => "/ghinhandatban",
            Self::Invoices => "/invoices",
            Self::Dishes => "/dishes",
            Self::Revenue => "/revenue",
            Self::Employees => "/employee",
            Self::Accounts => "/account",
            Self::Customer => "/customer",
            Self::NotFound => "/notfoundpage",
        }
    }

    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let key = if trimmed.is_empty() { "/" } else { trimmed };
        match key {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/logout" => Self::Logout,
            "/table" => Self::Tables,
            "/ghinhandatban" => Self::Bookings,
            "/invoices" => Self::Invoices,
            "/dishes" => Self::Dishes,
            "/revenue" => Self::Revenue,
            "/employee" => Self::Employees,
            "/account" => Self::Accounts,
            "/customer" => Self::Customer,
            _ => Self::NotFound,
        }
    }

    /// `None` for public pages
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::Tables | Self::Invoices => Some(FLOOR_STAFF),
            Self::Bookings | Self::Dishes | Self::Revenue | Self::Employees | Self::Accounts => {
                Some(MANAGERS)
            }
            Self::Customer => Some(CUSTOMERS),
            Self::Home | Self::Login | Self::Register | Self::Logout | Self::NotFound => None,
        }
    }

    pub fn is_public(&self) -> bool {
        self.allowed_roles().is_none()
    }
}

/// Page actually shown for `route` to a user holding `role`
pub fn resolve(route: Route, role: Option<&str>) -> Route {
    let Some(allowed) = route.allowed_roles() else {
        return route;
    };
    match role.and_then(Role::parse) {
        Some(role) if allowed.contains(&role) => route,
        _ => {
            tracing::debug!(route = route.path(), role = ?role, "Route denied for role");
            Route::NotFound
        }
    }
}
