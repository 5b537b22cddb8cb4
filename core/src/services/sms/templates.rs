//! Message templates for the notification helpers.
//!
//! Each function is pure: the same input always renders the same text.

use fs_shared::config::TemplateConfig;

use crate::domain::entities::notification::{OrderDetails, OrderStatusChange, TransactionNotice};

pub fn otp(code: &str) -> String {
    format!(
        "Your verification code is: {}. Valid for 5 minutes. Do not share this code with anyone.",
        code
    )
}

pub fn setup_otp(code: &str, company_count: usize) -> String {
    let companies = if company_count > 1 {
        format!("{} companies", company_count)
    } else {
        String::from("1 company")
    };
    format!(
        "Welcome! Your account setup code is: {}. You have accounts at {}. Valid for 10 minutes.",
        code, companies
    )
}

pub fn order_confirmation(order: &OrderDetails, templates: &TemplateConfig) -> String {
    format!(
        "Order {} confirmed! {} items, Total: {} {:.2}. {} will process your order soon. Thank you!",
        order.order_id, order.items_count, templates.currency, order.total_amount, order.company_name
    )
}

pub fn company_order_notification(order: &OrderDetails, templates: &TemplateConfig) -> String {
    format!(
        "NEW ORDER {}\nCustomer: {}\nPhone: {}\nItems: {}\nTotal: {} {:.2}\nPlease process this order.",
        order.order_id,
        order.customer_name,
        order.customer_phone,
        order.items_count,
        templates.currency,
        order.total_amount
    )
}

/// Known statuses get a tailored message, anything else the generic one
pub fn order_status_update(change: &OrderStatusChange) -> String {
    let id = &change.order_id;
    let company = &change.company_name;
    match change.status.as_str() {
        "confirmed" => format!("Your order {} has been confirmed by {}.", id, company),
        "shipped" => format!("Your order {} has been shipped! It's on the way.", id),
        "delivered" => format!(
            "Your order {} has been delivered. Thank you for shopping with {}!",
            id, company
        ),
        "cancelled" => format!(
            "Your order {} has been cancelled. Contact {} if you have questions.",
            id, company
        ),
        other => format!("Order {} status: {}", id, other),
    }
}

/// Purchase receipt sent to the driver
pub fn driver_transaction_receipt(tx: &TransactionNotice, templates: &TemplateConfig) -> String {
    format!(
        "Dear Client, thank you for your purchase of {} {:.2} of {} at {}.\nCar No: {}.\nCoupon No: {}.\nLoyalty points: {}\n#{}",
        templates.currency,
        tx.cost,
        tx.item_name.as_deref().unwrap_or("Fuel"),
        templates.station_name,
        tx.car_number.as_deref().unwrap_or("N/A"),
        tx.coupon_number.as_deref().unwrap_or("N/A"),
        tx.points_earned.unwrap_or(0),
        templates.helpline
    )
}

/// New transaction notice sent to the company manager
pub fn manager_transaction_notice(tx: &TransactionNotice, templates: &TemplateConfig) -> String {
    format!(
        "New Transaction\nDriver: {}\nCar: {}\nItem: {}\nQty: {} {}\nAmount: {} {:.2}\nServed by: {}",
        tx.driver_name.as_deref().unwrap_or_default(),
        tx.car_number.as_deref().unwrap_or("N/A"),
        tx.item_name.as_deref().unwrap_or("Fuel"),
        tx.quantity,
        tx.item_unit.as_deref().unwrap_or("L"),
        templates.currency,
        tx.cost,
        tx.served_by.as_deref().unwrap_or("Staff")
    )
}

pub fn payment_confirmation(tx: &TransactionNotice, templates: &TemplateConfig) -> String {
    format!(
        "Payment Confirmed!\nTransaction ID: {}\nDriver: {}\nAmount: {} {:.2}\nItem: {}\nQty: {}\nStatus: PAID\nThank you!",
        tx.id.as_deref().unwrap_or("N/A"),
        tx.driver_name.as_deref().unwrap_or_default(),
        templates.currency,
        tx.cost,
        tx.item_name.as_deref().unwrap_or("Fuel"),
        tx.quantity
    )
}
