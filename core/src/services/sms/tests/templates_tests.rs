//! Tests for the notification templates

use fs_shared::config::TemplateConfig;

use crate::domain::entities::notification::{OrderDetails, OrderStatusChange, TransactionNotice};
use crate::services::sms::templates;

fn order() -> OrderDetails {
    OrderDetails {
        order_id: "ORD-1001".to_string(),
        total_amount: 150.5,
        items_count: 3,
        company_name: "Star Oil".to_string(),
        customer_name: "Ama Owusu".to_string(),
        customer_phone: "0241234567".to_string(),
    }
}

fn status(status: &str) -> OrderStatusChange {
    OrderStatusChange {
        order_id: "ORD-1001".to_string(),
        status: status.to_string(),
        company_name: "Star Oil".to_string(),
    }
}

#[test]
fn test_setup_otp_pluralises_companies() {
    assert!(templates::setup_otp("1234", 1).contains("You have accounts at 1 company."));
    assert!(templates::setup_otp("1234", 3).contains("You have accounts at 3 companies."));
}

#[test]
fn test_order_confirmation() {
    let message = templates::order_confirmation(&order(), &TemplateConfig::default());
    assert_eq!(
        message,
        "Order ORD-1001 confirmed! 3 items, Total: GHS 150.50. Star Oil will process your order soon. Thank you!"
    );
}

#[test]
fn test_company_order_notification() {
    let message = templates::company_order_notification(&order(), &TemplateConfig::default());
    assert!(message.starts_with("NEW ORDER ORD-1001\n"));
    assert!(message.contains("Customer: Ama Owusu\nPhone: 0241234567\nItems: 3\n"));
}

#[test]
fn test_known_order_statuses() {
    assert_eq!(
        templates::order_status_update(&status("confirmed")),
        "Your order ORD-1001 has been confirmed by Star Oil."
    );
    assert!(templates::order_status_update(&status("shipped")).contains("on the way"));
    assert!(templates::order_status_update(&status("delivered")).contains("Thank you for shopping with Star Oil"));
    assert!(templates::order_status_update(&status("cancelled")).contains("Contact Star Oil"));
}

#[test]
fn test_unknown_order_status_uses_generic_template() {
    assert_eq!(
        templates::order_status_update(&status("on_hold")),
        "Order ORD-1001 status: on_hold"
    );
}

#[test]
fn test_driver_receipt_defaults() {
    let tx = TransactionNotice {
        cost: 200.0,
        ..TransactionNotice::default()
    };
    let message = templates::driver_transaction_receipt(&tx, &TemplateConfig::default());

    assert_eq!(
        message,
        "Dear Client, thank you for your purchase of GHS 200.00 of Fuel at Ejisu-Krapa Shell.\nCar No: N/A.\nCoupon No: N/A.\nLoyalty points: 0\n#0240431219"
    );
}

#[test]
fn test_manager_notice() {
    let tx = TransactionNotice {
        driver_name: Some("Kofi Mensah".to_string()),
        car_number: Some("GR-1234-21".to_string()),
        item_name: Some("Diesel".to_string()),
        quantity: 40.0,
        cost: 520.0,
        ..TransactionNotice::default()
    };
    let message = templates::manager_transaction_notice(&tx, &TemplateConfig::default());

    assert_eq!(
        message,
        "New Transaction\nDriver: Kofi Mensah\nCar: GR-1234-21\nItem: Diesel\nQty: 40 L\nAmount: GHS 520.00\nServed by: Staff"
    );
}

#[test]
fn test_payment_confirmation_uses_configured_station_details() {
    let templates_config = TemplateConfig {
        station_name: "Other Station".to_string(),
        helpline: "0200000000".to_string(),
        currency: "GH₵".to_string(),
    };
    let tx = TransactionNotice {
        id: Some("TX-9".to_string()),
        driver_name: Some("Kofi".to_string()),
        item_name: Some("Super".to_string()),
        quantity: 12.5,
        cost: 190.0,
        ..TransactionNotice::default()
    };

    let message = templates::payment_confirmation(&tx, &templates_config);
    assert!(message.starts_with("Payment Confirmed!\nTransaction ID: TX-9\n"));
    assert!(message.contains("Amount: GH₵ 190.00"));
    assert!(message.contains("Qty: 12.5"));
    assert!(message.ends_with("Status: PAID\nThank you!"));
}
