//! Inputs to the notification templates

use serde::{Deserialize, Serialize};

/// Order summary used by the confirmation and new-order templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order_id: String,
    pub total_amount: f64,
    pub items_count: u32,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
}

/// Order lifecycle change sent to a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusChange {
    pub order_id: String,
    /// `confirmed`, `shipped`, `delivered`, `cancelled` or anything else
    pub status: String,
    #[serde(default)]
    pub company_name: String,
}

/// Who receives a transaction notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipientType {
    #[serde(rename = "driver")]
    Driver,
    #[serde(rename = "company-manager")]
    CompanyManager,
}

impl std::fmt::Display for RecipientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipientType::Driver => write!(f, "driver"),
            RecipientType::CompanyManager => write!(f, "company-manager"),
        }
    }
}

/// A fuel station sale, as far as the notifications need it.
///
/// Optional fields fall back to the template defaults (`Fuel`, `N/A`, `L`,
/// `Staff`, zero points).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionNotice {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub car_number: Option<String>,
    #[serde(default)]
    pub coupon_number: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub item_unit: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    pub cost: f64,
    #[serde(default)]
    pub points_earned: Option<u32>,
    #[serde(default)]
    pub served_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_type_wire_names() {
        let manager: RecipientType = serde_json::from_str("\"company-manager\"").unwrap();
        assert_eq!(manager, RecipientType::CompanyManager);
        assert!(serde_json::from_str::<RecipientType>("\"customer\"").is_err());
        assert_eq!(RecipientType::Driver.to_string(), "driver");
    }

    #[test]
    fn test_transaction_notice_camel_case() {
        let notice: TransactionNotice = serde_json::from_str(
            r#"{"driverName":"Kofi","carNumber":"GR-1234-21","quantity":40,"cost":520.5}"#,
        )
        .unwrap();

        assert_eq!(notice.driver_name.as_deref(), Some("Kofi"));
        assert_eq!(notice.car_number.as_deref(), Some("GR-1234-21"));
        assert_eq!(notice.cost, 520.5);
        assert!(notice.coupon_number.is_none());
    }
}
