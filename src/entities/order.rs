use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Canceled,
    Processing,
    Delivering,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Canceled,
        OrderStatus::Processing,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Canceled => "canceled",
            Self::Processing => "processing",
            Self::Delivering => "delivering",
            Self::Delivered => "delivered",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Canceled)
    }

    /// Actions a view may offer for an order currently in this status.
    pub fn available_actions(&self) -> Vec<OrderAction> {
        OrderAction::ALL
            .into_iter()
            .filter(|a| a.allowed_from(*self))
            .collect()
    }

    pub fn allows(&self, action: OrderAction) -> bool {
        action.allowed_from(*self)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    // exact, case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Approve,
    Dispatch,
    Deliver,
    Cancel,
}

impl OrderAction {
    pub const ALL: [OrderAction; 4] = [
        OrderAction::Approve,
        OrderAction::Dispatch,
        OrderAction::Deliver,
        OrderAction::Cancel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Dispatch => "dispatch",
            Self::Deliver => "deliver",
            Self::Cancel => "cancel",
        }
    }

    pub fn target(&self) -> OrderStatus {
        match self {
            Self::Approve => OrderStatus::Processing,
            Self::Dispatch => OrderStatus::Delivering,
            Self::Deliver => OrderStatus::Delivered,
            Self::Cancel => OrderStatus::Canceled,
        }
    }

    pub fn allowed_from(&self, from: OrderStatus) -> bool {
        matches!(
            (self, from),
            (Self::Approve, OrderStatus::Pending)
                | (Self::Dispatch, OrderStatus::Processing)
                | (Self::Deliver, OrderStatus::Delivering)
                | (Self::Cancel, OrderStatus::Pending | OrderStatus::Processing)
        )
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List-view projection of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price_in_cents: u64,
    pub quantity: NonZeroU32,
    pub product: Product,
}

impl OrderItem {
    pub fn subtotal_in_cents(&self) -> u64 {
        self.price_in_cents * u64::from(self.quantity.get())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_in_cents: u64,
    pub customer: Customer,
    pub order_items: Vec<OrderItem>,
}

impl OrderDetail {
    /// Sum of item subtotals. The remote total is expected to match but is not checked.
    pub fn items_total_in_cents(&self) -> u64 {
        self.order_items.iter().map(OrderItem::subtotal_in_cents).sum()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id.clone(),
            created_at: self.created_at,
            status: self.status,
            customer_name: self.customer.name.clone(),
            total: self.total_in_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: u64, qty: u32) -> OrderItem {
        OrderItem {
            id: "i1".into(),
            name: "Pizza".into(),
            price_in_cents: price,
            quantity: NonZeroU32::new(qty).unwrap(),
            product: Product {
                name: "Pizza".into(),
            },
        }
    }

    #[test]
    fn processing_offers_dispatch_and_cancel() {
        assert_eq!(
            OrderStatus::Processing.available_actions(),
            vec![OrderAction::Dispatch, OrderAction::Cancel]
        );
    }

    #[test]
    fn terminal_statuses_offer_nothing() {
        for s in [OrderStatus::Delivered, OrderStatus::Canceled] {
            assert!(s.is_terminal());
            assert!(s.available_actions().is_empty(), "{s} should be terminal");
        }
    }

    #[test]
    fn pending_and_delivering_actions() {
        assert_eq!(
            OrderStatus::Pending.available_actions(),
            vec![OrderAction::Approve, OrderAction::Cancel]
        );
        assert_eq!(
            OrderStatus::Delivering.available_actions(),
            vec![OrderAction::Deliver]
        );
    }

    #[test]
    fn actions_lead_to_expected_status() {
        assert_eq!(OrderAction::Approve.target(), OrderStatus::Processing);
        assert_eq!(OrderAction::Dispatch.target(), OrderStatus::Delivering);
        assert_eq!(OrderAction::Deliver.target(), OrderStatus::Delivered);
        assert_eq!(OrderAction::Cancel.target(), OrderStatus::Canceled);
    }

    #[test]
    fn status_parse_is_exact() {
        assert_eq!("pending".parse::<OrderStatus>(), Ok(OrderStatus::Pending));
        assert!("Pending".parse::<OrderStatus>().is_err());
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_serde_is_lowercase() {
        let s = serde_json::to_string(&OrderStatus::Delivering).unwrap();
        assert_eq!(s, "\"delivering\"");
        let back: OrderStatus = serde_json::from_str(&s).unwrap();
        assert_eq!(back, OrderStatus::Delivering);
    }

    #[test]
    fn summary_uses_camel_case_wire_names() {
        let json = serde_json::json!({
            "orderId": "o1",
            "createdAt": "2024-05-01T12:00:00Z",
            "status": "pending",
            "customerName": "Ana",
            "total": 14999
        });
        let s: OrderSummary = serde_json::from_value(json).unwrap();
        assert_eq!(s.order_id, "o1");
        assert_eq!(s.total, 14999);
        assert_eq!(s.status, OrderStatus::Pending);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let json = serde_json::json!({
            "id": "i1",
            "name": "Pizza",
            "priceInCents": 100,
            "quantity": 0,
            "product": { "name": "Pizza" }
        });
        assert!(serde_json::from_value::<OrderItem>(json).is_err());
    }

    #[test]
    fn detail_items_total_and_summary() {
        let d = OrderDetail {
            id: "o1".into(),
            created_at: Utc::now(),
            status: OrderStatus::Pending,
            total_in_cents: 5500,
            customer: Customer {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                phone: None,
            },
            order_items: vec![item(1500, 3), item(1000, 1)],
        };
        assert_eq!(d.items_total_in_cents(), 5500);
        let s = d.summary();
        assert_eq!(s.order_id, "o1");
        assert_eq!(s.customer_name, "Ana");
        assert_eq!(s.total, 5500);
    }
}
