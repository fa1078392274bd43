use crate::entities::order::OrderStatus;
use crate::entities::query::OrderQueryResult;

/// Returns a copy of `result` with the status of `order_id` replaced, or `None` when the
/// snapshot does not contain the order or already shows `status`.
///
/// Only that one field changes: order sequence, other entries and page meta are copied as-is.
pub fn patch_result(
    result: &OrderQueryResult,
    order_id: &str,
    status: OrderStatus,
) -> Option<OrderQueryResult> {
    let pos = result.orders.iter().position(|o| o.order_id == order_id)?;
    if result.orders[pos].status == status {
        return None;
    }
    let mut patched = result.clone();
    patched.orders[pos].status = status;
    Some(patched)
}
