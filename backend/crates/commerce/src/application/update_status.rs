//! Update Order Status Use Case
//!
//! Administrative transition of an order through its lifecycle.

use std::sync::Arc;

use crate::domain::repository::OrderRepository;
use crate::domain::value_object::{order_id::OrderId, order_status::OrderStatus};
use crate::error::{CommerceError, CommerceResult};

/// Update order status use case
pub struct UpdateOrderStatusUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> UpdateOrderStatusUseCase<O>
where
    O: OrderRepository,
{
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Set an order's status from a request-supplied code
    pub async fn execute(&self, order_id: &OrderId, status_code: &str) -> CommerceResult<OrderStatus> {
        let status = OrderStatus::from_code(status_code).ok_or_else(|| {
            CommerceError::Validation(format!("Unknown order status: {}", status_code))
        })?;

        let updated = self.order_repo.update_status(order_id, status).await?;
        if updated == 0 {
            return Err(CommerceError::OrderNotFound);
        }

        tracing::info!(
            order_id = %order_id,
            status = %status,
            "Order status updated"
        );

        Ok(status)
    }
}
