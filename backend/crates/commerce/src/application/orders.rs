//! Order Query Use Case
//!
//! Read access to placed orders. Customers see their own orders;
//! administrators see everyone's.

use std::sync::Arc;

use auth::application::authenticate::CurrentUser;

use crate::domain::entity::order::Order;
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::order_id::OrderId;
use crate::error::{CommerceError, CommerceResult};

/// Order query use case
pub struct OrderQueryUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> OrderQueryUseCase<O>
where
    O: OrderRepository,
{
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// List the caller's own orders, newest first
    pub async fn list_for(&self, viewer: &CurrentUser) -> CommerceResult<Vec<Order>> {
        self.order_repo.list_for_user(&viewer.user_id).await
    }

    /// Fetch one order the caller is allowed to see
    ///
    /// A missing order and an order owned by someone else come back as
    /// the same `OrderNotFound`, so order ids cannot be probed.
    pub async fn get(&self, order_id: &OrderId, viewer: &CurrentUser) -> CommerceResult<Order> {
        let order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or(CommerceError::OrderNotFound)?;

        if order.user_id != viewer.user_id && !viewer.role.is_admin() {
            return Err(CommerceError::OrderNotFound);
        }

        Ok(order)
    }
}
