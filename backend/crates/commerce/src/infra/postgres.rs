//! PostgreSQL Repository Implementations

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    cart_item::CartLine,
    order::{Order, OrderItem},
    product::Product,
};
use crate::domain::repository::{CartRepository, OrderRepository, ProductRepository};
use crate::domain::value_object::{
    order_id::OrderId, order_status::OrderStatus, product_id::ProductId,
    shipping_address::ShippingAddress,
};
use crate::error::{CommerceError, CommerceResult};

/// PostgreSQL-backed commerce repository
#[derive(Clone)]
pub struct PgCommerceRepository {
    pool: PgPool,
}

impl PgCommerceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Product Repository Implementation
// ============================================================================

impl ProductRepository for PgCommerceRepository {
    async fn create(&self, product: &Product) -> CommerceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                product_name,
                description,
                unit_price_cents,
                image_url,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.product_name)
        .bind(&product.description)
        .bind(product.unit_price_cents)
        .bind(&product.image_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CommerceResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                product_name,
                description,
                unit_price_cents,
                image_url,
                created_at,
                updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_product()))
    }

    async fn list(&self) -> CommerceResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                product_name,
                description,
                unit_price_cents,
                image_url,
                created_at,
                updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }
}

// ============================================================================
// Cart Repository Implementation
// ============================================================================

impl CartRepository for PgCommerceRepository {
    async fn lines_for_user(&self, user_id: &UserId) -> CommerceResult<Vec<CartLine>> {
        let rows = sqlx::query_as::<_, CartLineRow>(
            r#"
            SELECT
                c.product_id,
                p.product_name,
                p.unit_price_cents,
                p.image_url,
                c.quantity
            FROM cart_items c
            JOIN products p ON p.product_id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.added_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_line()).collect())
    }

    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: i32,
    ) -> CommerceResult<()> {
        // One line per product: re-adding merges into the existing line
        sqlx::query(
            r#"
            INSERT INTO cart_items (
                user_id,
                product_id,
                quantity,
                added_at
            ) VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(product_id.as_uuid())
        .bind(quantity)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_quantity(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: i32,
    ) -> CommerceResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE cart_items
            SET quantity = $3
            WHERE user_id = $1 AND product_id = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(product_id.as_uuid())
        .bind(quantity)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }

    async fn remove_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> CommerceResult<u64> {
        let removed =
            sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
                .bind(user_id.as_uuid())
                .bind(product_id.as_uuid())
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(removed)
    }

    async fn clear(&self, user_id: &UserId) -> CommerceResult<u64> {
        let removed = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(removed)
    }
}

// ============================================================================
// Order Repository Implementation
// ============================================================================

impl OrderRepository for PgCommerceRepository {
    async fn place(&self, order: &Order) -> CommerceResult<()> {
        // Header, lines, and cart cleanup commit together; any failure
        // rolls the whole order back and the cart keeps its contents
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id,
                user_id,
                ship_address,
                ship_city,
                ship_postal_code,
                ship_country,
                payment_method,
                total_cents,
                shipping_cents,
                tax_cents,
                order_status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(order.order_id.as_uuid())
        .bind(order.user_id.as_uuid())
        .bind(order.shipping.address())
        .bind(order.shipping.city())
        .bind(order.shipping.postal_code())
        .bind(order.shipping.country())
        .bind(&order.payment_method)
        .bind(order.total_cents)
        .bind(order.shipping_cents)
        .bind(order.tax_cents)
        .bind(order.status.id())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&mut *tx)
        .await?;

        // order_item_id is BIGSERIAL, so insertion order preserves the
        // submitted line sequence on later reads
        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_id,
                    product_id,
                    product_name,
                    quantity,
                    unit_price_cents,
                    image_url
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(order.order_id.as_uuid())
            .bind(item.product_id.as_uuid())
            .bind(&item.product_name)
            .bind(item.quantity)
            .bind(item.unit_price_cents)
            .bind(&item.image_url)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_foreign_key_violation() {
                        return CommerceError::UnknownProduct;
                    }
                }
                CommerceError::Database(e)
            })?;
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(order.user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, order_id: &OrderId) -> CommerceResult<Option<Order>> {
        let header = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                order_id,
                user_id,
                ship_address,
                ship_city,
                ship_postal_code,
                ship_country,
                payment_method,
                total_cents,
                shipping_cents,
                tax_cents,
                order_status,
                created_at,
                updated_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(order_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let items = self.items_for_order(order_id.as_uuid()).await?;

        Ok(Some(header.into_order(items)))
    }

    async fn list_for_user(&self, user_id: &UserId) -> CommerceResult<Vec<Order>> {
        let headers = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                order_id,
                user_id,
                ship_address,
                ship_city,
                ship_postal_code,
                ship_country,
                payment_method,
                total_cents,
                shipping_cents,
                tax_cents,
                order_status,
                created_at,
                updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(headers.len());
        for header in headers {
            let items = self.items_for_order(&header.order_id).await?;
            orders.push(header.into_order(items));
        }

        Ok(orders)
    }

    async fn update_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> CommerceResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE orders
            SET order_status = $2, updated_at = $3
            WHERE order_id = $1
            "#,
        )
        .bind(order_id.as_uuid())
        .bind(status.id())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }
}

impl PgCommerceRepository {
    async fn items_for_order(&self, order_id: &Uuid) -> CommerceResult<Vec<OrderItem>> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT
                product_id,
                product_name,
                quantity,
                unit_price_cents,
                image_url
            FROM order_items
            WHERE order_id = $1
            ORDER BY order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_item()).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    product_name: String,
    description: Option<String>,
    unit_price_cents: i64,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            product_name: self.product_name,
            description: self.description,
            unit_price_cents: self.unit_price_cents,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CartLineRow {
    product_id: Uuid,
    product_name: String,
    unit_price_cents: i64,
    image_url: Option<String>,
    quantity: i32,
}

impl CartLineRow {
    fn into_line(self) -> CartLine {
        CartLine {
            product_id: ProductId::from_uuid(self.product_id),
            product_name: self.product_name,
            unit_price_cents: self.unit_price_cents,
            image_url: self.image_url,
            quantity: self.quantity,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: Uuid,
    user_id: Uuid,
    ship_address: String,
    ship_city: String,
    ship_postal_code: String,
    ship_country: String,
    payment_method: String,
    total_cents: i64,
    shipping_cents: i64,
    tax_cents: i64,
    order_status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            order_id: OrderId::from_uuid(self.order_id),
            user_id: UserId::from_uuid(self.user_id),
            shipping: ShippingAddress::from_db(
                self.ship_address,
                self.ship_city,
                self.ship_postal_code,
                self.ship_country,
            ),
            payment_method: self.payment_method,
            items,
            total_cents: self.total_cents,
            shipping_cents: self.shipping_cents,
            tax_cents: self.tax_cents,
            status: OrderStatus::from_id(self.order_status),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    product_id: Uuid,
    product_name: String,
    quantity: i32,
    unit_price_cents: i64,
    image_url: Option<String>,
}

impl OrderItemRow {
    fn into_item(self) -> OrderItem {
        OrderItem {
            product_id: ProductId::from_uuid(self.product_id),
            product_name: self.product_name,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
            image_url: self.image_url,
        }
    }
}
