//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::application::CurrentUser;
use kernel::response::{success, success_empty};

use crate::application::{
    CartUseCase, CatalogUseCase, CreateProductInput, OrderLineInput, OrderQueryUseCase,
    PlaceOrderInput, PlaceOrderUseCase, UpdateOrderStatusUseCase,
};
use crate::domain::repository::{CartRepository, OrderRepository, ProductRepository};
use crate::domain::value_object::{order_id::OrderId, product_id::ProductId};
use crate::error::CommerceResult;
use crate::presentation::dto::{
    AddCartItemRequest, CartResponse, CreateProductRequest, OrderDetailResponse, OrderResponse,
    OrderStatusResponse, OrdersResponse, PlaceOrderRequest, ProductDetailResponse,
    ProductResponse, ProductsResponse, UpdateCartItemRequest, UpdateOrderStatusRequest,
};

/// Shared state for commerce handlers
#[derive(Clone)]
pub struct CommerceAppState<R>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Catalog
// ============================================================================

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<CommerceAppState<R>>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CatalogUseCase::new(state.repo.clone());
    let products = use_case.list().await?;

    Ok(Json(success(ProductsResponse {
        products: products.iter().map(ProductResponse::from).collect(),
    })))
}

/// GET /api/products/{id}
pub async fn get_product<R>(
    State(state): State<CommerceAppState<R>>,
    Path(id): Path<Uuid>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CatalogUseCase::new(state.repo.clone());
    let product = use_case.get(&ProductId::from_uuid(id)).await?;

    Ok(Json(success(ProductDetailResponse {
        product: ProductResponse::from(&product),
    })))
}

/// POST /api/products (admin)
pub async fn create_product<R>(
    State(state): State<CommerceAppState<R>>,
    Json(req): Json<CreateProductRequest>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CatalogUseCase::new(state.repo.clone());

    let input = CreateProductInput {
        product_name: req.name,
        description: req.description,
        unit_price_cents: req.price,
        image_url: req.image,
    };

    let product = use_case.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(success(ProductDetailResponse {
            product: ProductResponse::from(&product),
        })),
    ))
}

// ============================================================================
// Cart
// ============================================================================

/// GET /api/cart
pub async fn get_cart<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CartUseCase::new(state.repo.clone(), state.repo.clone());
    let lines = use_case.view(&current_user.user_id).await?;

    Ok(Json(success(CartResponse::from_lines(&lines))))
}

/// POST /api/cart/items
pub async fn add_cart_item<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<AddCartItemRequest>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CartUseCase::new(state.repo.clone(), state.repo.clone());
    let lines = use_case
        .add(
            &current_user.user_id,
            &ProductId::from_uuid(req.product_id),
            req.quantity,
        )
        .await?;

    Ok(Json(success(CartResponse::from_lines(&lines))))
}

/// PATCH /api/cart/items/{product_id}
pub async fn update_cart_item<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<UpdateCartItemRequest>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CartUseCase::new(state.repo.clone(), state.repo.clone());
    let lines = use_case
        .set_quantity(
            &current_user.user_id,
            &ProductId::from_uuid(product_id),
            req.quantity,
        )
        .await?;

    Ok(Json(success(CartResponse::from_lines(&lines))))
}

/// DELETE /api/cart/items/{product_id}
pub async fn remove_cart_item<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(product_id): Path<Uuid>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CartUseCase::new(state.repo.clone(), state.repo.clone());
    let lines = use_case
        .remove(&current_user.user_id, &ProductId::from_uuid(product_id))
        .await?;

    Ok(Json(success(CartResponse::from_lines(&lines))))
}

/// DELETE /api/cart
pub async fn clear_cart<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = CartUseCase::new(state.repo.clone(), state.repo.clone());
    use_case.clear(&current_user.user_id).await?;

    Ok(Json(success_empty()))
}

// ============================================================================
// Orders
// ============================================================================

/// POST /api/orders
pub async fn place_order<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<PlaceOrderRequest>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = PlaceOrderUseCase::new(state.repo.clone());

    let input = PlaceOrderInput {
        address: req.shipping_address.address,
        city: req.shipping_address.city,
        postal_code: req.shipping_address.postal_code,
        country: req.shipping_address.country,
        payment_method: req.payment_method,
        items: req
            .items
            .into_iter()
            .map(|line| OrderLineInput {
                product_id: ProductId::from_uuid(line.product_id),
                product_name: line.name,
                quantity: line.quantity,
                unit_price_cents: line.unit_price,
                image_url: line.image,
            })
            .collect(),
        total_cents: req.total_price,
        shipping_cents: req.shipping_price,
        tax_cents: req.tax_price,
    };

    let output = use_case.execute(current_user.user_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(success(OrderDetailResponse {
            order: OrderResponse::from(&output.order),
        })),
    ))
}

/// GET /api/orders
pub async fn list_orders<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = OrderQueryUseCase::new(state.repo.clone());
    let orders = use_case.list_for(&current_user).await?;

    Ok(Json(success(OrdersResponse {
        orders: orders.iter().map(OrderResponse::from).collect(),
    })))
}

/// GET /api/orders/{id}
pub async fn get_order<R>(
    State(state): State<CommerceAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = OrderQueryUseCase::new(state.repo.clone());
    let order = use_case
        .get(&OrderId::from_uuid(id), &current_user)
        .await?;

    Ok(Json(success(OrderDetailResponse {
        order: OrderResponse::from(&order),
    })))
}

/// PATCH /api/orders/{id}/status (admin)
pub async fn update_order_status<R>(
    State(state): State<CommerceAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> CommerceResult<impl IntoResponse>
where
    R: ProductRepository + CartRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateOrderStatusUseCase::new(state.repo.clone());
    let status = use_case
        .execute(&OrderId::from_uuid(id), &req.status)
        .await?;

    Ok(Json(success(OrderStatusResponse {
        order_status: status.code().to_string(),
    })))
}
