//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and `delete` built on
//! top of a generic `ResourceClient`, with framework errors mapped onto the resource's own error
//! type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Coupon { id: u32 }
/// #[derive(Debug)] struct CouponCreate;
/// #[derive(Debug)] struct CouponUpdate;
/// #[derive(Debug)] enum CouponAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum CouponError {
///     #[error("coupon not found: {0}")]
///     NotFound(String),
///     #[error("coupon store unavailable: {0}")]
///     Unavailable(String),
/// }
///
/// impl From<String> for CouponError {
///     fn from(s: String) -> Self { CouponError::Unavailable(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Coupon {
///     type Id = u32;
///     type Create = CouponCreate;
///     type Update = CouponUpdate;
///     type Action = CouponAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CouponError;
///
///     fn from_create_params(id: u32, _: CouponCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: CouponUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CouponAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct CouponClient {
///     inner: ResourceClient<Coupon>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Coupon> for CouponClient {
///     type Error = CouponError;
///
///     fn inner(&self) -> &ResourceClient<Coupon> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         match e {
///             FrameworkError::NotFound(id) => CouponError::NotFound(id),
///             other => CouponError::Unavailable(other.to_string()),
///         }
///     }
/// }
///
/// // get(), list() and delete() come for free
/// async fn usage(client: CouponClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in ID order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
