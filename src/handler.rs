//! Route handlers.
//!
//! A handler takes the raw event by value and returns a boxed future of
//! `Result<R, T>`. Any `Fn(E) -> impl Future<Output = Result<R, T>>` closure
//! or async fn is a handler.

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;

/// Eventual outcome of a handler invocation.
pub type HandlerFuture<R, T> = BoxFuture<'static, Result<R, T>>;

/// Shared, type-erased handler as stored in a method table.
pub type BoxHandler<E, R, T> = Arc<dyn Handler<E, R, T>>;

/// An endpoint implementation.
pub trait Handler<E, R, T>: Send + Sync {
    /// Invoke the handler with the raw request event.
    fn call(&self, event: E) -> HandlerFuture<R, T>;
}

impl<E, R, T, F, Fut> Handler<E, R, T> for F
where
    F: Fn(E) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, T>> + Send + 'static,
{
    fn call(&self, event: E) -> HandlerFuture<R, T> {
        Box::pin(self(event))
    }
}
