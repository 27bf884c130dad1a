//! Deferred values computed by a provisioning engine.
//!
//! An [`Output`] is a lazily evaluated, cloneable future. Every clone shares
//! the same computation, so a resource id awaited by five dependants is
//! produced once. Failures are carried as [`OutputError`] and replayed to every
//! consumer.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::future::{self, BoxFuture, FutureExt, Shared};

use crate::domain::error::OutputError;

type SharedResult<T> = Shared<BoxFuture<'static, Result<T, OutputError>>>;

/// A value the engine will settle later.
#[derive(Clone)]
pub struct Output<T: Clone> {
    inner: SharedResult<T>,
}

impl<T: Clone> fmt::Debug for Output<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

impl<T> Output<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Wrap a future. Nothing runs until the output is first awaited.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, OutputError>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// An output that is already settled.
    #[must_use]
    pub fn known(value: T) -> Self {
        Self::new(future::ready(Ok(value)))
    }

    /// An output that has already failed.
    #[must_use]
    pub fn rejected(error: OutputError) -> Self {
        Self::new(future::ready(Err(error)))
    }

    /// Derive a new output from this one's value.
    #[must_use]
    pub fn apply<U, F>(&self, f: F) -> Output<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let inner = self.inner.clone();
        Output::new(async move { inner.await.map(f) })
    }

    /// Like [`Output::apply`] for fallible transformations; an `Err` rejects
    /// the derived output.
    #[must_use]
    pub fn try_apply<U, F>(&self, f: F) -> Output<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> anyhow::Result<U> + Send + 'static,
    {
        let inner = self.inner.clone();
        Output::new(async move { f(inner.await?).map_err(OutputError::from) })
    }

    /// Combine two outputs into one that settles when both have.
    #[must_use]
    pub fn zip<U>(&self, other: &Output<U>) -> Output<(T, U)>
    where
        U: Clone + Send + Sync + 'static,
    {
        let (left, right) = (self.inner.clone(), other.inner.clone());
        Output::new(async move { future::try_join(left, right).await })
    }

    /// Lazy counterpart of [`resolve_all`].
    #[must_use]
    pub fn all<I>(outputs: I) -> Output<Vec<T>>
    where
        I: IntoIterator<Item = Output<T>>,
    {
        let outputs: Vec<Output<T>> = outputs.into_iter().collect();
        Output::new(resolve_all(outputs))
    }

    /// Await the value.
    ///
    /// # Errors
    ///
    /// Returns the output's rejection, or [`OutputError::Panicked`] if
    /// computing it panicked.
    pub async fn resolve(&self) -> Result<T, OutputError> {
        AssertUnwindSafe(self.inner.clone())
            .catch_unwind()
            .await
            .map_err(|payload| OutputError::Panicked(panic_message(payload.as_ref())))?
    }
}

/// Resolve a collection of outputs to their values, in input order.
///
/// The first failure short-circuits the whole join. A panic raised while
/// computing any output is captured and reported through the same error
/// channel as an ordinary rejection.
///
/// # Errors
///
/// Returns the first [`OutputError`] encountered.
pub async fn resolve_all<T, I>(outputs: I) -> Result<Vec<T>, OutputError>
where
    T: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = Output<T>>,
{
    let pending = future::try_join_all(outputs.into_iter().map(|o| o.inner));
    AssertUnwindSafe(pending)
        .catch_unwind()
        .await
        .map_err(|payload| OutputError::Panicked(panic_message(payload.as_ref())))?
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
