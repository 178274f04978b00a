//! Tower layer and service wrapping a [`QueryHeaderMapper`].

use std::task::{Context, Poll};

use axum::http::Request;
use futures_util::future::{ready, Either, MapErr, Ready, TryFutureExt};
use tower::{BoxError, Layer, Service};

use super::mapping::QueryHeaderMapper;

/// Applies a [`QueryHeaderMapper`] to every request before the inner service.
#[derive(Debug, Clone)]
pub struct QueryHeaderLayer {
    mapper: QueryHeaderMapper,
}

impl QueryHeaderLayer {
    pub fn new(mapper: QueryHeaderMapper) -> Self {
        Self { mapper }
    }
}

impl<S> Layer<S> for QueryHeaderLayer {
    type Service = QueryHeaderService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        QueryHeaderService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

/// Service produced by [`QueryHeaderLayer`].
///
/// Errors from the inner service are boxed as-is; mapping failures are boxed
/// [`MapperError`](super::MapperError)s and short-circuit the inner call.
#[derive(Debug, Clone)]
pub struct QueryHeaderService<S> {
    inner: S,
    mapper: QueryHeaderMapper,
}

impl<S> QueryHeaderService<S> {
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

type ResponseFuture<F, T, E> = Either<Ready<Result<T, BoxError>>, MapErr<F, fn(E) -> BoxError>>;

impl<S, B> Service<Request<B>> for QueryHeaderService<S>
where
    S: Service<Request<B>>,
    S::Error: Into<BoxError>,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = ResponseFuture<S::Future, S::Response, S::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        match self.mapper.apply(req) {
            Ok(req) => {
                let into_box: fn(S::Error) -> BoxError = Into::into;
                Either::Right(self.inner.call(req).map_err(into_box))
            }
            Err(err) => Either::Left(ready(Err(err.into()))),
        }
    }
}
