//! Authenticated, deadline-bounded call wrapper.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use metrics::{counter, histogram};
use tokio::sync::watch;
use tokio::time::Instant;
use tonic::{Request, Response, Status};
use tracing::{debug, trace};

use crate::{Authenticator, CallContext, SwapClientError, SwapClientResult};

/// Wraps every outbound call of a client.
///
/// Holds no per-call state; concurrent calls share it freely.
pub(crate) struct CallWrapper {
    authenticator: Arc<dyn Authenticator>,
    call_timeout: Duration,
    closed: watch::Sender<bool>,
}

impl CallWrapper {
    pub(crate) fn new(authenticator: Arc<dyn Authenticator>, call_timeout: Duration) -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            authenticator,
            call_timeout,
            closed,
        }
    }

    pub(crate) fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Mark the wrapper closed and wake in-flight calls.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub(crate) fn close(&self) -> bool {
        !self.closed.send_replace(true)
    }

    pub(crate) fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Run one unary exchange.
    ///
    /// The authenticator runs first, then `send`. Both are bounded by the
    /// stricter of the context deadline and the call timeout, and the whole
    /// exchange is dropped as soon as the context is cancelled or the client
    /// is closed.
    pub(crate) async fn call<Req, Resp, F, Fut>(
        &self,
        ctx: &CallContext,
        method: &'static str,
        message: Req,
        send: F,
    ) -> SwapClientResult<Resp>
    where
        F: FnOnce(Request<Req>) -> Fut,
        Fut: Future<Output = Result<Response<Resp>, Status>>,
    {
        if self.is_closed() {
            return Err(SwapClientError::ClientClosed);
        }
        if ctx.is_cancelled() {
            return Err(SwapClientError::Canceled { method });
        }

        let deadline = ctx.effective_deadline(self.call_timeout);
        let started = Instant::now();
        if deadline.is_some_and(|deadline| deadline <= started) {
            return Err(SwapClientError::DeadlineExceeded { method });
        }

        counter!("swap_client.calls_total", "method" => method).increment(1);
        debug!(
            method,
            timeout = ?deadline.map(|d| d.saturating_duration_since(started)),
            "calling swap server"
        );

        let exchange = async {
            let mut request = Request::new(message);
            self.authenticator
                .authenticate(method, request.metadata_mut())
                .await
                .map_err(|status| SwapClientError::Authentication { method, status })?;

            if let Some(deadline) = deadline {
                request.set_timeout(deadline.saturating_duration_since(Instant::now()));
            }

            send(request)
                .await
                .map(Response::into_inner)
                .map_err(|status| SwapClientError::from_status(method, status))
        };

        let bounded = async {
            match deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, exchange)
                    .await
                    .unwrap_or(Err(SwapClientError::DeadlineExceeded { method })),
                None => exchange.await,
            }
        };

        let mut closed = self.closed.subscribe();
        let result = tokio::select! {
            biased;
            _ = ctx.cancelled() => Err(SwapClientError::Canceled { method }),
            _ = closed.wait_for(|closed| *closed) => Err(SwapClientError::ClientClosed),
            result = bounded => result,
        };

        let elapsed = started.elapsed();
        histogram!("swap_client.call_duration_seconds", "method" => method)
            .record(elapsed.as_secs_f64());

        match &result {
            Ok(_) => trace!(method, ?elapsed, "swap server call succeeded"),
            Err(e) => {
                counter!("swap_client.call_errors_total", "method" => method, "kind" => e.kind())
                    .increment(1);
                debug!(method, ?elapsed, error = %e, "swap server call failed");
            }
        }

        result
    }
}
