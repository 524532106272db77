use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::{
    core::store::StoreError,
    types::{BookId, MemberId},
};

use super::{config::LibraryConfig, library::Library};

/// Failure of a queued reservation.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// The store refused the reservation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The worker has stopped and will not answer.
    #[error("reservation worker is not running")]
    ChannelClosed,
}

/// Receiving end of a request's one-shot result.
pub type ReservationReceiver = oneshot::Receiver<Result<(), StoreError>>;

/// One queued reservation with the sink its result is written to.
#[derive(Debug)]
pub struct ReservationRequest {
    /// Book to reserve.
    pub book_id: BookId,
    /// Member asking for it.
    pub member_id: MemberId,
    /// Receives exactly one result once the request is processed.
    pub resp: oneshot::Sender<Result<(), StoreError>>,
}

impl ReservationRequest {
    /// Builds a request and the receiver for its result.
    pub fn new(book_id: BookId, member_id: MemberId) -> (Self, ReservationReceiver) {
        let (resp, rx) = oneshot::channel();
        (
            Self {
                book_id,
                member_id,
                resp,
            },
            rx,
        )
    }
}

enum Command {
    Reserve(ReservationRequest),
    Shutdown { resp: oneshot::Sender<()> },
}

/// Cloneable sender side of the reservation worker.
#[derive(Debug, Clone)]
pub struct ReservationHandle {
    cmd_tx: mpsc::Sender<Command>,
}

/// Starts the single task that applies queued reservations in arrival order.
///
/// Runs on the library's runtime until [`ReservationHandle::shutdown`] or
/// until every handle is dropped. Requests are answered once and never
/// retried.
pub fn spawn_reservation_worker(library: Library, config: &LibraryConfig) -> ReservationHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.reservation_queue_bound.max(1));
    let runtime = library.expiry().runtime().clone();

    runtime.spawn(async move {
        info!("reservation worker started");
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                Command::Reserve(req) => {
                    let res = library.reserve_book(req.book_id, req.member_id);
                    if let Err(err) = &res {
                        debug!(book_id = req.book_id, member_id = req.member_id, %err, "queued reservation refused");
                    }
                    let _ = req.resp.send(res);
                }
                Command::Shutdown { resp } => {
                    let _ = resp.send(());
                    break;
                }
            }
        }
        info!("reservation worker stopped");
    });

    ReservationHandle { cmd_tx }
}

impl ReservationHandle {
    /// Enqueues a caller-built request; its result arrives on the request's sink.
    pub async fn submit(&self, req: ReservationRequest) -> Result<(), ReservationError> {
        self.cmd_tx
            .send(Command::Reserve(req))
            .await
            .map_err(|_| ReservationError::ChannelClosed)
    }

    /// Enqueues a reservation and waits for the worker's answer.
    pub async fn reserve(&self, book_id: BookId, member_id: MemberId) -> Result<(), ReservationError> {
        let (req, rx) = ReservationRequest::new(book_id, member_id);
        self.submit(req).await?;
        Ok(rx.await.map_err(|_| ReservationError::ChannelClosed)??)
    }

    /// Blocking form of [`ReservationHandle::reserve`] for synchronous callers.
    ///
    /// Panics if called from within an async execution context, like
    /// tokio's own `blocking_*` channel methods.
    pub fn reserve_blocking(&self, book_id: BookId, member_id: MemberId) -> Result<(), ReservationError> {
        let (req, rx) = ReservationRequest::new(book_id, member_id);
        self.cmd_tx
            .blocking_send(Command::Reserve(req))
            .map_err(|_| ReservationError::ChannelClosed)?;
        Ok(rx.blocking_recv().map_err(|_| ReservationError::ChannelClosed)??)
    }

    /// Stops the worker after every earlier request has been answered.
    pub async fn shutdown(&self) -> Result<(), ReservationError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| ReservationError::ChannelClosed)?;
        rx.await.map_err(|_| ReservationError::ChannelClosed)
    }
}
