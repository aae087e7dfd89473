//! Fetch executor

use crate::{PeopleCmd, PeopleMsg};
use eddy_core::{Emitter, Executor, RequestId};
use eddy_transport::Transport;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Runs `Fetch` commands against a transport
///
/// Each fetch arms a one-shot timer that reports `WaitedLong` after the
/// configured delay. Neither the timer nor the request is cancelled when a
/// newer fetch supersedes them; their messages are discarded by identity.
pub struct FetchExecutor<T: ?Sized> {
    transport: Arc<T>,
    waited_long: Duration,
}

impl<T: Transport + ?Sized> FetchExecutor<T> {
    /// Create an executor reporting `WaitedLong` after `waited_long`
    pub fn new(transport: Arc<T>, waited_long: Duration) -> Self {
        Self {
            transport,
            waited_long,
        }
    }

    /// The waited-long delay
    pub fn waited_long(&self) -> Duration {
        self.waited_long
    }
}

impl<T: Transport + ?Sized> Executor<PeopleCmd, PeopleMsg> for FetchExecutor<T> {
    fn execute(
        &self,
        cmd: PeopleCmd,
        emit: Emitter<PeopleMsg>,
    ) -> impl Future<Output = ()> + Send + 'static {
        let transport = self.transport.clone();
        let waited_long = self.waited_long;

        async move {
            let PeopleCmd::Fetch { id } = cmd else {
                return;
            };

            arm_waited_long(id, waited_long, emit.clone());

            match transport.fetch_people().await {
                Ok(people) => {
                    tracing::debug!(%id, count = people.len(), "people fetched");
                    emit.emit(PeopleMsg::GotResponse {
                        people,
                        fetch_id: id,
                    });
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "fetching people failed");
                    emit.emit(PeopleMsg::FetchFailed {
                        fetch_id: id,
                        error: err.to_string(),
                    });
                }
            }
        }
    }
}

fn arm_waited_long(id: RequestId, delay: Duration, emit: Emitter<PeopleMsg>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        emit.emit(PeopleMsg::WaitedLong { fetch_id: id });
    });
}
