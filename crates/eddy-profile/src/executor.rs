//! Save executor

use crate::{ProfileCmd, ProfileMsg};
use eddy_core::{Emitter, Executor};
use eddy_transport::Transport;
use std::future::Future;
use std::sync::Arc;

/// Runs `Request` commands by submitting the edit through a transport
///
/// Every request produces exactly one result message.
pub struct SaveExecutor<T: ?Sized> {
    transport: Arc<T>,
}

impl<T: Transport + ?Sized> SaveExecutor<T> {
    /// Create an executor saving through `transport`
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

impl<T: Transport + ?Sized> Executor<ProfileCmd, ProfileMsg> for SaveExecutor<T> {
    fn execute(
        &self,
        cmd: ProfileCmd,
        emit: Emitter<ProfileMsg>,
    ) -> impl Future<Output = ()> + Send + 'static {
        let transport = self.transport.clone();

        async move {
            let ProfileCmd::Request {
                id,
                first_name,
                last_name,
            } = cmd
            else {
                return;
            };

            let msg = match transport.submit_edit(&first_name, &last_name).await {
                Ok(()) => {
                    tracing::debug!(%id, "profile saved");
                    ProfileMsg::GotResponse { request_id: id }
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "saving profile failed");
                    ProfileMsg::RequestFailed { request_id: id }
                }
            };
            emit.emit(msg);
        }
    }
}
