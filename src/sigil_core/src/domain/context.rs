//! Per-call cancellation and deadline propagation.
//!
//! An [`AuthContext`] is created by whoever invokes the auth core (usually the
//! transport adapter) and handed down into every collaborator call. The core
//! never adds its own timeout; it only honours the one it was given.

use std::{future::Future, time::Duration};

use thiserror::Error;
use tokio::{sync::watch, time::Instant};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("Operation was cancelled")]
    Cancelled,
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation flag and optional deadline for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    cancelled: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Cancels every [`AuthContext`] cloned from the one it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl AuthContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_cancellation() -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        let context = Self {
            cancelled: Some(receiver),
            deadline: None,
        };
        (context, CancelHandle { sender })
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns an error if the context is already cancelled or past its deadline.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.cancelled.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Err(ContextError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(ContextError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drive `operation` to completion unless the context is cancelled or its
    /// deadline passes first, in which case `operation` is dropped.
    pub async fn run<F>(&self, operation: F) -> Result<F::Output, ContextError>
    where
        F: Future,
    {
        self.check()?;

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(ContextError::Cancelled),
            _ = self.expired() => Err(ContextError::DeadlineExceeded),
            output = operation => Ok(output),
        }
    }

    async fn cancelled(&self) {
        let Some(receiver) = &self.cancelled else {
            return std::future::pending().await;
        };
        let mut receiver = receiver.clone();
        // A dropped handle can no longer cancel.
        if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    async fn expired(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}
