//! Deferred "after the render settles" tasks.
//!
//! A rendering layer mutates the document in passes. Work that must observe
//! the finished tree is queued with [`Document::tick`](crate::Document::tick)
//! and runs when the layer calls [`Document::flush`](crate::Document::flush).

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::channel::oneshot;

pub(crate) type Task = Box<dyn FnOnce() + Send>;

pub(crate) struct PendingTick {
    pub task: Task,
    pub done: Arc<AtomicBool>,
    pub tx: oneshot::Sender<()>,
}

impl PendingTick {
    pub fn new(task: Task) -> (Self, Tick) {
        let (tx, rx) = oneshot::channel();
        let done = Arc::new(AtomicBool::new(false));
        let pending = Self {
            task,
            done: Arc::clone(&done),
            tx,
        };
        (pending, Tick { rx, done })
    }

    pub fn run(self) {
        (self.task)();
        self.done.store(true, Ordering::SeqCst);
        // Receiver dropped = nobody is waiting.
        let _ = self.tx.send(());
    }
}

/// Completion handle for a queued task.
///
/// Resolves once the task has run. If the document is dropped with the task
/// still queued, the future resolves without the task having run; check
/// [`Tick::is_done`] to tell the two apart. Dropping a `Tick` does not
/// cancel its task.
#[derive(Debug)]
pub struct Tick {
    rx: oneshot::Receiver<()>,
    done: Arc<AtomicBool>,
}

impl Tick {
    /// Whether the task has run.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

impl Future for Tick {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(_) => Poll::Ready(()),
            Poll::Pending => Poll::Pending,
        }
    }
}
