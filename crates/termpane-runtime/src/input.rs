// ABOUTME: Keyboard reader running on a dedicated thread.
// ABOUTME: Forwards each input byte to the controller's event loop until stopped.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc;

use termpane_terminal::{KeyRead, KeySource};

/// Longest a reader waits before rechecking its stop flag
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Handle to the input thread.
///
/// The thread reads one byte at a time and sends every byte to the key
/// channel. It ends on end of stream, on a read error, once the receiving
/// side is dropped, or when [`InputLoop::stop`] is called. Dropping the
/// handle also asks the thread to stop, without waiting for it.
#[derive(Debug)]
pub struct InputLoop {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputLoop {
    pub fn spawn<K>(mut source: K, keys: mpsc::Sender<u8>) -> io::Result<Self>
    where
        K: KeySource + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stopped = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("termpane-input".to_string())
            .spawn(move || {
                while !stopped.load(Ordering::Acquire) {
                    match source.read_key(POLL_INTERVAL) {
                        Ok(KeyRead::Byte(byte)) => {
                            if keys.blocking_send(byte).is_err() {
                                break;
                            }
                        }
                        Ok(KeyRead::Idle) => {}
                        Ok(KeyRead::Closed) => {
                            tracing::debug!("Input reached end of stream");
                            break;
                        }
                        Err(e) => {
                            tracing::warn!("Failed to read input: {}", e);
                            break;
                        }
                    }
                }
            })?;
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Ask the thread to stop and wait for it. Blocks for at most one poll
    /// interval unless the key channel is full and still being held.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("Input thread panicked");
            }
        }
    }
}

impl Drop for InputLoop {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
    }
}
