// rfidwire/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// One recorded interaction with the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Send(Vec<u8>),
    /// A receive call; `satisfied` is false when it ran into its timeout.
    Receive {
        len: usize,
        timeout: Duration,
        satisfied: bool,
    },
    Purge,
    Pause(Duration),
}

/// Mock transport for tests.
///
/// Inbound bytes come from two places: bytes pushed with
/// [`push_inbound`](Self::push_inbound) are readable immediately, and
/// replies queued with [`queue_reply`](Self::queue_reply) are released one
/// per `send`, the way a device answers only after being spoken to. A
/// receive that cannot be satisfied advances the virtual clock by its full
/// timeout and leaves the buffered bytes untouched.
#[derive(Debug)]
pub struct MockTransport {
    pub inbound: VecDeque<u8>,
    pub replies: VecDeque<Vec<u8>>,
    pub log: Vec<Op>,
    /// Virtual time spent waiting in receives and pauses.
    pub elapsed: Duration,
    pub key_present: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            inbound: VecDeque::new(),
            replies: VecDeque::new(),
            log: Vec::new(),
            elapsed: Duration::ZERO,
            key_present: true,
        }
    }

    /// Make bytes readable right away.
    pub fn push_inbound(&mut self, bytes: &[u8]) {
        self.inbound.extend(bytes.iter().copied());
    }

    /// Release `bytes` after the next unanswered `send`. An empty reply
    /// models a device that stays silent for that send.
    pub fn queue_reply(&mut self, bytes: Vec<u8>) {
        self.replies.push_back(bytes);
    }

    pub fn set_key_present(&mut self, present: bool) {
        self.key_present = present;
    }

    /// Every payload passed to `send`, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.log
            .iter()
            .filter_map(|op| match op {
                Op::Send(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn purge_count(&self) -> usize {
        self.log.iter().filter(|op| matches!(op, Op::Purge)).count()
    }

    /// Wrap the mock so a test can keep inspecting it after a `Device`
    /// has taken ownership of the transport.
    pub fn shared(self) -> SharedMock {
        SharedMock(Rc::new(RefCell::new(self)))
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.log.push(Op::Send(data.to_vec()));
        if let Some(reply) = self.replies.pop_front() {
            self.inbound.extend(reply);
        }
        Ok(())
    }

    fn receive_exact(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        let satisfied = self.inbound.len() >= len;
        self.log.push(Op::Receive {
            len,
            timeout,
            satisfied,
        });
        if !satisfied {
            self.elapsed += timeout;
            return Err(Error::Timeout);
        }
        Ok(self.inbound.drain(..len).collect())
    }

    fn bytes_available(&mut self) -> Result<usize> {
        Ok(self.inbound.len())
    }

    fn purge(&mut self) -> Result<()> {
        self.log.push(Op::Purge);
        self.inbound.clear();
        Ok(())
    }

    fn key_present(&mut self) -> Result<bool> {
        Ok(self.key_present)
    }

    fn pause(&mut self, duration: Duration) {
        self.log.push(Op::Pause(duration));
        self.elapsed += duration;
    }
}

/// Cloneable handle onto a [`MockTransport`]; all clones see one mock.
#[derive(Debug, Clone)]
pub struct SharedMock(Rc<RefCell<MockTransport>>);

impl SharedMock {
    /// Run `f` against the underlying mock.
    pub fn with<R>(&self, f: impl FnOnce(&mut MockTransport) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.0.borrow_mut().send(data)
    }

    fn receive_exact(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        self.0.borrow_mut().receive_exact(len, timeout)
    }

    fn bytes_available(&mut self) -> Result<usize> {
        self.0.borrow_mut().bytes_available()
    }

    fn purge(&mut self) -> Result<()> {
        self.0.borrow_mut().purge()
    }

    fn key_present(&mut self) -> Result<bool> {
        self.0.borrow_mut().key_present()
    }

    fn pause(&mut self, duration: Duration) {
        self.0.borrow_mut().pause(duration)
    }
}
