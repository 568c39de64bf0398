// ABOUTME: Keyboard byte sources with bounded waits.
// ABOUTME: A reader can give up between bytes, so input threads stop when asked to.

use std::io;
use std::time::Duration;

/// Outcome of one bounded wait for input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRead {
    Byte(u8),
    /// Nothing arrived before the timeout
    Idle,
    /// The source reached end of stream
    Closed,
}

/// Byte-at-a-time input that never blocks longer than asked.
pub trait KeySource: Send {
    fn read_key(&mut self, timeout: Duration) -> io::Result<KeyRead>;
}

#[cfg(unix)]
pub use self::fd::FdKeys;

#[cfg(unix)]
mod fd {
    use std::fs::File;
    use std::io::{self, Read};
    use std::os::fd::AsFd;
    use std::time::Duration;

    use nix::errno::Errno;
    use nix::poll::{poll, PollFd, PollFlags, PollTimeout};

    use super::{KeyRead, KeySource};

    /// Key source over a file descriptor, waited on with `poll(2)`
    #[derive(Debug)]
    pub struct FdKeys {
        file: File,
    }

    impl FdKeys {
        pub fn new(file: File) -> Self {
            Self { file }
        }

        /// Read from a duplicate of standard input
        pub fn stdin() -> io::Result<Self> {
            let fd = io::stdin().as_fd().try_clone_to_owned()?;
            Ok(Self::new(File::from(fd)))
        }
    }

    impl KeySource for FdKeys {
        fn read_key(&mut self, timeout: Duration) -> io::Result<KeyRead> {
            let timeout_ms: u16 = timeout.as_millis().try_into().unwrap_or(u16::MAX);
            let ready = {
                let mut fds = [PollFd::new(self.file.as_fd(), PollFlags::POLLIN)];
                match poll(&mut fds, PollTimeout::from(timeout_ms)) {
                    Ok(n) => n,
                    Err(Errno::EINTR) => return Ok(KeyRead::Idle),
                    Err(e) => return Err(io::Error::from(e)),
                }
            };
            if ready == 0 {
                return Ok(KeyRead::Idle);
            }

            let mut byte = [0u8; 1];
            match self.file.read(&mut byte) {
                Ok(0) => Ok(KeyRead::Closed),
                Ok(_) => Ok(KeyRead::Byte(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(KeyRead::Idle),
                Err(e) => Err(e),
            }
        }
    }

}
