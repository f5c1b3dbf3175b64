//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or with
//! the `test-support` feature.

pub mod cap_fs {
    //! Capability-safe filesystem helpers for tests.
    //!
    //! The backend avoids direct `std::fs` calls. These helpers build on
    //! `cap_std::fs::Dir` so suites share consistent file access.

    use std::ffi::OsString;
    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};

    /// Read a UTF-8 text file through `cap_std`.
    pub fn read_file_to_string(path: &Path) -> io::Result<String> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.read_to_string(Path::new(&file_name))
    }

    /// Write bytes to a file through `cap_std`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backend::test_support::cap_fs::{read_file_to_string, write_file};
    ///
    /// let path = std::env::temp_dir().join("cap-fs-registry-example.json");
    /// write_file(&path, b"{}\n")?;
    /// assert_eq!(read_file_to_string(&path)?, "{}\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.write(Path::new(&file_name), contents)
    }

    fn parent_and_file_name(path: &Path) -> io::Result<(&Path, OsString)> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "path must include a file or directory name",
            )
        })?;
        Ok((parent, file_name.to_os_string()))
    }
}

pub mod clock {
    //! Deterministic clock for stores under test.

    use std::sync::Mutex;

    use chrono::{DateTime, Local, TimeDelta, Utc};
    use mockable::Clock;

    /// Clock returning a settable instant.
    pub struct MutableClock(Mutex<DateTime<Utc>>);

    impl MutableClock {
        pub fn new(now: DateTime<Utc>) -> Self {
            Self(Mutex::new(now))
        }

        pub fn advance_seconds(&self, seconds: i64) {
            *self.lock_clock() += TimeDelta::seconds(seconds);
        }

        fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
            match self.0.lock() {
                Ok(guard) => guard,
                Err(_) => panic!("clock mutex"),
            }
        }
    }

    impl Clock for MutableClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.lock_clock()
        }
    }
}

pub mod notifier {
    //! Notifier doubles.

    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::domain::Message;
    use crate::domain::ports::{ContactNotifier, NotificationError};

    /// Notifier that records every message it is asked to send.
    #[derive(Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<Message>>,
        signal: Notify,
    }

    impl RecordingNotifier {
        /// Messages notified so far.
        pub fn sent(&self) -> Vec<Message> {
            match self.sent.lock() {
                Ok(sent) => sent.clone(),
                Err(_) => panic!("notifier mutex"),
            }
        }

        /// Wait until at least `count` messages were notified.
        ///
        /// Returns the recorded messages, or `None` on timeout.
        pub async fn wait_for(&self, count: usize, timeout: Duration) -> Option<Vec<Message>> {
            let wait = async {
                loop {
                    let notified = self.signal.notified();
                    let sent = self.sent();
                    if sent.len() >= count {
                        return sent;
                    }
                    notified.await;
                }
            };
            tokio::time::timeout(timeout, wait).await.ok()
        }
    }

    #[async_trait]
    impl ContactNotifier for RecordingNotifier {
        async fn notify(&self, message: &Message) -> Result<(), NotificationError> {
            match self.sent.lock() {
                Ok(mut sent) => sent.push(message.clone()),
                Err(_) => panic!("notifier mutex"),
            }
            self.signal.notify_waiters();
            Ok(())
        }
    }
}

pub mod app {
    //! HTTP state over the in-memory store.

    use std::sync::Arc;

    use crate::domain::ports::ContactNotifier;
    use crate::domain::{ContactService, PortfolioService};
    use crate::inbound::http::state::HttpState;
    use crate::outbound::memory::InMemoryPortfolioStore;

    /// Build handler state whose reads and writes go to `store`.
    pub fn memory_http_state(
        store: Arc<InMemoryPortfolioStore>,
        notifier: Arc<dyn ContactNotifier>,
    ) -> HttpState {
        HttpState::new(
            Arc::new(PortfolioService::new(store.clone())),
            Arc::new(ContactService::new(store, notifier)),
        )
    }
}
