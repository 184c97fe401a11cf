//! Test logger that captures records per thread, so parallel tests don't see each other's output.

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::{
    sync::Mutex,
    thread::{self, ThreadId},
};

#[derive(Debug)]
pub(crate) struct Captured {
    pub(crate) thread: ThreadId,
    pub(crate) level: Level,
    pub(crate) target: String,
    pub(crate) msg: String,
}

struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = Captured {
            thread: thread::current().id(),
            level: record.level(),
            target: record.target().to_owned(),
            msg: record.args().to_string(),
        };
        self.records
            .lock()
            .expect("capture logger mutex poisoned")
            .push(captured);
    }

    fn flush(&self) {}
}

static LOGGER: Lazy<CaptureLogger> = Lazy::new(|| CaptureLogger {
    records: Mutex::new(Vec::new()),
});

fn take_current_thread() -> Vec<Captured> {
    let me = thread::current().id();
    let mut records = LOGGER.records.lock().expect("capture logger mutex poisoned");
    let (mine, others): (Vec<_>, Vec<_>) = records.drain(..).partition(|r| r.thread == me);
    *records = others;
    mine
}

/// Runs `f` and returns the log records it emitted on the current thread.
pub(crate) fn capture_records(f: impl FnOnce()) -> Vec<Captured> {
    if log::set_logger(&*LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    take_current_thread();
    f();
    take_current_thread()
}
