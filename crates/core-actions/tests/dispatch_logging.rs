mod common;

use common::buffer_state;
use core_actions::{BufferHost, ReadlineCommand, dispatch};
use core_config::Config;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl<'a> Write for LockedWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

#[test]
fn dispatch_and_kill_emit_trace_events() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(BufferWriter { inner: buf.clone() })
        .finish();

    let mut state = buffer_state("foo bar", 0, 0);
    with_default(subscriber, || {
        let mut host = BufferHost::new(&mut state);
        dispatch(ReadlineCommand::KillWord, &mut host, &Config::default());
    });

    let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(out.contains("actions.dispatch"));
    assert!(out.contains("command=kill-word"));
    assert!(out.contains("actions.kill"));
    assert!(out.contains("state.undo"));
    assert!(out.contains("state.registers"));
}
