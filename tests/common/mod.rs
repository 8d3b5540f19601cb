use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by rfc1982 and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. to see rejected additions when built with the `tracing` feature:
///   RUST_LOG=rfc1982=DEBUG
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

/// Runs `op` with a debug level subscriber and returns what it logged.
#[cfg(feature = "tracing")]
pub fn capture_logs(op: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::util::SubscriberInitExt;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    {
        let _guard = subscriber.set_default();
        op();
    }
    let buf = capture.0.lock().unwrap().clone();
    String::from_utf8(buf).unwrap()
}
