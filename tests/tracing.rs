use halfcast::tracing::start_halfcast_tracing_subscriber;
use halfcast::{convert_many, convert_slice};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[test]
fn subscriber_installs_once() {
    assert!(start_halfcast_tracing_subscriber().is_ok());
    assert!(start_halfcast_tracing_subscriber().is_err());
}

#[test]
fn rejected_buffers_emit_warnings() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut output = [0_u16; 1];
        assert!(convert_slice(&[1.0, 2.0], &mut output).is_err());
        assert!(convert_many(&[1.0], &mut [0_u16; 4], 3).is_err());
    });

    let contents = log.contents();
    assert!(contents.contains("WARN"), "{}", contents);
    assert!(
        contents.contains("rejecting conversion of 2 elements into an output of 1"),
        "{}",
        contents
    );
    assert!(
        contents.contains("rejecting conversion of 3 elements from an input of 1"),
        "{}",
        contents
    );
}
