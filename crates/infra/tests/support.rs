#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink for asserting on emitted warnings.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Route this thread's tracing output into the buffer until the guard
    /// is dropped.
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub const KANBAN_BODY: &str = r#"{
    "success": true,
    "data": [
        {"kodepart": "A1", "part": "Bearing 6204", "deadlinepemesanan": "2024-05-01",
         "qtyyangdipesan": "7", "untukbulan": "Mei 2024", "supplier": "PT Sumber"},
        {"kodepart": "A2", "part": "V-Belt B-52", "deadlinepemesanan": ""}
    ]
}"#;

pub const TRACKING_BODY: &str = r#"{
    "success": true,
    "data": [
        {"kodepart": "A1", "tipekanban": "INTERNAL", "status": "PO Diajukan", "qtyorder": 7},
        {"kodepart": "B1", "tipekanban": "EXTERNAL", "status": "PO Diajukan"},
        {"kodepart": "B2", "tipekanban": "EXTERNAL", "status": "Sudah Diterima"}
    ]
}"#;
