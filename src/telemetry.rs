//! Tracing setup. The browser build writes to the devtools console; the host
//! build writes to stderr, filtered by `LOG_LEVEL`.

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    use tracing_subscriber::filter::LevelFilter;

    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Buffers one formatted event and hands it to `console.log` when dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
impl std::io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line.trim_end()));
    }
}
