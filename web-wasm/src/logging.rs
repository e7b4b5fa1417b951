//! ブラウザ用のログ出力
//!
//! tracing のイベントを1行ずつ console.log / console.warn / console.error に流す

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// レベルに応じた console 関数へ書き出すライター
pub struct ConsoleWriter {
    level: Level,
    cur: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            cur: Vec::new(),
        }
    }

    fn emit(&self, line: &str) {
        let message = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&message),
            _ => web_sys::console::log_1(&message),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.cur.extend_from_slice(bytes);
        for line in take_lines(&mut self.cur) {
            self.emit(&line);
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.cur.is_empty() {
            let rest = String::from_utf8_lossy(&self.cur).into_owned();
            self.emit(&rest);
        }
    }
}

/// 改行までの完成した行を取り出し、残りはバッファに残す
fn take_lines(buf: &mut Vec<u8>) -> Vec<String> {
    let Some(last) = buf.iter().rposition(|&b| b == b'\n') else {
        return Vec::new();
    };
    let rest = buf.split_off(last + 1);
    let complete = std::mem::replace(buf, rest);
    String::from_utf8_lossy(&complete)
        .lines()
        .map(str::to_string)
        .collect()
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// tracing サブスクライバを登録（二重登録は無視）
pub fn init() {
    // wasm32-unknown-unknown では SystemTime が使えないので時刻は出さない
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(e) = result {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {}", e)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_lines_keeps_partial_tail() {
        let mut buf = b"INFO first\nWARN second\nINFO thi".to_vec();

        let lines = take_lines(&mut buf);

        assert_eq!(lines, vec!["INFO first", "WARN second"]);
        assert_eq!(buf, b"INFO thi");
    }

    #[test]
    fn test_take_lines_without_newline() {
        let mut buf = b"no newline yet".to_vec();
        assert!(take_lines(&mut buf).is_empty());
        assert_eq!(buf, b"no newline yet");

        buf.extend_from_slice(b"\n");
        assert_eq!(take_lines(&mut buf), vec!["no newline yet"]);
        assert!(buf.is_empty());
    }
}
