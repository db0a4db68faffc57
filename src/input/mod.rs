pub mod clipboard;

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
