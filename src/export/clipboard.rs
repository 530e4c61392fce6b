//! Clipboard sinks

use crate::error::{ReadmeError, Result};

/// Anything that can receive text for the copy action
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Whether written contents stay available after this process exits
    fn outlives_process(&self) -> bool {
        true
    }

    /// Write `text` so it survives this process exiting. Sinks whose contents
    /// are served by the owning process block here until another application
    /// takes the clipboard over.
    fn write_text_and_hold(&mut self, text: &str) -> Result<()> {
        self.write_text(text)
    }
}

/// The system clipboard
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Connect to the system clipboard
    pub fn new() -> Result<Self> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ReadmeError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| ReadmeError::Clipboard(e.to_string()))
    }

    // X11 and Wayland selections are served by the owning process
    fn outlives_process(&self) -> bool {
        !cfg!(target_os = "linux")
    }

    #[cfg(target_os = "linux")]
    fn write_text_and_hold(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        self.inner
            .set()
            .wait()
            .text(text)
            .map_err(|e| ReadmeError::Clipboard(e.to_string()))
    }
}

/// Stand-in used when the crate is built without clipboard support
#[cfg(not(feature = "clipboard"))]
#[derive(Debug)]
pub struct SystemClipboard;

#[cfg(not(feature = "clipboard"))]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Err(ReadmeError::Clipboard(
            "built without the `clipboard` feature".to_string(),
        ))
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(ReadmeError::Clipboard(
            "built without the `clipboard` feature".to_string(),
        ))
    }
}

/// In-memory clipboard that records every write
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub writes: usize,
    /// Behave like a clipboard that loses its contents on exit
    pub transient: bool,
    /// Writes made through `write_text_and_hold`
    pub holds: usize,
}

impl MemoryClipboard {
    /// A clipboard whose contents vanish with the process
    pub fn transient() -> Self {
        Self {
            transient: true,
            ..Self::default()
        }
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }

    fn outlives_process(&self) -> bool {
        !self.transient
    }

    fn write_text_and_hold(&mut self, text: &str) -> Result<()> {
        self.holds += 1;
        self.write_text(text)
    }
}
