//! Camera capture sessions for the scan tool.
//!
//! The camera itself lives behind `FrameSource`; the session owns the
//! captured stills and a guard that guarantees the device is released
//! even when the session ends abnormally.

use base64::Engine;
use serde::Serialize;
use tracing::debug;

/// One captured still, always stored as JPEG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedPage {
    #[serde(skip)]
    pub jpeg: Vec<u8>,
}

impl CapturedPage {
    pub fn new(jpeg: Vec<u8>) -> Self {
        Self { jpeg }
    }

    /// Inline data URI for thumbnail display.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/jpeg;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.jpeg)
        )
    }
}

/// A live camera feed the session can grab frames from.
pub trait FrameSource: Send {
    /// Grab the current frame as JPEG bytes. `None` when the feed has
    /// no frame available.
    fn grab_frame(&mut self) -> Option<Vec<u8>>;

    /// Release the underlying device.
    fn stop(&mut self);
}

/// Owns a `FrameSource` and stops it on drop, so an abandoned session
/// never leaves the camera running.
pub struct CaptureStream<S: FrameSource> {
    source: S,
    stopped: bool,
}

impl<S: FrameSource> CaptureStream<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            stopped: false,
        }
    }

    pub fn grab_frame(&mut self) -> Option<Vec<u8>> {
        if self.stopped {
            return None;
        }
        self.source.grab_frame()
    }

    pub fn stop(&mut self) {
        if !self.stopped {
            self.source.stop();
            self.stopped = true;
        }
    }
}

impl<S: FrameSource> Drop for CaptureStream<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The scan tool's capture state: an ordered list of stills.
#[derive(Debug, Default)]
pub struct CaptureSession {
    pages: Vec<CapturedPage>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[CapturedPage] {
        &self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Append a still in capture order.
    pub fn capture(&mut self, jpeg: Vec<u8>) {
        self.pages.push(CapturedPage::new(jpeg));
        debug!(total = self.pages.len(), "captured page");
    }

    /// Remove the still at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.pages.len() {
            self.pages.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
