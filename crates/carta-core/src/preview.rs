//! Scoped preview handles for locally-addressable image URLs.
//!
//! Every crop produces an encoded raster that the editor must show
//! immediately, before anything reaches the server. The browser side
//! addresses such rasters through object URLs, which leak unless
//! revoked; [`PreviewHandle`] ties the revocation to ownership so
//! every exit path -- supersede, subject switch, dialog close, stale
//! discard, unmount -- releases the URL exactly once.
//!
//! The URL factory is injected through [`BlobUrls`] so this crate
//! stays free of browser dependencies and tests can count the
//! create/revoke balance.

use std::fmt;
use std::rc::Rc;

/// Errors from creating a locally-addressable preview URL.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The underlying URL factory failed.
    #[error("preview URL creation failed: {0}")]
    UrlCreate(String),
}

/// Factory for locally-addressable blob URLs.
///
/// The browser implementation lives in `carta-io`; tests use a
/// counting fake.
pub trait BlobUrls {
    /// Create a URL addressing `bytes` with the given MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::UrlCreate`] when the factory cannot
    /// produce a URL.
    fn create(&self, bytes: &[u8], mime: &str) -> Result<String, PreviewError>;

    /// Release a URL previously returned by
    /// [`create`](Self::create). Must be idempotent-safe for URLs the
    /// factory no longer knows.
    fn revoke(&self, url: &str);
}

/// An owned preview URL, revoked when the handle is dropped.
pub struct PreviewHandle {
    url: String,
    urls: Rc<dyn BlobUrls>,
}

impl PreviewHandle {
    /// Encode `bytes` into a new preview URL.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::UrlCreate`] when the factory fails.
    pub fn create(urls: &Rc<dyn BlobUrls>, bytes: &[u8], mime: &str) -> Result<Self, PreviewError> {
        let url = urls.create(bytes, mime)?;
        Ok(Self {
            url,
            urls: Rc::clone(urls),
        })
    }

    /// The locally-addressable URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.urls.revoke(&self.url);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counting fake: every URL carries a serial, revocations are tallied.
    #[derive(Default)]
    pub(crate) struct CountingUrls {
        pub created: Cell<usize>,
        pub revoked: Cell<usize>,
    }

    impl BlobUrls for CountingUrls {
        fn create(&self, _bytes: &[u8], mime: &str) -> Result<String, PreviewError> {
            let serial = self.created.get();
            self.created.set(serial + 1);
            Ok(format!("blob:{mime}/{serial}"))
        }

        fn revoke(&self, _url: &str) {
            self.revoked.set(self.revoked.get() + 1);
        }
    }

    #[test]
    fn drop_revokes_exactly_once() {
        let counting = Rc::new(CountingUrls::default());
        let urls: Rc<dyn BlobUrls> = Rc::<CountingUrls>::clone(&counting);

        let handle = PreviewHandle::create(&urls, &[1, 2, 3], "image/jpeg").unwrap();
        assert_eq!(handle.url(), "blob:image/jpeg/0");
        assert_eq!(counting.revoked.get(), 0);

        drop(handle);
        assert_eq!(counting.created.get(), 1);
        assert_eq!(counting.revoked.get(), 1);
    }

    #[test]
    fn every_created_handle_is_released() {
        let counting = Rc::new(CountingUrls::default());
        let urls: Rc<dyn BlobUrls> = Rc::<CountingUrls>::clone(&counting);

        {
            let mut held = Vec::new();
            for _ in 0..5 {
                held.push(PreviewHandle::create(&urls, &[0xFF], "image/jpeg").unwrap());
            }
            // Superseding in place drops the older handle immediately.
            held[0] = PreviewHandle::create(&urls, &[0xAA], "image/jpeg").unwrap();
            assert_eq!(counting.revoked.get(), 1);
        }

        assert_eq!(counting.created.get(), 6);
        assert_eq!(counting.revoked.get(), 6);
    }
}
