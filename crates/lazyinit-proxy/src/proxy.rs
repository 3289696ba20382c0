//! Lazy image proxy.

use std::fmt;

use lazyinit_core::{DoubleCheckedCell, Error, Result};
use tracing::debug;

use crate::config::{DelegationChoice, ProxyConfig};
use crate::image::Image;
use crate::loader::{ImageLoader, StubLoader};

/// Stand-in for an [`Image`] that defers building the real one.
///
/// The first [`display`](Image::display) takes the construction lock, checks
/// again, and builds the backing image by matching on the configured
/// [`DelegationChoice`].  The image is then published with release ordering
/// and every later call delegates straight to it without locking.
///
/// If the loader fails, the error is returned to that caller as
/// [`Error::Construction`], nothing is cached, and the next call retries.
pub struct ImageProxy<L = StubLoader> {
    file_name: String,
    config: ProxyConfig,
    loader: L,
    real: DoubleCheckedCell<Box<dyn Image>>,
}

impl ImageProxy<StubLoader> {
    /// Proxy for `file_name` using the default loader.
    pub fn new(file_name: impl Into<String>, config: ProxyConfig) -> Self {
        Self::with_loader(file_name, config, StubLoader)
    }

    /// Proxy for `file_name` whose source is given as a raw token.
    ///
    /// Fails with [`Error::Configuration`] if the token is not recognized;
    /// no proxy, and therefore no backing image, is ever created.
    pub fn from_token(file_name: impl Into<String>, token: &str) -> Result<Self> {
        Ok(Self::new(file_name, ProxyConfig::from_token(token)?))
    }
}

impl<L: ImageLoader> ImageProxy<L> {
    /// Proxy for `file_name` using a custom loader.
    pub fn with_loader(file_name: impl Into<String>, config: ProxyConfig, loader: L) -> Self {
        Self {
            file_name: file_name.into(),
            config,
            loader,
            real: DoubleCheckedCell::new(),
        }
    }

    /// The proxy's configuration.
    pub fn config(&self) -> ProxyConfig {
        self.config
    }

    /// The loader this proxy builds with.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Return `true` once the backing image has been built.
    pub fn is_loaded(&self) -> bool {
        self.real.is_initialized()
    }

    /// Source of the cached backing image, if it has been built.
    pub fn loaded_from(&self) -> Option<DelegationChoice> {
        self.real.get().map(|image| image.source())
    }

    fn real_image(&self) -> Result<&dyn Image> {
        self.real
            .get_or_try_init(|| self.load())
            .map(|image| &**image)
    }

    fn load(&self) -> Result<Box<dyn Image>> {
        let source = self.config.source();
        debug!(file_name = %self.file_name, %source, "building backing image");
        let image = match source {
            DelegationChoice::Disk => self.loader.from_disk(&self.file_name),
            DelegationChoice::Database => self.loader.from_database(&self.file_name),
        };
        image.map_err(|err| match err {
            Error::Configuration(_) | Error::Construction(_) => err,
            other => Error::Construction(format!(
                "loading {:?} from {source}: {other}",
                self.file_name
            )),
        })
    }
}

impl<L: ImageLoader> Image for ImageProxy<L> {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn source(&self) -> DelegationChoice {
        self.config.source()
    }

    fn display(&self) -> Result<String> {
        self.real_image()?.display()
    }
}

impl<L> fmt::Debug for ImageProxy<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageProxy")
            .field("file_name", &self.file_name)
            .field("source", &self.config.source())
            .field("loaded", &self.real.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defers_loading_until_display() {
        let proxy = ImageProxy::new("abc.txt", DelegationChoice::Disk.into());
        assert!(!proxy.is_loaded());
        assert_eq!(proxy.loaded_from(), None);

        assert_eq!(proxy.display().unwrap(), "display image abc.txt");
        assert!(proxy.is_loaded());
        assert_eq!(proxy.loaded_from(), Some(DelegationChoice::Disk));
        assert_eq!(proxy.display().unwrap(), "display image abc.txt");
    }

    #[test]
    fn unknown_token_is_a_configuration_error() {
        let err = ImageProxy::from_token("abc.txt", "tape").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn loader_precondition_surfaces_as_construction_error() {
        let proxy = ImageProxy::new("", DelegationChoice::Database.into());
        let err = proxy.display().unwrap_err();
        assert!(matches!(err, Error::Construction(_)), "{err}");
        assert!(!proxy.is_loaded());
    }

    #[test]
    fn debug_shows_load_state() {
        let proxy = ImageProxy::from_token("abc.txt", "database").unwrap();
        assert!(format!("{proxy:?}").contains("loaded: false"));
        proxy.display().unwrap();
        assert!(format!("{proxy:?}").contains("loaded: true"));
    }
}
