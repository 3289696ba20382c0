//! Backing-image loaders.

use lazyinit_core::Result;

use crate::image::{DatabaseImage, DiskImage, Image};

/// Constructors for the two kinds of backing image.
///
/// The proxy decides which one to call; a loader only knows how to build.
pub trait ImageLoader: Send + Sync {
    /// Build an image through the disk path.
    fn from_disk(&self, file_name: &str) -> Result<Box<dyn Image>>;

    /// Build an image through the database path.
    fn from_database(&self, file_name: &str) -> Result<Box<dyn Image>>;
}

/// The default loader: builds [`DiskImage`] and [`DatabaseImage`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StubLoader;

impl ImageLoader for StubLoader {
    fn from_disk(&self, file_name: &str) -> Result<Box<dyn Image>> {
        Ok(Box::new(DiskImage::load(file_name)?))
    }

    fn from_database(&self, file_name: &str) -> Result<Box<dyn Image>> {
        Ok(Box::new(DatabaseImage::load(file_name)?))
    }
}
