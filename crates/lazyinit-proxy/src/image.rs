//! The `Image` capability shared by real images and the proxy.

use lazyinit_core::{ensure, Result};
use tracing::{debug, info};

use crate::config::DelegationChoice;

/// Something that can be displayed.
///
/// Implemented by the real images and by [`ImageProxy`](crate::ImageProxy),
/// so callers cannot tell which one they hold.
pub trait Image: Send + Sync {
    /// Name of the file this image shows.
    fn file_name(&self) -> &str;

    /// Where the image is (or will be) loaded from.
    fn source(&self) -> DelegationChoice;

    /// Display the image and return the rendered line.
    fn display(&self) -> Result<String>;
}

fn render(file_name: &str, source: DelegationChoice) -> String {
    debug!(file_name, %source, "displaying image");
    format!("display image {file_name}")
}

/// Image whose data is loaded from disk when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskImage {
    file_name: String,
}

impl DiskImage {
    /// Build the image, running the one-time disk load.
    pub fn load(file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        ensure!(!file_name.is_empty(), "image file name must not be empty");
        info!(file_name = %file_name, source = "disk", "loading image");
        Ok(Self { file_name })
    }
}

impl Image for DiskImage {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn source(&self) -> DelegationChoice {
        DelegationChoice::Disk
    }

    fn display(&self) -> Result<String> {
        Ok(render(&self.file_name, DelegationChoice::Disk))
    }
}

/// Image whose data is loaded from the database when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseImage {
    file_name: String,
}

impl DatabaseImage {
    /// Build the image, running the one-time database load.
    pub fn load(file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        ensure!(!file_name.is_empty(), "image file name must not be empty");
        info!(file_name = %file_name, source = "database", "loading image");
        Ok(Self { file_name })
    }
}

impl Image for DatabaseImage {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn source(&self) -> DelegationChoice {
        DelegationChoice::Database
    }

    fn display(&self) -> Result<String> {
        Ok(render(&self.file_name, DelegationChoice::Database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyinit_core::Error;

    #[test]
    fn real_images_display_their_file() {
        let disk = DiskImage::load("abc.txt").unwrap();
        assert_eq!(disk.display().unwrap(), "display image abc.txt");
        assert_eq!(disk.source(), DelegationChoice::Disk);

        let db = DatabaseImage::load("abc.txt").unwrap();
        assert_eq!(db.display().unwrap(), "display image abc.txt");
        assert_eq!(db.source(), DelegationChoice::Database);
    }

    #[test]
    fn empty_file_name_is_rejected() {
        assert!(matches!(DiskImage::load(""), Err(Error::Precondition(_))));
        assert!(matches!(DatabaseImage::load(""), Err(Error::Precondition(_))));
    }
}
