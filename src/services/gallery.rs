//! Gallery and example documents fetched as markdown.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::{ExampleLoader, MarkdownSource};
use crate::error::ApiError;
use crate::net::types::{Gallery, ProjectOptions};
use crate::util::markdown::{parse_example, parse_gallery};

/// Reads galleries and examples from a markdown source.
#[derive(Clone)]
pub struct GalleryService {
    markdown: Arc<dyn MarkdownSource>,
}

impl GalleryService {
    pub fn new(markdown: Arc<dyn MarkdownSource>) -> Self {
        Self { markdown }
    }

    /// Galleries defined by document `gallery_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be fetched.
    pub async fn galleries(&self, gallery_id: &str) -> Result<Vec<Gallery>, ApiError> {
        let md = self.markdown.markdown(gallery_id).await?;
        Ok(parse_gallery(&md))
    }
}

#[async_trait(?Send)]
impl ExampleLoader for GalleryService {
    async fn load_example(&self, name: &str, url: &str) -> Result<Option<ProjectOptions>, ApiError> {
        let md = self.markdown.markdown(url).await?;
        Ok(parse_example(name, &md))
    }
}
