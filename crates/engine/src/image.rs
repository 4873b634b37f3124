//! Image domain — list images with their tags and sizes.

use crate::client::{EngineClient, EngineError};

use bollard::query_parameters::ListImagesOptions;

/// Chat-facing view of one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    /// Repo tags; empty for untagged (dangling) images.
    pub tags: Vec<String>,
    /// Size in bytes.
    pub size: i64,
}

impl From<bollard::models::ImageSummary> for ImageSummary {
    fn from(image: bollard::models::ImageSummary) -> Self {
        // The daemon reports untagged images as "<none>:<none>".
        let tags = image
            .repo_tags
            .into_iter()
            .filter(|t| t != "<none>:<none>")
            .collect();
        Self {
            tags,
            size: image.size,
        }
    }
}

impl EngineClient {
    /// List all images on the Docker host, intermediate layers included
    /// so untagged images get counted.
    pub async fn list_images(&self) -> Result<Vec<ImageSummary>, EngineError> {
        let options = Some(ListImagesOptions {
            all: true,
            ..Default::default()
        });

        let images = self
            .deadline(async {
                self.client
                    .list_images(options)
                    .await
                    .map_err(EngineError::from)
            })
            .await?;

        Ok(images.into_iter().map(ImageSummary::from).collect())
    }
}
