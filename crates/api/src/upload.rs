//! Persisting uploaded item images to the upload directory.

use planboard_core::upload::accepted_filename;

use crate::config::UploadConfig;
use crate::error::{AppError, AppResult};
use crate::extract::FormFile;

/// Store `file` if its filename passes the upload rules.
///
/// Returns the public URL of the stored file, or `None` when there was no
/// file or it was refused. A file with the same sanitized name is
/// overwritten.
pub async fn store_image(config: &UploadConfig, file: Option<&FormFile>) -> AppResult<Option<String>> {
    let Some(file) = file else {
        return Ok(None);
    };

    let Some(filename) = accepted_filename(&file.filename, &config.allowed_extensions) else {
        tracing::info!(filename = %file.filename, "Upload refused, using placeholder image");
        return Ok(None);
    };

    tokio::fs::create_dir_all(&config.dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let path = config.dir.join(&filename);
    tokio::fs::write(&path, &file.data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(path = %path.display(), bytes = file.data.len(), "Upload stored");
    Ok(Some(config.public_url(&filename)))
}
