use crate::error::UploadError;
use crate::server::router::LipikaState;
use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;
use tracing::info;

/// Extensions accepted for a scan image.
const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Serialize)]
pub struct UploadReply {
    pub filename: String,
    pub bytes: usize,
}

/// `POST /api/upload` — stores a scan image under the upload directory.
///
/// Expects a multipart form with a `file` part. The filename is reduced to
/// its sanitized final path component before anything touches the
/// filesystem.
pub async fn upload_handler(
    State(state): State<LipikaState>,
    mut multipart: Multipart,
) -> Result<Json<UploadReply>, UploadError> {
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((file_name, data));
        break;
    }

    let Some((file_name, data)) = upload else {
        return Err(UploadError::MissingFile);
    };
    if file_name.is_empty() {
        return Err(UploadError::EmptyFilename);
    }

    let safe_name = sanitize_filename(&file_name);
    if safe_name.is_empty() {
        return Err(UploadError::EmptyFilename);
    }

    let extension = allowed_extension(&safe_name)?;

    tokio::fs::create_dir_all(state.upload_dir.as_path()).await?;
    let path = state.upload_dir.join(&safe_name);
    tokio::fs::write(&path, &data).await?;

    info!(
        filename = %safe_name,
        bytes = data.len(),
        extension = %extension,
        "Stored uploaded scan"
    );

    Ok(Json(UploadReply {
        filename: safe_name,
        bytes: data.len(),
    }))
}

/// Final path component with anything outside `[A-Za-z0-9._-]` dropped.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect::<String>()
        .trim_matches('.')
        .to_string()
}

/// The lowercased extension, if it is on the allow-list.
fn allowed_extension(name: &str) -> Result<String, UploadError> {
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return Err(UploadError::UnsupportedExtension("<none>".to_string()));
    };
    if stem.is_empty() {
        return Err(UploadError::UnsupportedExtension("<none>".to_string()));
    }

    let ext = ext.to_ascii_lowercase();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(UploadError::UnsupportedExtension(ext))
    }
}
