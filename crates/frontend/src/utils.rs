//! Small view helpers

use chrono::{DateTime, Utc};
use gloo::file::futures::read_as_bytes;
use gloo::file::File;
use murmur_frontend_common::AppConfig;
use web_sys::HtmlInputElement;

use crate::services::posts::ImageUpload;

/// Human relative timestamp ("3h ago")
pub fn time_ago(timestamp: &DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(*timestamp);
    if delta.num_seconds() < 60 {
        "just now".to_string()
    } else if delta.num_minutes() < 60 {
        format!("{}m ago", delta.num_minutes())
    } else if delta.num_hours() < 24 {
        format!("{}h ago", delta.num_hours())
    } else if delta.num_days() < 30 {
        format!("{}d ago", delta.num_days())
    } else {
        short_date(timestamp)
    }
}

/// Short date for tables
pub fn short_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y").to_string()
}

/// Native confirm dialog
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Read the files selected in a file input into upload payloads, rejecting
/// non-images and oversized files.
pub async fn read_image_files(input: &HtmlInputElement) -> Result<Vec<ImageUpload>, String> {
    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };

    let mut uploads = Vec::new();
    for index in 0..list.length() {
        let Some(file) = list.item(index) else {
            continue;
        };
        if !file.type_().starts_with("image/") {
            return Err(format!("{} is not an image", file.name()));
        }
        if file.size() as u64 > AppConfig::MAX_IMAGE_BYTES {
            return Err(format!("{} is larger than 5 MB", file.name()));
        }

        let file = File::from(file);
        let bytes = read_as_bytes(&file)
            .await
            .map_err(|err| format!("could not read {}: {err}", file.name()))?;
        uploads.push(ImageUpload {
            file_name: file.name(),
            mime_type: file.raw_mime_type(),
            bytes,
        });
    }
    Ok(uploads)
}
