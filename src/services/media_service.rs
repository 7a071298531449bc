use chrono::Local;
use rand::Rng;

use crate::config::AppState;
use crate::repositories::media_repository::MediaRepository;
use crate::services::{bad_request, db_err, io_err, ServiceError};

pub const SUPPORTED_MEDIA_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub struct MediaService;

impl MediaService {
    /// Validate the upload name, write the bytes under SAVE_MEDIA_PATH and
    /// record the stored name. Nothing touches the filesystem until the name
    /// has passed the policy checks.
    pub async fn add_media_file(
        state: &AppState,
        user_name: &str,
        file_name: Option<String>,
        data: Vec<u8>,
    ) -> Result<i32, ServiceError> {
        let Some(file_name) = file_name.filter(|name| !name.is_empty()) else {
            return Err(bad_request("File name should be set!"));
        };
        if !is_supported_media_extension(&file_name) {
            return Err(bad_request(format!(
                "Support only media formats: {:?}!",
                SUPPORTED_MEDIA_EXTENSIONS
            )));
        }

        let unique_name = format!(
            "{}_{}",
            Local::now().format("%d%b%y%H%M%S"),
            make_safe_file_name(&file_name)
        );
        tracing::info!(user_name, file_name = %unique_name, "saving media file");

        tokio::fs::write(state.media_root.join(&unique_name), &data)
            .await
            .map_err(io_err)?;
        MediaRepository::add(&state.db, user_name, &unique_name)
            .await
            .map_err(db_err)
    }

    /// Remove media records scoped to `user_name`, then the matching files.
    /// Called from tweet deletion; ids the user does not own are skipped.
    pub async fn delete_media_files(
        state: &AppState,
        user_name: &str,
        media_ids: &[i32],
    ) -> Result<(), ServiceError> {
        let deleted_names = MediaRepository::bulk_delete(&state.db, user_name, media_ids)
            .await
            .map_err(db_err)?;
        for name in deleted_names {
            tracing::info!(user_name, file_name = %name, "removing media file from disk");
            tokio::fs::remove_file(state.media_root.join(&name))
                .await
                .map_err(io_err)?;
        }
        Ok(())
    }
}

/// A name is kept as-is only when it is a single `stem.extension` pair with a
/// stem of `[A-Za-z0-9_]`. Anything else gets a random numeric stem so
/// path-unsafe names never reach the filesystem.
pub fn make_safe_file_name(file_name: &str) -> String {
    let parts: Vec<&str> = file_name.split('.').collect();
    let safe_stem = parts.len() == 2
        && !parts[0].is_empty()
        && parts[0]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if safe_stem {
        return file_name.to_owned();
    }
    let extension = parts.last().copied().unwrap_or_default();
    format!("{}.{}", rand::thread_rng().gen_range(1..=1000), extension)
}

pub fn is_supported_media_extension(file_name: &str) -> bool {
    let parts: Vec<&str> = file_name.split('.').collect();
    match parts.last() {
        Some(extension) => parts.len() > 1 && SUPPORTED_MEDIA_EXTENSIONS.contains(extension),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_names_are_kept_verbatim() {
        assert_eq!(make_safe_file_name("good.png"), "good.png");
        assert_eq!(make_safe_file_name("snake_case_42.jpeg"), "snake_case_42.jpeg");
    }

    #[test]
    fn unsafe_names_get_a_numeric_stem_with_the_extension_kept() {
        let sanitized = make_safe_file_name("bad name!.png");
        assert_ne!(sanitized, "bad name!.png");
        assert!(sanitized.ends_with(".png"));
        let stem: u32 = sanitized.trim_end_matches(".png").parse().unwrap();
        assert!((1..=1000).contains(&stem));
    }

    #[test]
    fn double_extensions_are_randomized() {
        let sanitized = make_safe_file_name("archive.tar.png");
        assert_ne!(sanitized, "archive.tar.png");
        assert!(sanitized.ends_with(".png"));
    }

    #[test]
    fn dotfiles_are_randomized() {
        let sanitized = make_safe_file_name(".png");
        assert_ne!(sanitized, ".png");
        assert!(sanitized.ends_with(".png"));
    }

    #[test]
    fn extension_allow_list() {
        assert!(is_supported_media_extension("a.png"));
        assert!(is_supported_media_extension("a.jpg"));
        assert!(is_supported_media_extension("weird name.jpeg"));
        assert!(!is_supported_media_extension("a.gif"));
        assert!(!is_supported_media_extension("no_extension"));
        assert!(!is_supported_media_extension("a.PNG"));
    }
}
