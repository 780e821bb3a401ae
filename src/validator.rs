/// ファイルバリデーション
///
/// アップロード対象のファイルを送信前に検証する。
/// 設定値（最大ファイルサイズ、サポート形式）はAPP_CONFIGから取得します。
use crate::api::error::{ApiResult, VidMeError};
use crate::config::{APP_CONFIG, BYTES_PER_MB};
use std::path::Path;

/// ファイルのバリデーション結果
pub struct ValidationResult {
    pub filename: String,
    pub size: u64,
    pub extension: String,
}

/// アップロード対象のファイルをバリデーションする
///
/// # Errors
/// - ファイルが存在しない
/// - ディレクトリが指定された
/// - ファイルが空
/// - サポートされていない形式
/// - ファイルサイズが制限を超過
pub fn validate_upload_file(path: &Path) -> ApiResult<ValidationResult> {
    let display = path.display();

    // 存在確認
    if !path.exists() {
        return Err(VidMeError::validation(
            "filePath",
            format!("file not found: {}", display),
        ));
    }

    let metadata = std::fs::metadata(path).map_err(|_| {
        VidMeError::validation("filePath", format!("file not found: {}", display))
    })?;

    // ディレクトリチェック
    if metadata.is_dir() {
        return Err(VidMeError::validation(
            "filePath",
            format!("not a file: {}", display),
        ));
    }

    // 空ファイルチェック
    let size = metadata.len();
    if size == 0 {
        return Err(VidMeError::validation(
            "filePath",
            format!("file is empty: {}", display),
        ));
    }

    // ファイルサイズチェック
    let max_file_size = APP_CONFIG.upload.max_file_size;
    if size > max_file_size {
        return Err(VidMeError::validation(
            "filePath",
            format!(
                "file too large: {} MB (max: {} MB)",
                size / BYTES_PER_MB,
                max_file_size / BYTES_PER_MB
            ),
        ));
    }

    // 拡張子チェック
    let supported_formats = &APP_CONFIG.upload.supported_formats;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .ok_or_else(|| {
            VidMeError::validation(
                "filePath",
                format!(
                    "unsupported format (no extension), expected one of: {}",
                    supported_formats.join(", ")
                ),
            )
        })?;

    if !supported_formats.iter().any(|f| f == &extension) {
        return Err(VidMeError::validation(
            "filePath",
            format!(
                "unsupported format '{}', expected one of: {}",
                extension,
                supported_formats.join(", ")
            ),
        ));
    }

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();

    Ok(ValidationResult {
        filename,
        size,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_supported_formats() {
        // APP_CONFIGから取得した形式リストのテスト
        let formats = &APP_CONFIG.upload.supported_formats;
        assert!(formats.iter().any(|f| f == "mp4"));
        assert!(formats.iter().any(|f| f == "mov"));
        assert!(formats.iter().any(|f| f == "webm"));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = validate_upload_file(Path::new("/no/such/file.mp4"));
        assert!(matches!(result, Err(VidMeError::Validation { .. })));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_upload_file(dir.path());
        assert!(matches!(result, Err(VidMeError::Validation { .. })));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.mp4");
        std::fs::File::create(&path).unwrap();

        let result = validate_upload_file(&path);
        assert!(matches!(result, Err(VidMeError::Validation { .. })));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not a video").unwrap();

        let result = validate_upload_file(&path);
        assert!(matches!(result, Err(VidMeError::Validation { .. })));
    }

    #[test]
    fn test_valid_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.MP4");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"fake video bytes").unwrap();

        let result = validate_upload_file(&path).unwrap();
        assert_eq!(result.filename, "movie.MP4");
        // 拡張子は小文字に正規化される
        assert_eq!(result.extension, "mp4");
        assert_eq!(result.size, 16);
    }
}
