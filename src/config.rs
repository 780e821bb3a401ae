/// ビルド時設定モジュール
///
/// ビルド時に config.toml から読み込まれる静的設定を管理します。
/// これらの設定は実行時には変更できません。
use serde::Deserialize;
use std::sync::LazyLock;

/// 1MBあたりのバイト数
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// ライブラリ全体の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// vid.me API のベースURL
    pub endpoint: String,

    /// OAuth認可画面のURL
    pub authorize_endpoint: String,

    /// APIリクエストのタイムアウト(秒)
    pub timeout_seconds: u64,
}

/// アップロード関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// アップロード可能な最大ファイルサイズ (バイト)
    pub max_file_size: u64,

    /// 対応する動画フォーマット
    pub supported_formats: Vec<String>,
}

impl AppConfig {
    /// ビルド時に埋め込まれたconfig.tomlから設定を読み込む
    ///
    /// # Panics
    /// 設定ファイルのパースに失敗した場合はパニックします。
    /// これはビルド時設定なので、実行時エラーではなくビルドの誤りとして扱うべきです。
    pub fn load() -> Self {
        const CONFIG_STR: &str = include_str!("../config.toml");
        toml::from_str(CONFIG_STR)
            .expect("Failed to parse embedded config.toml. This is a build-time configuration error.")
    }
}

/// グローバル設定（初回アクセス時にパースされる）
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::load);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        // ビルド時設定が正しく読み込まれることを確認
        let config = AppConfig::load();
        assert_eq!(config.api.endpoint, "https://api.vid.me/");
        assert_eq!(config.api.authorize_endpoint, "https://vid.me/oauth/authorize");
        assert!(config.api.timeout_seconds > 0);
        assert!(!config.upload.supported_formats.is_empty());
    }

    #[test]
    fn test_global_config_access() {
        // APP_CONFIGがグローバル定数として直接アクセス可能であることを確認
        assert!(APP_CONFIG.api.endpoint.ends_with('/'));
        assert!(APP_CONFIG.upload.max_file_size >= 100 * BYTES_PER_MB);
    }
}
