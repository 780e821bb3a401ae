use std::io;
/// APIクライアントのエラー定義
///
/// リクエスト構築からレスポンス解釈までに発生するエラーを
/// 構造化して定義。#[from] / #[source] を使って原因連鎖を保持する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

/// セッション未設定時の固定メッセージ
pub const NO_AUTH_MESSAGE: &str = "No AuthenticationInfo set";

#[derive(Error, Debug)]
pub enum VidMeError {
    /// 引数バリデーションエラー（ネットワーク呼び出し前に検出）
    #[error("invalid argument '{param}': {reason}")]
    Validation { param: String, reason: String },

    /// 認証エラー（セッション未設定・失効）
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// API側が返したエラーレスポンス
    #[error("API error ({status_code}): {error}")]
    Api {
        status_code: u16,
        error: String,
        code: Option<String>,
    },

    /// レスポンスボディを期待した形にデコードできなかった
    #[error("decode error: {message}")]
    Decode { message: String },

    /// ネットワークエラー
    #[error("network error: {message}")]
    Network { message: String },

    /// タイムアウトエラー
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    /// その他のI/Oエラー
    #[error("I/O error")]
    Io(#[from] io::Error),
}

impl VidMeError {
    /// バリデーションエラーを作成
    pub fn validation(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// 認証エラーを作成
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// セッション未設定エラーを作成（固定メッセージ）
    pub fn no_authentication() -> Self {
        Self::unauthorized(NO_AUTH_MESSAGE)
    }

    /// デコードエラーを作成
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// ネットワークエラーを作成
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation { .. } => ErrorSeverity::UserError,
            Self::Unauthorized { .. } => ErrorSeverity::AuthError,
            Self::Api { .. }
            | Self::Decode { .. }
            | Self::Network { .. }
            | Self::Timeout { .. }
            | Self::Io(_) => ErrorSeverity::SystemError,
        }
    }
}

/// APIクライアントの結果型
pub type ApiResult<T> = Result<T, VidMeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_authentication_message() {
        let err = VidMeError::no_authentication();
        match &err {
            VidMeError::Unauthorized { message } => {
                assert_eq!(message, "No AuthenticationInfo set");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_validation_display() {
        let err = VidMeError::validation("commentText", "cannot be null or empty");
        assert_eq!(
            err.to_string(),
            "invalid argument 'commentText': cannot be null or empty"
        );
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            VidMeError::validation("x", "y").severity(),
            ErrorSeverity::UserError
        );
        assert_eq!(
            VidMeError::no_authentication().severity(),
            ErrorSeverity::AuthError
        );
        assert_eq!(
            VidMeError::network("down").severity(),
            ErrorSeverity::SystemError
        );
    }
}
