//! エラー深刻度
//!
//! ライブラリ利用側（CLIやUI）が終了コードや表示方法を決めるための、
//! 最も抽象的なエラー分類。
//!
//! **依存方向の原則:**
//! - 内側層（api, model, config）はこのモジュールに依存してOK
//! - このモジュールは他のモジュールに依存しない（独立）

use std::fmt;

/// エラーの深刻度と対応する終了コード
///
/// ライブラリ内の全エラー型が共有するエラー分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー
    ///
    /// 引数が空、ファイルが見つからないなど、呼び出し側が直す可能性がある。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 認証エラー
    ///
    /// セッション未設定、トークン失効など、再認証が必要な状態。
    ///
    /// **Exit Code: 2**
    AuthError,

    /// システムエラー
    ///
    /// ネットワークエラー、APIの障害など、呼び出し側が直せない外部要因。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::AuthError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::AuthError => write!(f, "authentication error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorSeverity::UserError.exit_code(), 1);
        assert_eq!(ErrorSeverity::AuthError.exit_code(), 2);
        assert_eq!(ErrorSeverity::SystemError.exit_code(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorSeverity::UserError.to_string(), "user error");
        assert_eq!(ErrorSeverity::AuthError.to_string(), "authentication error");
        assert_eq!(ErrorSeverity::SystemError.to_string(), "system error");
    }
}
