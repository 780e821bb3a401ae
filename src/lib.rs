//! vid.me API クライアントライブラリ
//!
//! vid.me 動画共有サービスのREST APIに対する型付きクライアント。
//! リソースごとの操作（認証・チャンネル・コメント・ジオフェンス・
//! 外部動画取り込み・通知・タグ・OAuthアプリ・ユーザー・動画）を
//! `VidMeClient` 上の非同期メソッドとして提供する。
//!
//! # 使用例
//!
//! ```no_run
//! use vidme::VidMeClient;
//!
//! # async fn example() -> vidme::ApiResult<()> {
//! let client = VidMeClient::new()?;
//! let response = client.search_videos("cats", None, Some(10), None).await?;
//! for video in response.videos {
//!     println!("{}", video.title.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # エラー
//!
//! すべての操作は [`ApiResult`] を返す。エラーは [`VidMeError`] に分類され、
//! `severity()` でユーザー起因・認証起因・システム起因を判別できる。

pub mod api;
pub mod config;
pub mod error_severity;
pub mod model;
pub mod validator;

pub use api::{ApiResult, BoolFormat, DeviceContext, FileSource, RequestParameters, VidMeError};
pub use api::client::VidMeClient;
pub use model::entities::Auth;
pub use model::requests::{AppRequest, LocationRequest, VideoRequest};
