// vid.me API client module
//
// client がHTTPディスパッチとレスポンスエンベロープの展開を、
// auth がセッション管理（保存・更新・サイレントリフレッシュ）を担当し、
// 残りのモジュールはリソースごとの操作を VidMeClient に実装する。

pub mod apps;
pub mod auth;
pub mod channels;
pub mod client;
pub mod comments;
pub mod error;
pub mod geofences;
pub mod grab;
pub mod notifications;
pub mod params;
pub mod tags;
pub mod users;
pub mod videos;

pub use client::{DeviceContext, FileSource, VidMeClient};
pub use error::{ApiResult, VidMeError};
pub use params::{BoolFormat, RequestParameters};
