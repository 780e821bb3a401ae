/// ドメインモデル
///
/// vid.me APIのJSONリソースを1対1で写した平坦なレコード群。
/// APIは項目を省略することがあるため、フィールドは Option か default で受ける。
/// 日付フィールドはセンチネル値("0000-00-00 00:00:00")対応のコーデックを通す。
use crate::model::enums::NotificationType;
use crate::model::serde_helpers::optional_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 認証セッション
///
/// ベアラートークンと有効期限、対応するユーザーID。
/// クライアントインスタンスが排他的に所有し、認証レスポンスのたびに丸ごと差し替えられる。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auth {
    #[serde(default)]
    pub token: String,

    /// 有効期限。Noneは「期限情報なし」で、失効扱いにはしない。
    #[serde(default, with = "optional_date")]
    pub expires: Option<DateTime<Utc>>,

    #[serde(default)]
    pub user_id: String,
}

impl Auth {
    /// 有効期限が過ぎているか
    ///
    /// 期限切れのセッションは無効であり、使用前にリフレッシュが必要。
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires, Some(expires) if expires <= now)
    }
}

/// ページング情報
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
}

/// ユーザー
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// 動画のフォーマット（解像度ごとの配信URL）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoFormat {
    #[serde(default, rename = "type")]
    pub format_type: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub version: i64,
}

/// 動画
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub full_url: Option<String>,
    #[serde(default)]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub complete: Option<String>,
    #[serde(default)]
    pub complete_url: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,

    #[serde(default, with = "optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_date")]
    pub date_stored: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_date")]
    pub date_completed: Option<DateTime<Utc>>,

    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub thumbnail_gif: Option<String>,
    #[serde(default)]
    pub thumbnail_gif_url: Option<String>,
    #[serde(default)]
    pub storyboard: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub colors: Option<String>,
    #[serde(default)]
    pub clip_url: Option<String>,

    /// 投稿者（埋め込み）
    #[serde(default)]
    pub user: Option<User>,

    #[serde(default, rename = "formats")]
    pub video_formats: Vec<VideoFormat>,
}

/// チャンネル
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub full_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub hide_suggest: bool,
    #[serde(default)]
    pub show_unmoderated: bool,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub follower_count: i64,
    #[serde(default)]
    pub video_count: i64,
    #[serde(default)]
    pub colors: Option<String>,
}

/// コメント
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub comment_id: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub parent_comment_id: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, with = "optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    /// 動画内のコメント位置（秒）
    #[serde(default)]
    pub made_at_time: Option<f64>,
    #[serde(default)]
    pub score: i64,
}

/// 通知
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub notification_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, rename = "type")]
    pub notification_type: Option<NotificationType>,
    /// 通知種別ごとに形が異なる付随データ
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub read: bool,
    #[serde(default, with = "optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// タグ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub tag_id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// APIは件数を文字列で返す
    #[serde(default)]
    pub use_count: Option<String>,
}

/// ユーザーサジェスト結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserTag {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// ジオフェンス（位置情報検索の対象領域）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geofence {
    #[serde(default)]
    pub geofence_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub radius: i64,
    #[serde(default)]
    pub radius_unit: Option<String>,
    #[serde(default, with = "optional_date")]
    pub date_created: Option<DateTime<Utc>>,
}

/// OAuthアプリケーション
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub redirect_uri_prefix: Option<String>,
}

/// 視聴者の投票
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerVote {
    #[serde(default)]
    pub vote_id: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default, with = "optional_date")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_date")]
    pub date_modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_decodes_partial_payload() {
        // APIは項目を省略することがあるため、最小限のJSONでもデコードできること
        let json = r#"{
            "video_id": "123",
            "title": "My video",
            "date_created": "2015-03-14 09:26:53",
            "date_completed": "0000-00-00 00:00:00",
            "nsfw": false,
            "user": {"user_id": "42", "username": "alice"}
        }"#;

        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.video_id, "123");
        assert_eq!(video.title.as_deref(), Some("My video"));
        assert!(video.date_created.is_some());
        // センチネル値は「日付なし」
        assert!(video.date_completed.is_none());
        assert_eq!(
            video.user.as_ref().and_then(|u| u.username.as_deref()),
            Some("alice")
        );
        assert!(video.video_formats.is_empty());
    }

    #[test]
    fn test_auth_expiry() {
        let now = Utc::now();

        let mut auth = Auth {
            token: "abc".to_string(),
            expires: Some(now - chrono::Duration::minutes(1)),
            user_id: "1".to_string(),
        };
        assert!(auth.is_expired(now));

        auth.expires = Some(now + chrono::Duration::hours(1));
        assert!(!auth.is_expired(now));

        // 期限情報なしは失効扱いにしない
        auth.expires = None;
        assert!(!auth.is_expired(now));
    }

    #[test]
    fn test_notification_type_is_typed() {
        let json = r#"{
            "notification_id": "n1",
            "type": "video-upvoted",
            "read": false
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(
            notification.notification_type,
            Some(NotificationType::VideoUpVoted)
        );
    }

    #[test]
    fn test_auth_decodes_expires_sentinel() {
        let json = r#"{"token": "t", "expires": "", "user_id": "9"}"#;
        let auth: Auth = serde_json::from_str(json).unwrap();
        assert!(auth.expires.is_none());
        assert!(!auth.is_expired(Utc::now()));
    }
}
