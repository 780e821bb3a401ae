/// レスポンスエンベロープ
///
/// vid.me APIのレスポンスは成功フラグ(status)とエンドポイントごとの
/// ペイロードを持つ外側のJSONに包まれている。ここではその形を
/// エンドポイント単位の型として定義する。いずれも1レスポンス限りの
/// 一時的な型で、ディスパッチャが展開した後は破棄される。
use crate::model::entities::{
    Application, Auth, Channel, Comment, Geofence, Notification, Page, Tag, User, UserTag, Video,
    ViewerVote,
};
use crate::model::serde_helpers::object_or_array;
use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// 非成功レスポンスのボディ。HTTPステータスと合わせて
/// `VidMeError::Api` に変換される。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// 成功フラグのみのレスポンス（follow/delete系）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: bool,
}

/// 認証レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub auth: Option<Auth>,
    #[serde(default)]
    pub user: Option<User>,
}

/// チャンネル単体レスポンス（フォロー状態つき）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default, rename = "isFollowing")]
    pub is_following: bool,
    #[serde(default, rename = "isFollowedBy")]
    pub is_followed_by: bool,
    #[serde(default)]
    pub channel: Option<Channel>,
}

/// チャンネル一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelsResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// コメント単体レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
}

/// コメント一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentsResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub page: Option<Page>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// フォロー状態レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IsFollowingResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default, rename = "isFollowing")]
    pub is_following: bool,
}

/// ジオフェンス一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeofencesResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub geofences: Vec<Geofence>,
}

/// 通知一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// タグサジェストレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// ユーザーサジェストレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserTagsResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "users")]
    pub user_tags: Vec<UserTag>,
}

/// ユーザー単体レスポンス（フォロー状態つき）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default, rename = "isFollowing")]
    pub is_following: bool,
    #[serde(default, rename = "isFollowedBy")]
    pub is_followed_by: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// ユーザー一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub page: Option<Page>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// OAuthアプリケーション一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppsResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// OAuthアプリケーション登録レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAppResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
}

/// 動画単体レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub video: Option<Video>,
}

/// 動画一覧レスポンス
///
/// `watching` / `viewerVotes` は配列・オブジェクト・null が混在するため
/// object-or-array デコーダを通す。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub page: Option<Page>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default, deserialize_with = "object_or_array::deserialize")]
    pub watching: Vec<User>,
    #[serde(
        default,
        rename = "viewerVotes",
        deserialize_with = "object_or_array::deserialize"
    )]
    pub viewer_votes: Vec<ViewerVote>,
}

/// 外部動画の情報取得レスポンス（grab/preview）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfoResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// 動画アップロード枠の確保レスポンス（video/request）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoRequestResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub video: Option<Video>,
    #[serde(default, rename = "maxSize")]
    pub max_size: Option<i64>,
    #[serde(default, rename = "maxSizeMB")]
    pub max_size_mb: Option<i64>,
    #[serde(default, rename = "uploadId")]
    pub upload_id: Option<i64>,
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<Auth>,
}

/// 動画アップロードレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoUploadResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub video: Option<Video>,
}

/// 投票レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default, rename = "vote")]
    pub viewer_vote: Option<ViewerVote>,
    #[serde(default)]
    pub video: Option<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_decoding() {
        let body = r#"{"error": "bad request", "code": "E1"}"#;
        let error: ErrorResponse = serde_json::from_str(body).unwrap();
        assert!(!error.status);
        assert_eq!(error.error, "bad request");
        assert_eq!(error.code.as_deref(), Some("E1"));
    }

    #[test]
    fn test_auth_response_decoding() {
        let body = r#"{
            "status": true,
            "auth": {"token": "tok", "expires": "2038-01-01 00:00:00", "user_id": "7"},
            "user": {"user_id": "7", "username": "bob"}
        }"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert!(response.status);
        let auth = response.auth.unwrap();
        assert_eq!(auth.token, "tok");
        assert_eq!(auth.user_id, "7");
        assert!(auth.expires.is_some());
    }

    #[test]
    fn test_videos_response_with_object_shaped_votes() {
        // viewerVotes がオブジェクト形式("indexed"コレクション)でも展開できる
        let body = r#"{
            "status": true,
            "page": {"total": 2, "offset": 0, "limit": 20},
            "videos": [{"video_id": "v1"}, {"video_id": "v2"}],
            "watching": null,
            "viewerVotes": {"v1": {"vote_id": "a"}, "v2": {"vote_id": "b"}}
        }"#;
        let response: VideosResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.videos.len(), 2);
        assert!(response.watching.is_empty());
        assert_eq!(response.viewer_votes.len(), 2);
        assert_eq!(response.viewer_votes[0].vote_id, "a");
        assert_eq!(response.viewer_votes[1].vote_id, "b");
        assert_eq!(response.page.unwrap().total, 2);
    }

    #[test]
    fn test_follow_flags_use_camel_case_keys() {
        let body = r#"{"status": true, "isFollowing": true, "isFollowedBy": false, "user": {"user_id": "1"}}"#;
        let response: UserResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_following);
        assert!(!response.is_followed_by);
    }
}
