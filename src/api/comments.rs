/// コメント操作
use crate::api::client::VidMeClient;
use crate::api::error::{ApiResult, VidMeError};
use crate::model::entities::Comment;
use crate::model::enums::{SortDirection, Vote};
use crate::model::responses::{CommentResponse, CommentsResponse, StatusResponse};
use std::time::Duration;

impl VidMeClient {
    /// コメントを投稿する（要認証）
    ///
    /// `POST comment/create`
    ///
    /// # Arguments
    /// * `video_id` - 対象動画のID
    /// * `comment_text` - コメント本文（空は不可）
    /// * `time_of_comment` - 動画内のコメント位置
    /// * `in_reply_to_comment_id` - 返信先コメントID（省略可）
    pub async fn create_comment(
        &self,
        video_id: &str,
        comment_text: &str,
        time_of_comment: Duration,
        in_reply_to_comment_id: Option<&str>,
    ) -> ApiResult<Option<Comment>> {
        if video_id.is_empty() {
            return Err(VidMeError::validation(
                "videoId",
                "video id cannot be null or empty",
            ));
        }
        if comment_text.is_empty() {
            return Err(VidMeError::validation(
                "commentText",
                "comment text cannot be null or empty",
            ));
        }

        let mut params = self.authorized_params().await?;
        params.add("video", video_id);
        params.add("body", comment_text);
        params.add("at_time", time_of_comment.as_secs().to_string());
        params.add_string("comment", in_reply_to_comment_id);

        let response: CommentResponse = self.post("comment/create", &params).await?;
        Ok(response.comment)
    }

    /// コメントを削除する（要認証）
    ///
    /// `POST comment/{id}/delete`
    pub async fn delete_comment(&self, comment_id: &str) -> ApiResult<bool> {
        require_comment_id(comment_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("comment/{}/delete", comment_id), &params)
            .await?;
        Ok(response.status)
    }

    /// コメントを取得する
    ///
    /// `GET comment/{id}`
    pub async fn get_comment(&self, comment_id: &str) -> ApiResult<Option<Comment>> {
        require_comment_id(comment_id)?;

        let params = self.base_params();
        let response: CommentResponse = self
            .get(&format!("comment/{}", comment_id), &params)
            .await?;
        Ok(response.comment)
    }

    /// 動画のコメント一覧を取得する
    ///
    /// `GET comments/list`
    pub async fn get_comments(
        &self,
        video_id: &str,
        sort_direction: Option<SortDirection>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ApiResult<CommentsResponse> {
        if video_id.is_empty() {
            return Err(VidMeError::validation(
                "videoId",
                "video id cannot be null or empty",
            ));
        }

        let mut params = self.optional_auth_params();
        params.add("video", video_id);
        params.add_enum("order", sort_direction);
        params.add_int("offset", offset);
        params.add_int("limit", limit);

        self.get("comments/list", &params).await
    }

    /// コメントに投票する（要認証）
    ///
    /// `POST comment/{id}/vote`
    pub async fn vote_comment(&self, comment_id: &str, vote: Vote) -> ApiResult<Option<Comment>> {
        require_comment_id(comment_id)?;

        let mut params = self.authorized_params().await?;
        params.add_enum("value", Some(vote));

        let response: CommentResponse = self
            .post(&format!("comment/{}/vote", comment_id), &params)
            .await?;
        Ok(response.comment)
    }

    /// コメントページのURLを返す（ネットワーク呼び出しなし）
    pub fn comment_url(&self, comment_id: &str) -> String {
        self.create_url(&format!("comment/{}", comment_id))
    }
}

fn require_comment_id(comment_id: &str) -> ApiResult<()> {
    if comment_id.is_empty() {
        return Err(VidMeError::validation(
            "commentId",
            "comment id cannot be null or empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_comment_rejects_empty_text_before_network() {
        let client = VidMeClient::new().unwrap();
        // 認証済みセッションがあっても、空本文はネットワークに出る前に弾かれる
        client.set_authentication(crate::model::entities::Auth {
            token: "tok".to_string(),
            expires: None,
            user_id: "1".to_string(),
        });

        let result = client
            .create_comment("v1", "", Duration::from_secs(10), None)
            .await;

        match result {
            Err(VidMeError::Validation { param, .. }) => assert_eq!(param, "commentText"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_comment_rejects_empty_video_id() {
        let client = VidMeClient::new().unwrap();
        let result = client
            .create_comment("", "nice video", Duration::from_secs(0), None)
            .await;
        match result {
            Err(VidMeError::Validation { param, .. }) => assert_eq!(param, "videoId"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_vote_comment_requires_authentication() {
        let client = VidMeClient::new().unwrap();
        let result = client.vote_comment("c1", Vote::Up).await;
        assert!(matches!(result, Err(VidMeError::Unauthorized { .. })));
    }
}
