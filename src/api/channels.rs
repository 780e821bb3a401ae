/// チャンネル操作
use crate::api::client::VidMeClient;
use crate::api::error::{ApiResult, VidMeError};
use crate::model::entities::Channel;
use crate::model::enums::SortDirection;
use crate::model::responses::{
    ChannelResponse, ChannelsResponse, IsFollowingResponse, StatusResponse, UsersResponse,
    VideosResponse,
};

impl VidMeClient {
    /// チャンネルを取得する
    ///
    /// `GET channel/{id}`
    pub async fn get_channel(&self, channel_id: &str) -> ApiResult<ChannelResponse> {
        require_channel_id(channel_id)?;

        let params = self.optional_auth_params();
        self.get(&format!("channel/{}", channel_id), &params).await
    }

    /// チャンネル一覧を取得する
    ///
    /// `GET channels`
    pub async fn list_channels(&self) -> ApiResult<Vec<Channel>> {
        let params = self.base_params();
        let response: ChannelsResponse = self.get("channels", &params).await?;
        Ok(response.channels)
    }

    /// おすすめのチャンネルを取得する
    ///
    /// `GET channels/suggest`
    ///
    /// # Arguments
    /// * `text` - 絞り込みテキスト（省略可）
    /// * `number` - 取得件数（省略可）
    pub async fn list_suggested_channels(
        &self,
        text: Option<&str>,
        number: Option<i64>,
    ) -> ApiResult<Vec<Channel>> {
        let mut params = self.base_params();
        params.add_string("text", text);
        params.add_int("number", number);

        let response: ChannelsResponse = self.get("channels/suggest", &params).await?;
        Ok(response.channels)
    }

    /// チャンネルをフォローする（要認証）
    ///
    /// `POST channel/{id}/follow`
    pub async fn follow_channel(&self, channel_id: &str) -> ApiResult<bool> {
        require_channel_id(channel_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("channel/{}/follow", channel_id), &params)
            .await?;
        Ok(response.status)
    }

    /// チャンネルのフォローを解除する（要認証）
    ///
    /// `POST channel/{id}/un-follow`
    pub async fn unfollow_channel(&self, channel_id: &str) -> ApiResult<bool> {
        require_channel_id(channel_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("channel/{}/un-follow", channel_id), &params)
            .await?;
        Ok(response.status)
    }

    /// ユーザーがチャンネルをフォローしているか確認する（要認証）
    ///
    /// `GET channel/{id}/follow`
    ///
    /// # Arguments
    /// * `other_user` - 省略時は認証中のユーザー
    pub async fn is_following_channel(
        &self,
        channel_id: &str,
        other_user: Option<&str>,
    ) -> ApiResult<bool> {
        require_channel_id(channel_id)?;

        let mut params = self.authorized_params().await?;
        params.add_string("user", other_user);

        let response: IsFollowingResponse = self
            .get(&format!("channel/{}/follow", channel_id), &params)
            .await?;
        Ok(response.is_following)
    }

    /// チャンネルの人気動画を取得する
    ///
    /// `GET channel/{id}/hot`
    pub async fn channel_hot_videos(
        &self,
        channel_id: &str,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ApiResult<VideosResponse> {
        require_channel_id(channel_id)?;

        let mut params = self.optional_auth_params();
        params.add_int("offset", offset);
        params.add_int("limit", limit);

        self.get(&format!("channel/{}/hot", channel_id), &params)
            .await
    }

    /// チャンネルの新着動画を取得する
    ///
    /// `GET channel/{id}/new`
    pub async fn channel_new_videos(
        &self,
        channel_id: &str,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_direction: Option<SortDirection>,
    ) -> ApiResult<VideosResponse> {
        require_channel_id(channel_id)?;

        let mut params = self.optional_auth_params();
        params.add_int("offset", offset);
        params.add_int("limit", limit);
        params.add_enum("order", sort_direction);

        self.get(&format!("channel/{}/new", channel_id), &params)
            .await
    }

    /// チャンネルのモデレーター一覧を取得する
    ///
    /// `GET channel/{id}/moderators`
    pub async fn channel_moderators(
        &self,
        channel_id: &str,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ApiResult<UsersResponse> {
        require_channel_id(channel_id)?;

        let mut params = self.base_params();
        params.add_int("offset", offset);
        params.add_int("limit", limit);

        self.get(&format!("channel/{}/moderators", channel_id), &params)
            .await
    }

    /// チャンネルページのURLを返す（ネットワーク呼び出しなし）
    pub fn channel_url(&self, channel_id: &str) -> String {
        self.create_url(&format!("channel/{}", channel_id))
    }
}

fn require_channel_id(channel_id: &str) -> ApiResult<()> {
    if channel_id.is_empty() {
        return Err(VidMeError::validation(
            "channelId",
            "channel id cannot be null or empty",
        ));
    }
    Ok(())
}
