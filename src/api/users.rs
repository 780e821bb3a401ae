/// ユーザー操作
///
/// アカウント作成・編集・フォローと、アバター/カバー画像の
/// マルチパートアップロードを提供する。
use crate::api::client::{FileSource, VidMeClient};
use crate::api::error::{ApiResult, VidMeError};
use crate::model::entities::{Channel, User, UserTag};
use crate::model::responses::{
    AuthResponse, ChannelsResponse, IsFollowingResponse, StatusResponse, UserResponse,
    UserTagsResponse,
};

impl VidMeClient {
    /// ユーザーを作成する
    ///
    /// `POST user/create`。成功するとセッションがこのクライアントに保存される。
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> ApiResult<AuthResponse> {
        if username.is_empty() {
            return Err(VidMeError::validation(
                "username",
                "username cannot be null or empty",
            ));
        }
        if password.is_empty() {
            return Err(VidMeError::validation(
                "password",
                "password cannot be null or empty",
            ));
        }

        let mut params = self.base_params();
        params.add("username", username);
        params.add("password", password);
        params.add_string("email", email);

        let response: AuthResponse = self.post("user/create", &params).await?;
        if let Some(auth) = &response.auth {
            self.set_authentication(auth.clone());
        }

        Ok(response)
    }

    /// ユーザーを取得する
    ///
    /// `GET user/{id}`
    pub async fn get_user(&self, user_id: &str) -> ApiResult<UserResponse> {
        require_user_id(user_id)?;

        let params = self.optional_auth_params();
        self.get(&format!("user/{}", user_id), &params).await
    }

    /// ユーザー情報を編集する（要認証）
    ///
    /// `POST user/{id}/edit`
    #[allow(clippy::too_many_arguments)]
    pub async fn edit_user(
        &self,
        user_id: &str,
        username: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
        email: Option<&str>,
        bio: Option<&str>,
    ) -> ApiResult<AuthResponse> {
        require_user_id(user_id)?;

        let mut params = self.authorized_params().await?;
        params.add_string("username", username);
        params.add_string("password", current_password);
        params.add_string("passwordNew", new_password);
        params.add_string("email", email);
        params.add_string("bio", bio);

        self.post(&format!("user/{}/edit", user_id), &params).await
    }

    /// ユーザーをフォローする（要認証）
    ///
    /// `POST user/{id}/follow`
    pub async fn follow_user(&self, user_id: &str) -> ApiResult<bool> {
        require_user_id(user_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("user/{}/follow", user_id), &params)
            .await?;
        Ok(response.status)
    }

    /// ユーザーのフォローを解除する（要認証）
    ///
    /// `POST user/{id}/un-follow`
    pub async fn unfollow_user(&self, user_id: &str) -> ApiResult<bool> {
        require_user_id(user_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("user/{}/un-follow", user_id), &params)
            .await?;
        Ok(response.status)
    }

    /// ユーザーをフォローしているか確認する（要認証）
    ///
    /// `GET user/{id}/follow`
    ///
    /// # Arguments
    /// * `other_user` - 省略時は認証中のユーザー
    pub async fn is_following_user(
        &self,
        user_id: &str,
        other_user: Option<&str>,
    ) -> ApiResult<bool> {
        require_user_id(user_id)?;

        let mut params = self.authorized_params().await?;
        params.add_string("user", other_user);

        let response: IsFollowingResponse = self
            .get(&format!("user/{}/follow", user_id), &params)
            .await?;
        Ok(response.is_following)
    }

    /// ユーザーがフォローしているチャンネル一覧を取得する
    ///
    /// `GET user/{id}/follows-channels`
    pub async fn followed_channels(&self, user_id: &str) -> ApiResult<Vec<Channel>> {
        require_user_id(user_id)?;

        let params = self.optional_auth_params();
        let response: ChannelsResponse = self
            .get(&format!("user/{}/follows-channels", user_id), &params)
            .await?;
        Ok(response.channels)
    }

    /// アバター画像を更新する（要認証・マルチパート）
    ///
    /// `POST user/{id}/avatar/update`。画像全体をメモリに載せて送る。
    pub async fn update_avatar(
        &self,
        user_id: &str,
        image: Vec<u8>,
        content_type: &str,
        filename: &str,
    ) -> ApiResult<Option<User>> {
        require_user_id(user_id)?;
        require_image(&image)?;

        let params = self.authorized_params().await?;
        let file = FileSource::new(image, content_type, filename);

        let response: UserResponse = self
            .post_multipart(&format!("user/{}/avatar/update", user_id), &params, file)
            .await?;
        Ok(response.user)
    }

    /// アバター画像を削除する（要認証）
    ///
    /// `POST user/{id}/avatar/remove`
    pub async fn remove_avatar(&self, user_id: &str) -> ApiResult<bool> {
        require_user_id(user_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("user/{}/avatar/remove", user_id), &params)
            .await?;
        Ok(response.status)
    }

    /// カバー画像を更新する（要認証・マルチパート）
    ///
    /// `POST user/{id}/cover/update`
    pub async fn update_cover(
        &self,
        user_id: &str,
        image: Vec<u8>,
        content_type: &str,
        filename: &str,
    ) -> ApiResult<Option<User>> {
        require_user_id(user_id)?;
        require_image(&image)?;

        let params = self.authorized_params().await?;
        let file = FileSource::new(image, content_type, filename);

        let response: UserResponse = self
            .post_multipart(&format!("user/{}/cover/update", user_id), &params, file)
            .await?;
        Ok(response.user)
    }

    /// カバー画像を削除する（要認証）
    ///
    /// `POST user/{id}/cover/remove`
    pub async fn remove_cover(&self, user_id: &str) -> ApiResult<bool> {
        require_user_id(user_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("user/{}/cover/remove", user_id), &params)
            .await?;
        Ok(response.status)
    }

    /// ユーザーのサジェストを取得する
    ///
    /// `GET users/suggest`
    pub async fn suggest_users(&self, search_text: Option<&str>) -> ApiResult<Vec<UserTag>> {
        let mut params = self.base_params();
        params.add_string("text", search_text);

        let response: UserTagsResponse = self.get("users/suggest", &params).await?;
        Ok(response.user_tags)
    }

    /// アバター画像のURLを返す（ネットワーク呼び出しなし）
    pub fn user_avatar_url(&self, user_id: &str) -> String {
        self.create_url(&format!("user/{}/avatar", user_id))
    }

    /// カバー画像のURLを返す（ネットワーク呼び出しなし）
    pub fn user_cover_url(&self, user_id: &str) -> String {
        self.create_url(&format!("user/{}/cover", user_id))
    }
}

fn require_user_id(user_id: &str) -> ApiResult<()> {
    if user_id.is_empty() {
        return Err(VidMeError::validation(
            "userId",
            "user id cannot be null or empty",
        ));
    }
    Ok(())
}

fn require_image(image: &[u8]) -> ApiResult<()> {
    if image.is_empty() {
        return Err(VidMeError::validation(
            "imageStream",
            "image data cannot be null or empty",
        ));
    }
    Ok(())
}
