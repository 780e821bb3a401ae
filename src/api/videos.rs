/// 動画操作
///
/// 取得・一覧・編集・削除・検索と、動画本体/サムネイルの
/// マルチパートアップロードを提供する。
use crate::api::client::{FileSource, VidMeClient};
use crate::api::error::{ApiResult, VidMeError};
use crate::api::params::BoolFormat;
use crate::model::entities::Video;
use crate::model::enums::SortDirection;
use crate::model::requests::{LocationRequest, VideoRequest};
use crate::model::responses::{
    StatusResponse, VideoRequestResponse, VideoResponse, VideoUploadResponse, VideosResponse,
};
use crate::validator;
use std::path::Path;

impl VidMeClient {
    /// 動画を取得する
    ///
    /// `GET video/{id}`
    pub async fn get_video(&self, video_id: &str) -> ApiResult<VideoResponse> {
        require_video_id(video_id)?;

        let params = self.optional_auth_params();
        self.get(&format!("video/{}", video_id), &params).await
    }

    /// ユーザーの動画一覧を取得する
    ///
    /// `GET videos/list`
    pub async fn user_videos(
        &self,
        user_id: &str,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_direction: Option<SortDirection>,
    ) -> ApiResult<VideosResponse> {
        if user_id.is_empty() {
            return Err(VidMeError::validation(
                "userId",
                "user id cannot be null or empty",
            ));
        }

        let mut params = self.optional_auth_params();
        params.add("user", user_id);
        params.add_int("offset", offset);
        params.add_int("limit", limit);
        params.add_enum("order", sort_direction);

        self.get("videos/list", &params).await
    }

    /// 認証中ユーザーのフィードを取得する（要認証）
    ///
    /// `GET videos/feed`
    pub async fn user_feed(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ApiResult<VideosResponse> {
        let mut params = self.authorized_params().await?;
        params.add_int("offset", offset);
        params.add_int("limit", limit);

        self.get("videos/feed", &params).await
    }

    /// 匿名アップロードされた動画一覧を取得する
    ///
    /// `GET videos/anonymous`
    pub async fn anonymous_videos(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ApiResult<VideosResponse> {
        let mut params = self.base_params();
        params.add_int("offset", offset);
        params.add_int("limit", limit);

        self.get("videos/anonymous", &params).await
    }

    /// 動画情報を編集する（要認証）
    ///
    /// `POST video/{id}/edit`
    pub async fn edit_video(
        &self,
        video_id: &str,
        request: &VideoRequest,
    ) -> ApiResult<Option<Video>> {
        require_video_id(video_id)?;

        let mut params = self.authorized_params().await?;
        request.fill(&mut params);

        let response: VideoResponse = self
            .post(&format!("video/{}/edit", video_id), &params)
            .await?;
        Ok(response.video)
    }

    /// 動画のタイトルだけを更新する（要認証）
    ///
    /// `POST video/{id}/edit`。`edit_video` の薄いラッパー。
    pub async fn update_video_title(&self, video_id: &str, title: &str) -> ApiResult<Option<Video>> {
        if title.is_empty() {
            return Err(VidMeError::validation(
                "title",
                "title cannot be null or empty",
            ));
        }

        let request = VideoRequest {
            title: Some(title.to_string()),
            ..Default::default()
        };
        self.edit_video(video_id, &request).await
    }

    /// 動画のサムネイルを更新する（要認証・マルチパート）
    ///
    /// `POST video/{id}/edit`
    pub async fn update_video_thumbnail(
        &self,
        video_id: &str,
        thumbnail: Vec<u8>,
        content_type: &str,
        filename: &str,
    ) -> ApiResult<Option<Video>> {
        require_video_id(video_id)?;
        if thumbnail.is_empty() {
            return Err(VidMeError::validation(
                "thumbnailStream",
                "thumbnail data cannot be null or empty",
            ));
        }

        let params = self.authorized_params().await?;
        let file = FileSource::new(thumbnail, content_type, filename);

        let response: VideoResponse = self
            .post_multipart(&format!("video/{}/edit", video_id), &params, file)
            .await?;
        Ok(response.video)
    }

    /// 動画を通報する/通報を取り消す（要認証）
    ///
    /// `POST video/{id}/flag`
    pub async fn flag_video(&self, video_id: &str, is_flagged: bool) -> ApiResult<Option<Video>> {
        require_video_id(video_id)?;

        let mut params = self.authorized_params().await?;
        params.add_bool("flagged", Some(is_flagged), BoolFormat::Binary);

        let response: VideoResponse = self
            .post(&format!("video/{}/flag", video_id), &params)
            .await?;
        Ok(response.video)
    }

    /// 動画を削除する（要認証）
    ///
    /// `POST video/{id}/delete`
    pub async fn delete_video(&self, video_id: &str) -> ApiResult<bool> {
        require_video_id(video_id)?;

        let params = self.authorized_params().await?;
        let response: StatusResponse = self
            .post(&format!("video/{}/delete", video_id), &params)
            .await?;
        Ok(response.status)
    }

    /// 匿名アップロードされた動画を削除トークンで削除する
    ///
    /// `POST video/delete`
    pub async fn delete_anonymous_video(
        &self,
        video_id: &str,
        deletion_token: &str,
    ) -> ApiResult<bool> {
        require_video_id(video_id)?;
        if deletion_token.is_empty() {
            return Err(VidMeError::validation(
                "deletionToken",
                "deletion token cannot be null or empty",
            ));
        }

        let mut params = self.base_params();
        params.add("video", video_id);
        params.add("token", deletion_token);

        let response: StatusResponse = self.post("video/delete", &params).await?;
        Ok(response.status)
    }

    /// アップロード枠を確保する
    ///
    /// `POST video/request`。返されるコードを `upload_video` に渡す。
    pub async fn request_video(&self, request: &VideoRequest) -> ApiResult<VideoRequestResponse> {
        let mut params = self.optional_auth_params();
        request.fill(&mut params);

        self.post("video/request", &params).await
    }

    /// 動画をアップロードする（マルチパート）
    ///
    /// `POST video/upload`。ファイル全体をメモリに載せてから送る
    /// （APIのサイズ上限があるため許容する簡略化）。
    pub async fn upload_video(
        &self,
        request: &VideoRequest,
        video: Vec<u8>,
        content_type: &str,
        filename: &str,
    ) -> ApiResult<VideoUploadResponse> {
        if video.is_empty() {
            return Err(VidMeError::validation(
                "videoStream",
                "video data cannot be null or empty",
            ));
        }

        let mut params = self.optional_auth_params();
        request.fill(&mut params);

        let file = FileSource::new(video, content_type, filename);
        self.post_multipart("video/upload", &params, file).await
    }

    /// ファイルパスを指定して動画をアップロードする
    ///
    /// アップロード前にファイルを検証し（存在・サイズ上限・対応形式）、
    /// Content-Typeは拡張子から推定する。
    pub async fn upload_video_from_path(
        &self,
        request: &VideoRequest,
        path: impl AsRef<Path>,
    ) -> ApiResult<VideoUploadResponse> {
        let path = path.as_ref();
        let validation = validator::validate_upload_file(path)?;

        let content_type = mime_guess::from_path(path).first_or_octet_stream();
        let bytes = tokio::fs::read(path).await?;

        let mut request = request.clone();
        if request.video_size.is_none() {
            request.video_size = Some(validation.size as i64);
        }
        if request.filename.is_none() {
            request.filename = Some(validation.filename.clone());
        }

        self.upload_video(
            &request,
            bytes,
            content_type.as_ref(),
            &validation.filename,
        )
        .await
    }

    /// 位置情報で動画を検索する
    ///
    /// `GET videos/location`。座標（緯度+経度）かジオフェンスIDの
    /// どちらかが必須。
    pub async fn location_search(&self, request: &LocationRequest) -> ApiResult<VideosResponse> {
        if !request.has_location() {
            return Err(VidMeError::validation(
                "locationRequest",
                "either coordinates or a geofence id must be provided",
            ));
        }

        let mut params = self.optional_auth_params();
        request.fill(&mut params);

        self.get("videos/location", &params).await
    }

    /// テキストで動画を検索する
    ///
    /// `GET videos/search`
    ///
    /// NSFWフラグはこのAPI固有の癖があり、`Some(false)` はキーを省略するのでは
    /// なく空の値（`nsfw=`）として送る。`None` はキー自体を省略する。
    pub async fn search_videos(
        &self,
        search_text: &str,
        offset: Option<i64>,
        limit: Option<i64>,
        include_nsfw: Option<bool>,
    ) -> ApiResult<VideosResponse> {
        if search_text.is_empty() {
            return Err(VidMeError::validation(
                "searchText",
                "search text cannot be null or empty",
            ));
        }

        let mut params = self.optional_auth_params();
        params.add("query", search_text);
        params.add_int("offset", offset);
        params.add_int("limit", limit);
        match include_nsfw {
            Some(true) => params.add("nsfw", "true"),
            Some(false) => params.add("nsfw", ""),
            None => {}
        }

        self.get("videos/search", &params).await
    }

    /// サムネイル画像のURLを返す（ネットワーク呼び出しなし）
    pub fn video_thumbnail_url(&self, video_id: &str) -> String {
        self.create_url(&format!("video/{}/thumbnail", video_id))
    }
}

fn require_video_id(video_id: &str) -> ApiResult<()> {
    if video_id.is_empty() {
        return Err(VidMeError::validation(
            "videoId",
            "video id cannot be null or empty",
        ));
    }
    Ok(())
}
