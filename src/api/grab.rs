/// 外部動画の取り込み操作
use crate::api::client::VidMeClient;
use crate::api::error::{ApiResult, VidMeError};
use crate::model::entities::Video;
use crate::model::responses::{VideoInfoResponse, VideoResponse};

impl VidMeClient {
    /// 外部URLの動画を取り込む（要認証）
    ///
    /// `POST grab`
    pub async fn grab_external_video(
        &self,
        external_url: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> ApiResult<Option<Video>> {
        require_external_url(external_url)?;

        let mut params = self.authorized_params().await?;
        params.add("url", external_url);
        params.add_string("title", title);
        params.add_string("description", description);

        let response: VideoResponse = self.post("grab", &params).await?;
        Ok(response.video)
    }

    /// 外部URLの動画情報を取得する（取り込みはしない）
    ///
    /// `GET grab/preview`
    pub async fn grab_external_video_info(
        &self,
        external_url: &str,
    ) -> ApiResult<VideoInfoResponse> {
        require_external_url(external_url)?;

        let mut params = self.base_params();
        params.add("url", external_url);

        self.get("grab/preview", &params).await
    }
}

fn require_external_url(external_url: &str) -> ApiResult<()> {
    if external_url.is_empty() {
        return Err(VidMeError::validation(
            "externalUrl",
            "external url cannot be null or empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_url_is_rejected_before_network() {
        let client = VidMeClient::new().unwrap();
        let result = client.grab_external_video_info("").await;
        match result {
            Err(VidMeError::Validation { param, .. }) => assert_eq!(param, "externalUrl"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
