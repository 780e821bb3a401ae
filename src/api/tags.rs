/// タグ操作
use crate::api::client::VidMeClient;
use crate::api::error::ApiResult;
use crate::model::entities::Tag;
use crate::model::responses::TagsResponse;

impl VidMeClient {
    /// タグのサジェストを取得する
    ///
    /// `GET tags/suggest`
    pub async fn suggest_tags(&self, search_text: Option<&str>) -> ApiResult<Vec<Tag>> {
        let mut params = self.base_params();
        params.add_string("text", search_text);

        let response: TagsResponse = self.get("tags/suggest", &params).await?;
        Ok(response.tags)
    }
}
