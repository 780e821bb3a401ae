/// ジオフェンス操作
use crate::api::client::VidMeClient;
use crate::api::error::ApiResult;
use crate::model::entities::Geofence;
use crate::model::responses::GeofencesResponse;

impl VidMeClient {
    /// ジオフェンス一覧を取得する
    ///
    /// `GET geofences`
    pub async fn get_geofences(&self) -> ApiResult<Vec<Geofence>> {
        let params = self.base_params();
        let response: GeofencesResponse = self.get("geofences", &params).await?;
        Ok(response.geofences)
    }

    /// ジオフェンスのサジェストを取得する
    ///
    /// `GET geofences/suggest`
    pub async fn suggest_geofences(&self, search_text: Option<&str>) -> ApiResult<Vec<Geofence>> {
        let mut params = self.base_params();
        params.add_string("text", search_text);

        let response: GeofencesResponse = self.get("geofences/suggest", &params).await?;
        Ok(response.geofences)
    }
}
