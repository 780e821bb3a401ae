/// 通知操作
use crate::api::client::VidMeClient;
use crate::api::error::{ApiResult, VidMeError};
use crate::model::entities::Notification;
use crate::model::responses::{NotificationsResponse, StatusResponse};

impl VidMeClient {
    /// 通知一覧を取得する（要認証）
    ///
    /// `GET notifications`
    pub async fn get_notifications(&self) -> ApiResult<Vec<Notification>> {
        let params = self.authorized_params().await?;
        let response: NotificationsResponse = self.get("notifications", &params).await?;
        Ok(response.notifications)
    }

    /// 指定した通知を既読にする（要認証）
    ///
    /// `POST notifications/mark-read`。IDはカンマ区切りで送信される。
    pub async fn mark_notifications_read(&self, notification_ids: &[String]) -> ApiResult<bool> {
        if notification_ids.is_empty() {
            return Err(VidMeError::validation(
                "notificationIds",
                "notification id list cannot be empty",
            ));
        }

        let mut params = self.authorized_params().await?;
        params.add_list("notifications", notification_ids);

        let response: StatusResponse = self.post("notifications/mark-read", &params).await?;
        Ok(response.status)
    }

    /// すべての通知を既読にする（要認証）
    ///
    /// `POST notifications/mark-read` に `notifications=all` を送る。
    pub async fn mark_all_notifications_read(&self) -> ApiResult<bool> {
        let mut params = self.authorized_params().await?;
        params.add("notifications", "all");

        let response: StatusResponse = self.post("notifications/mark-read", &params).await?;
        Ok(response.status)
    }
}
