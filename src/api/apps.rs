/// OAuthアプリケーション操作
use crate::api::client::VidMeClient;
use crate::api::error::{ApiResult, VidMeError};
use crate::model::entities::Application;
use crate::model::requests::AppRequest;
use crate::model::responses::{AppsResponse, CreateAppResponse, StatusResponse};

impl VidMeClient {
    /// 認可済みアプリケーション一覧を取得する（要認証）
    ///
    /// `GET oauth/apps`
    pub async fn authorized_apps(&self) -> ApiResult<Vec<Application>> {
        let params = self.authorized_params().await?;
        let response: AppsResponse = self.get("oauth/apps", &params).await?;
        Ok(response.applications)
    }

    /// 自分が所有するアプリケーション一覧を取得する（要認証）
    ///
    /// `GET oauth/clients`
    pub async fn owned_apps(&self) -> ApiResult<Vec<Application>> {
        let params = self.authorized_params().await?;
        let response: AppsResponse = self.get("oauth/clients", &params).await?;
        Ok(response.applications)
    }

    /// アプリケーションを登録する（要認証）
    ///
    /// `POST oauth/client/register`。レスポンスには発行された
    /// client_id / client_secret が含まれる。
    pub async fn register_app(&self, app: &AppRequest) -> ApiResult<CreateAppResponse> {
        if app.name.as_deref().is_none_or(str::is_empty) {
            return Err(VidMeError::validation(
                "name",
                "application name cannot be null or empty",
            ));
        }

        let mut params = self.authorized_params().await?;
        app.fill(&mut params);

        self.post("oauth/client/register", &params).await
    }

    /// アプリケーションに発行されたトークンを失効させる（要認証）
    ///
    /// `POST oauth/client/revoke`
    pub async fn revoke_app_token(&self, client_id: &str) -> ApiResult<bool> {
        if client_id.is_empty() {
            return Err(VidMeError::validation(
                "clientId",
                "client id cannot be null or empty",
            ));
        }

        let mut params = self.authorized_params().await?;
        params.add("client", client_id);

        let response: StatusResponse = self.post("oauth/client/revoke", &params).await?;
        Ok(response.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entities::Auth;

    #[tokio::test]
    async fn test_register_app_requires_a_name() {
        let client = VidMeClient::new().unwrap();
        client.set_authentication(Auth {
            token: "tok".to_string(),
            expires: None,
            user_id: "1".to_string(),
        });

        let result = client.register_app(&AppRequest::default()).await;
        match result {
            Err(VidMeError::Validation { param, .. }) => assert_eq!(param, "name"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
