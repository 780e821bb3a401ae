/// 認証・セッション管理
///
/// ベアラートークンつきセッションの保持・検証・サイレントリフレッシュと、
/// 認証系エンドポイントの操作を提供する。
///
/// セッションの不変条件: 有効期限が過ぎたセッションは無効であり、
/// そのまま使わせず、使用前にトークンチェックエンドポイントで再認証する。
/// リフレッシュ成功時はセッション更新イベントが同期的に1回だけ発火し、
/// そのうえで元の呼び出しが続行される。
use crate::api::client::VidMeClient;
use crate::api::error::{ApiResult, VidMeError};
use crate::api::params::RequestParameters;
use crate::config::APP_CONFIG;
use crate::model::entities::Auth;
use crate::model::enums::{AuthType, Scope};
use crate::model::responses::{AuthResponse, StatusResponse};
use chrono::Utc;

impl VidMeClient {
    /// 現在のセッションを丸ごと差し替える
    ///
    /// セッションは丸ごと差し替えるだけなので、ロックが毒化していても
    /// 状態の一貫性は崩れない。ガードを回収して続行する。
    pub fn set_authentication(&self, auth: Auth) {
        let mut guard = self.auth.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(auth);
    }

    /// 現在のセッションを破棄する
    pub fn clear_authentication(&self) {
        let mut guard = self.auth.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// 現在のセッションのコピーを返す
    pub fn authentication_info(&self) -> Option<Auth> {
        self.auth
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// セッション更新イベントの観測者を登録する
    ///
    /// サイレントリフレッシュで新しいセッションが得られるたびに、
    /// 新しいセッションを引数として同期的に呼び出される。
    pub fn on_authentication_updated(&self, observer: impl Fn(&Auth) + Send + Sync + 'static) {
        self.observers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Box::new(observer));
    }

    pub(crate) fn notify_authentication_updated(&self, auth: &Auth) {
        let observers = self.observers.lock().unwrap_or_else(|e| e.into_inner());
        for observer in observers.iter() {
            observer(auth);
        }
    }

    /// 認証が必要な呼び出しの前に、有効なトークンを取得する
    ///
    /// - セッション未設定: `Unauthorized`（"No AuthenticationInfo set"）
    /// - 失効済み: 保存済みトークンでサイレントリフレッシュを試み、
    ///   成功すればセッションを差し替えて新しいトークンを返す。
    ///   失敗すれば `Unauthorized`。
    ///
    /// リフレッシュはロックで直列化され、同時に失効を踏んだ呼び出しが
    /// あっても失効イベントごとに1回しか実行されない。
    pub(crate) async fn valid_token(&self) -> ApiResult<String> {
        let current = self
            .authentication_info()
            .ok_or_else(VidMeError::no_authentication)?;

        if !current.is_expired(Utc::now()) {
            return Ok(current.token);
        }

        let _refresh_guard = self.refresh_lock.lock().await;

        // ロック待ちの間に別の呼び出しがリフレッシュを終えていることがある
        let current = self
            .authentication_info()
            .ok_or_else(VidMeError::no_authentication)?;
        if !current.is_expired(Utc::now()) {
            return Ok(current.token);
        }

        let response = self.check_token_request(&current.token).await.map_err(|e| {
            match e {
                VidMeError::Api { error, .. } => VidMeError::unauthorized(format!(
                    "session expired and could not be refreshed: {}",
                    error
                )),
                other => other,
            }
        })?;

        let auth = response.auth.ok_or_else(|| {
            VidMeError::unauthorized("session expired and refresh returned no auth")
        })?;

        self.set_authentication(auth.clone());
        self.notify_authentication_updated(&auth);

        Ok(auth.token)
    }

    /// トークンと（設定されていれば）デバイス情報を含むパラメータを作成
    pub(crate) async fn authorized_params(&self) -> ApiResult<RequestParameters> {
        let token = self.valid_token().await?;
        let mut params = self.base_params();
        params.add("token", token);
        Ok(params)
    }

    /// セッションがあればトークンを付けるパラメータを作成（認証任意のエンドポイント用）
    pub(crate) fn optional_auth_params(&self) -> RequestParameters {
        let mut params = self.base_params();
        if let Some(auth) = self.authentication_info() {
            params.add_string("token", Some(&auth.token));
        }
        params
    }

    /// ユーザー名とパスワードで認証する
    ///
    /// `POST auth/create`。成功するとセッションがこのクライアントに保存される。
    pub async fn authenticate(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
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

        let response: AuthResponse = self.post("auth/create", &params).await?;
        if let Some(auth) = &response.auth {
            self.set_authentication(auth.clone());
        }

        Ok(response)
    }

    /// トークンの有効性を確認する
    ///
    /// `POST auth/check`。成功するとレスポンスのセッションで現在のセッションを
    /// 差し替える。
    pub async fn check_auth_token(&self, token: &str) -> ApiResult<AuthResponse> {
        if token.is_empty() {
            return Err(VidMeError::validation(
                "token",
                "token cannot be null or empty",
            ));
        }

        let response = self.check_token_request(token).await?;
        if let Some(auth) = &response.auth {
            self.set_authentication(auth.clone());
        }

        Ok(response)
    }

    /// `auth/check` の生リクエスト（セッションの書き換えはしない）
    async fn check_token_request(&self, token: &str) -> ApiResult<AuthResponse> {
        let mut params = self.base_params();
        params.add("token", token);

        self.post("auth/check", &params).await
    }

    /// 現在のトークンを失効させる
    ///
    /// `POST auth/delete`。成功するとこのクライアントのセッションも破棄される。
    pub async fn delete_auth_token(&self) -> ApiResult<bool> {
        let params = self.authorized_params().await?;
        let response: StatusResponse = self.post("auth/delete", &params).await?;

        if response.status {
            self.clear_authentication();
        }

        Ok(response.status)
    }

    /// OAuth認可コードをトークンと交換する
    ///
    /// `POST oauth/token`。成功するとセッションがこのクライアントに保存される。
    pub async fn exchange_code_for_token(
        &self,
        code: &str,
        client_id: &str,
        client_secret: &str,
    ) -> ApiResult<AuthResponse> {
        if code.is_empty() {
            return Err(VidMeError::validation("code", "code cannot be null or empty"));
        }
        if client_id.is_empty() {
            return Err(VidMeError::validation(
                "clientId",
                "client id cannot be null or empty",
            ));
        }
        if client_secret.is_empty() {
            return Err(VidMeError::validation(
                "clientSecret",
                "client secret cannot be null or empty",
            ));
        }

        let mut params = self.base_params();
        params.add("grant_type", "authorization_code");
        params.add("code", code);
        params.add("client_id", client_id);
        params.add("client_secret", client_secret);

        let response: AuthResponse = self.post("oauth/token", &params).await?;
        if let Some(auth) = &response.auth {
            self.set_authentication(auth.clone());
        }

        Ok(response)
    }

    /// OAuth認可URLを構築する（ネットワーク呼び出しなしの純粋な関数）
    ///
    /// スコープはワイヤ文字列を空白区切りで連結する。
    pub fn auth_url(
        client_id: &str,
        redirect_url: &str,
        scopes: &[Scope],
        auth_type: AuthType,
    ) -> String {
        let scope = scopes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{}?client_id={}&redirect_uri={}&scope={}&response_type={}",
            APP_CONFIG.api.authorize_endpoint, client_id, redirect_url, scope, auth_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    const REFRESHED_AUTH_BODY: &str = r#"{"status": true, "auth": {"token": "refreshed", "expires": "2038-01-01 00:00:00", "user_id": "1"}}"#;

    /// 固定レスポンスを返すHTTPリスナーを立て、ベースURLと受信回数カウンタを返す
    async fn spawn_refresh_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, Arc<AtomicUsize>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                // リクエストは小さいので1回の読み取りで十分
                let mut buf = vec![0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body,
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        (format!("http://{}/", addr), hits)
    }

    fn expired_auth() -> Auth {
        Auth {
            token: "stale".to_string(),
            expires: Some(Utc::now() - chrono::Duration::minutes(5)),
            user_id: "1".to_string(),
        }
    }

    #[test]
    fn test_auth_url() {
        let url = VidMeClient::auth_url(
            "cid",
            "https://cb",
            &[Scope::Basic, Scope::Videos],
            AuthType::Code,
        );
        assert_eq!(
            url,
            "https://vid.me/oauth/authorize?client_id=cid&redirect_uri=https://cb&scope=basic videos&response_type=code"
        );
    }

    #[test]
    fn test_auth_url_token_response_type() {
        let url = VidMeClient::auth_url("cid", "https://cb", &[Scope::Account], AuthType::Token);
        assert!(url.ends_with("scope=account&response_type=token"));
    }

    #[test]
    fn test_set_and_clear_authentication() {
        let client = VidMeClient::new().unwrap();
        assert!(client.authentication_info().is_none());

        let auth = Auth {
            token: "tok".to_string(),
            expires: None,
            user_id: "1".to_string(),
        };
        client.set_authentication(auth);
        assert_eq!(client.authentication_info().unwrap().token, "tok");

        client.clear_authentication();
        assert!(client.authentication_info().is_none());
    }

    #[test]
    fn test_set_authentication_replaces_wholesale() {
        // マージではなく丸ごと差し替えであることを確認
        let client = VidMeClient::new().unwrap();
        client.set_authentication(Auth {
            token: "old".to_string(),
            expires: Some(Utc::now()),
            user_id: "1".to_string(),
        });
        client.set_authentication(Auth {
            token: "new".to_string(),
            expires: None,
            user_id: "2".to_string(),
        });

        let auth = client.authentication_info().unwrap();
        assert_eq!(auth.token, "new");
        assert_eq!(auth.user_id, "2");
        assert!(auth.expires.is_none());
    }

    #[tokio::test]
    async fn test_valid_token_without_session_is_unauthorized() {
        let client = VidMeClient::new().unwrap();
        let result = client.valid_token().await;

        match result {
            Err(VidMeError::Unauthorized { message }) => {
                assert_eq!(message, "No AuthenticationInfo set");
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_valid_token_returns_unexpired_token() {
        let client = VidMeClient::new().unwrap();
        client.set_authentication(Auth {
            token: "tok".to_string(),
            expires: Some(Utc::now() + chrono::Duration::hours(1)),
            user_id: "1".to_string(),
        });

        assert_eq!(client.valid_token().await.unwrap(), "tok");
    }

    #[tokio::test]
    async fn test_authorized_call_without_session_fails_before_network() {
        let client = VidMeClient::new().unwrap();
        let result = client.delete_auth_token().await;
        assert!(matches!(result, Err(VidMeError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_silent_refresh_swaps_session_and_notifies_once() {
        let (base_url, _hits) = spawn_refresh_server("HTTP/1.1 200 OK", REFRESHED_AUTH_BODY).await;
        let client = VidMeClient::with_base_url(base_url).unwrap();
        client.set_authentication(expired_auth());

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        client.on_authentication_updated(move |auth| {
            assert_eq!(auth.token, "refreshed");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let token = client.valid_token().await.unwrap();
        assert_eq!(token, "refreshed");

        // 観測者はリフレッシュ成功ごとにちょうど1回発火する
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // セッションは新しいものに丸ごと差し替わっている
        let auth = client.authentication_info().unwrap();
        assert_eq!(auth.token, "refreshed");
        assert!(!auth.is_expired(Utc::now()));
    }

    #[tokio::test]
    async fn test_concurrent_expired_callers_share_one_refresh() {
        let (base_url, hits) = spawn_refresh_server("HTTP/1.1 200 OK", REFRESHED_AUTH_BODY).await;
        let client = VidMeClient::with_base_url(base_url).unwrap();
        client.set_authentication(expired_auth());

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        client.on_authentication_updated(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let (a, b, c) = tokio::join!(
            client.valid_token(),
            client.valid_token(),
            client.valid_token()
        );
        assert_eq!(a.unwrap(), "refreshed");
        assert_eq!(b.unwrap(), "refreshed");
        assert_eq!(c.unwrap(), "refreshed");

        // 失効イベントにつきトークンチェックは1回、通知も1回だけ
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_is_unauthorized() {
        let (base_url, _hits) = spawn_refresh_server(
            "HTTP/1.1 401 Unauthorized",
            r#"{"error": "invalid token"}"#,
        )
        .await;
        let client = VidMeClient::with_base_url(base_url).unwrap();
        client.set_authentication(expired_auth());

        let result = client.valid_token().await;
        match result {
            Err(VidMeError::Unauthorized { message }) => {
                assert!(message.contains("invalid token"));
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }

        // 失敗時はセッションを差し替えない
        assert_eq!(client.authentication_info().unwrap().token, "stale");
    }

    #[test]
    fn test_session_survives_lock_poisoning() {
        let client = VidMeClient::new().unwrap();
        client.set_authentication(Auth {
            token: "tok".to_string(),
            expires: None,
            user_id: "1".to_string(),
        });

        // 書き込みガードを保持したままパニックさせてロックを毒化する
        let poisoned = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = client.auth.write().unwrap();
                panic!("poison the session lock");
            })
            .join()
        });
        assert!(poisoned.is_err());

        // 毒化後も読み書きとも続行できる
        assert_eq!(client.authentication_info().unwrap().token, "tok");
        client.set_authentication(Auth {
            token: "next".to_string(),
            expires: None,
            user_id: "2".to_string(),
        });
        assert_eq!(client.authentication_info().unwrap().token, "next");
    }

    #[test]
    fn test_observers_are_notified() {
        let client = VidMeClient::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        client.on_authentication_updated(move |auth| {
            assert_eq!(auth.token, "refreshed");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let auth = Auth {
            token: "refreshed".to_string(),
            expires: None,
            user_id: "1".to_string(),
        };
        client.notify_authentication_updated(&auth);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_authenticate_validates_arguments() {
        let client = VidMeClient::new().unwrap();

        let result = client.authenticate("", "secret").await;
        match result {
            Err(VidMeError::Validation { param, .. }) => assert_eq!(param, "username"),
            other => panic!("expected Validation error, got {other:?}"),
        }

        let result = client.authenticate("user", "").await;
        match result {
            Err(VidMeError::Validation { param, .. }) => assert_eq!(param, "password"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
