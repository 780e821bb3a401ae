/// HTTPクライアント
///
/// vid.me APIとの通信を担当するリクエストディスパッチャ。
/// URL構築・パラメータのエンコード（フォームPOST・クエリGET・マルチパート）・
/// トークンの付与・レスポンスエンベロープの展開までを受け持つ。
/// リトライ・キャッシュ・レート制御は行わない。
use crate::api::error::{ApiResult, VidMeError};
use crate::api::params::RequestParameters;
use crate::config::APP_CONFIG;
use crate::model::entities::Auth;
use crate::model::responses::ErrorResponse;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::{Mutex, RwLock};
use std::time::Duration;

/// セッション更新の観測者
pub(crate) type AuthObserver = Box<dyn Fn(&Auth) + Send + Sync>;

/// デバイス識別情報
///
/// 設定されている場合、すべてのリクエストに `device` / `platform` として付与される。
#[derive(Debug, Clone)]
pub struct DeviceContext {
    pub device_id: String,
    pub platform: String,
}

/// マルチパート送信するファイル
///
/// ファイル全体をメモリに載せてから送る（ストリーミングはしない）。
#[derive(Debug, Clone)]
pub struct FileSource {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub filename: String,
}

impl FileSource {
    pub fn new(
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
            filename: filename.into(),
        }
    }
}

/// vid.me APIクライアント
///
/// セッション（認証情報）はこのインスタンスがプロセスメモリ上にのみ保持する。
/// 各操作は独立に非同期で、複数同時に呼び出してよい。
pub struct VidMeClient {
    pub(crate) http: Client,
    base_url: String,
    device: Option<DeviceContext>,

    /// 現在のセッション。認証レスポンスのたびに丸ごと差し替える。
    pub(crate) auth: RwLock<Option<Auth>>,

    /// サイレントリフレッシュの直列化用。失効イベントごとに最大1回だけ更新する。
    pub(crate) refresh_lock: tokio::sync::Mutex<()>,

    /// セッション更新の観測者
    pub(crate) observers: Mutex<Vec<AuthObserver>>,
}

impl VidMeClient {
    /// 新しいAPIクライアントを作成
    pub fn new() -> ApiResult<Self> {
        Self::build(APP_CONFIG.api.endpoint.clone(), None)
    }

    /// デバイス識別情報つきでAPIクライアントを作成
    ///
    /// # Arguments
    /// * `device_id` - デバイス識別子
    /// * `platform` - プラットフォーム名（例: "android"）
    pub fn with_device(
        device_id: impl Into<String>,
        platform: impl Into<String>,
    ) -> ApiResult<Self> {
        Self::build(
            APP_CONFIG.api.endpoint.clone(),
            Some(DeviceContext {
                device_id: device_id.into(),
                platform: platform.into(),
            }),
        )
    }

    /// ベースURLを差し替えてAPIクライアントを作成（テスト用）
    #[cfg(test)]
    pub(crate) fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::build(base_url.into(), None)
    }

    fn build(base_url: String, device: Option<DeviceContext>) -> ApiResult<Self> {
        let timeout = Duration::from_secs(APP_CONFIG.api.timeout_seconds);

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VidMeError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            device,
            auth: RwLock::new(None),
            refresh_lock: tokio::sync::Mutex::new(()),
            observers: Mutex::new(Vec::new()),
        })
    }

    /// デバイス識別情報を設定（丸ごと差し替え）
    pub fn set_device_and_platform(
        &mut self,
        device_id: impl Into<String>,
        platform: impl Into<String>,
    ) {
        self.device = Some(DeviceContext {
            device_id: device_id.into(),
            platform: platform.into(),
        });
    }

    /// 現在のデバイス識別情報
    pub fn device(&self) -> Option<&DeviceContext> {
        self.device.as_ref()
    }

    /// APIのベースURL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URLを構築
    pub(crate) fn create_url(&self, method: &str) -> String {
        format!("{}{}", self.base_url, method)
    }

    /// デバイス識別情報だけを含むパラメータを作成
    ///
    /// キーは小文字の `device` / `platform` に統一する。
    pub(crate) fn base_params(&self) -> RequestParameters {
        let mut params = RequestParameters::new();
        if let Some(device) = &self.device {
            params.add_string("device", Some(&device.device_id));
            params.add_string("platform", Some(&device.platform));
        }
        params
    }

    /// フォームPOSTを送信してレスポンスをデコード
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &RequestParameters,
    ) -> ApiResult<T> {
        let url = self.create_url(method);
        let request = self.http.post(&url).form(params.entries());

        self.dispatch(request, method, "POST").await
    }

    /// クエリGETを送信してレスポンスをデコード
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &RequestParameters,
    ) -> ApiResult<T> {
        let url = self.create_url(method);
        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params.entries());
        }

        self.dispatch(request, method, "GET").await
    }

    /// マルチパートPOSTを送信してレスポンスをデコード
    ///
    /// すべてのパラメータをテキストパートとして、ファイルを `filedata` という名前の
    /// バイナリパートとして送る。
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &RequestParameters,
        file: FileSource,
    ) -> ApiResult<T> {
        let url = self.create_url(method);

        let mut form = Form::new();
        for (key, value) in params.entries() {
            form = form.text(key.clone(), value.clone());
        }

        let part = Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.content_type)
            .map_err(|e| {
                VidMeError::validation("contentType", format!("invalid content type: {}", e))
            })?;
        form = form.part("filedata", part);

        let request = self.http.post(&url).multipart(form);

        self.dispatch(request, method, "POST").await
    }

    /// リクエストを送信し、エンベロープを通してデコードする
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        verb: &str,
    ) -> ApiResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Self::map_transport_error(e, verb, method))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            VidMeError::network(format!("Failed to read response for {} {}: {}", verb, method, e))
        })?;

        Self::parse_response(status, &body)
    }

    /// 生のレスポンスをエンベロープとして解釈する
    ///
    /// トランスポートが成功(2xx)を示す場合に加え、非2xxでもボディに
    /// 成功マーカー(`"status":true`)がある場合は成功として扱う
    /// （APIが実際に返す非一貫なレスポンスへの対応で、両方のチェックが必要）。
    /// それ以外はエラーレスポンスとしてデコードし、それ自体が失敗したら
    /// デコードエラーを伝播する。空ボディはデコードエラー。
    pub(crate) fn parse_response<T: DeserializeOwned>(
        status: StatusCode,
        body: &str,
    ) -> ApiResult<T> {
        if body.trim().is_empty() {
            return Err(VidMeError::decode(format!(
                "empty response body (HTTP {})",
                status.as_u16()
            )));
        }

        if status.is_success() || has_success_marker(body) {
            return serde_json::from_str(body)
                .map_err(|e| VidMeError::decode(format!("Failed to parse response: {}", e)));
        }

        let error: ErrorResponse = serde_json::from_str(body)
            .map_err(|e| VidMeError::decode(format!("Failed to parse error response: {}", e)))?;

        Err(VidMeError::Api {
            status_code: status.as_u16(),
            error: error.error,
            code: error.code,
        })
    }

    /// reqwestのエラーをエラー分類に写す
    fn map_transport_error(error: reqwest::Error, verb: &str, method: &str) -> VidMeError {
        if error.is_timeout() {
            VidMeError::Timeout {
                operation: format!("{} {}", verb, method),
            }
        } else if error.is_connect() {
            VidMeError::network(format!(
                "Connection failed for {} {}: {}",
                verb, method, error
            ))
        } else {
            VidMeError::network(format!("Request failed for {} {}: {}", verb, method, error))
        }
    }
}

/// ボディに成功マーカーが含まれるか
fn has_success_marker(body: &str) -> bool {
    body.contains(r#""status":true"#) || body.contains(r#""status": true"#)
}
