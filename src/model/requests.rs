/// リクエストDTO
///
/// 複数のパラメータをまとめて渡すエンドポイント用の入力レコード。
/// 各フィールドは省略可能で、省略されたものはリクエストに含まれない。
use crate::api::params::{BoolFormat, RequestParameters};
use crate::model::enums::{LocationOrderBy, VideoSource};

/// 動画の作成・編集パラメータ
///
/// `video/request`・`video/upload`・`video/{id}/edit` で使用する。
#[derive(Debug, Clone, Default)]
pub struct VideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub source: Option<VideoSource>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub four_square_place_id: Option<String>,
    pub four_square_place_name: Option<String>,
    pub is_private: Option<bool>,
    pub channel_id: Option<String>,
    /// アップロードするファイルのサイズ（バイト）
    pub video_size: Option<i64>,
    pub filename: Option<String>,
    /// NSFWの指定。APIの制約上 NSFW→SFW への変更はできない。
    pub is_nsfw: Option<bool>,
}

impl VideoRequest {
    /// フォーム/クエリパラメータへ変換する
    pub fn fill(&self, params: &mut RequestParameters) {
        params.add_string("title", self.title.as_deref());
        params.add_string("description", self.description.as_deref());
        params.add_enum("source", self.source);
        params.add_float("latitude", self.latitude);
        params.add_float("longitude", self.longitude);
        params.add_string("place_id", self.four_square_place_id.as_deref());
        params.add_string("place_name", self.four_square_place_name.as_deref());
        params.add_bool("private", self.is_private, BoolFormat::Binary);
        params.add_string("channel", self.channel_id.as_deref());
        params.add_int("size", self.video_size);
        params.add_string("filename", self.filename.as_deref());
        params.add_bool("nsfw", self.is_nsfw, BoolFormat::Binary);
    }
}

/// 位置情報検索パラメータ
///
/// 座標（latitude + longitude）かジオフェンスIDのどちらかが必須。
#[derive(Debug, Clone, Default)]
pub struct LocationRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geofence_id: Option<String>,
    /// 検索半径
    pub distance: Option<f64>,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub order: Option<LocationOrderBy>,
}

impl LocationRequest {
    /// 座標またはジオフェンスIDを持つか
    pub fn has_location(&self) -> bool {
        (self.latitude.is_some() && self.longitude.is_some()) || self.geofence_id.is_some()
    }

    /// フォーム/クエリパラメータへ変換する
    pub fn fill(&self, params: &mut RequestParameters) {
        params.add_float("latitude", self.latitude);
        params.add_float("longitude", self.longitude);
        params.add_string("geofence", self.geofence_id.as_deref());
        params.add_float("distance", self.distance);
        params.add_float("from", self.from);
        params.add_float("to", self.to);
        params.add_int("offset", self.offset);
        params.add_int("limit", self.limit);
        params.add_enum("order", self.order);
    }
}

/// OAuthアプリケーション登録パラメータ
#[derive(Debug, Clone, Default)]
pub struct AppRequest {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub organization: Option<String>,
    pub redirect_uri: Option<String>,
}

impl AppRequest {
    /// フォームパラメータへ変換する
    pub fn fill(&self, params: &mut RequestParameters) {
        params.add_string("name", self.name.as_deref());
        params.add_string("website", self.website.as_deref());
        params.add_string("description", self.description.as_deref());
        params.add_string("organization", self.organization.as_deref());
        params.add_string("redirect_uri_prefix", self.redirect_uri.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_video_request_adds_nothing() {
        let mut params = RequestParameters::new();
        VideoRequest::default().fill(&mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn test_video_request_fill() {
        let request = VideoRequest {
            title: Some("Title".to_string()),
            is_private: Some(true),
            channel_id: Some("ch1".to_string()),
            source: Some(VideoSource::Camera),
            ..Default::default()
        };

        let mut params = RequestParameters::new();
        request.fill(&mut params);

        assert_eq!(params.get("title"), Some("Title"));
        assert_eq!(params.get("private"), Some("1"));
        assert_eq!(params.get("channel"), Some("ch1"));
        assert_eq!(params.get("source"), Some("camera"));
        assert!(!params.contains("description"));
    }

    #[test]
    fn test_location_request_requires_coordinates_or_geofence() {
        let empty = LocationRequest::default();
        assert!(!empty.has_location());

        // 緯度だけでは不十分
        let lat_only = LocationRequest {
            latitude: Some(51.5),
            ..Default::default()
        };
        assert!(!lat_only.has_location());

        let coords = LocationRequest {
            latitude: Some(51.5),
            longitude: Some(-0.1),
            ..Default::default()
        };
        assert!(coords.has_location());

        let geofence = LocationRequest {
            geofence_id: Some("gf1".to_string()),
            ..Default::default()
        };
        assert!(geofence.has_location());
    }

    #[test]
    fn test_location_request_fill() {
        let request = LocationRequest {
            latitude: Some(51.5),
            longitude: Some(-0.1),
            limit: Some(20),
            order: Some(LocationOrderBy::HotScore),
            ..Default::default()
        };

        let mut params = RequestParameters::new();
        request.fill(&mut params);

        assert_eq!(params.get("latitude"), Some("51.5"));
        assert_eq!(params.get("longitude"), Some("-0.1"));
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("order"), Some("hot_score"));
        assert!(!params.contains("geofence"));
    }
}
