/// デシリアライズ補助
///
/// vid.me APIのJSONには形の揺れがある:
/// - 「日付なし」を null・空文字列・"0000-00-00 00:00:00" の3通りで表現する
/// - 論理的にはコレクションのフィールドを、配列ではなく
///   任意キーのオブジェクトや null・文字列で返すことがある
///
/// ここではその揺れを吸収するserdeヘルパーを定義する。
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// APIの日時書式
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 「日付なし」を表すセンチネル値
pub const NO_DATE_SENTINEL: &str = "0000-00-00 00:00:00";

/// `Option<DateTime<Utc>>` 用のコーデック
///
/// `#[serde(default, with = "optional_date")]` で使用する。
/// null・空文字列・センチネル値はすべて None にデコードする。
/// それ以外は "%Y-%m-%d %H:%M:%S"、だめなら RFC 3339 としてパースし、
/// どちらでもなければデコードエラー。
pub mod optional_date {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(text) if text.is_empty() || text == NO_DATE_SENTINEL => Ok(None),
            Some(text) => parse_date_time(&text)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {text:?}"))),
        }
    }
}

/// 日時文字列をパースする（API書式、だめならRFC 3339）
pub fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, DATE_FORMAT) {
        return Some(Utc.from_utc_datetime(&naive));
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// 「オブジェクトまたは配列」フィールド用のデコーダ
///
/// `#[serde(default, deserialize_with = "object_or_array::deserialize")]` で使用する。
/// - JSON配列: そのまま要素順に各要素をデコード
/// - null・文字列: 空のコレクション
/// - JSONオブジェクト: 各値を要素型としてデコードし、キーの出現順に収集
///   （"indexed" なコレクションをオブジェクトで返すAPIへの対応）
/// - それ以外のスカラー: 空のコレクション
pub mod object_or_array {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
                .collect(),
            Value::Object(map) => map
                .into_iter()
                .map(|(_, item)| serde_json::from_value(item).map_err(serde::de::Error::custom))
                .collect(),
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct DateHolder {
        #[serde(default, with = "optional_date")]
        date: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[derive(Debug, Deserialize)]
    struct ItemsHolder {
        #[serde(default, deserialize_with = "object_or_array::deserialize")]
        items: Vec<Item>,
    }

    #[test]
    fn test_null_date_is_absent() {
        let holder: DateHolder = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert!(holder.date.is_none());
    }

    #[test]
    fn test_empty_string_date_is_absent() {
        let holder: DateHolder = serde_json::from_str(r#"{"date": ""}"#).unwrap();
        assert!(holder.date.is_none());
    }

    #[test]
    fn test_sentinel_date_is_absent() {
        let holder: DateHolder =
            serde_json::from_str(r#"{"date": "0000-00-00 00:00:00"}"#).unwrap();
        assert!(holder.date.is_none());
    }

    #[test]
    fn test_missing_date_is_absent() {
        let holder: DateHolder = serde_json::from_str("{}").unwrap();
        assert!(holder.date.is_none());
    }

    #[test]
    fn test_valid_date_is_parsed() {
        let holder: DateHolder =
            serde_json::from_str(r#"{"date": "2015-03-14 09:26:53"}"#).unwrap();
        let date = holder.date.expect("date should be present");
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2015-03-14 09:26:53");
    }

    #[test]
    fn test_rfc3339_date_is_parsed() {
        let holder: DateHolder =
            serde_json::from_str(r#"{"date": "2015-03-14T09:26:53Z"}"#).unwrap();
        assert!(holder.date.is_some());
    }

    #[test]
    fn test_garbage_date_is_an_error() {
        let result: Result<DateHolder, _> = serde_json::from_str(r#"{"date": "not a date"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_array_is_decoded_in_order() {
        let holder: ItemsHolder =
            serde_json::from_str(r#"{"items": [{"id":"1"},{"id":"2"},{"id":"3"}]}"#).unwrap();
        let ids: Vec<&str> = holder.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_null_is_empty_collection() {
        let holder: ItemsHolder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(holder.items.is_empty());
    }

    #[test]
    fn test_string_is_empty_collection() {
        let holder: ItemsHolder = serde_json::from_str(r#"{"items": ""}"#).unwrap();
        assert!(holder.items.is_empty());
    }

    #[test]
    fn test_indexed_object_is_decoded_by_key_order() {
        // "indexed" コレクション: {"a": {...}, "b": {...}} を2要素として扱う
        let holder: ItemsHolder =
            serde_json::from_str(r#"{"items": {"a": {"id":"1"}, "b": {"id":"2"}}}"#).unwrap();
        let ids: Vec<&str> = holder.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
