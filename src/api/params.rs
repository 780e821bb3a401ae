/// リクエストパラメータ
///
/// フォームPOST・クエリGET・マルチパート送信に共通する、
/// 挿入順を保持した key→value のマッピング。
/// 値が存在しない（None・空文字列・空リスト）場合はキー自体を一切出力しない。
use crate::model::enums::WireEnum;
use crate::model::serde_helpers::DATE_FORMAT;
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// bool値のエンコード方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolFormat {
    /// "true" / "false"
    Text,
    /// "1" / "0"
    Binary,
}

/// 挿入順を保持するリクエストパラメータ
#[derive(Debug, Clone, Default)]
pub struct RequestParameters {
    entries: Vec<(String, String)>,
}

impl RequestParameters {
    /// 空のパラメータを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を無条件に追加
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// 文字列値を追加（None・空文字列はスキップ）
    pub fn add_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.add(key, value);
            }
        }
    }

    /// 整数値を追加（Noneはスキップ）
    pub fn add_int(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.add(key, value.to_string());
        }
    }

    /// 浮動小数点値を追加（Noneはスキップ）
    pub fn add_float(&mut self, key: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.add(key, value.to_string());
        }
    }

    /// bool値を追加（Noneはスキップ）
    pub fn add_bool(&mut self, key: &str, value: Option<bool>, format: BoolFormat) {
        if let Some(value) = value {
            let text = match (format, value) {
                (BoolFormat::Text, true) => "true",
                (BoolFormat::Text, false) => "false",
                (BoolFormat::Binary, true) => "1",
                (BoolFormat::Binary, false) => "0",
            };
            self.add(key, text);
        }
    }

    /// 日時値を追加（Noneはスキップ）
    pub fn add_date(&mut self, key: &str, value: Option<DateTime<Utc>>) {
        if let Some(value) = value {
            self.add(key, value.format(DATE_FORMAT).to_string());
        }
    }

    /// 列挙値をワイヤ文字列（小文字）で追加（Noneはスキップ）
    pub fn add_enum<E: WireEnum>(&mut self, key: &str, value: Option<E>) {
        if let Some(value) = value {
            self.add(key, value.wire_str().to_lowercase());
        }
    }

    /// リスト値をカンマ区切りで追加（空リストはスキップ）
    ///
    /// 書式は "a,b,c" 固定。角括弧付きの "[a,b,c]" 形式は採用しない。
    pub fn add_list<T: Display>(&mut self, key: &str, values: &[T]) {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.add(key, joined);
        }
    }

    /// キーに対応する値を取得（テスト用途）
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// キーが含まれるか
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// エントリ一覧（挿入順）
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// エントリが空か
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// エントリ数
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
