/// ワイヤ文字列つき列挙型
///
/// APIとの境界で使う文字列（ワイヤ文字列）はプログラム上の名前と別に定義する。
/// デコードはワイヤ文字列（大文字小文字を区別しない）または序数の整数を受け付け、
/// エンコードは常にワイヤ文字列の小文字を出力する。
/// 未知のワイヤ文字列・範囲外の序数はデコードエラーとする。
use std::fmt;

/// ワイヤ文字列とのマッピングを持つ列挙型の共通トレイト
pub trait WireEnum: Copy + Sized {
    /// 登録されたワイヤ文字列を返す
    fn wire_str(&self) -> &'static str;

    /// ワイヤ文字列から復元（大文字小文字を区別しない）
    fn from_wire(value: &str) -> Option<Self>;

    /// 序数（宣言順の整数）から復元
    fn from_ordinal(value: i64) -> Option<Self>;
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl WireEnum for $name {
            fn wire_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            fn from_wire(value: &str) -> Option<Self> {
                $(
                    if value.eq_ignore_ascii_case($wire) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            fn from_ordinal(value: i64) -> Option<Self> {
                const VARIANTS: &[$name] = &[ $( $name::$variant, )+ ];
                usize::try_from(value).ok().and_then(|i| VARIANTS.get(i).copied())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.wire_str().to_lowercase())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.wire_str().to_lowercase())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct WireVisitor;

                impl serde::de::Visitor<'_> for WireVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "a wire string or ordinal for {}", stringify!($name))
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        <$name as WireEnum>::from_wire(value).ok_or_else(|| {
                            E::custom(format!(
                                "unknown {} wire string: {value:?}",
                                stringify!($name)
                            ))
                        })
                    }

                    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        <$name as WireEnum>::from_ordinal(value).ok_or_else(|| {
                            E::custom(format!(
                                "{} ordinal out of range: {value}",
                                stringify!($name)
                            ))
                        })
                    }

                    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        self.visit_i64(value as i64)
                    }
                }

                deserializer.deserialize_any(WireVisitor)
            }
        }
    };
}

wire_enum! {
    /// コメント・動画への投票
    pub enum Vote {
        Up => "1",
        Down => "-1",
        Neutral => "0",
    }
}

wire_enum! {
    /// ソート方向
    pub enum SortDirection {
        Ascending => "ASC",
        Descending => "DESC",
    }
}

wire_enum! {
    /// OAuthスコープ
    pub enum Scope {
        AuthManagement => ":auth_management",
        ClientManagement => ":client_management",
        Account => "account",
        Basic => "basic",
        Channels => "channels",
        Comments => "comments",
        Videos => "videos",
        VideoUpload => "video_upload",
        Votes => "votes",
    }
}

wire_enum! {
    /// 通知種別
    pub enum NotificationType {
        /// モデレーターを務めるチャンネルに誰かが登録したとき
        ChannelSubscribed => "channel-subscribed",
        /// 自分のコメントに返信があったとき（現在は無効）
        CommentReply => "comment-replied-to",
        /// 誰かにフォローされたとき
        UserSubscribed => "user-subscribed",
        /// サインアップ直後
        UserWelcome => "user-welcome",
        /// 自分の動画にコメントがついたとき
        VideoComment => "video-commented",
        /// 自分の動画がアップボートされたとき
        VideoUpVoted => "video-upvoted",
    }
}

wire_enum! {
    /// 動画のアップロード元
    pub enum VideoSource {
        Computer => "computer",
        Library => "library",
        Camera => "camera",
        ShareIntent => "shareintent",
        WebCam => "webcam",
    }
}

wire_enum! {
    /// プッシュ通知の購読種別
    pub enum SubscriptionType {
        Apple => "apn",
        Android => "gcm",
        Web => "web",
    }
}

wire_enum! {
    /// 位置情報検索のソートキー
    pub enum LocationOrderBy {
        LikesCount => "likes_count",
        HotScore => "hot_score",
    }
}

wire_enum! {
    /// OAuth認可URLのレスポンス種別
    pub enum AuthType {
        Code => "code",
        Token => "token",
    }
}
