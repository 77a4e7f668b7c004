//! Value Objects
//!
//! 不変で、値によって同一性が決まるドメインの基本型。

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Identity の最大文字数
pub const IDENTITY_MAX_LENGTH: usize = 128;

/// トランスポート層が接続ごとに発行する不透明なハンドル
///
/// 接続が生きている間は再利用されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectionHandle(Uuid);

impl ConnectionHandle {
    /// 新しいハンドルを発行（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 外部システムのユーザー識別子
///
/// クライアントが `auth` で名乗る値をそのまま信頼する。
/// 数値 ID も文字列に正規化して保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity(String);

impl Identity {
    /// 新しい Identity を作成
    ///
    /// # Errors
    ///
    /// - 空文字列（空白のみを含む）の場合
    /// - `IDENTITY_MAX_LENGTH` 文字を超える場合
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::IdentityEmpty);
        }
        let length = value.chars().count();
        if length > IDENTITY_MAX_LENGTH {
            return Err(ValueObjectError::IdentityTooLong {
                length,
                max: IDENTITY_MAX_LENGTH,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<i64> for Identity {
    fn from(value: i64) -> Self {
        // a decimal integer is never empty and never longer than 20 chars
        Self(value.to_string())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 接続の役割（保存されず、レジストリから都度導出される）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// アクティブな教師ハンドル
    Teacher,
    /// 認証済みで、アクティブな教師ではない接続
    Student,
    /// 未登録、または未認証
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// 板書の 1 点
///
/// `start` はクライアントが送った値をそのまま保持する（省略時は `None`）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub x: f64,
    pub y: f64,
    pub start: Option<bool>,
}

impl Stroke {
    /// 新しい Stroke を作成
    ///
    /// # Errors
    ///
    /// 座標が有限の値でない場合
    pub fn new(x: f64, y: f64, start: Option<bool>) -> Result<Self, ValueObjectError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ValueObjectError::StrokeNotFinite);
        }
        Ok(Self { x, y, start })
    }
}
