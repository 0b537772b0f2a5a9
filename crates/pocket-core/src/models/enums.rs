use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::codec::deserialize_int;

#[derive(Debug)]
pub struct EnumParseError {
    enum_name: &'static str,
    value: String,
}

impl EnumParseError {
    fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} value: {}", self.enum_name, self.value)
    }
}

impl std::error::Error for EnumParseError {}

/// Enums the service encodes as decimal strings (`"0"`, `"1"`, ...).
macro_rules! int_coded_enum {
    ($ty:ident, $name:literal, { $($variant:ident = $code:literal),+ $(,)? }) => {
        impl $ty {
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = EnumParseError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(EnumParseError::new($name, value.to_string())),
                }
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.as_i32())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = deserialize_int(deserializer)?;
                i32::try_from(raw)
                    .ok()
                    .and_then(|code| Self::try_from(code).ok())
                    .ok_or_else(|| {
                        serde::de::Error::custom(EnumParseError::new($name, raw.to_string()))
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemStatus {
    #[default]
    Unread,
    Archived,
    Deleted,
}

int_coded_enum!(ItemStatus, "item_status", { Unread = 0, Archived = 1, Deleted = 2 });

impl ItemStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Archived => "archived",
            Self::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaPresence {
    #[default]
    NoMedia,
    HasMedia,
    IsMedia,
}

int_coded_enum!(MediaPresence, "media_presence", { NoMedia = 0, HasMedia = 1, IsMedia = 2 });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Unread,
    Archive,
    All,
}

/// Absence of the filter (`None` at the use site) means "either".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoriteFilter {
    #[serde(rename = "0")]
    Unfavorited,
    #[serde(rename = "1")]
    Favorited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    Video,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Newest,
    Oldest,
    Title,
    Site,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailType {
    Simple,
    Complete,
}

impl State {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Archive => "archive",
            Self::All => "all",
        }
    }
}

impl std::str::FromStr for State {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "unread" => Ok(Self::Unread),
            "archive" => Ok(Self::Archive),
            "all" => Ok(Self::All),
            _ => Err(EnumParseError::new("state", value)),
        }
    }
}

impl FavoriteFilter {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unfavorited => "unfavorited",
            Self::Favorited => "favorited",
        }
    }
}

impl std::str::FromStr for FavoriteFilter {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "unfavorited" | "0" => Ok(Self::Unfavorited),
            "favorited" | "1" => Ok(Self::Favorited),
            _ => Err(EnumParseError::new("favorite", value)),
        }
    }
}

impl ContentType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Image => "image",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "article" => Ok(Self::Article),
            "video" => Ok(Self::Video),
            "image" => Ok(Self::Image),
            _ => Err(EnumParseError::new("content_type", value)),
        }
    }
}

impl Sort {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
            Self::Site => "site",
        }
    }
}

impl std::str::FromStr for Sort {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "title" => Ok(Self::Title),
            "site" => Ok(Self::Site),
            _ => Err(EnumParseError::new("sort", value)),
        }
    }
}

impl DetailType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complete => "complete",
        }
    }
}

impl std::str::FromStr for DetailType {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "simple" => Ok(Self::Simple),
            "complete" => Ok(Self::Complete),
            _ => Err(EnumParseError::new("detail_type", value)),
        }
    }
}
