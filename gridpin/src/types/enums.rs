use serde::{Deserialize, Serialize};

/// Which edge, if any, a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pin {
    #[default]
    None,
    Left,
    Right,
}

impl Pin {
    pub const fn side(self) -> Option<PinSide> {
        match self {
            Self::None => None,
            Self::Left => Some(PinSide::Left),
            Self::Right => Some(PinSide::Right),
        }
    }

    pub const fn is_pinned(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl From<PinSide> for Pin {
    fn from(side: PinSide) -> Self {
        match side {
            PinSide::Left => Self::Left,
            PinSide::Right => Self::Right,
        }
    }
}

impl From<Option<PinSide>> for Pin {
    fn from(side: Option<PinSide>) -> Self {
        side.map_or(Self::None, Self::from)
    }
}

/// A table edge a column group can be pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Relative,
    Sticky,
}

impl Position {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Sticky => "sticky",
        }
    }
}
