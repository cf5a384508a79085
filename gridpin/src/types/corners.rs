use serde::Serialize;

use super::{Length, PinSide};

/// Per-corner border radii. `None` leaves a corner at its inherited value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Corners {
    #[serde(rename = "borderTopRightRadius", skip_serializing_if = "Option::is_none")]
    pub top_right: Option<Length>,
    #[serde(rename = "borderBottomRightRadius", skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<Length>,
    #[serde(rename = "borderTopLeftRadius", skip_serializing_if = "Option::is_none")]
    pub top_left: Option<Length>,
    #[serde(rename = "borderBottomLeftRadius", skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<Length>,
}

impl Corners {
    pub const fn none() -> Self {
        Self {
            top_right: None,
            bottom_right: None,
            top_left: None,
            bottom_left: None,
        }
    }

    pub fn all(radius: Length) -> Self {
        Self {
            top_right: Some(radius.clone()),
            bottom_right: Some(radius.clone()),
            top_left: Some(radius.clone()),
            bottom_left: Some(radius),
        }
    }

    /// Round the top and bottom corners on one side.
    pub fn side(side: PinSide, radius: Length) -> Self {
        match side {
            PinSide::Left => Self {
                top_left: Some(radius.clone()),
                bottom_left: Some(radius),
                ..Self::none()
            },
            PinSide::Right => Self {
                top_right: Some(radius.clone()),
                bottom_right: Some(radius),
                ..Self::none()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top_right.is_none()
            && self.bottom_right.is_none()
            && self.top_left.is_none()
            && self.bottom_left.is_none()
    }

    /// CSS declarations in `top-left, top-right, bottom-right, bottom-left` order.
    pub(crate) fn declarations(&self) -> impl Iterator<Item = (&'static str, &Length)> {
        [
            ("border-top-left-radius", self.top_left.as_ref()),
            ("border-top-right-radius", self.top_right.as_ref()),
            ("border-bottom-right-radius", self.bottom_right.as_ref()),
            ("border-bottom-left-radius", self.bottom_left.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side() {
        let radius = Length::var("radius");
        let left = Corners::side(PinSide::Left, radius.clone());
        assert_eq!(left.top_left, Some(radius.clone()));
        assert_eq!(left.bottom_left, Some(radius.clone()));
        assert_eq!(left.top_right, None);
        assert_eq!(left.bottom_right, None);

        let right = Corners::side(PinSide::Right, radius.clone());
        assert_eq!(right.top_right, Some(radius.clone()));
        assert_eq!(right.bottom_right, Some(radius));
        assert!(right.top_left.is_none() && right.bottom_left.is_none());
    }

    #[test]
    fn test_empty() {
        assert!(Corners::none().is_empty());
        assert!(Corners::default().is_empty());
        assert!(!Corners::all(Length::px(2.0)).is_empty());
        assert_eq!(Corners::all(Length::px(2.0)).declarations().count(), 4);
    }
}
