use crate::error::VisionError;

use super::{Vision, VisionKind};

/// Durable form of a [`Vision`]: strategy tag, distance and display fields.
///
/// Cached regions are derived state and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisionRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub kind: VisionKind,
    pub distance: i32,
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
}

#[cfg(feature = "serde")]
const fn enabled_by_default() -> bool {
    true
}

impl TryFrom<VisionRecord> for Vision {
    type Error = VisionError;

    /// Re-validates the stored distance; the region cache starts empty.
    fn try_from(record: VisionRecord) -> Result<Self, Self::Error> {
        let mut vision = Vision::new(record.kind, record.distance)?;
        vision.set_name(record.name);
        vision.set_enabled(record.enabled);
        Ok(vision)
    }
}

impl From<&Vision> for VisionRecord {
    fn from(vision: &Vision) -> Self {
        Self {
            name: vision.name().map(str::to_owned),
            kind: vision.kind(),
            // distance is validated to fit in i32 on the way in
            distance: i32::try_from(vision.distance()).unwrap_or(i32::MAX),
            enabled: vision.is_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TokenId;

    #[test]
    fn record_keeps_descriptive_fields() {
        let vision = Vision::facing_conic(TokenId(4), 12)
            .unwrap()
            .with_name("Lantern");
        let record = VisionRecord::from(&vision);
        assert_eq!(record.name.as_deref(), Some("Lantern"));
        assert_eq!(record.distance, 12);

        let restored = Vision::try_from(record).unwrap();
        assert_eq!(restored.kind(), VisionKind::FacingConic { token: TokenId(4) });
        assert_eq!(restored.label(), vision.label());
    }

    #[test]
    fn invalid_distance_is_rejected() {
        let record = VisionRecord {
            name: None,
            kind: VisionKind::Round,
            distance: 0,
            enabled: true,
        };
        assert_eq!(
            Vision::try_from(record).unwrap_err(),
            VisionError::InvalidDistance(0)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_shape() {
        let record: VisionRecord = serde_json::from_str(
            r#"{"kind":{"type":"facing_conic","token":9},"distance":30}"#,
        )
        .unwrap();
        assert_eq!(record.kind, VisionKind::FacingConic { token: TokenId(9) });
        assert!(record.enabled);
        assert_eq!(record.name, None);
    }
}
