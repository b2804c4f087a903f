//! Named vision presets.
//!
//! A preset is the durable description of a vision a token can be given:
//! strategy, distance, display name and enabled flag. Facing cones need a
//! token to follow, which is supplied when the preset is instantiated.

use vision_core::{CodedError, TokenId, Vision, VisionError, VisionStrategy};

/// Errors raised while turning presets into visions.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PresetError {
    #[error("unknown preset '{0}'")]
    Unknown(String),

    #[error("preset '{0}' follows a token's facing; a token id is required")]
    MissingToken(String),

    #[error("duplicate preset name '{0}'")]
    Duplicate(String),

    #[error("preset '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: VisionError,
    },
}

impl CodedError for PresetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "PRESET_UNKNOWN",
            Self::MissingToken(_) => "PRESET_MISSING_TOKEN",
            Self::Duplicate(_) => "PRESET_DUPLICATE",
            Self::Invalid { source, .. } => source.error_code(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preset {
    pub name: String,
    pub kind: VisionStrategy,
    /// Distance in distance units (feet, meters, ...).
    pub distance: i32,
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
}

#[cfg(feature = "serde")]
const fn enabled_by_default() -> bool {
    true
}

impl Preset {
    pub fn new(name: impl Into<String>, kind: VisionStrategy, distance: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            distance,
            enabled: true,
        }
    }

    /// Same label the instantiated vision reports.
    pub fn label(&self) -> String {
        format!("{} ({}-{})", self.name, self.kind.short_name(), self.distance)
    }

    /// Instantiates the preset as a fresh vision with an empty cache.
    ///
    /// # Errors
    ///
    /// [`PresetError::MissingToken`] for a facing cone without `token`, and
    /// [`PresetError::Invalid`] when the stored distance is not positive.
    pub fn instantiate(&self, token: Option<TokenId>) -> Result<Vision, PresetError> {
        let kind = self
            .kind
            .bind(token)
            .ok_or_else(|| PresetError::MissingToken(self.name.clone()))?;
        let mut vision = Vision::new(kind, self.distance)
            .map_err(|source| self.invalid(source))?
            .with_name(self.name.clone());
        vision.set_enabled(self.enabled);
        Ok(vision)
    }

    /// Checks the fields that do not depend on a token.
    ///
    /// # Errors
    ///
    /// [`PresetError::Invalid`] when the distance is not positive.
    pub fn validate(&self) -> Result<(), PresetError> {
        if self.distance <= 0 {
            return Err(self.invalid(VisionError::InvalidDistance(self.distance)));
        }
        Ok(())
    }

    fn invalid(&self, source: VisionError) -> PresetError {
        PresetError::Invalid {
            name: self.name.clone(),
            source,
        }
    }
}

/// Ordered set of presets with unique names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetCatalog {
    #[cfg_attr(feature = "serde", serde(default))]
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Builds a catalog, rejecting duplicate names and invalid distances.
    ///
    /// # Errors
    ///
    /// The first [`PresetError`] found, in catalog order.
    pub fn new(presets: Vec<Preset>) -> Result<Self, PresetError> {
        let catalog = Self { presets };
        catalog.validate()?;
        Ok(catalog)
    }

    /// One preset per strategy, the selection offered when nothing is configured.
    pub fn builtin() -> Self {
        const DEFAULT_DISTANCE: i32 = 30;
        Self {
            presets: VisionStrategy::ALL
                .into_iter()
                .map(|kind| Preset::new(kind.short_name(), kind, DEFAULT_DISTANCE))
                .collect(),
        }
    }

    /// # Errors
    ///
    /// See [`PresetCatalog::new`].
    pub fn validate(&self) -> Result<(), PresetError> {
        for (index, preset) in self.presets.iter().enumerate() {
            preset.validate()?;
            if self.presets[..index].iter().any(|p| p.name == preset.name) {
                return Err(PresetError::Duplicate(preset.name.clone()));
            }
        }
        Ok(())
    }

    /// Looks a preset up by exact name, falling back to a case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.presets.iter().find(|p| p.name.eq_ignore_ascii_case(name)))
    }

    /// # Errors
    ///
    /// [`PresetError::Unknown`] when no preset is called `name`, otherwise
    /// see [`Preset::instantiate`].
    pub fn instantiate(&self, name: &str, token: Option<TokenId>) -> Result<Vision, PresetError> {
        let preset = self
            .get(name)
            .ok_or_else(|| PresetError::Unknown(name.to_owned()))?;
        tracing::debug!(preset = %preset.name, kind = %preset.kind, "instantiating vision preset");
        preset.instantiate(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
