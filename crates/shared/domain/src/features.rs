use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const PIPELINE_TEMPLATES: &str = "pipeline_templates";
pub const GITOPS: &str = "gitops";
pub const CCM_AUTOSTOPPING: &str = "ccm_autostopping";
pub const FF_TARGETS: &str = "ff_targets";
pub const SRM_SLO: &str = "srm_slo";
pub const NEW_NAV: &str = "new_nav";

bitflags! {
    /// Product feature flags that gate module registration and individual routes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct FeatureFlags: u32 {
        const PIPELINE_TEMPLATES = 1 << 0;
        const GITOPS = 1 << 1;
        const CCM_AUTOSTOPPING = 1 << 2;
        const FF_TARGETS = 1 << 3;
        const SRM_SLO = 1 << 4;
        const NEW_NAV = 1 << 5;

        const ALL = Self::PIPELINE_TEMPLATES.bits()
            | Self::GITOPS.bits()
            | Self::CCM_AUTOSTOPPING.bits()
            | Self::FF_TARGETS.bits()
            | Self::SRM_SLO.bits()
            | Self::NEW_NAV.bits();
    }
}

impl From<&str> for FeatureFlags {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            PIPELINE_TEMPLATES => Self::PIPELINE_TEMPLATES,
            GITOPS => Self::GITOPS,
            CCM_AUTOSTOPPING => Self::CCM_AUTOSTOPPING,
            FF_TARGETS => Self::FF_TARGETS,
            SRM_SLO => Self::SRM_SLO,
            NEW_NAV => Self::NEW_NAV,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FeatureFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |flags, name| flags | Self::from(name.as_ref()))
    }
}

impl Serialize for FeatureFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FeatureFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
