use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Identifier of an independently developed feature area of the console.
///
/// Displayed and parsed as the upper-case token (`"CD"`, `"COMMON"`); parsing ignores case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ModuleName {
    /// Continuous Delivery.
    Cd,
    /// Continuous Integration.
    Ci,
    /// Cloud Cost Management.
    Ce,
    /// Feature Flags.
    Cf,
    /// Service Reliability.
    Cv,
    /// Account-level pages shared by every module.
    Common,
}

impl ModuleName {
    /// The bit this module occupies in a [`ModuleSet`].
    #[must_use]
    pub const fn as_set(self) -> ModuleSet {
        match self {
            Self::Cd => ModuleSet::CD,
            Self::Ci => ModuleSet::CI,
            Self::Ce => ModuleSet::CE,
            Self::Cf => ModuleSet::CF,
            Self::Cv => ModuleSet::CV,
            Self::Common => ModuleSet::COMMON,
        }
    }

    /// Lower-case form used in URL paths (`/account/:accountId/cd/...`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Cd => "cd",
            Self::Ci => "ci",
            Self::Ce => "ce",
            Self::Cf => "cf",
            Self::Cv => "cv",
            Self::Common => "common",
        }
    }
}

impl Serialize for ModuleName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for ModuleName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|_| serde::de::Error::custom(format!("unknown module '{raw}'")))
    }
}

bitflags! {
    /// A set of modules, e.g. the modules covered by a license or installed in a build.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
    pub struct ModuleSet: u8 {
        const CD = 1 << 0;
        const CI = 1 << 1;
        const CE = 1 << 2;
        const CF = 1 << 3;
        const CV = 1 << 4;
        const COMMON = 1 << 5;

        const ALL = Self::CD.bits()
            | Self::CI.bits()
            | Self::CE.bits()
            | Self::CF.bits()
            | Self::CV.bits()
            | Self::COMMON.bits();
    }
}

impl ModuleSet {
    #[must_use]
    pub const fn has(self, module: ModuleName) -> bool {
        self.contains(module.as_set())
    }

    /// Iterates the members in declaration order.
    pub fn modules(self) -> impl Iterator<Item = ModuleName> {
        ModuleName::iter().filter(move |m| self.has(*m))
    }
}

impl From<ModuleName> for ModuleSet {
    fn from(module: ModuleName) -> Self {
        module.as_set()
    }
}

impl FromIterator<ModuleName> for ModuleSet {
    fn from_iter<I: IntoIterator<Item = ModuleName>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, m| set | m.as_set())
    }
}
