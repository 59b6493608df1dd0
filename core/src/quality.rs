/// Normal / exceptional / elite tags for equipment base names
use crate::config::{ConfigEnum, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentQuality {
    Normal,
    Exceptional,
    Elite,
}

impl EquipmentQuality {
    pub fn indicator(self) -> char {
        match self {
            Self::Normal => 'n',
            Self::Exceptional => 'x',
            Self::Elite => 'e',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketStyle {
    Square,
    Round,
    Curly,
}

impl BracketStyle {
    fn pair(self) -> (char, char) {
        match self {
            Self::Square => ('[', ']'),
            Self::Round => ('(', ')'),
            Self::Curly => ('{', '}'),
        }
    }
}

impl ConfigEnum for BracketStyle {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("square", Self::Square),
        ("round", Self::Round),
        ("curly", Self::Curly),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPlacement {
    Prefix,
    Suffix,
    Both,
}

impl ConfigEnum for TagPlacement {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("prefix", Self::Prefix),
        ("suffix", Self::Suffix),
        ("both", Self::Both),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTag {
    /// `[n]`
    Single {
        brackets: BracketStyle,
        placement: TagPlacement,
    },
    /// `[[n]]`
    Double {
        brackets: BracketStyle,
        placement: TagPlacement,
    },
}

impl QualityTag {
    pub fn render(&self, quality: EquipmentQuality) -> String {
        let indicator = quality.indicator();
        match self {
            Self::Single { brackets, .. } => {
                let (open, close) = brackets.pair();
                format!("{open}{indicator}{close}")
            }
            Self::Double { brackets, .. } => {
                let (open, close) = brackets.pair();
                format!("{open}{open}{indicator}{close}{close}")
            }
        }
    }

    pub fn apply(&self, name: &str, quality: EquipmentQuality) -> String {
        let tag = self.render(quality);
        let placement = match self {
            Self::Single { placement, .. } | Self::Double { placement, .. } => *placement,
        };
        match placement {
            TagPlacement::Prefix => format!("{tag} {name}"),
            TagPlacement::Suffix => format!("{name} {tag}"),
            TagPlacement::Both => format!("{tag} {name} {tag}"),
        }
    }
}

/// Tag style as written in the host config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTagStyle {
    Disabled,
    Single,
    Double,
    /// Reserved; no format has been defined for it.
    Custom,
}

impl ConfigEnum for QualityTagStyle {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("single", Self::Single),
        ("double", Self::Double),
        ("custom", Self::Custom),
    ];
}

impl QualityTagStyle {
    pub fn build(
        self,
        brackets: BracketStyle,
        placement: TagPlacement,
    ) -> Result<Option<QualityTag>, ConfigError> {
        match self {
            Self::Disabled => Ok(None),
            Self::Single => Ok(Some(QualityTag::Single {
                brackets,
                placement,
            })),
            Self::Double => Ok(Some(QualityTag::Double {
                brackets,
                placement,
            })),
            Self::Custom => Err(ConfigError::NotSpecified(
                "custom equipment quality tag style".into(),
            )),
        }
    }
}
