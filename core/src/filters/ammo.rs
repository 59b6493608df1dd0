/// Arrow and bolt quivers
use super::{colored, hidden};
use crate::collection::EntryCollection;
use crate::colors::ColorCode;
use crate::config::{ConfigEnum, ConfigError, ModConfig};

pub const DEFAULT_COLOR: ColorCode = ColorCode::GRAY;
pub const QUIVERS: [&str; 2] = ["aqv", "cqv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmoMode {
    Disabled,
    All,
    Hide,
}

impl ConfigEnum for AmmoMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("disabled", Self::Disabled),
        ("all", Self::All),
        ("hide", Self::Hide),
    ];
}

pub fn compose(config: &ModConfig) -> Result<EntryCollection, ConfigError> {
    let category = &config.arrows;
    Ok(match category.mode {
        AmmoMode::Disabled => EntryCollection::new(),
        AmmoMode::All => colored(&QUIVERS, category.color),
        AmmoMode::Hide => hidden(&QUIVERS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostConfig;

    #[test]
    fn modes() {
        let config = ModConfig::from_host(&HostConfig::default()).unwrap();
        let all = compose(&config).unwrap();
        assert_eq!(all.get("cqv").unwrap().name_color, Some(ColorCode::GRAY));

        let host = HostConfig {
            arrows_mode: "hide".into(),
            ..HostConfig::default()
        };
        let hide = compose(&ModConfig::from_host(&host).unwrap()).unwrap();
        assert!(!hide.get("aqv").unwrap().visible);
    }
}
