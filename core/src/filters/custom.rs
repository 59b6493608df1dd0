/// User-written override rules
///
/// Rules are separated by `;` or newlines and read `key => hide` or
/// `key => {color}New name`, where the optional `{color}` is any config
/// color name. A key is an item code or a full item name. Overrides are applied after every composer and always win.
use crate::collection::CustomOverride;
use crate::colors::{ColorCode, ColorToken};
use crate::config::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;

const SETTING: &str = "customOverrides";

static RULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\S.*?)\s*=>\s*(.*?)\s*$").unwrap());

static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([a-z-]+)\}\s*(.*)$").unwrap());

pub fn parse_overrides(text: &str) -> Result<Vec<CustomOverride>, ConfigError> {
    text.split(['\n', ';'])
        .filter(|rule| !rule.trim().is_empty())
        .map(parse_rule)
        .collect()
}

fn parse_rule(rule: &str) -> Result<CustomOverride, ConfigError> {
    let caps = RULE_RE
        .captures(rule)
        .ok_or_else(|| ConfigError::unknown(SETTING, rule))?;
    let key = caps[1].to_string();
    let action = &caps[2];

    if action.eq_ignore_ascii_case("hide") {
        return Ok(CustomOverride {
            key,
            hidden: true,
            color: None,
            name: None,
        });
    }

    let (color, name) = match COLOR_RE.captures(action) {
        Some(color_caps) => {
            let color = ColorCode::from_name(&color_caps[1])
                .ok_or_else(|| ConfigError::unknown(SETTING, &color_caps[1]))?;
            (Some(color), color_caps[2].to_string())
        }
        None => (None, action.to_string()),
    };

    if color.is_none() && name.is_empty() {
        return Err(ConfigError::unknown(SETTING, rule));
    }

    Ok(CustomOverride {
        key,
        hidden: false,
        color,
        name: (!name.is_empty()).then_some(name),
    })
}
