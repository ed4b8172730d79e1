use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{ThemeAppearance, ThemeAppearanceKind};

/// A length as written in a theme file, before it is mapped onto a gpui unit.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RawLength {
    Pixels(f32),
    Rems(f32),
    Percent(f32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f32),
    String(String),
}

fn parse_length(input: &str) -> Option<RawLength> {
    let input = input.trim();

    let (number, ctor): (&str, fn(f32) -> RawLength) = if let Some(n) = input.strip_suffix("px") {
        (n, RawLength::Pixels)
    } else if let Some(n) = input.strip_suffix("rem") {
        (n, RawLength::Rems)
    } else if let Some(n) = input.strip_suffix('%') {
        (n, RawLength::Percent)
    } else {
        return None;
    };

    number
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|n| n.is_finite())
        .map(ctor)
}

fn raw_length<'de, D>(deserializer: D) -> Result<RawLength, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(RawLength::Pixels(n)),
        NumberOrString::String(string) => parse_length(&string).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid length \"{string}\": expected a number or a string ending with 'px', 'rem' or '%'"
            ))
        }),
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match raw_length(deserializer)? {
        RawLength::Pixels(n) => Ok(px(n)),
        other => Err(D::Error::custom(format!(
            "expected a pixel value, found {other:?}"
        ))),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match raw_length(deserializer)? {
        RawLength::Pixels(n) => Ok(AbsoluteLength::Pixels(px(n))),
        RawLength::Rems(n) => Ok(AbsoluteLength::Rems(rems(n))),
        RawLength::Percent(_) => Err(D::Error::custom(
            "percentages are not allowed for absolute lengths",
        )),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match raw_length(deserializer)? {
        RawLength::Pixels(n) => DefiniteLength::Absolute(AbsoluteLength::Pixels(px(n))),
        RawLength::Rems(n) => DefiniteLength::Absolute(AbsoluteLength::Rems(rems(n))),
        RawLength::Percent(n) => DefiniteLength::Fraction(n / 100.),
    })
}

pub fn de_font_family<'de, D>(deserializer: D) -> Result<SmallVec<[SharedString; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SharedString),
        Many(SmallVec<[SharedString; 2]>),
    }

    let family = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => SmallVec::from_iter([name]),
        OneOrMany::Many(names) => names,
    };

    if family.is_empty() {
        return Err(D::Error::custom("font family list can't be empty"));
    }

    Ok(family)
}

/// Every theme ships exactly one light and one dark appearance.
pub fn de_appearances<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeAppearance; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let appearances = SmallVec::<[ThemeAppearance; 2]>::deserialize(deserializer)?;

    for kind in [ThemeAppearanceKind::Light, ThemeAppearanceKind::Dark] {
        let count = appearances.iter().filter(|a| a.kind == kind).count();
        if count != 1 {
            return Err(D::Error::custom(format!(
                "expected exactly one {kind:?} appearance, found {count}"
            )));
        }
    }

    Ok(appearances)
}
