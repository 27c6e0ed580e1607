#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::results::AssertionResult;
use crate::{
    constants::{MATCH_PARENT, ROOT_LAYOUT_KINDS, WRAP_CONTENT},
    layout::Element,
};

/// Which element of the parsed tree a check inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The root element of the document.
    Root,
    /// The first element with the given tag, in document order.
    First {
        /// Tag name to match.
        tag: String,
    },
    /// Any element with the given tag; the check passes if at least one
    /// candidate satisfies it.
    Any {
        /// Tag name to match.
        tag: String,
    },
}

/// One structural check over a parsed layout. Each variant covers one of
/// the check categories the assignment generator emits rules for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Check {
    /// The targeted element's tag must be one of the accepted kinds.
    /// Aimed at the root, this is the root-container membership check.
    KindIn {
        /// Accepted element kinds.
        kinds: Vec<String>,
    },
    /// A dimension attribute must equal one of the accepted literal
    /// tokens.
    DimensionIn {
        /// Attribute holding the dimension token.
        attr:          String,
        /// Accepted literal tokens.
        accepted:      Vec<String>,
        /// Pass when the attribute is entirely absent. Off by default:
        /// every view is expected to declare its size.
        #[serde(default)]
        absent_passes: bool,
    },
    /// A keyword attribute must contain the given needle,
    /// case-insensitively.
    AttrContains {
        /// Attribute to inspect.
        attr:   String,
        /// Keyword that must appear in the value.
        needle: String,
    },
    /// A content attribute must equal the expected text exactly.
    AttrEquals {
        /// Attribute to inspect.
        attr:     String,
        /// Expected content.
        expected: String,
    },
    /// At least one element of the given kind must exist within the
    /// targeted subtree; aimed at the root, that is the whole document.
    ElementExists {
        /// Tag name that must be present.
        tag: String,
    },
    /// A numeric value embedded in the attribute must be at least `min`.
    MinNumeric {
        /// Attribute holding the numeric value.
        attr:          String,
        /// Inclusive lower bound.
        min:           u32,
        /// Pass when the attribute is absent or carries no digits, for
        /// attributes with a sensible platform default.
        #[serde(default)]
        absent_passes: bool,
    },
    /// A style flag must appear in a free-text style attribute.
    StyleFlag {
        /// Attribute holding the style list.
        attr: String,
        /// Flag that must be present.
        flag: String,
    },
}

/// A named, independently evaluated structural assertion. Assertions carry
/// no mutable state and may be re-run against the same tree at will.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assertion {
    /// Stable name reported for this assertion.
    pub name:   String,
    /// Element the check runs against.
    pub target: Target,
    /// The check itself.
    #[serde(flatten)]
    pub check:  Check,
}

impl Assertion {
    /// Creates a named assertion over the given target.
    pub fn new(name: impl Into<String>, target: Target, check: Check) -> Self {
        Self {
            name: name.into(),
            target,
            check,
        }
    }

    /// Evaluates this assertion against the document root. Evaluation is
    /// total: the outcome is always a pass/fail result with an
    /// explanation, never an error.
    pub fn evaluate(&self, root: &Element) -> AssertionResult {
        let outcome = match &self.check {
            Check::KindIn { kinds } => self.on_target(root, |el| check_kind(el, kinds)),
            Check::ElementExists { tag } => self.on_target(root, |el| check_exists(el, tag)),
            Check::DimensionIn {
                attr,
                accepted,
                absent_passes,
            } => self.on_target(root, |el| check_dimension(el, attr, accepted, *absent_passes)),
            Check::AttrContains { attr, needle } => {
                self.on_target(root, |el| check_contains(el, attr, needle))
            }
            Check::AttrEquals { attr, expected } => {
                self.on_target(root, |el| check_equals(el, attr, expected))
            }
            Check::MinNumeric {
                attr,
                min,
                absent_passes,
            } => self.on_target(root, |el| check_min_numeric(el, attr, *min, *absent_passes)),
            Check::StyleFlag { attr, flag } => {
                self.on_target(root, |el| check_style_flag(el, attr, flag))
            }
        };

        match outcome {
            Ok(()) => AssertionResult::pass(&self.name),
            Err(message) => AssertionResult::fail(&self.name, message),
        }
    }

    /// Resolves the configured target and applies `check` to the
    /// candidates. `First` inspects only the first candidate in document
    /// order; `Any` passes when at least one candidate passes and
    /// otherwise reports the last failure seen.
    fn on_target<F>(&self, root: &Element, check: F) -> Result<(), String>
    where
        F: Fn(&Element) -> Result<(), String>,
    {
        match &self.target {
            Target::Root => check(root),
            Target::First { tag } => match root.find_first(tag) {
                Some(el) => check(el),
                None => Err(format!("No {tag} found in the layout")),
            },
            Target::Any { tag } => {
                let mut last = None;
                for el in root.find_all(tag) {
                    match check(el) {
                        Ok(()) => return Ok(()),
                        Err(message) => last = Some(message),
                    }
                }
                Err(last.unwrap_or_else(|| format!("No {tag} found in the layout")))
            }
        }
    }
}

/// Evaluates every assertion in order against the same tree. One
/// assertion's failure never prevents evaluation of the rest: a single
/// structural defect should not hide the remainder of the report.
pub fn evaluate(root: &Element, assertions: &[Assertion]) -> Vec<AssertionResult> {
    assertions.iter().map(|a| a.evaluate(root)).collect()
}

/// Extracts the first contiguous run of ASCII digits from `value`, or
/// `None` when the value contains no digits. `"24sp"` yields `24`.
pub fn extract_digits(value: &str) -> Option<u32> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let rest = &value[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// The element's tag must be a member of the accepted kinds.
fn check_kind(el: &Element, kinds: &[String]) -> Result<(), String> {
    if kinds.iter().any(|k| k == &el.tag) {
        Ok(())
    } else {
        Err(format!(
            "Element should be one of [{}], got {}",
            kinds.join(", "),
            el.tag
        ))
    }
}

/// At least one element with the tag must exist in the subtree rooted at
/// `el`.
fn check_exists(el: &Element, tag: &str) -> Result<(), String> {
    if el.find_first(tag).is_some() {
        Ok(())
    } else {
        Err(format!("No {tag} found in the layout"))
    }
}

/// Dimension token must equal one of the accepted literals.
fn check_dimension(
    el: &Element,
    attr: &str,
    accepted: &[String],
    absent_passes: bool,
) -> Result<(), String> {
    match el.attr(attr) {
        Some(value) if accepted.iter().any(|a| a == value) => Ok(()),
        Some(value) => Err(format!(
            "{attr} on {} should be {}, got {value}",
            el.tag,
            accepted.join(" or ")
        )),
        None if absent_passes => Ok(()),
        None => Err(format!(
            "{attr} on {} should be {}, got nothing",
            el.tag,
            accepted.join(" or ")
        )),
    }
}

/// Keyword attribute must contain the needle, ignoring case.
fn check_contains(el: &Element, attr: &str, needle: &str) -> Result<(), String> {
    match el.attr(attr) {
        Some(value) if value.to_lowercase().contains(&needle.to_lowercase()) => Ok(()),
        Some(value) => Err(format!(
            "{attr} on {} should contain '{needle}', got {value}",
            el.tag
        )),
        None => Err(format!("{} should have a {attr} attribute", el.tag)),
    }
}

/// Content attribute must equal the expected text exactly.
fn check_equals(el: &Element, attr: &str, expected: &str) -> Result<(), String> {
    match el.attr(attr) {
        Some(value) if value == expected => Ok(()),
        Some(value) => Err(format!(
            "{attr} on {} should be '{expected}', got '{value}'",
            el.tag
        )),
        None => Err(format!(
            "{attr} on {} should be '{expected}', got nothing",
            el.tag
        )),
    }
}

/// Extracted numeric value must be at least `min`. An absent attribute and
/// a value with no digits are the same case: the attribute is treated as
/// absent and the configured absence policy decides.
fn check_min_numeric(
    el: &Element,
    attr: &str,
    min: u32,
    absent_passes: bool,
) -> Result<(), String> {
    match el.attr(attr).and_then(extract_digits) {
        Some(value) if value >= min => Ok(()),
        Some(_) => Err(format!(
            "{attr} on {} should be at least {min}, got {}",
            el.tag,
            el.attr(attr).unwrap_or_default()
        )),
        None if absent_passes => Ok(()),
        None => Err(format!(
            "{attr} on {} should be at least {min}, got nothing",
            el.tag
        )),
    }
}

/// Style flag must appear in the style attribute's value.
fn check_style_flag(el: &Element, attr: &str, flag: &str) -> Result<(), String> {
    match el.attr(attr) {
        Some(value) if value.contains(flag) => Ok(()),
        Some(value) => Err(format!(
            "{attr} on {} should include '{flag}', got {value}",
            el.tag
        )),
        None => Err(format!(
            "{attr} on {} should include '{flag}', got nothing",
            el.tag
        )),
    }
}

/// The built-in rule set for the introductory "Hi Android" screen: a
/// full-screen layout container centering a bold TextView that greets the
/// platform.
pub fn hi_android() -> Vec<Assertion> {
    let kinds = ROOT_LAYOUT_KINDS.iter().map(|k| k.to_string()).collect();

    vec![
        Assertion::new("root_is_layout", Target::Root, Check::KindIn { kinds }),
        Assertion::new("root_width_match_parent", Target::Root, Check::DimensionIn {
            attr:          "layout_width".into(),
            accepted:      vec![MATCH_PARENT.into()],
            absent_passes: false,
        }),
        Assertion::new("root_height_match_parent", Target::Root, Check::DimensionIn {
            attr:          "layout_height".into(),
            accepted:      vec![MATCH_PARENT.into()],
            absent_passes: false,
        }),
        Assertion::new("root_gravity_center", Target::Root, Check::AttrContains {
            attr:   "gravity".into(),
            needle: "center".into(),
        }),
        Assertion::new("textview_exists", Target::Root, Check::ElementExists {
            tag: "TextView".into(),
        }),
        Assertion::new(
            "textview_text",
            Target::Any {
                tag: "TextView".into(),
            },
            Check::AttrEquals {
                attr:     "text".into(),
                expected: "Hi Android".into(),
            },
        ),
        Assertion::new(
            "textview_width_wrap_content",
            Target::First {
                tag: "TextView".into(),
            },
            Check::DimensionIn {
                attr:          "layout_width".into(),
                accepted:      vec![WRAP_CONTENT.into()],
                absent_passes: false,
            },
        ),
        Assertion::new(
            "textview_height_wrap_content",
            Target::First {
                tag: "TextView".into(),
            },
            Check::DimensionIn {
                attr:          "layout_height".into(),
                accepted:      vec![WRAP_CONTENT.into()],
                absent_passes: false,
            },
        ),
        Assertion::new(
            "textview_text_size",
            Target::First {
                tag: "TextView".into(),
            },
            Check::MinNumeric {
                attr:          "textSize".into(),
                min:           24,
                absent_passes: true,
            },
        ),
        Assertion::new(
            "textview_bold",
            Target::Any {
                tag: "TextView".into(),
            },
            Check::StyleFlag {
                attr: "textStyle".into(),
                flag: "bold".into(),
            },
        ),
    ]
}

/// Deserializes an ordered rule set from JSON.
pub fn from_json(content: &str) -> Result<Vec<Assertion>> {
    serde_json::from_str(content).context("Could not parse rule set")
}

/// Reads the declarative rule file shipped alongside a generated
/// assignment.
pub fn load_rules(path: &Path) -> Result<Vec<Assertion>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read rule file {}", path.display()))?;
    from_json(&content)
}
