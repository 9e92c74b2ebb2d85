//! Rendering of option values into the argument suffix of a payload.

use std::borrow::Cow;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::schema::{OptionKind, OptionSchema, is_agent_option};
use crate::values::OptionValues;

/// Escaping policy applied to every interpolated value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// Values are inserted as-is.
    #[default]
    Verbatim,
    /// Values with characters outside a conservative safe set are wrapped in
    /// single quotes, doubling embedded quotes.
    #[serde(rename = "powershell")]
    #[cfg_attr(feature = "clap", value(name = "powershell"))]
    PowerShell,
}

impl Quoting {
    /// Apply this policy to a single value.
    #[must_use]
    pub fn apply<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(value),
            Self::PowerShell => powershell_quote(value),
        }
    }
}

/// How [`crate::ModuleDescriptor::generate_with`] turns values into arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub quoting: Quoting,
    /// Render `Switch` options by kind: `true` is a bare flag and `false`
    /// omits the option. When unset every option follows the string rules.
    pub typed_switches: bool,
}

impl RenderOptions {
    /// Quoted values and typed switches.
    #[must_use]
    pub fn hardened() -> Self {
        Self {
            quoting: Quoting::PowerShell,
            typed_switches: true,
        }
    }

    #[must_use]
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }
}

/// Argument suffix for every non-agent option holding a value, in schema
/// order. Each argument is prefixed with a single space.
#[must_use]
pub fn render_arguments(schema: &OptionSchema, values: &OptionValues, opts: &RenderOptions) -> String {
    let mut out = String::new();
    for (name, spec) in schema.iter() {
        if is_agent_option(name) {
            continue;
        }
        let Some(value) = values.get(name).filter(|v| !v.is_empty()) else {
            continue;
        };

        let is_true = value.eq_ignore_ascii_case("true");
        if opts.typed_switches && spec.kind == OptionKind::Switch && value.eq_ignore_ascii_case("false") {
            continue;
        }
        if is_true {
            let _ = write!(out, " -{name}");
        } else {
            let _ = write!(out, " -{name} {}", opts.quoting.apply(value));
        }
    }
    tracing::trace!(arguments = %out, "rendered module arguments");
    out
}

fn powershell_quote(value: &str) -> Cow<'_, str> {
    // A leading `-` binds as a parameter name (or `--%` stop-parsing) and a
    // leading `@` splats, so those are quoted even when every char is safe.
    let bare = !value.is_empty() && !value.starts_with(['-', '@']) && value.chars().all(is_powershell_safe);
    if bare {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        // PowerShell treats the typographic single quotes as quote characters too.
        if matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}') {
            quoted.push(c);
        }
        quoted.push(c);
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

fn is_powershell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':' | '\\' | '/' | '+' | ',' | '=' | '@' | '%')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::schema::OptionSpec;

    fn fixture() -> (OptionSchema, OptionValues) {
        let schema = OptionSchema::new([
            ("Path", OptionSpec::new("path", false, OptionKind::String)),
            ("Loud", OptionSpec::new("switch", false, OptionKind::Switch)),
            ("Count", OptionSpec::new("count", false, OptionKind::Integer)),
        ])
        .unwrap();
        let values = OptionValues::for_schema(&schema);
        (schema, values)
    }

    #[test]
    fn empty_values_render_nothing() {
        let (schema, values) = fixture();
        assert_eq!(render_arguments(&schema, &values, &RenderOptions::default()), "");
    }

    #[test]
    fn agent_value_is_never_rendered() {
        let (schema, mut values) = fixture();
        values.set("Agent", "K7XH2").unwrap();
        assert_eq!(render_arguments(&schema, &values, &RenderOptions::default()), "");
    }

    #[test]
    fn true_renders_bare_flag_in_any_case() {
        let (schema, mut values) = fixture();
        values.set("Path", "TrUe").unwrap();
        values.set("Loud", "TRUE").unwrap();
        assert_eq!(
            render_arguments(&schema, &values, &RenderOptions::default()),
            " -Path -Loud"
        );
    }

    #[test]
    fn legacy_rendering_keeps_false_switch_value() {
        let (schema, mut values) = fixture();
        values.set("Loud", "false").unwrap();
        assert_eq!(
            render_arguments(&schema, &values, &RenderOptions::default()),
            " -Loud false"
        );
    }

    #[test]
    fn typed_switch_false_is_omitted() {
        let (schema, mut values) = fixture();
        values.set("Loud", "False").unwrap();
        values.set("Count", "3").unwrap();
        let opts = RenderOptions {
            typed_switches: true,
            ..RenderOptions::default()
        };
        assert_eq!(render_arguments(&schema, &values, &opts), " -Count 3");
    }

    #[test]
    fn verbatim_inserts_values_unescaped() {
        let (schema, mut values) = fixture();
        values.set("Path", "a; Remove-Item x").unwrap();
        assert_eq!(
            render_arguments(&schema, &values, &RenderOptions::default()),
            " -Path a; Remove-Item x"
        );
    }

    #[test]
    fn powershell_quoting_wraps_unsafe_values() {
        assert_eq!(Quoting::PowerShell.apply("C:\\audio.wav"), "C:\\audio.wav");
        assert_eq!(Quoting::PowerShell.apply("a b"), "'a b'");
        assert_eq!(Quoting::PowerShell.apply("it's"), "'it''s'");
        assert_eq!(Quoting::PowerShell.apply("a\u{2019}b"), "'a\u{2019}\u{2019}b'");
        assert_eq!(Quoting::PowerShell.apply("$(calc)"), "'$(calc)'");
    }

    #[test]
    fn powershell_quoting_wraps_parameter_and_splat_lookalikes() {
        assert_eq!(Quoting::PowerShell.apply("-OutPath"), "'-OutPath'");
        assert_eq!(Quoting::PowerShell.apply("--%"), "'--%'");
        assert_eq!(Quoting::PowerShell.apply("@env"), "'@env'");
        assert_eq!(Quoting::PowerShell.apply("a-b@c%d"), "a-b@c%d");
    }

    #[test]
    fn hardened_rendering_keeps_dash_values_as_arguments() {
        let (schema, mut values) = fixture();
        values.set("Path", "-Count").unwrap();
        assert_eq!(
            render_arguments(&schema, &values, &RenderOptions::hardened()),
            " -Path '-Count'"
        );
    }

    #[test]
    fn hardened_rendering_quotes_arguments() {
        let (schema, mut values) = fixture();
        values.set("Path", "C:\\My Files\\out.wav").unwrap();
        assert_eq!(
            render_arguments(&schema, &values, &RenderOptions::hardened()),
            " -Path 'C:\\My Files\\out.wav'"
        );
    }

    #[test]
    fn quoting_parses_from_lowercase_names() {
        let q: Quoting = serde_json::from_str("\"powershell\"").unwrap();
        assert_eq!(q, Quoting::PowerShell);
        let q: Quoting = serde_json::from_str("\"verbatim\"").unwrap();
        assert_eq!(q, Quoting::Verbatim);
    }
}
