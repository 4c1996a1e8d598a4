//! Process-wide theme variable registry
//!
//! One coarse mutex guards the whole table: operations are short map
//! lookups and recursive resolutions bounded by table size, and never
//! block on anything external. Public operations acquire the lock for
//! their full duration and do the recursive work through private
//! already-locked helpers, so no operation re-enters another public
//! operation while holding the lock.

use std::sync::{Arc, Mutex, OnceLock};

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tailor_core::{Color, DiagnosticSink, TracingSink};

use crate::alias::AliasTable;
use crate::defaults;
use crate::error::ThemeError;
use crate::graph::ReferenceGraph;
use crate::normalize::{canonicalize, CanonicalName};
use crate::palette::palette_color;
use crate::scheme::ColorScheme;
use crate::variable::ThemeVariable;

static GLOBAL_REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

#[derive(Default)]
struct RegistryTable {
    /// Variables stored under both the dashless and `--`-prefixed spellings
    variables: IndexMap<String, ThemeVariable>,
    aliases: AliasTable,
    /// Runtime color overrides, keyed by dashless canonical name
    overrides: FxHashMap<String, Color>,
    /// Overrides that apply only while the dark scheme is active
    dark_overrides: FxHashMap<String, Color>,
}

/// Shared store of named theme variables and utility aliases
///
/// Every engine entry point takes a `&ThemeRegistry` explicitly; a
/// process-wide default instance is available through
/// [`ThemeRegistry::global`] for ergonomic parity with single-theme apps.
pub struct ThemeRegistry {
    inner: Mutex<RegistryTable>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink::new()))
    }

    /// Build a registry reporting through a caller-supplied sink
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            inner: Mutex::new(RegistryTable::default()),
            sink,
        }
    }

    /// The process-wide default instance
    pub fn global() -> &'static ThemeRegistry {
        GLOBAL_REGISTRY.get_or_init(ThemeRegistry::new)
    }

    /// Merge variable and alias definitions into the live table
    ///
    /// Every key is accepted in any of its spellings and stored under both
    /// canonical forms. After merging, the whole table is re-validated:
    /// unresolved references and reference cycles are blocking in strict
    /// mode (the merge is discarded and the first issue returned) and
    /// warnings otherwise (the merge still commits). Naming-convention
    /// issues are never blocking in either mode.
    pub fn configure<V, A>(&self, variables: V, aliases: A, strict: bool) -> Result<(), ThemeError>
    where
        V: IntoIterator<Item = (String, ThemeVariable)>,
        A: IntoIterator<Item = (String, String)>,
    {
        let mut table = self.inner.lock().unwrap();

        let mut staged = table.variables.clone();
        for (name, variable) in variables {
            let Some(canonical) = canonicalize(&name) else {
                self.sink
                    .warn(&format!("invalid theme variable name '{name}', entry ignored"));
                continue;
            };
            if staged.contains_key(&canonical.key) {
                self.sink.warn(&format!(
                    "theme variable '{}' redefined, last write wins",
                    canonical.key
                ));
            }
            self.check_naming(&canonical, &variable);
            staged.insert(canonical.prefixed.clone(), variable.clone());
            staged.insert(canonical.key.clone(), variable);
        }

        let mut staged_aliases = table.aliases.clone();
        for (name, expansion) in aliases {
            staged_aliases.insert(name, expansion);
        }

        let issues = validate(&staged);
        if strict {
            if let Some(first) = issues.into_iter().next() {
                return Err(first);
            }
        } else {
            for issue in &issues {
                self.sink.warn(&issue.to_string());
            }
        }

        table.variables = staged;
        table.aliases = staged_aliases;
        Ok(())
    }

    /// Resolve a variable to a color under the given scheme
    ///
    /// Lookup chain per name: runtime overrides, dark-mode overrides (dark
    /// scheme only), the live table (materializing a seeded default on
    /// first miss), then — after the walk gives nothing — the well-known
    /// palette with the name itself as the specifier. Reference
    /// expressions are followed with a per-call visited set; cycles that
    /// somehow survived configure-time detection short-circuit to `None`.
    pub fn resolve_color(&self, name: &str, scheme: ColorScheme) -> Option<Color> {
        let canonical = canonicalize(name)?;
        let mut table = self.inner.lock().unwrap();
        let mut visited = FxHashSet::default();
        resolve_color_locked(&mut table, &canonical.key, scheme, &mut visited)
            .or_else(|| palette_color(&canonical.key))
    }

    /// Resolve a variable to its raw string form under the given scheme
    ///
    /// Token and raw-CSS expressions return their value strings; color
    /// expressions format as CSS color strings. Same lookup chain as
    /// [`resolve_color`](Self::resolve_color).
    pub fn resolve_raw(&self, name: &str, scheme: ColorScheme) -> Option<String> {
        let canonical = canonicalize(name)?;
        let mut table = self.inner.lock().unwrap();
        let mut visited = FxHashSet::default();
        resolve_raw_locked(&mut table, &canonical.key, scheme, &mut visited)
            .or_else(|| palette_color(&canonical.key).map(|c| c.to_css_string()))
    }

    /// Set a runtime color override (both schemes)
    pub fn set_override(&self, name: &str, color: Color) {
        if let Some(canonical) = canonicalize(name) {
            let mut table = self.inner.lock().unwrap();
            table.overrides.insert(canonical.key, color);
        }
    }

    /// Set a runtime color override that applies only in dark mode
    pub fn set_dark_override(&self, name: &str, color: Color) {
        if let Some(canonical) = canonicalize(name) {
            let mut table = self.inner.lock().unwrap();
            table.dark_overrides.insert(canonical.key, color);
        }
    }

    /// Remove all runtime overrides
    pub fn clear_overrides(&self) {
        let mut table = self.inner.lock().unwrap();
        table.overrides.clear();
        table.dark_overrides.clear();
    }

    /// Expand registered utility aliases in a raw token list
    pub fn expand_aliases<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let table = self.inner.lock().unwrap();
        table.aliases.expand_all(tokens)
    }

    /// Clear all registry state, for test isolation
    pub fn reset(&self) {
        let mut table = self.inner.lock().unwrap();
        *table = RegistryTable::default();
    }

    /// Naming-convention checks: advisory only, never blocking
    ///
    /// Intentional asymmetry with reference validation: a non-conforming
    /// name still functions as a plain pass-through variable, so these
    /// only ever warn, even under strict configuration.
    fn check_naming(&self, canonical: &CanonicalName, variable: &ThemeVariable) {
        use crate::variable::{TokenKind, VarExpression};

        for expr in std::iter::once(&variable.light).chain(variable.dark.as_ref()) {
            match expr {
                VarExpression::Typed {
                    kind: TokenKind::Color,
                    ..
                } if !canonical.key.starts_with("color-") => {
                    let issue = ThemeError::InvalidColorVariableName {
                        variable: canonical.key.clone(),
                    };
                    self.sink.warn(&issue.to_string());
                }
                VarExpression::Raw { property, .. } if !is_known_css_property(property) => {
                    self.sink.warn(&format!(
                        "theme variable '{}' passes through unrecognized CSS property '{}'",
                        canonical.key, property
                    ));
                }
                _ => {}
            }
        }
    }
}

/// Walk the table for a color, materializing seeds and following references
fn resolve_color_locked(
    table: &mut RegistryTable,
    key: &str,
    scheme: ColorScheme,
    visited: &mut FxHashSet<String>,
) -> Option<Color> {
    if !visited.insert(key.to_string()) {
        tracing::debug!(variable = key, "reference cycle hit at resolve time");
        return None;
    }

    if let Some(color) = table.overrides.get(key) {
        return Some(*color);
    }
    if scheme.is_dark() {
        if let Some(color) = table.dark_overrides.get(key) {
            return Some(*color);
        }
    }

    materialize_seed(table, key);
    let variable = table.variables.get(key)?.clone();

    use crate::variable::VarExpression::*;
    match variable.expression_for(scheme.is_dark()) {
        Color(color) => Some(*color),
        Token(value) | Typed { value, .. } => {
            tailor_core::Color::parse(value).or_else(|| palette_color(value))
        }
        Raw { value, .. } => tailor_core::Color::parse(value).or_else(|| palette_color(value)),
        Reference(target) => {
            let canonical = canonicalize(target)?;
            // A reference may land on a palette specifier rather than a
            // table entry; validation accepts that, so resolution must too
            resolve_color_locked(table, &canonical.key, scheme, visited)
                .or_else(|| palette_color(&canonical.key))
        }
    }
}

/// Walk the table for a raw string value
fn resolve_raw_locked(
    table: &mut RegistryTable,
    key: &str,
    scheme: ColorScheme,
    visited: &mut FxHashSet<String>,
) -> Option<String> {
    if !visited.insert(key.to_string()) {
        tracing::debug!(variable = key, "reference cycle hit at resolve time");
        return None;
    }

    if let Some(color) = table.overrides.get(key) {
        return Some(color.to_css_string());
    }
    if scheme.is_dark() {
        if let Some(color) = table.dark_overrides.get(key) {
            return Some(color.to_css_string());
        }
    }

    materialize_seed(table, key);
    let variable = table.variables.get(key)?.clone();

    use crate::variable::VarExpression::*;
    match variable.expression_for(scheme.is_dark()) {
        Color(color) => Some(color.to_css_string()),
        Token(value) | Typed { value, .. } => Some(value.clone()),
        Raw { value, .. } => Some(value.clone()),
        Reference(target) => {
            let canonical = canonicalize(target)?;
            resolve_raw_locked(table, &canonical.key, scheme, visited)
                .or_else(|| palette_color(&canonical.key).map(|c| c.to_css_string()))
        }
    }
}

/// Copy a seeded default into the live table on first miss
fn materialize_seed(table: &mut RegistryTable, key: &str) {
    if table.variables.contains_key(key) {
        return;
    }
    if let Some(variable) = defaults::seed(key) {
        tracing::trace!(variable = key, "materializing seeded default");
        table.variables.insert(format!("--{key}"), variable.clone());
        table.variables.insert(key.to_string(), variable);
    }
}

/// Validate the merged table: unresolved references first, then cycles
fn validate(staged: &IndexMap<String, ThemeVariable>) -> Vec<ThemeError> {
    let mut issues = Vec::new();

    // Work on the dashless view; the prefixed entries are mirrors
    let view: IndexMap<String, ThemeVariable> = staged
        .iter()
        .filter(|(name, _)| !name.starts_with("--"))
        .map(|(name, variable)| (name.clone(), variable.clone()))
        .collect();

    for (name, variable) in &view {
        for target in variable.reference_targets() {
            let resolvable = canonicalize(target).map_or(false, |canonical| {
                view.contains_key(&canonical.key)
                    || defaults::is_seed_name(&canonical.key)
                    || palette_color(&canonical.key).is_some()
            });
            if !resolvable {
                issues.push(ThemeError::UnresolvedReference {
                    variable: name.clone(),
                    reference: target.to_string(),
                });
            }
        }
    }

    if let Some(path) = ReferenceGraph::from_table(&view).find_cycle() {
        issues.push(ThemeError::CircularReference { path });
    }

    issues
}

fn is_known_css_property(property: &str) -> bool {
    matches!(
        property,
        "background"
            | "background-color"
            | "color"
            | "border"
            | "border-color"
            | "border-width"
            | "border-radius"
            | "box-shadow"
            | "opacity"
            | "padding"
            | "margin"
            | "gap"
            | "width"
            | "height"
            | "filter"
            | "backdrop-filter"
            | "font-family"
            | "font-size"
            | "font-weight"
            | "line-height"
            | "letter-spacing"
            | "outline"
            | "outline-color"
            | "transform"
    )
}
