//! Variable resolution.
//!
//! Turns a [`TaskTemplate`] into concrete text for one character level:
//!
//! - **Range** -- uniform draw in `[min, max]`; when scaled, shifted by
//!   `level * scale` and rounded half up. The result is floored at `min`, or
//!   at 1 for the template's duration variable.
//! - **Item list** -- uniform pick from the catalog's list.
//! - **Book title** -- uniform pick from the catalog's book list.
//!
//! Nothing here fails. A spec that cannot be resolved leaves a visible marker
//! in the description instead of aborting generation.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use system64_catalog::{Catalog, ItemList, TaskTemplate, TimeLimit, VariableSpec};
use system64_types::ResolvedValue;
use tracing::warn;

/// Output of resolving one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Description with every known placeholder substituted.
    pub description: String,
    /// Value chosen for each placeholder.
    pub values: BTreeMap<String, ResolvedValue>,
    /// Positive time limit in minutes, if any.
    pub time_limit_minutes: Option<u32>,
}

/// Resolve every placeholder of `template` for a character at `level`.
pub fn resolve_variables(
    template: &TaskTemplate,
    level: u32,
    catalog: &Catalog,
    rng: &mut impl Rng,
) -> Resolution {
    let duration_variable = template.duration_variable();
    let mut values = BTreeMap::new();
    let mut description = template.description.clone();

    for (name, spec) in &template.variables {
        let value = match spec {
            VariableSpec::Range { min, max, scale } => resolve_range(
                name,
                *min,
                *max,
                *scale,
                level,
                duration_variable == Some(name.as_str()),
                rng,
            ),
            VariableSpec::ItemList(list) => pick_item(*list, catalog, rng),
            VariableSpec::BookTitle => pick_book(catalog, rng),
        };
        if value.is_marker() {
            warn!(template_id = %template.id, variable = %name, "Unresolvable template variable");
        }
        description = description.replace(&format!("[{name}]"), &value.to_string());
        values.insert(name.clone(), value);
    }

    let time_limit_minutes = match &template.time_limit {
        TimeLimit::Untimed => None,
        TimeLimit::Fixed(minutes) => Some(*minutes),
        TimeLimit::Dynamic { variable } => values
            .get(variable)
            .and_then(ResolvedValue::as_number)
            .and_then(|n| u32::try_from(n).ok()),
    }
    .filter(|minutes| *minutes > 0);

    Resolution {
        description,
        values,
        time_limit_minutes,
    }
}

/// Marker for a spec that cannot produce a value.
pub fn variable_error_marker(name: &str) -> String {
    format!("[VAR_ERR:{name}]")
}

/// Marker for an item list the catalog does not carry.
pub fn missing_list_marker(list: ItemList) -> String {
    format!("[Data for {} N/A]", list.key())
}

fn resolve_range(
    name: &str,
    min: i64,
    max: i64,
    scale: Option<Decimal>,
    level: u32,
    is_duration: bool,
    rng: &mut impl Rng,
) -> ResolvedValue {
    if min > max {
        return ResolvedValue::Marker(variable_error_marker(name));
    }
    let draw = rng.random_range(min..=max);
    let value = match scale.filter(|s| !s.is_zero()) {
        Some(scale) => match scaled(draw, level, scale) {
            Some(v) => v,
            None => return ResolvedValue::Marker(variable_error_marker(name)),
        },
        None => draw,
    };
    let floor = if is_duration { 1 } else { min };
    ResolvedValue::Number(value.max(floor))
}

/// `round(draw + level * scale)` with halves rounded up.
fn scaled(draw: i64, level: u32, scale: Decimal) -> Option<i64> {
    Decimal::from(level)
        .checked_mul(scale)?
        .checked_add(Decimal::from(draw))?
        .checked_add(Decimal::new(5, 1))?
        .floor()
        .to_i64()
}

fn pick_item(list: ItemList, catalog: &Catalog, rng: &mut impl Rng) -> ResolvedValue {
    catalog
        .item_list(list)
        .and_then(|items| items.choose(rng))
        .map_or_else(
            || ResolvedValue::Marker(missing_list_marker(list)),
            |item| ResolvedValue::Text(item.clone()),
        )
}

fn pick_book(catalog: &Catalog, rng: &mut impl Rng) -> ResolvedValue {
    catalog.books().choose(rng).map_or_else(
        || ResolvedValue::Marker(String::from("[Data for BOOK_LIST N/A]")),
        |title| ResolvedValue::Text(title.clone()),
    )
}
