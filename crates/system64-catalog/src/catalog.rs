//! The assembled catalog and its lookups.
//!
//! [`build_catalog`] assembles every static table once at startup. The
//! result is immutable; the generator and resolver borrow it.

use std::collections::{BTreeMap, BTreeSet};

use system64_types::{DifficultyCode, Skill};

use crate::authored::authored_templates;
use crate::error::CatalogError;
use crate::expansion::expanded_templates;
use crate::items::{ItemList, book_list, item_lists};
use crate::template::{TaskTemplate, VariableSpec};
use crate::tiers::{
    LevelTier, SkillDefinition, UNKNOWN_DIFFICULTY_LABEL, UNKNOWN_LEVEL_NAME,
    difficulty_by_level, difficulty_labels, level_tiers, skill_definitions,
};

/// Every static table the engine reads.
#[derive(Debug, Clone)]
pub struct Catalog {
    skills: Vec<SkillDefinition>,
    level_tiers: Vec<LevelTier>,
    difficulty_by_level: BTreeMap<u32, DifficultyCode>,
    difficulty_labels: BTreeMap<DifficultyCode, String>,
    item_lists: BTreeMap<ItemList, Vec<String>>,
    books: Vec<String>,
    templates: Vec<TaskTemplate>,
}

/// Assemble the full catalog: hand-authored templates followed by the
/// procedural expansion.
pub fn build_catalog() -> Catalog {
    let mut templates = authored_templates();
    templates.extend(expanded_templates());
    Catalog {
        skills: skill_definitions(),
        level_tiers: level_tiers(),
        difficulty_by_level: difficulty_by_level(),
        difficulty_labels: difficulty_labels(),
        item_lists: item_lists(),
        books: book_list(),
        templates,
    }
}

impl Catalog {
    /// Replace the template pool, validating the result.
    pub fn with_templates(mut self, templates: Vec<TaskTemplate>) -> Result<Self, CatalogError> {
        self.templates = templates;
        self.validate()?;
        Ok(self)
    }

    /// Replace the item-list table.
    #[must_use]
    pub fn with_item_lists(mut self, item_lists: BTreeMap<ItemList, Vec<String>>) -> Self {
        self.item_lists = item_lists;
        self
    }

    /// Check template ids are unique, every dynamic time limit names a
    /// numeric range variable of its template, and tiers ascend.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for template in &self.templates {
            if !seen.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateTemplateId {
                    id: template.id.clone(),
                });
            }
            if let Some(variable) = template.duration_variable() {
                match template.variables.get(variable) {
                    None => {
                        return Err(CatalogError::UnknownDurationVariable {
                            template_id: template.id.clone(),
                            variable: variable.to_owned(),
                        });
                    }
                    Some(VariableSpec::ItemList(_) | VariableSpec::BookTitle) => {
                        return Err(CatalogError::NonNumericDurationVariable {
                            template_id: template.id.clone(),
                            variable: variable.to_owned(),
                        });
                    }
                    Some(VariableSpec::Range { .. }) => {}
                }
            }
        }

        let mut previous: Option<u32> = None;
        for tier in &self.level_tiers {
            if previous.is_some_and(|p| tier.max_level <= p) {
                return Err(CatalogError::UnorderedLevelTiers {
                    max_level: tier.max_level,
                });
            }
            previous = Some(tier.max_level);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Skill definitions in catalog order.
    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    /// Skills in catalog order, without their domains.
    pub fn skill_names(&self) -> impl Iterator<Item = Skill> + '_ {
        self.skills.iter().map(|d| d.skill)
    }

    /// Level-name ladder.
    pub fn level_tiers(&self) -> &[LevelTier] {
        &self.level_tiers
    }

    /// Name of the first tier whose cap is at least `level`.
    pub fn level_name(&self, level: u32) -> &str {
        self.level_tiers
            .iter()
            .find(|tier| tier.max_level >= level)
            .map_or(UNKNOWN_LEVEL_NAME, |tier| tier.name.as_str())
    }

    /// Difficulty code for a level. Levels past the table use the hardest
    /// code the table defines.
    pub fn difficulty_for_level(&self, level: u32) -> DifficultyCode {
        self.difficulty_by_level
            .get(&level)
            .copied()
            .or_else(|| self.difficulty_by_level.values().max().copied())
            .unwrap_or(DifficultyCode::D)
    }

    /// Label for a difficulty code.
    pub fn difficulty_label(&self, code: DifficultyCode) -> &str {
        self.difficulty_labels
            .get(&code)
            .map_or(UNKNOWN_DIFFICULTY_LABEL, String::as_str)
    }

    /// Items of a named list, if the catalog carries it.
    pub fn item_list(&self, list: ItemList) -> Option<&[String]> {
        self.item_lists.get(&list).map(Vec::as_slice)
    }

    /// The book list.
    pub fn books(&self) -> &[String] {
        &self.books
    }

    /// Every template in catalog order.
    pub fn templates(&self) -> &[TaskTemplate] {
        &self.templates
    }

    /// Templates filed under one difficulty code.
    pub fn templates_for(&self, code: DifficultyCode) -> Vec<&TaskTemplate> {
        self.templates
            .iter()
            .filter(|t| t.difficulty == code)
            .collect()
    }

    /// Look up a template by id.
    pub fn template(&self, id: &str) -> Option<&TaskTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}
