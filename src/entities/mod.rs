//! HTML named character reference search

mod catalog;

use crate::error::{DevbenchError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// A named character reference such as `&amp;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlEntity {
    /// Reference as written in markup, including `&` and `;`
    pub name: String,
    pub codepoints: Vec<u32>,
    pub characters: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HtmlEntity {
    /// Name without the surrounding `&` and `;`
    pub fn bare_name(&self) -> &str {
        self.name.trim_start_matches('&').trim_end_matches(';')
    }
}

/// Search parameters; `page` is zero-based
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

pub const DEFAULT_PAGE_SIZE: usize = 20;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for EntityQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Slice one page out of the full, ordered result set
    pub fn from_slice(all: &[T], page: usize, size: usize) -> Self {
        let total_items = all.len();
        let total_pages = total_items.div_ceil(size);
        let start = page.saturating_mul(size).min(total_items);
        let end = start.saturating_add(size).min(total_items);

        Self {
            items: all[start..end].to_vec(),
            page,
            size,
            total_items,
            total_pages,
        }
    }
}

/// Storage seam for entity lookups
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Search entities, returning one page of matches ordered by name
    async fn search(&self, query: &EntityQuery) -> Result<Page<HtmlEntity>>;

    /// Total number of entities available
    fn count(&self) -> usize;
}

/// Repository holding the whole catalog in memory
pub struct InMemoryEntityRepository {
    entities: Vec<HtmlEntity>,
    max_page_size: usize,
}

impl InMemoryEntityRepository {
    /// Repository over the embedded catalog
    pub fn embedded(max_page_size: usize) -> Self {
        let entities = catalog::EMBEDDED
            .iter()
            .map(|(name, codepoints, description)| HtmlEntity {
                name: format!("&{};", name),
                codepoints: codepoints.to_vec(),
                characters: characters_of(codepoints),
                description: Some(description.to_string()),
            })
            .collect();
        Self::new(entities, max_page_size)
    }

    /// Repository over arbitrary entities; they are sorted by name
    pub fn new(mut entities: Vec<HtmlEntity>, max_page_size: usize) -> Self {
        entities.sort_by(|a, b| a.name.cmp(&b.name));
        entities.dedup_by(|a, b| a.name == b.name);
        Self {
            entities,
            max_page_size,
        }
    }

    /// Parse a WHATWG `entities.json` document.
    ///
    /// Legacy forms without a trailing `;` are dropped. Descriptions are
    /// taken from the embedded catalog where names match.
    pub fn from_whatwg_json(json: &str, max_page_size: usize) -> Result<Self> {
        #[derive(Deserialize)]
        struct RawEntity {
            codepoints: Vec<u32>,
            characters: String,
        }

        let raw: BTreeMap<String, RawEntity> = serde_json::from_str(json)
            .map_err(|e| DevbenchError::parse(format!("Invalid entities document: {}", e), None))?;

        let descriptions: HashMap<&str, &str> = catalog::EMBEDDED
            .iter()
            .map(|(name, _, description)| (*name, *description))
            .collect();

        let entities: Vec<HtmlEntity> = raw
            .into_iter()
            .filter(|(name, _)| name.starts_with('&') && name.ends_with(';'))
            .map(|(name, entity)| {
                let bare = name.trim_start_matches('&').trim_end_matches(';');
                let description = descriptions.get(bare).map(|d| d.to_string());
                HtmlEntity {
                    name,
                    codepoints: entity.codepoints,
                    characters: entity.characters,
                    description,
                }
            })
            .collect();

        tracing::info!(entities = entities.len(), "Loaded HTML entity catalog");
        Ok(Self::new(entities, max_page_size))
    }

    /// Load a WHATWG `entities.json` file
    pub fn from_file(path: &Path, max_page_size: usize) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DevbenchError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;
        Self::from_whatwg_json(&content, max_page_size)
    }

    fn validate(&self, query: &EntityQuery) -> Result<()> {
        if query.size == 0 || query.size > self.max_page_size {
            return Err(crate::validation_error!(
                "Page size must be between 1 and {}",
                self.max_page_size
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityRepository for InMemoryEntityRepository {
    async fn search(&self, query: &EntityQuery) -> Result<Page<HtmlEntity>> {
        self.validate(query)?;

        let matcher = Matcher::new(&query.query);
        let matches: Vec<HtmlEntity> = self
            .entities
            .iter()
            .filter(|entity| matcher.matches(entity))
            .cloned()
            .collect();

        tracing::debug!(
            query = %query.query,
            page = query.page,
            size = query.size,
            matches = matches.len(),
            "Entity search"
        );

        Ok(Page::from_slice(&matches, query.page, query.size))
    }

    fn count(&self) -> usize {
        self.entities.len()
    }
}

/// Compiled form of a free-text query
struct Matcher {
    raw: String,
    needle: String,
    codepoint: Option<u32>,
}

impl Matcher {
    fn new(query: &str) -> Self {
        let raw = query.trim().to_string();
        let needle = raw
            .trim_start_matches('&')
            .trim_end_matches(';')
            .to_lowercase();
        let codepoint = parse_codepoint(&needle);
        Self {
            raw,
            needle,
            codepoint,
        }
    }

    fn matches(&self, entity: &HtmlEntity) -> bool {
        if self.raw.is_empty() || entity.characters == self.raw {
            return true;
        }
        // A query made only of `&` and `;` can match nothing but a character.
        if self.needle.is_empty() {
            return false;
        }
        if let Some(cp) = self.codepoint {
            return entity.codepoints == [cp];
        }
        entity.bare_name().to_lowercase().contains(&self.needle)
            || entity
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&self.needle))
    }
}

/// Parse `#38`, `#x26` or `u+0026`
fn parse_codepoint(needle: &str) -> Option<u32> {
    if let Some(hex) = needle.strip_prefix("#x").or_else(|| needle.strip_prefix("u+")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    needle.strip_prefix('#')?.parse().ok()
}

fn characters_of(codepoints: &[u32]) -> String {
    codepoints.iter().filter_map(|cp| char::from_u32(*cp)).collect()
}
