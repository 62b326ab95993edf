use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use roxmltree::{Document, Node};
use serde::Serialize;

use super::xml::{child_int, child_text};
use super::{parse_envelope, read_document, ProcessingResult};
use crate::error::Result;

/// One law/ordinance entry from a law list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawNameInfo {
    /// Law ID
    pub law_id: String,
    /// Law name
    pub law_name: String,
    /// Law number
    pub law_number: String,
    /// Promulgation date
    pub promulgation_date: String,
}

impl LawNameInfo {
    pub(crate) fn from_node(node: Node) -> Result<Self> {
        Ok(Self {
            law_id: child_text(node, "LawId")?,
            law_name: child_text(node, "LawName")?,
            law_number: child_text(node, "LawNum")?,
            promulgation_date: child_text(node, "PromulgationDate")?,
        })
    }
}

/// Read-only, indexed view over the law entries of one response.
///
/// Lookups scan the backing sequence on the first call and memoize the
/// matched positions. Cache hits are decided by key presence, so an entry
/// at position 0 and an empty match list are valid cached results. The
/// caches are only ever appended to with values derived from the immutable
/// backing sequence; a race recomputes, it never corrupts.
#[derive(Debug)]
pub struct LawNameListInfo {
    records: Vec<LawNameInfo>,
    id_index: Mutex<HashMap<String, usize>>,
    name_index: Mutex<HashMap<String, usize>>,
    keyword_index: Mutex<HashMap<String, Vec<usize>>>,
}

/// A poisoned cache guard is still usable: entries are written atomically
/// per key and never partially.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl LawNameListInfo {
    pub fn new(records: Vec<LawNameInfo>) -> Self {
        Self {
            records,
            id_index: Mutex::new(HashMap::new()),
            name_index: Mutex::new(HashMap::new()),
            keyword_index: Mutex::new(HashMap::new()),
        }
    }

    /// Collect every `LawNameListInfo` child of an `ApplData` element, in
    /// document order.
    pub(crate) fn from_parent_node(node: Node) -> Result<Self> {
        let records = node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "LawNameListInfo")
            .map(LawNameInfo::from_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(records))
    }

    /// Find the law entry with exactly the given law ID.
    pub fn find_element_by_law_id(&self, law_id: &str) -> Option<&LawNameInfo> {
        let mut index = lock(&self.id_index);
        if let Some(&position) = index.get(law_id) {
            return Some(&self.records[position]);
        }

        let position = self.records.iter().position(|r| r.law_id == law_id)?;
        index.insert(law_id.to_string(), position);
        Some(&self.records[position])
    }

    /// Find the name of the law with the given law ID.
    pub fn find_law_name_by_law_id(&self, law_id: &str) -> Option<&str> {
        self.find_element_by_law_id(law_id)
            .map(|r| r.law_name.as_str())
    }

    /// Find the law entry with exactly the given name. If several entries
    /// share the name, the first in sequence order wins and is cached.
    pub fn find_element_by_law_name(&self, law_name: &str) -> Option<&LawNameInfo> {
        let mut index = lock(&self.name_index);
        if let Some(&position) = index.get(law_name) {
            return Some(&self.records[position]);
        }

        let position = self.records.iter().position(|r| r.law_name == law_name)?;
        index.insert(law_name.to_string(), position);
        Some(&self.records[position])
    }

    /// Find the ID of the law with the given name.
    pub fn find_law_id_by_law_name(&self, law_name: &str) -> Option<&str> {
        self.find_element_by_law_name(law_name)
            .map(|r| r.law_id.as_str())
    }

    /// All entries whose name contains `key`, in sequence order.
    ///
    /// Matching is case-sensitive substring containment; the empty keyword
    /// matches every entry. Results are cached per key, empty ones included.
    pub fn findall_elements_by_keyword_in_law_name(&self, key: &str) -> Vec<&LawNameInfo> {
        let mut index = lock(&self.keyword_index);
        let positions = match index.get(key) {
            Some(cached) => cached.clone(),
            None => {
                let computed: Vec<usize> = self
                    .records
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.law_name.contains(key))
                    .map(|(position, _)| position)
                    .collect();
                index.insert(key.to_string(), computed.clone());
                computed
            }
        };
        drop(index);

        positions.iter().map(|&p| &self.records[p]).collect()
    }

    /// IDs of all entries whose name contains `key`.
    pub fn findall_law_ids_by_keyword_in_law_name(&self, key: &str) -> Vec<&str> {
        self.findall_elements_by_keyword_in_law_name(key)
            .into_iter()
            .map(|r| r.law_id.as_str())
            .collect()
    }

    /// Names of all entries whose name contains `key`.
    pub fn findall_law_names_by_keyword_in_law_name(&self, key: &str) -> Vec<&str> {
        self.findall_elements_by_keyword_in_law_name(key)
            .into_iter()
            .map(|r| r.law_name.as_str())
            .collect()
    }

    /// IDs of every entry, in sequence order. Uncached.
    pub fn law_ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.law_id.as_str()).collect()
    }

    /// Names of every entry, in sequence order. Uncached.
    pub fn law_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.law_name.as_str()).collect()
    }

    pub fn records(&self) -> &[LawNameInfo] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LawNameInfo> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a LawNameListInfo {
    type Item = &'a LawNameInfo;
    type IntoIter = std::slice::Iter<'a, LawNameInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// `ApplData` payload of a law list response.
#[derive(Debug)]
pub struct LawListData {
    /// Law type category
    pub category: i32,
    /// Law entries with their lookup indices
    pub law_name_list_info: LawNameListInfo,
}

impl LawListData {
    pub(crate) fn from_node(node: Node) -> Result<Self> {
        Ok(Self {
            category: child_int(node, "Category")?,
            law_name_list_info: LawNameListInfo::from_parent_node(node)?,
        })
    }
}

/// Parsed response of the `lawlists` and `updatelawlists` endpoints.
#[derive(Debug)]
pub struct LawListResponse {
    result: ProcessingResult,
    appl_data: LawListData,
}

impl LawListResponse {
    /// Parse a response from raw XML text.
    pub fn from_text(text: &str) -> Result<Self> {
        let doc = Document::parse(text)?;
        let (result_node, appl_data_node) = parse_envelope(&doc)?;
        Ok(Self {
            result: ProcessingResult::from_node(result_node)?,
            appl_data: LawListData::from_node(appl_data_node)?,
        })
    }

    /// Parse a response from an XML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_text(&read_document(path.as_ref())?)
    }

    pub fn result(&self) -> &ProcessingResult {
        &self.result
    }

    pub fn appl_data(&self) -> &LawListData {
        &self.appl_data
    }

    pub fn law_name_list_info(&self) -> &LawNameListInfo {
        &self.appl_data.law_name_list_info
    }

    pub fn find_element_by_law_id(&self, law_id: &str) -> Option<&LawNameInfo> {
        self.law_name_list_info().find_element_by_law_id(law_id)
    }

    pub fn find_law_name_by_law_id(&self, law_id: &str) -> Option<&str> {
        self.law_name_list_info().find_law_name_by_law_id(law_id)
    }

    pub fn find_element_by_law_name(&self, law_name: &str) -> Option<&LawNameInfo> {
        self.law_name_list_info().find_element_by_law_name(law_name)
    }

    pub fn find_law_id_by_law_name(&self, law_name: &str) -> Option<&str> {
        self.law_name_list_info().find_law_id_by_law_name(law_name)
    }

    pub fn findall_elements_by_keyword_in_law_name(&self, key: &str) -> Vec<&LawNameInfo> {
        self.law_name_list_info()
            .findall_elements_by_keyword_in_law_name(key)
    }

    pub fn findall_law_ids_by_keyword_in_law_name(&self, key: &str) -> Vec<&str> {
        self.law_name_list_info()
            .findall_law_ids_by_keyword_in_law_name(key)
    }

    pub fn findall_law_names_by_keyword_in_law_name(&self, key: &str) -> Vec<&str> {
        self.law_name_list_info()
            .findall_law_names_by_keyword_in_law_name(key)
    }
}
