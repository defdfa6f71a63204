//! In-memory SKU collection.
//!
//! Records are kept in insertion order so that a stable sort by priority
//! breaks ties by insertion. SKU codes are compared case-sensitively.

use thiserror::Error;

use crate::model::{NewSku, ScoredSku, SkuRecord, ValidationError};
use crate::scoring;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("SKU code '{0}' already exists")]
    DuplicateSku(String),
    #[error("SKU with id {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Working set of SKUs with unique codes.
#[derive(Clone, Debug)]
pub struct SkuRegistry {
    records: Vec<SkuRecord>,
    next_id: u64,
    revision: u64,
}

impl Default for SkuRegistry {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }
}

impl SkuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from stored records.
    ///
    /// `next_id` is raised above every stored id; duplicate ids or codes are rejected.
    pub fn from_records(records: Vec<SkuRecord>, next_id: u64) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for record in records {
            if registry.position_of_code(&record.sku_code, None).is_some() {
                return Err(RegistryError::DuplicateSku(record.sku_code));
            }
            if registry.position_of_id(record.id).is_some() {
                return Err(RegistryError::Invalid(ValidationError::InvalidConfiguration(
                    format!("SKU id {} is stored more than once", record.id),
                )));
            }
            let after = record.id.checked_add(1).ok_or_else(|| {
                RegistryError::Invalid(ValidationError::InvalidConfiguration(format!(
                    "SKU id {} is out of range",
                    record.id
                )))
            })?;
            registry.next_id = registry.next_id.max(after);
            registry.records.push(record);
        }
        registry.next_id = registry.next_id.max(next_id);
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Id the next added SKU will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[SkuRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&SkuRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Registers a new SKU.
    ///
    /// # Returns
    /// The stored record, or `DuplicateSku` without touching the collection
    pub fn add(&mut self, sku: NewSku) -> Result<SkuRecord, RegistryError> {
        if self.position_of_code(&sku.sku_code, None).is_some() {
            return Err(RegistryError::DuplicateSku(sku.sku_code));
        }

        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(|| {
            RegistryError::Invalid(ValidationError::InvalidConfiguration(
                "no SKU ids left".to_string(),
            ))
        })?;

        let record = SkuRecord {
            id,
            sku_code: sku.sku_code,
            product_name: sku.product_name,
            attributes: sku.attributes,
        };
        self.next_id = next_id;
        self.records.push(record.clone());
        self.revision += 1;
        Ok(record)
    }

    /// Adds every SKU whose code is not registered yet.
    ///
    /// # Returns
    /// The records that were added, in input order
    pub fn add_missing(&mut self, skus: Vec<NewSku>) -> Result<Vec<SkuRecord>, RegistryError> {
        let mut added = Vec::new();
        for sku in skus {
            if self.position_of_code(&sku.sku_code, None).is_none() {
                added.push(self.add(sku)?);
            }
        }
        Ok(added)
    }

    /// Replaces code, name and attributes of an existing SKU in place.
    pub fn update(&mut self, id: u64, sku: NewSku) -> Result<SkuRecord, RegistryError> {
        let idx = self.position_of_id(id).ok_or(RegistryError::NotFound(id))?;
        if self.position_of_code(&sku.sku_code, Some(id)).is_some() {
            return Err(RegistryError::DuplicateSku(sku.sku_code));
        }

        let record = &mut self.records[idx];
        record.sku_code = sku.sku_code;
        record.product_name = sku.product_name;
        record.attributes = sku.attributes;
        let updated = record.clone();
        self.revision += 1;
        Ok(updated)
    }

    /// Removes a SKU; unknown ids fail with `NotFound`.
    pub fn delete(&mut self, id: u64) -> Result<SkuRecord, RegistryError> {
        let idx = self.position_of_id(id).ok_or(RegistryError::NotFound(id))?;
        let removed = self.records.remove(idx);
        self.revision += 1;
        Ok(removed)
    }

    /// Removes every SKU and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.revision += 1;
        removed
    }

    /// Scored SKUs by descending priority, ties in insertion order.
    pub fn ranked(&self) -> Vec<ScoredSku> {
        let mut scored: Vec<ScoredSku> = self.records.iter().map(scoring::score).collect();
        scored.sort_by(|a, b| b.priority.total_cmp(&a.priority));
        scored
    }

    fn position_of_id(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn position_of_code(&self, sku_code: &str, except_id: Option<u64>) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.sku_code == sku_code && Some(record.id) != except_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attributes, ZoneLabel};

    fn sku(code: &str, f: f64) -> NewSku {
        NewSku::new(code, None, Attributes { f, w: f, s: f, i: f }).expect("valid SKU")
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut registry = SkuRegistry::new();
        let first = registry.add(sku("SKU01", 0.1)).expect("added");
        let second = registry.add(sku("SKU02", 0.2)).expect("added");
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.revision(), 2);
    }

    #[test]
    fn duplicate_add_leaves_collection_unchanged() {
        let mut registry = SkuRegistry::new();
        registry.add(sku("SKU01", 0.1)).expect("added");
        let before = registry.records().to_vec();
        let revision = registry.revision();

        let result = registry.add(sku("SKU01", 0.9));

        assert_eq!(result, Err(RegistryError::DuplicateSku("SKU01".to_string())));
        assert_eq!(registry.records(), before.as_slice());
        assert_eq!(registry.revision(), revision);
        assert_eq!(registry.next_id(), 2);
    }

    #[test]
    fn codes_are_case_sensitive() {
        let mut registry = SkuRegistry::new();
        registry.add(sku("sku01", 0.1)).expect("added");
        assert!(registry.add(sku("SKU01", 0.1)).is_ok());
        assert!(registry.add(sku(" sku01 ", 0.1)).is_err());
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut registry = SkuRegistry::new();
        registry.add(sku("SKU01", 0.1)).expect("added");
        registry.add(sku("SKU02", 0.2)).expect("added");

        let updated = registry.update(1, sku("SKU01-B", 0.5)).expect("updated");

        assert_eq!(updated.id, 1);
        assert_eq!(registry.records()[0].sku_code, "SKU01-B");
        assert_eq!(registry.records()[0].attributes.f, 0.5);
    }

    #[test]
    fn update_may_keep_own_code_but_not_take_another() {
        let mut registry = SkuRegistry::new();
        registry.add(sku("SKU01", 0.1)).expect("added");
        registry.add(sku("SKU02", 0.2)).expect("added");

        assert!(registry.update(1, sku("SKU01", 0.3)).is_ok());
        assert_eq!(
            registry.update(1, sku("SKU02", 0.3)),
            Err(RegistryError::DuplicateSku("SKU02".to_string()))
        );
        assert_eq!(registry.update(9, sku("SKU09", 0.3)), Err(RegistryError::NotFound(9)));
    }

    #[test]
    fn delete_unknown_id_fails() {
        let mut registry = SkuRegistry::new();
        let record = registry.add(sku("SKU01", 0.1)).expect("added");

        assert_eq!(registry.delete(record.id).map(|r| r.sku_code), Ok("SKU01".to_string()));
        assert_eq!(registry.delete(record.id), Err(RegistryError::NotFound(record.id)));
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut registry = SkuRegistry::new();
        let first = registry.add(sku("SKU01", 0.1)).expect("added");
        registry.delete(first.id).expect("deleted");
        let second = registry.add(sku("SKU01", 0.1)).expect("re-added");
        assert_eq!(second.id, 2);
    }

    #[test]
    fn clear_removes_everything() {
        let mut registry = SkuRegistry::new();
        registry.add(sku("SKU01", 0.1)).expect("added");
        registry.add(sku("SKU02", 0.2)).expect("added");
        assert_eq!(registry.clear(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn ranked_orders_by_priority_then_insertion() {
        let mut registry = SkuRegistry::new();
        registry.add(sku("LOW", 0.1)).expect("added");
        registry.add(sku("TIE-1", 0.6)).expect("added");
        registry.add(sku("HIGH", 0.9)).expect("added");
        registry.add(sku("TIE-2", 0.6)).expect("added");

        let ranked = registry.ranked();
        let codes: Vec<&str> = ranked.iter().map(|s| s.sku_code.as_str()).collect();
        assert_eq!(codes, vec!["HIGH", "TIE-1", "TIE-2", "LOW"]);
        assert_eq!(ranked[0].zone, ZoneLabel::A);
        assert_eq!(ranked[3].zone, ZoneLabel::D);
    }

    #[test]
    fn from_records_restores_next_id() {
        let records = vec![
            SkuRecord {
                id: 4,
                sku_code: "SKU04".to_string(),
                product_name: None,
                attributes: Attributes::default(),
            },
            SkuRecord {
                id: 9,
                sku_code: "SKU09".to_string(),
                product_name: None,
                attributes: Attributes::default(),
            },
        ];
        let registry = SkuRegistry::from_records(records.clone(), 2).expect("restored");
        assert_eq!(registry.next_id(), 10);
        assert_eq!(registry.len(), 2);

        let mut duplicated = records;
        duplicated[1].sku_code = "SKU04".to_string();
        assert!(SkuRegistry::from_records(duplicated, 1).is_err());
    }

    #[test]
    fn exhausted_ids_are_rejected() {
        let records = vec![SkuRecord {
            id: u64::MAX - 1,
            sku_code: "LAST".to_string(),
            product_name: None,
            attributes: Attributes::default(),
        }];
        let mut registry = SkuRegistry::from_records(records, 1).expect("restored");
        assert_eq!(registry.next_id(), u64::MAX);

        let result = registry.add(sku("SKU01", 0.1));

        assert!(matches!(result, Err(RegistryError::Invalid(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn add_missing_skips_known_codes() {
        let mut registry = SkuRegistry::new();
        registry.add(sku("SKU01", 0.1)).expect("added");

        let added = registry
            .add_missing(vec![sku("SKU01", 0.9), sku("SKU02", 0.2), sku("SKU03", 0.3)])
            .expect("added");

        let codes: Vec<&str> = added.iter().map(|r| r.sku_code.as_str()).collect();
        assert_eq!(codes, vec!["SKU02", "SKU03"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.records()[0].attributes.f, 0.1);
    }
}
