//! Versioned JSON snapshots of the SKU collection.
//!
//! Version 2 is the current layout:
//! `{"version": 2, "next_id": n, "skus": [{id, sku_code, product_name?, f, w, s, i}]}`.
//! Version 1 payloads carry no `version` field, no `product_name` and may hold
//! stale `priority`/`zone` fields plus unvalidated attributes; they are
//! migrated on load.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::fs;

use crate::model::{Attributes, NewSku, SkuRecord};
use crate::registry::{RegistryError, SkuRegistry};

pub const CURRENT_VERSION: u64 = 2;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(String),
    #[error("snapshot contains invalid data: {0}")]
    Invalid(#[from] RegistryError),
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u64,
    next_id: u64,
    skus: Vec<StoredSku>,
}

#[derive(Serialize, Deserialize)]
struct StoredSku {
    id: u64,
    sku_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    product_name: Option<String>,
    f: f64,
    w: f64,
    s: f64,
    i: f64,
}

#[derive(Deserialize)]
struct LegacySnapshot {
    skus: Vec<LegacySku>,
}

#[derive(Deserialize)]
struct LegacySku {
    id: u64,
    sku_code: String,
    #[serde(default)]
    f: f64,
    #[serde(default)]
    w: f64,
    #[serde(default)]
    s: f64,
    #[serde(default)]
    i: f64,
}

/// Serializes the registry in the current snapshot format.
pub fn encode(registry: &SkuRegistry) -> Result<String, SnapshotError> {
    let snapshot = Snapshot {
        version: CURRENT_VERSION,
        next_id: registry.next_id(),
        skus: registry
            .records()
            .iter()
            .map(|record| StoredSku {
                id: record.id,
                sku_code: record.sku_code.clone(),
                product_name: record.product_name.clone(),
                f: record.attributes.f,
                w: record.attributes.w,
                s: record.attributes.s,
                i: record.attributes.i,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Reads a snapshot of any supported version.
pub fn decode(text: &str) -> Result<SkuRegistry, SnapshotError> {
    let value: Value = serde_json::from_str(text)?;
    match value.get("version") {
        None => migrate_v1(serde_json::from_value(value)?),
        Some(version) if version.as_u64() == Some(CURRENT_VERSION) => {
            let snapshot: Snapshot = serde_json::from_value(value)?;
            let records = snapshot
                .skus
                .into_iter()
                .map(|sku| {
                    let attributes = Attributes::new(sku.f, sku.w, sku.s, sku.i)?;
                    record_from(sku.id, &sku.sku_code, sku.product_name.as_deref(), attributes)
                })
                .collect::<Result<Vec<_>, RegistryError>>()?;
            Ok(SkuRegistry::from_records(records, snapshot.next_id)?)
        }
        Some(other) => Err(SnapshotError::UnsupportedVersion(other.to_string())),
    }
}

fn migrate_v1(legacy: LegacySnapshot) -> Result<SkuRegistry, SnapshotError> {
    let records = legacy
        .skus
        .into_iter()
        .map(|sku| {
            let attributes = Attributes::clamped(sku.f, sku.w, sku.s, sku.i);
            record_from(sku.id, &sku.sku_code, None, attributes)
        })
        .collect::<Result<Vec<_>, RegistryError>>()?;
    Ok(SkuRegistry::from_records(records, 1)?)
}

fn record_from(
    id: u64,
    sku_code: &str,
    product_name: Option<&str>,
    attributes: Attributes,
) -> Result<SkuRecord, RegistryError> {
    let sku = NewSku::new(sku_code, product_name, attributes)?;
    Ok(SkuRecord {
        id,
        sku_code: sku.sku_code,
        product_name: sku.product_name,
        attributes: sku.attributes,
    })
}

/// Loads a snapshot file; a missing file yields `None`.
pub async fn load(path: &Path) -> Result<Option<SkuRegistry>, SnapshotError> {
    match fs::read_to_string(path).await {
        Ok(text) => Ok(Some(decode(&text)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Writes the registry to `path` via a temporary sibling file.
pub async fn save(path: &Path, registry: &SkuRegistry) -> Result<(), SnapshotError> {
    let text = encode(registry)?;
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    fs::write(tmp_path, text).await?;
    fs::rename(tmp_path, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ZoneLabel;

    fn sample_registry() -> SkuRegistry {
        let mut registry = SkuRegistry::new();
        registry
            .add(
                NewSku::new(
                    "SKU01",
                    Some("Power Bank 10,000mAh"),
                    Attributes { f: 0.9, w: 0.05, s: 0.006, i: 0.9 },
                )
                .expect("valid"),
            )
            .expect("added");
        registry
            .add(NewSku::new("SKU02", None, Attributes::default()).expect("valid"))
            .expect("added");
        registry.delete(2).expect("deleted");
        registry
    }

    #[test]
    fn current_snapshot_restores_records_and_next_id() {
        let registry = sample_registry();
        let text = encode(&registry).expect("encodes");
        let restored = decode(&text).expect("decodes");

        assert_eq!(restored.records(), registry.records());
        assert_eq!(restored.next_id(), 3);
    }

    #[test]
    fn legacy_snapshot_is_migrated() {
        let legacy = r#"{
            "skus": [
                { "id": 3, "sku_code": "SKU03", "f": 1.0, "w": 0.05, "s": 0.0016, "i": 1.0,
                  "priority": 0.1, "zone": "D" },
                { "id": 5, "sku_code": "SKU16", "f": 10, "w": -1, "s": 0.5 }
            ]
        }"#;

        let registry = decode(legacy).expect("migrates");

        assert_eq!(registry.next_id(), 6);
        let ranked = registry.ranked();
        let sku03 = ranked.iter().find(|s| s.sku_code == "SKU03").expect("SKU03 kept");
        assert_eq!(sku03.zone, ZoneLabel::B);
        assert_eq!(sku03.product_name, None);
        let sku16 = registry.get(5).expect("SKU16 kept");
        assert_eq!(sku16.attributes, Attributes { f: 1.0, w: 0.0, s: 0.5, i: 0.0 });
    }

    #[test]
    fn rejects_unknown_versions_and_invalid_data() {
        assert!(matches!(
            decode(r#"{"version": 7, "next_id": 1, "skus": []}"#),
            Err(SnapshotError::UnsupportedVersion(_))
        ));
        assert!(matches!(
            decode(r#"{"version": 2, "next_id": 1, "skus": [
                {"id": 1, "sku_code": "X", "f": 2.0, "w": 0, "s": 0, "i": 0}
            ]}"#),
            Err(SnapshotError::Invalid(_))
        ));
        assert!(matches!(decode("not json"), Err(SnapshotError::Format(_))));
    }

    #[test]
    fn rejects_ids_at_the_top_of_the_range() {
        let text = r#"{"version": 2, "next_id": 1, "skus": [
            {"id": 18446744073709551615, "sku_code": "X", "f": 0, "w": 0, "s": 0, "i": 0}
        ]}"#;
        assert!(matches!(decode(text), Err(SnapshotError::Invalid(_))));
    }

    #[tokio::test]
    async fn save_and_load_round_trip_through_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("skus.json");

        assert!(load(&path).await.expect("missing file is fine").is_none());

        let registry = sample_registry();
        save(&path, &registry).await.expect("saved");
        let restored = load(&path).await.expect("loaded").expect("file present");

        assert_eq!(restored.records(), registry.records());
        assert!(!dir.path().join("skus.json.tmp").exists());
    }
}
