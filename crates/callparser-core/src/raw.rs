// crates/callparser-core/src/raw.rs
use crate::common::PrefixKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Raw prefix record as it comes out of the reference dataset.
///
/// NOTE: This type mirrors the external dataset. Field names follow the
/// dataset's element names (`dxcc_entity`, `cq_zone`, `lat`, ...), so a
/// converted `PrefixList.xml` deserializes without renaming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPrefixRecord {
    /// Full prefix label, e.g. `3B6.3B7`.
    pub label: String,
    #[serde(default)]
    pub kind: PrefixKind,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, rename = "dxcc_entity")]
    pub dxcc: u32,
    #[serde(default, rename = "cq_zone", deserialize_with = "zone_set")]
    pub cq: BTreeSet<u16>,
    #[serde(default, rename = "itu_zone", deserialize_with = "zone_set")]
    pub itu: BTreeSet<u16>,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default, rename = "lat")]
    pub latitude: String,
    #[serde(default, rename = "long")]
    pub longitude: String,
    #[serde(default, rename = "wae_entity")]
    pub wae: u32,
    #[serde(default, rename = "wap_entity")]
    pub wap: String,
    #[serde(default, alias = "province_id")]
    pub admin1: String,
    #[serde(default)]
    pub admin2: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub comment: String,
    /// Unexpanded masks, e.g. `[AKW]L#/`.
    #[serde(default, alias = "mask")]
    pub masks: Vec<String>,
}

impl RawPrefixRecord {
    /// The label up to the first `.`; the whole label if there is none.
    ///
    /// `3B6.3B7` -> `3B6`, `W` -> `W`.
    pub fn main_prefix(&self) -> &str {
        match self.label.find('.') {
            Some(idx) => &self.label[..idx],
            None => &self.label,
        }
    }
}

pub type PrefixRecordsRaw = Vec<RawPrefixRecord>;

/// Zones arrive either as `"3,4"` or as `[3, 4]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ZoneField {
    Text(String),
    Number(u16),
    List(Vec<u16>),
}

fn zone_set<'de, D>(deserializer: D) -> Result<BTreeSet<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<ZoneField>::deserialize(deserializer)?;
    Ok(match field {
        None => BTreeSet::new(),
        Some(ZoneField::Number(z)) => BTreeSet::from([z]),
        Some(ZoneField::List(list)) => list.into_iter().collect(),
        Some(ZoneField::Text(s)) => parse_zone_list(&s),
    })
}

/// Parses a comma separated zone list, silently dropping junk entries.
pub fn parse_zone_list(s: &str) -> BTreeSet<u16> {
    s.split(',')
        .filter_map(|z| z.trim().parse::<u16>().ok())
        .collect()
}
