use std::collections::BTreeMap;

use crate::record::{DailyRecord, Jurisdiction};

/// Reverse records delivered newest first, so the result is oldest first.
pub fn oldest_first(mut records: Vec<DailyRecord>) -> Vec<DailyRecord> {
    records.reverse();
    records
}

/// Oldest-first records of every jurisdiction in one fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedSeries(BTreeMap<Jurisdiction, Vec<DailyRecord>>);

impl GroupedSeries {
    /// Partition `records` (already oldest first) by jurisdiction. The
    /// relative order of records is kept within each group.
    pub fn from_oldest_first(records: Vec<DailyRecord>) -> Self {
        let mut groups: BTreeMap<Jurisdiction, Vec<DailyRecord>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.jurisdiction.clone())
                .or_default()
                .push(record);
        }
        log::debug!("grouped records into {} jurisdictions", groups.len());
        Self(groups)
    }

    pub fn get(&self, jurisdiction: &Jurisdiction) -> Option<&[DailyRecord]> {
        self.0.get(jurisdiction).map(Vec::as_slice)
    }

    /// Jurisdictions in ascending order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = &Jurisdiction> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Jurisdiction, &[DailyRecord])> {
        self.0.iter().map(|(j, records)| (j, records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
