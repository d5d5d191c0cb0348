//! Tally and filter accumulation.
//!
//! Pure in-memory state for one run: the three run counters, the per-country
//! tally, and the list of records matching the target continent. The
//! pipeline is single-threaded, so plain fields suffice.

use std::collections::BTreeMap;

use crate::countries::Continent;
use crate::record::Record;

/// The three monotone run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
    /// Lines that parsed successfully.
    pub records_seen: usize,
    /// Parsed records carrying a usable coordinate pair.
    pub records_with_coordinates: usize,
    /// Records whose continent matched the filter target.
    pub matched_records: usize,
}

/// Accumulates the tally and the filtered record set for one run.
pub struct Accumulator {
    target: Continent,
    counters: RunCounters,
    tally: BTreeMap<String, u64>,
    kept: Vec<Record>,
}

impl Accumulator {
    /// Creates an empty accumulator filtering on `target`.
    pub fn new(target: Continent) -> Self {
        Self {
            target,
            counters: RunCounters::default(),
            tally: BTreeMap::new(),
            kept: Vec::new(),
        }
    }

    /// Counts a successfully parsed record.
    pub fn record_seen(&mut self) {
        self.counters.records_seen += 1;
    }

    /// Counts a record that carries coordinates.
    ///
    /// Incremented before the geocode call, so geocode and resolution
    /// failures still show up here.
    pub fn record_with_coordinates(&mut self) {
        self.counters.records_with_coordinates += 1;
    }

    /// Registers a fully resolved record: bumps the country tally and, when
    /// the continent matches the target, keeps the record.
    pub fn observe(&mut self, country_name: &str, continent: Continent, record: Record) {
        *self.tally.entry(country_name.to_string()).or_insert(0) += 1;
        if continent == self.target {
            self.counters.matched_records += 1;
            self.kept.push(record);
        }
    }

    /// The continent this accumulator filters on.
    pub fn target(&self) -> Continent {
        self.target
    }

    /// Current counter snapshot.
    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    /// The per-country tally, ordered by country name.
    pub fn tally(&self) -> &BTreeMap<String, u64> {
        &self.tally
    }

    /// The records kept so far, in input order.
    pub fn kept(&self) -> &[Record] {
        &self.kept
    }

    /// Consumes the accumulator into its final parts.
    pub fn into_parts(self) -> (RunCounters, BTreeMap<String, u64>, Vec<Record>) {
        (self.counters, self.tally, self.kept)
    }
}
