//! Snapshot catalog and retention.
//!
//! The catalog indexes snapshot ids derived from a list of file names. It
//! performs no I/O: callers turn [`SnapshotCatalog::obsolete`] into file
//! deletions.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::location::Location;
use super::snapshot::{SnapshotId, SnapshotKind};
use crate::port::Reporter;

/// Partition of one kind's snapshots into the survivor per location and
/// everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionPlan {
    latest: BTreeMap<Location, SnapshotId>,
    obsolete: Vec<SnapshotId>,
}

impl RetentionPlan {
    /// Partition `ids` into the most recent id per location and the rest.
    ///
    /// Ids are folded in the order given. The first id seen for a location
    /// becomes the incumbent and a later id replaces it when its timestamp
    /// [supersedes](super::snapshot::Timestamp::supersedes) the incumbent's.
    /// Every id ends up in exactly one side of the partition.
    pub fn partition<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a SnapshotId>,
    {
        let ids: Vec<&SnapshotId> = ids.into_iter().collect();

        let mut latest: BTreeMap<Location, SnapshotId> = BTreeMap::new();
        for id in &ids {
            let replaces = latest
                .get(id.location())
                .map_or(true, |incumbent| id.timestamp().supersedes(incumbent.timestamp()));
            if replaces {
                latest.insert(id.location().clone(), (*id).clone());
            }
        }

        let survivors: HashSet<&str> = latest.values().map(SnapshotId::file_name).collect();
        let obsolete = ids
            .into_iter()
            .filter(|id| !survivors.contains(id.file_name()))
            .cloned()
            .collect();

        Self { latest, obsolete }
    }

    /// Surviving snapshot per location, ordered by location.
    pub fn latest(&self) -> &BTreeMap<Location, SnapshotId> {
        &self.latest
    }

    /// Snapshots superseded by a more recent one for the same location, in
    /// input order.
    pub fn obsolete(&self) -> &[SnapshotId] {
        &self.obsolete
    }

    /// Consume the plan, returning `(latest, obsolete)`.
    pub fn into_parts(self) -> (BTreeMap<Location, SnapshotId>, Vec<SnapshotId>) {
        (self.latest, self.obsolete)
    }
}

/// Index of snapshot ids known for one invocation.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    snapshots: Vec<SnapshotId>,
    ignored: Vec<String>,
}

impl SnapshotCatalog {
    /// Build a catalog from file names, in the order given.
    ///
    /// Names outside the snapshot naming convention are kept aside as
    /// ignored and reported at debug level. Repeated names are indexed once.
    pub fn from_names<I, S>(names: I, reporter: &dyn Reporter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut snapshots = Vec::new();
        let mut ignored = Vec::new();

        for name in names {
            let name = name.as_ref();
            if !seen.insert(name.to_string()) {
                continue;
            }
            match SnapshotId::from_file_name(name) {
                Some(id) => {
                    reporter.debug(&format!(
                        "indexed {} snapshot for {} at {}",
                        id.kind(),
                        id.location(),
                        id.timestamp()
                    ));
                    snapshots.push(id);
                }
                None => {
                    reporter.debug(&format!("ignoring non-snapshot file {name}"));
                    ignored.push(name.to_string());
                }
            }
        }

        Self { snapshots, ignored }
    }

    /// Every indexed snapshot, in input order.
    pub fn all(&self) -> &[SnapshotId] {
        &self.snapshots
    }

    /// Snapshots of one kind, in input order.
    pub fn snapshots(&self, kind: SnapshotKind) -> impl Iterator<Item = &SnapshotId> {
        self.snapshots.iter().filter(move |id| id.kind() == kind)
    }

    /// Snapshots of one kind filed under exactly `location`.
    pub fn snapshots_for<'a>(
        &'a self,
        location: &'a Location,
        kind: SnapshotKind,
    ) -> impl Iterator<Item = &'a SnapshotId> {
        self.snapshots(kind).filter(move |id| id.location() == location)
    }

    /// Names that were not recognised as snapshots.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Distinct known locations, sorted ascending.
    ///
    /// Locations come from the CSV family, the one commodity tables are
    /// loaded from.
    pub fn list_locations(&self) -> Vec<Location> {
        self.snapshots(SnapshotKind::Csv)
            .map(|id| id.location().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The most recent snapshot of `kind` for each location.
    pub fn most_recent(&self, kind: SnapshotKind) -> BTreeMap<Location, SnapshotId> {
        self.retention_plan(kind).into_parts().0
    }

    /// Every snapshot of `kind` that is not the most recent for its location.
    pub fn obsolete(&self, kind: SnapshotKind) -> Vec<SnapshotId> {
        self.retention_plan(kind).into_parts().1
    }

    /// Full retention partition for one kind.
    pub fn retention_plan(&self, kind: SnapshotKind) -> RetentionPlan {
        RetentionPlan::partition(self.snapshots(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::NullReporter;

    fn catalog(names: &[&str]) -> SnapshotCatalog {
        SnapshotCatalog::from_names(names.iter().copied(), &NullReporter)
    }

    fn file_names(ids: &[SnapshotId]) -> Vec<&str> {
        ids.iter().map(SnapshotId::file_name).collect()
    }

    #[test]
    fn newer_day_is_kept_and_older_is_obsolete() {
        let catalog = catalog(&["A.1.2024-01-01T00.00.00.csv", "A.1.2024-01-02T00.00.00.csv"]);

        let latest = catalog.most_recent(SnapshotKind::Csv);
        assert_eq!(latest.len(), 1);
        assert_eq!(
            latest[&Location::from("A.1")].file_name(),
            "A.1.2024-01-02T00.00.00.csv"
        );
        assert_eq!(
            file_names(&catalog.obsolete(SnapshotKind::Csv)),
            vec!["A.1.2024-01-01T00.00.00.csv"]
        );
    }

    #[test]
    fn newest_first_input_keeps_the_newest() {
        let catalog = catalog(&["A.1.2024-01-02T00.00.00.csv", "A.1.2024-01-01T00.00.00.csv"]);
        assert_eq!(
            file_names(&catalog.obsolete(SnapshotKind::Csv)),
            vec!["A.1.2024-01-01T00.00.00.csv"]
        );
    }

    #[test]
    fn later_smaller_month_with_greater_day_replaces_incumbent() {
        // Stop-on-first-greater: the month loses but the scan continues and
        // the day wins, so the January snapshot displaces February's.
        let catalog = catalog(&["A.1.2024-02-01T00.00.00.csv", "A.1.2024-01-15T00.00.00.csv"]);

        let latest = catalog.most_recent(SnapshotKind::Csv);
        assert_eq!(
            latest[&Location::from("A.1")].file_name(),
            "A.1.2024-01-15T00.00.00.csv"
        );
        assert_eq!(
            file_names(&catalog.obsolete(SnapshotKind::Csv)),
            vec!["A.1.2024-02-01T00.00.00.csv"]
        );
    }

    #[test]
    fn ascending_input_always_keeps_the_chronologically_latest() {
        let catalog = catalog(&[
            "A.1.2023-12-31T23.59.59.csv",
            "A.1.2024-01-15T00.00.00.csv",
            "A.1.2024-02-01T00.00.00.csv",
        ]);
        assert_eq!(
            catalog.most_recent(SnapshotKind::Csv)[&Location::from("A.1")].file_name(),
            "A.1.2024-02-01T00.00.00.csv"
        );
    }

    #[test]
    fn identical_timestamps_keep_the_first_seen() {
        let catalog = catalog(&["A.1.2024-01-01T00.00.00a.csv", "A.1.2024-01-01T00.00.00b.csv"]);
        assert_eq!(
            file_names(&catalog.obsolete(SnapshotKind::Csv)),
            vec!["A.1.2024-01-01T00.00.00b.csv"]
        );
    }

    #[test]
    fn kinds_are_retained_independently() {
        let catalog = catalog(&[
            "A.1.2024-01-01T00.00.00.csv",
            "A.1.2024-01-02T00.00.00.prices",
            "A.1.2024-01-03T00.00.00.prices",
        ]);

        assert!(catalog.obsolete(SnapshotKind::Csv).is_empty());
        assert_eq!(
            catalog.most_recent(SnapshotKind::Csv)[&Location::from("A.1")].file_name(),
            "A.1.2024-01-01T00.00.00.csv"
        );
        assert_eq!(
            file_names(&catalog.obsolete(SnapshotKind::Prices)),
            vec!["A.1.2024-01-02T00.00.00.prices"]
        );
    }

    #[test]
    fn every_snapshot_is_classified_exactly_once() {
        let names = [
            "A.1.2024-01-01T00.00.00.csv",
            "B.2.2024-05-01T10.00.00.csv",
            "A.1.2024-03-01T00.00.00.csv",
            "B.2.2024-04-30T23.00.00.csv",
            "A.1.2024-02-01T12.30.00.csv",
            "C.3.2024-01-01T00.00.00.csv",
        ];
        let catalog = catalog(&names);
        let plan = catalog.retention_plan(SnapshotKind::Csv);

        let latest: BTreeSet<&str> = plan.latest().values().map(SnapshotId::file_name).collect();
        let obsolete: BTreeSet<&str> = plan.obsolete().iter().map(SnapshotId::file_name).collect();

        assert!(latest.is_disjoint(&obsolete));
        let union: BTreeSet<&str> = latest.union(&obsolete).copied().collect();
        assert_eq!(union, names.iter().copied().collect());
        assert_eq!(plan.latest().len(), 3);
    }

    #[test]
    fn locations_are_sorted_and_distinct() {
        let catalog = catalog(&[
            "Sol.Galileo.2024-01-02T00.00.00.csv",
            "Achenar.Dawes Hub.2024-01-01T00.00.00.csv",
            "Sol.Galileo.2024-01-01T00.00.00.csv",
            "Lave.Lave Station.2024-01-01T00.00.00.prices",
        ]);

        let locations: Vec<String> = catalog
            .list_locations()
            .into_iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(locations, vec!["Achenar.Dawes Hub", "Sol.Galileo"]);
    }

    #[test]
    fn non_snapshot_names_are_ignored() {
        let catalog = catalog(&["systems.py", "A.1.2024-01-01T00.00.00.csv", "tmp"]);
        assert_eq!(catalog.all().len(), 1);
        assert_eq!(catalog.ignored(), ["systems.py", "tmp"]);
    }

    #[test]
    fn snapshots_for_matches_location_exactly() {
        let catalog = catalog(&["A.1.2024-01-01T00.00.00.csv", "XA.1.2024-01-01T00.00.00.csv"]);
        let location = Location::from("A.1");
        let matched: Vec<&SnapshotId> = catalog.snapshots_for(&location, SnapshotKind::Csv).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].file_name(), "A.1.2024-01-01T00.00.00.csv");
    }
}
