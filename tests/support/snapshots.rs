use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HEADER: &str = "System;Station;Commodity;Sell;Buy;Demand;;Supply;;Date;";

/// One commodity row: name, station buy price, station sell price, demand,
/// supply.
pub type Row<'a> = (&'a str, i64, i64, i64, i64);

/// A temporary snapshot directory.
pub struct SnapshotDir {
    dir: TempDir,
}

impl SnapshotDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create snapshot dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a CSV snapshot for `location` (`system.station`) at `timestamp`.
    pub fn csv(&self, location: &str, timestamp: &str, rows: &[Row<'_>]) -> String {
        let (system, station) = location.split_once('.').expect("system.station");
        let mut body = String::from(HEADER);
        body.push('\n');
        for (name, buy_from_player, sell_to_player, demand, supply) in rows {
            body.push_str(&format!(
                "{system};{station};{name};{buy_from_player};{sell_to_player};;{demand};{supply};;{timestamp};\n"
            ));
        }
        let name = format!("{location}.{timestamp}.csv");
        self.raw(&name, &body);
        name
    }

    /// Write a `.prices` snapshot; its body is never read.
    pub fn prices(&self, location: &str, timestamp: &str) -> String {
        let name = format!("{location}.{timestamp}.prices");
        self.raw(&name, "@ 0\n");
        name
    }

    pub fn raw(&self, name: &str, body: &str) {
        fs::write(self.file(name), body).expect("write snapshot");
    }

    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }

    /// File names currently in the directory, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .expect("read snapshot dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Three stations, each a profitable origin for at least one other.
pub fn trading_triangle(dir: &SnapshotDir) {
    dir.csv(
        "Sol.Galileo",
        "2024-03-01T10.00.00",
        &[
            ("Gold", 9000, 8000, 0, 400),
            ("Tea", 1500, 1200, 100, 0),
            ("Water", 300, 120, 0, 1000),
        ],
    );
    dir.csv(
        "Esumindii.Nourse City",
        "2024-03-02T11.30.00",
        &[
            ("Gold", 9700, 9500, 250, 0),
            ("Tea", 1300, 900, 0, 2000),
            ("Water", 350, 200, 500, 0),
        ],
    );
    dir.csv(
        "Shinrarta Dezhra.Jameson Memorial",
        "2024-03-03T08.15.00",
        &[
            ("Gold", 8200, 7000, 50, 900),
            ("Tea", 2100, 1900, 300, 0),
        ],
    );
}
