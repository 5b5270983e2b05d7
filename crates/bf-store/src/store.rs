//! SQLite-backed station store.
//!
//! One file, two tables: `station_visits` (stop name → visit count) and a
//! single-row `automation_state`.  Every operation writes through
//! immediately — the store holds no in-process state to lose.

use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::Connection;

use crate::StoreResult;

/// Write-through visit counters plus the automation flag.
pub struct StationStore {
    conn: Connection,
}

impl StationStore {
    /// Open (or create) the store at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;
        Self::init(conn)
    }

    /// An in-memory store, for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS station_visits (
                 name   TEXT PRIMARY KEY,
                 visits INTEGER NOT NULL DEFAULT 0
             );
             CREATE TABLE IF NOT EXISTS automation_state (
                 id     INTEGER PRIMARY KEY CHECK (id = 0),
                 active INTEGER NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }

    /// Pre-register stations at a zero count so `read_all` lists every stop
    /// from the start, visited or not.  Existing counts are untouched.
    pub fn seed_stations<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> StoreResult<()> {
        let mut stmt = self
            .conn
            .prepare_cached("INSERT OR IGNORE INTO station_visits (name, visits) VALUES (?1, 0)")?;
        for name in names {
            stmt.execute([name])?;
        }
        Ok(())
    }

    /// Bump the visit count for `name`, registering it if unseen.
    pub fn increment(&self, name: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO station_visits (name, visits) VALUES (?1, 1)
             ON CONFLICT(name) DO UPDATE SET visits = visits + 1",
            [name],
        )?;
        Ok(())
    }

    /// Zero every visit count.  Registered stations stay registered.
    pub fn reset_all(&self) -> StoreResult<()> {
        self.conn
            .execute("UPDATE station_visits SET visits = 0", [])?;
        Ok(())
    }

    /// Record whether automation is active.
    pub fn set_automation(&self, active: bool) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO automation_state (id, active) VALUES (0, ?1)",
            [active as i64],
        )?;
        Ok(())
    }

    /// The recorded automation flag.  `false` if never set.
    pub fn automation(&self) -> StoreResult<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT active FROM automation_state WHERE id = 0")?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(row.get::<_, i64>(0)? != 0),
            None => Ok(false),
        }
    }

    /// All visit counts, sorted by station name.
    pub fn read_all(&self) -> StoreResult<BTreeMap<String, u64>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT name, visits FROM station_visits")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
        })?;

        let mut counts = BTreeMap::new();
        for row in rows {
            let (name, visits) = row?;
            counts.insert(name, visits);
        }
        Ok(counts)
    }
}
