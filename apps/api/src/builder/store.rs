//! JSON-on-disk resume store with an in-memory cache.
//!
//! One file per resume id under the storage directory. No locking:
//! concurrent writers to the same id are last-write-wins, acceptable under
//! the single-process deployment this service assumes.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::models::builder::{ResumeBuilder, ResumeSummaryRow};

pub struct ResumeStore {
    dir: PathBuf,
    cache: RwLock<HashMap<String, ResumeBuilder>>,
}

impl ResumeStore {
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(ResumeStore {
            dir,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Ids are generated UUIDs; anything else (path separators in
    /// particular) is refused before touching the filesystem.
    fn path_for(&self, id: &str) -> Option<PathBuf> {
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        safe.then(|| self.dir.join(format!("{id}.json")))
    }

    pub fn get(&self, id: &str) -> Option<ResumeBuilder> {
        if let Some(found) = self.cache.read().unwrap().get(id) {
            return Some(found.clone());
        }

        let path = self.path_for(id)?;
        let data = fs::read_to_string(path).ok()?;
        let builder: ResumeBuilder = serde_json::from_str(&data).ok()?;
        self.cache
            .write()
            .unwrap()
            .insert(id.to_string(), builder.clone());
        Some(builder)
    }

    /// Caches a resume in memory without persisting it. Callers persist
    /// explicitly via [`save`](Self::save).
    pub fn insert(&self, builder: ResumeBuilder) {
        self.cache
            .write()
            .unwrap()
            .insert(builder.id.clone(), builder);
    }

    /// Persists a resume to disk (and refreshes the cache).
    pub fn save(&self, builder: &ResumeBuilder) -> io::Result<()> {
        let path = self
            .path_for(&builder.id)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid resume id"))?;
        let data = serde_json::to_string_pretty(builder)?;
        fs::write(path, data)?;
        self.insert(builder.clone());
        Ok(())
    }

    /// Removes a resume from cache and disk. Returns whether anything was
    /// actually deleted.
    pub fn delete(&self, id: &str) -> bool {
        let cached = self.cache.write().unwrap().remove(id).is_some();
        let on_disk = self
            .path_for(id)
            .map(|path| fs::remove_file(path).is_ok())
            .unwrap_or(false);
        cached || on_disk
    }

    /// Metadata for every known resume: cached ones first, then any on-disk
    /// documents not currently cached.
    pub fn list(&self) -> Vec<ResumeSummaryRow> {
        let cache = self.cache.read().unwrap();
        let mut rows: Vec<ResumeSummaryRow> = cache
            .values()
            .map(|b| ResumeSummaryRow {
                id: b.id.clone(),
                title: b.title.clone(),
                created_at: b.created_at.clone(),
                updated_at: b.updated_at.clone(),
            })
            .collect();

        if let Ok(entries) = fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let id = match path.file_stem().and_then(|s| s.to_str()) {
                    Some(stem) => stem.to_string(),
                    None => continue,
                };
                if cache.contains_key(&id) {
                    continue;
                }
                let Ok(data) = fs::read_to_string(&path) else {
                    continue;
                };
                let Ok(builder) = serde_json::from_str::<ResumeBuilder>(&data) else {
                    continue;
                };
                rows.push(ResumeSummaryRow {
                    id: builder.id,
                    title: builder.title,
                    created_at: builder.created_at,
                    updated_at: builder.updated_at,
                });
            }
        }

        rows
    }
}
