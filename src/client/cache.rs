//! Session cache for read queries.
//!
//! The portfolio data never changes while a page is open, so entries are
//! kept until the client is dropped and there is no stale/fresh split.

use std::sync::Arc;

use dashmap::DashMap;

use crate::{
    contract::{Endpoint, ListExperiences, ListProjects, ListSkills},
    entities::{experience::Experience, project::Project, skill::Skill},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Projects,
    Skills,
    Experiences,
}

#[derive(Debug, Clone)]
pub enum CachedValue {
    Projects(Arc<Vec<Project>>),
    Skills(Arc<Vec<Skill>>),
    Experiences(Arc<Vec<Experience>>),
}

/// Snapshot of one query, as a view would render it.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub data: Option<CachedValue>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// A cacheable read endpoint.
pub trait Query: Endpoint<Request = ()> {
    const KEY: QueryKey;

    fn wrap(data: Arc<Self::Response>) -> CachedValue;
    fn from_cached(value: &CachedValue) -> Option<Arc<Self::Response>>;
}

impl Query for ListProjects {
    const KEY: QueryKey = QueryKey::Projects;

    fn wrap(data: Arc<Vec<Project>>) -> CachedValue {
        CachedValue::Projects(data)
    }

    fn from_cached(value: &CachedValue) -> Option<Arc<Vec<Project>>> {
        match value {
            CachedValue::Projects(data) => Some(data.clone()),
            _ => None,
        }
    }
}

impl Query for ListSkills {
    const KEY: QueryKey = QueryKey::Skills;

    fn wrap(data: Arc<Vec<Skill>>) -> CachedValue {
        CachedValue::Skills(data)
    }

    fn from_cached(value: &CachedValue) -> Option<Arc<Vec<Skill>>> {
        match value {
            CachedValue::Skills(data) => Some(data.clone()),
            _ => None,
        }
    }
}

impl Query for ListExperiences {
    const KEY: QueryKey = QueryKey::Experiences;

    fn wrap(data: Arc<Vec<Experience>>) -> CachedValue {
        CachedValue::Experiences(data)
    }

    fn from_cached(value: &CachedValue) -> Option<Arc<Vec<Experience>>> {
        match value {
            CachedValue::Experiences(data) => Some(data.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, QueryState>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: QueryKey) -> QueryState {
        self.entries
            .get(&key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn get<Q: Query>(&self) -> Option<Arc<Q::Response>> {
        self.entries
            .get(&Q::KEY)
            .and_then(|entry| entry.data.as_ref().and_then(Q::from_cached))
    }

    pub fn start_loading(&self, key: QueryKey) {
        let mut entry = self.entries.entry(key).or_default();
        entry.is_loading = true;
        entry.error = None;
    }

    pub fn store<Q: Query>(&self, data: Arc<Q::Response>) {
        self.entries.insert(Q::KEY, QueryState {
            data: Some(Q::wrap(data)),
            is_loading: false,
            error: None,
        });
    }

    /// Records a failure. Previously cached data, if any, is kept.
    pub fn fail(&self, key: QueryKey, error: String) {
        let mut entry = self.entries.entry(key).or_default();
        entry.is_loading = false;
        entry.error = Some(error);
    }
}
