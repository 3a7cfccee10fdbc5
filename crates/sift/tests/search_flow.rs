//! End-to-end flow tests: writes maintain the derived index through the
//! lifecycle hooks, and searches match against it via membership queries.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use sift::{
    BoxError, DEFAULT_INDEX_FIELD, FieldTokenizers, HostService, PreHook, Record, Search,
    WriteEvent,
};
use sift_filter::{Condition, Filter, FindOptions};

/// In-memory host service with just enough filter evaluation for equality,
/// membership, and AND-list queries.
#[derive(Default)]
struct MemoryService {
    records: Mutex<Vec<Record>>,
    create_hooks: Mutex<Vec<PreHook>>,
    update_hooks: Mutex<Vec<PreHook>>,
}

impl MemoryService {
    fn run_hooks(&self, event: WriteEvent, mut record: Record) -> Result<Record, BoxError> {
        let hooks = match event {
            WriteEvent::Create => &self.create_hooks,
            WriteEvent::Update => &self.update_hooks,
        };
        for hook in hooks.lock().unwrap().iter() {
            record = hook(record)?;
        }
        Ok(record)
    }

    /// Persists a new record, returning its external representation.
    fn create(&self, record: Record) -> Result<Record, BoxError> {
        let persisted = self.run_hooks(WriteEvent::Create, record)?;
        self.records.lock().unwrap().push(persisted.clone());
        Ok(external(persisted))
    }

    /// Replaces a record by `_id` with its merged proposed state.
    fn update(&self, record: Record) -> Result<Record, BoxError> {
        let persisted = self.run_hooks(WriteEvent::Update, record)?;
        let id = persisted.get("_id").cloned();
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.get("_id") == id.as_ref())
            .expect("update target exists");
        *slot = persisted.clone();
        drop(records);
        Ok(external(persisted))
    }

    /// The raw persisted form, index field included.
    fn stored(&self, id: &str) -> Record {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.get("_id") == Some(&json!(id)))
            .cloned()
            .expect("record exists")
    }
}

/// The host's external record representation: no derived index field.
fn external(mut record: Record) -> Record {
    record.remove(DEFAULT_INDEX_FIELD);
    record
}

fn matches(record: &Record, filter: &Filter) -> bool {
    for (field, condition) in filter.conditions() {
        let value = record.get(field);
        let hit = match condition {
            Condition::Eq(expected) => value == Some(expected),
            Condition::In(values) => match value {
                Some(Value::Array(items)) => items.iter().any(|item| values.contains(item)),
                Some(item) => values.contains(item),
                None => false,
            },
        };
        if !hit {
            return false;
        }
    }
    filter.and_list().iter().all(|sub| matches(record, sub))
}

impl HostService for MemoryService {
    fn pre(&self, event: WriteEvent, hook: PreHook) {
        match event {
            WriteEvent::Create => self.create_hooks.lock().unwrap().push(hook),
            WriteEvent::Update => self.update_hooks.lock().unwrap().push(hook),
        }
    }

    fn count(&self, filter: &Filter) -> Result<u64, BoxError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().filter(|r| matches(r, filter)).count() as u64)
    }

    fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<Record>, BoxError> {
        let records = self.records.lock().unwrap();
        let skip = options.skip.unwrap_or(0) as usize;
        let limit = options.limit.map_or(usize::MAX, |l| l as usize);
        Ok(records
            .iter()
            .filter(|r| matches(r, filter))
            .skip(skip)
            .take(limit)
            .cloned()
            .map(external)
            .collect())
    }
}

fn record(value: Value) -> Record {
    value.as_object().unwrap().clone()
}

fn tokenizers() -> FieldTokenizers {
    FieldTokenizers::new().text_field("title").text_field("body")
}

fn thingy_service() -> (Arc<MemoryService>, Search<MemoryService>) {
    let service = Arc::new(MemoryService::default());
    let search = Search::token_list(Arc::clone(&service), tokenizers()).unwrap();
    (service, search)
}

#[test]
fn create_computes_the_derived_index() {
    let (service, _search) = thingy_service();

    let created = service
        .create(record(json!({
            "_id": "1",
            "title": "Tremendous title",
            "body": "Bustling body",
        })))
        .unwrap();

    // The external representation never exposes the index field.
    assert!(!created.contains_key(DEFAULT_INDEX_FIELD));

    let stored = service.stored("1");
    let index = stored
        .get(DEFAULT_INDEX_FIELD)
        .and_then(Value::as_array)
        .expect("index stored");
    assert_eq!(index.len(), 4);

    let entries: Vec<&str> = index.iter().filter_map(Value::as_str).collect();
    let mut unique = entries.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 4);
    for entry in entries {
        assert_eq!(entry, entry.to_lowercase());
    }
}

#[test]
fn update_recomputes_the_index_in_full() {
    let (service, _search) = thingy_service();

    service
        .create(record(json!({
            "_id": "1",
            "title": "Tremendous title",
            "body": "Bustling body",
        })))
        .unwrap();

    let updated = service
        .update(record(json!({
            "_id": "1",
            "title": "Tremendous title",
            "body": "Big body",
        })))
        .unwrap();
    assert!(!updated.contains_key(DEFAULT_INDEX_FIELD));

    let stored = service.stored("1");
    let index = stored.get(DEFAULT_INDEX_FIELD).unwrap();
    let entries: Vec<&str> = index
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(entries.contains(&"big"));
    assert!(!entries.contains(&"bustl"));
}

#[test]
fn keyword_search_matches_stemmed_index_entries() {
    let (service, search) = thingy_service();

    service
        .create(record(json!({
            "_id": "1",
            "title": "Tremendous title",
            "body": "Bustling body",
        })))
        .unwrap();
    service
        .create(record(json!({
            "_id": "2",
            "title": "Quiet title",
            "body": "Calm body",
        })))
        .unwrap();

    // Inflected query forms match through shared stemming.
    let result = search.search("tremendously").unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.records[0].get("_id"), Some(&json!("1")));
    assert!(!result.records[0].contains_key(DEFAULT_INDEX_FIELD));

    // Multiple keywords are an AND: every one must be present.
    let result = search.search(vec!["tremendous", "bustling"]).unwrap();
    assert_eq!(result.total, 1);

    let result = search.search(vec!["tremendous", "calm"]).unwrap();
    assert_eq!(result.total, 0);
    assert!(result.records.is_empty());
}

#[test]
fn empty_search_is_an_unfiltered_find_plus_count() {
    let (service, search) = thingy_service();

    for id in ["1", "2", "3"] {
        service
            .create(record(json!({
                "_id": id,
                "title": "Shared title",
                "body": "Shared body",
            })))
            .unwrap();
    }

    let result = search.search("").unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.records.len(), 3);

    let result = search.search(Vec::<String>::new()).unwrap();
    assert_eq!(result.total, 3);
}

#[test]
fn base_filter_narrows_keyword_matches() {
    let (service, search) = thingy_service();

    service
        .create(record(json!({
            "_id": "1",
            "author": "Bob",
            "title": "Shared topic",
            "body": "",
        })))
        .unwrap();
    service
        .create(record(json!({
            "_id": "2",
            "author": "Alice",
            "title": "Shared topic",
            "body": "",
        })))
        .unwrap();

    let filter = Filter::new().with_eq("author", json!("Bob"));
    let result = search.search_filtered("topic", filter).unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.records[0].get("author"), Some(&json!("Bob")));
}

#[test]
fn custom_extractor_indexes_nested_structures() {
    let service = Arc::new(MemoryService::default());
    let tokenizers = tokenizers().field("tags", |value| {
        value.as_array().map(|tags| {
            tags.iter()
                .filter_map(|t| t.get("tag")?.as_str())
                .map(String::from)
                .collect()
        })
    });
    let search = Search::token_list(Arc::clone(&service), tokenizers).unwrap();

    service
        .create(record(json!({
            "_id": "1",
            "title": "A thing",
            "body": "Something about a thing",
            "tags": [{ "tag": "gadgets", "type": "category" }],
        })))
        .unwrap();

    let result = search.search("gadget").unwrap();
    assert_eq!(result.total, 1);
}

#[test]
fn paging_options_shape_the_result_page() {
    let (service, search) = thingy_service();

    for id in ["1", "2", "3"] {
        service
            .create(record(json!({
                "_id": id,
                "title": "Paged title",
                "body": "",
            })))
            .unwrap();
    }

    let result = search
        .search_with("paged", Filter::new(), FindOptions::new().with_skip(1).with_limit(1))
        .unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].get("_id"), Some(&json!("2")));
}

#[test]
fn count_alone_matches_search_totals() {
    let (service, search) = thingy_service();

    service
        .create(record(json!({
            "_id": "1",
            "title": "Tremendous title",
            "body": "Bustling body",
        })))
        .unwrap();

    assert_eq!(search.count("tremendous", Filter::new()).unwrap(), 1);
    assert_eq!(search.count("missing", Filter::new()).unwrap(), 0);
}
