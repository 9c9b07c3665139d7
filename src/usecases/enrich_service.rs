//! Contact enrichment: phone -> area code -> city -> mood.
//!
//! - Unresolvable contacts are dropped silently
//! - One mood lookup per distinct city, all launched concurrently (JoinSet)
//! - Failed lookups degrade to fallback values for that city only
//! - Output is sorted by name after every lookup has finished

use crate::domain::area_code::extract_area_code;
use crate::domain::sentiment::{FALLBACK_EMOJI, FALLBACK_MOOD};
use crate::domain::{CityMood, Contact, ContactRow, DomainError};
use crate::ports::{CityMoodSource, ContactsProvider};
use crate::usecases::area_code_lookup::AreaCodeLookup;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

/// Output of one enrichment pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichReport {
    pub rows: Vec<ContactRow>,
    /// Rows carrying fallback mood values.
    pub fallbacks: usize,
    /// Distinct city lookups issued.
    pub lookups: usize,
}

pub struct ContactEnricher {
    area_codes: Arc<AreaCodeLookup>,
    moods: Arc<dyn CityMoodSource>,
}

impl ContactEnricher {
    pub fn new(area_codes: Arc<AreaCodeLookup>, moods: Arc<dyn CityMoodSource>) -> Self {
        Self { area_codes, moods }
    }

    /// One row per resolvable contact, sorted by name.
    pub async fn enrich(&self, contacts: &[Contact]) -> Vec<ContactRow> {
        self.enrich_report(contacts).await.rows
    }

    pub async fn enrich_report(&self, contacts: &[Contact]) -> EnrichReport {
        // Area codes are resolved once per batch, not once per contact.
        let mut resolved_codes: HashMap<String, Option<String>> = HashMap::new();
        let mut pending: Vec<(&Contact, String)> = Vec::with_capacity(contacts.len());
        let mut cities: BTreeSet<String> = BTreeSet::new();

        for contact in contacts {
            let Some(code) = extract_area_code(&contact.phone) else {
                debug!(name = %contact.name, "no area code in phone; skipping");
                continue;
            };
            let city = match resolved_codes.get(&code) {
                Some(city) => city.clone(),
                None => {
                    let city = self.area_codes.resolve(&code).await.map(|loc| loc.city);
                    resolved_codes.insert(code.clone(), city.clone());
                    city
                }
            };
            let Some(city) = city else {
                debug!(name = %contact.name, area_code = %code, "unknown area code; skipping");
                continue;
            };
            cities.insert(city.clone());
            pending.push((contact, city));
        }

        let lookups = cities.len();
        let moods = self.fetch_moods(cities).await;

        let mut fallbacks = 0usize;
        let mut rows: Vec<ContactRow> = pending
            .into_iter()
            .map(|(contact, city)| {
                let (emoji, mood) = match moods.get(&city) {
                    Some(m) => (m.emoji.clone(), m.label.clone()),
                    None => {
                        fallbacks += 1;
                        (FALLBACK_EMOJI.to_string(), FALLBACK_MOOD.to_string())
                    }
                };
                ContactRow {
                    name: contact.name.clone(),
                    phone: contact.phone.clone(),
                    city,
                    emoji,
                    mood,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.phone.cmp(&b.phone)));

        info!(
            contacts = contacts.len(),
            rows = rows.len(),
            lookups,
            fallbacks,
            "contacts enriched"
        );

        EnrichReport {
            rows,
            fallbacks,
            lookups,
        }
    }

    /// Fan out one lookup per city and wait for all of them.
    /// Cities whose lookup failed (or whose task died) are absent from the map.
    async fn fetch_moods(&self, cities: BTreeSet<String>) -> HashMap<String, CityMood> {
        let mut set = JoinSet::new();
        for city in cities {
            let source = Arc::clone(&self.moods);
            set.spawn(async move {
                let result = source.fetch_city_mood(&city).await;
                (city, result)
            });
        }

        let mut moods = HashMap::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((city, Ok(mood))) => {
                    moods.insert(city, mood);
                }
                Ok((city, Err(e))) => {
                    warn!(city = %city, error = %e, "city mood lookup failed; using fallback");
                }
                Err(e) => {
                    warn!(error = %e, "city mood task did not complete; using fallback");
                }
            }
        }
        moods
    }
}

/// Published state of the contacts screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading {
        generation: u64,
    },
    Ready {
        generation: u64,
        rows: Vec<ContactRow>,
        fallbacks: usize,
    },
}

/// Runs enrichment passes and publishes their results.
///
/// A new `load` aborts the one in flight; only the newest generation is ever published.
pub struct ContactsLoader {
    contacts: Arc<dyn ContactsProvider>,
    enricher: Arc<ContactEnricher>,
    state: Arc<watch::Sender<LoadState>>,
    generation: AtomicU64,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl ContactsLoader {
    pub fn new(contacts: Arc<dyn ContactsProvider>, enricher: Arc<ContactEnricher>) -> Self {
        let (tx, _rx) = watch::channel(LoadState::Idle);
        Self {
            contacts,
            enricher,
            state: Arc::new(tx),
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Start a load cycle, superseding any running one. Returns its generation.
    pub async fn load(&self) -> u64 {
        let mut in_flight = self.in_flight.lock().await;
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(LoadState::Loading { generation });

        let contacts = Arc::clone(&self.contacts);
        let enricher = Arc::clone(&self.enricher);
        let state = Arc::clone(&self.state);
        *in_flight = Some(tokio::spawn(async move {
            let report = match contacts.read_contacts().await {
                Ok(list) => enricher.enrich_report(&list).await,
                Err(e) => {
                    warn!(error = %e, "reading contacts failed; publishing empty result");
                    EnrichReport::default()
                }
            };
            // Publish only if no newer load has started in the meantime.
            state.send_if_modified(|current| match current {
                LoadState::Loading { generation: g } if *g == generation => {
                    *current = LoadState::Ready {
                        generation,
                        rows: report.rows,
                        fallbacks: report.fallbacks,
                    };
                    true
                }
                _ => false,
            });
        }));

        generation
    }

    /// Wait for the given generation to be ready. `None` if it was superseded.
    pub async fn wait_ready(&self, generation: u64) -> Option<Vec<ContactRow>> {
        let mut rx = self.state.subscribe();
        let state = rx
            .wait_for(|s| match s {
                LoadState::Idle => false,
                LoadState::Loading { generation: g } => *g > generation,
                LoadState::Ready { generation: g, .. } => *g >= generation,
            })
            .await
            .ok()?;
        match &*state {
            LoadState::Ready {
                generation: g,
                rows,
                ..
            } if *g == generation => Some(rows.clone()),
            _ => None,
        }
    }

    /// Convenience: start a load and wait for its rows.
    pub async fn load_and_wait(&self) -> Result<Vec<ContactRow>, DomainError> {
        let generation = self.load().await;
        self.wait_ready(generation)
            .await
            .ok_or_else(|| DomainError::Contacts("load superseded by a newer request".into()))
    }
}
