//! In-memory record store for genes and mutations.
//!
//! Both collections live behind one mutex so the store can be shared as
//! schema context data across concurrent requests. Records are append-only;
//! ids come from store-owned monotonic counters, incremented under the same
//! lock as the append, so concurrent inserts can never collide.

use crate::records::{Gene, Mute, NewMute};
use serde::Deserialize;
use std::sync::Mutex;

const SEED_RECORDS_JSON: &str = include_str!("../assets/seed_records.json");

#[derive(Deserialize)]
struct SeedCatalog {
    mutations: Vec<Mute>,
    genes: Vec<Gene>,
}

#[derive(Debug, Default)]
struct Inner {
    genes: Vec<Gene>,
    mutations: Vec<Mute>,
    next_gene_id: i32,
    next_mutation_id: i32,
}

/// Holder of the gene and mutation sequences. No eviction, no capacity
/// limit, no persistence; lifetime equals process lifetime.
#[derive(Debug)]
pub struct RecordStore {
    inner: Mutex<Inner>,
}

impl RecordStore {
    /// Store seeded with the built-in catalog (3 mutations, 8 genes).
    pub fn seeded() -> Self {
        Self::from_json_str(SEED_RECORDS_JSON).expect("Built-in seed catalog is invalid JSON")
    }

    /// Load a seed catalog from JSON text. Id counters start past the
    /// highest seeded id of each collection.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let catalog: SeedCatalog = serde_json::from_str(json)?;
        let next_gene_id = catalog.genes.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let next_mutation_id = catalog.mutations.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Ok(Self {
            inner: Mutex::new(Inner {
                genes: catalog.genes,
                mutations: catalog.mutations,
                next_gene_id,
                next_mutation_id,
            }),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("Record store mutex poisoned")
    }

    /// The first gene with the given id, if any.
    pub fn gene(&self, id: i32) -> Option<Gene> {
        self.lock().genes.iter().find(|g| g.id == id).cloned()
    }

    /// All genes, in insertion order.
    pub fn genes(&self) -> Vec<Gene> {
        self.lock().genes.clone()
    }

    /// The first mutation with the given id, if any.
    pub fn mutation(&self, id: i32) -> Option<Mute> {
        self.lock().mutations.iter().find(|m| m.id == id).cloned()
    }

    /// All mutations, in insertion order.
    pub fn mutations(&self) -> Vec<Mute> {
        self.lock().mutations.clone()
    }

    /// All genes referencing the given mutation id, in insertion order.
    pub fn genes_for_mutation(&self, mutation_id: i32) -> Vec<Gene> {
        self.lock()
            .genes
            .iter()
            .filter(|g| g.mutation_id == mutation_id)
            .cloned()
            .collect()
    }

    /// Append a new gene and return it. `mutation_id` is not checked
    /// against the mutation collection.
    pub fn add_gene(&self, name: String, mutation_id: i32) -> Gene {
        let mut inner = self.lock();
        let gene = Gene {
            id: inner.next_gene_id,
            name,
            mutation_id,
        };
        inner.next_gene_id += 1;
        inner.genes.push(gene.clone());
        tracing::debug!(id = gene.id, name = %gene.name, "added gene");
        gene
    }

    /// Append a new mutation record and return it.
    pub fn add_mutation(&self, new: NewMute) -> Mute {
        let mut inner = self.lock();
        let mutation = Mute {
            id: inner.next_mutation_id,
            func: new.func,
            chromosome: new.chromosome,
            start: new.start,
            end: new.end,
            ref_allele: new.ref_allele,
            obs: new.obs,
            ref_genome: new.ref_genome,
        };
        inner.next_mutation_id += 1;
        inner.mutations.push(mutation.clone());
        tracing::debug!(id = mutation.id, "added mutation");
        mutation
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::seeded()
    }
}
