//! GraphQL schema roots.
//!
//! Argument validation (missing required arguments, type mismatches) happens
//! in the execution engine before any resolver runs; a failed singular
//! lookup is a null result, not an error.

use crate::records::{Gene, Mute, NewMute};
use crate::store::RecordStore;
use async_graphql::{Context, EmptySubscription, Object, Result, Schema};

pub type GeneGraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around a record store.
pub fn build_schema(store: RecordStore) -> GeneGraphSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single gene.
    async fn gene(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Gene>> {
        let store = ctx.data::<RecordStore>()?;
        Ok(id.and_then(|id| store.gene(id)))
    }

    /// List of all genes.
    async fn genes(&self, ctx: &Context<'_>) -> Result<Vec<Gene>> {
        Ok(ctx.data::<RecordStore>()?.genes())
    }

    /// A single mutation.
    async fn mutation(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Mute>> {
        let store = ctx.data::<RecordStore>()?;
        Ok(id.and_then(|id| store.mutation(id)))
    }

    /// List of all mutations.
    async fn mutations(&self, ctx: &Context<'_>) -> Result<Vec<Mute>> {
        Ok(ctx.data::<RecordStore>()?.mutations())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a gene.
    async fn add_gene(&self, ctx: &Context<'_>, name: String, mutation_id: i32) -> Result<Gene> {
        Ok(ctx.data::<RecordStore>()?.add_gene(name, mutation_id))
    }

    /// Add a mutation.
    #[allow(clippy::too_many_arguments)]
    async fn add_mutation(
        &self,
        ctx: &Context<'_>,
        func: String,
        chromosome: i32,
        start: i32,
        end: i32,
        #[graphql(name = "ref")] ref_allele: String,
        obs: String,
        ref_genome: String,
    ) -> Result<Mute> {
        Ok(ctx.data::<RecordStore>()?.add_mutation(NewMute {
            func,
            chromosome,
            start,
            end,
            ref_allele,
            obs,
            ref_genome,
        }))
    }
}
