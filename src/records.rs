//! Gene and mutation record types.
//!
//! `Mute` is the genomic variant record (chromosome/position/allele change);
//! the name avoids a collision with the GraphQL `Mutation` operation root.
//! Both types double as GraphQL objects, with the cross-collection fields
//! (`Gene.mutation`, `Mute.genes`) resolved against the shared
//! [`RecordStore`](crate::store::RecordStore) in the schema context.

use crate::store::RecordStore;
use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use serde::{Deserialize, Serialize};

/// A gene associated with a mutation.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    pub id: i32,
    pub name: String,
    /// References `Mute.id`. Not validated; a dangling reference simply
    /// resolves to no mutation.
    pub mutation_id: i32,
}

#[ComplexObject]
impl Gene {
    /// The mutation this gene is associated with.
    async fn mutation(&self, ctx: &Context<'_>) -> Result<Option<Mute>> {
        Ok(ctx.data::<RecordStore>()?.mutation(self.mutation_id))
    }
}

/// A mutation of a gene.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Mute {
    pub id: i32,
    /// Functional annotation, e.g. "splicing".
    pub func: String,
    pub chromosome: i32,
    pub start: i32,
    pub end: i32,
    /// Reference allele.
    #[graphql(name = "ref")]
    #[serde(rename = "ref")]
    pub ref_allele: String,
    /// Observed allele.
    pub obs: String,
    pub ref_genome: String,
}

#[ComplexObject]
impl Mute {
    /// All genes carrying this mutation, in insertion order.
    async fn genes(&self, ctx: &Context<'_>) -> Result<Vec<Gene>> {
        Ok(ctx.data::<RecordStore>()?.genes_for_mutation(self.id))
    }
}

/// Fields of a mutation record before the store assigns its id.
#[derive(Clone, Debug)]
pub struct NewMute {
    pub func: String,
    pub chromosome: i32,
    pub start: i32,
    pub end: i32,
    pub ref_allele: String,
    pub obs: String,
    pub ref_genome: String,
}
