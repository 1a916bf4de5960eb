//! Persistence for precomputed city embeddings and ranking exports.
//!
//! Embeddings are expensive to recompute, so batch runs write them to a
//! compact bincode artifact that later ranking runs read back. Rankings
//! themselves are exported as JSON for downstream consumers.

use std::fs::File;
use std::io::{BufReader, BufWriter};

use bincode::Options;
use camino::Utf8Path;
use dalla_core::{City, Embedding};
use serde::{Deserialize, Serialize};

use crate::error::RankError;
use crate::types::RankedCity;

/// Bincode options used for embedding artifacts.
pub(crate) fn bincode_options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
}

/// One persisted city embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityEmbedding {
    /// Identifier of the city.
    pub id: u64,
    /// Display name of the city.
    pub name: String,
    /// Precomputed description embedding.
    pub embedding: Embedding,
}

/// Persist the embeddings of `cities` to a bincode artifact.
///
/// Cities without an embedding are omitted from the artifact. Returns the
/// number of records written.
///
/// # Errors
/// Returns [`RankError`] when the parent directory cannot be created or
/// the file cannot be written or serialised.
pub fn write_embeddings_file(path: &Utf8Path, cities: &[City]) -> Result<usize, RankError> {
    let records: Vec<CityEmbedding> = cities
        .iter()
        .filter_map(|city| {
            city.embedding.as_ref().map(|embedding| CityEmbedding {
                id: city.id,
                name: city.name.clone(),
                embedding: embedding.clone(),
            })
        })
        .collect();

    ensure_parent_dir(path)?;
    let file = File::create(path.as_std_path()).map_err(|source| RankError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    bincode_options()
        .serialize_into(writer, &records)
        .map_err(|source| RankError::Serialise {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(records.len())
}

/// Read a previously written embedding artifact.
///
/// # Errors
/// Returns [`RankError`] when the file cannot be opened or its contents
/// do not deserialise.
pub fn read_embeddings_file(path: &Utf8Path) -> Result<Vec<CityEmbedding>, RankError> {
    let file = File::open(path.as_std_path()).map_err(|source| RankError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    bincode_options()
        .deserialize_from(reader)
        .map_err(|source| RankError::Deserialise {
            path: path.to_path_buf(),
            source,
        })
}

/// Export a ranking as pretty-printed JSON.
///
/// # Errors
/// Returns [`RankError`] when the parent directory cannot be created or
/// the file cannot be written or serialised.
pub fn write_ranking_json(path: &Utf8Path, ranking: &[RankedCity]) -> Result<(), RankError> {
    ensure_parent_dir(path)?;
    let file = File::create(path.as_std_path()).map_err(|source| RankError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, ranking).map_err(|source| RankError::SerialiseJson {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Utf8Path) -> Result<(), RankError> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    std::fs::create_dir_all(parent.as_std_path()).map_err(|source| RankError::CreateParent {
        path: parent.to_path_buf(),
        source,
    })
}
