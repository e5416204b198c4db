//! Chunked parallel mapping over rayon.
//!
//! Each chunk is processed sequentially by one worker that owns a scratch
//! value, so per-item buffers can be reused across the items of a chunk.

use rayon::prelude::*;

/// Chunks per rayon thread when the chunk size is picked automatically.
const CHUNKS_PER_THREAD: usize = 4;

/// Chunk size giving roughly [`CHUNKS_PER_THREAD`] chunks per worker thread.
#[inline]
pub fn auto_chunk_size(len: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    len.div_ceil(num_chunks).max(1)
}

/// Maps `f` over `items` in parallel chunks, preserving input order.
///
/// `init` creates one scratch value per chunk. A `chunk_size` of 0 picks
/// [`auto_chunk_size`]. Returns the first error in input order; chunks that
/// have not started yet are skipped once an error is observed.
pub fn try_par_map_chunked<T, S, R, E, I, F>(
    items: &[T],
    chunk_size: usize,
    init: I,
    f: F,
) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    I: Fn() -> S + Sync,
    F: Fn(&mut S, &T) -> Result<R, E> + Sync,
{
    let chunk_size = if chunk_size == 0 {
        auto_chunk_size(items.len())
    } else {
        chunk_size
    };

    let chunks: Vec<Vec<R>> = items
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut scratch = init();
            chunk
                .iter()
                .map(|item| f(&mut scratch, item))
                .collect::<Result<Vec<R>, E>>()
        })
        .collect::<Result<_, E>>()?;

    Ok(chunks.into_iter().flatten().collect())
}

/// Sequential counterpart of [`try_par_map_chunked`] with a single scratch value.
pub fn try_map_with<T, S, R, E, F>(items: &[T], mut scratch: S, f: F) -> Result<Vec<R>, E>
where
    F: Fn(&mut S, &T) -> Result<R, E>,
{
    items.iter().map(|item| f(&mut scratch, item)).collect()
}
