// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `PositionIndex` API: build, rebuild, and offset queries.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::source::ContentSource;
use crate::table::PositionTable;
use crate::types::{IndexConfig, IndexError, VExtent, floor_to_i64, round_to_i64};

/// A vertical position index over one container's content.
///
/// Owns the configuration, the table produced by the most recent
/// [`build`](Self::build) or [`rebuild`](Self::rebuild), and the per-build
/// extent lookup. Queries read the most recent table; there is no automatic
/// invalidation, so callers trigger rebuilds explicitly after content
/// mutation.
///
/// Builds and queries are synchronous, single-owner computations. The table
/// is immutable once built and queries have no side effects, but a query
/// must never run concurrently with a build.
pub struct PositionIndex<N> {
    container: N,
    config: IndexConfig,
    origin: f64,
    table: PositionTable<N>,
    extents: HashMap<N, VExtent>,
}

impl<N: Debug> Debug for PositionIndex<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositionIndex")
            .field("container", &self.container)
            .field("resolution", &self.table.resolution())
            .field("slots", &self.table.len())
            .field("occupied", &self.table.occupied())
            .field("nodes", &self.extents.len())
            .finish_non_exhaustive()
    }
}

impl<N: Copy + Eq + Hash + Debug> PositionIndex<N> {
    /// Build an index over `container`'s content.
    ///
    /// Captures the container extent once, runs every enabled walk in a
    /// single pass each (text first, then elements), merges their results
    /// into one table, and sorts each bucket ascending by node height.
    ///
    /// Fails only when `container` has no resolvable finite geometry.
    /// Per-node anomalies never fail a build: nodes without geometry, with
    /// non-finite or non-positive height, or whose span collapses under
    /// quantization are silently excluded, and a walk yielding no candidates
    /// contributes nothing.
    pub fn build<S>(source: &S, container: N, config: IndexConfig) -> Result<Self, IndexError>
    where
        S: ContentSource<Node = N>,
    {
        let mut index = Self {
            container,
            config,
            origin: 0.0,
            table: PositionTable::with_len(1.0, 0),
            extents: HashMap::new(),
        };
        index.run_build(source)?;
        Ok(index)
    }

    /// Re-run the full build with the stored container and configuration.
    ///
    /// The previous table and lookups are discarded wholesale; every rebuild
    /// recomputes from scratch. Call after content mutation.
    pub fn rebuild<S>(&mut self, source: &S) -> Result<(), IndexError>
    where
        S: ContentSource<Node = N>,
    {
        self.run_build(source)
    }

    /// Nodes at `offset` pixels below the container's top edge, with the
    /// default search bound.
    ///
    /// See [`PositionTable::locate_within`] for the fallback-search
    /// semantics.
    pub fn locate(&self, offset: f64) -> Option<Vec<N>> {
        self.table.locate(offset)
    }

    /// Nodes at `offset` pixels below the container's top edge, searching
    /// outward up to `max_radius` slots.
    ///
    /// See [`PositionTable::locate_within`].
    pub fn locate_within(&self, offset: f64, max_radius: usize) -> Option<Vec<N>> {
        self.table.locate_within(offset, max_radius)
    }

    /// The table produced by the most recent build.
    pub fn table(&self) -> &PositionTable<N> {
        &self.table
    }

    /// Raw page-relative extent recorded for `node` by the most recent
    /// build, or `None` if the node was not indexed.
    pub fn extent_of(&self, node: N) -> Option<VExtent> {
        self.extents.get(&node).copied()
    }

    /// Container handle the index was built over.
    pub fn container(&self) -> N {
        self.container
    }

    /// The configuration this index was constructed with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Container top captured at the most recent build, for callers
    /// converting page coordinates into container-relative offsets.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    fn run_build<S>(&mut self, source: &S) -> Result<(), IndexError>
    where
        S: ContentSource<Node = N>,
    {
        let container = source
            .extent(self.container)
            .ok_or(IndexError::InvalidContainer)?;
        if !container.is_finite() {
            return Err(IndexError::InvalidContainer);
        }

        let step = self.config.step();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Clamped non-negative; a table longer than usize::MAX is not representable anyway."
        )]
        let len = floor_to_i64(container.height() / step).max(0) as usize;

        let mut table = PositionTable::with_len(step, len);
        let mut extents = HashMap::new();
        let mut seen = HashSet::new();

        if len > 0 {
            if self.config.allow_text {
                let leaves = source.text_leaves(self.container);
                record_walk(
                    source,
                    &mut table,
                    &mut extents,
                    &mut seen,
                    container.top,
                    leaves,
                    true,
                );
            }
            if self.config.elements_enabled() {
                let elements = source.elements(self.container, &self.config.allow_elements);
                record_walk(
                    source,
                    &mut table,
                    &mut extents,
                    &mut seen,
                    container.top,
                    elements,
                    false,
                );
            }
        }

        table.sort_buckets_by(|node| {
            extents
                .get(node)
                .map(VExtent::height)
                .unwrap_or(f64::INFINITY)
        });

        self.origin = container.top;
        self.table = table;
        self.extents = extents;
        Ok(())
    }
}

/// Record one walk's candidates into the table.
///
/// `promote` replaces each candidate with its parent before recording, for
/// text leaves, which carry no geometry of their own. A node yielded by
/// several walks (or reached from several leaves) is recorded once per
/// build; a node rejected for degenerate geometry stays rejected for the
/// whole build, without retrying the geometry query.
fn record_walk<S, N>(
    source: &S,
    table: &mut PositionTable<N>,
    extents: &mut HashMap<N, VExtent>,
    seen: &mut HashSet<N>,
    origin: f64,
    walk: impl Iterator<Item = N>,
    promote: bool,
) where
    S: ContentSource<Node = N>,
    N: Copy + Eq + Hash + Debug,
{
    let Some(last) = table.len().checked_sub(1) else {
        return;
    };
    let step = table.resolution();
    for candidate in walk {
        let node = if promote {
            match source.parent(candidate) {
                Some(parent) => parent,
                None => continue,
            }
        } else {
            candidate
        };
        if !seen.insert(node) {
            continue;
        }
        let Some(extent) = source.extent(node) else {
            continue;
        };
        let height = extent.height();
        if !height.is_finite() || height <= 0.0 {
            continue;
        }
        let start = round_to_i64((extent.top - origin) / step).max(0);
        let end = round_to_i64((extent.bottom - origin) / step).min(last as i64);
        if start >= end {
            // Nodes whose span collapses under quantization occupy no slot.
            continue;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Both bounds are clamped to the table range above."
        )]
        let (start, end) = (start as usize, end as usize);
        for slot in start..=end {
            table.push(slot, node);
        }
        extents.insert(node, extent);
    }
}
