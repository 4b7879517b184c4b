// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading-position tracking over a tall article with simulated scrolling.
//!
//! Run:
//! - `cargo run -p plumbline_demos --example reading_position`

use kurbo::Rect;
use plumbline_content_tree::{ContentTree, NodeId};
use plumbline_index::{IndexConfig, PositionIndex};

const ROW_H: f64 = 24.0;
const WIDTH: f64 = 640.0;

fn main() {
    let mut tree = ContentTree::new();
    let root = tree.insert_element(None, "article", Rect::ZERO);

    // 1000 paragraphs with a section break (blank stretch) every 100.
    let rows = 1000_usize;
    let mut ids: Vec<NodeId> = Vec::with_capacity(rows);
    let mut y = 0.0;
    for i in 0..rows {
        if i > 0 && i % 100 == 0 {
            y += 120.0;
        }
        let p = tree.insert_element(Some(root), "p", Rect::new(0.0, y, WIDTH, y + ROW_H));
        tree.insert_text(p, "lorem ipsum");
        ids.push(p);
        y += ROW_H;
    }
    tree.set_bounds(root, Rect::new(0.0, 0.0, WIDTH, y));

    // Pixel-precise table, and a coarse one sixteen times smaller.
    let fine = PositionIndex::build(&tree, root, IndexConfig::default()).unwrap();
    let coarse = PositionIndex::build(
        &tree,
        root,
        IndexConfig {
            resolution: 16.0,
            ..Default::default()
        },
    )
    .unwrap();
    println!("fine:   {} slots, {} occupied", fine.table().len(), fine.table().occupied());
    println!("coarse: {} slots, {} occupied", coarse.table().len(), coarse.table().occupied());

    // Simulate scroll positions; the offset under the viewport's midline is
    // the reading position.
    let viewport = 800.0;
    for scroll in [0.0, 1200.0, 2412.0, 12000.0, y - 10.0] {
        let midline = scroll + viewport / 2.0;
        let paragraph = fine
            .locate(midline)
            .and_then(|nodes| nodes.first().copied())
            .and_then(|n| ids.iter().position(|&p| p == n));
        match paragraph {
            Some(i) => println!("scroll {scroll:>8.1} -> reading paragraph {i}"),
            None => println!("scroll {scroll:>8.1} -> nothing nearby"),
        }
    }
}
