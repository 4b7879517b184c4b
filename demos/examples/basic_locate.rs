// Copyright 2025 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Plumbline: build a small document, query a few offsets.
//!
//! Run:
//! - `cargo run -p plumbline_demos --example basic_locate`

use kurbo::Rect;
use plumbline_content_tree::ContentTree;
use plumbline_index::{IndexConfig, PositionIndex};

fn main() {
    let mut tree = ContentTree::new();
    let root = tree.insert_element(None, "article", Rect::new(0.0, 0.0, 400.0, 160.0));

    let p1 = tree.insert_element(Some(root), "p", Rect::new(0.0, 10.0, 400.0, 40.0));
    tree.insert_text(p1, "A first paragraph.");
    let em = tree.insert_element(Some(p1), "em", Rect::new(60.0, 15.0, 180.0, 25.0));
    tree.insert_text(em, "emphasized");

    let p2 = tree.insert_element(Some(root), "p", Rect::new(0.0, 100.0, 400.0, 130.0));
    tree.insert_text(p2, "A second paragraph after a gap.");

    let config = IndexConfig {
        allow_elements: vec!["em".to_string()],
        ..Default::default()
    };
    let index = PositionIndex::build(&tree, root, config).unwrap();
    println!("{index:?}");

    for offset in [20.0, 35.0, 70.0, 110.0, 200.0] {
        match index.locate(offset) {
            Some(nodes) => {
                let tags: Vec<_> = nodes.iter().filter_map(|&n| tree.tag(n)).collect();
                println!("offset {offset:>5.1} -> {tags:?}");
            }
            None => println!("offset {offset:>5.1} -> not found"),
        }
    }
}
