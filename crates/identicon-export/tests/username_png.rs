//! Integration test: run "username" through the full pipeline, encode to
//! PNG, decode it again and check every tile.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use identicon_pipeline::{CELL_SIZE, GRID_SIZE, IdenticonConfig, process_staged};
use image::Rgba;

#[test]
fn username_png_tiles_match_filtered_grid() {
    let state = process_staged("username", &IdenticonConfig::default());
    let png = identicon_export::to_png(&state.identicon()).expect("render should succeed");
    eprintln!("username.png: {} bytes", png.len());

    let img = image::load_from_memory(&png)
        .expect("output should decode")
        .to_rgba8();
    assert_eq!(img.dimensions(), (250, 250));

    let fill = Rgba([20, 196, 176, 255]);
    let painted: Vec<u32> = state.grid.iter().map(|c| c.index).collect();

    for index in 0..GRID_SIZE * GRID_SIZE {
        let x0 = (index % GRID_SIZE) * CELL_SIZE;
        let y0 = (index / GRID_SIZE) * CELL_SIZE;
        let expected = if painted.contains(&index) {
            fill
        } else {
            Rgba([0, 0, 0, 0])
        };
        // Corners and centre of the tile.
        for (x, y) in [
            (x0, y0),
            (x0 + CELL_SIZE - 1, y0),
            (x0, y0 + CELL_SIZE - 1),
            (x0 + CELL_SIZE - 1, y0 + CELL_SIZE - 1),
            (x0 + CELL_SIZE / 2, y0 + CELL_SIZE / 2),
        ] {
            assert_eq!(*img.get_pixel(x, y), expected, "tile {index} at ({x}, {y})");
        }
    }
}

#[test]
fn rows_are_left_right_symmetric() {
    for input in ["alice", "bob", "", "identicon"] {
        let state = process_staged(input, &IdenticonConfig::default());
        let img = identicon_export::rasterize(&state.identicon()).unwrap();
        for y in (0..250).step_by(25) {
            for x in 0..125 {
                assert_eq!(
                    img.get_pixel(x, y),
                    img.get_pixel(249 - x, y),
                    "{input:?} asymmetric at ({x}, {y})",
                );
            }
        }
    }
}
