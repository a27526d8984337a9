//! Puzzle input parsing
//!
//! The input is a text blob of tile blocks separated by blank lines. Each
//! block starts with a `Tile <id>:` header followed by the tile's pixel
//! rows, `#` for set and `.` for unset. Parsing validates shape eagerly so
//! later stages can assume a uniform arena of square tiles.

use std::collections::HashSet;

use ndarray::Array2;

use crate::io::error::{Result, parse_error, structure_error};
use crate::spatial::tile::{Pixels, Tile, TileSet};

/// Minimum tile edge length; anything smaller has no interior to stitch
const MIN_TILE_SIDE: usize = 3;

struct Block {
    header_line: usize,
    id: u64,
    rows: Vec<(usize, Vec<u8>)>,
}

/// Parse a puzzle input into a tile arena
///
/// # Errors
///
/// Returns a parse error for malformed headers or pixel rows, and a
/// structural error for duplicate ids, non-square tiles, mismatched tile
/// sizes, or an empty input.
pub fn parse_tiles(input: &str) -> Result<TileSet> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for (number, raw_line) in input.lines().enumerate() {
        let line = number + 1;
        let text = raw_line.trim_end();

        if text.is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            continue;
        }

        if let Some(block) = current.as_mut() {
            block.rows.push((line, parse_row(text, line)?));
        } else {
            let id = parse_header(text, line)?;
            current = Some(Block {
                header_line: line,
                id,
                rows: Vec::new(),
            });
        }
    }
    if let Some(block) = current.take() {
        blocks.push(block);
    }

    build_tiles(blocks)
}

fn parse_header(text: &str, line: usize) -> Result<u64> {
    let id_text = text
        .strip_prefix("Tile ")
        .and_then(|rest| rest.strip_suffix(':'))
        .ok_or_else(|| parse_error(line, &format!("expected 'Tile <id>:', found '{text}'")))?;

    id_text
        .parse::<u64>()
        .map_err(|_| parse_error(line, &format!("invalid tile id '{id_text}'")))
}

fn parse_row(text: &str, line: usize) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| match ch {
            '#' => Ok(1),
            '.' => Ok(0),
            other => Err(parse_error(
                line,
                &format!("unexpected character '{other}' in pixel row"),
            )),
        })
        .collect()
}

fn build_tiles(blocks: Vec<Block>) -> Result<TileSet> {
    if blocks.is_empty() {
        return Err(structure_error(&"input contains no tiles"));
    }

    let mut ids = HashSet::with_capacity(blocks.len());
    let mut shared_side: Option<usize> = None;
    let mut tiles = Vec::with_capacity(blocks.len());

    for block in blocks {
        let side = block.rows.len();
        if side < MIN_TILE_SIDE {
            return Err(structure_error(&format!(
                "tile {} has {side} rows; tiles need at least {MIN_TILE_SIDE}",
                block.id
            )));
        }

        let mut flat = Vec::with_capacity(side * side);
        for (line, row) in &block.rows {
            if row.len() != side {
                return Err(parse_error(
                    *line,
                    &format!(
                        "tile {} row has {} pixels, expected {side} to match the row count",
                        block.id,
                        row.len()
                    ),
                ));
            }
            flat.extend_from_slice(row);
        }

        match shared_side {
            None => shared_side = Some(side),
            Some(expected) if expected != side => {
                return Err(structure_error(&format!(
                    "tile {} is {side} pixels wide but earlier tiles are {expected}",
                    block.id
                )));
            }
            Some(_) => {}
        }

        if !ids.insert(block.id) {
            return Err(structure_error(&format!(
                "duplicate tile id {} at line {}",
                block.id, block.header_line
            )));
        }

        let pixels: Pixels = Array2::from_shape_vec((side, side), flat)
            .map_err(|_| structure_error(&format!("tile {} pixel data is not square", block.id)))?;
        tiles.push(Tile::new(block.id, pixels));
    }

    Ok(TileSet::new(tiles))
}
