//! Bindings for driving the generator from a browser front end.

use std::num::TryFromIntError;

use itertools::Itertools;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::builder::PuzzleBuilder;
use crate::direction::Direction;
use crate::generator::{Generator, Puzzle};
use crate::highlight::HighlightMode;
use crate::location::Location;

fn set(target: &Object, key: &str, value: impl Into<JsValue>) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), &value.into()).map(|_| ())
}

fn to_js_number(value: usize) -> Result<u32, TryFromIntError> {
    u32::try_from(value)
}

fn js_error<E: ToString>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// A generated board held on the Rust side of the boundary.
#[wasm_bindgen]
pub struct WasmPuzzle {
    puzzle: Puzzle,
}

#[wasm_bindgen]
impl WasmPuzzle {
    /// Generate a board of `rows` by `cols` (clamped to the supported range) from one array of words per direction.
    ///
    /// Throws with the reasons joined if any word is rejected by [`PuzzleBuilder::add_word`].
    pub fn generate(rows: usize, cols: usize, horizontal: &Array, vertical: &Array, diagonal: &Array, bottom_up: &Array, top_down: &Array) -> Result<WasmPuzzle, JsValue> {
        let mut builder = PuzzleBuilder::with_dims(rows, cols);
        for (direction, list) in [
            (Direction::Horizontal, horizontal),
            (Direction::Vertical, vertical),
            (Direction::Diagonal, diagonal),
            (Direction::BottomUp, bottom_up),
            (Direction::TopDown, top_down),
        ] {
            for word in list.iter().filter_map(|value| value.as_string()) {
                builder.add_word(direction, &word);
            }
        }

        let request = builder.build().map_err(|reasons| js_error(reasons.iter().join("; ")))?;
        Ok(WasmPuzzle {
            puzzle: request.generate(&mut Generator::new()),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.puzzle.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.puzzle.grid.cols()
    }

    /// Suggested number of rows for the next board.
    pub fn recommended_rows(&self) -> usize {
        self.puzzle.recommended_dims.0.get()
    }

    /// Suggested number of columns for the next board.
    pub fn recommended_cols(&self) -> usize {
        self.puzzle.recommended_dims.1.get()
    }

    /// The letter at `(row, col)`, or an empty string off the board.
    pub fn letter(&self, row: usize, col: usize) -> String {
        self.puzzle.grid.letter(Location(row, col)).map(String::from).unwrap_or_default()
    }

    /// Every placement as a plain object with `word`, `direction`, `row`, `col`, `length` and `forced`.
    pub fn placements(&self) -> Result<Array, JsValue> {
        let out = Array::new();
        for placement in &self.puzzle.placements {
            let object = Object::new();
            set(&object, "word", placement.word.as_str())?;
            set(&object, "direction", placement.direction.as_ref())?;
            set(&object, "row", to_js_number(placement.anchor.0).map_err(js_error)?)?;
            set(&object, "col", to_js_number(placement.anchor.1).map_err(js_error)?)?;
            set(&object, "length", to_js_number(placement.length).map_err(js_error)?)?;
            set(&object, "forced", placement.forced)?;
            out.push(&object);
        }

        Ok(out)
    }

    /// How to draw `(row, col)`: an object with `highlighted`, `style`, `selected` and `letter`.
    ///
    /// See [`HighlightMode::from_selection`] for how `selected` and `show_solution` combine.
    pub fn highlight(&self, row: usize, col: usize, selected: Option<String>, show_solution: bool) -> Result<Object, JsValue> {
        let mode = HighlightMode::from_selection(selected.as_deref(), show_solution);

        let location = Location(row, col);
        let highlight = self.puzzle.resolve_cell(location, mode);
        let grid_letter = self.puzzle.grid.letter(location).unwrap_or(' ');

        let object = Object::new();
        set(&object, "highlighted", highlight.is_highlighted())?;
        set(&object, "style", highlight.style_class().map_or(JsValue::NULL, JsValue::from_str))?;
        set(&object, "selected", highlight.is_selected())?;
        set(&object, "letter", String::from(highlight.display_letter(grid_letter)))?;

        Ok(object)
    }
}
