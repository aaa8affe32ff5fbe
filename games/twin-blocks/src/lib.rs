use wasm_bindgen::prelude::*;
use twin_engine::*;

mod game;
mod keymap;
use game::TwinBlocks;

twin_web::export_game!(TwinBlocks, "twin-blocks");
