pub mod compute;
pub mod constants;
pub mod entities;
pub mod error;
pub mod formation;
pub mod geometry;
pub mod input;
pub mod levels;
pub mod scene;
pub mod state_machine;
pub mod viewport;
