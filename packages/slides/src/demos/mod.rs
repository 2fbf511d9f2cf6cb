//! One module per slide, plus the pieces a few slides share.

pub mod batching;
pub mod callback;
pub mod canvas;
pub mod cleanup;
pub mod context;
pub mod coroutine;
pub mod custom;
pub mod deferred;
pub mod effects;
pub mod files;
pub mod form;
pub mod future;
pub mod intro;
pub mod log;
pub mod memo;
pub mod optimistic;
pub mod reducer;
pub mod refs;
pub mod resource;
pub mod search;
pub mod state;
pub mod store;
pub mod transitions;
