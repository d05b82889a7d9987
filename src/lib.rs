#![no_std]
extern crate alloc;

pub mod tessellation;
pub mod sampling;
pub mod path;
pub mod config;
pub mod playback;
pub mod axis;
pub mod scene;
pub mod preview;


#[doc(inline)]
pub use {
    tessellation::Point3,
    tessellation::tessellate,
    tessellation::flatten,
    tessellation::Arc,
    sampling::PointSource,
    sampling::RandomPoints,
    sampling::ScriptedPoints,
    path::PathModel,
    path::PathError,
    path::PathResult,
    config::PathConfig,
    playback::Playback,
    playback::visible_count,
    scene::draw_list,
    preview::Preview,
};
