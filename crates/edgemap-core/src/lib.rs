pub mod consts;
pub mod error;
pub mod field;
pub mod gradient;
pub mod gray;
pub mod io;
pub mod pipeline;
pub mod stats;
pub mod threshold;
