mod action_enum;
mod labels;

pub use action_enum::*;
