// src/utils/mod.rs

pub mod de;
pub mod pagination;
pub mod random;
