#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `shandalar-rs` decodes the proprietary indexed-color image containers of
//! Microprose's Shandalar: multi-frame `.SPR` sprite sheets and the palette
//! layer of single-image `.PIC` files.
//!
pub use shandalar_internal::*;
