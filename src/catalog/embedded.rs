//! Embedded word catalog
//!
//! Catalog compiled into the binary at build time.

use crate::core::{CalendarKind, Category, FoodKind, PlaceKind};

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
