//! Module containing tests for the binning engine.
mod binning_sanity;
