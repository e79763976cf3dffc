//! GRIB1のパラメーター表
//!
//! GRIB1のPDS（プロダクト定義節）に記録されたパラメーター番号を、
//! 略称と単位付きの説明に変換する表を提供する。
pub mod ecmwf_160;
pub mod tables;

pub use ecmwf_160::ecmwf_table_160;
pub use tables::{ParameterEntry, ParameterTable, TableError, TableResult};
