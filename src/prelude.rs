pub use crate::{
    api::*,
    clap::*,
    dictionary::*,
    lang::*,
    word::*,
};

pub use clap::Parser;
pub use log::{info, warn, error, debug, trace};
pub use serde::{Serialize, Deserialize};
pub use chrono::NaiveDate;
pub use std::{
    collections::{HashMap, HashSet}, sync::Arc, path::{Path, PathBuf}, fmt, io::Error as IoError,
};

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
