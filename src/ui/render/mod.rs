mod all;
mod cards;
mod filters;
mod footer;
mod log;

use self::log::log;
use super::*;
use cards::cards;
use filters::filters;
use footer::footer;

pub use all::all as render;
