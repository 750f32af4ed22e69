mod fmt;
mod multicolor;
mod naming;
